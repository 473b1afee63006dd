use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Answer {
    pub content: String,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub content: String,
    pub answers: Vec<Answer>,
}

/// Score range mapped to feedback text. Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResultBracket {
    pub min_value: u32,
    pub max_value: u32,
    pub content: String,
}

impl ResultBracket {
    pub fn contains(&self, score: u32) -> bool {
        self.min_value <= score && score <= self.max_value
    }
}

/// Everything a quiz page embeds for the quiz widget.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizPayload {
    #[serde(default)]
    pub title: Option<String>,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub results: Vec<ResultBracket>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_bounds_are_inclusive() {
        let bracket = ResultBracket {
            min_value: 2,
            max_value: 3,
            content: "High".to_string(),
        };
        assert!(!bracket.contains(1));
        assert!(bracket.contains(2));
        assert!(bracket.contains(3));
        assert!(!bracket.contains(4));
    }

    #[test]
    fn test_payload_ignores_extra_fields() {
        let json = r#"{
            "title": "Past Simple",
            "views": 10,
            "questions": [
                {"number": 1, "content": "I ___ home.", "answers": [
                    {"content": "went", "correct": true},
                    {"content": "go", "correct": false}
                ]}
            ],
            "results": [{"min_value": 0, "max_value": 1, "content": "Done"}]
        }"#;
        let payload: QuizPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.title.as_deref(), Some("Past Simple"));
        assert_eq!(payload.questions.len(), 1);
        assert!(payload.questions[0].answers[0].correct);
        assert_eq!(payload.results[0].content, "Done");
    }
}
