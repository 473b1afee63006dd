use thiserror::Error;
use tracing::warn;

use crate::models::{Question, ResultBracket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("answer {index} is out of range for question {question} with {len} answers")]
    AnswerOutOfRange {
        question: usize,
        index: usize,
        len: usize,
    },

    #[error("the quiz is already complete")]
    Completed,
}

/// Mutable progress of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizState {
    /// 1-based; one past the last question once the quiz is complete.
    pub current_question_index: usize,
    pub score: u32,
}

impl Default for QuizState {
    fn default() -> Self {
        Self {
            current_question_index: 1,
            score: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStatus {
    InProgress(usize),
    Completed,
}

pub struct QuizEngine {
    questions: Vec<Question>,
    results: Vec<ResultBracket>,
    state: QuizState,
}

impl QuizEngine {
    pub fn new(questions: Vec<Question>, results: Vec<ResultBracket>) -> Self {
        warn_on_bracket_layout(&results);
        Self {
            questions,
            results,
            state: QuizState::default(),
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn current_question_index(&self) -> usize {
        self.state.current_question_index
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// The question being answered, or `None` once the quiz is complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.state
            .current_question_index
            .checked_sub(1)
            .and_then(|index| self.questions.get(index))
    }

    pub fn is_complete(&self) -> bool {
        self.state.current_question_index > self.questions.len()
    }

    pub fn status(&self) -> QuizStatus {
        if self.is_complete() {
            QuizStatus::Completed
        } else {
            QuizStatus::InProgress(self.state.current_question_index)
        }
    }

    /// Whether answer `answer_index` (0-based) of the current question is correct.
    pub fn is_answer_correct(&self, answer_index: usize) -> Result<bool, QuizError> {
        let question = self.current_question().ok_or(QuizError::Completed)?;
        question
            .answers
            .get(answer_index)
            .map(|answer| answer.correct)
            .ok_or(QuizError::AnswerOutOfRange {
                question: self.state.current_question_index,
                index: answer_index,
                len: question.answers.len(),
            })
    }

    /// Adds one point. Callers record at most once per question.
    pub fn record_correct_answer(&mut self) {
        self.state.score += 1;
    }

    /// Moves to the next question whether or not the current one was answered.
    pub fn advance(&mut self) {
        self.state.current_question_index += 1;
    }

    /// First bracket, in supplied order, containing the current score.
    pub fn result(&self) -> Option<&ResultBracket> {
        self.results
            .iter()
            .find(|bracket| bracket.contains(self.state.score))
    }
}

fn warn_on_bracket_layout(results: &[ResultBracket]) {
    for (i, bracket) in results.iter().enumerate() {
        if bracket.min_value > bracket.max_value {
            warn!(
                min = bracket.min_value,
                max = bracket.max_value,
                "result bracket {} can never match",
                i
            );
        }
        for (j, other) in results.iter().enumerate().skip(i + 1) {
            if bracket.min_value <= other.max_value && other.min_value <= bracket.max_value {
                warn!("result brackets {} and {} overlap; the first one wins", i, j);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answer;

    fn question(correct: &[bool]) -> Question {
        Question {
            content: "Pick one".to_string(),
            answers: correct
                .iter()
                .enumerate()
                .map(|(i, &correct)| Answer {
                    content: format!("option {}", i + 1),
                    correct,
                })
                .collect(),
        }
    }

    fn bracket(min_value: u32, max_value: u32, content: &str) -> ResultBracket {
        ResultBracket {
            min_value,
            max_value,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let engine = QuizEngine::new(vec![question(&[true, false])], vec![]);
        assert_eq!(engine.state(), QuizState { current_question_index: 1, score: 0 });
        assert_eq!(engine.status(), QuizStatus::InProgress(1));
        assert!(!engine.is_complete());
        assert!(engine.current_question().is_some());
    }

    #[test]
    fn test_advancing_total_times_completes() {
        let mut engine = QuizEngine::new(
            vec![question(&[true]), question(&[true]), question(&[true])],
            vec![],
        );
        for step in 1..=3 {
            assert!(!engine.is_complete());
            assert_eq!(engine.current_question_index(), step);
            engine.advance();
        }
        assert!(engine.is_complete());
        assert_eq!(engine.status(), QuizStatus::Completed);
        assert!(engine.current_question().is_none());
    }

    #[test]
    fn test_empty_quiz_is_complete() {
        let engine = QuizEngine::new(vec![], vec![]);
        assert!(engine.is_complete());
        assert_eq!(engine.is_answer_correct(0), Err(QuizError::Completed));
    }

    #[test]
    fn test_answer_lookup() {
        let mut engine = QuizEngine::new(
            vec![question(&[false, true]), question(&[true, false, false])],
            vec![],
        );
        assert_eq!(engine.is_answer_correct(0), Ok(false));
        assert_eq!(engine.is_answer_correct(1), Ok(true));

        engine.advance();
        assert_eq!(engine.is_answer_correct(0), Ok(true));
        assert_eq!(engine.is_answer_correct(2), Ok(false));
    }

    #[test]
    fn test_out_of_range_answer_leaves_state_alone() {
        let engine = QuizEngine::new(vec![question(&[false, true])], vec![]);
        let before = engine.state();
        assert_eq!(
            engine.is_answer_correct(2),
            Err(QuizError::AnswerOutOfRange {
                question: 1,
                index: 2,
                len: 2
            })
        );
        assert_eq!(engine.state(), before);
    }

    #[test]
    fn test_lookup_after_completion_fails() {
        let mut engine = QuizEngine::new(vec![question(&[true])], vec![]);
        engine.advance();
        assert_eq!(engine.is_answer_correct(0), Err(QuizError::Completed));
    }

    #[test]
    fn test_all_correct_scores_every_question() {
        let mut engine = QuizEngine::new(
            vec![
                question(&[true, false]),
                question(&[false, true]),
                question(&[true, false]),
            ],
            vec![],
        );
        for choice in [0, 1, 0] {
            if engine.is_answer_correct(choice).unwrap() {
                engine.record_correct_answer();
            }
            engine.advance();
        }
        assert_eq!(engine.score(), 3);
        assert!(engine.is_complete());
    }

    #[test]
    fn test_result_uses_first_matching_bracket() {
        let mut engine = QuizEngine::new(
            vec![question(&[true]), question(&[true])],
            vec![bracket(0, 1, "Low"), bracket(2, 3, "High")],
        );
        engine.record_correct_answer();
        engine.record_correct_answer();
        assert_eq!(engine.result().map(|b| b.content.as_str()), Some("High"));
    }

    #[test]
    fn test_overlapping_brackets_prefer_supplied_order() {
        let mut engine = QuizEngine::new(
            vec![question(&[true])],
            vec![bracket(0, 5, "Wide"), bracket(1, 1, "Exact")],
        );
        engine.record_correct_answer();
        assert_eq!(engine.result().map(|b| b.content.as_str()), Some("Wide"));
    }

    #[test]
    fn test_no_bracket_matches() {
        let engine = QuizEngine::new(vec![question(&[true])], vec![bracket(1, 2, "Some")]);
        assert!(engine.result().is_none());
    }
}
