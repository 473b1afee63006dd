use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::{FeedSections, QuizPayload, Section};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must contain at least one question", path.display())]
    NoQuestions { path: PathBuf },
}

/// Loads the feed payload: an object mapping section keys to item lists.
pub fn load_feed_from_json<P: AsRef<Path>>(path: P) -> Result<FeedSections, LoadError> {
    let path = path.as_ref();
    let content = read(path)?;
    parse_feed(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the quiz payload. A quiz without questions is rejected.
pub fn load_quiz_from_json<P: AsRef<Path>>(path: P) -> Result<QuizPayload, LoadError> {
    let path = path.as_ref();
    let content = read(path)?;
    let payload = parse_quiz(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if payload.questions.is_empty() {
        return Err(LoadError::NoQuestions {
            path: path.to_path_buf(),
        });
    }

    Ok(payload)
}

pub fn parse_feed(json: &str) -> Result<FeedSections, serde_json::Error> {
    let sections: FeedSections = serde_json::from_str(json)?;
    for key in sections.keys() {
        if Section::from_key(key).is_none() {
            debug!(section = %key, "feed payload has a section without a tab");
        }
    }
    Ok(sections)
}

pub fn parse_quiz(json: &str) -> Result<QuizPayload, serde_json::Error> {
    serde_json::from_str(json)
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn payload_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_feed() {
        let json = r#"{
            "topics": [{"title": "Weather", "url": "/topics/weather", "img_url": null, "views": 5}],
            "tests": []
        }"#;
        let sections = parse_feed(json).unwrap();
        assert_eq!(sections["topics"].len(), 1);
        assert!(sections["tests"].is_empty());
        assert!(!sections.contains_key("articles"));
    }

    #[test]
    fn test_load_feed() {
        let file = payload_file(
            r#"{"articles": [{"title": "Get", "url": "/articles/get", "img_url": null, "views": 2}]}"#,
        );
        let sections = load_feed_from_json(file.path()).unwrap();
        assert_eq!(sections["articles"][0].title, "Get");
    }

    #[test]
    fn test_load_quiz_rejects_empty() {
        let file = payload_file(r#"{"questions": [], "results": []}"#);
        let err = load_quiz_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::NoQuestions { .. }));
    }

    #[test]
    fn test_load_quiz() {
        let file = payload_file(
            r#"{"questions": [{"content": "2 + 2?", "answers": [{"content": "4", "correct": true}]}]}"#,
        );
        let payload = load_quiz_from_json(file.path()).unwrap();
        assert_eq!(payload.questions.len(), 1);
        assert!(payload.results.is_empty());
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("feed.json");
        let err = load_feed_from_json(&missing).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains(&missing.display().to_string()));

        let file = payload_file("{ not json");
        let err = load_feed_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }
}
