mod loader;

pub use loader::{LoadError, load_feed_from_json, load_quiz_from_json, parse_feed, parse_quiz};
