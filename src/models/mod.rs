mod feed;
mod quiz;

pub use feed::{FeedItem, FeedSections, Section};
pub use quiz::{Answer, Question, QuizPayload, ResultBracket};
