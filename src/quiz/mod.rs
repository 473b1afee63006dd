//! Multiple-choice quiz runner.
//!
//! [`QuizEngine`] owns progression and scoring. [`QuizView`] renders the
//! engine into fragments and turns clicks back into engine calls.

mod engine;
mod view;

pub use engine::{QuizEngine, QuizError, QuizState, QuizStatus};
pub use view::{QuizScreen, QuizView, ViewError};
