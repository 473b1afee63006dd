//! Detached, role-addressable fragments and the templates they are cloned from.
//!
//! Widgets never build markup by hand. They clone a template by id, look up
//! the sub-elements they need by role and fill them in. Click handlers are
//! stored on the nodes as [`Action`] values so the host can dispatch them.

mod node;
mod registry;

use thiserror::Error;

pub use node::{Action, Node, QuizAction};
pub use registry::{
    TemplateRegistry, ANSWER_ITEM_TEMPLATE, FEED_ITEM_TEMPLATE, QUESTION_TEMPLATE,
    TEST_RESULT_TEMPLATE,
};

/// Source of fresh template copies.
pub trait Templates {
    /// Returns a detached copy of the template registered under `id`.
    fn clone_template(&self, id: &str) -> Result<Node, TemplateError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("no template registered with id '{0}'")]
    UnknownTemplate(String),

    #[error("fragment '{fragment}' has no element with role '{role}'")]
    MissingRole { fragment: String, role: String },
}
