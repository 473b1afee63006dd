use std::collections::HashMap;

use super::{Node, QuizAction, TemplateError, Templates};

pub const FEED_ITEM_TEMPLATE: &str = "feed-item-template";
pub const QUESTION_TEMPLATE: &str = "question-template";
pub const ANSWER_ITEM_TEMPLATE: &str = "answer-item-template";
pub const TEST_RESULT_TEMPLATE: &str = "test-result-template";

/// In-memory template store.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Node>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the templates both widgets render with.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(FEED_ITEM_TEMPLATE, feed_item());
        registry.register(QUESTION_TEMPLATE, question());
        registry.register(ANSWER_ITEM_TEMPLATE, answer_item());
        registry.register(TEST_RESULT_TEMPLATE, test_result());
        registry
    }

    /// Registers `template` under `id`, replacing any previous one.
    pub fn register(&mut self, id: &str, template: Node) {
        self.templates.insert(id.to_string(), template);
    }
}

impl Templates for TemplateRegistry {
    fn clone_template(&self, id: &str) -> Result<Node, TemplateError> {
        self.templates
            .get(id)
            .cloned()
            .ok_or_else(|| TemplateError::UnknownTemplate(id.to_string()))
    }
}

fn feed_item() -> Node {
    Node::new("feed-item")
        .with_class("feed-item")
        .with_child(
            Node::new("feed-item-header")
                .with_class("feed-item-header")
                .with_child(Node::new("activity-views").with_class("activity-views")),
        )
        .with_child(
            Node::new("feed-item-content-link")
                .with_class("feed-item-content-link")
                .with_child(Node::new("feed-item-content").with_class("feed-item-content")),
        )
        .with_child(Node::new("info-tape").with_class("info-tape"))
}

fn question() -> Node {
    Node::new("question")
        .with_child(Node::new("question-number"))
        .with_child(Node::new("question-title"))
        .with_child(Node::new("answers"))
        .with_child(
            Node::new("submit-button")
                .with_class("button")
                .with_text("Next")
                .with_action(QuizAction::Submit)
                .hidden(),
        )
}

fn answer_item() -> Node {
    Node::new("answer-item")
        .with_class("answer-item")
        .with_child(Node::new("answer-counter").with_class("answer-counter"))
        .with_child(Node::new("answer-title").with_class("answer-title"))
        .with_child(Node::new("answer-icon").with_class("answer-icon"))
}

fn test_result() -> Node {
    Node::new("test-result")
        .with_child(Node::new("your-result").with_text("Your result: "))
        .with_child(Node::new("description-result"))
}
