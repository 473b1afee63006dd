use std::collections::BTreeMap;

use crate::models::Section;

use super::TemplateError;

/// Click handler bound to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Feed tab button.
    SelectSection(Section),
    Quiz(QuizAction),
}

/// Clicks handled by the quiz view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    StartQuiz,
    SelectAnswer(usize),
    Submit,
}

impl From<QuizAction> for Action {
    fn from(action: QuizAction) -> Self {
        Action::Quiz(action)
    }
}

/// A fragment element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub role: String,
    pub classes: Vec<String>,
    pub text: String,
    pub href: Option<String>,
    pub background_image: Option<String>,
    pub hidden: bool,
    pub attributes: BTreeMap<String, String>,
    pub action: Option<Action>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_action(mut self, action: impl Into<Action>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Depth-first search for the first element with `role`, starting at `self`.
    pub fn find(&self, role: &str) -> Option<&Node> {
        if self.role == role {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(role))
    }

    pub fn find_mut(&mut self, role: &str) -> Option<&mut Node> {
        if self.role == role {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(role))
    }

    /// Like [`Node::find_mut`], but a missing role is an error.
    pub fn require_mut(&mut self, role: &str) -> Result<&mut Node, TemplateError> {
        let fragment = self.role.clone();
        self.find_mut(role).ok_or(TemplateError::MissingRole {
            fragment,
            role: role.to_string(),
        })
    }

    pub fn require(&self, role: &str) -> Result<&Node, TemplateError> {
        self.find(role).ok_or_else(|| TemplateError::MissingRole {
            fragment: self.role.clone(),
            role: role.to_string(),
        })
    }

    /// Adds each whitespace-separated class that is not already present.
    pub fn add_class(&mut self, classes: &str) {
        for class in classes.split_whitespace() {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Swaps the whole child list in one step.
    pub fn replace_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    /// Actions of all visible nodes, in document order. Hidden subtrees are skipped.
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.collect_actions(&mut actions);
        actions
    }

    fn collect_actions(&self, actions: &mut Vec<Action>) {
        if self.hidden {
            return;
        }
        if let Some(action) = self.action {
            actions.push(action);
        }
        for child in &self.children {
            child.collect_actions(actions);
        }
    }
}
