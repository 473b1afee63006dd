use crate::feed::FeedController;
use crate::models::{FeedSections, QuizPayload};
use crate::quiz::{QuizEngine, QuizView, ViewError};
use crate::template::{Action, TemplateError, TemplateRegistry};

/// Widget that receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Feed,
    Quiz,
}

pub struct App {
    pub pane: Pane,
    feed: FeedController,
    quiz: QuizView,
    cursor: usize,
    feed_scroll: usize,
}

impl App {
    pub fn new(feed: FeedController, quiz: QuizView) -> Self {
        Self {
            pane: Pane::Feed,
            feed,
            quiz,
            cursor: 0,
            feed_scroll: 0,
        }
    }

    /// Builds both widgets from their payloads with the built-in templates.
    pub fn from_payloads(sections: FeedSections, quiz: QuizPayload) -> Result<Self, TemplateError> {
        let templates = TemplateRegistry::builtin();
        let feed = FeedController::new(sections, templates.clone())?;
        let engine = QuizEngine::new(quiz.questions, quiz.results);
        Ok(Self::new(feed, QuizView::new(engine, templates, quiz.title)))
    }

    pub fn feed(&self) -> &FeedController {
        &self.feed
    }

    pub fn quiz(&self) -> &QuizView {
        &self.quiz
    }

    pub fn feed_scroll(&self) -> usize {
        self.feed_scroll
    }

    pub fn toggle_pane(&mut self) {
        self.pane = match self.pane {
            Pane::Feed => Pane::Quiz,
            Pane::Quiz => Pane::Feed,
        };
    }

    /// Routes a clicked node's action to the widget that owns it.
    pub fn dispatch(&mut self, action: Action) -> Result<(), ViewError> {
        match action {
            Action::SelectSection(section) => {
                self.feed.select(section)?;
                self.feed_scroll = 0;
            }
            Action::Quiz(action) => {
                self.quiz.dispatch(action)?;
                self.cursor = 0;
            }
        }
        Ok(())
    }

    /// Clicks the tab button at `index` in the tab bar; out of range does nothing.
    pub fn click_tab(&mut self, index: usize) -> Result<(), ViewError> {
        let action = self
            .feed
            .tab_bar()
            .children
            .get(index)
            .and_then(|tab| tab.action);
        match action {
            Some(action) => self.dispatch(action),
            None => Ok(()),
        }
    }

    pub fn next_tab(&mut self) -> Result<(), ViewError> {
        let (active, count) = self.active_tab();
        self.click_tab((active + 1) % count)
    }

    pub fn previous_tab(&mut self) -> Result<(), ViewError> {
        let (active, count) = self.active_tab();
        self.click_tab((active + count - 1) % count)
    }

    /// Position of the active tab and the number of tabs.
    fn active_tab(&self) -> (usize, usize) {
        let bar = self.feed.tab_bar();
        let active = bar
            .children
            .iter()
            .position(|tab| tab.has_class("active"))
            .unwrap_or(0);
        (active, bar.children.len().max(1))
    }

    pub fn scroll_feed_down(&mut self) {
        let max_scroll = self.feed.list().children.len().saturating_sub(1);
        self.feed_scroll = (self.feed_scroll + 1).min(max_scroll);
    }

    pub fn scroll_feed_up(&mut self) {
        self.feed_scroll = self.feed_scroll.saturating_sub(1);
    }

    /// The clickable quiz element the cursor is on.
    pub fn focused_action(&self) -> Option<Action> {
        self.quiz.main().actions().get(self.cursor).copied()
    }

    pub fn focus_next(&mut self) {
        let count = self.quiz.main().actions().len();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn focus_previous(&mut self) {
        let count = self.quiz.main().actions().len();
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    /// Clicks the focused quiz element.
    pub fn activate(&mut self) -> Result<(), ViewError> {
        match self.focused_action() {
            Some(action) => self.dispatch(action),
            None => Ok(()),
        }
    }
}
