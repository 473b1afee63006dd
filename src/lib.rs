//! # lingua-widgets
//!
//! The two interactive widgets of a language-learning site: a tabbed
//! material feed and a multiple-choice quiz runner, with a terminal front-end.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lingua_widgets::{Error, Widgets};
//!
//! fn main() -> Result<(), Error> {
//!     let widgets = Widgets::from_json("feed.json", "quiz.json")?;
//!     widgets.run()?;
//!     Ok(())
//! }
//! ```
//!
//! The widgets themselves do not depend on the terminal. [`FeedController`]
//! and [`QuizView`] render into [`Node`] fragments whose bound [`Action`]s can
//! be dispatched by any host.

mod app;
mod data;
pub mod feed;
pub mod logging;
mod models;
pub mod quiz;
pub mod template;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::{App, Pane};
pub use data::{LoadError, load_feed_from_json, load_quiz_from_json, parse_feed, parse_quiz};
pub use feed::FeedController;
pub use models::{Answer, FeedItem, FeedSections, Question, QuizPayload, ResultBracket, Section};
pub use quiz::{QuizEngine, QuizError, QuizScreen, QuizState, QuizStatus, QuizView, ViewError};
pub use template::{Action, Node, QuizAction, TemplateError, TemplateRegistry, Templates};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load payload: {0}")]
    Load(#[from] LoadError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Quiz error: {0}")]
    View(#[from] ViewError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Both widgets, ready to run in the terminal.
pub struct Widgets {
    app: App,
}

impl Widgets {
    pub fn new(sections: FeedSections, quiz: QuizPayload) -> Result<Self, Error> {
        Ok(Self {
            app: App::from_payloads(sections, quiz)?,
        })
    }

    /// Load the feed and quiz payloads from JSON files.
    pub fn from_json<F: AsRef<Path>, Q: AsRef<Path>>(feed: F, quiz: Q) -> Result<Self, Error> {
        let sections = load_feed_from_json(feed)?;
        let quiz = load_quiz_from_json(quiz)?;
        Self::new(sections, quiz)
    }

    /// Run until the user quits.
    pub fn run(mut self) -> Result<(), Error> {
        let mut guard = terminal::TerminalGuard::enter()?;
        run_event_loop(guard.terminal(), &mut self.app)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::WidgetTerminal, app: &mut App) -> Result<(), Error> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code)? {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> Result<bool, Error> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(true),
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_pane();
            return Ok(false);
        }
        _ => {}
    }

    match app.pane {
        Pane::Feed => handle_feed_input(app, key)?,
        Pane::Quiz => handle_quiz_input(app, key)?,
    }
    Ok(false)
}

fn handle_feed_input(app: &mut App, key: KeyCode) -> Result<(), ViewError> {
    match key {
        KeyCode::Left | KeyCode::Char('h') => app.previous_tab(),
        KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
        KeyCode::Char(c @ '1'..='9') => app.click_tab(c as usize - '1' as usize),
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_feed_down();
            Ok(())
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_feed_up();
            Ok(())
        }
        _ => Ok(()),
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> Result<(), ViewError> {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.focus_next();
            Ok(())
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.focus_previous();
            Ok(())
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widgets() -> Widgets {
        let sections = parse_feed(
            r#"{"phrasebook": [{"title": "At the airport", "url": "/phrasebook/airport", "img_url": null, "views": 3}]}"#,
        )
        .unwrap();
        let quiz = parse_quiz(
            r#"{"questions": [
                {"content": "Q1", "answers": [{"content": "yes", "correct": true}, {"content": "no", "correct": false}]},
                {"content": "Q2", "answers": [{"content": "yes", "correct": false}, {"content": "no", "correct": true}]}
            ], "results": [{"min_value": 0, "max_value": 2, "content": "Thanks"}]}"#,
        )
        .unwrap();
        Widgets::new(sections, quiz).unwrap()
    }

    #[test]
    fn test_quit_keys() {
        let mut widgets = widgets();
        assert!(handle_input(widgets.app_mut(), KeyCode::Char('q')).unwrap());
        assert!(!handle_input(widgets.app_mut(), KeyCode::Char('j')).unwrap());
    }

    #[test]
    fn test_number_keys_select_tabs() {
        let mut widgets = widgets();
        handle_input(widgets.app_mut(), KeyCode::Char('2')).unwrap();
        assert_eq!(widgets.app().feed().active_section(), Section::Phrasebook);
        assert_eq!(widgets.app().feed().list().children.len(), 1);

        handle_input(widgets.app_mut(), KeyCode::Right).unwrap();
        assert_eq!(widgets.app().feed().active_section(), Section::Articles);
    }

    #[test]
    fn test_keyboard_quiz_run() {
        let mut widgets = widgets();
        let app = widgets.app_mut();
        handle_input(app, KeyCode::Tab).unwrap();

        // start, pick "yes", next, pick "yes" (wrong), finish
        for key in [
            KeyCode::Enter,
            KeyCode::Enter,
            KeyCode::Enter,
            KeyCode::Enter,
            KeyCode::Enter,
        ] {
            handle_input(app, key).unwrap();
        }

        assert_eq!(app.quiz().screen(), QuizScreen::Result);
        assert_eq!(app.quiz().engine().score(), 1);
        assert_eq!(
            app.quiz().main().find("description-result").map(|n| n.text.as_str()),
            Some("Thanks")
        );
    }
}
