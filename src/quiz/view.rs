use thiserror::Error;
use tracing::{debug, info};

use crate::template::{
    ANSWER_ITEM_TEMPLATE, Action, Node, QUESTION_TEMPLATE, QuizAction, TEST_RESULT_TEMPLATE,
    TemplateError, TemplateRegistry, Templates,
};

use super::{QuizEngine, QuizError};

const CORRECT_ICON: &str = "fa fa-check";
const WRONG_ICON: &str = "fa fa-times";
const SELECTED_CLASS: &str = "selected";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Which fragment the main content area currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScreen {
    Intro,
    Question,
    Result,
}

/// Renders a [`QuizEngine`] and feeds clicks back into it.
///
/// Each click applies only to the screen that shows it: start on the intro,
/// answer picks and submit on a question. Anywhere else it is ignored and
/// returns `Ok(())`. Errors are left for invalid input on the right screen
/// and for template failures.
pub struct QuizView<T = TemplateRegistry> {
    engine: QuizEngine,
    templates: T,
    main: Node,
    screen: QuizScreen,
    /// Set once an answer of the current question was picked; rows are locked after that.
    answered: bool,
}

impl<T: Templates> QuizView<T> {
    pub fn new(engine: QuizEngine, templates: T, title: Option<String>) -> Self {
        let mut main = Node::new("main-content");
        main.replace_children(vec![intro(title.as_deref(), engine.total_questions())]);

        Self {
            engine,
            templates,
            main,
            screen: QuizScreen::Intro,
            answered: false,
        }
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub fn screen(&self) -> QuizScreen {
        self.screen
    }

    /// The main content area.
    pub fn main(&self) -> &Node {
        &self.main
    }

    pub fn is_submit_visible(&self) -> bool {
        self.main
            .find("submit-button")
            .is_some_and(|button| !button.hidden)
    }

    /// Routes the action bound to a clicked node.
    pub fn dispatch(&mut self, action: QuizAction) -> Result<(), ViewError> {
        match action {
            QuizAction::StartQuiz => self.start(),
            QuizAction::SelectAnswer(index) => self.select_answer(index),
            QuizAction::Submit => self.submit(),
        }
    }

    /// Swaps the intro for the question layout and shows the first question.
    pub fn start(&mut self) -> Result<(), ViewError> {
        if self.screen != QuizScreen::Intro {
            return Ok(());
        }

        let layout = self.templates.clone_template(QUESTION_TEMPLATE)?;
        self.main.replace_children(vec![layout]);
        self.screen = QuizScreen::Question;

        if self.engine.is_complete() {
            self.render_result()
        } else {
            self.render_question()
        }
    }

    /// Renders the current question with one clickable row per answer.
    pub fn render_question(&mut self) -> Result<(), ViewError> {
        let question = self.engine.current_question().ok_or(QuizError::Completed)?;

        let mut rows = Vec::with_capacity(question.answers.len());
        for (index, answer) in question.answers.iter().enumerate() {
            let mut row = self.templates.clone_template(ANSWER_ITEM_TEMPLATE)?;
            row.set_attribute("answer", index.to_string());
            row.require_mut("answer-counter")?.text = format!("{})", index + 1);
            row.require_mut("answer-title")?.text = answer.content.clone();
            row.action = Some(QuizAction::SelectAnswer(index).into());
            rows.push(row);
        }

        let header = format!(
            "Question {}/{}",
            self.engine.current_question_index(),
            self.engine.total_questions()
        );
        let content = question.content.clone();

        self.main.require_mut("question-number")?.text = header;
        self.main.require_mut("question-title")?.text = content;
        self.main.require_mut("answers")?.replace_children(rows);
        self.main.require_mut("submit-button")?.hidden = true;
        self.answered = false;

        debug!(
            question = self.engine.current_question_index(),
            "rendered question"
        );
        Ok(())
    }

    /// Scores the picked answer and reveals the answer key.
    ///
    /// Only the first pick of a question counts; later picks are ignored.
    pub fn select_answer(&mut self, index: usize) -> Result<(), ViewError> {
        if self.screen != QuizScreen::Question || self.answered {
            debug!(answer = index, "answer selection ignored");
            return Ok(());
        }

        let correct = self.engine.is_answer_correct(index)?;

        let mut marks = Vec::new();
        for row in &self.main.require("answers")?.children {
            if let Some(Action::Quiz(QuizAction::SelectAnswer(row_index))) = row.action {
                marks.push(self.engine.is_answer_correct(row_index)?);
            }
        }

        if correct {
            self.engine.record_correct_answer();
        }
        debug!(answer = index, correct, score = self.engine.score(), "answer selected");

        let answers = self.main.require_mut("answers")?;
        for (row, is_correct) in answers.children.iter_mut().zip(marks) {
            row.require_mut("answer-counter")?.text.clear();
            row.require_mut("answer-icon")?
                .add_class(if is_correct { CORRECT_ICON } else { WRONG_ICON });
            if row.action == Some(Action::Quiz(QuizAction::SelectAnswer(index))) {
                row.add_class(SELECTED_CLASS);
            }
            row.action = None;
        }

        self.main.require_mut("submit-button")?.hidden = false;
        self.answered = true;
        Ok(())
    }

    /// Moves past the current question and shows the next one or the result.
    pub fn submit(&mut self) -> Result<(), ViewError> {
        if self.screen != QuizScreen::Question {
            debug!(screen = ?self.screen, "submit ignored");
            return Ok(());
        }

        self.engine.advance();
        if self.engine.is_complete() {
            self.render_result()
        } else {
            self.render_question()
        }
    }

    fn render_result(&mut self) -> Result<(), ViewError> {
        let mut fragment = self.templates.clone_template(TEST_RESULT_TEMPLATE)?;
        let score = self.engine.score();

        fragment
            .require_mut("your-result")?
            .text
            .push_str(&score.to_string());
        fragment.require_mut("description-result")?.text = self
            .engine
            .result()
            .map(|bracket| bracket.content.clone())
            .unwrap_or_default();

        self.main.replace_children(vec![fragment]);
        self.screen = QuizScreen::Result;
        self.answered = false;

        info!(
            score,
            total = self.engine.total_questions(),
            "quiz complete"
        );
        Ok(())
    }
}

fn intro(title: Option<&str>, total: usize) -> Node {
    Node::new("quiz-intro")
        .with_child(Node::new("quiz-title").with_text(title.unwrap_or("Quiz")))
        .with_child(Node::new("quiz-length").with_text(format!("{} questions", total)))
        .with_child(
            Node::new("test-start")
                .with_class("button")
                .with_text("Start")
                .with_action(QuizAction::StartQuiz),
        )
}
