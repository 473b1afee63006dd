use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::template::{Action, Node, QuizAction};

use super::text_of;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let main = app.quiz().main();
    let focused = app.focused_action();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], text_of(main, "question-number"));
    render_question_text(frame, chunks[1], text_of(main, "question-title"));
    if let Some(answers) = main.find("answers") {
        render_answers(frame, chunks[2], answers, focused);
    }
    if let Some(button) = main.find("submit-button") {
        render_submit(frame, chunks[3], button, focused);
    }
}

fn render_progress(frame: &mut Frame, area: Rect, progress: &str) {
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_answers(frame: &mut Frame, area: Rect, answers: &Node, focused: Option<Action>) {
    let mut lines: Vec<Line> = Vec::with_capacity(answers.children.len() * 2);

    for row in &answers.children {
        let is_focused = row.action.is_some() && row.action == focused;
        let style = if is_focused {
            Style::default().fg(Color::Cyan).bold()
        } else if row.has_class("selected") {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_focused { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            icon(row),
            Span::styled(format!("{:3}", text_of(row, "answer-counter")), style),
            Span::styled(text_of(row, "answer-title").to_string(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn icon(row: &Node) -> Span<'static> {
    match row.find("answer-icon") {
        Some(node) if node.has_class("fa-check") => {
            Span::styled("✓ ", Style::default().fg(Color::Green))
        }
        Some(node) if node.has_class("fa-times") => {
            Span::styled("✗ ", Style::default().fg(Color::Red))
        }
        _ => Span::raw("  "),
    }
}

fn render_submit(frame: &mut Frame, area: Rect, button: &Node, focused: Option<Action>) {
    if button.hidden {
        return;
    }

    let style = if focused == Some(Action::Quiz(QuizAction::Submit)) {
        Style::default().fg(Color::Black).bg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Cyan)
    };
    let widget = Paragraph::new(Span::styled(format!(" {} ", button.text), style))
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
