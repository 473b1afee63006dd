use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::template::{Action, QuizAction};

use super::text_of;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let main = app.quiz().main();

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(area);

    let start_style = if app.focused_action() == Some(Action::Quiz(QuizAction::StartQuiz)) {
        Style::default().fg(Color::Green).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            text_of(main, "quiz-title").to_uppercase(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            text_of(main, "quiz-length").to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ {} ]", text_of(main, "test-start")),
            start_style,
        )),
        Line::from("press enter".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
