mod feed;
mod quiz;
mod result;
mod welcome;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::{App, Pane};
use crate::quiz::QuizScreen;
use crate::template::Node;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_panes(frame, chunks[0], app.pane);

    match app.pane {
        Pane::Feed => feed::render(frame, chunks[1], app),
        Pane::Quiz => match app.quiz().screen() {
            QuizScreen::Intro => welcome::render(frame, chunks[1], app),
            QuizScreen::Question => quiz::render(frame, chunks[1], app),
            QuizScreen::Result => result::render(frame, chunks[1], app),
        },
    }

    render_controls(frame, chunks[2], app.pane);
}

/// Text of the first element with `role`, or an empty string.
fn text_of<'a>(node: &'a Node, role: &str) -> &'a str {
    node.find(role).map(|n| n.text.as_str()).unwrap_or("")
}

fn render_panes(frame: &mut Frame, area: Rect, pane: Pane) {
    let style_for = |active: bool| {
        if active {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let line = Line::from(vec![
        Span::styled(" MATERIALS ", style_for(pane == Pane::Feed)),
        Span::styled("│", Style::default().fg(Color::DarkGray)),
        Span::styled(" QUIZ ", style_for(pane == Pane::Quiz)),
    ]);
    frame.render_widget(line, area);
}

fn render_controls(frame: &mut Frame, area: Rect, pane: Pane) {
    let hint = match pane {
        Pane::Feed => "h/l or 1-4 tabs  ·  j/k scroll  ·  tab quiz  ·  q quit",
        Pane::Quiz => "j/k move  ·  enter select  ·  tab materials  ·  q quit",
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::data::{parse_feed, parse_quiz};

    fn app() -> App {
        let feed = parse_feed(
            r#"{"topics": [{"title": "Weather talk", "url": "/topics/weather", "img_url": "/media/w.png", "views": 17}]}"#,
        )
        .unwrap();
        let quiz = parse_quiz(
            r#"{"title": "Verbs", "questions": [{"content": "Pick the past form of go", "answers": [
                {"content": "goed", "correct": false},
                {"content": "went", "correct": true}
            ]}], "results": [{"min_value": 1, "max_value": 1, "content": "Perfect"}]}"#,
        )
        .unwrap();
        App::from_payloads(feed, quiz).unwrap()
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_feed_screen_shows_cards() {
        let screen = draw(&app());
        assert!(screen.contains("Weather talk"));
        assert!(screen.contains("Topics"));
    }

    #[test]
    fn test_quiz_screens() {
        let mut app = app();
        app.toggle_pane();
        assert!(draw(&app).contains("VERBS"));

        app.activate().unwrap();
        let screen = draw(&app);
        assert!(screen.contains("Question 1/1"));
        assert!(screen.contains("went"));

        app.focus_next();
        app.activate().unwrap();
        app.activate().unwrap();
        let screen = draw(&app);
        assert!(screen.contains("Your result: 1"));
        assert!(screen.contains("Perfect"));
    }
}
