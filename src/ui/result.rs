use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;

use super::text_of;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let main = app.quiz().main();
    let engine = app.quiz().engine();
    let grade_color = get_grade_color(engine.score() as usize, engine.total_questions());

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], text_of(main, "your-result"), grade_color);
    render_description(frame, chunks[2], text_of(main, "description-result"));
}

fn get_grade_color(score: usize, total: usize) -> Color {
    if total == 0 {
        return Color::Gray;
    }
    match score * 100 / total {
        90.. => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, summary: &str, grade_color: Color) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            summary.to_string(),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_description(frame: &mut Frame, area: Rect, description: &str) {
    let widget = Paragraph::new(description)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .fg(Color::Gray)
        .block(Block::default().padding(Padding::uniform(1)));
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_color_thresholds() {
        assert_eq!(get_grade_color(3, 3), Color::Green);
        assert_eq!(get_grade_color(3, 4), Color::Cyan);
        assert_eq!(get_grade_color(1, 2), Color::Yellow);
        assert_eq!(get_grade_color(0, 2), Color::Red);
        assert_eq!(get_grade_color(0, 0), Color::Gray);
    }
}
