use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Tabs, Wrap},
};

use crate::app::App;
use crate::template::Node;

use super::text_of;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Fill(1)])
        .margin(1)
        .split(area);

    render_tabs(frame, chunks[0], &app.feed().tab_bar());
    render_cards(frame, chunks[1], app.feed().list(), app.feed_scroll());
}

fn render_tabs(frame: &mut Frame, area: Rect, bar: &Node) {
    let titles: Vec<String> = bar.children.iter().map(|tab| tab.text.clone()).collect();
    let active = bar
        .children
        .iter()
        .position(|tab| tab.has_class("active"))
        .unwrap_or(0);

    let widget = Tabs::new(titles)
        .select(active)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Cyan).bold())
        .divider("·")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, area);
}

fn render_cards(frame: &mut Frame, area: Rect, list: &Node, scroll: usize) {
    if list.children.is_empty() {
        let widget = Paragraph::new("Nothing here yet")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
        frame.render_widget(widget, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(list.children.len() * 3);
    for card in list.children.iter().skip(scroll) {
        let link = card
            .find("feed-item-content-link")
            .and_then(|link| link.href.as_deref())
            .unwrap_or("");
        let has_image = card
            .find("feed-item-header")
            .is_some_and(|header| header.background_image.is_some());

        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", text_of(card, "info-tape")),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ),
            Span::raw(" "),
            Span::styled(
                text_of(card, "feed-item-content").to_string(),
                Style::default().fg(Color::White).bold(),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} views", text_of(card, "activity-views")),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                if has_image { "  ·  image" } else { "" },
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(format!("  ·  {}", link), Style::default().fg(Color::Blue)),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}
