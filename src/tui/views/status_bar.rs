//! Status bar view
//!
//! Shows where the user is, the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App};

const HINTS: &str = " q:Quit  ?:Help  r:Calculator  c:Contact  a:Assistant ";

/// Text describing the current location, e.g. `Home › Services`
pub fn location(app: &App) -> String {
    match app.active_view {
        ActiveView::Home => format!("Home › {}", app.focused_section.title()),
        ActiveView::ServiceDetail(_) => match app.viewed_service() {
            Some(service) => format!("Services › {}", service.title),
            None => "Services".to_string(),
        },
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", location(app)),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(message.clone(), Style::default().fg(Color::Yellow)));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + HINTS.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
