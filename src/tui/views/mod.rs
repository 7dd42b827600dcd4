//! TUI Views module
//!
//! The home page and the service detail page, framed by the navbar, the
//! footer and the status bar.

pub mod home;
pub mod service_detail;
pub mod status_bar;

use chrono::Datelike;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::catalog::FOOTER_LINKS;

use super::app::{ActiveDialog, ActiveView, App, Section};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_navbar(frame, app, layout.navbar);

    match app.active_view {
        ActiveView::Home => home::render(frame, app, layout.main),
        ActiveView::ServiceDetail(_) => service_detail::render(frame, app, layout.main),
    }

    render_footer(frame, layout.footer);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    if let Some(notification) = app.notifications.current() {
        let area = toast_rect(48, 5, layout.main);
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Calculator => dialogs::calculator::render(frame, app),
        ActiveDialog::Contact => dialogs::contact::render(frame, app),
        ActiveDialog::Assistant => dialogs::assistant::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}

fn render_navbar(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut spans = vec![
        Span::styled(
            " FC & Sons ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled("Consulting", Style::default().fg(Color::White)),
        Span::raw("    "),
    ];

    for (key, section) in [("1", Section::Hero), ("2", Section::Services), ("3", Section::Contact)] {
        let active = app.active_view == ActiveView::Home && app.focused_section == section;
        let style = if active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("{} ", key), Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(section.title(), style));
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled(
        "[r] Calculator",
        Style::default().fg(Color::Black).bg(Color::Cyan),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut links = vec![Span::styled(" Services: ", Style::default().fg(Color::Blue))];
    for (i, (label, _)) in FOOTER_LINKS.iter().enumerate() {
        links.push(Span::styled(format!("F{} ", i + 1), Style::default().fg(Color::DarkGray)));
        links.push(Span::styled(*label, Style::default().fg(Color::Gray)));
        links.push(Span::raw("  "));
    }

    let year = chrono::Local::now().year();
    let lines = vec![
        Line::from(links),
        Line::from(Span::styled(
            format!(" © {} FC and Sons Consulting. All rights reserved.", year),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
