//! Service detail page

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::ServiceItem;
use crate::tui::app::App;

/// Render the detail page for the viewed service
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(service) = app.viewed_service() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Back link
            Constraint::Min(6),    // Overview
            Constraint::Length(8), // Features + consultation
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" ← [Esc]", Style::default().fg(Color::Cyan)),
            Span::styled(" Back to Services", Style::default().fg(Color::Gray)),
        ])),
        chunks[0],
    );

    render_overview(frame, service, chunks[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    render_features(frame, service, bottom[0]);
    render_consultation(frame, service, bottom[1]);
}

fn render_overview(frame: &mut Frame, service: &ServiceItem, area: Rect) {
    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(format!(" {} ", service.icon.glyph()), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{} ", service.title),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(
        Paragraph::new(service.long_description)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn render_features(frame: &mut Frame, service: &ServiceItem, area: Rect) {
    let block = Block::default()
        .title(" Key Features ")
        .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Blue));

    let lines: Vec<Line> = service
        .features
        .iter()
        .map(|feature| {
            Line::from(vec![
                Span::styled(" ✔ ", Style::default().fg(Color::Cyan)),
                Span::styled(*feature, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_consultation(frame: &mut Frame, service: &ServiceItem, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(Span::styled(
            format!("Ready to optimize your {}?", service.title),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Consult with our top-tier experts today and build a strategy tailored to your financial goals.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[Enter]",
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Book a Consultation", Style::default().fg(Color::Cyan)),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}
