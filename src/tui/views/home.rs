//! Home page
//!
//! Hero band with the three highlights, the services grid, and the contact
//! band with the office details.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::display::report::truncate;
use crate::tui::app::{App, Section, SERVICE_GRID_COLUMNS};
use crate::tui::dialogs::contact::SubmissionStatus;
use crate::tui::layout::HomeLayout;

pub const HEADLINE: &str = "Wealth Management Redefined.";
pub const TAGLINE: &str = "Expert financial guidance for a prosperous future. From Mutual Funds to \
Real Estate, FC & Sons Consulting is your trusted partner in wealth creation.";

pub const HIGHLIGHTS: [(&str, &str); 3] = [
    ("Smart Growth", "Maximize returns with data-driven insights."),
    ("Secure Future", "Robust insurance and risk management."),
    ("Portfolio Balance", "Diversified investments for stability."),
];

pub const OFFICE_ADDRESS: &str = "4th floor, Padamdeep Tower, In Front Of Central Government \
Office, Sanjay Palace, Agra, Uttar Pradesh 282002";
pub const SUPPORT_EMAIL: &str = "customersupport@fcandsonsconsulting.com";
pub const PHONE_NUMBERS: [&str; 2] = ["+91 63995 88252", "+91 86309 50344"];

const CARD_HEIGHT: u16 = 4;

/// Render the home page
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = HomeLayout::new(area);

    render_hero(frame, app, layout.hero);
    render_services(frame, app, layout.services);
    render_contact(frame, app, layout.contact);
}

fn section_block(title: &str, focused: bool) -> Block<'static> {
    let color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(color))
}

fn render_hero(frame: &mut Frame, app: &App, area: Rect) {
    let block = section_block("Home", app.focused_section == Section::Hero);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Headline
            Constraint::Length(2), // Tagline
            Constraint::Min(2),    // Highlights
            Constraint::Length(1), // Call to action
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            HEADLINE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(TAGLINE)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[2]);
    for ((title, desc), column) in HIGHLIGHTS.iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                *title,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*desc, Style::default().fg(Color::Gray))),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            *column,
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[r]", Style::default().fg(Color::Cyan)),
            Span::raw(" Calculate Returns   "),
            Span::styled("[2]", Style::default().fg(Color::Cyan)),
            Span::raw(" Explore Services   "),
            Span::styled("[a]", Style::default().fg(Color::Cyan)),
            Span::raw(" Ask our AI"),
        ]))
        .alignment(Alignment::Center),
        chunks[3],
    );
}

fn render_services(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_section == Section::Services;
    let block = section_block("Our Expertise: Comprehensive Financial Services", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let services = app.catalog.all();
    let rows = services.len().div_ceil(SERVICE_GRID_COLUMNS);
    let visible_rows = ((inner.height / CARD_HEIGHT) as usize).max(1);
    let selected_row = app.selected_service_index / SERVICE_GRID_COLUMNS;
    let first_row = selected_row
        .saturating_sub(visible_rows - 1)
        .min(rows.saturating_sub(visible_rows));

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(inner);

    for (slot, row) in (first_row..rows.min(first_row + visible_rows)).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, SERVICE_GRID_COLUMNS as u32);
                SERVICE_GRID_COLUMNS
            ])
            .split(row_areas[slot]);

        for (col, cell) in cells.iter().enumerate() {
            let index = row * SERVICE_GRID_COLUMNS + col;
            let Some(service) = services.get(index) else {
                continue;
            };
            let selected = focused && index == app.selected_service_index;
            let border = if selected { Color::Cyan } else { Color::Blue };

            let card = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .title(Line::from(vec![
                    Span::styled(format!(" {} ", service.icon.glyph()), Style::default().fg(Color::Cyan)),
                    Span::styled(
                        format!("{} ", service.title),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                ]));
            let width = card.inner(*cell).width as usize;
            let mut lines = vec![Line::from(Span::styled(
                truncate(service.description, width),
                Style::default().fg(Color::Gray),
            ))];
            if selected {
                lines.push(Line::from(Span::styled(
                    "Learn more →",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )));
            }
            frame.render_widget(Paragraph::new(lines).block(card), *cell);
        }
    }
}

fn render_contact(frame: &mut Frame, app: &App, area: Rect) {
    let block = section_block(
        "Get in Touch: Let's Discuss Your Financial Future",
        app.focused_section == Section::Contact,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let label = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let details = vec![
        Line::from(vec![
            Span::styled("Our Office  ", label),
            Span::raw(OFFICE_ADDRESS),
        ]),
        Line::from(vec![
            Span::styled("Email Us    ", label),
            Span::raw(SUPPORT_EMAIL),
        ]),
        Line::from(vec![
            Span::styled("Call Us     ", label),
            Span::raw(PHONE_NUMBERS.join("  ")),
        ]),
    ];
    frame.render_widget(Paragraph::new(details).wrap(Wrap { trim: true }), columns[0]);

    let form_lines = match app.contact_form.status {
        SubmissionStatus::Success { .. } => vec![Line::from(Span::styled(
            "✔ Query Received!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))],
        SubmissionStatus::Submitting => vec![Line::from(Span::styled(
            "Saving...",
            Style::default().fg(Color::Yellow),
        ))],
        SubmissionStatus::Idle => {
            let subject = if app.contact_subject().is_empty() {
                "Select a Service"
            } else {
                app.contact_subject()
            };
            vec![
                Line::from(Span::styled(
                    "Submit a Query",
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled("Service Interest: ", Style::default().fg(Color::Gray)),
                    Span::styled(subject.to_string(), Style::default().fg(Color::Cyan)),
                ]),
                Line::from(vec![
                    Span::styled("[Enter/c]", Style::default().fg(Color::Cyan)),
                    Span::raw(" Open the form"),
                ]),
            ]
        }
    };
    frame.render_widget(Paragraph::new(form_lines), columns[1]);
}
