//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App, Section};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 75, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
    ))
}

fn help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("1/2/3", "Go to Home / Services / Contact"),
        key_line("r", "Open the return calculator"),
        key_line("c", "Open the contact form"),
        key_line("a", "Chat with the AI assistant"),
        key_line("F1-F4", "Footer: Mutual Funds, Taxation, Real Estate, Forex"),
        Line::from(""),
    ];

    match app.active_view {
        ActiveView::Home => {
            lines.push(heading("Home"));
            lines.push(Line::from(""));
            lines.push(key_line("Tab", "Next section"));
            if app.focused_section == Section::Services {
                lines.push(key_line("←↑↓→/hjkl", "Move between services"));
                lines.push(key_line("Enter", "Learn more about a service"));
            } else {
                lines.push(key_line("Enter", "Open the focused section"));
            }
        }
        ActiveView::ServiceDetail(_) => {
            lines.push(heading("Service Details"));
            lines.push(Line::from(""));
            lines.push(key_line("Enter/b", "Book a consultation"));
            lines.push(key_line("Esc/Bksp", "Back to services"));
        }
    }

    lines.push(Line::from(""));
    lines.push(heading("Dialogs"));
    lines.push(Line::from(""));
    lines.push(key_line("Tab/↑↓", "Move between fields"));
    lines.push(key_line("←/→", "Adjust slider / choose service"));
    lines.push(key_line("Ctrl+S", "Send the contact form"));
    lines.push(key_line("Esc", "Close the dialog"));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
