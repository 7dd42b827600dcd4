//! Return calculator dialog
//!
//! SIP/Lumpsum tabs, three sliders and the projected outcome. Every key
//! press re-derives the result from the current inputs.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::display::projection::{format_rate, format_years};
use crate::display::report::{format_percentage, format_split_bar, format_track};
use crate::models::{CalculatorField, CalculatorState, InvestmentMode, Rupees};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

const TRACK_WIDTH: usize = 40;

/// Render the calculator dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(64, 24, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Return Calculator ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Subtitle
            Constraint::Length(2), // Tabs
            Constraint::Length(3), // Amount
            Constraint::Length(3), // Rate
            Constraint::Length(3), // Years
            Constraint::Length(5), // Results
            Constraint::Length(2), // Chart
            Constraint::Min(0),
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let calc = &app.calculator;
    let symbol = app.settings.currency_symbol.as_str();

    frame.render_widget(
        Paragraph::new(Span::styled(
            " Plan your financial future",
            Style::default().fg(Color::DarkGray),
        )),
        chunks[0],
    );
    frame.render_widget(Paragraph::new(tabs(calc.mode())), chunks[1]);

    for (field, area) in [
        (CalculatorField::Amount, chunks[2]),
        (CalculatorField::Rate, chunks[3]),
        (CalculatorField::Years, chunks[4]),
    ] {
        frame.render_widget(Paragraph::new(slider_lines(calc, field, symbol)), area);
    }

    let result = calc.result();
    let result_lines = vec![
        card_line("Invested Amount", result.invested.format_with_symbol(symbol), Color::White),
        card_line("Est. Returns", result.returns.format_with_symbol(symbol), Color::Green),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" {:<22}", "TOTAL VALUE"),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                result.total.format_with_symbol(symbol),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", result.total.compact_with_symbol(symbol)),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(result_lines), chunks[5]);

    let [invested, returns] = result.slices();
    let chart = vec![
        Line::from(Span::styled(
            format!(" {}", format_split_bar(invested.share, TRACK_WIDTH + 10)),
            Style::default().fg(Color::Blue),
        )),
        Line::from(vec![
            Span::styled(" █ ", Style::default().fg(Color::Blue)),
            Span::raw(format!("{} {}   ", invested.label, format_percentage(invested.share))),
            Span::styled("░ ", Style::default().fg(Color::Blue)),
            Span::raw(format!("{} {}", returns.label, format_percentage(returns.share))),
        ]),
    ];
    frame.render_widget(Paragraph::new(chart), chunks[6]);

    let hints = Line::from(vec![
        Span::styled("[m]", Style::default().fg(Color::Cyan)),
        Span::raw(" Mode  "),
        Span::styled("[↑/↓]", Style::default().fg(Color::Cyan)),
        Span::raw(" Field  "),
        Span::styled("[←/→]", Style::default().fg(Color::Cyan)),
        Span::raw(" Adjust  "),
        Span::styled("[Home/End]", Style::default().fg(Color::Cyan)),
        Span::raw(" Min/Max  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Close"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[8]);
}

fn tabs(mode: InvestmentMode) -> Line<'static> {
    let tab = |m: InvestmentMode| {
        let style = if m == mode {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Span::styled(format!("  {}  ", m), style)
    };
    Line::from(vec![
        Span::raw(" "),
        tab(InvestmentMode::Sip),
        Span::raw(" "),
        tab(InvestmentMode::Lumpsum),
    ])
}

fn slider_lines(calc: &CalculatorState, field: CalculatorField, symbol: &str) -> Vec<Line<'static>> {
    let range = calc.range(field);
    let value = calc.value(field);
    let focused = calc.focused_field == field;

    let (label, shown, min, max) = match field {
        CalculatorField::Amount => (
            calc.mode().amount_label(),
            Rupees::round_from(value).format_with_symbol(symbol),
            Rupees::round_from(range.min).format_with_symbol(symbol),
            Rupees::round_from(range.max).compact_with_symbol(symbol),
        ),
        CalculatorField::Rate => (
            "Expected Return (p.a)",
            format_rate(value),
            format_rate(range.min),
            format_rate(range.max),
        ),
        CalculatorField::Years => (
            "Time Period",
            format_years(calc.years()),
            format!("{} Yr", range.min),
            format!("{} Yrs", range.max),
        ),
    };

    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let marker = if focused { "▸" } else { " " };
    let track_color = if focused { Color::Cyan } else { Color::Blue };
    let shown_width = TRACK_WIDTH.saturating_sub(label.chars().count()).max(1) + 8;

    vec![
        Line::from(vec![
            Span::styled(format!("{} {}", marker, label), label_style),
            Span::styled(
                format!("{:>width$}", shown, width = shown_width),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", format_track(range.fraction(value), TRACK_WIDTH + 8)),
            Style::default().fg(track_color),
        )),
        Line::from(Span::styled(
            format!("  {:<w$}{}", min, max, w = (TRACK_WIDTH + 8).saturating_sub(max.chars().count())),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn card_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<22}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

/// Handle key input for the calculator dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let calc = &mut app.calculator;
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_dialog(),
        KeyCode::Char('m') | KeyCode::Char('t') => calc.toggle_mode(),
        KeyCode::Char('s') => calc.set_mode(InvestmentMode::Sip),
        KeyCode::Char('l') if calc.mode() != InvestmentMode::Lumpsum => {
            calc.set_mode(InvestmentMode::Lumpsum)
        }
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
            calc.focused_field = calc.focused_field.next()
        }
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
            calc.focused_field = calc.focused_field.prev()
        }
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => calc.increase(),
        KeyCode::Left | KeyCode::Char('-') => calc.decrease(),
        KeyCode::Home => calc.to_min(),
        KeyCode::End => calc.to_max(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::services::http::fake::FakeTransport;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_keys_drive_calculator() {
        let settings = Settings::default();
        let transport = FakeTransport::responding(200, "");
        let mut app = App::new(&settings, &transport);
        app.open_dialog(crate::tui::app::ActiveDialog::Calculator);

        assert_eq!(app.calculator.result().total.value(), 412_432);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.calculator.rate(), 12.5);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::End);
        assert_eq!(app.calculator.years(), 40);

        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.calculator.mode(), InvestmentMode::Lumpsum);
        assert_eq!(app.calculator.amount(), 100_000.0);

        assert!(!press(&mut app, KeyCode::Char('x')));
        press(&mut app, KeyCode::Esc);
        assert!(!app.calculator_open());
    }
}
