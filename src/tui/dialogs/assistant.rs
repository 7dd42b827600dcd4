//! AI assistant chat dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::{ChatMessage, ChatRole};
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::widgets::input::TextInput;

/// Transcript plus the prompt being typed
#[derive(Debug, Clone)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: TextInput,
    /// A question is in flight
    pub waiting: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            input: TextInput::new()
                .placeholder("Ask about SIPs, taxes, insurance...")
                .focused(true),
            waiting: false,
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Transcript as display lines, oldest first
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for message in &self.messages {
            let (who_style, text_style) = match (message.role, message.is_error) {
                (ChatRole::User, _) => (
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    Style::default().fg(Color::White),
                ),
                (ChatRole::Model, false) => (
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    Style::default().fg(Color::White),
                ),
                (ChatRole::Model, true) => (
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    Style::default().fg(Color::Red),
                ),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", message.role), who_style),
                Span::styled(
                    message.sent_at.format("%H:%M").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            lines.push(Line::from(Span::styled(message.text.clone(), text_style)));
            lines.push(Line::from(""));
        }
        if self.waiting {
            lines.push(Line::from(Span::styled(
                "Assistant is typing...",
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines
    }
}

/// Render the assistant dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" FC & Sons AI Assistant ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Transcript
            Constraint::Length(3), // Prompt
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let mut transcript = app.chat.lines();
    if transcript.is_empty() {
        transcript.push(Line::from(Span::styled(
            "Ask our assistant anything about investing with FC & Sons Consulting.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    // Keep the latest exchange in view
    let height = chunks[0].height as usize;
    let width = chunks[0].width.max(1) as usize;
    let rows: usize = transcript
        .iter()
        .map(|l| l.width().div_ceil(width).max(1))
        .sum();
    let scroll = rows.saturating_sub(height) as u16;

    frame.render_widget(
        Paragraph::new(transcript)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        chunks[0],
    );

    let prompt_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let prompt_area = prompt_block.inner(chunks[1]);
    frame.render_widget(prompt_block, chunks[1]);
    frame.render_widget(&app.chat.input, prompt_area);

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Send  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Close"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[2]);
}

/// Handle key input for the assistant dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }
        KeyCode::Enter => {
            app.ask_assistant();
            true
        }
        code => app.chat.input.handle_key(code),
    }
}
