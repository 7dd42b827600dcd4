//! Contact form dialog
//!
//! "Submit a Query": name, phone, email, service interest and message,
//! sent to the firm's contact endpoint.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::ContactForm;
use crate::services::contact::RECEIVED_MESSAGE;
use crate::services::CatalogService;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// How long "Query Received!" stays before the form comes back
pub const SUCCESS_RESET_AFTER: Duration = Duration::from_secs(5);

/// Where a submission stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success { since: Instant },
}

/// Which field is focused in the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Phone,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Phone,
            Self::Phone => Self::Email,
            Self::Email => Self::Subject,
            Self::Subject => Self::Message,
            Self::Message => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Phone => Self::Name,
            Self::Email => Self::Phone,
            Self::Subject => Self::Email,
            Self::Message => Self::Subject,
        }
    }
}

/// State for the contact form dialog
#[derive(Debug, Clone)]
pub struct ContactFormState {
    pub name_input: TextInput,
    pub phone_input: TextInput,
    pub email_input: TextInput,
    pub message_input: TextInput,
    /// Service interest; empty until one is chosen
    pub subject: String,
    pub focused_field: ContactField,
    pub status: SubmissionStatus,
    pub error_message: Option<String>,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormState {
    pub fn new() -> Self {
        let mut state = Self {
            name_input: TextInput::new().label("Full Name").placeholder("John Doe"),
            phone_input: TextInput::new()
                .label("Phone Number")
                .placeholder("+91 98765 43210"),
            email_input: TextInput::new()
                .label("Email Address")
                .placeholder("john@example.com"),
            message_input: TextInput::new()
                .label("Message")
                .placeholder("How can we help you?"),
            subject: String::new(),
            focused_field: ContactField::Name,
            status: SubmissionStatus::Idle,
            error_message: None,
        };
        state.set_focus(ContactField::Name);
        state
    }

    /// Focus a field
    pub fn set_focus(&mut self, field: ContactField) {
        self.focused_field = field;
        self.name_input.focused = field == ContactField::Name;
        self.phone_input.focused = field == ContactField::Phone;
        self.email_input.focused = field == ContactField::Email;
        self.message_input.focused = field == ContactField::Message;
    }

    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ContactField::Name => Some(&mut self.name_input),
            ContactField::Phone => Some(&mut self.phone_input),
            ContactField::Email => Some(&mut self.email_input),
            ContactField::Message => Some(&mut self.message_input),
            ContactField::Subject => None,
        }
    }

    /// Step through "Select a Service", every service, then "Other"
    pub fn cycle_subject(&mut self, forward: bool) {
        let mut options = vec![""];
        options.extend(CatalogService::new().subject_options());

        let current = options
            .iter()
            .position(|o| *o == self.subject)
            .unwrap_or(0);
        let len = options.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.subject = options[next].to_string();
    }

    /// The form as it would be submitted
    pub fn to_form(&self) -> ContactForm {
        ContactForm {
            name: self.name_input.value().to_string(),
            email: self.email_input.value().to_string(),
            phone: self.phone_input.value().to_string(),
            subject: self.subject.clone(),
            message: self.message_input.value().to_string(),
        }
    }

    /// Empty every field, subject included
    pub fn clear(&mut self) {
        self.name_input.clear();
        self.phone_input.clear();
        self.email_input.clear();
        self.message_input.clear();
        self.subject.clear();
        self.error_message = None;
        self.set_focus(ContactField::Name);
    }

    /// Return to the form once the success message has been up long enough
    pub fn reset_if_expired(&mut self, now: Instant) -> bool {
        match self.status {
            SubmissionStatus::Success { since }
                if now.saturating_duration_since(since) >= SUCCESS_RESET_AFTER =>
            {
                self.status = SubmissionStatus::Idle;
                true
            }
            _ => false,
        }
    }
}

/// Render the contact dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(70, 16, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Submit a Query ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &app.contact_form;
    if let SubmissionStatus::Success { .. } = form.status {
        render_success(frame, inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Name
            Constraint::Length(1), // Phone
            Constraint::Length(1), // Email
            Constraint::Length(1), // Subject
            Constraint::Length(1), // Spacer
            Constraint::Min(3),    // Message
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    frame.render_widget(&form.name_input, pad(chunks[1]));
    frame.render_widget(&form.phone_input, pad(chunks[2]));
    frame.render_widget(&form.email_input, pad(chunks[3]));

    let subject_focused = form.focused_field == ContactField::Subject;
    let subject_label_style = if subject_focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let subject_text = if form.subject.is_empty() {
        "Select a Service"
    } else {
        form.subject.as_str()
    };
    let mut subject_spans = vec![Span::styled("Service Interest: ", subject_label_style)];
    if subject_focused {
        subject_spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
    }
    subject_spans.push(Span::styled(
        subject_text.to_string(),
        Style::default().fg(Color::White),
    ));
    if subject_focused {
        subject_spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
    }
    frame.render_widget(Paragraph::new(Line::from(subject_spans)), pad(chunks[4]));

    frame.render_widget(
        Paragraph::new(Line::from(form.message_input.spans())).wrap(Wrap { trim: false }),
        pad(chunks[6]),
    );

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            pad(chunks[7]),
        );
    }

    let hints = if form.status == SubmissionStatus::Submitting {
        Line::from(Span::styled("Saving...", Style::default().fg(Color::Yellow)))
    } else {
        Line::from(vec![
            Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
            Span::raw(" Next  "),
            Span::styled("[←/→]", Style::default().fg(Color::Cyan)),
            Span::raw(" Service  "),
            Span::styled("[Ctrl+S]", Style::default().fg(Color::Green)),
            Span::raw(" Send Message  "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Close"),
        ])
    };
    frame.render_widget(Paragraph::new(hints), pad(chunks[8]));
}

fn render_success(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✔ Query Received!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(RECEIVED_MESSAGE),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Send Another  "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Close"),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn pad(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    }
}

/// Handle key input for the contact dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Esc {
        app.close_dialog();
        return true;
    }

    match app.contact_form.status {
        SubmissionStatus::Submitting => return true,
        SubmissionStatus::Success { .. } => {
            if key.code == KeyCode::Enter {
                app.contact_form.status = SubmissionStatus::Idle;
            }
            return true;
        }
        SubmissionStatus::Idle => {}
    }

    let form = &mut app.contact_form;
    match key.code {
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.submit_contact();
        }
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Enter => {
            if form.focused_field == ContactField::Message {
                app.submit_contact();
            } else {
                form.next_field();
            }
        }
        KeyCode::Left if form.focused_field == ContactField::Subject => form.cycle_subject(false),
        KeyCode::Right | KeyCode::Char(' ') if form.focused_field == ContactField::Subject => {
            form.cycle_subject(true)
        }
        code => {
            let Some(input) = form.focused_input_mut() else {
                return false;
            };
            if !input.handle_key(code) {
                return false;
            }
            form.error_message = None;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle() {
        let mut state = ContactFormState::new();
        assert!(state.name_input.focused);

        state.next_field();
        assert_eq!(state.focused_field, ContactField::Phone);
        assert!(state.phone_input.focused);
        assert!(!state.name_input.focused);

        state.prev_field();
        state.prev_field();
        assert_eq!(state.focused_field, ContactField::Message);
    }

    #[test]
    fn test_cycle_subject() {
        let mut state = ContactFormState::new();
        state.cycle_subject(true);
        assert_eq!(state.subject, "Mutual Funds");

        state.cycle_subject(false);
        assert_eq!(state.subject, "");

        state.cycle_subject(false);
        assert_eq!(state.subject, "Other");

        // Unknown subjects restart from the top
        state.subject = "Taxation".into();
        state.cycle_subject(true);
        assert_eq!(state.subject, "Mutual Funds");
    }

    #[test]
    fn test_to_form_and_clear() {
        let mut state = ContactFormState::new();
        state.name_input = state.name_input.clone().content("Ravi");
        state.subject = "Insurance".into();

        let form = state.to_form();
        assert_eq!(form.name, "Ravi");
        assert_eq!(form.subject, "Insurance");

        state.clear();
        assert_eq!(state.to_form(), ContactForm::default());
        assert_eq!(state.focused_field, ContactField::Name);
    }

    #[test]
    fn test_reset_if_expired() {
        let mut state = ContactFormState::new();
        let since = Instant::now();
        state.status = SubmissionStatus::Success { since };

        assert!(!state.reset_if_expired(since + Duration::from_millis(4900)));
        assert!(state.reset_if_expired(since + SUCCESS_RESET_AFTER));
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert!(!state.reset_if_expired(since + SUCCESS_RESET_AFTER));
    }
}
