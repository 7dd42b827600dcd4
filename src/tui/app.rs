//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::time::Instant;

use crate::config::settings::Settings;
use crate::models::{CalculatorState, ServiceItem};
use crate::services::contact::failure_message;
use crate::services::{AssistantService, CatalogService, ContactService, HttpTransport};

use super::dialogs::assistant::ChatState;
use super::dialogs::contact::{ContactFormState, SubmissionStatus};
use super::widgets::{Notification, NotificationQueue};

/// Which page is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Home,
    ServiceDetail(u32),
}

/// Section of the home page that has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Hero,
    Services,
    Contact,
}

impl Section {
    /// Section reached by a navigation link; "home" and "" mean the top
    pub fn from_link(link: &str) -> Option<Self> {
        match link.trim().to_ascii_lowercase().as_str() {
            "" | "home" => Some(Self::Hero),
            "services" => Some(Self::Services),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Hero => Self::Services,
            Self::Services => Self::Contact,
            Self::Contact => Self::Hero,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Hero => Self::Contact,
            Self::Services => Self::Hero,
            Self::Contact => Self::Services,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Services => "Services",
            Self::Contact => "Contact",
        }
    }
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Calculator,
    Contact,
    Assistant,
    Help,
}

/// Blocking request queued by a key press, run after the next draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRequest {
    SubmitContact,
    Ask(String),
}

/// Number of columns in the services grid
pub const SERVICE_GRID_COLUMNS: usize = 2;

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Outbound HTTP for the contact form and the assistant
    transport: &'a dyn HttpTransport,

    /// Assistant credential, read once at startup
    assistant_key: Option<String>,

    /// The service catalog
    pub catalog: CatalogService,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Focused section of the home page
    pub focused_section: Section,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Highlighted card in the services grid
    pub selected_service_index: usize,

    /// Return calculator; kept across openings
    pub calculator: CalculatorState,

    /// Contact form
    pub contact_form: ContactFormState,

    /// Assistant transcript and prompt
    pub chat: ChatState,

    /// Request to run once the current frame is drawn
    pub pending: Option<PendingRequest>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Toasts
    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, transport: &'a dyn HttpTransport) -> Self {
        let assistant_key = std::env::var(&settings.assistant.api_key_env).ok();
        Self {
            settings,
            transport,
            assistant_key,
            catalog: CatalogService::new(),
            should_quit: false,
            active_view: ActiveView::default(),
            focused_section: Section::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_service_index: 0,
            calculator: CalculatorState::new(settings.calculator.default_mode),
            contact_form: ContactFormState::new(),
            chat: ChatState::new(),
            pending: None,
            status_message: None,
            notifications: NotificationQueue::new(),
        }
    }

    /// Replace the assistant credential
    pub fn with_assistant_key(mut self, key: Option<String>) -> Self {
        self.assistant_key = key;
        self
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Show a toast
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        self.input_mode = match dialog {
            ActiveDialog::Contact | ActiveDialog::Assistant => InputMode::Editing,
            _ => InputMode::Normal,
        };
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Whether the return calculator is showing
    pub fn calculator_open(&self) -> bool {
        self.active_dialog == ActiveDialog::Calculator
    }

    /// Subject currently preselected in the contact form
    pub fn contact_subject(&self) -> &str {
        &self.contact_form.subject
    }

    /// Service shown by the detail view, if any
    pub fn viewed_service(&self) -> Option<&'static ServiceItem> {
        match self.active_view {
            ActiveView::ServiceDetail(id) => self.catalog.get(id),
            ActiveView::Home => None,
        }
    }

    /// Service under the cursor in the grid
    pub fn selected_service(&self) -> Option<&'static ServiceItem> {
        self.catalog.at(self.selected_service_index)
    }

    /// Open the detail page of a service
    pub fn learn_more(&mut self, id: u32) {
        match self.catalog.index_of(id) {
            Some(index) => {
                self.selected_service_index = index;
                self.active_view = ActiveView::ServiceDetail(id);
            }
            None => log::warn!("no service with id {}", id),
        }
    }

    /// Leave the detail page for the services grid
    pub fn back(&mut self) {
        self.active_view = ActiveView::Home;
        self.focused_section = Section::Services;
    }

    /// From a detail page, preselect that service and jump to the contact form
    pub fn request_consultation(&mut self) {
        if let Some(service) = self.viewed_service() {
            self.contact_form.subject = service.title.to_string();
            self.active_view = ActiveView::Home;
            self.focused_section = Section::Contact;
        }
    }

    /// Follow a navigation link; returns false for unknown links
    pub fn navigate(&mut self, link: &str) -> bool {
        let Some(section) = Section::from_link(link) else {
            return false;
        };
        self.active_view = ActiveView::Home;
        self.focused_section = section;
        true
    }

    /// Footer shortcut: preselect a subject and jump to the contact form
    pub fn select_footer_service(&mut self, name: &str) {
        self.contact_form.subject = name.to_string();
        self.active_view = ActiveView::Home;
        self.focused_section = Section::Contact;
    }

    /// Move the grid cursor by `delta` cards, clamped to the catalog
    pub fn move_service_selection(&mut self, delta: isize) {
        let last = self.catalog.len().saturating_sub(1) as isize;
        let index = (self.selected_service_index as isize + delta).clamp(0, last);
        self.selected_service_index = index as usize;
    }

    /// Queue the contact form for submission if it validates
    pub fn submit_contact(&mut self) {
        if self.contact_form.status != SubmissionStatus::Idle {
            return;
        }
        match self.contact_form.to_form().validate() {
            Ok(()) => {
                self.contact_form.error_message = None;
                self.contact_form.status = SubmissionStatus::Submitting;
                self.pending = Some(PendingRequest::SubmitContact);
            }
            Err(e) => self.contact_form.error_message = Some(e.to_string()),
        }
    }

    /// Queue the assistant prompt
    pub fn ask_assistant(&mut self) {
        if self.chat.waiting || self.chat.input.is_blank() {
            return;
        }
        let query = self.chat.input.take().trim().to_string();
        self.chat.push(crate::models::ChatMessage::user(query.clone()));
        self.chat.waiting = true;
        self.pending = Some(PendingRequest::Ask(query));
    }

    /// Run the queued request, if any
    pub fn run_pending(&mut self) {
        match self.pending.take() {
            Some(PendingRequest::SubmitContact) => self.send_contact(),
            Some(PendingRequest::Ask(query)) => {
                let assistant = AssistantService::with_api_key(
                    self.transport,
                    &self.settings.assistant,
                    self.assistant_key.clone(),
                );
                let reply = assistant.ask(&query);
                self.chat.push(reply);
                self.chat.waiting = false;
            }
            None => {}
        }
    }

    fn send_contact(&mut self) {
        let form = self.contact_form.to_form();
        let service = ContactService::new(self.transport, &self.settings.contact_endpoint);

        match service.submit(&form) {
            Ok(()) => {
                self.contact_form.clear();
                self.contact_form.status = SubmissionStatus::Success {
                    since: Instant::now(),
                };
                self.set_status("Query received");
            }
            Err(e) => {
                log::warn!("contact submission failed: {}", e);
                self.contact_form.status = SubmissionStatus::Idle;
                self.notify(Notification::error(failure_message(&e)));
            }
        }
    }

    /// Periodic housekeeping
    pub fn on_tick(&mut self) {
        self.on_tick_at(Instant::now());
    }

    /// Expire toasts and the contact success message as of `now`
    pub fn on_tick_at(&mut self, now: Instant) {
        self.notifications.remove_expired(now);
        self.contact_form.reset_if_expired(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatRole;
    use crate::services::assistant::MISSING_KEY_REPLY;
    use crate::services::contact::{NETWORK_MESSAGE, REJECTED_MESSAGE};
    use crate::services::http::fake::FakeTransport;
    use std::time::Duration;

    fn fill_form(app: &mut App) {
        app.contact_form.name_input = app.contact_form.name_input.clone().content("Asha Verma");
        app.contact_form.phone_input = app.contact_form.phone_input.clone().content("+91 86309 50344");
        app.contact_form.email_input = app.contact_form.email_input.clone().content("asha@example.com");
        app.contact_form.message_input =
            app.contact_form.message_input.clone().content("Planning a home loan.");
    }

    #[test]
    fn test_initial_state() {
        let settings = Settings::default();
        let transport = FakeTransport::responding(200, "");
        let app = App::new(&settings, &transport);

        assert_eq!(app.active_view, ActiveView::Home);
        assert_eq!(app.focused_section, Section::Hero);
        assert!(!app.calculator_open());
        assert_eq!(app.contact_subject(), "");
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_learn_more_and_back() {
        let settings = Settings::default();
        let transport = FakeTransport::responding(200, "");
        let mut app = App::new(&settings, &transport);

        app.learn_more(4);
        assert_eq!(app.active_view, ActiveView::ServiceDetail(4));
        assert_eq!(app.viewed_service().unwrap().title, "Forex");
        assert_eq!(app.selected_service_index, 3);

        app.back();
        assert_eq!(app.active_view, ActiveView::Home);
        assert_eq!(app.focused_section, Section::Services);
    }

    #[test]
    fn test_learn_more_unknown_id_is_ignored() {
        let settings = Settings::default();
        let transport = FakeTransport::responding(200, "");
        let mut app = App::new(&settings, &transport);

        app.learn_more(99);
        assert_eq!(app.active_view, ActiveView::Home);
    }

    #[test]
    fn test_request_consultation() {
        let settings = Settings::default();
        let transport = FakeTransport::responding(200, "");
        let mut app = App::new(&settings, &transport);

        // Only meaningful from a detail page
        app.request_consultation();
        assert_eq!(app.contact_subject(), "");
        assert_eq!(app.focused_section, Section::Hero);

        app.learn_more(8);
        app.request_consultation();
        assert_eq!(app.contact_subject(), "Real Estate");
        assert_eq!(app.active_view, ActiveView::Home);
        assert_eq!(app.focused_section, Section::Contact);
    }

    #[test]
    fn test_navigate() {
        let settings = Settings::default();
        let transport = FakeTransport::responding(200, "");
        let mut app = App::new(&settings, &transport);

        app.learn_more(1);
        assert!(app.navigate("contact"));
        assert_eq!(app.active_view, ActiveView::Home);
        assert_eq!(app.focused_section, Section::Contact);

        assert!(app.navigate("services"));
        assert_eq!(app.focused_section, Section::Services);

        assert!(app.navigate(""));
        assert_eq!(app.focused_section, Section::Hero);

        assert!(!app.navigate("careers"));
        assert_eq!(app.focused_section, Section::Hero);
    }

    #[test]
    fn test_select_footer_service() {
        let settings = Settings::default();
        let transport = FakeTransport::responding(200, "");
        let mut app = App::new(&settings, &transport);

        app.learn_more(2);
        app.select_footer_service("Accounting & Taxation");
        assert_eq!(app.contact_subject(), "Accounting & Taxation");
        assert_eq!(app.active_view, ActiveView::Home);
        assert_eq!(app.focused_section, Section::Contact);
    }

    #[test]
    fn test_service_selection_clamps() {
        let settings = Settings::default();
        let transport = FakeTransport::responding(200, "");
        let mut app = App::new(&settings, &transport);

        app.move_service_selection(-1);
        assert_eq!(app.selected_service_index, 0);
        app.move_service_selection(SERVICE_GRID_COLUMNS as isize);
        assert_eq!(app.selected_service_index, 2);
        app.move_service_selection(100);
        assert_eq!(app.selected_service_index, 9);
    }

    #[test]
    fn test_calculator_dialog() {
        let settings = Settings::default();
        let transport = FakeTransport::responding(200, "");
        let mut app = App::new(&settings, &transport);

        app.open_dialog(ActiveDialog::Calculator);
        assert!(app.calculator_open());
        app.calculator.increase();
        app.close_dialog();
        assert!(!app.calculator_open());

        // State survives closing
        app.open_dialog(ActiveDialog::Calculator);
        assert_eq!(app.calculator.amount(), 5500.0);
    }

    #[test]
    fn test_invalid_contact_form_is_not_sent() {
        let settings = Settings::default();
        let transport = FakeTransport::responding(200, "");
        let mut app = App::new(&settings, &transport);

        app.submit_contact();
        assert!(app.pending.is_none());
        assert!(app.contact_form.error_message.is_some());
        assert_eq!(app.contact_form.status, SubmissionStatus::Idle);
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_contact_success_clears_form_and_resets() {
        let settings = Settings::default();
        let transport = FakeTransport::responding(201, "");
        let mut app = App::new(&settings, &transport);
        app.select_footer_service("Forex");
        fill_form(&mut app);

        app.submit_contact();
        assert_eq!(app.contact_form.status, SubmissionStatus::Submitting);
        assert_eq!(app.pending, Some(PendingRequest::SubmitContact));

        app.run_pending();
        assert_eq!(transport.request_count(), 1);
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.body["subject"], "Forex");
        assert_eq!(sent.body["name"], "Asha Verma");

        let SubmissionStatus::Success { since } = app.contact_form.status else {
            panic!("expected success, got {:?}", app.contact_form.status);
        };
        assert!(app.contact_form.name_input.is_blank());
        assert_eq!(app.contact_subject(), "");

        app.on_tick_at(since + Duration::from_secs(4));
        assert!(matches!(app.contact_form.status, SubmissionStatus::Success { .. }));
        app.on_tick_at(since + Duration::from_secs(5));
        assert_eq!(app.contact_form.status, SubmissionStatus::Idle);
    }

    #[test]
    fn test_contact_rejection_keeps_form() {
        let settings = Settings::default();
        let transport = FakeTransport::responding(500, "");
        let mut app = App::new(&settings, &transport);
        fill_form(&mut app);

        app.submit_contact();
        app.run_pending();

        assert_eq!(app.contact_form.status, SubmissionStatus::Idle);
        assert_eq!(app.contact_form.name_input.value(), "Asha Verma");
        assert_eq!(app.notifications.current().unwrap().message, REJECTED_MESSAGE);
    }

    #[test]
    fn test_contact_network_failure_keeps_form() {
        let settings = Settings::default();
        let transport = FakeTransport::failing("connection refused");
        let mut app = App::new(&settings, &transport);
        fill_form(&mut app);

        app.submit_contact();
        app.run_pending();

        assert_eq!(app.contact_form.status, SubmissionStatus::Idle);
        assert_eq!(app.contact_form.email_input.value(), "asha@example.com");
        assert_eq!(app.notifications.current().unwrap().message, NETWORK_MESSAGE);
    }

    #[test]
    fn test_ask_without_key() {
        let settings = Settings::default();
        let transport = FakeTransport::responding(200, "");
        let mut app = App::new(&settings, &transport).with_assistant_key(None);

        app.chat.input = app.chat.input.clone().content("  What is a SIP?  ");
        app.ask_assistant();
        assert!(app.chat.waiting);
        assert_eq!(app.pending, Some(PendingRequest::Ask("What is a SIP?".into())));

        app.run_pending();
        assert!(!app.chat.waiting);
        assert_eq!(app.chat.messages.len(), 2);
        assert_eq!(app.chat.messages[0].role, ChatRole::User);
        let reply = &app.chat.messages[1];
        assert!(reply.is_error);
        assert_eq!(reply.text, MISSING_KEY_REPLY);
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_ask_ignores_blank_prompt() {
        let settings = Settings::default();
        let transport = FakeTransport::responding(200, "");
        let mut app = App::new(&settings, &transport);

        app.ask_assistant();
        assert!(app.pending.is_none());
        assert!(app.chat.messages.is_empty());
    }
}
