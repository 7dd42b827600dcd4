//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers
//! based on the current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::services::catalog::FOOTER_LINKS;

use super::app::{ActiveDialog, ActiveView, App, Section, SERVICE_GRID_COLUMNS};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    // A key press acknowledges the current toast
    if !app.notifications.is_empty() {
        app.notifications.dismiss();
    }
    app.clear_status();

    if handle_global_key(app, key) {
        return Ok(());
    }

    match app.active_view {
        ActiveView::Home => handle_home_key(app, key),
        ActiveView::ServiceDetail(_) => handle_detail_key(app, key),
    }
    Ok(())
}

/// Keys that work on every page; returns true when consumed
fn handle_global_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('r') | KeyCode::Char('R') => app.open_dialog(ActiveDialog::Calculator),
        KeyCode::Char('c') | KeyCode::Char('C') => app.open_dialog(ActiveDialog::Contact),
        KeyCode::Char('a') | KeyCode::Char('A') => app.open_dialog(ActiveDialog::Assistant),
        KeyCode::Char('1') => {
            app.navigate("home");
        }
        KeyCode::Char('2') => {
            app.navigate("services");
        }
        KeyCode::Char('3') => {
            app.navigate("contact");
        }
        KeyCode::F(n @ 1..=4) => {
            let (_, subject) = FOOTER_LINKS[usize::from(n - 1)];
            app.select_footer_service(subject);
        }
        _ => return false,
    }
    true
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => app.focused_section = app.focused_section.next(),
        KeyCode::BackTab => app.focused_section = app.focused_section.prev(),
        _ => match app.focused_section {
            Section::Hero => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    app.open_dialog(ActiveDialog::Calculator);
                } else if matches!(key.code, KeyCode::Down | KeyCode::Char('j')) {
                    app.focused_section = Section::Services;
                }
            }
            Section::Services => handle_services_key(app, key),
            Section::Contact => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => app.open_dialog(ActiveDialog::Contact),
                KeyCode::Up | KeyCode::Char('k') => app.focused_section = Section::Services,
                _ => {}
            },
        },
    }
}

fn handle_services_key(app: &mut App, key: KeyEvent) {
    let columns = SERVICE_GRID_COLUMNS as isize;
    let column = app.selected_service_index % SERVICE_GRID_COLUMNS;
    let row = app.selected_service_index / SERVICE_GRID_COLUMNS;
    let last_row = (app.catalog.len().saturating_sub(1)) / SERVICE_GRID_COLUMNS;

    match key.code {
        KeyCode::Left | KeyCode::Char('h') if column > 0 => app.move_service_selection(-1),
        KeyCode::Right | KeyCode::Char('l') if column + 1 < SERVICE_GRID_COLUMNS => {
            app.move_service_selection(1)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if row == 0 {
                app.focused_section = Section::Hero;
            } else {
                app.move_service_selection(-columns);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if row == last_row {
                app.focused_section = Section::Contact;
            } else {
                app.move_service_selection(columns);
            }
        }
        KeyCode::Home | KeyCode::Char('g') => app.selected_service_index = 0,
        KeyCode::End | KeyCode::Char('G') => {
            app.selected_service_index = app.catalog.len().saturating_sub(1)
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(service) = app.selected_service() {
                app.learn_more(service.id);
            }
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => app.back(),
        KeyCode::Enter | KeyCode::Char('b') => {
            app.request_consultation();
            app.open_dialog(ActiveDialog::Contact);
        }
        _ => {}
    }
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::Calculator => {
            super::dialogs::calculator::handle_key(app, key);
        }
        ActiveDialog::Contact => {
            super::dialogs::contact::handle_key(app, key);
        }
        ActiveDialog::Assistant => {
            super::dialogs::assistant::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
}
