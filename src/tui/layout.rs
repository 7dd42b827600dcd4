//! Layout definitions for the TUI
//!
//! Navbar across the top, page content, footer links, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Brand and section links
    pub navbar: Rect,
    /// Page content
    pub main: Rect,
    /// Footer with service shortcuts
    pub footer: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Navbar
                Constraint::Min(5),    // Main area
                Constraint::Length(3), // Footer
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            navbar: chunks[0],
            main: chunks[1],
            footer: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Layout for the home page: hero band, services grid, contact band
pub struct HomeLayout {
    pub hero: Rect,
    pub services: Rect,
    pub contact: Rect,
}

impl HomeLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),  // Hero
                Constraint::Min(8),     // Services
                Constraint::Length(7),  // Contact
            ])
            .split(area);

        Self {
            hero: chunks[0],
            services: chunks[1],
            contact: chunks[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs, shrunk to fit `r`
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + (r.width - width) / 2;
    let y = r.y + (r.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Rect in the bottom-right corner for toasts
pub fn toast_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + r.width - width,
        r.y + r.height - height,
        width,
        height,
    )
}
