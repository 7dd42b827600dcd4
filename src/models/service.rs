//! Service catalog entries
//!
//! The firm's offerings are fixed content compiled into the binary, so
//! entries borrow `'static` strings instead of owning them.

use serde::Serialize;
use std::fmt;

/// Icon shown next to a service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ServiceIcon {
    TrendingUp,
    Landmark,
    Shield,
    RefreshCcw,
    Truck,
    Calculator,
    FileCheck,
    Home,
    Banknote,
    PiggyBank,
}

impl ServiceIcon {
    /// Single-cell glyph used in the terminal
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::TrendingUp => "↗",
            Self::Landmark => "▥",
            Self::Shield => "◈",
            Self::RefreshCcw => "⟲",
            Self::Truck => "⛟",
            Self::Calculator => "∑",
            Self::FileCheck => "✓",
            Self::Home => "⌂",
            Self::Banknote => "¤",
            Self::PiggyBank => "●",
        }
    }
}

impl fmt::Display for ServiceIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TrendingUp => "TrendingUp",
            Self::Landmark => "Landmark",
            Self::Shield => "Shield",
            Self::RefreshCcw => "RefreshCcw",
            Self::Truck => "Truck",
            Self::Calculator => "Calculator",
            Self::FileCheck => "FileCheck",
            Self::Home => "Home",
            Self::Banknote => "Banknote",
            Self::PiggyBank => "PiggyBank",
        };
        write!(f, "{}", name)
    }
}

/// One offering in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceItem {
    pub id: u32,
    pub title: &'static str,
    /// One-line summary shown on the catalog card
    pub description: &'static str,
    pub icon: ServiceIcon,
    /// Paragraph shown on the detail view
    pub long_description: &'static str,
    pub features: &'static [&'static str],
}

impl ServiceItem {
    /// Case-insensitive title comparison
    pub fn title_matches(&self, query: &str) -> bool {
        self.title.eq_ignore_ascii_case(query.trim())
    }
}

impl fmt::Display for ServiceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
