//! Application state definitions

use crate::i18n::Locale;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Scroll-driven home page
    #[default]
    Home,
    About,
    Contact,
}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::About, View::Contact];

    /// Message key of the navigation label
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::About => "nav.about",
            Self::Contact => "nav.contact",
        }
    }

    /// Route path below the locale prefix
    pub fn route(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Contact => "/contact",
        }
    }

    pub fn from_route(route: &str) -> Option<Self> {
        match route.trim_end_matches('/') {
            "" => Some(Self::Home),
            "/about" => Some(Self::About),
            "/contact" => Some(Self::Contact),
            _ => None,
        }
    }

    /// Views that keep the header solid
    pub fn has_solid_header(&self) -> bool {
        !matches!(self, Self::Home)
    }
}

/// Resolve a locale-prefixed path like `/en/contact`
pub fn resolve_path(path: &str) -> (Locale, View) {
    let (locale, rest) = Locale::split_path(path);
    (locale, View::from_route(rest).unwrap_or_default())
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub locale: Locale,

    // Home page scroll position, in rows
    pub scroll_row: u16,

    // Errors waiting to be shown, oldest first
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Default::default()
        }
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.errors.push_back(message);
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown and how many more are queued
    pub fn current_error(&self) -> Option<(&str, usize)> {
        self.errors
            .front()
            .map(|e| (e.as_str(), self.errors.len() - 1))
    }

    /// Scroll the home page, clamped to `[0, max_row]`
    pub fn scroll_by(&mut self, delta: i32, max_row: u16) {
        let next = i32::from(self.scroll_row) + delta;
        self.scroll_row = next.clamp(0, i32::from(max_row)) as u16;
    }
}
