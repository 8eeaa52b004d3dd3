//! UI state
//!
//! Groups view, popup, and theme state.

use std::sync::Arc;

use crate::tui::themes::Theme;

/// Top-level view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Loading,
    Portfolio,
}

/// Active popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Help,
    ThemeSelect,
}

/// UI presentation state
pub struct UiState {
    pub view: View,
    pub popup: Popup,
    /// Active theme
    pub theme: Arc<Theme>,
    /// Theme name for display and saving
    pub theme_name: String,
    /// Decorative animations on/off
    pub animations: bool,
}

impl UiState {
    pub fn new(theme: Arc<Theme>, theme_name: String, animations: bool) -> Self {
        Self {
            view: View::Loading,
            popup: Popup::None,
            theme,
            theme_name,
            animations,
        }
    }
}
