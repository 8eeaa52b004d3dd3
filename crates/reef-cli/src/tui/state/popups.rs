//! Popup state component
//!
//! Groups all popup controller states into a single struct.

use crate::tui::popups::{HelpPopup, ThemeSelectPopup};

/// All popup controller states grouped together
pub struct PopupState {
    pub help: HelpPopup,
    pub theme: ThemeSelectPopup,
}

impl PopupState {
    pub fn new() -> Self {
        Self {
            help: HelpPopup::new(),
            theme: ThemeSelectPopup::new(),
        }
    }
}

impl Default for PopupState {
    fn default() -> Self {
        Self::new()
    }
}
