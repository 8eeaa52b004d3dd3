//! App state components
//!
//! Centralized state management for the TUI, grouped into logical
//! modules.

mod layout;
mod popups;
mod reveal;
mod scroll;
mod ui;

pub use layout::{LayoutState, LinkTarget};
pub use popups::PopupState;
pub use reveal::RevealTransitions;
pub use scroll::ScrollState;
pub use ui::{Popup, UiState, View};
