//! Event handlers for the TUI
//!
//! All event handling logic split out of app.rs by concern.

pub mod keys;
pub mod mouse;
pub mod popup_keys;
pub mod render;
pub mod scrollbar;
