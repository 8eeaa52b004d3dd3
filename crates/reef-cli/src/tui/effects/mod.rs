//! Decorative effects
//!
//! Purely cosmetic animation state. Every effect advances on the frame
//! tick and reports whether it changed anything so the app can skip
//! redraws. Backdrops must stay inside the area they are given.

mod circuit;
mod loading;
mod ocean;
mod typewriter;

pub use circuit::CircuitBackground;
pub use loading::LoadingScreen;
pub use ocean::OceanBackground;
pub use typewriter::Typewriter;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::tui::themes::{Backdrop, Theme};

/// A decorative backdrop drawn beneath the content
pub trait Background {
    /// Note the drawable size; respawns particles when it changes
    fn resize(&mut self, width: u16, height: u16);

    /// Advance animation state; returns true if a redraw is needed
    fn tick(&mut self) -> bool;

    /// Render beneath the content
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme);
}

/// Construct the backdrop a theme asks for
pub fn for_backdrop(backdrop: Backdrop) -> Box<dyn Background> {
    match backdrop {
        Backdrop::Ocean => Box::new(OceanBackground::new()),
        Backdrop::Circuit => Box::new(CircuitBackground::new()),
    }
}
