//! Scrollbar handling
//!
//! Click and drag both map the pointer row straight to an offset.

use crate::tui::app::App;

impl App {
    /// Jump the viewport to the offset a click on the track maps to
    pub fn handle_scrollbar_click(&mut self, row: u16) {
        if let Some(track) = self.layout.scrollbar_area {
            self.scroll.handle_scrollbar_click(row, track);
            self.dirty = true;
        }
    }
}
