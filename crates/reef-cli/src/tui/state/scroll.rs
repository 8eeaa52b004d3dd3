//! Scroll state
//!
//! Offset plus the latest measured geometry. Metrics are
//! last-signal-wins: every mutation clamps against whatever geometry
//! was recorded most recently.

use ratatui::layout::Rect;
use reef_core::ScrollMetrics;

#[derive(Debug, Default)]
pub struct ScrollState {
    /// First content row shown at the top of the viewport
    offset: u16,
    /// Viewport height in rows
    viewport_height: u16,
    /// Total laid-out content height in rows
    content_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Record the latest layout geometry and re-clamp the offset
    pub fn set_geometry(&mut self, viewport_height: u16, content_height: u16) {
        self.viewport_height = viewport_height;
        self.content_height = content_height;
        self.offset = self.offset.min(self.max_scroll());
    }

    pub fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(self.offset, self.viewport_height, self.content_height)
    }

    pub fn progress(&self) -> f32 {
        self.metrics().progress()
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.offset = self.offset.saturating_add(rows).min(self.max_scroll());
    }

    /// Jump so `row` becomes the first visible line
    pub fn scroll_to(&mut self, row: u16) {
        self.offset = row.min(self.max_scroll());
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max_scroll();
    }

    /// Jump to the offset a click at `row` on the scrollbar track maps to
    pub fn handle_scrollbar_click(&mut self, row: u16, track: Rect) {
        if track.height <= 1 {
            return;
        }
        let within = row.saturating_sub(track.y).min(track.height - 1);
        let frac = f32::from(within) / f32::from(track.height - 1);
        self.offset = (frac * f32::from(self.max_scroll())).round() as u16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ScrollState {
        let mut s = ScrollState::new();
        s.set_geometry(40, 100);
        s
    }

    #[test]
    fn test_clamps_at_both_ends() {
        let mut s = state();
        s.scroll_up(5);
        assert_eq!(s.offset(), 0);
        s.scroll_down(500);
        assert_eq!(s.offset(), 60);
    }

    #[test]
    fn test_geometry_change_reclamps() {
        let mut s = state();
        s.to_bottom();
        assert_eq!(s.offset(), 60);
        // Content shrinks: the offset follows the new maximum
        s.set_geometry(40, 50);
        assert_eq!(s.offset(), 10);
    }

    #[test]
    fn test_progress_agrees_with_core_metrics() {
        let mut s = ScrollState::new();
        s.set_geometry(1000, 2000);
        s.scroll_to(500);
        assert!((s.progress() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_scrollbar_click_maps_proportionally() {
        let mut s = state();
        let track = Rect::new(80, 2, 1, 31);
        s.handle_scrollbar_click(2, track);
        assert_eq!(s.offset(), 0);
        s.handle_scrollbar_click(32, track);
        assert_eq!(s.offset(), 60);
        s.handle_scrollbar_click(17, track);
        assert_eq!(s.offset(), 30);
    }

    #[test]
    fn test_no_scroll_when_content_fits() {
        let mut s = ScrollState::new();
        s.set_geometry(40, 30);
        s.scroll_down(10);
        assert_eq!(s.offset(), 0);
        assert_eq!(s.progress(), 0.0);
    }
}
