//! Layout areas cache
//!
//! Screen-space areas recorded during render and consumed by mouse hit
//! testing on the following events. Content-space section geometry for
//! the visibility controller lives here too.

use ratatui::layout::Rect;
use reef_core::{SectionId, SectionMap};

/// A clickable outbound link recorded during render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub area: Rect,
    pub uri: String,
}

#[derive(Debug, Default)]
pub struct LayoutState {
    /// Content viewport in screen space
    pub content_area: Rect,
    /// Nav rail, when wide enough to show
    pub nav_area: Option<Rect>,
    /// Scrollbar track
    pub scrollbar_area: Option<Rect>,
    /// Accordion header rows in screen space
    pub headers: Vec<(SectionId, Rect)>,
    /// Outbound links in screen space
    pub links: Vec<LinkTarget>,
    /// Section geometry in content rows
    pub sections: SectionMap,
    /// A scrollbar drag is in progress
    pub dragging_scrollbar: bool,
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset everything recomputed each frame; drag state survives
    pub fn begin_frame(&mut self) {
        self.headers.clear();
        self.links.clear();
        self.sections.clear();
        self.nav_area = None;
        self.scrollbar_area = None;
    }

    /// Accordion header under the given screen position
    pub fn header_at(&self, column: u16, row: u16) -> Option<SectionId> {
        self.headers
            .iter()
            .find(|(_, area)| contains(*area, column, row))
            .map(|(id, _)| *id)
    }

    /// Outbound link under the given screen position
    pub fn link_at(&self, column: u16, row: u16) -> Option<&LinkTarget> {
        self.links
            .iter()
            .find(|link| contains(link.area, column, row))
    }

    /// Is the given position on the scrollbar track?
    pub fn on_scrollbar(&self, column: u16, row: u16) -> bool {
        self.scrollbar_area
            .is_some_and(|area| contains(area, column, row))
    }

    /// Is the given position on the nav rail?
    pub fn on_nav(&self, column: u16, row: u16) -> Option<Rect> {
        self.nav_area.filter(|area| contains(*area, column, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_hit_testing() {
        let mut layout = LayoutState::new();
        layout
            .headers
            .push((SectionId::Skills, Rect::new(10, 5, 40, 1)));
        assert_eq!(layout.header_at(10, 5), Some(SectionId::Skills));
        assert_eq!(layout.header_at(49, 5), Some(SectionId::Skills));
        assert_eq!(layout.header_at(50, 5), None);
        assert_eq!(layout.header_at(10, 6), None);
    }

    #[test]
    fn test_link_hit_testing() {
        let mut layout = LayoutState::new();
        layout.links.push(LinkTarget {
            area: Rect::new(12, 20, 30, 1),
            uri: "mailto:someone@example.com".to_string(),
        });
        assert!(layout.link_at(15, 20).is_some());
        assert!(layout.link_at(15, 21).is_none());
    }

    #[test]
    fn test_begin_frame_keeps_drag_state() {
        let mut layout = LayoutState::new();
        layout.dragging_scrollbar = true;
        layout
            .headers
            .push((SectionId::About, Rect::new(0, 0, 10, 1)));
        layout.begin_frame();
        assert!(layout.headers.is_empty());
        assert!(layout.dragging_scrollbar);
    }
}
