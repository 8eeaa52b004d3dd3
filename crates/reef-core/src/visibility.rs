//! Section visibility state machine
//!
//! Tracks which accordion panel is expanded, which sections have been
//! revealed by scrolling, and the scroll-derived values the renderer
//! needs. All transitions are synchronous and idempotent given the
//! latest metrics; a section with no recorded geometry is skipped
//! silently since it only affects a cosmetic reveal transition.

use std::collections::{HashMap, HashSet};

use crate::constants::{ACTIVE_FRACTION, REVEAL_FRACTION};
use crate::section::SectionId;

/// Ephemeral scroll-derived values, recomputed on every scroll or
/// resize signal. Row units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    /// First content row currently at the top of the viewport
    pub offset: u16,
    /// Viewport height
    pub viewport_height: u16,
    /// Total laid-out content height
    pub content_height: u16,
}

impl ScrollMetrics {
    pub fn new(offset: u16, viewport_height: u16, content_height: u16) -> Self {
        Self {
            offset,
            viewport_height,
            content_height,
        }
    }

    /// Maximum scrollable distance; 0 when the content fits
    pub fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Scroll progress in [0, 1]; 0 when the content fits
    pub fn progress(&self) -> f32 {
        let max = self.max_scroll();
        if max == 0 {
            return 0.0;
        }
        (f32::from(self.offset) / f32::from(max)).clamp(0.0, 1.0)
    }
}

/// Per-section geometry in content rows, supplied by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRect {
    /// First content row of the section
    pub top: u16,
    /// Height in rows
    pub height: u16,
}

impl SectionRect {
    pub fn new(top: u16, height: u16) -> Self {
        Self { top, height }
    }

    /// One past the last content row
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// Section positions for the current layout
///
/// Rebuilt by the renderer whenever the layout changes; sections the
/// renderer did not record are simply absent.
#[derive(Debug, Clone, Default)]
pub struct SectionMap {
    rects: HashMap<SectionId, SectionRect>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: SectionId, rect: SectionRect) {
        self.rects.insert(id, rect);
    }

    pub fn get(&self, id: SectionId) -> Option<SectionRect> {
        self.rects.get(&id).copied()
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Viewport-relative edges of a section under the given metrics
fn relative_edges(rect: SectionRect, metrics: ScrollMetrics) -> (i32, i32) {
    let top = i32::from(rect.top) - i32::from(metrics.offset);
    let bottom = top + i32::from(rect.height);
    (top, bottom)
}

/// The section considered active for navigation highlighting
///
/// First section in display order whose top edge sits above
/// `ACTIVE_FRACTION` of the viewport while any part of it is still on
/// screen; `Header` when nothing qualifies.
pub fn active_section(metrics: ScrollMetrics, sections: &SectionMap) -> SectionId {
    let threshold = f32::from(metrics.viewport_height) * ACTIVE_FRACTION;
    for id in SectionId::ALL {
        let Some(rect) = sections.get(id) else {
            continue;
        };
        let (top, bottom) = relative_edges(rect, metrics);
        if (top as f32) < threshold && bottom > 0 {
            return id;
        }
    }
    SectionId::Header
}

/// The section visibility controller
///
/// Invariants: at most one accordion panel is open, and the revealed
/// set only ever grows within a session.
#[derive(Debug, Default)]
pub struct VisibilityController {
    open: Option<SectionId>,
    revealed: HashSet<SectionId>,
}

impl VisibilityController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently expanded accordion panel
    pub fn open(&self) -> Option<SectionId> {
        self.open
    }

    /// Toggle a panel: the open panel closes, any other becomes the open
    /// one. No error conditions; the domain is closed.
    pub fn toggle(&mut self, id: SectionId) {
        if self.open == Some(id) {
            self.open = None;
        } else {
            self.open = Some(id);
        }
    }

    /// Has this section crossed the reveal threshold yet?
    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed.contains(&id)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Mark sections whose top edge has risen above the reveal threshold
    /// while still on screen. Additive and idempotent; returns the newly
    /// revealed ids in display order.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics, sections: &SectionMap) -> Vec<SectionId> {
        let threshold = f32::from(metrics.viewport_height) * REVEAL_FRACTION;
        let mut fresh = Vec::new();
        for id in SectionId::ALL {
            if self.revealed.contains(&id) {
                continue;
            }
            let Some(rect) = sections.get(id) else {
                continue;
            };
            let (top, bottom) = relative_edges(rect, metrics);
            if (top as f32) < threshold && bottom > 0 {
                self.revealed.insert(id);
                fresh.push(id);
            }
        }
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(offset: u16) -> ScrollMetrics {
        ScrollMetrics::new(offset, 40, 200)
    }

    /// Layout with every section 20 rows tall, stacked in display order
    fn stacked() -> SectionMap {
        let mut map = SectionMap::new();
        for (i, id) in SectionId::ALL.into_iter().enumerate() {
            map.insert(id, SectionRect::new(i as u16 * 20, 20));
        }
        map
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        for before in [None, Some(SectionId::Education)] {
            let mut vis = VisibilityController::new();
            if let Some(id) = before {
                vis.toggle(id);
            }
            vis.toggle(SectionId::Skills);
            vis.toggle(SectionId::Skills);
            assert_eq!(vis.open(), before);
        }
    }

    #[test]
    fn test_toggle_is_mutually_exclusive() {
        let mut vis = VisibilityController::new();
        vis.toggle(SectionId::About);
        vis.toggle(SectionId::Contact);
        assert_eq!(vis.open(), Some(SectionId::Contact));
    }

    #[test]
    fn test_toggle_scenario_from_closed() {
        let mut vis = VisibilityController::new();
        assert_eq!(vis.open(), None);
        vis.toggle(SectionId::Skills);
        assert_eq!(vis.open(), Some(SectionId::Skills));
        vis.toggle(SectionId::Skills);
        assert_eq!(vis.open(), None);
    }

    #[test]
    fn test_progress_is_clamped_and_monotone() {
        let mut last = 0.0f32;
        for offset in 0..=200u16 {
            let p = metrics(offset).progress();
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn test_progress_midpoint_scenario() {
        // content 2000, viewport 1000, offset 500 -> 0.5
        let m = ScrollMetrics::new(500, 1000, 2000);
        assert!((m.progress() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_progress_zero_when_content_fits() {
        let m = ScrollMetrics::new(0, 50, 30);
        assert_eq!(m.max_scroll(), 0);
        assert_eq!(m.progress(), 0.0);
    }

    #[test]
    fn test_reveal_grows_monotonically() {
        let mut vis = VisibilityController::new();
        let map = stacked();
        let mut seen = 0;
        for offset in (0..=160).step_by(20) {
            vis.on_scroll(metrics(offset), &map);
            assert!(vis.revealed_count() >= seen);
            seen = vis.revealed_count();
        }
        // Scrolling back up never removes anything
        vis.on_scroll(metrics(0), &map);
        assert_eq!(vis.revealed_count(), seen);
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let mut vis = VisibilityController::new();
        let map = stacked();
        let first = vis.on_scroll(metrics(0), &map);
        assert!(!first.is_empty());
        let second = vis.on_scroll(metrics(0), &map);
        assert!(second.is_empty());
    }

    #[test]
    fn test_reveal_skips_missing_geometry() {
        let mut vis = VisibilityController::new();
        let mut map = SectionMap::new();
        map.insert(SectionId::Header, SectionRect::new(0, 10));
        let fresh = vis.on_scroll(metrics(0), &map);
        assert_eq!(fresh, vec![SectionId::Header]);
        assert!(!vis.is_revealed(SectionId::Contact));
    }

    #[test]
    fn test_sections_below_fold_stay_unrevealed() {
        let mut vis = VisibilityController::new();
        let map = stacked();
        // viewport 40 rows, reveal threshold at row 30: header (0) and
        // bio (20) qualify, about (40) does not
        let fresh = vis.on_scroll(metrics(0), &map);
        assert_eq!(fresh, vec![SectionId::Header, SectionId::Bio]);
    }

    #[test]
    fn test_active_section_tracks_offset() {
        let map = stacked();
        assert_eq!(active_section(metrics(0), &map), SectionId::Header);
        // Offset 25: header bottom is at -5, bio top at -5 -> bio wins
        assert_eq!(active_section(metrics(25), &map), SectionId::Bio);
        // Offset 65: about is gone (bottom -5), education top at -5
        assert_eq!(active_section(metrics(65), &map), SectionId::Education);
    }

    #[test]
    fn test_active_section_falls_back_to_header() {
        let map = SectionMap::new();
        assert_eq!(active_section(metrics(0), &map), SectionId::Header);
    }
}
