//! Section navigation rail
//!
//! Fixed left-edge list of sections; the active section's entry is
//! highlighted. Clicking an entry scrolls that section to the top of
//! the viewport. Hidden on narrow terminals.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use reef_core::SectionId;

use crate::tui::themes::Theme;

/// Terminal columns below which the rail hides
pub const NAV_MIN_WIDTH: u16 = 70;
/// Rail width when shown
pub const NAV_WIDTH: u16 = 14;

/// First row of the entry list within the rail
fn list_top(area: Rect) -> u16 {
    let entries = SectionId::ALL.len() as u16;
    area.y + area.height.saturating_sub(entries) / 2
}

pub struct NavRail;

impl NavRail {
    pub fn render(area: Rect, buf: &mut Buffer, theme: &Theme, active: SectionId) {
        if area.width < 4 || (area.height as usize) < SectionId::ALL.len() {
            return;
        }
        buf.set_style(area, Style::default().bg(theme.nav_bg_color));

        let top = list_top(area);
        for (i, id) in SectionId::ALL.into_iter().enumerate() {
            let y = top + i as u16;
            let (marker, style) = if id == active {
                (
                    "▸ ",
                    Style::default()
                        .fg(theme.nav_active_color)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(theme.dim_color))
            };
            buf.set_stringn(
                area.x + 1,
                y,
                format!("{}{}", marker, id.title()),
                usize::from(area.width.saturating_sub(1)),
                style,
            );
        }
    }

    /// Section entry under the given screen row, if any
    pub fn hit(area: Rect, row: u16) -> Option<SectionId> {
        let top = list_top(area);
        let idx = row.checked_sub(top)? as usize;
        SectionId::ALL.get(idx).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_maps_rows_to_sections() {
        let area = Rect::new(0, 0, NAV_WIDTH, 24);
        let top = list_top(area);
        assert_eq!(NavRail::hit(area, top), Some(SectionId::Header));
        assert_eq!(NavRail::hit(area, top + 7), Some(SectionId::Contact));
        assert_eq!(NavRail::hit(area, top + 8), None);
        if top > 0 {
            assert_eq!(NavRail::hit(area, top - 1), None);
        }
    }
}
