//! Section widgets
//!
//! Each portfolio section is its own widget. Accordion panels implement
//! `SectionBlock` and share the same chrome: a chevron header row, a
//! bottom separator, and a padded body that only renders while expanded.
//! The hero and bio strips have their own shapes and render
//! unconditionally.

pub mod about;
pub mod bio;
pub mod contact;
pub mod education;
pub mod experience;
pub mod header;
pub mod projects;
pub mod skills;

pub use bio::BioBlock;
pub use header::HeroBlock;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use reef_core::{Portfolio, SectionId};

use crate::tui::themes::{mix_colors, Theme};

/// Render context for an accordion panel
#[derive(Debug, Clone, Copy)]
pub struct SectionCtx {
    pub expanded: bool,
    /// Keyboard cursor rests on this panel
    pub selected: bool,
    /// Mouse hovers over the header
    pub hovered: bool,
    /// Reveal transition progress in [0, 1]
    pub reveal: f32,
}

#[cfg(test)]
impl SectionCtx {
    /// Context for a settled, collapsed, unfocused panel
    pub fn settled() -> Self {
        Self {
            expanded: false,
            selected: false,
            hovered: false,
            reveal: 1.0,
        }
    }

    pub fn expanded(mut self) -> Self {
        self.expanded = true;
        self
    }
}

/// Core trait for accordion panels
pub trait SectionBlock {
    fn id(&self) -> SectionId;

    /// Height in rows for the given width and state
    fn height(&self, width: u16, ctx: SectionCtx) -> u16;

    /// Render into `area`, which was sized via `height`
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, ctx: SectionCtx);

    /// Clickable link rows as (row offset within the block, uri)
    fn links(&self, ctx: SectionCtx) -> Vec<(u16, String)> {
        let _ = ctx;
        Vec::new()
    }
}

/// Build the accordion panels in display order
pub fn build_panels(portfolio: &Portfolio) -> Vec<Box<dyn SectionBlock>> {
    vec![
        Box::new(about::AboutBlock::new(portfolio)),
        Box::new(education::EducationBlock::new(portfolio)),
        Box::new(experience::ExperienceBlock::new(portfolio)),
        Box::new(skills::SkillsBlock::new(portfolio)),
        Box::new(projects::ProjectsBlock::new(portfolio)),
        Box::new(contact::ContactBlock::new(portfolio)),
    ]
}

/// Chrome rows around an expanded body: header, top pad, bottom pad,
/// separator
pub(crate) const CHROME_ROWS: u16 = 4;
/// Collapsed panels are a header plus separator
pub(crate) const COLLAPSED_ROWS: u16 = 2;
/// Body indent from the panel edge
pub(crate) const BODY_INDENT: u16 = 2;

/// Width available to body text
pub(crate) fn body_width(width: u16) -> u16 {
    width.saturating_sub(BODY_INDENT * 2).max(1)
}

/// Total panel height for a given body height
pub(crate) fn panel_height(body: u16, ctx: SectionCtx) -> u16 {
    if ctx.expanded {
        body + CHROME_ROWS
    } else {
        COLLAPSED_ROWS
    }
}

/// Draw the header row and bottom separator; returns the body area
/// while expanded
pub(crate) fn render_panel_chrome(
    title: &str,
    area: Rect,
    buf: &mut Buffer,
    theme: &Theme,
    ctx: SectionCtx,
) -> Option<Rect> {
    if area.width < 6 || area.height < COLLAPSED_ROWS {
        return None;
    }

    let chevron = if ctx.expanded { "▾" } else { "▸" };
    buf.set_string(
        area.x + 1,
        area.y,
        chevron,
        Style::default().fg(theme.accent_color),
    );
    if ctx.selected {
        buf.set_string(
            area.x,
            area.y,
            "›",
            Style::default().fg(theme.accent_color),
        );
    }

    let title_color = if ctx.selected || ctx.hovered || ctx.expanded {
        theme.highlight_color
    } else {
        theme.title_color
    };
    buf.set_stringn(
        area.x + 3,
        area.y,
        title,
        usize::from(area.width.saturating_sub(4)),
        Style::default().fg(title_color).add_modifier(Modifier::BOLD),
    );

    let sep_y = area.y + area.height - 1;
    buf.set_string(
        area.x,
        sep_y,
        "─".repeat(usize::from(area.width)),
        Style::default().fg(theme.border_color),
    );

    if ctx.expanded && area.height > CHROME_ROWS {
        Some(Rect::new(
            area.x + BODY_INDENT,
            area.y + 2,
            body_width(area.width),
            area.height - CHROME_ROWS,
        ))
    } else {
        None
    }
}

/// Body text style with the reveal fade applied
pub(crate) fn body_style(theme: &Theme, ctx: SectionCtx) -> Style {
    Style::default().fg(mix_colors(theme.dim_color, theme.text_color, ctx.reveal))
}

/// Fade an accent color in with the reveal transition
pub(crate) fn faded(color: ratatui::style::Color, theme: &Theme, ctx: SectionCtx) -> ratatui::style::Color {
    mix_colors(theme.dim_color, color, ctx.reveal)
}

/// Wrap body text to the given width
pub(crate) fn wrap(text: &str, width: u16) -> Vec<String> {
    textwrap::wrap(text, usize::from(width.max(1)))
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_height_states() {
        assert_eq!(panel_height(10, SectionCtx::settled()), COLLAPSED_ROWS);
        assert_eq!(
            panel_height(10, SectionCtx::settled().expanded()),
            10 + CHROME_ROWS
        );
    }

    #[test]
    fn test_wrap_never_returns_zero_width_lines() {
        let lines = wrap("a few words that need wrapping", 10);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|line| line.len() <= 10));
    }

    #[test]
    fn test_panels_cover_every_accordion_section() {
        let panels = build_panels(&Portfolio::built_in());
        let ids: Vec<SectionId> = panels.iter().map(|p| p.id()).collect();
        assert_eq!(ids, SectionId::ACCORDION.to_vec());
    }

    #[test]
    fn test_heights_are_consistent_between_states() {
        // Every panel must be strictly taller expanded than collapsed
        let panels = build_panels(&Portfolio::built_in());
        for panel in &panels {
            let collapsed = panel.height(80, SectionCtx::settled());
            let expanded = panel.height(80, SectionCtx::settled().expanded());
            assert_eq!(collapsed, COLLAPSED_ROWS, "{}", panel.id());
            assert!(expanded > collapsed, "{}", panel.id());
        }
    }
}
