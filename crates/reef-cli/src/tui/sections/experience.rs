//! Experience panel
//!
//! Entries carry a left gutter line, the way the original set them off
//! from the panel body.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use reef_core::content::ExperienceEntry;
use reef_core::{Portfolio, SectionId};

use super::{body_style, body_width, faded, panel_height, render_panel_chrome, wrap, SectionBlock, SectionCtx};
use crate::tui::themes::Theme;

/// Columns taken by the gutter and its gap
const GUTTER: u16 = 2;

pub struct ExperienceBlock {
    entries: Vec<ExperienceEntry>,
}

impl ExperienceBlock {
    pub fn new(portfolio: &Portfolio) -> Self {
        Self {
            entries: portfolio.experience.clone(),
        }
    }

    fn entry_height(entry: &ExperienceEntry, width: u16) -> u16 {
        2 + wrap(&entry.description, width.saturating_sub(GUTTER).max(1)).len() as u16
    }

    fn body_height(&self, width: u16) -> u16 {
        let text_width = body_width(width);
        let rows: u16 = self
            .entries
            .iter()
            .map(|entry| Self::entry_height(entry, text_width))
            .sum();
        rows + (self.entries.len() as u16).saturating_sub(1)
    }
}

impl SectionBlock for ExperienceBlock {
    fn id(&self) -> SectionId {
        SectionId::Experience
    }

    fn height(&self, width: u16, ctx: SectionCtx) -> u16 {
        panel_height(self.body_height(width), ctx)
    }

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, ctx: SectionCtx) {
        let Some(body) = render_panel_chrome(self.id().title(), area, buf, theme, ctx) else {
            return;
        };
        let role_style = Style::default()
            .fg(body_style(theme, ctx).fg.unwrap_or(theme.text_color))
            .add_modifier(Modifier::BOLD);
        let company_style = Style::default().fg(faded(theme.success_color, theme, ctx));
        let desc_style = body_style(theme, ctx);
        let gutter_style = Style::default().fg(faded(theme.accent_color, theme, ctx));

        let bottom = body.y + body.height;
        let text_x = body.x + GUTTER;
        let max = usize::from(body.width.saturating_sub(GUTTER));
        let mut y = body.y;
        for entry in &self.entries {
            let desc_lines = wrap(&entry.description, body.width.saturating_sub(GUTTER).max(1));
            let rows = 2 + desc_lines.len() as u16;
            for row in 0..rows {
                if y + row >= bottom {
                    break;
                }
                buf.set_string(body.x, y + row, "│", gutter_style);
            }
            if y >= bottom {
                break;
            }
            buf.set_stringn(text_x, y, &entry.role, max, role_style);
            if y + 1 < bottom {
                buf.set_stringn(
                    text_x,
                    y + 1,
                    format!("{} • {}", entry.company, entry.date),
                    max,
                    company_style,
                );
            }
            for (i, line) in desc_lines.iter().enumerate() {
                let line_y = y + 2 + i as u16;
                if line_y >= bottom {
                    break;
                }
                buf.set_stringn(text_x, line_y, line, max, desc_style);
            }
            y += rows + 1;
        }
    }
}
