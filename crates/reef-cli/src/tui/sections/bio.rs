//! Bio strip
//!
//! The blurb plus the highlight cards under it. Always visible; only
//! the reveal fade applies.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use reef_core::content::Highlight;
use reef_core::Portfolio;

use super::{body_width, wrap, BODY_INDENT};
use crate::tui::themes::{mix_colors, Theme};

pub struct BioBlock {
    blurb: String,
    highlights: Vec<Highlight>,
}

impl BioBlock {
    pub fn new(portfolio: &Portfolio) -> Self {
        Self {
            blurb: portfolio.bio.blurb.clone(),
            highlights: portfolio.bio.highlights.clone(),
        }
    }

    fn blurb_lines(&self, width: u16) -> Vec<String> {
        wrap(&self.blurb, body_width(width))
    }

    pub fn height(&self, width: u16) -> u16 {
        // pad + blurb + blank + highlights + pad + separator
        self.blurb_lines(width).len() as u16 + self.highlights.len() as u16 + 4
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, reveal: f32) {
        if area.width < 8 || area.height < 4 {
            return;
        }
        let text_style =
            Style::default().fg(mix_colors(theme.dim_color, theme.text_color, reveal));
        let label_style = Style::default()
            .fg(mix_colors(theme.dim_color, theme.highlight_color, reveal))
            .add_modifier(Modifier::BOLD);

        let x = area.x + BODY_INDENT;
        let max = usize::from(body_width(area.width));
        let mut y = area.y + 1;
        for line in self.blurb_lines(area.width) {
            if y >= area.y + area.height {
                break;
            }
            buf.set_stringn(x, y, &line, max, text_style);
            y += 1;
        }

        y += 1;
        for highlight in &self.highlights {
            if y >= area.y + area.height {
                break;
            }
            buf.set_stringn(x, y, format!("{:<11}", highlight.label), max, label_style);
            let detail_x = x + 11;
            buf.set_stringn(
                detail_x,
                y,
                &highlight.detail,
                max.saturating_sub(11),
                text_style,
            );
            y += 1;
        }

        buf.set_string(
            area.x,
            area.y + area.height - 1,
            "─".repeat(usize::from(area.width)),
            Style::default().fg(theme.border_color),
        );
    }
}
