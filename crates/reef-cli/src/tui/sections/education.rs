//! Education panel

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use reef_core::content::EducationEntry;
use reef_core::{Portfolio, SectionId};

use super::{body_style, faded, panel_height, render_panel_chrome, SectionBlock, SectionCtx};
use crate::tui::themes::Theme;

pub struct EducationBlock {
    entries: Vec<EducationEntry>,
}

impl EducationBlock {
    pub fn new(portfolio: &Portfolio) -> Self {
        Self {
            entries: portfolio.education.clone(),
        }
    }

    fn body_height(&self) -> u16 {
        // degree + school line per entry, blank row between entries
        let n = self.entries.len() as u16;
        n * 2 + n.saturating_sub(1)
    }
}

impl SectionBlock for EducationBlock {
    fn id(&self) -> SectionId {
        SectionId::Education
    }

    fn height(&self, _width: u16, ctx: SectionCtx) -> u16 {
        panel_height(self.body_height(), ctx)
    }

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, ctx: SectionCtx) {
        let Some(body) = render_panel_chrome(self.id().title(), area, buf, theme, ctx) else {
            return;
        };
        let degree_style = Style::default()
            .fg(faded(theme.highlight_color, theme, ctx))
            .add_modifier(Modifier::BOLD);
        let detail_style = body_style(theme, ctx);

        let bottom = body.y + body.height;
        let mut y = body.y;
        let max = usize::from(body.width);
        for entry in &self.entries {
            if y + 1 >= bottom {
                break;
            }
            buf.set_stringn(body.x, y, &entry.degree, max, degree_style);
            buf.set_stringn(
                body.x,
                y + 1,
                format!("{} • {}", entry.school, entry.year),
                max,
                detail_style,
            );
            y += 3;
        }
    }
}
