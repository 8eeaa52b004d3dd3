//! Projects panel
//!
//! Shows project entries, or a placeholder while the list is empty.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use reef_core::content::ProjectEntry;
use reef_core::{Portfolio, SectionId};
use unicode_width::UnicodeWidthStr;

use super::{body_style, body_width, faded, panel_height, render_panel_chrome, wrap, SectionBlock, SectionCtx};
use crate::tui::themes::Theme;

const PLACEHOLDER_TITLE: &str = "Work in Progress";
const PLACEHOLDER_NOTE: &str =
    "I'm currently working on some exciting projects. Check back soon!";

pub struct ProjectsBlock {
    entries: Vec<ProjectEntry>,
}

impl ProjectsBlock {
    pub fn new(portfolio: &Portfolio) -> Self {
        Self {
            entries: portfolio.projects.clone(),
        }
    }

    fn body_height(&self, width: u16) -> u16 {
        let text_width = body_width(width);
        if self.entries.is_empty() {
            return 2 + wrap(PLACEHOLDER_NOTE, text_width).len() as u16;
        }
        let rows: u16 = self
            .entries
            .iter()
            .map(|entry| 1 + wrap(&entry.summary, text_width).len() as u16)
            .sum();
        rows + (self.entries.len() as u16).saturating_sub(1)
    }
}

impl SectionBlock for ProjectsBlock {
    fn id(&self) -> SectionId {
        SectionId::Projects
    }

    fn height(&self, width: u16, ctx: SectionCtx) -> u16 {
        panel_height(self.body_height(width), ctx)
    }

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, ctx: SectionCtx) {
        let Some(body) = render_panel_chrome(self.id().title(), area, buf, theme, ctx) else {
            return;
        };
        let bottom = body.y + body.height;
        let max = usize::from(body.width);

        if self.entries.is_empty() {
            let title_style = Style::default()
                .fg(faded(theme.warning_color, theme, ctx))
                .add_modifier(Modifier::BOLD);
            let note_style = body_style(theme, ctx);
            let centered =
                |text: &str| body.x + (body.width.saturating_sub(text.width() as u16)) / 2;
            buf.set_stringn(
                centered(PLACEHOLDER_TITLE),
                body.y,
                PLACEHOLDER_TITLE,
                max,
                title_style,
            );
            for (i, line) in wrap(PLACEHOLDER_NOTE, body.width).into_iter().enumerate() {
                let y = body.y + 2 + i as u16;
                if y >= bottom {
                    break;
                }
                buf.set_stringn(centered(&line), y, &line, max, note_style);
            }
            return;
        }

        let name_style = Style::default()
            .fg(faded(theme.highlight_color, theme, ctx))
            .add_modifier(Modifier::BOLD);
        let summary_style = body_style(theme, ctx);
        let mut y = body.y;
        for entry in &self.entries {
            if y >= bottom {
                break;
            }
            buf.set_stringn(body.x, y, &entry.name, max, name_style);
            let lines = wrap(&entry.summary, body.width);
            for (i, line) in lines.iter().enumerate() {
                let line_y = y + 1 + i as u16;
                if line_y >= bottom {
                    break;
                }
                buf.set_stringn(body.x, line_y, line, max, summary_style);
            }
            y += 2 + lines.len() as u16;
        }
    }
}
