//! Contact panel
//!
//! Three outbound links. Rows are hit-testable; activating one hands
//! the URI to the platform opener.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use reef_core::{Portfolio, SectionId};

use super::{faded, panel_height, render_panel_chrome, SectionBlock, SectionCtx};
use crate::tui::themes::Theme;

/// Body rows start this far into the block (header + top pad)
const BODY_OFFSET: u16 = 2;

pub struct ContactBlock {
    email: String,
    github: String,
    linkedin: String,
}

impl ContactBlock {
    pub fn new(portfolio: &Portfolio) -> Self {
        Self {
            email: portfolio.contact.email.clone(),
            github: portfolio.contact.github.clone(),
            linkedin: portfolio.contact.linkedin.clone(),
        }
    }

    fn rows(&self) -> [(&'static str, &str, String); 3] {
        [
            ("email", self.email.as_str(), format!("mailto:{}", self.email)),
            ("github", self.github.as_str(), self.github.clone()),
            ("linkedin", self.linkedin.as_str(), self.linkedin.clone()),
        ]
    }
}

impl SectionBlock for ContactBlock {
    fn id(&self) -> SectionId {
        SectionId::Contact
    }

    fn height(&self, _width: u16, ctx: SectionCtx) -> u16 {
        panel_height(3, ctx)
    }

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, ctx: SectionCtx) {
        let Some(body) = render_panel_chrome(self.id().title(), area, buf, theme, ctx) else {
            return;
        };
        let label_style = Style::default().fg(faded(theme.accent_color, theme, ctx));
        let link_style = Style::default()
            .fg(faded(theme.link_color, theme, ctx))
            .add_modifier(Modifier::UNDERLINED);

        for (i, (label, display, _)) in self.rows().into_iter().enumerate() {
            let y = body.y + i as u16;
            if y >= body.y + body.height {
                break;
            }
            buf.set_stringn(body.x, y, format!("{:<10}", label), 10, label_style);
            buf.set_stringn(
                body.x + 10,
                y,
                display,
                usize::from(body.width.saturating_sub(10)),
                link_style,
            );
        }
    }

    fn links(&self, ctx: SectionCtx) -> Vec<(u16, String)> {
        if !ctx.expanded {
            return Vec::new();
        }
        self.rows()
            .into_iter()
            .enumerate()
            .map(|(i, (_, _, uri))| (BODY_OFFSET + i as u16, uri))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_links_while_collapsed() {
        let block = ContactBlock::new(&Portfolio::built_in());
        assert!(block.links(SectionCtx::settled()).is_empty());
    }

    #[test]
    fn test_links_map_to_body_rows() {
        let block = ContactBlock::new(&Portfolio::built_in());
        let links = block.links(SectionCtx::settled().expanded());
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].0, BODY_OFFSET);
        assert!(links[0].1.starts_with("mailto:"));
        assert!(links[1].1.starts_with("https://github.com/"));
        assert_eq!(links[2].0, BODY_OFFSET + 2);
    }
}
