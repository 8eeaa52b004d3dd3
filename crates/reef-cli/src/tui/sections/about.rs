//! About panel

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use reef_core::{Portfolio, SectionId};

use super::{body_style, body_width, panel_height, render_panel_chrome, wrap, SectionBlock, SectionCtx};
use crate::tui::themes::Theme;

pub struct AboutBlock {
    text: String,
}

impl AboutBlock {
    pub fn new(portfolio: &Portfolio) -> Self {
        Self {
            text: portfolio.about.clone(),
        }
    }
}

impl SectionBlock for AboutBlock {
    fn id(&self) -> SectionId {
        SectionId::About
    }

    fn height(&self, width: u16, ctx: SectionCtx) -> u16 {
        let body = wrap(&self.text, body_width(width)).len() as u16;
        panel_height(body, ctx)
    }

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, ctx: SectionCtx) {
        let Some(body) = render_panel_chrome(self.id().title(), area, buf, theme, ctx) else {
            return;
        };
        let style = body_style(theme, ctx);
        for (i, line) in wrap(&self.text, body.width).into_iter().enumerate() {
            let y = body.y + i as u16;
            if y >= body.y + body.height {
                break;
            }
            buf.set_stringn(body.x, y, &line, usize::from(body.width), style);
        }
    }
}
