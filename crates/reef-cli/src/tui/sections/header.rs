//! Hero header strip
//!
//! Name and title typed out by the typewriter, badges on the right,
//! one-line facts underneath. Always visible, never collapsible.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use reef_core::Portfolio;
use unicode_width::UnicodeWidthStr;

use crate::tui::effects::Typewriter;
use crate::tui::themes::Theme;

const ICON: &str = "<º)))><";
pub const HERO_ROWS: u16 = 5;

pub struct HeroBlock {
    badges: Vec<String>,
    tags: Vec<String>,
}

impl HeroBlock {
    pub fn new(portfolio: &Portfolio) -> Self {
        Self {
            badges: portfolio.header.badges.clone(),
            tags: portfolio.header.tags.clone(),
        }
    }

    pub fn height(&self, _width: u16) -> u16 {
        HERO_ROWS
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, typewriter: &Typewriter) {
        if area.width < 12 || area.height < HERO_ROWS {
            return;
        }

        buf.set_string(
            area.x + 1,
            area.y,
            ICON,
            Style::default().fg(theme.accent_color),
        );

        let name_x = area.x + 1 + ICON.width() as u16 + 2;
        let name = typewriter.visible(0);
        buf.set_stringn(
            name_x,
            area.y,
            name,
            usize::from(area.width.saturating_sub(name_x - area.x)),
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        );
        let cursor_style = Style::default().fg(theme.accent_color);
        let right = area.x + area.width;
        if typewriter.cursor_line() == Some(0) {
            let cursor_x = name_x + name.width() as u16;
            if cursor_x < right {
                buf.set_string(cursor_x, area.y, "▌", cursor_style);
            }
        }

        // Badges hug the right edge; dropped when they would collide
        // with the name
        let badges = self
            .badges
            .iter()
            .map(|b| format!("[{}]", b))
            .collect::<Vec<_>>()
            .join(" ");
        let badge_w = badges.width() as u16;
        if badge_w > 0 && area.width > badge_w + 1 {
            let badge_x = area.x + area.width - badge_w - 1;
            if badge_x > name_x + name.width() as u16 + 2 {
                buf.set_string(
                    badge_x,
                    area.y,
                    badges,
                    Style::default().fg(theme.highlight_color),
                );
            }
        }

        let title = typewriter.visible(1);
        buf.set_stringn(
            name_x,
            area.y + 1,
            title,
            usize::from(area.width.saturating_sub(name_x - area.x)),
            Style::default().fg(theme.accent_color),
        );
        if typewriter.cursor_line() == Some(1) {
            let cursor_x = name_x + title.width() as u16;
            if cursor_x < right {
                buf.set_string(cursor_x, area.y + 1, "▌", cursor_style);
            }
        }

        let tags = self
            .tags
            .iter()
            .map(|t| format!("· {}", t))
            .collect::<Vec<_>>()
            .join("   ");
        buf.set_stringn(
            area.x + 1,
            area.y + 3,
            tags,
            usize::from(area.width.saturating_sub(2)),
            Style::default().fg(theme.dim_color),
        );

        buf.set_string(
            area.x,
            area.y + HERO_ROWS - 1,
            "─".repeat(usize::from(area.width)),
            Style::default().fg(theme.border_color),
        );
    }
}
