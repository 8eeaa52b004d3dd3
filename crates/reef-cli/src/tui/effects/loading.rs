//! Loading screen
//!
//! Spinner ring and caption shown over the backdrop for the fixed
//! splash duration before the portfolio appears.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const TITLE: &str = "Diving into the Ocean...";
const CAPTION: &str = "Preparing your portfolio";

pub struct LoadingScreen {
    frame: u64,
}

impl LoadingScreen {
    pub fn new() -> Self {
        Self { frame: 0 }
    }

    /// Advance the spinner; always dirties while the splash is up
    pub fn tick(&mut self) -> bool {
        self.frame = self.frame.wrapping_add(1);
        true
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width < 4 || area.height < 5 {
            return;
        }
        let center_y = area.y + area.height / 2;
        let centered = |text: &str| area.x + (area.width.saturating_sub(text.width() as u16)) / 2;

        let spinner = SPINNER[(self.frame / 2) as usize % SPINNER.len()];
        buf.set_string(
            centered(spinner),
            center_y - 2,
            spinner,
            Style::default().fg(theme.accent_color),
        );
        buf.set_string(
            centered(TITLE),
            center_y,
            TITLE,
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        );
        buf.set_string(
            centered(CAPTION),
            center_y + 1,
            CAPTION,
            Style::default().fg(theme.dim_color),
        );
    }
}

impl Default for LoadingScreen {
    fn default() -> Self {
        Self::new()
    }
}
