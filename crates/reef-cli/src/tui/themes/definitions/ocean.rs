use ratatui::style::Color;

use crate::tui::themes::{Backdrop, Theme, ThemeBuilder};

/// Ocean theme - the original cyan-on-deep-blue look
pub fn ocean() -> Theme {
    ThemeBuilder::new("ocean", "Ocean", Backdrop::Ocean)
        .core_colors(
            Color::Rgb(15, 23, 42),
            Color::Rgb(14, 116, 144),
            Color::Rgb(236, 254, 255),
            Color::Rgb(34, 211, 238),
            Color::Rgb(207, 250, 254),
            Color::Rgb(148, 163, 184),
        )
        .emphasis_colors(
            Color::Rgb(103, 232, 249),
            Color::Rgb(103, 232, 249),
            Color::Rgb(52, 211, 153),
            Color::Rgb(251, 191, 36),
        )
        .backdrop_colors(
            Color::Rgb(103, 232, 249),
            Color::Rgb(34, 197, 94),
            Color::Rgb(14, 165, 233),
        )
        .extended_colors(|theme| {
            theme.surface_color = Color::Rgb(23, 37, 84);
            theme.status_bar_bg_color = Color::Rgb(12, 74, 110);
            theme.scrollbar_bg_color = Color::Rgb(30, 41, 59);
            theme.scrollbar_fg_color = Color::Rgb(14, 116, 144);
            theme.nav_bg_color = Color::Rgb(12, 30, 60);
        })
        .build()
}
