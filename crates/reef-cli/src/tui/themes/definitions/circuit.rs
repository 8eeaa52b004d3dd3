use ratatui::style::Color;

use crate::tui::themes::{Backdrop, Theme, ThemeBuilder};

/// Circuit theme - amber traces on dark slate
pub fn circuit() -> Theme {
    ThemeBuilder::new("circuit", "Circuit Board", Backdrop::Circuit)
        .core_colors(
            Color::Rgb(15, 23, 42),
            Color::Rgb(124, 45, 18),
            Color::Rgb(253, 186, 116),
            Color::Rgb(249, 115, 22),
            Color::Rgb(226, 232, 240),
            Color::Rgb(100, 116, 139),
        )
        .emphasis_colors(
            Color::Rgb(251, 146, 60),
            Color::Rgb(253, 186, 116),
            Color::Rgb(163, 230, 53),
            Color::Rgb(250, 204, 21),
        )
        .backdrop_colors(
            Color::Rgb(251, 191, 36),
            Color::Rgb(71, 85, 105),
            Color::Rgb(251, 146, 60),
        )
        .extended_colors(|theme| {
            theme.surface_color = Color::Rgb(28, 25, 23);
            theme.status_bar_bg_color = Color::Rgb(41, 37, 36);
            theme.nav_bg_color = Color::Rgb(24, 24, 27);
        })
        .build()
}
