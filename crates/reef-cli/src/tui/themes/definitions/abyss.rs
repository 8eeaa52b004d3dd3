use ratatui::style::Color;

use crate::tui::themes::{Backdrop, Theme, ThemeBuilder};

/// Abyss theme - the ocean at midnight
pub fn abyss() -> Theme {
    ThemeBuilder::new("abyss", "Abyss", Backdrop::Ocean)
        .core_colors(
            Color::Rgb(2, 6, 23),
            Color::Rgb(49, 46, 129),
            Color::Rgb(199, 210, 254),
            Color::Rgb(129, 140, 248),
            Color::Rgb(165, 180, 203),
            Color::Rgb(100, 116, 139),
        )
        .emphasis_colors(
            Color::Rgb(165, 243, 252),
            Color::Rgb(125, 211, 252),
            Color::Rgb(94, 234, 212),
            Color::Rgb(253, 224, 71),
        )
        .backdrop_colors(
            Color::Rgb(67, 56, 202),
            Color::Rgb(21, 128, 61),
            Color::Rgb(30, 64, 175),
        )
        .extended_colors(|theme| {
            theme.surface_color = Color::Rgb(15, 23, 42);
            theme.nav_bg_color = Color::Rgb(9, 14, 34);
        })
        .build()
}
