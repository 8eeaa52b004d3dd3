//! Theme builder with derived defaults

use ratatui::style::Color;

use super::{Backdrop, Theme};

/// Sentinel for "not set yet" - replaced by a derived value in `build`
const UNSET: Color = Color::Rgb(0, 0, 0);

/// Builder pattern for creating themes; unset extended fields are
/// derived from the core palette.
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        backdrop: Backdrop,
    ) -> Self {
        Self {
            theme: Theme {
                name: name.into(),
                display_name: display_name.into(),
                backdrop,
                bg_color: UNSET,
                surface_color: UNSET,
                border_color: UNSET,
                title_color: UNSET,
                accent_color: UNSET,
                text_color: UNSET,
                dim_color: UNSET,
                highlight_color: UNSET,
                link_color: UNSET,
                success_color: UNSET,
                warning_color: UNSET,
                bubble_color: UNSET,
                weed_color: UNSET,
                wave_color: UNSET,
                status_bar_bg_color: UNSET,
                scrollbar_bg_color: UNSET,
                scrollbar_fg_color: UNSET,
                nav_bg_color: UNSET,
                nav_active_color: UNSET,
            },
        }
    }

    /// Set core colors - required for every theme
    pub fn core_colors(
        mut self,
        bg: Color,
        border: Color,
        title: Color,
        accent: Color,
        text: Color,
        dim: Color,
    ) -> Self {
        self.theme.bg_color = bg;
        self.theme.border_color = border;
        self.theme.title_color = title;
        self.theme.accent_color = accent;
        self.theme.text_color = text;
        self.theme.dim_color = dim;
        self
    }

    /// Set emphasis colors
    pub fn emphasis_colors(
        mut self,
        highlight: Color,
        link: Color,
        success: Color,
        warning: Color,
    ) -> Self {
        self.theme.highlight_color = highlight;
        self.theme.link_color = link;
        self.theme.success_color = success;
        self.theme.warning_color = warning;
        self
    }

    /// Set backdrop colors
    pub fn backdrop_colors(mut self, bubble: Color, weed: Color, wave: Color) -> Self {
        self.theme.bubble_color = bubble;
        self.theme.weed_color = weed;
        self.theme.wave_color = wave;
        self
    }

    /// Set any remaining fields manually
    pub fn extended_colors(mut self, f: impl FnOnce(&mut Theme)) -> Self {
        f(&mut self.theme);
        self
    }

    /// Build the theme, deriving defaults for unset fields
    pub fn build(mut self) -> Theme {
        if matches!(self.theme.surface_color, Color::Rgb(0, 0, 0)) {
            self.theme.surface_color = lighten(self.theme.bg_color, 0.06);
        }
        if matches!(self.theme.highlight_color, Color::Rgb(0, 0, 0)) {
            self.theme.highlight_color = self.theme.accent_color;
        }
        if matches!(self.theme.link_color, Color::Rgb(0, 0, 0)) {
            self.theme.link_color = self.theme.accent_color;
        }
        if matches!(self.theme.success_color, Color::Rgb(0, 0, 0)) {
            self.theme.success_color = self.theme.accent_color;
        }
        if matches!(self.theme.warning_color, Color::Rgb(0, 0, 0)) {
            self.theme.warning_color = self.theme.title_color;
        }
        if matches!(self.theme.bubble_color, Color::Rgb(0, 0, 0)) {
            self.theme.bubble_color = self.theme.accent_color;
        }
        if matches!(self.theme.weed_color, Color::Rgb(0, 0, 0)) {
            self.theme.weed_color = self.theme.border_color;
        }
        if matches!(self.theme.wave_color, Color::Rgb(0, 0, 0)) {
            self.theme.wave_color = self.theme.bubble_color;
        }
        if matches!(self.theme.status_bar_bg_color, Color::Rgb(0, 0, 0)) {
            self.theme.status_bar_bg_color = self.theme.surface_color;
        }
        if matches!(self.theme.scrollbar_bg_color, Color::Rgb(0, 0, 0)) {
            self.theme.scrollbar_bg_color = self.theme.surface_color;
        }
        if matches!(self.theme.scrollbar_fg_color, Color::Rgb(0, 0, 0)) {
            self.theme.scrollbar_fg_color = self.theme.border_color;
        }
        if matches!(self.theme.nav_bg_color, Color::Rgb(0, 0, 0)) {
            self.theme.nav_bg_color = self.theme.surface_color;
        }
        if matches!(self.theme.nav_active_color, Color::Rgb(0, 0, 0)) {
            self.theme.nav_active_color = self.theme.accent_color;
        }
        self.theme
    }
}

/// Linear blend between two RGB colors; non-RGB colors pass through
pub fn mix_colors(from: Color, to: Color, amount: f32) -> Color {
    let (fr, fg, fb) = match from {
        Color::Rgb(r, g, b) => (r as f32, g as f32, b as f32),
        _ => return from,
    };
    let (tr, tg, tb) = match to {
        Color::Rgb(r, g, b) => (r as f32, g as f32, b as f32),
        _ => return from,
    };

    let t = amount.clamp(0.0, 1.0);
    let mix = |a: f32, b: f32| ((a + (b - a) * t).round() as i32).clamp(0, 255) as u8;
    Color::Rgb(mix(fr, tr), mix(fg, tg), mix(fb, tb))
}

/// Nudge a color toward white
fn lighten(color: Color, amount: f32) -> Color {
    mix_colors(color, Color::Rgb(255, 255, 255), amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(mix_colors(a, b, 0.0), a);
        assert_eq!(mix_colors(a, b, 1.0), b);
        assert_eq!(mix_colors(a, b, 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_mix_clamps_amount() {
        let a = Color::Rgb(10, 10, 10);
        let b = Color::Rgb(20, 20, 20);
        assert_eq!(mix_colors(a, b, 2.0), b);
        assert_eq!(mix_colors(a, b, -1.0), a);
    }

    #[test]
    fn test_build_derives_unset_fields() {
        let theme = ThemeBuilder::new("t", "T", Backdrop::Ocean)
            .core_colors(
                Color::Rgb(10, 10, 20),
                Color::Rgb(60, 60, 80),
                Color::Rgb(220, 230, 240),
                Color::Rgb(0, 200, 255),
                Color::Rgb(200, 200, 210),
                Color::Rgb(120, 120, 140),
            )
            .build();
        assert_ne!(theme.surface_color, Color::Rgb(0, 0, 0));
        assert_eq!(theme.link_color, theme.accent_color);
        assert_eq!(theme.nav_bg_color, theme.surface_color);
    }
}
