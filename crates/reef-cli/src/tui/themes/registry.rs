//! Theme registry for discovering and accessing themes

use std::collections::HashMap;

use once_cell::sync::Lazy;
use ratatui::style::Color;

use super::{Backdrop, Theme};

/// Hardcoded minimal fallback used when both the requested theme and
/// the "ocean" default are missing from the registry.
static DEFAULT_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    name: "ocean".to_string(),
    display_name: "Ocean".to_string(),
    backdrop: Backdrop::Ocean,
    bg_color: Color::Rgb(15, 23, 42),
    surface_color: Color::Rgb(23, 37, 84),
    border_color: Color::Rgb(14, 116, 144),
    title_color: Color::Rgb(236, 254, 255),
    accent_color: Color::Rgb(34, 211, 238),
    text_color: Color::Rgb(207, 250, 254),
    dim_color: Color::Rgb(148, 163, 184),
    highlight_color: Color::Rgb(103, 232, 249),
    link_color: Color::Rgb(103, 232, 249),
    success_color: Color::Rgb(52, 211, 153),
    warning_color: Color::Rgb(251, 191, 36),
    bubble_color: Color::Rgb(103, 232, 249),
    weed_color: Color::Rgb(34, 197, 94),
    wave_color: Color::Rgb(14, 165, 233),
    status_bar_bg_color: Color::Rgb(12, 74, 110),
    scrollbar_bg_color: Color::Rgb(30, 41, 59),
    scrollbar_fg_color: Color::Rgb(14, 116, 144),
    nav_bg_color: Color::Rgb(12, 30, 60),
    nav_active_color: Color::Rgb(34, 211, 238),
});

/// Registry of all available themes
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    ordered_names: Vec<String>,
}

impl ThemeRegistry {
    /// Create a new registry with all built-in themes
    pub fn new() -> Self {
        let mut registry = Self {
            themes: HashMap::new(),
            ordered_names: Vec::new(),
        };

        use super::definitions::*;

        registry.register(ocean());
        registry.register(abyss());
        registry.register(circuit());

        registry
    }

    fn register(&mut self, theme: Theme) {
        self.ordered_names.push(theme.name.clone());
        self.themes.insert(theme.name.clone(), theme);
    }

    /// Get a theme by exact name
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Get a theme by name, or the default theme
    pub fn get_or_default(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .or_else(|| self.themes.get("ocean"))
            .unwrap_or(&DEFAULT_THEME)
    }

    /// List all themes in registration order
    pub fn list(&self) -> Vec<(&String, &Theme)> {
        self.ordered_names
            .iter()
            .filter_map(|name| self.themes.get(name).map(|theme| (name, theme)))
            .collect()
    }

    /// Get the number of registered themes
    pub fn count(&self) -> usize {
        self.themes.len()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_ins_resolve() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.count(), 3);
        for name in ["ocean", "abyss", "circuit"] {
            assert_eq!(registry.get_or_default(name).name, name);
        }
    }

    #[test]
    fn test_unknown_falls_back_to_ocean() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.get_or_default("lagoon").name, "ocean");
        assert!(registry.get("lagoon").is_none());
    }

    #[test]
    fn test_list_is_in_registration_order() {
        let registry = ThemeRegistry::new();
        let names: Vec<&str> = registry.list().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["ocean", "abyss", "circuit"]);
    }

    #[test]
    fn test_circuit_pairs_with_circuit_backdrop() {
        let registry = ThemeRegistry::new();
        assert_eq!(
            registry.get_or_default("circuit").backdrop,
            Backdrop::Circuit
        );
        assert_eq!(registry.get_or_default("abyss").backdrop, Backdrop::Ocean);
    }
}
