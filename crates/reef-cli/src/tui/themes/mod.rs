//! Color themes
//!
//! A theme is a flat palette plus the backdrop it pairs with. Themes are
//! registered in `ThemeRegistry`; the builder in `base` derives sensible
//! values for fields a definition leaves unset.

mod base;
mod definitions;
mod registry;

pub use base::{mix_colors, ThemeBuilder};
pub use registry::ThemeRegistry;

use ratatui::style::Color;

/// Which decorative backdrop a theme draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    Ocean,
    Circuit,
}

/// A complete color theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub display_name: String,
    pub backdrop: Backdrop,
    /// Frame background
    pub bg_color: Color,
    /// Panel body / popup background
    pub surface_color: Color,
    /// Separators and popup borders
    pub border_color: Color,
    /// Section titles and the hero name
    pub title_color: Color,
    /// Chevrons, icons, selection markers
    pub accent_color: Color,
    /// Body text
    pub text_color: Color,
    /// De-emphasized text, unrevealed bodies, the footer
    pub dim_color: Color,
    /// Badges, chips, hovered headers
    pub highlight_color: Color,
    /// Outbound links
    pub link_color: Color,
    /// Skill chips
    pub success_color: Color,
    /// Placeholder notices
    pub warning_color: Color,
    /// Backdrop particles (bubbles, pulses)
    pub bubble_color: Color,
    /// Seaweed / circuit traces
    pub weed_color: Color,
    /// Surface wave / node pads
    pub wave_color: Color,
    pub status_bar_bg_color: Color,
    pub scrollbar_bg_color: Color,
    pub scrollbar_fg_color: Color,
    pub nav_bg_color: Color,
    pub nav_active_color: Color,
}
