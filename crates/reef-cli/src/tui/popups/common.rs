//! Shared popup chrome

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear};
use ratatui::Frame;

use crate::tui::themes::Theme;

/// Standard popup dimensions
#[derive(Debug, Clone, Copy)]
pub enum PopupSize {
    Small,
    Large,
}

impl PopupSize {
    pub fn dimensions(self) -> (u16, u16) {
        match self {
            PopupSize::Small => (36, 12),
            PopupSize::Large => (56, 20),
        }
    }
}

/// Center a w x h rect inside `area`, clamped to fit
pub fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Bordered block shared by all popups
pub fn popup_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_color))
        .style(Style::default().bg(theme.surface_color))
}

/// Clear what is underneath the popup
pub fn render_popup_background(f: &mut Frame, area: Rect, theme: &Theme) {
    f.render_widget(Clear, area);
    f.buffer_mut()
        .set_style(area, Style::default().bg(theme.surface_color));
}

/// One-line "more content" indicator for scrollable popups
pub fn scroll_indicator(direction: &str, count: usize, theme: &Theme) -> Line<'static> {
    let arrow = if direction == "up" { "▲" } else { "▼" };
    Line::from(Span::styled(
        format!("  {} {} more", arrow, count),
        Style::default()
            .fg(theme.dim_color)
            .add_modifier(Modifier::ITALIC),
    ))
}
