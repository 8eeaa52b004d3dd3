//! Theme selection popup
//!
//! Moving the selection previews the theme live; Enter keeps it, Esc
//! restores whatever was active when the popup opened.

use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::common::{center_rect, popup_block, render_popup_background, PopupSize};
use crate::tui::themes::{Theme, ThemeRegistry};

/// Theme selection popup state
pub struct ThemeSelectPopup {
    pub selected: usize,
    /// Theme active when the popup opened, restored on cancel
    original: Option<String>,
}

impl Default for ThemeSelectPopup {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeSelectPopup {
    pub fn new() -> Self {
        Self {
            selected: 0,
            original: None,
        }
    }

    /// Open the popup with the current theme selected
    pub fn open(&mut self, current: &str, registry: &ThemeRegistry) {
        self.selected = registry
            .list()
            .iter()
            .position(|(name, _)| name.as_str() == current)
            .unwrap_or(0);
        self.original = Some(current.to_string());
    }

    pub fn next(&mut self, registry: &ThemeRegistry) {
        self.selected = (self.selected + 1) % registry.count().max(1);
    }

    pub fn prev(&mut self, registry: &ThemeRegistry) {
        let count = registry.count().max(1);
        self.selected = (self.selected + count - 1) % count;
    }

    /// Name under the selection cursor
    pub fn selected_name(&self, registry: &ThemeRegistry) -> String {
        registry
            .list()
            .get(self.selected)
            .map(|(name, _)| (*name).clone())
            .unwrap_or_else(|| "ocean".to_string())
    }

    /// Keep the previewed theme
    pub fn commit(&mut self) {
        self.original = None;
    }

    /// Abandon the preview; returns the theme to restore
    pub fn cancel(&mut self) -> Option<String> {
        self.original.take()
    }

    pub fn render(&self, f: &mut Frame, theme: &Theme, registry: &ThemeRegistry) {
        let (w, h) = PopupSize::Small.dimensions();
        let area = center_rect(w, h, f.area());
        render_popup_background(f, area, theme);

        let block = popup_block(theme).title(" Theme ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(inner);

        let mut lines = vec![Line::from("")];
        for (i, (_, entry)) in registry.list().into_iter().enumerate() {
            let style = if i == self.selected {
                Style::default()
                    .fg(theme.accent_color)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(theme.text_color)
            };
            let marker = if i == self.selected { "› " } else { "  " };
            lines.push(Line::from(Span::styled(
                format!("{}{}", marker, entry.display_name),
                style,
            )));
        }
        f.render_widget(
            Paragraph::new(lines).style(Style::default().bg(theme.surface_color)),
            chunks[0],
        );

        let footer = Paragraph::new(Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(theme.accent_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(": apply  ", Style::default().fg(theme.text_color)),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(theme.accent_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(": cancel", Style::default().fg(theme.text_color)),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(footer, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_selects_current_theme() {
        let registry = ThemeRegistry::new();
        let mut popup = ThemeSelectPopup::new();
        popup.open("circuit", &registry);
        assert_eq!(popup.selected_name(&registry), "circuit");
    }

    #[test]
    fn test_selection_wraps_both_ways() {
        let registry = ThemeRegistry::new();
        let mut popup = ThemeSelectPopup::new();
        popup.open("ocean", &registry);
        popup.prev(&registry);
        assert_eq!(popup.selected_name(&registry), "circuit");
        popup.next(&registry);
        assert_eq!(popup.selected_name(&registry), "ocean");
    }

    #[test]
    fn test_cancel_returns_original_once() {
        let registry = ThemeRegistry::new();
        let mut popup = ThemeSelectPopup::new();
        popup.open("abyss", &registry);
        popup.next(&registry);
        assert_eq!(popup.cancel(), Some("abyss".to_string()));
        assert_eq!(popup.cancel(), None);
    }

    #[test]
    fn test_commit_clears_the_restore_point() {
        let registry = ThemeRegistry::new();
        let mut popup = ThemeSelectPopup::new();
        popup.open("ocean", &registry);
        popup.commit();
        assert_eq!(popup.cancel(), None);
    }
}
