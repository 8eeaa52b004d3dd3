//! Help popup with the keybind reference

use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::common::{center_rect, popup_block, render_popup_background, scroll_indicator, PopupSize};
use crate::tui::themes::Theme;

/// Help popup state
pub struct HelpPopup {
    pub scroll_offset: usize,
}

impl Default for HelpPopup {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpPopup {
    pub fn new() -> Self {
        Self { scroll_offset: 0 }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        // Clamped against content length at render time
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn render(&mut self, f: &mut Frame, theme: &Theme) {
        let (w, h) = PopupSize::Large.dimensions();
        let area = center_rect(w, h, f.area());
        render_popup_background(f, area, theme);

        let block = popup_block(theme).title(" Keybinds ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(inner);

        let all_content = self.keybinds_content(theme);
        let total_lines = all_content.len();
        let visible_height = usize::from(chunks[0].height).saturating_sub(2);
        let max_offset = total_lines.saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_offset);

        let mut display_lines: Vec<Line> = Vec::new();
        if self.scroll_offset > 0 {
            display_lines.push(scroll_indicator("up", self.scroll_offset, theme));
        }
        for line in all_content
            .into_iter()
            .skip(self.scroll_offset)
            .take(visible_height)
        {
            display_lines.push(line);
        }
        let remaining = total_lines.saturating_sub(self.scroll_offset + visible_height);
        if remaining > 0 {
            display_lines.push(scroll_indicator("down", remaining, theme));
        }

        let content =
            Paragraph::new(display_lines).style(Style::default().bg(theme.surface_color));
        f.render_widget(content, chunks[0]);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled(
                "↑/↓",
                Style::default()
                    .fg(theme.accent_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(": scroll  ", Style::default().fg(theme.text_color)),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(theme.accent_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(": close", Style::default().fg(theme.text_color)),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(footer, chunks[1]);
    }

    fn keybinds_content(&self, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from("")];

        let sections = [
            (
                "Global",
                vec![
                    ("q / Ctrl+Q", "Quit"),
                    ("t", "Change theme"),
                    ("a", "Toggle animations"),
                    ("?", "Show this help"),
                    ("Esc", "Close popup / skip intro"),
                ],
            ),
            (
                "Navigation",
                vec![
                    ("j/k or ↑/↓", "Scroll"),
                    ("PgUp/PgDn", "Scroll a page"),
                    ("Home/End", "Jump to top/bottom"),
                    ("1-8", "Jump to a section"),
                ],
            ),
            (
                "Sections",
                vec![
                    ("Tab/Shift+Tab", "Select a panel"),
                    ("Enter/Space", "Expand or collapse"),
                ],
            ),
            (
                "Links",
                vec![
                    ("e", "Open email"),
                    ("g", "Open GitHub"),
                    ("l", "Open LinkedIn"),
                ],
            ),
        ];

        for (section, bindings) in sections {
            lines.push(Line::from(Span::styled(
                format!("{}:", section),
                Style::default()
                    .fg(theme.title_color)
                    .add_modifier(Modifier::BOLD),
            )));
            for (key, desc) in bindings {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:<15}", key),
                        Style::default().fg(theme.accent_color),
                    ),
                    Span::styled(desc.to_string(), Style::default().fg(theme.text_color)),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines
    }
}
