//! Keyboard handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use reef_core::SectionId;

use crate::tui::app::App;
use crate::tui::state::{Popup, View};

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Ctrl+C / Ctrl+Q quit everywhere, including the splash
        if ctrl && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c')) {
            self.should_quit = true;
            return;
        }

        if self.ui.view == View::Loading {
            if key.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            return;
        }
        if self.ui.popup != Popup::None {
            self.handle_popup_key(key);
            return;
        }

        // Any key finishes the intro typing first
        if !self.typewriter.is_done() {
            self.typewriter.skip();
            self.dirty = true;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll.scroll_down(1);
                self.dirty = true;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll.scroll_up(1);
                self.dirty = true;
            }
            KeyCode::PageDown => {
                let page = self.scroll.viewport_height().saturating_sub(1).max(1);
                self.scroll.scroll_down(page);
                self.dirty = true;
            }
            KeyCode::PageUp => {
                let page = self.scroll.viewport_height().saturating_sub(1).max(1);
                self.scroll.scroll_up(page);
                self.dirty = true;
            }
            KeyCode::Home => {
                self.scroll.to_top();
                self.dirty = true;
            }
            KeyCode::End => {
                self.scroll.to_bottom();
                self.dirty = true;
            }
            KeyCode::Tab => {
                self.selected = (self.selected + 1) % SectionId::ACCORDION.len();
                self.dirty = true;
            }
            KeyCode::BackTab => {
                let count = SectionId::ACCORDION.len();
                self.selected = (self.selected + count - 1) % count;
                self.dirty = true;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let id = SectionId::ACCORDION[self.selected];
                self.visibility.toggle(id);
                self.dirty = true;
            }
            KeyCode::Char('t') => {
                self.popups.theme.open(&self.ui.theme_name, &self.registry);
                self.ui.popup = Popup::ThemeSelect;
                self.dirty = true;
            }
            KeyCode::Char('?') => {
                self.popups.help.scroll_offset = 0;
                self.ui.popup = Popup::Help;
                self.dirty = true;
            }
            KeyCode::Char('a') => self.toggle_animations(),
            KeyCode::Char('e') => {
                let uri = format!("mailto:{}", self.portfolio.contact.email);
                self.open_link(&uri);
            }
            KeyCode::Char('g') => {
                let uri = self.portfolio.contact.github.clone();
                self.open_link(&uri);
            }
            KeyCode::Char('l') => {
                let uri = self.portfolio.contact.linkedin.clone();
                self.open_link(&uri);
            }
            KeyCode::Char(digit @ '1'..='8') => {
                let idx = digit as usize - '1' as usize;
                self.jump_to(SectionId::ALL[idx]);
            }
            _ => {}
        }
    }
}
