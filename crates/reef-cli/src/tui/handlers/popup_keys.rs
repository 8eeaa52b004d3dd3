//! Keyboard handling while a popup is open

use crossterm::event::{KeyCode, KeyEvent};
use reef_core::config;

use crate::tui::app::App;
use crate::tui::state::Popup;

impl App {
    pub(crate) fn handle_popup_key(&mut self, key: KeyEvent) {
        match self.ui.popup {
            Popup::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.ui.popup = Popup::None;
                }
                KeyCode::Up | KeyCode::Char('k') => self.popups.help.scroll_up(),
                KeyCode::Down | KeyCode::Char('j') => self.popups.help.scroll_down(),
                _ => {}
            },
            Popup::ThemeSelect => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.popups.theme.prev(&self.registry);
                    let name = self.popups.theme.selected_name(&self.registry);
                    self.apply_theme(&name);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.popups.theme.next(&self.registry);
                    let name = self.popups.theme.selected_name(&self.registry);
                    self.apply_theme(&name);
                }
                KeyCode::Enter => {
                    let name = self.popups.theme.selected_name(&self.registry);
                    self.apply_theme(&name);
                    self.popups.theme.commit();
                    self.settings.theme = name;
                    if let Err(err) = config::save_settings(&self.settings) {
                        tracing::warn!("failed to save settings: {err}");
                    }
                    self.ui.popup = Popup::None;
                }
                KeyCode::Esc => {
                    if let Some(original) = self.popups.theme.cancel() {
                        self.apply_theme(&original);
                    }
                    self.ui.popup = Popup::None;
                }
                _ => {}
            },
            Popup::None => {}
        }
        self.dirty = true;
    }
}
