//! Mouse handling
//!
//! Hit testing runs against the areas the last render recorded.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use reef_core::SectionId;

use crate::tui::app::App;
use crate::tui::nav::NavRail;
use crate::tui::state::{Popup, View};

impl App {
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.ui.view != View::Portfolio || self.ui.popup != Popup::None {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.scroll.scroll_up(3);
                self.dirty = true;
            }
            MouseEventKind::ScrollDown => {
                self.scroll.scroll_down(3);
                self.dirty = true;
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_left_click(mouse.column, mouse.row);
            }
            MouseEventKind::Drag(MouseButton::Left) if self.layout.dragging_scrollbar => {
                self.handle_scrollbar_click(mouse.row);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.layout.dragging_scrollbar = false;
            }
            MouseEventKind::Moved => {
                let hovered = self.layout.header_at(mouse.column, mouse.row);
                if hovered != self.hovered {
                    self.hovered = hovered;
                    self.dirty = true;
                }
            }
            _ => {}
        }
    }

    fn handle_left_click(&mut self, column: u16, row: u16) {
        if let Some(nav_area) = self.layout.on_nav(column, row) {
            if let Some(id) = NavRail::hit(nav_area, row) {
                self.jump_to(id);
            }
            return;
        }

        if let Some(id) = self.layout.header_at(column, row) {
            self.visibility.toggle(id);
            if let Some(idx) = SectionId::ACCORDION.iter().position(|s| *s == id) {
                self.selected = idx;
            }
            self.dirty = true;
            return;
        }

        let link = self.layout.link_at(column, row).map(|l| l.uri.clone());
        if let Some(uri) = link {
            self.open_link(&uri);
            return;
        }

        if self.layout.on_scrollbar(column, row) {
            self.layout.dragging_scrollbar = true;
            self.handle_scrollbar_click(row);
        }
    }
}
