//! Frame composition
//!
//! Layers, bottom to top: backdrop, nav rail, content viewport, status
//! bar, popup overlay. The content is laid out in an offscreen buffer
//! at full height and the visible rows are copied in; screen areas are
//! recorded for hit testing on the following events.

use chrono::Datelike;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::Frame;
use reef_core::visibility::active_section;
use reef_core::{SectionId, SectionRect};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::App;
use crate::tui::nav::{NavRail, NAV_MIN_WIDTH, NAV_WIDTH};
use crate::tui::state::{LinkTarget, Popup, View};
use crate::tui::themes::Theme;

/// Content column max width (the original's centered page column)
const CONTENT_MAX_WIDTH: u16 = 84;
/// Rows under the accordion for the footer
const FOOTER_ROWS: u16 = 3;

impl App {
    pub fn render(&mut self, f: &mut Frame) {
        let theme = self.ui.theme.clone();
        let area = f.area();
        if area.width < 24 || area.height < 8 {
            f.buffer_mut()
                .set_style(area, Style::default().bg(theme.bg_color));
            if area.height > 0 {
                f.buffer_mut().set_stringn(
                    area.x,
                    area.y,
                    "Terminal too small",
                    usize::from(area.width),
                    Style::default().fg(theme.text_color),
                );
            }
            return;
        }

        f.buffer_mut()
            .set_style(area, Style::default().bg(theme.bg_color));
        self.background.resize(area.width, area.height);
        self.background.render(area, f.buffer_mut(), &theme);

        match self.ui.view {
            View::Loading => self.loading.render(area, f.buffer_mut(), &theme),
            View::Portfolio => self.render_portfolio(f, &theme),
        }

        match self.ui.popup {
            Popup::None => {}
            Popup::Help => self.popups.help.render(f, &theme),
            Popup::ThemeSelect => self.popups.theme.render(f, &theme, &self.registry),
        }
    }

    fn render_portfolio(&mut self, f: &mut Frame, theme: &Theme) {
        let area = f.area();
        let status_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        let main = Rect::new(area.x, area.y, area.width, area.height - 1);

        self.layout.begin_frame();

        let nav_area = if main.width >= NAV_MIN_WIDTH {
            Some(Rect::new(main.x, main.y, NAV_WIDTH, main.height))
        } else {
            None
        };
        let region = match nav_area {
            Some(nav) => Rect::new(
                main.x + nav.width,
                main.y,
                main.width - nav.width,
                main.height,
            ),
            None => main,
        };

        // Content column, centered, with one spare column for the
        // scrollbar track
        let cw = region.width.saturating_sub(2).min(CONTENT_MAX_WIDTH);
        if cw < 20 || region.height == 0 {
            return;
        }
        let cx = region.x + (region.width - cw) / 2;
        let content_area = Rect::new(cx, region.y, cw, region.height);
        self.layout.content_area = content_area;

        // Content-space layout
        let hero_h = self.hero.height(cw);
        let bio_h = self.bio.height(cw);
        let mut ctxs = Vec::with_capacity(self.panels.len());
        let mut spans = Vec::with_capacity(self.panels.len());
        let mut total = hero_h + bio_h;
        for (i, panel) in self.panels.iter().enumerate() {
            let ctx = self.panel_ctx(i);
            let height = panel.height(cw, ctx);
            spans.push((total, height));
            ctxs.push(ctx);
            total += height;
        }
        total += FOOTER_ROWS;

        self.layout
            .sections
            .insert(SectionId::Header, SectionRect::new(0, hero_h));
        self.layout
            .sections
            .insert(SectionId::Bio, SectionRect::new(hero_h, bio_h));
        for (panel, (top, height)) in self.panels.iter().zip(&spans) {
            self.layout
                .sections
                .insert(panel.id(), SectionRect::new(*top, *height));
        }

        // Scroll bookkeeping: latest geometry wins, pending jumps
        // resolve against the fresh layout
        self.scroll.set_geometry(content_area.height, total);
        if let Some(id) = self.pending_jump.take() {
            if let Some(rect) = self.layout.sections.get(id) {
                self.scroll.scroll_to(rect.top);
            }
        }
        let metrics = self.scroll.metrics();
        for id in self.visibility.on_scroll(metrics, &self.layout.sections) {
            self.reveal.start(id);
        }

        // Draw the full content into an offscreen buffer
        let content_rect = Rect::new(0, 0, cw, total);
        let mut cbuf = Buffer::empty(content_rect);
        cbuf.set_style(
            content_rect,
            Style::default().bg(theme.bg_color).fg(theme.text_color),
        );

        self.hero
            .render(Rect::new(0, 0, cw, hero_h), &mut cbuf, theme, &self.typewriter);
        let bio_reveal = self
            .reveal
            .progress(SectionId::Bio, self.visibility.is_revealed(SectionId::Bio));
        self.bio
            .render(Rect::new(0, hero_h, cw, bio_h), &mut cbuf, theme, bio_reveal);
        for ((panel, (top, height)), ctx) in self.panels.iter().zip(&spans).zip(&ctxs) {
            panel.render(Rect::new(0, *top, cw, *height), &mut cbuf, theme, *ctx);
        }

        let footer = format!(
            "{} {}",
            chrono::Local::now().year(),
            self.portfolio.header.name
        );
        let footer_x = cw.saturating_sub(footer.width() as u16) / 2;
        cbuf.set_stringn(
            footer_x,
            total - 2,
            &footer,
            usize::from(cw),
            Style::default().fg(theme.dim_color),
        );

        // Blit the visible rows
        let offset = self.scroll.offset();
        let visible = content_area.height.min(total.saturating_sub(offset));
        let fbuf = f.buffer_mut();
        for row in 0..visible {
            let src_y = offset + row;
            let dst_y = content_area.y + row;
            for col in 0..cw {
                let Some(src) = cbuf.cell((col, src_y)) else {
                    continue;
                };
                if let Some(dst) = fbuf.cell_mut((content_area.x + col, dst_y)) {
                    *dst = src.clone();
                }
            }
        }

        // Screen-space hit targets for whatever ended up visible
        let on_screen = |content_row: u16| -> Option<u16> {
            (content_row >= offset && content_row < offset + visible)
                .then(|| content_area.y + content_row - offset)
        };
        for (panel, (top, _)) in self.panels.iter().zip(&spans) {
            if let Some(y) = on_screen(*top) {
                self.layout
                    .headers
                    .push((panel.id(), Rect::new(content_area.x, y, cw, 1)));
            }
        }
        for ((panel, (top, _)), ctx) in self.panels.iter().zip(&spans).zip(&ctxs) {
            for (row, uri) in panel.links(*ctx) {
                if let Some(y) = on_screen(top + row) {
                    self.layout.links.push(LinkTarget {
                        area: Rect::new(content_area.x + 2, y, cw.saturating_sub(4), 1),
                        uri,
                    });
                }
            }
        }

        // Scroll progress bar on the right edge of the column
        if total > content_area.height && content_area.x + cw < region.x + region.width {
            let track = Rect::new(
                content_area.x + cw,
                content_area.y,
                1,
                content_area.height,
            );
            render_scrollbar(
                f.buffer_mut(),
                track,
                self.scroll.progress(),
                content_area.height,
                total,
                theme,
            );
            self.layout.scrollbar_area = Some(track);
        }

        let active = active_section(metrics, &self.layout.sections);
        if let Some(nav) = nav_area {
            NavRail::render(nav, f.buffer_mut(), theme, active);
            self.layout.nav_area = Some(nav);
        }

        render_status_bar(
            f.buffer_mut(),
            status_area,
            theme,
            active,
            self.scroll.progress(),
            self.ui.animations,
        );
    }
}

fn render_scrollbar(
    buf: &mut Buffer,
    track: Rect,
    progress: f32,
    visible: u16,
    total: u16,
    theme: &Theme,
) {
    for row in 0..track.height {
        buf.set_string(
            track.x,
            track.y + row,
            "│",
            Style::default().fg(theme.scrollbar_bg_color),
        );
    }
    let thumb_h = ((u32::from(visible) * u32::from(track.height)) / u32::from(total.max(1)))
        .max(1) as u16;
    let span = track.height.saturating_sub(thumb_h);
    let thumb_top = (progress * f32::from(span)).round() as u16;
    for row in 0..thumb_h.min(track.height) {
        buf.set_string(
            track.x,
            track.y + thumb_top + row,
            "█",
            Style::default().fg(theme.scrollbar_fg_color),
        );
    }
}

fn render_status_bar(
    buf: &mut Buffer,
    area: Rect,
    theme: &Theme,
    active: SectionId,
    progress: f32,
    animations: bool,
) {
    buf.set_style(area, Style::default().bg(theme.status_bar_bg_color));

    let mut hints = " ? help · t theme · q quit".to_string();
    if !animations {
        hints.push_str(" · animations off");
    }
    buf.set_stringn(
        area.x,
        area.y,
        &hints,
        usize::from(area.width),
        Style::default().fg(theme.dim_color),
    );

    let right = format!("{} · {:>3.0}% ", active.title(), progress * 100.0);
    let right_w = right.width() as u16;
    if area.width > right_w {
        buf.set_string(
            area.x + area.width - right_w,
            area.y,
            &right,
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD),
        );
    }
}
