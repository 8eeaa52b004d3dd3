//! Ocean backdrop
//!
//! Bubbles drift upward, fish cross in both directions, seaweed sways
//! along the bottom and a wave crest rolls across the top. Everything is
//! clipped to the area handed in; content draws over it.

use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use super::Background;
use crate::tui::themes::Theme;

const BUBBLE_GLYPHS: [char; 3] = ['°', 'o', 'O'];
const FISH_RIGHT: &str = "><>";
const FISH_LEFT: &str = "<><";
const FISH_COUNT: usize = 6;
const CRAB_COUNT: usize = 4;

#[derive(Debug)]
struct Bubble {
    col: u16,
    row: f32,
    speed: f32,
    glyph: char,
}

#[derive(Debug)]
struct Fish {
    col: f32,
    row: u16,
    /// Columns per tick; negative swims left
    speed: f32,
    tint: usize,
}

#[derive(Debug)]
struct Crab {
    col: f32,
    dir: f32,
}

pub struct OceanBackground {
    width: u16,
    height: u16,
    bubbles: Vec<Bubble>,
    fish: Vec<Fish>,
    crabs: Vec<Crab>,
    frame: u64,
}

impl OceanBackground {
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            bubbles: Vec::new(),
            fish: Vec::new(),
            crabs: Vec::new(),
            frame: 0,
        }
    }

    fn spawn(&mut self) {
        let mut rng = rand::thread_rng();
        let w = self.width.max(4);
        let h = self.height.max(4);

        self.bubbles = (0..usize::from(w / 10).clamp(3, 12))
            .map(|_| Bubble {
                col: rng.gen_range(0..w),
                row: rng.gen_range(0.0..f32::from(h)),
                speed: rng.gen_range(0.08..0.3),
                glyph: BUBBLE_GLYPHS[rng.gen_range(0..BUBBLE_GLYPHS.len())],
            })
            .collect();

        self.fish = (0..FISH_COUNT)
            .map(|i| {
                let dir = if i % 2 == 0 { 1.0 } else { -1.0 };
                let lane = (i as u32 + 1) * u32::from(h) / (FISH_COUNT as u32 + 2);
                Fish {
                    col: rng.gen_range(0.0..f32::from(w)),
                    row: (lane as u16).min(h - 1),
                    speed: dir * rng.gen_range(0.15..0.5),
                    tint: i,
                }
            })
            .collect();

        self.crabs = (0..CRAB_COUNT)
            .map(|_| Crab {
                col: rng.gen_range(0.0..f32::from(w)),
                dir: if rng.gen_bool(0.5) { 0.12 } else { -0.12 },
            })
            .collect();
    }
}

impl Default for OceanBackground {
    fn default() -> Self {
        Self::new()
    }
}

impl Background for OceanBackground {
    fn resize(&mut self, width: u16, height: u16) {
        if (width, height) != (self.width, self.height) {
            self.width = width;
            self.height = height;
            self.spawn();
        }
    }

    fn tick(&mut self) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        self.frame = self.frame.wrapping_add(1);
        let mut rng = rand::thread_rng();
        let w = f32::from(self.width.max(4));
        let h = f32::from(self.height.max(4));

        for bubble in &mut self.bubbles {
            bubble.row -= bubble.speed;
            if bubble.row < 1.0 {
                bubble.row = h - 1.0;
                bubble.col = rng.gen_range(0..self.width.max(4));
            }
        }

        for fish in &mut self.fish {
            fish.col += fish.speed;
            if fish.col < -4.0 {
                fish.col = w;
            } else if fish.col > w + 4.0 {
                fish.col = -4.0;
            }
        }

        for crab in &mut self.crabs {
            crab.col += crab.dir;
            if crab.col < 1.0 || crab.col > w - 2.0 || rng.gen_bool(0.01) {
                crab.dir = -crab.dir;
                crab.col = crab.col.clamp(1.0, w - 2.0);
            }
        }

        true
    }

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Surface wave rolling along the top
        let wave_style = Style::default().fg(theme.wave_color);
        let phase = (self.frame / 4) as u16;
        for col in 0..area.width {
            if (col + phase) % 7 < 4 {
                buf.set_string(area.x + col, area.y, "~", wave_style);
            }
            if area.height > 1 && (col + phase + 3) % 11 < 3 {
                buf.set_string(area.x + col, area.y + 1, "~", wave_style);
            }
        }

        // Seaweed columns along the bottom, swaying with the frame
        let weed_style = Style::default().fg(theme.weed_color);
        let mut col = 3u16;
        while col + 1 < area.width {
            let stalk = 3 + (col * 7) % 5;
            for d in 0..stalk.min(area.height.saturating_sub(1)) {
                let row = area.y + area.height - 1 - d;
                let lean = (self.frame / 6 + u64::from(d)) % 2 == 0;
                let glyph = if lean { "(" } else { ")" };
                buf.set_string(area.x + col, row, glyph, weed_style);
            }
            col += 9;
        }

        // Crabs shuffling along the sand
        let crab_style = Style::default().fg(theme.warning_color);
        for crab in &self.crabs {
            let col = crab.col as u16;
            if col < area.width {
                buf.set_string(area.x + col, area.y + area.height - 1, "V", crab_style);
            }
        }

        // Bubbles
        let bubble_style = Style::default().fg(theme.bubble_color);
        for bubble in &self.bubbles {
            let row = bubble.row as u16;
            if bubble.col < area.width && row < area.height {
                buf.set_string(
                    area.x + bubble.col,
                    area.y + row,
                    bubble.glyph.to_string(),
                    bubble_style,
                );
            }
        }

        // Fish, tinted per individual
        let tints = [theme.bubble_color, theme.success_color, theme.highlight_color];
        for fish in &self.fish {
            if fish.col < 0.0 {
                continue;
            }
            let col = fish.col as u16;
            if col + 3 <= area.width && fish.row < area.height {
                let glyph = if fish.speed >= 0.0 { FISH_RIGHT } else { FISH_LEFT };
                let style = Style::default().fg(tints[fish.tint % tints.len()]);
                buf.set_string(area.x + col, area.y + fish.row, glyph, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::ThemeRegistry;

    #[test]
    fn test_render_stays_inside_the_area() {
        let registry = ThemeRegistry::new();
        let theme = registry.get_or_default("ocean").clone();
        let full = Rect::new(0, 0, 40, 24);
        let area = Rect::new(5, 5, 20, 10);

        let mut bg = OceanBackground::new();
        bg.resize(area.width, area.height);
        for _ in 0..200 {
            bg.tick();
        }
        let mut buf = Buffer::empty(full);
        bg.render(area, &mut buf, &theme);

        for y in 0..full.height {
            for x in 0..full.width {
                let inside = area.contains(ratatui::layout::Position::new(x, y));
                if !inside {
                    assert_eq!(
                        buf.cell((x, y)).unwrap().symbol(),
                        " ",
                        "wrote outside the area at ({x},{y})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_resize_respawns_particles() {
        let mut bg = OceanBackground::new();
        assert!(bg.bubbles.is_empty());
        bg.resize(80, 24);
        assert!(!bg.bubbles.is_empty());
        assert!(!bg.fish.is_empty());
    }
}
