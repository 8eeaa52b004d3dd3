//! Circuit-board backdrop
//!
//! A grid of traces with pulses running along them; node pads sit at
//! the intersections and the pulses light the lanes as they pass.

use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use super::Background;
use crate::tui::themes::Theme;

const ROW_SPACING: u16 = 5;
const COL_SPACING: u16 = 13;

#[derive(Debug)]
struct Pulse {
    /// Index into the horizontal or vertical lane list
    lane: usize,
    horizontal: bool,
    pos: f32,
    speed: f32,
}

pub struct CircuitBackground {
    width: u16,
    height: u16,
    pulses: Vec<Pulse>,
    frame: u64,
}

/// Lane positions for the given extent: every `spacing` rows/cols,
/// starting one spacing in
fn lanes(extent: u16, spacing: u16) -> Vec<u16> {
    (1..)
        .map(|i| i * spacing)
        .take_while(|pos| *pos + 1 < extent)
        .collect()
}

impl CircuitBackground {
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            pulses: Vec::new(),
            frame: 0,
        }
    }

    fn spawn(&mut self) {
        let mut rng = rand::thread_rng();
        let rows = lanes(self.height, ROW_SPACING);
        let cols = lanes(self.width, COL_SPACING);

        let mut pulses = Vec::with_capacity(rows.len() + cols.len());
        for (lane, _) in rows.iter().enumerate() {
            pulses.push(Pulse {
                lane,
                horizontal: true,
                pos: rng.gen_range(0.0..f32::from(self.width.max(4))),
                speed: rng.gen_range(0.3..0.9),
            });
        }
        for (lane, _) in cols.iter().enumerate() {
            pulses.push(Pulse {
                lane,
                horizontal: false,
                pos: rng.gen_range(0.0..f32::from(self.height.max(4))),
                speed: rng.gen_range(0.15..0.4),
            });
        }
        self.pulses = pulses;
    }
}

impl Default for CircuitBackground {
    fn default() -> Self {
        Self::new()
    }
}

impl Background for CircuitBackground {
    fn resize(&mut self, width: u16, height: u16) {
        if (width, height) != (self.width, self.height) {
            self.width = width;
            self.height = height;
            self.spawn();
        }
    }

    fn tick(&mut self) -> bool {
        if self.pulses.is_empty() {
            return false;
        }
        self.frame = self.frame.wrapping_add(1);
        for pulse in &mut self.pulses {
            let extent = if pulse.horizontal {
                f32::from(self.width.max(4))
            } else {
                f32::from(self.height.max(4))
            };
            pulse.pos += pulse.speed;
            if pulse.pos >= extent {
                pulse.pos = 0.0;
            }
        }
        true
    }

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let rows = lanes(area.height, ROW_SPACING);
        let cols = lanes(area.width, COL_SPACING);

        let trace_style = Style::default().fg(theme.weed_color);
        let node_style = Style::default().fg(theme.wave_color);

        for &row in &rows {
            for col in 0..area.width {
                buf.set_string(area.x + col, area.y + row, "─", trace_style);
            }
        }
        for &col in &cols {
            for row in 0..area.height {
                let glyph = if rows.contains(&row) { "·" } else { "│" };
                let style = if rows.contains(&row) {
                    node_style
                } else {
                    trace_style
                };
                buf.set_string(area.x + col, area.y + row, glyph, style);
            }
        }

        let pulse_style = Style::default().fg(theme.bubble_color);
        for pulse in &self.pulses {
            if pulse.horizontal {
                let Some(&row) = rows.get(pulse.lane) else {
                    continue;
                };
                let col = pulse.pos as u16;
                if col < area.width {
                    buf.set_string(area.x + col, area.y + row, "•", pulse_style);
                }
            } else {
                let Some(&col) = cols.get(pulse.lane) else {
                    continue;
                };
                let row = pulse.pos as u16;
                if row < area.height {
                    buf.set_string(area.x + col, area.y + row, "•", pulse_style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lanes_stay_inside_extent() {
        for extent in [0u16, 1, 5, 6, 24, 80] {
            for pos in lanes(extent, ROW_SPACING) {
                assert!(pos + 1 < extent);
            }
        }
        assert!(lanes(4, ROW_SPACING).is_empty());
    }
}
