//! Skills panel
//!
//! Skills render as chips flowing across the body width.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use reef_core::{Portfolio, SectionId};
use unicode_width::UnicodeWidthStr;

use super::{body_width, faded, panel_height, render_panel_chrome, SectionBlock, SectionCtx};
use crate::tui::themes::Theme;

pub struct SkillsBlock {
    skills: Vec<String>,
}

impl SkillsBlock {
    pub fn new(portfolio: &Portfolio) -> Self {
        Self {
            skills: portfolio.skills.clone(),
        }
    }
}

/// Flow chips into rows that fit `width`, separating chips by one
/// column. A chip wider than the row gets a row of its own.
fn chip_rows(skills: &[String], width: u16) -> Vec<Vec<String>> {
    let width = usize::from(width.max(1));
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut used = 0usize;

    for skill in skills {
        let chip = format!("[ {} ]", skill);
        let w = chip.width();
        let needed = if row.is_empty() { w } else { w + 1 };
        if !row.is_empty() && used + needed > width {
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        used += if row.is_empty() { w } else { w + 1 };
        row.push(chip);
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

impl SectionBlock for SkillsBlock {
    fn id(&self) -> SectionId {
        SectionId::Skills
    }

    fn height(&self, width: u16, ctx: SectionCtx) -> u16 {
        panel_height(chip_rows(&self.skills, body_width(width)).len() as u16, ctx)
    }

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, ctx: SectionCtx) {
        let Some(body) = render_panel_chrome(self.id().title(), area, buf, theme, ctx) else {
            return;
        };
        let chip_style = Style::default()
            .fg(faded(theme.success_color, theme, ctx))
            .add_modifier(Modifier::BOLD);

        for (i, row) in chip_rows(&self.skills, body.width).into_iter().enumerate() {
            let y = body.y + i as u16;
            if y >= body.y + body.height {
                break;
            }
            let mut x = body.x;
            for chip in row {
                let w = chip.width() as u16;
                if x + w > body.x + body.width {
                    break;
                }
                buf.set_string(x, y, &chip, chip_style);
                x += w + 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_chips_flow_to_the_next_row() {
        // "[ Python ]" is 10 wide, "[ Git ]" is 7
        let rows = chip_rows(&skills(&["Python", "Git"]), 12);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["[ Python ]".to_string()]);
        assert_eq!(rows[1], vec!["[ Git ]".to_string()]);
    }

    #[test]
    fn test_chips_share_a_row_when_they_fit() {
        let rows = chip_rows(&skills(&["Python", "Git"]), 30);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 2);
    }

    #[test]
    fn test_oversized_chip_gets_its_own_row() {
        let rows = chip_rows(&skills(&["A", "SomethingVeryVeryLong", "B"]), 10);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_built_in_skills_fit_default_width() {
        let block = SkillsBlock::new(&Portfolio::built_in());
        let rows = chip_rows(&block.skills, 76);
        assert!(!rows.is_empty());
        assert!(rows.len() <= 2);
    }
}
