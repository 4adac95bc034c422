//! Terminal rendering of stickers, faces and the whole puzzle.
//!
//! Each sticker is drawn as a 2-character block with a colored background.

use std::fmt;

use owo_colors::OwoColorize;

use crate::grid::{format_face, format_net, FaceGrid};
use crate::pieces::{Color, Sticker};
use crate::puzzle::Puzzle;

/// How stickers are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Colored background blocks.
    #[default]
    Ansi,
    /// One letter per sticker, no escape codes.
    Plain,
}

/// Returns the display color for a sticker color.
///
/// Unknown stickers are drawn dark grey.
fn background(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Red => (200, 30, 30),
        Color::Yellow => (255, 215, 0),
        Color::Green => (20, 160, 60),
        Color::White => (240, 240, 240),
        Color::Orange => (255, 130, 0),
        Color::Blue => (20, 70, 200),
        Color::Unknown => (40, 40, 40),
    }
}

impl fmt::Display for Sticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `OwoColorize::color` would shadow the inherent method here
        let (r, g, b) = background(Sticker::color(*self));
        write!(f, "{}", "  ".on_truecolor(r, g, b))
    }
}

/// Draws the unfolded net of `puzzle`.
pub fn render_net(puzzle: &Puzzle, style: Style) -> String {
    match style {
        Style::Plain => format_net(puzzle),
        Style::Ansi => puzzle.to_string(),
    }
}

/// Draws a single projected face.
pub fn render_face(grid: &FaceGrid, style: Style) -> String {
    match style {
        Style::Plain => format_face(grid),
        Style::Ansi => {
            let mut output = String::new();
            for row in grid {
                for sticker in row {
                    output.push_str(&sticker.to_string());
                }
                output.push('\n');
            }
            output
        }
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.net_layout() {
            // blank cells after the last sticker are not padded
            let width = row.iter().rposition(Option::is_some).map_or(0, |i| i + 1);
            for cell in &row[..width] {
                match cell {
                    Some(sticker) => write!(f, "{sticker}")?,
                    None => write!(f, "  ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sticker_is_drawn_as_one_block() {
        let cube = Puzzle::new();
        let rendered = render_net(&cube, Style::Ansi);
        // each colored block ends with a background reset
        assert_eq!(rendered.matches("\x1b[49m").count(), 54);
        assert_eq!(rendered.lines().count(), 9);
    }

    #[test]
    fn test_sticker_is_a_colored_block() {
        let sticker = Sticker::new(Color::Green);
        assert_eq!(sticker.to_string(), "\x1b[48;2;20;160;60m  \x1b[49m");
        assert_ne!(Sticker::UNKNOWN.to_string(), sticker.to_string());
    }

    #[test]
    fn test_net_rows_have_no_trailing_padding() {
        let rendered = Puzzle::new().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        for line in &lines {
            assert!(!line.ends_with(' '), "{line:?}");
        }
        // U and D rows hold the left padding and one face
        let block = Sticker::new(Color::Yellow).to_string().len();
        assert_eq!(lines[0].len(), 6 + 3 * block);
        assert_eq!(lines[0].matches("\x1b[49m").count(), 3);
        assert_eq!(lines[3].matches("\x1b[49m").count(), 12);
    }

    #[test]
    fn test_colors_are_distinct() {
        for (i, a) in Color::ALL.iter().enumerate() {
            for b in &Color::ALL[i + 1..] {
                assert_ne!(background(*a), background(*b), "{a} and {b} look alike");
            }
        }
    }

    #[test]
    fn test_plain_face() {
        let grid = Puzzle::new().face_grid(crate::geometry::Face::L);
        assert_eq!(render_face(&grid, Style::Plain), "R R R\nR R R\nR R R\n");
        assert_eq!(render_face(&grid, Style::Ansi).lines().count(), 3);
    }
}
