//! Face projection and the unfolded net.
//!
//! A face is projected as a 3x3 grid of stickers. Each face has a fixed
//! neighbor order of four faces: the first pair picks the row (top, bottom)
//! and the second pair picks the column (left, right) of any piece touching
//! that neighbor. Pieces touching neither neighbor of a pair sit in the
//! middle row or column.

use crate::error::CubeError;
use crate::geometry::Face;
use crate::pieces::Sticker;
use crate::puzzle::Puzzle;

/// Stickers of one face, as `grid[row][column]`.
pub type FaceGrid = [[Sticker; 3]; 3];

/// Width of the unfolded net, in stickers.
pub const NET_WIDTH: usize = 12;
/// Height of the unfolded net, in stickers.
pub const NET_HEIGHT: usize = 9;

/// The unfolded net as rows of optional stickers; `None` is blank space.
pub type NetLayout = [[Option<Sticker>; NET_WIDTH]; NET_HEIGHT];

/// Faces bordering `face` as `[top, bottom, left, right]` when looking at it.
const fn neighbor_order(face: Face) -> [Face; 4] {
    use Face::*;
    match face {
        L => [U, D, B, F],
        R => [U, D, F, B],
        U => [B, F, L, R],
        D => [F, B, L, R],
        F => [U, D, L, R],
        B => [U, D, R, L],
    }
}

/// Placement of each face in the net, as (row, column) of its top-left cell.
const NET_POSITIONS: [(Face, usize, usize); 6] = [
    (Face::U, 0, 3),
    (Face::L, 3, 0),
    (Face::F, 3, 3),
    (Face::R, 3, 6),
    (Face::B, 3, 9),
    (Face::D, 6, 3),
];

impl Puzzle {
    /// Returns the stickers currently visible on `face`.
    pub fn face_grid(&self, face: Face) -> FaceGrid {
        let order = neighbor_order(face);
        let mut grid = [[Sticker::UNKNOWN; 3]; 3];

        for piece in self.at(face) {
            let mut cell = [1, 1];
            for (other, _) in piece.facings() {
                if let Some(i) = order.iter().position(|&f| f == other) {
                    cell[i / 2] = (i % 2) * 2;
                }
            }
            if let Some(sticker) = piece.get(face) {
                grid[cell[0]][cell[1]] = sticker;
            }
        }

        grid
    }

    /// Projects the face named by `face`: a letter such as `"U"` or a
    /// case-insensitive long name such as `"up"`.
    pub fn project(&self, face: &str) -> Result<FaceGrid, CubeError> {
        Ok(self.face_grid(face.parse()?))
    }

    /// Lays out all six faces as an unfolded cross: U on top, L F R B in a
    /// row, D at the bottom.
    pub fn net_layout(&self) -> NetLayout {
        let mut layout = [[None; NET_WIDTH]; NET_HEIGHT];
        for (face, top, left) in NET_POSITIONS {
            for (row, stickers) in self.face_grid(face).iter().enumerate() {
                for (column, &sticker) in stickers.iter().enumerate() {
                    layout[top + row][left + column] = Some(sticker);
                }
            }
        }
        layout
    }
}

/// Formats one face as three lines of color letters.
pub fn format_face(grid: &FaceGrid) -> String {
    let mut output = String::new();
    for row in grid {
        let line: Vec<String> = row.iter().map(|s| s.color().letter().to_string()).collect();
        output.push_str(&line.join(" "));
        output.push('\n');
    }
    output
}

/// Formats the unfolded net using one letter per sticker.
///
/// Blank cells show as spaces; trailing spaces are trimmed.
pub fn format_net(puzzle: &Puzzle) -> String {
    let mut output = String::new();
    for row in puzzle.net_layout() {
        let mut line = String::new();
        for cell in row {
            match cell {
                Some(sticker) => {
                    line.push(sticker.color().letter());
                    line.push(' ');
                }
                None => line.push_str("  "),
            }
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}
