//! 3x3x3 Twisty Puzzle Library
//!
//! Models the pieces of a Rubik's-Cube-like puzzle, applies face, slice,
//! wide and whole-cube moves, and projects faces as 3x3 sticker grids.

pub mod error;
pub mod geometry;
pub mod grid;
pub mod notation;
pub mod pieces;
pub mod puzzle;
pub mod render;
mod rotation;

pub use error::{ConstructionError, CubeError, ValidationError};
pub use geometry::{Face, Location, LOCATIONS};
pub use grid::FaceGrid;
pub use notation::{Algorithm, Axis, Layer, Move, Slice};
pub use pieces::{Color, Piece, PieceKind, Sticker};
pub use puzzle::{LocationKey, Puzzle};

/// Number of times `algorithm` must be repeated from a solved puzzle before
/// the puzzle is back to its starting state.
///
/// Every move sequence permutes a finite set of stickers, so the loop
/// always terminates.
pub fn order(algorithm: &Algorithm) -> Result<usize, CubeError> {
    let start = Puzzle::new();
    let mut cube = start.clone();
    let mut count = 0;
    loop {
        cube.apply_algorithm(algorithm)?;
        count += 1;
        if cube == start {
            return Ok(count);
        }
    }
}
