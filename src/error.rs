//! Error types for puzzle construction, validation and lookup.

use thiserror::Error;

use crate::geometry::{Face, Location};
use crate::pieces::PieceKind;

/// A piece or puzzle could not be built from the supplied parts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("A {kind} has {expected} stickers, got {actual}")]
    WrongStickerCount {
        kind: PieceKind,
        expected: usize,
        actual: usize,
    },
    #[error("A piece has 1, 2 or 3 stickers, got {0}")]
    InvalidStickerCount(usize),
    #[error("Face {0} appears twice on one piece")]
    DuplicateFace(Face),
    #[error("Opposite faces {0} and {1} cannot share a piece")]
    OppositeFaces(Face, Face),
    #[error("A puzzle has 26 pieces, got {0}")]
    WrongPieceCount(usize),
    #[error("Two pieces occupy location {0}")]
    DuplicateLocation(Location),
    #[error("No piece occupies location {0}")]
    MissingLocation(Location),
    #[error("{0} is not a location on the puzzle")]
    InvalidLocation(Location),
}

/// A call was rejected because its arguments do not fit the puzzle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Face must be L U F D R B or left up front down right back, not {0:?}")]
    UnknownFace(String),
    #[error("Unknown move designator {0:?}")]
    UnknownMove(String),
    #[error("Replacement of {location} must be a {expected}, not a {actual}")]
    KindMismatch {
        location: Location,
        expected: PieceKind,
        actual: PieceKind,
    },
    #[error("Location must be {expected}, not {actual}")]
    LocationMismatch {
        expected: Location,
        actual: Location,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("No piece at location {0:?}")]
    NotFound(String),
}
