//! The puzzle container and its location index.
//!
//! Pieces are kept in a flat array in [`LOCATIONS`] order, one slot per
//! location. Slots never move: replacing a piece overwrites the content of
//! its slot, so the set of 26 locations is the same at every point in time.

use std::fmt;
use std::sync::OnceLock;

use log::trace;
use rustc_hash::FxHashMap;

use crate::error::{ConstructionError, CubeError, ValidationError};
use crate::geometry::{Face, Location, LOCATIONS};
use crate::pieces::{Color, Piece, PieceKind};

/// Number of pieces in a 3x3x3 puzzle.
pub const NUM_PIECES: usize = LOCATIONS.len();

/// Anything that names a location: a string such as `"UF"`, a [`Location`],
/// a single [`Face`] or a slice of faces.
pub trait LocationKey {
    fn to_location(&self) -> Result<Location, CubeError>;
}

impl LocationKey for &str {
    fn to_location(&self) -> Result<Location, CubeError> {
        self.parse()
    }
}

impl LocationKey for Location {
    fn to_location(&self) -> Result<Location, CubeError> {
        Ok(*self)
    }
}

impl LocationKey for Face {
    fn to_location(&self) -> Result<Location, CubeError> {
        Ok(Location::from_faces(&[*self]))
    }
}

impl LocationKey for &[Face] {
    fn to_location(&self) -> Result<Location, CubeError> {
        Ok(Location::from_faces(self))
    }
}

/// A 3x3x3 puzzle: 6 centres, 12 edges and 8 corners.
#[derive(Clone)]
pub struct Puzzle {
    /// `pieces[i]` is the piece at `LOCATIONS[i]`.
    pieces: [Piece; NUM_PIECES],
}

/// Maps each location to its slot in a puzzle's piece array. The layout is
/// the same for every puzzle, so the map is built once and shared.
fn location_index() -> &'static FxHashMap<Location, usize> {
    static INDEX: OnceLock<FxHashMap<Location, usize>> = OnceLock::new();
    INDEX.get_or_init(|| {
        LOCATIONS
            .iter()
            .enumerate()
            .map(|(slot, &location)| (location, slot))
            .collect()
    })
}

impl Puzzle {
    /// Creates a solved puzzle.
    pub fn new() -> Self {
        Self {
            pieces: LOCATIONS.map(Piece::solved),
        }
    }

    /// Builds a puzzle from exactly one piece per location, in any order.
    pub fn from_pieces(pieces: impl IntoIterator<Item = Piece>) -> Result<Self, CubeError> {
        let pieces: Vec<Piece> = pieces.into_iter().collect();
        if pieces.len() != NUM_PIECES {
            return Err(ConstructionError::WrongPieceCount(pieces.len()).into());
        }

        let mut slots: [Option<Piece>; NUM_PIECES] = [None; NUM_PIECES];
        for piece in pieces {
            let location = piece.location();
            let &slot = location_index()
                .get(&location)
                .ok_or(ConstructionError::InvalidLocation(location))?;
            if slots[slot].replace(piece).is_some() {
                return Err(ConstructionError::DuplicateLocation(location).into());
            }
        }

        let mut filled = [Piece::solved(LOCATIONS[0]); NUM_PIECES];
        for (slot, piece) in slots.into_iter().enumerate() {
            filled[slot] = piece.ok_or(ConstructionError::MissingLocation(LOCATIONS[slot]))?;
        }
        Ok(Self { pieces: filled })
    }

    fn slot(&self, key: impl LocationKey) -> Result<usize, CubeError> {
        let location = key.to_location()?;
        location_index()
            .get(&location)
            .copied()
            .ok_or_else(|| CubeError::NotFound(location.to_string()))
    }

    /// Returns the piece whose location is the set of faces in `key`.
    pub fn get(&self, key: impl LocationKey) -> Result<&Piece, CubeError> {
        Ok(&self.pieces[self.slot(key)?])
    }

    /// Replaces the content of the piece at `key`.
    ///
    /// The replacement must be the same kind as the current occupant and
    /// must sit at exactly that location. On error the puzzle is unchanged.
    pub fn set(&mut self, key: impl LocationKey, piece: Piece) -> Result<(), CubeError> {
        let slot = self.slot(key)?;
        let location = LOCATIONS[slot];
        let current = self.pieces[slot].kind();
        if piece.kind() != current {
            return Err(ValidationError::KindMismatch {
                location,
                expected: current,
                actual: piece.kind(),
            }
            .into());
        }
        if piece.location() != location {
            return Err(ValidationError::LocationMismatch {
                expected: location,
                actual: piece.location(),
            }
            .into());
        }
        trace!("set {location} to {piece:?}");
        self.pieces[slot] = piece;
        Ok(())
    }

    /// Pieces touching `face`.
    pub fn at(&self, face: Face) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |piece| piece.touches(face))
    }

    /// Pieces with at least one sticker of `color`.
    pub fn with_color(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |piece| piece.has_color(color))
    }

    pub fn of_kind(&self, kind: PieceKind) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |piece| piece.kind() == kind)
    }

    /// All `(location, piece)` pairs in [`LOCATIONS`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, &Piece)> + '_ {
        LOCATIONS.into_iter().zip(self.pieces.iter())
    }

    /// Whether every face shows a single color.
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let mut colors = self
                .at(face)
                .filter_map(|piece| piece.get(face))
                .map(|sticker| sticker.color());
            match colors.next() {
                Some(first) => colors.all(|color| color == first),
                None => true,
            }
        })
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Puzzle {
    fn eq(&self, other: &Self) -> bool {
        self.pieces == other.pieces
    }
}

impl Eq for Puzzle {}

impl fmt::Debug for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
