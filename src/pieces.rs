//! Sticker and piece definitions.
//!
//! A piece binds each face it touches to the sticker showing on that face.
//! Stickers are stored in a fixed array indexed by face so that pieces are
//! `Copy` and comparing two pieces compares their face-to-color mapping.

use std::fmt;

use crate::error::{ConstructionError, CubeError};
use crate::geometry::{Face, Location};

/// Sticker colors, plus a placeholder for stickers of unknown color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Yellow,
    Green,
    White,
    Orange,
    Blue,
    Unknown,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::White,
        Color::Orange,
        Color::Blue,
        Color::Unknown,
    ];

    /// Color of `face` on a solved cube.
    pub const fn solved(face: Face) -> Color {
        match face {
            Face::L => Color::Red,
            Face::U => Color::Yellow,
            Face::F => Color::Green,
            Face::D => Color::White,
            Face::R => Color::Orange,
            Face::B => Color::Blue,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::White => "white",
            Color::Orange => "orange",
            Color::Blue => "blue",
            Color::Unknown => "unknown",
        }
    }

    /// Single-letter abbreviation used by plain text output.
    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::White => 'W',
            Color::Orange => 'O',
            Color::Blue => 'B',
            Color::Unknown => '?',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single colored facet of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sticker {
    color: Color,
}

impl Sticker {
    pub const UNKNOWN: Self = Self::new(Color::Unknown);

    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }
}

impl From<Color> for Sticker {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

/// The three kinds of piece, distinguished by sticker count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Centre,
    Edge,
    Corner,
}

impl PieceKind {
    pub const fn sticker_count(self) -> usize {
        match self {
            PieceKind::Centre => 1,
            PieceKind::Edge => 2,
            PieceKind::Corner => 3,
        }
    }

    pub const fn from_sticker_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(PieceKind::Centre),
            2 => Some(PieceKind::Edge),
            3 => Some(PieceKind::Corner),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PieceKind::Centre => "centre",
            PieceKind::Edge => "edge",
            PieceKind::Corner => "corner",
        })
    }
}

/// A centre, edge or corner piece.
///
/// The set of faces a piece touches is its [`Location`]. It is fixed when
/// the piece is built; moving a piece means building a new one.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    stickers: [Option<Sticker>; 6],
}

impl Piece {
    /// Builds a piece of the given kind, rejecting the wrong sticker count.
    pub fn new(kind: PieceKind, facings: &[(Face, Sticker)]) -> Result<Self, CubeError> {
        if facings.len() != kind.sticker_count() {
            return Err(ConstructionError::WrongStickerCount {
                kind,
                expected: kind.sticker_count(),
                actual: facings.len(),
            }
            .into());
        }
        Self::from_facings(facings)
    }

    /// Builds a piece whose kind follows from the number of stickers.
    pub fn from_facings(facings: &[(Face, Sticker)]) -> Result<Self, CubeError> {
        if PieceKind::from_sticker_count(facings.len()).is_none() {
            return Err(ConstructionError::InvalidStickerCount(facings.len()).into());
        }

        let mut stickers = [None; 6];
        for &(face, sticker) in facings {
            if stickers[face.index()].is_some() {
                return Err(ConstructionError::DuplicateFace(face).into());
            }
            if stickers[face.opposite().index()].is_some() {
                return Err(ConstructionError::OppositeFaces(face.opposite(), face).into());
            }
            stickers[face.index()] = Some(sticker);
        }
        Ok(Self { stickers })
    }

    pub fn centre(face: Face, color: Color) -> Result<Self, CubeError> {
        Self::new(PieceKind::Centre, &[(face, Sticker::new(color))])
    }

    pub fn edge(facings: [(Face, Color); 2]) -> Result<Self, CubeError> {
        Self::new(PieceKind::Edge, &facings.map(|(face, color)| (face, Sticker::new(color))))
    }

    pub fn corner(facings: [(Face, Color); 3]) -> Result<Self, CubeError> {
        Self::new(PieceKind::Corner, &facings.map(|(face, color)| (face, Sticker::new(color))))
    }

    /// The piece found at `location` on a solved cube.
    pub(crate) fn solved(location: Location) -> Self {
        let mut stickers = [None; 6];
        for face in location.faces() {
            stickers[face.index()] = Some(Sticker::new(Color::solved(face)));
        }
        Self { stickers }
    }

    pub fn kind(&self) -> PieceKind {
        match self.location().len() {
            1 => PieceKind::Centre,
            2 => PieceKind::Edge,
            _ => PieceKind::Corner,
        }
    }

    pub fn location(&self) -> Location {
        self.facings()
            .fold(Location::default(), |location, (face, _)| location.with(face))
    }

    /// Returns the sticker showing on `face`, if this piece touches it.
    #[inline]
    pub fn get(&self, face: Face) -> Option<Sticker> {
        self.stickers[face.index()]
    }

    #[inline]
    pub fn touches(&self, face: Face) -> bool {
        self.stickers[face.index()].is_some()
    }

    pub fn has_color(&self, color: Color) -> bool {
        self.facings().any(|(_, sticker)| sticker.color() == color)
    }

    /// Face/sticker pairs in [`Face::ALL`] order.
    pub fn facings(&self) -> impl Iterator<Item = (Face, Sticker)> + '_ {
        Face::ALL
            .into_iter()
            .filter_map(move |face| self.stickers[face.index()].map(|sticker| (face, sticker)))
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind() {
            PieceKind::Centre => "Centre",
            PieceKind::Edge => "Edge",
            PieceKind::Corner => "Corner",
        };
        write!(f, "{name}(")?;
        for (i, (face, sticker)) in self.facings().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{face}: {}", sticker.color())?;
        }
        write!(f, ")")
    }
}
