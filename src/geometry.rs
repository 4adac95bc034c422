//! Faces of the cube and the location keys built from them.
//!
//! Every piece sits at a location named by the set of faces it touches:
//! one face for a centre, two adjacent faces for an edge and three
//! mutually adjacent faces for a corner. Locations are stored as a 6-bit
//! mask so that "UF" and "FU" are the same key.

use std::fmt;
use std::str::FromStr;

use crate::error::{CubeError, ValidationError};

/// One of the six outer faces of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    L,
    U,
    F,
    D,
    R,
    B,
}

impl Face {
    /// All faces, in bit order of [`Location`].
    pub const ALL: [Face; 6] = [Face::L, Face::U, Face::F, Face::D, Face::R, Face::B];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the face on the other side of the cube.
    pub const fn opposite(self) -> Face {
        match self {
            Face::L => Face::R,
            Face::U => Face::D,
            Face::F => Face::B,
            Face::D => Face::U,
            Face::R => Face::L,
            Face::B => Face::F,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Face::L => 'L',
            Face::U => 'U',
            Face::F => 'F',
            Face::D => 'D',
            Face::R => 'R',
            Face::B => 'B',
        }
    }

    /// Long form accepted by [`Face::from_str`], e.g. `"left"`.
    pub const fn name(self) -> &'static str {
        match self {
            Face::L => "left",
            Face::U => "up",
            Face::F => "front",
            Face::D => "down",
            Face::R => "right",
            Face::B => "back",
        }
    }

    /// Parses an uppercase face letter. Lowercase letters name wide moves,
    /// not faces, so they are rejected.
    pub const fn from_letter(letter: char) -> Option<Face> {
        match letter {
            'L' => Some(Face::L),
            'U' => Some(Face::U),
            'F' => Some(Face::F),
            'D' => Some(Face::D),
            'R' => Some(Face::R),
            'B' => Some(Face::B),
            _ => None,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Face {
    type Err = CubeError;

    /// Accepts `"U"` or a case-insensitive long name such as `"Up"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            if let Some(face) = Face::from_letter(letter) {
                return Ok(face);
            }
        }
        Face::ALL
            .into_iter()
            .find(|face| face.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownFace(s.to_owned()).into())
    }
}

/// An order-independent set of faces naming a piece position.
///
/// Bit `i` is set when `Face::ALL[i]` is part of the location.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Location(u8);

impl Location {
    pub const fn from_faces(faces: &[Face]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < faces.len() {
            bits |= 1 << faces[i].index();
            i += 1;
        }
        Self(bits)
    }

    #[inline]
    pub const fn contains(self, face: Face) -> bool {
        self.0 & (1 << face.index()) != 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn with(self, face: Face) -> Self {
        Self(self.0 | (1 << face.index()))
    }

    /// Faces in this location, in [`Face::ALL`] order.
    pub fn faces(self) -> impl Iterator<Item = Face> {
        Face::ALL.into_iter().filter(move |&face| self.contains(face))
    }

    /// Whether this is one of the 26 physical piece positions: one to three
    /// faces, none of them opposite each other.
    pub fn is_valid(self) -> bool {
        (1..=3).contains(&self.len())
            && !self.faces().any(|face| self.contains(face.opposite()))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.faces().map(Face::letter).collect();
        f.pad(&letters)
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({self})")
    }
}

impl FromStr for Location {
    type Err = CubeError;

    /// Letter order and repetition are irrelevant. Unknown letters fail with
    /// `NotFound` since no piece can live there.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().try_fold(Location::default(), |location, letter| {
            Face::from_letter(letter)
                .map(|face| location.with(face))
                .ok_or_else(|| CubeError::NotFound(s.to_owned()))
        })
    }
}

const fn loc(faces: &[Face]) -> Location {
    Location::from_faces(faces)
}

/// The 26 piece locations in fixed iteration order: corners, then edges,
/// then centres.
pub const LOCATIONS: [Location; 26] = {
    use Face::*;
    [
        // corners
        loc(&[B, D, L]),
        loc(&[F, D, L]),
        loc(&[U, L, F]),
        loc(&[U, L, B]),
        loc(&[R, U, F]),
        loc(&[R, U, B]),
        loc(&[R, D, B]),
        loc(&[R, D, F]),
        // edges
        loc(&[L, U]),
        loc(&[F, U]),
        loc(&[R, U]),
        loc(&[B, U]),
        loc(&[L, F]),
        loc(&[L, B]),
        loc(&[R, F]),
        loc(&[R, B]),
        loc(&[F, D]),
        loc(&[L, D]),
        loc(&[B, D]),
        loc(&[R, D]),
        // centres
        loc(&[F]),
        loc(&[U]),
        loc(&[R]),
        loc(&[L]),
        loc(&[D]),
        loc(&[B]),
    ]
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations_are_distinct_and_valid() {
        for (i, location) in LOCATIONS.iter().enumerate() {
            assert!(location.is_valid(), "{location} should be a valid location");
            for other in &LOCATIONS[i + 1..] {
                assert_ne!(location, other, "{location} appears twice");
            }
        }
    }

    #[test]
    fn test_location_counts_by_size() {
        let count = |n| LOCATIONS.iter().filter(|l| l.len() == n).count();
        assert_eq!(count(1), 6);
        assert_eq!(count(2), 12);
        assert_eq!(count(3), 8);
    }

    #[test]
    fn test_every_valid_location_is_listed() {
        // 63 non-empty face subsets; exactly the 26 listed ones are valid
        let valid: Vec<Location> = (1u8..64)
            .map(Location)
            .filter(|l| l.is_valid())
            .collect();
        assert_eq!(valid.len(), 26);
        for location in valid {
            assert!(LOCATIONS.contains(&location), "{location} is missing");
        }
    }

    #[test]
    fn test_location_parsing_ignores_order() {
        let a: Location = "URF".parse().unwrap();
        let b: Location = "FUR".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "UFR");
    }

    #[test]
    fn test_location_parsing_rejects_unknown_letters() {
        assert_eq!(
            "UX".parse::<Location>(),
            Err(CubeError::NotFound("UX".to_owned()))
        );
    }

    #[test]
    fn test_opposite_faces_are_invalid() {
        let location: Location = "UD".parse().unwrap();
        assert!(!location.is_valid());
    }

    #[test]
    fn test_face_parsing() {
        assert_eq!("U".parse::<Face>(), Ok(Face::U));
        assert_eq!("left".parse::<Face>(), Ok(Face::L));
        assert_eq!("BACK".parse::<Face>(), Ok(Face::B));
        assert_eq!("Front".parse::<Face>(), Ok(Face::F));
        assert!("u".parse::<Face>().is_err());
        assert!("X".parse::<Face>().is_err());
        assert!("".parse::<Face>().is_err());
    }

    #[test]
    fn test_opposite_is_an_involution() {
        for face in Face::ALL {
            assert_ne!(face.opposite(), face);
            assert_eq!(face.opposite().opposite(), face);
        }
    }
}
