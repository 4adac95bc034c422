//! Typed move descriptions and a small adapter for move notation.
//!
//! The rotation engine only consumes [`Move`] values. Parsing is limited to
//! single tokens such as `R`, `U'`, `F2`, `Rw` or `x'` and to whitespace
//! separated sequences of them.

use std::fmt;
use std::str::FromStr;

use crate::error::{CubeError, ValidationError};
use crate::geometry::Face;

/// A middle slice, named after the outer face whose turn direction it follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    /// Between L and R, turning like L.
    M,
    /// Between F and B, turning like F.
    S,
    /// Between U and D, turning like D.
    E,
}

/// A whole-cube rotation axis, turning like R, U and F respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Which part of the cube a move turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Outer(Face),
    Slice(Slice),
    /// An outer face together with the adjacent middle slice.
    Wide(Face),
    Rotation(Axis),
}

impl Layer {
    /// Parses a one-letter designator: `LUFDRB`, `MSE`, `lufdrb` or `xyz`.
    pub fn from_designator(designator: char) -> Result<Self, CubeError> {
        if let Some(face) = Face::from_letter(designator) {
            return Ok(Layer::Outer(face));
        }
        if let Some(face) = Face::from_letter(designator.to_ascii_uppercase()) {
            return Ok(Layer::Wide(face));
        }
        Ok(match designator {
            'M' => Layer::Slice(Slice::M),
            'S' => Layer::Slice(Slice::S),
            'E' => Layer::Slice(Slice::E),
            'x' => Layer::Rotation(Axis::X),
            'y' => Layer::Rotation(Axis::Y),
            'z' => Layer::Rotation(Axis::Z),
            _ => return Err(ValidationError::UnknownMove(designator.to_string()).into()),
        })
    }

    pub fn designator(self) -> char {
        match self {
            Layer::Outer(face) => face.letter(),
            Layer::Wide(face) => face.letter().to_ascii_lowercase(),
            Layer::Slice(Slice::M) => 'M',
            Layer::Slice(Slice::S) => 'S',
            Layer::Slice(Slice::E) => 'E',
            Layer::Rotation(Axis::X) => 'x',
            Layer::Rotation(Axis::Y) => 'y',
            Layer::Rotation(Axis::Z) => 'z',
        }
    }
}

/// A single move: a layer, turned clockwise unless `inverse` is set, by a
/// half turn if `double` is set. A half turn has no direction, so `double`
/// wins over `inverse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub layer: Layer,
    pub inverse: bool,
    pub double: bool,
}

impl Move {
    /// A clockwise quarter turn of `layer`.
    pub const fn new(layer: Layer) -> Self {
        Self {
            layer,
            inverse: false,
            double: false,
        }
    }

    /// Builds a move from a one-letter designator and its flags.
    pub fn from_designator(designator: char, inverse: bool, double: bool) -> Result<Self, CubeError> {
        Ok(Self {
            layer: Layer::from_designator(designator)?,
            inverse,
            double,
        })
    }

    #[must_use]
    pub const fn inverted(self) -> Self {
        if self.double {
            self
        } else {
            Self {
                inverse: !self.inverse,
                ..self
            }
        }
    }

    #[must_use]
    pub const fn doubled(self) -> Self {
        Self {
            double: true,
            ..self
        }
    }

    /// Clockwise quarter turns this move performs, in `1..=3`.
    pub const fn quarter_turns(self) -> usize {
        if self.double {
            2
        } else if self.inverse {
            3
        } else {
            1
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layer.designator())?;
        if self.double {
            write!(f, "2")
        } else if self.inverse {
            write!(f, "'")
        } else {
            Ok(())
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let unknown = || CubeError::from(ValidationError::UnknownMove(token.to_owned()));

        let mut chars = token.chars();
        let designator = chars.next().ok_or_else(unknown)?;
        let mut suffix = chars.as_str();
        let mut layer = Layer::from_designator(designator).map_err(|_| unknown())?;

        // `Rw` is another spelling of `r`
        if let Some(rest) = suffix.strip_prefix('w') {
            match layer {
                Layer::Outer(face) => layer = Layer::Wide(face),
                _ => return Err(unknown()),
            }
            suffix = rest;
        }

        let (inverse, double) = match suffix {
            "" => (false, false),
            "'" => (true, false),
            "2" => (false, true),
            "2'" | "'2" => (true, true),
            _ => return Err(unknown()),
        };
        Ok(Self {
            layer,
            inverse,
            double,
        })
    }
}

/// An ordered sequence of moves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Algorithm(Vec<Move>);

impl Algorithm {
    pub fn new(moves: Vec<Move>) -> Self {
        Self(moves)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The sequence that undoes this one.
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self(self.0.iter().rev().map(|mv| mv.inverted()).collect())
    }
}

impl From<Vec<Move>> for Algorithm {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

impl FromStr for Algorithm {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Move>, _>>()
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_tokens() {
        let mv: Move = "R'".parse().unwrap();
        assert_eq!(mv.layer, Layer::Outer(Face::R));
        assert!(mv.inverse && !mv.double);

        let mv: Move = "M2".parse().unwrap();
        assert_eq!(mv.layer, Layer::Slice(Slice::M));
        assert!(mv.double);

        assert_eq!("x".parse::<Move>().unwrap().layer, Layer::Rotation(Axis::X));
        assert_eq!("u'".parse::<Move>().unwrap().layer, Layer::Wide(Face::U));
        assert_eq!("Rw".parse::<Move>().unwrap(), "r".parse::<Move>().unwrap());
        assert_eq!("Fw2".parse::<Move>().unwrap(), "f2".parse::<Move>().unwrap());
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        for token in ["", "Q", "R3", "R''", "Mw", "xw", "w"] {
            assert_eq!(
                token.parse::<Move>(),
                Err(ValidationError::UnknownMove(token.to_owned()).into()),
                "{token:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_designator() {
        let mv = Move::from_designator('E', true, false).unwrap();
        assert_eq!(mv.to_string(), "E'");
        assert_eq!(
            Move::from_designator('q', false, false),
            Err(ValidationError::UnknownMove("q".to_owned()).into())
        );
    }

    #[test]
    fn test_double_ignores_direction() {
        let a: Move = "U2".parse().unwrap();
        let b: Move = "U2'".parse().unwrap();
        assert_eq!(a.quarter_turns(), 2);
        assert_eq!(b.quarter_turns(), 2);
        assert_eq!(b.to_string(), "U2");
        assert_eq!(a.inverted(), a);
    }

    #[test]
    fn test_algorithm_display_and_inverse() {
        let alg: Algorithm = "R U  R' U'\tF2".parse().unwrap();
        assert_eq!(alg.len(), 5);
        assert_eq!(alg.to_string(), "R U R' U' F2");
        assert_eq!(alg.inverted().to_string(), "F2 U R U' R'");
        assert!("".parse::<Algorithm>().unwrap().is_empty());
        assert!("R U Q".parse::<Algorithm>().is_err());
    }
}
