//! Rotation engine.
//!
//! Outer-layer and slice turns permute stickers between the four faces
//! around the turning layer. Every selected piece is re-keyed from a
//! snapshot taken before the turn, then written back through
//! [`Puzzle::set`], so no piece ever reads a value written by the same turn.
//!
//! Wide turns and whole-cube rotations expand into a fixed sequence of
//! outer-layer and slice turns.

use log::{debug, trace};

use crate::error::CubeError;
use crate::geometry::Face;
use crate::notation::{Algorithm, Axis, Layer, Move, Slice};
use crate::pieces::{Piece, Sticker};
use crate::puzzle::Puzzle;
use Face::{B, D, F, L, R, U};

/// Which pieces a single-layer turn moves.
#[derive(Debug, Clone, Copy)]
enum Selection {
    /// Every piece touching this face.
    Touching(Face),
    /// Every piece touching neither of these faces.
    Between(Face, Face),
}

/// A single-layer turn: the pieces it moves, and the faces around the layer
/// in the order a sticker travels on a clockwise quarter turn.
#[derive(Debug, Clone, Copy)]
struct LayerTurn {
    selection: Selection,
    cycle: [Face; 4],
}

/// How a move is carried out.
enum Plan {
    Turn(LayerTurn),
    Sequence(&'static [Move]),
}

const fn turn(selection: Selection, cycle: [Face; 4]) -> Plan {
    Plan::Turn(LayerTurn { selection, cycle })
}

const fn cw(layer: Layer) -> Move {
    Move::new(layer)
}

const fn ccw(layer: Layer) -> Move {
    Move::new(layer).inverted()
}

const M: Layer = Layer::Slice(Slice::M);
const S: Layer = Layer::Slice(Slice::S);
const E: Layer = Layer::Slice(Slice::E);

const fn outer(face: Face) -> Layer {
    Layer::Outer(face)
}

const ROTATION_X: &[Move] = &[ccw(outer(L)), ccw(M), cw(outer(R))];
const ROTATION_Y: &[Move] = &[cw(outer(U)), ccw(E), ccw(outer(D))];
const ROTATION_Z: &[Move] = &[cw(outer(F)), cw(S), ccw(outer(B))];

const WIDE_R: &[Move] = &[cw(outer(R)), ccw(M)];
const WIDE_L: &[Move] = &[cw(outer(L)), cw(M)];
const WIDE_U: &[Move] = &[cw(outer(U)), ccw(E)];
const WIDE_D: &[Move] = &[cw(outer(D)), cw(E)];
const WIDE_F: &[Move] = &[cw(outer(F)), cw(S)];
const WIDE_B: &[Move] = &[cw(outer(B)), ccw(S)];

fn plan(layer: Layer) -> Plan {
    match layer {
        Layer::Outer(face) => {
            let cycle = match face {
                U => [R, F, L, B],
                D => [L, F, R, B],
                R => [F, U, B, D],
                L => [F, D, B, U],
                F => [U, R, D, L],
                B => [U, L, D, R],
            };
            turn(Selection::Touching(face), cycle)
        }
        // each slice turns in the direction of the face named in its doc
        Layer::Slice(Slice::M) => turn(Selection::Between(L, R), [F, D, B, U]),
        Layer::Slice(Slice::S) => turn(Selection::Between(F, B), [U, R, D, L]),
        Layer::Slice(Slice::E) => turn(Selection::Between(U, D), [L, F, R, B]),
        Layer::Rotation(Axis::X) => Plan::Sequence(ROTATION_X),
        Layer::Rotation(Axis::Y) => Plan::Sequence(ROTATION_Y),
        Layer::Rotation(Axis::Z) => Plan::Sequence(ROTATION_Z),
        Layer::Wide(R) => Plan::Sequence(WIDE_R),
        Layer::Wide(L) => Plan::Sequence(WIDE_L),
        Layer::Wide(U) => Plan::Sequence(WIDE_U),
        Layer::Wide(D) => Plan::Sequence(WIDE_D),
        Layer::Wide(F) => Plan::Sequence(WIDE_F),
        Layer::Wide(B) => Plan::Sequence(WIDE_B),
    }
}

impl LayerTurn {
    fn selects(&self, piece: &Piece) -> bool {
        match self.selection {
            Selection::Touching(face) => piece.touches(face),
            Selection::Between(a, b) => !piece.touches(a) && !piece.touches(b),
        }
    }

    /// Where a sticker on `face` ends up. Faces outside the cycle stay put.
    fn destination(&self, face: Face, quarter_turns: usize) -> Face {
        match self.cycle.iter().position(|&f| f == face) {
            Some(i) => self.cycle[(i + quarter_turns) % 4],
            None => face,
        }
    }

    /// Builds the piece that `piece` becomes after the turn.
    fn rotate(&self, piece: &Piece, quarter_turns: usize) -> Result<Piece, CubeError> {
        let mut facings = [(U, Sticker::UNKNOWN); 3];
        let mut count = 0;
        for (face, sticker) in piece.facings() {
            facings[count] = (self.destination(face, quarter_turns), sticker);
            count += 1;
        }
        Piece::from_facings(&facings[..count])
    }
}

impl Puzzle {
    /// Applies one move and returns the puzzle for chaining.
    pub fn apply_move(&mut self, mv: Move) -> Result<&mut Self, CubeError> {
        match plan(mv.layer) {
            Plan::Turn(layer_turn) => {
                trace!("turning {mv}");
                self.turn_layer(&layer_turn, mv.quarter_turns())?;
            }
            Plan::Sequence(moves) => {
                debug!("expanding {mv}");
                for &sub_move in moves {
                    let sub_move = if mv.double {
                        sub_move.doubled()
                    } else if mv.inverse {
                        sub_move.inverted()
                    } else {
                        sub_move
                    };
                    self.apply_move(sub_move)?;
                }
            }
        }
        Ok(self)
    }

    /// Applies every move of `algorithm` in order.
    pub fn apply_algorithm(&mut self, algorithm: &Algorithm) -> Result<&mut Self, CubeError> {
        debug!("applying {algorithm}");
        for &mv in algorithm {
            self.apply_move(mv)?;
        }
        Ok(self)
    }

    /// Parses `notation` (e.g. `"R U R' U'"`) and applies it.
    pub fn apply(&mut self, notation: &str) -> Result<&mut Self, CubeError> {
        let algorithm: Algorithm = notation.parse()?;
        self.apply_algorithm(&algorithm)
    }

    fn turn_layer(&mut self, layer_turn: &LayerTurn, quarter_turns: usize) -> Result<(), CubeError> {
        // compute every replacement from the pre-turn state before writing any
        let moved = self
            .iter()
            .map(|(_, piece)| piece)
            .filter(|piece| layer_turn.selects(piece))
            .map(|piece| layer_turn.rotate(piece, quarter_turns))
            .collect::<Result<Vec<Piece>, _>>()?;

        for piece in moved {
            self.set(piece.location(), piece)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::Color;

    fn after(notation: &str) -> Puzzle {
        let mut cube = Puzzle::new();
        cube.apply(notation).unwrap();
        cube
    }

    #[test]
    fn test_cycles_are_perpendicular_to_their_layer() {
        for layer in [
            outer(L),
            outer(U),
            outer(F),
            outer(D),
            outer(R),
            outer(B),
            M,
            S,
            E,
        ] {
            let Plan::Turn(layer_turn) = plan(layer) else {
                panic!("{layer:?} should be a single-layer turn");
            };
            let (a, b) = match layer_turn.selection {
                Selection::Touching(face) => (face, face.opposite()),
                Selection::Between(a, b) => (a, b),
            };
            for face in layer_turn.cycle {
                assert!(face != a && face != b, "{layer:?} cycles through {face}");
            }
            // consecutive cycle faces are adjacent, never opposite
            for i in 0..4 {
                assert_ne!(layer_turn.cycle[i].opposite(), layer_turn.cycle[(i + 1) % 4]);
            }
        }
    }

    #[test]
    fn test_u_moves_front_to_left() {
        let cube = after("U");
        let edge = cube.get("UL").unwrap();
        assert_eq!(edge.get(L).map(|s| s.color()), Some(Color::Green));
        assert_eq!(edge.get(U).map(|s| s.color()), Some(Color::Yellow));
    }

    #[test]
    fn test_r_moves_front_to_up() {
        let cube = after("R");
        let corner = cube.get("URF").unwrap();
        assert_eq!(corner.get(U).map(|s| s.color()), Some(Color::Green));
        assert_eq!(corner.get(F).map(|s| s.color()), Some(Color::White));
        assert_eq!(corner.get(R).map(|s| s.color()), Some(Color::Orange));
    }

    #[test]
    fn test_slice_leaves_outer_layers_alone() {
        let cube = after("M");
        let solved = Puzzle::new();
        for (location, piece) in cube.iter() {
            if location.contains(L) || location.contains(R) {
                assert_eq!(piece, solved.get(location).unwrap());
            }
        }
        // the front centre moves down
        assert_eq!(cube.get("D").unwrap().get(D).map(|s| s.color()), Some(Color::Green));
    }

    #[test]
    fn test_wide_move_matches_its_expansion() {
        assert_eq!(after("r"), after("R M'"));
        assert_eq!(after("r'"), after("R' M"));
        assert_eq!(after("r2"), after("R2 M2"));
        assert_eq!(after("b'"), after("B' S"));
        assert_eq!(after("Uw"), after("u"));
    }

    #[test]
    fn test_rotation_matches_its_expansion() {
        assert_eq!(after("x"), after("L' M' R"));
        assert_eq!(after("y'"), after("U' E D"));
        assert_eq!(after("z2"), after("F2 S2 B2"));
    }

    #[test]
    fn test_double_inverse_is_a_half_turn() {
        assert_eq!(after("x2'"), after("x2"));
        assert_eq!(after("f2'"), after("f f"));
        assert_eq!(after("R2'"), after("R R"));
    }

    #[test]
    fn test_rotations_keep_the_cube_solved() {
        for notation in ["x", "y", "z", "x y' z2", "y2 x'"] {
            let cube = after(notation);
            assert!(cube.is_solved(), "{notation} should only reorient the cube");
        }
        let cube = after("x");
        assert_eq!(cube.get("U").unwrap().get(U).map(|s| s.color()), Some(Color::Green));
        let cube = after("y");
        assert_eq!(cube.get("F").unwrap().get(F).map(|s| s.color()), Some(Color::Orange));
        let cube = after("z");
        assert_eq!(cube.get("U").unwrap().get(U).map(|s| s.color()), Some(Color::Red));
    }

    #[test]
    fn test_apply_rejects_unknown_moves_without_changes() {
        let mut cube = Puzzle::new();
        assert!(cube.apply("R Q").is_err());
        assert_eq!(cube, Puzzle::new());
    }

    #[test_log::test]
    fn test_apply_chains() {
        let mut cube = Puzzle::new();
        cube.apply_move("R".parse().unwrap())
            .unwrap()
            .apply_move("R'".parse().unwrap())
            .unwrap();
        assert_eq!(cube, Puzzle::new());
    }
}
