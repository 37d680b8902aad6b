//! Quarter turns and cube notation.
//!
//! Frame: right-handed, `+x` is R, `+y` is U, `+z` is F. A clockwise face
//! turn, seen from outside that face, is -90 degrees about its outward
//! normal. Slices turn like the face they are named after: M like L, E like
//! D, S like F.

use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CubeError;
use super::layer::{Axis, LayerId};

/// Signed quarter turn about the positive direction of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuarterTurn {
    /// +90 degrees (counterclockwise looking down the axis).
    Positive,
    /// -90 degrees.
    Negative,
}

impl QuarterTurn {
    pub fn radians(self) -> f32 {
        self.sign() * FRAC_PI_2
    }

    pub fn degrees(self) -> f32 {
        self.sign() * 90.0
    }

    pub fn sign(self) -> f32 {
        match self {
            QuarterTurn::Positive => 1.0,
            QuarterTurn::Negative => -1.0,
        }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            QuarterTurn::Positive => QuarterTurn::Negative,
            QuarterTurn::Negative => QuarterTurn::Positive,
        }
    }
}

/// The `(axis, target value, signed angle)` triple the engine executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerTurn {
    pub layer: LayerId,
    pub turn: QuarterTurn,
}

impl LayerTurn {
    pub const fn new(layer: LayerId, turn: QuarterTurn) -> Self {
        Self { layer, turn }
    }

    pub fn axis(self) -> Axis {
        self.layer.axis
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        Self::new(self.layer, self.turn.inverse())
    }
}

impl fmt::Display for LayerTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:+}°", self.layer, self.turn.degrees())
    }
}

/// Named face or slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    R,
    L,
    U,
    D,
    F,
    B,
    M,
    E,
    S,
}

impl Face {
    pub const ALL: [Face; 9] = [
        Face::R,
        Face::L,
        Face::U,
        Face::D,
        Face::F,
        Face::B,
        Face::M,
        Face::E,
        Face::S,
    ];

    pub fn layer(self) -> LayerId {
        match self {
            Face::R => LayerId::new(Axis::X, 1),
            Face::L => LayerId::new(Axis::X, -1),
            Face::M => LayerId::new(Axis::X, 0),
            Face::U => LayerId::new(Axis::Y, 1),
            Face::D => LayerId::new(Axis::Y, -1),
            Face::E => LayerId::new(Axis::Y, 0),
            Face::F => LayerId::new(Axis::Z, 1),
            Face::B => LayerId::new(Axis::Z, -1),
            Face::S => LayerId::new(Axis::Z, 0),
        }
    }

    /// Quarter turn, about the positive axis, that turns this layer clockwise.
    pub fn clockwise(self) -> QuarterTurn {
        match self {
            Face::R | Face::U | Face::F | Face::S => QuarterTurn::Negative,
            Face::L | Face::D | Face::B | Face::M | Face::E => QuarterTurn::Positive,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Face::R => 'R',
            Face::L => 'L',
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::M => 'M',
            Face::E => 'E',
            Face::S => 'S',
        }
    }

    fn from_symbol(c: char) -> Option<Face> {
        Face::ALL.into_iter().find(|f| f.symbol() == c)
    }
}

/// A move in cube notation: a face or slice, clockwise unless primed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Move {
    pub face: Face,
    pub prime: bool,
}

impl Move {
    pub const fn new(face: Face, prime: bool) -> Self {
        Self { face, prime }
    }

    pub const fn clockwise(face: Face) -> Self {
        Self::new(face, false)
    }

    pub const fn prime(face: Face) -> Self {
        Self::new(face, true)
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        Self::new(self.face, !self.prime)
    }

    pub fn layer_turn(self) -> LayerTurn {
        let turn = self.face.clockwise();
        let turn = if self.prime { turn.inverse() } else { turn };
        LayerTurn::new(self.face.layer(), turn)
    }

    /// Parses a whitespace-separated sequence such as `"R U R' U'"`.
    pub fn parse_sequence(s: &str) -> Result<Vec<Move>, CubeError> {
        s.split_whitespace().map(str::parse).collect()
    }
}

impl From<Move> for LayerTurn {
    fn from(mv: Move) -> Self {
        mv.layer_turn()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face.symbol())?;
        if self.prime {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CubeError::Notation(s.to_string());
        let mut chars = s.trim().chars();
        let face = chars.next().and_then(Face::from_symbol).ok_or_else(invalid)?;
        let prime = match chars.as_str() {
            "" => false,
            "'" | "’" => true,
            _ => return Err(invalid()),
        };
        Ok(Move::new(face, prime))
    }
}

impl TryFrom<String> for Move {
    type Error = CubeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> Self {
        mv.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        for s in ["R", "L'", "U", "D'", "F", "B'", "M", "E'", "S"] {
            let mv: Move = s.parse().unwrap();
            assert_eq!(mv.to_string(), s);
        }
        assert_eq!("R’".parse::<Move>().unwrap(), Move::prime(Face::R));
    }

    #[test]
    fn parse_rejects_garbage() {
        for s in ["", "X", "R2", "r", "RU", "'"] {
            assert_eq!(s.parse::<Move>(), Err(CubeError::Notation(s.to_string())), "{s:?}");
        }
    }

    #[test]
    fn parse_sequence() {
        let moves = Move::parse_sequence("R U  R'\tU'").unwrap();
        assert_eq!(
            moves,
            vec![
                Move::clockwise(Face::R),
                Move::clockwise(Face::U),
                Move::prime(Face::R),
                Move::prime(Face::U),
            ]
        );
        assert!(Move::parse_sequence("R Q").is_err());
        assert!(Move::parse_sequence("").unwrap().is_empty());
    }

    #[test]
    fn opposite_faces_turn_opposite_ways() {
        assert_eq!(Face::R.clockwise(), Face::L.clockwise().inverse());
        assert_eq!(Face::U.clockwise(), Face::D.clockwise().inverse());
        assert_eq!(Face::F.clockwise(), Face::B.clockwise().inverse());
        assert_eq!(Face::M.clockwise(), Face::L.clockwise());
        assert_eq!(Face::E.clockwise(), Face::D.clockwise());
        assert_eq!(Face::S.clockwise(), Face::F.clockwise());
    }

    #[test]
    fn prime_inverts_the_layer_turn() {
        for face in Face::ALL {
            let cw = Move::clockwise(face).layer_turn();
            let ccw = Move::prime(face).layer_turn();
            assert_eq!(cw.layer, ccw.layer);
            assert_eq!(cw.inverse(), ccw);
        }
    }

    #[test]
    fn serde_uses_notation() {
        let json = serde_json::to_string(&Move::prime(Face::F)).unwrap();
        assert_eq!(json, "\"F'\"");
        let mv: Move = serde_json::from_str("\"E\"").unwrap();
        assert_eq!(mv, Move::clockwise(Face::E));
        assert!(serde_json::from_str::<Move>("\"Z\"").is_err());
    }

    #[test]
    fn layer_turn_display() {
        assert_eq!(Move::clockwise(Face::R).layer_turn().to_string(), "x=+1 -90°");
    }
}
