//! Input symbol → move lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::assembly::{Cube, MoveStatus};
use super::error::CubeError;
use super::moves::{Face, Move};
use crate::core::controller::Button;

/// Each bound button triggers exactly one move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    map: BTreeMap<Button, Move>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Face::*;

        let table = [
            (Button::KeyD, Move::clockwise(F)),
            (Button::KeyE, Move::prime(F)),
            (Button::KeyK, Move::clockwise(B)),
            (Button::KeyI, Move::prime(B)),
            (Button::KeyL, Move::clockwise(R)),
            (Button::KeyO, Move::prime(R)),
            (Button::KeyS, Move::clockwise(L)),
            (Button::KeyW, Move::prime(L)),
            (Button::KeyF, Move::clockwise(U)),
            (Button::KeyR, Move::prime(U)),
            (Button::KeyJ, Move::clockwise(D)),
            (Button::KeyU, Move::prime(D)),
            (Button::Digit1, Move::clockwise(M)),
            (Button::Digit2, Move::prime(M)),
            (Button::Digit3, Move::clockwise(E)),
            (Button::Digit4, Move::prime(E)),
            (Button::Digit5, Move::clockwise(S)),
            (Button::Digit6, Move::prime(S)),
        ];
        Self {
            map: table.into_iter().collect(),
        }
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    pub fn bind(&mut self, button: Button, mv: Move) -> Option<Move> {
        self.map.insert(button, mv)
    }

    pub fn get(&self, button: Button) -> Option<Move> {
        self.map.get(&button).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Button, Move)> + '_ {
        self.map.iter().map(|(&b, &m)| (b, m))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Start the move bound to `button`. Unbound buttons return `Ok(None)`;
    /// presses during a turn come back as [`MoveStatus::Dropped`].
    pub fn dispatch(&self, cube: &mut Cube, button: Button) -> Result<Option<MoveStatus>, CubeError> {
        match self.get(button) {
            Some(mv) => cube.begin_move(mv).map(Some),
            None => Ok(None),
        }
    }

    /// One line per binding, for the controls banner.
    pub fn describe(&self) -> String {
        self.iter()
            .map(|(button, mv)| format!("{button:?}={mv}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_table_covers_every_face_both_ways() {
        let bindings = KeyBindings::default();
        let moves: HashSet<Move> = bindings.iter().map(|(_, m)| m).collect();

        assert_eq!(bindings.len(), 18);
        for face in Face::ALL {
            assert!(moves.contains(&Move::clockwise(face)), "{face:?}");
            assert!(moves.contains(&Move::prime(face)), "{face:?}");
        }
    }

    #[test]
    fn rebinding_replaces() {
        let mut bindings = KeyBindings::empty();
        assert!(bindings.is_empty());
        assert_eq!(bindings.bind(Button::KeyQ, Move::clockwise(Face::U)), None);
        assert_eq!(
            bindings.bind(Button::KeyQ, Move::prime(Face::U)),
            Some(Move::clockwise(Face::U))
        );
        assert_eq!(bindings.get(Button::KeyQ), Some(Move::prime(Face::U)));
    }

    #[test]
    fn serde_round_trip_through_names() {
        let mut bindings = KeyBindings::empty();
        bindings.bind(Button::KeyD, Move::clockwise(Face::F));
        bindings.bind(Button::Digit2, Move::prime(Face::M));

        let json = serde_json::to_string(&bindings).unwrap();
        assert_eq!(json, r#"{"KeyD":"F","Digit2":"M'"}"#);
        let parsed: KeyBindings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, bindings);
    }

    #[test]
    fn describe_lists_bindings() {
        let mut bindings = KeyBindings::empty();
        bindings.bind(Button::KeyA, Move::clockwise(Face::R));
        assert_eq!(bindings.describe(), "KeyA=R");
    }
}
