use serde::{Deserialize, Serialize};

/// Input button identifier
///
/// Logical symbols only; which symbol triggers which move is decided by
/// [`KeyBindings`](crate::cube::dispatch::KeyBindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Button {
    KeyA,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF,
    KeyG,
    KeyH,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyM,
    KeyN,
    KeyO,
    KeyP,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyU,
    KeyV,
    KeyW,
    KeyX,
    KeyY,
    KeyZ,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Space,
    Escape,
    MouseLeft,
    MouseRight,
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];

    /// Buttons that went down since the last call, oldest first
    fn take_presses(&mut self) -> Vec<Button>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_button_hash() {
        let mut set = HashSet::new();
        set.insert(Button::KeyD);
        set.insert(Button::KeyE);
        set.insert(Button::KeyD);

        assert!(set.contains(&Button::KeyD));
        assert!(!set.contains(&Button::KeyK));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_button_serializes_by_name() {
        let json = serde_json::to_string(&Button::Digit3).unwrap();
        assert_eq!(json, "\"Digit3\"");

        let button: Button = serde_json::from_str("\"KeyL\"").unwrap();
        assert_eq!(button, Button::KeyL);
    }

    struct MockController {
        pressed: Vec<Button>,
        presses: Vec<Button>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn get_down_keys(&self) -> &[Button] {
            &self.pressed
        }

        fn take_presses(&mut self) -> Vec<Button> {
            std::mem::take(&mut self.presses)
        }
    }

    #[test]
    fn test_controller_presses_drain() {
        let mut controller = MockController {
            pressed: vec![Button::KeyD],
            presses: vec![Button::KeyD, Button::KeyE],
        };

        assert!(controller.is_down(Button::KeyD));
        assert_eq!(controller.take_presses(), vec![Button::KeyD, Button::KeyE]);
        assert!(controller.take_presses().is_empty());
        assert_eq!(controller.get_down_keys().len(), 1);
    }
}
