use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Adapter that bridges Winit events to the Controller trait
///
/// Key presses are edge-triggered: holding a key (or OS key repeat) yields a
/// single press, so one physical press maps to at most one cube move.
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
    /// Buttons that went down since the last `take_presses`
    presses: Vec<Button>,
    /// Current pointer position, window space with y pointing up
    pointer: Option<Vec2>,
    window_height: f32,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Height of the window in physical pixels, used to flip pointer y
    pub fn set_window_height(&mut self, height: f32) {
        self.window_height = height;
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_button(button, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = Self::mouse_button_to_button(*button) {
                    self.set_button(button, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.move_pointer(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => self.pointer = None,
            WindowEvent::Resized(size) => self.set_window_height(size.height as f32),
            _ => {}
        }
    }

    /// Record a button transition
    pub fn set_button(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(button) {
                    self.pressed_vec.push(button);
                    self.presses.push(button);
                }
            }
            ElementState::Released => {
                if self.pressed_keys.remove(&button) {
                    self.pressed_vec.retain(|&b| b != button);
                }
            }
        }
    }

    /// Record a pointer position given in winit coordinates (y down)
    pub fn move_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Some(Vec2::new(x, self.window_height - y));
    }

    /// Current pointer position with y pointing up (if available)
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Map Winit KeyCode to Button
    pub fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        let button = match keycode {
            KeyCode::KeyA => Button::KeyA,
            KeyCode::KeyB => Button::KeyB,
            KeyCode::KeyC => Button::KeyC,
            KeyCode::KeyD => Button::KeyD,
            KeyCode::KeyE => Button::KeyE,
            KeyCode::KeyF => Button::KeyF,
            KeyCode::KeyG => Button::KeyG,
            KeyCode::KeyH => Button::KeyH,
            KeyCode::KeyI => Button::KeyI,
            KeyCode::KeyJ => Button::KeyJ,
            KeyCode::KeyK => Button::KeyK,
            KeyCode::KeyL => Button::KeyL,
            KeyCode::KeyM => Button::KeyM,
            KeyCode::KeyN => Button::KeyN,
            KeyCode::KeyO => Button::KeyO,
            KeyCode::KeyP => Button::KeyP,
            KeyCode::KeyQ => Button::KeyQ,
            KeyCode::KeyR => Button::KeyR,
            KeyCode::KeyS => Button::KeyS,
            KeyCode::KeyT => Button::KeyT,
            KeyCode::KeyU => Button::KeyU,
            KeyCode::KeyV => Button::KeyV,
            KeyCode::KeyW => Button::KeyW,
            KeyCode::KeyX => Button::KeyX,
            KeyCode::KeyY => Button::KeyY,
            KeyCode::KeyZ => Button::KeyZ,
            KeyCode::Digit0 | KeyCode::Numpad0 => Button::Digit0,
            KeyCode::Digit1 | KeyCode::Numpad1 => Button::Digit1,
            KeyCode::Digit2 | KeyCode::Numpad2 => Button::Digit2,
            KeyCode::Digit3 | KeyCode::Numpad3 => Button::Digit3,
            KeyCode::Digit4 | KeyCode::Numpad4 => Button::Digit4,
            KeyCode::Digit5 | KeyCode::Numpad5 => Button::Digit5,
            KeyCode::Digit6 | KeyCode::Numpad6 => Button::Digit6,
            KeyCode::Digit7 | KeyCode::Numpad7 => Button::Digit7,
            KeyCode::Digit8 | KeyCode::Numpad8 => Button::Digit8,
            KeyCode::Digit9 | KeyCode::Numpad9 => Button::Digit9,
            KeyCode::Space => Button::Space,
            KeyCode::Escape => Button::Escape,
            _ => return None,
        };
        Some(button)
    }

    /// Map Winit MouseButton to Button
    pub fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }

    fn take_presses(&mut self) -> Vec<Button> {
        std::mem::take(&mut self.presses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Winit KeyEvent has platform-private fields, so these tests drive the
    // adapter through set_button / move_pointer directly.

    #[test]
    fn test_new_controller_empty() {
        let mut controller = WinitController::new();
        assert!(!controller.is_down(Button::KeyD));
        assert_eq!(controller.get_down_keys().len(), 0);
        assert!(controller.take_presses().is_empty());
        assert_eq!(controller.pointer(), None);
    }

    #[test]
    fn test_press_is_edge_triggered() {
        let mut controller = WinitController::new();

        controller.set_button(Button::KeyD, ElementState::Pressed);
        controller.set_button(Button::KeyD, ElementState::Pressed);
        assert_eq!(controller.take_presses(), vec![Button::KeyD]);
        assert!(controller.is_down(Button::KeyD));

        controller.set_button(Button::KeyD, ElementState::Released);
        assert!(!controller.is_down(Button::KeyD));
        assert!(controller.take_presses().is_empty());

        controller.set_button(Button::KeyD, ElementState::Pressed);
        assert_eq!(controller.take_presses(), vec![Button::KeyD]);
    }

    #[test]
    fn test_presses_keep_order() {
        let mut controller = WinitController::new();
        controller.set_button(Button::KeyF, ElementState::Pressed);
        controller.set_button(Button::KeyR, ElementState::Pressed);
        controller.set_button(Button::KeyF, ElementState::Released);

        assert_eq!(controller.take_presses(), vec![Button::KeyF, Button::KeyR]);
        assert_eq!(controller.get_down_keys(), &[Button::KeyR]);
    }

    #[test]
    fn test_pointer_is_flipped_to_y_up() {
        let mut controller = WinitController::new();
        controller.set_window_height(600.0);
        controller.move_pointer(100.0, 50.0);

        assert_eq!(controller.pointer(), Some(Vec2::new(100.0, 550.0)));
    }

    #[test]
    fn test_keycode_mapping() {
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyK), Some(Button::KeyK));
        assert_eq!(WinitController::keycode_to_button(KeyCode::Numpad5), Some(Button::Digit5));
        assert_eq!(WinitController::keycode_to_button(KeyCode::F1), None);
        assert_eq!(
            WinitController::mouse_button_to_button(MouseButton::Left),
            Some(Button::MouseLeft)
        );
        assert_eq!(WinitController::mouse_button_to_button(MouseButton::Middle), None);
    }
}
