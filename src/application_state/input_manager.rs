//! # Input Manager
//!
//! This module latches raw device events between frames, including:
//! - Keyboard input state tracking for the movement keys
//! - Mouse button, motion, and scroll tracking
//! - Collapsing raw state into per-frame transition snapshots
//!
//! The manager is the only part of the crate that touches `winit` event
//! types; everything downstream consumes `ProcessedInputState` snapshots
//! and the typed commands translated from them.

use std::collections::HashMap;

use winit::{
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use super::input_state::{MouseInput, ProcessedInputState, RawInputState};

/// The keys the interaction layer cares about: horizontal movement, rising,
/// and sinking. Everything else is ignored at intake.
const KEY_CODES: [KeyCode; 6] = [
    KeyCode::KeyW,
    KeyCode::KeyS,
    KeyCode::KeyA,
    KeyCode::KeyD,
    KeyCode::Space,
    KeyCode::ShiftLeft,
];

/// The mouse buttons the interaction layer cares about: removal on the
/// left button, placement on the right.
const MOUSE_BUTTONS: [MouseButton; 2] = [MouseButton::Left, MouseButton::Right];

/// How many scroll lines one wheel pixel is worth when a device reports
/// pixel deltas instead of line deltas.
const PIXELS_PER_LINE: f32 = 1.0 / 38.0;

/// Manages the state of all input devices and processes input events.
///
/// This struct maintains the current and previous state of keyboard and
/// mouse inputs, so each frame's snapshot can report transitions (pressed /
/// held / released) rather than bare booleans. Placement and removal act on
/// the pressed transition only; movement acts on pressed-or-held.
pub struct InputManager {
    /// Previous state of all tracked keyboard keys
    pub keyboard_inputs_old: HashMap<KeyCode, bool>,
    /// Current state of all tracked keyboard keys
    pub keyboard_inputs_new: HashMap<KeyCode, bool>,

    /// Current state of mouse inputs
    pub mouse_inputs: MouseInput,
}

impl InputManager {
    /// Creates a new InputManager with default state.
    ///
    /// Initializes all tracked keyboard keys and mouse buttons to the
    /// 'released' state with no pending deltas.
    ///
    /// # Returns
    /// A new `InputManager` instance with default state.
    pub fn new() -> Self {
        let mut keyboard_inputs_old = HashMap::new();
        let mut keyboard_inputs_new = HashMap::new();
        for key_code in KEY_CODES {
            keyboard_inputs_old.insert(key_code, false);
            keyboard_inputs_new.insert(key_code, false);
        }

        let mut mouse_button_inputs_old = HashMap::new();
        let mut mouse_button_inputs_new = HashMap::new();
        for button in MOUSE_BUTTONS {
            mouse_button_inputs_old.insert(button, false);
            mouse_button_inputs_new.insert(button, false);
        }

        let mouse_inputs = MouseInput {
            mouse_button_inputs_old,
            mouse_button_inputs_new,
            mouse_scroll_delta: None,
            mouse_delta: None,
        };

        Self {
            keyboard_inputs_old,
            keyboard_inputs_new,
            mouse_inputs,
        }
    }

    /// Updates the old state with the current state to prepare for the next
    /// frame.
    ///
    /// Called at the end of each frame so the next frame's transitions are
    /// computed against what this frame saw.
    pub fn move_old_states(&mut self) {
        for (key, new_state) in self.keyboard_inputs_new.iter() {
            if let Some(old_state) = self.keyboard_inputs_old.get_mut(key) {
                *old_state = *new_state;
            }
        }

        for (button, new_state) in self.mouse_inputs.mouse_button_inputs_new.iter() {
            if let Some(old_state) = self.mouse_inputs.mouse_button_inputs_old.get_mut(button) {
                *old_state = *new_state;
            }
        }
    }

    /// Processes a window event and updates internal input state.
    ///
    /// Handles keyboard, mouse button, and scroll wheel events; events for
    /// untracked keys and buttons are dropped here.
    ///
    /// # Arguments
    /// * `event` - The window event to process
    pub fn intake_input(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state,
                        physical_key: PhysicalKey::Code(key),
                        ..
                    },
                ..
            } => {
                if let Some(key_state) = self.keyboard_inputs_new.get_mut(key) {
                    *key_state = *state == ElementState::Pressed;
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, vertical) => *vertical,
                    MouseScrollDelta::PixelDelta(position) => {
                        position.y as f32 * PIXELS_PER_LINE
                    }
                };
                let accumulated = self.mouse_inputs.mouse_scroll_delta.unwrap_or(0.0);
                self.mouse_inputs.mouse_scroll_delta = Some(accumulated + lines);
            }
            WindowEvent::MouseInput { button, state, .. } => {
                if let Some(button_state) =
                    self.mouse_inputs.mouse_button_inputs_new.get_mut(button)
                {
                    *button_state = *state == ElementState::Pressed;
                }
            }
            _ => {}
        }
    }

    /// Updates the mouse movement delta.
    ///
    /// # Arguments
    /// * `delta` - The (x, y) delta of mouse movement since the last update
    pub fn intake_mouse_motion(&mut self, delta: (f64, f64)) {
        self.mouse_inputs.mouse_delta = Some(delta);
    }

    /// Creates a processed input state from the current raw boolean states.
    ///
    /// This translates the raw boolean states into `RawInputState` values
    /// that represent the state transitions (pressed, held, released, not
    /// pressed), and attaches the frame's motion and scroll deltas.
    ///
    /// # Returns
    /// A new `ProcessedInputState` snapshot for this frame.
    pub fn create_processed_input_state(&mut self) -> ProcessedInputState {
        let mut keyboard_states = HashMap::new();
        let mut mouse_button_states = HashMap::new();

        for (key, &new_state) in self.keyboard_inputs_new.iter() {
            let old_state = self.keyboard_inputs_old.get(key).copied().unwrap_or(false);
            keyboard_states.insert(*key, RawInputState::from_raw_states(old_state, new_state));
        }

        for (button, &new_state) in self.mouse_inputs.mouse_button_inputs_new.iter() {
            let old_state = self
                .mouse_inputs
                .mouse_button_inputs_old
                .get(button)
                .copied()
                .unwrap_or(false);
            mouse_button_states
                .insert(*button, RawInputState::from_raw_states(old_state, new_state));
        }

        ProcessedInputState {
            keyboard_states,
            mouse_button_states,
            mouse_delta: self.mouse_inputs.mouse_delta,
            scroll_delta: self.mouse_inputs.mouse_scroll_delta,
        }
    }

    /// Returns the processed input state and resets per-frame state.
    ///
    /// Called once per tick to get the frame's snapshot and prepare the
    /// manager for the next frame.
    ///
    /// # Returns
    /// The processed input state, if available.
    pub fn get_and_reset_processed_input(&mut self) -> Option<ProcessedInputState> {
        let processed_input = Some(self.create_processed_input_state());
        self.reset_inputs();
        processed_input
    }

    /// Resets per-frame input state.
    ///
    /// Latched button/key booleans survive (a held key stays held); motion
    /// and scroll deltas do not accumulate across frames.
    pub fn reset_inputs(&mut self) {
        self.move_old_states();
        self.mouse_inputs.mouse_scroll_delta = None;
        self.mouse_inputs.mouse_delta = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_manager_reports_nothing_pressed() {
        let mut manager = InputManager::new();
        let snapshot = manager.create_processed_input_state();
        assert_eq!(
            snapshot.get_key_state(KeyCode::KeyW),
            RawInputState::NotPressed
        );
        assert_eq!(
            snapshot.get_mouse_button_state(MouseButton::Left),
            RawInputState::NotPressed
        );
        assert_eq!(snapshot.scroll_delta, None);
    }

    #[test]
    fn key_press_becomes_held_on_the_next_frame() {
        let mut manager = InputManager::new();
        manager.keyboard_inputs_new.insert(KeyCode::KeyW, true);

        let snapshot = manager.get_and_reset_processed_input().unwrap();
        assert_eq!(snapshot.get_key_state(KeyCode::KeyW), RawInputState::Pressed);

        // Key still down next frame
        let snapshot = manager.get_and_reset_processed_input().unwrap();
        assert_eq!(snapshot.get_key_state(KeyCode::KeyW), RawInputState::Held);
    }

    #[test]
    fn button_release_is_reported_once() {
        let mut manager = InputManager::new();
        manager
            .mouse_inputs
            .mouse_button_inputs_new
            .insert(MouseButton::Right, true);
        manager.get_and_reset_processed_input();

        manager
            .mouse_inputs
            .mouse_button_inputs_new
            .insert(MouseButton::Right, false);
        let snapshot = manager.get_and_reset_processed_input().unwrap();
        assert_eq!(
            snapshot.get_mouse_button_state(MouseButton::Right),
            RawInputState::Released
        );

        let snapshot = manager.get_and_reset_processed_input().unwrap();
        assert_eq!(
            snapshot.get_mouse_button_state(MouseButton::Right),
            RawInputState::NotPressed
        );
    }

    #[test]
    fn deltas_do_not_survive_the_frame() {
        let mut manager = InputManager::new();
        manager.intake_mouse_motion((3.0, -1.0));
        manager.mouse_inputs.mouse_scroll_delta = Some(1.0);

        let snapshot = manager.get_and_reset_processed_input().unwrap();
        assert_eq!(snapshot.mouse_delta, Some((3.0, -1.0)));
        assert_eq!(snapshot.scroll_delta, Some(1.0));

        let snapshot = manager.get_and_reset_processed_input().unwrap();
        assert_eq!(snapshot.mouse_delta, None);
        assert_eq!(snapshot.scroll_delta, None);
    }
}
