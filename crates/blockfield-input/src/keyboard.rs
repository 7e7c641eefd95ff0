//! Keyboard input state tracking.

use hashbrown::HashMap;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::button_state::ButtonState;

/// State of every key seen so far, by physical key code.
#[derive(Debug, Default)]
pub struct KeyboardState {
    keys: HashMap<KeyCode, ButtonState>,
}

impl KeyboardState {
    /// Create a new keyboard state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a key event from the window.
    pub fn process_key_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key) = event.physical_key else {
            return;
        };
        match event.state {
            ElementState::Pressed => self.press(key),
            ElementState::Released => self.release(key),
        }
    }

    /// Record that `key` went down.
    pub fn press(&mut self, key: KeyCode) {
        self.keys.entry(key).or_default().press();
    }

    /// Record that `key` came up.
    pub fn release(&mut self, key: KeyCode) {
        self.keys.entry(key).or_default().release();
    }

    /// Returns `true` if the key is currently held.
    #[must_use]
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.state(key).is_pressed()
    }

    /// Returns `true` if the key went down this frame.
    #[must_use]
    pub fn is_just_pressed(&self, key: KeyCode) -> bool {
        self.state(key).is_just_pressed()
    }

    /// Returns `true` if the key came up this frame.
    #[must_use]
    pub fn is_just_released(&self, key: KeyCode) -> bool {
        self.state(key).is_just_released()
    }

    /// Current state of `key`; keys never seen are released.
    #[must_use]
    pub fn state(&self, key: KeyCode) -> ButtonState {
        self.keys.get(&key).copied().unwrap_or_default()
    }

    /// Called at end of frame to settle key edges.
    pub fn end_frame(&mut self) {
        for state in self.keys.values_mut() {
            state.end_frame();
        }
    }

    /// Forget every key, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}
