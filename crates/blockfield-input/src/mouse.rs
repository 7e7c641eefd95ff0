//! Mouse input state tracking.

use glam::Vec2;
use hashbrown::HashMap;
use winit::event::{ElementState, MouseButton as WinitMouseButton};

use crate::button_state::ButtonState;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => Self::Left,
            WinitMouseButton::Right => Self::Right,
            WinitMouseButton::Middle => Self::Middle,
            WinitMouseButton::Back => Self::Back,
            WinitMouseButton::Forward => Self::Forward,
            WinitMouseButton::Other(id) => Self::Other(id),
        }
    }
}

/// Cursor mode for the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorMode {
    /// Free cursor; the player is not interacting with the world.
    #[default]
    Normal,
    /// Cursor is confined to the window.
    Confined,
    /// Cursor is captured and hidden (first-person controls).
    Locked,
}

/// Mouse input state.
///
/// Tracks look motion, button states and the discrete clicks received since
/// the last frame.
#[derive(Debug, Default)]
pub struct MouseState {
    /// Accumulated raw motion since the last frame.
    raw_delta: Vec2,
    buttons: HashMap<MouseButton, ButtonState>,
    /// Buttons pressed since the last frame, in arrival order.
    clicks: Vec<MouseButton>,
    cursor_mode: CursorMode,
}

impl MouseState {
    /// Create a new mouse state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process raw mouse motion (device motion, ignoring cursor position).
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_raw_motion(&mut self, delta_x: f64, delta_y: f64) {
        self.raw_delta.x += delta_x as f32;
        self.raw_delta.y += delta_y as f32;
    }

    /// Process a button event from the window.
    pub fn process_button(&mut self, button: WinitMouseButton, state: ElementState) {
        let button = MouseButton::from(button);
        match state {
            ElementState::Pressed => self.press(button),
            ElementState::Released => self.release(button),
        }
    }

    /// Record that `button` went down. Each press queues one click.
    pub fn press(&mut self, button: MouseButton) {
        let state = self.buttons.entry(button).or_default();
        if !state.is_pressed() {
            self.clicks.push(button);
        }
        state.press();
    }

    /// Record that `button` came up.
    pub fn release(&mut self, button: MouseButton) {
        self.buttons.entry(button).or_default().release();
    }

    /// Get raw mouse motion accumulated this frame.
    #[must_use]
    pub const fn raw_delta(&self) -> Vec2 {
        self.raw_delta
    }

    /// Returns `true` if the button is currently held.
    #[must_use]
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        self.state(button).is_pressed()
    }

    /// Returns `true` if the button went down this frame.
    #[must_use]
    pub fn is_just_pressed(&self, button: MouseButton) -> bool {
        self.state(button).is_just_pressed()
    }

    /// Returns `true` if the button came up this frame.
    #[must_use]
    pub fn is_just_released(&self, button: MouseButton) -> bool {
        self.state(button).is_just_released()
    }

    /// Current state of `button`; buttons never seen are released.
    #[must_use]
    pub fn state(&self, button: MouseButton) -> ButtonState {
        self.buttons.get(&button).copied().unwrap_or_default()
    }

    /// Clicks received since the last frame, oldest first.
    #[must_use]
    pub fn clicks(&self) -> &[MouseButton] {
        &self.clicks
    }

    /// Take the queued clicks, leaving the queue empty.
    pub fn take_clicks(&mut self) -> Vec<MouseButton> {
        std::mem::take(&mut self.clicks)
    }

    /// Get the current cursor mode.
    #[must_use]
    pub const fn cursor_mode(&self) -> CursorMode {
        self.cursor_mode
    }

    /// Set the cursor mode.
    pub fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.cursor_mode = mode;
    }

    /// Called at end of frame to settle button edges and reset deltas.
    pub fn end_frame(&mut self) {
        for button in self.buttons.values_mut() {
            button.end_frame();
        }
        self.raw_delta = Vec2::ZERO;
        self.clicks.clear();
    }

    /// Clear all mouse state.
    pub fn clear(&mut self) {
        self.raw_delta = Vec2::ZERO;
        self.buttons.clear();
        self.clicks.clear();
        self.cursor_mode = CursorMode::Normal;
    }
}
