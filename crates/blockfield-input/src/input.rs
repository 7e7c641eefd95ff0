//! Input manager combining keyboard, mouse, and action mapping.

use glam::Vec2;
use tracing::debug;
use winit::event::{DeviceEvent, WindowEvent};
use winit::keyboard::KeyCode;

use crate::action::{Action, ActionMap, InputBinding};
use crate::keyboard::KeyboardState;
use crate::mouse::{CursorMode, MouseButton, MouseState};

/// Input manager combining keyboard, mouse, and action mapping.
///
/// # Usage
///
/// ```ignore
/// // In the window event handler
/// input.process_window_event(&event);
///
/// // Once per frame
/// input.update();
/// if input.is_engaged() {
///     for button in input.take_clicks() {
///         // edit the world
///     }
/// }
/// input.end_frame();
/// ```
#[derive(Debug, Default)]
pub struct InputManager {
    keyboard: KeyboardState,
    mouse: MouseState,
    actions: ActionMap,
}

impl InputManager {
    /// Create a new input manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new input manager with pre-configured actions.
    #[must_use]
    pub fn with_actions(actions: ActionMap) -> Self {
        Self {
            keyboard: KeyboardState::new(),
            mouse: MouseState::new(),
            actions,
        }
    }

    /// Get a reference to the keyboard state.
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Get a mutable reference to the keyboard state, for injecting input
    /// without a window.
    pub fn keyboard_mut(&mut self) -> &mut KeyboardState {
        &mut self.keyboard
    }

    /// Get a reference to the mouse state.
    #[must_use]
    pub const fn mouse(&self) -> &MouseState {
        &self.mouse
    }

    /// Get a mutable reference to the mouse state, for injecting input
    /// without a window.
    pub fn mouse_mut(&mut self) -> &mut MouseState {
        &mut self.mouse
    }

    /// Get a reference to the action map.
    #[must_use]
    pub const fn actions(&self) -> &ActionMap {
        &self.actions
    }

    /// Get a mutable reference to the action map for runtime rebinding.
    pub fn actions_mut(&mut self) -> &mut ActionMap {
        &mut self.actions
    }

    /// Process a window event.
    ///
    /// Returns `true` if the event was consumed.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard.process_key_event(event);
                true
            }
            WindowEvent::MouseInput { button, state, .. } => {
                self.mouse.process_button(*button, *state);
                true
            }
            WindowEvent::Focused(false) => {
                self.keyboard.clear();
                self.set_cursor_mode(CursorMode::Normal);
                true
            }
            _ => false,
        }
    }

    /// Process a device event (for raw mouse motion).
    ///
    /// Raw motion is what drives look while the cursor is locked.
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.mouse.add_raw_motion(delta.0, delta.1);
        }
    }

    /// Update action states from the current keyboard and mouse state.
    ///
    /// Call at the start of the frame, before querying actions.
    pub fn update(&mut self) {
        self.actions.update(&self.keyboard, &self.mouse);
    }

    /// Called at the end of each frame to settle button edges and reset deltas.
    pub fn end_frame(&mut self) {
        self.keyboard.end_frame();
        self.mouse.end_frame();
        self.actions.end_frame();
    }

    /// Returns `true` if the key is currently pressed.
    #[must_use]
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keyboard.is_pressed(key)
    }

    /// Look motion accumulated this frame, in raw device units.
    #[must_use]
    pub const fn look_delta(&self) -> Vec2 {
        self.mouse.raw_delta()
    }

    /// Take the clicks queued since the last frame, oldest first.
    pub fn take_clicks(&mut self) -> Vec<MouseButton> {
        self.mouse.take_clicks()
    }

    /// Get the current cursor mode.
    #[must_use]
    pub const fn cursor_mode(&self) -> CursorMode {
        self.mouse.cursor_mode()
    }

    /// Set the cursor mode.
    ///
    /// This only updates the internal state. The caller applies the mode to
    /// the actual window.
    pub fn set_cursor_mode(&mut self, mode: CursorMode) {
        let previous = self.mouse.cursor_mode();
        if previous != mode {
            debug!(?previous, ?mode, "Cursor mode changed");
            self.mouse.set_cursor_mode(mode);
        }
    }

    /// Switch between a captured cursor and a free one. Returns the new mode.
    pub fn toggle_cursor(&mut self) -> CursorMode {
        let mode = if self.is_engaged() {
            CursorMode::Normal
        } else {
            CursorMode::Locked
        };
        self.set_cursor_mode(mode);
        mode
    }

    /// Returns `true` while the cursor is captured, i.e. the player is
    /// interacting with the world rather than the desktop.
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.mouse.cursor_mode() == CursorMode::Locked
    }

    /// Bind an input to an action.
    pub fn bind_action(&mut self, action: Action, binding: impl Into<InputBinding>) {
        self.actions.bind(action, binding);
    }

    /// Returns `true` if the action is currently pressed.
    #[must_use]
    pub fn is_action_pressed(&self, action: Action) -> bool {
        self.actions.is_pressed(action)
    }

    /// Returns `true` if the action was just pressed this frame.
    #[must_use]
    pub fn is_action_just_pressed(&self, action: Action) -> bool {
        self.actions.is_just_pressed(action)
    }

    /// Returns `true` if the action was just released this frame.
    #[must_use]
    pub fn is_action_just_released(&self, action: Action) -> bool {
        self.actions.is_just_released(action)
    }

    /// Clear all input state.
    pub fn clear(&mut self) {
        self.keyboard.clear();
        self.mouse.clear();
    }
}
