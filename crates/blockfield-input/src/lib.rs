//! Keyboard and mouse state for the Blockfield voxel sandbox.
//!
//! The windowing layer feeds raw `winit` events in; the frame loop reads a
//! per-frame view back out:
//!
//! - [`KeyboardState`]: which keys are held
//! - [`MouseState`]: look motion, button state and the clicks of this frame
//! - [`ActionMap`]: game [`Action`]s bound to keys and buttons
//! - [`InputManager`]: the three combined, plus cursor capture
//!
//! # Usage
//!
//! ```ignore
//! use blockfield_input::{Action, ActionMap, InputManager, KeyCode};
//!
//! let actions = ActionMap::builder()
//!     .bind(Action::MoveForward, KeyCode::KeyW)
//!     .bind(Action::Jump, KeyCode::Space)
//!     .build();
//! let mut input = InputManager::with_actions(actions);
//!
//! // In the event handler
//! input.process_window_event(&event);
//!
//! // Once per frame
//! input.update();
//! if input.is_action_pressed(Action::MoveForward) {
//!     // ...
//! }
//! input.end_frame();
//! ```
//!
//! World edits are only meaningful while the cursor is captured; check
//! [`InputManager::is_engaged`] before acting on clicks.

mod action;
mod button_state;
mod input;
mod keyboard;
mod mouse;

pub use action::{Action, ActionMap, ActionMapBuilder, InputBinding};
pub use button_state::ButtonState;
pub use input::InputManager;
pub use keyboard::KeyboardState;
pub use mouse::{CursorMode, MouseButton, MouseState};

// Re-export winit types commonly used with input
pub use winit::event::{DeviceEvent, WindowEvent};
pub use winit::keyboard::KeyCode;
