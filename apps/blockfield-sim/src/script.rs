//! Scripted input for the headless frame loop.

use blockfield_input::{InputManager, KeyCode, MouseButton};
use tracing::debug;

/// Mouse motion large enough to pin the view at the lower pitch limit.
const LOOK_DOWN: f64 = 1_000.0;

/// A fixed tour through the controls, spread over a run of `frames` frames.
#[derive(Debug, Clone, Copy)]
pub struct Script {
    walk_end: u32,
    look: u32,
    place: u32,
    dig: u32,
    jump: u32,
}

impl Script {
    pub const fn new(frames: u32) -> Self {
        Self {
            walk_end: frames / 6,
            look: frames / 4,
            place: frames / 3,
            dig: frames / 2,
            jump: frames * 2 / 3,
        }
    }

    /// Inject the input events scheduled for `frame`.
    pub fn apply(&self, frame: u32, input: &mut InputManager) {
        if frame == 0 {
            debug!(frame, "Capturing cursor and walking forward");
            input.keyboard_mut().press(KeyCode::Escape);
            input.keyboard_mut().press(KeyCode::KeyW);
        }
        if frame == 1 {
            input.keyboard_mut().release(KeyCode::Escape);
        }
        if frame == self.walk_end {
            input.keyboard_mut().release(KeyCode::KeyW);
        }
        if frame == self.look {
            debug!(frame, "Looking down");
            input.mouse_mut().add_raw_motion(0.0, LOOK_DOWN);
        }
        if frame == self.place || frame == self.place + 2 {
            debug!(frame, "Placing stone");
            input.keyboard_mut().press(KeyCode::Digit3);
            input.mouse_mut().press(MouseButton::Right);
        }
        if frame == self.place + 1 || frame == self.place + 3 {
            input.keyboard_mut().release(KeyCode::Digit3);
            input.mouse_mut().release(MouseButton::Right);
        }
        if frame == self.dig {
            debug!(frame, "Digging");
            input.mouse_mut().press(MouseButton::Left);
        }
        if frame == self.dig + 1 {
            input.mouse_mut().release(MouseButton::Left);
        }
        if frame == self.jump {
            debug!(frame, "Jumping");
            input.keyboard_mut().press(KeyCode::Space);
        }
        if frame == self.jump + 1 {
            input.keyboard_mut().release(KeyCode::Space);
        }
    }
}
