//! Default key bindings and the per-frame input pump.

use blockfield_core::BlockType;
use blockfield_input::{Action, ActionMap, InputManager, KeyCode};
use blockfield_physics::MovementInput;
use tracing::{debug, trace};

use crate::editor::EditEvent;
use crate::session::WorldSession;

/// Number keys that select palette slots, in slot order.
const SLOT_KEYS: [KeyCode; 4] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
];

/// WASD and arrow keys to move, Space to jump, 1-4 to pick a block type and
/// Escape to capture or release the cursor.
#[must_use]
pub fn default_actions() -> ActionMap {
    let mut builder = ActionMap::builder()
        .bind_many(Action::MoveForward, [KeyCode::KeyW, KeyCode::ArrowUp])
        .bind_many(Action::MoveBack, [KeyCode::KeyS, KeyCode::ArrowDown])
        .bind_many(Action::MoveLeft, [KeyCode::KeyA, KeyCode::ArrowLeft])
        .bind_many(Action::MoveRight, [KeyCode::KeyD, KeyCode::ArrowRight])
        .bind(Action::Jump, KeyCode::Space)
        .bind(Action::ToggleCursor, KeyCode::Escape);
    for (slot, key) in (1u8..).zip(SLOT_KEYS) {
        builder = builder.bind(Action::SelectSlot(slot), key);
    }
    builder.build()
}

/// Snapshot the movement actions held this frame.
#[must_use]
pub fn movement_from_input(input: &InputManager) -> MovementInput {
    MovementInput {
        forward: input.is_action_pressed(Action::MoveForward),
        back: input.is_action_pressed(Action::MoveBack),
        left: input.is_action_pressed(Action::MoveLeft),
        right: input.is_action_pressed(Action::MoveRight),
        jump: input.is_action_pressed(Action::Jump),
    }
}

/// Block type chosen this frame, if a palette key went down.
///
/// When several go down at once the highest slot wins.
#[must_use]
pub fn palette_selection(input: &InputManager) -> Option<BlockType> {
    BlockType::ALL
        .iter()
        .rev()
        .copied()
        .find(|block| input.is_action_just_pressed(Action::SelectSlot(block.palette_index())))
}

/// Run one frame of input against the session.
///
/// Refreshes actions, toggles cursor capture, applies look and clicks while
/// the cursor is captured, applies palette selection, then steps the player
/// by `dt`. Settles the input edges before returning the applied edits.
pub fn drive_frame(
    session: &mut WorldSession,
    input: &mut InputManager,
    dt: f32,
) -> Vec<EditEvent> {
    input.update();

    if input.is_action_just_pressed(Action::ToggleCursor) {
        input.toggle_cursor();
    }

    let engaged = input.is_engaged();
    if engaged {
        let delta = input.look_delta();
        session.look(delta.x, delta.y);
    }

    if let Some(block) = palette_selection(input) {
        session.select_block_type(block);
    }

    let clicks = input.take_clicks();
    let mut edits = Vec::new();
    if engaged {
        edits.extend(clicks.into_iter().filter_map(|button| session.click(button)));
    } else if !clicks.is_empty() {
        debug!(count = clicks.len(), "Ignoring clicks while cursor is free");
    }

    let movement = movement_from_input(input);
    let state = session.step(dt, &movement);
    trace!(position = ?state.position, edits = edits.len(), "Frame");

    input.end_frame();
    edits
}
