//! Action mapping system for input handling.

use hashbrown::HashMap;
use winit::keyboard::KeyCode;

use crate::button_state::ButtonState;
use crate::keyboard::KeyboardState;
use crate::mouse::{MouseButton, MouseState};

/// Something the player can do, independent of which input triggers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    Jump,
    /// Capture or release the cursor.
    ToggleCursor,
    /// Choose the palette entry with this one-based index.
    SelectSlot(u8),
}

/// An input that can be bound to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputBinding {
    /// A keyboard key.
    Key(KeyCode),
    /// A mouse button.
    Mouse(MouseButton),
}

impl From<KeyCode> for InputBinding {
    fn from(key: KeyCode) -> Self {
        Self::Key(key)
    }
}

impl From<MouseButton> for InputBinding {
    fn from(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

impl InputBinding {
    fn state(self, keyboard: &KeyboardState, mouse: &MouseState) -> ButtonState {
        match self {
            Self::Key(key) => keyboard.state(key),
            Self::Mouse(button) => mouse.state(button),
        }
    }
}

#[derive(Debug, Default)]
struct Binding {
    inputs: Vec<InputBinding>,
    state: ButtonState,
}

/// Maps actions to input bindings, allowing several inputs per action.
///
/// An action is held while any of its inputs is held, and fires its
/// just-pressed edge when the first of them goes down.
#[derive(Debug, Default)]
pub struct ActionMap {
    actions: HashMap<Action, Binding>,
}

impl ActionMap {
    /// Create a new, empty action map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new action map with a builder pattern.
    #[must_use]
    pub fn builder() -> ActionMapBuilder {
        ActionMapBuilder::default()
    }

    /// Add a binding to an action.
    pub fn bind(&mut self, action: Action, binding: impl Into<InputBinding>) {
        let binding = binding.into();
        let inputs = &mut self.actions.entry(action).or_default().inputs;
        if !inputs.contains(&binding) {
            inputs.push(binding);
        }
    }

    /// Remove a binding from an action.
    pub fn unbind(&mut self, action: Action, binding: InputBinding) {
        if let Some(entry) = self.actions.get_mut(&action) {
            entry.inputs.retain(|b| *b != binding);
        }
    }

    /// Get the bindings for an action.
    #[must_use]
    pub fn bindings(&self, action: Action) -> &[InputBinding] {
        self.actions
            .get(&action)
            .map_or(&[][..], |entry| entry.inputs.as_slice())
    }

    /// Recompute every action from the current keyboard and mouse state.
    pub fn update(&mut self, keyboard: &KeyboardState, mouse: &MouseState) {
        for entry in self.actions.values_mut() {
            let states: Vec<ButtonState> = entry
                .inputs
                .iter()
                .map(|b| b.state(keyboard, mouse))
                .collect();

            let held = states.iter().any(|s| s.is_pressed());
            let went_down = states.iter().any(|s| s.is_just_pressed());
            let went_up = states.iter().any(|s| s.is_just_released());

            entry.state = match (held, entry.state.is_pressed()) {
                (true, false) if went_down => ButtonState::JustPressed,
                (true, _) => ButtonState::Pressed,
                (false, true) => ButtonState::JustReleased,
                (false, false) if went_up => ButtonState::JustReleased,
                (false, false) => ButtonState::Released,
            };
        }
    }

    /// Returns `true` if the action is currently held.
    #[must_use]
    pub fn is_pressed(&self, action: Action) -> bool {
        self.state(action).is_pressed()
    }

    /// Returns `true` if the action started this frame.
    #[must_use]
    pub fn is_just_pressed(&self, action: Action) -> bool {
        self.state(action).is_just_pressed()
    }

    /// Returns `true` if the action ended this frame.
    #[must_use]
    pub fn is_just_released(&self, action: Action) -> bool {
        self.state(action).is_just_released()
    }

    fn state(&self, action: Action) -> ButtonState {
        self.actions
            .get(&action)
            .map_or(ButtonState::Released, |entry| entry.state)
    }

    /// Called at end of frame to settle action edges.
    pub fn end_frame(&mut self) {
        for entry in self.actions.values_mut() {
            entry.state.end_frame();
        }
    }
}

/// Builder for creating an action map with a fluent API.
#[derive(Debug, Default)]
pub struct ActionMapBuilder {
    actions: ActionMap,
}

impl ActionMapBuilder {
    /// Add a binding to an action.
    #[must_use]
    pub fn bind(mut self, action: Action, binding: impl Into<InputBinding>) -> Self {
        self.actions.bind(action, binding);
        self
    }

    /// Add multiple bindings to an action.
    #[must_use]
    pub fn bind_many(
        mut self,
        action: Action,
        bindings: impl IntoIterator<Item = impl Into<InputBinding>>,
    ) -> Self {
        for binding in bindings {
            self.actions.bind(action, binding);
        }
        self
    }

    /// Build the action map.
    #[must_use]
    pub fn build(self) -> ActionMap {
        self.actions
    }
}
