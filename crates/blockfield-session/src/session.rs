//! The world session aggregate.

use blockfield_core::{BlockType, Ray, Result};
use blockfield_input::MouseButton;
use blockfield_physics::{MovementInput, PlayerController, PlayerState};
use blockfield_world::{SpatialBlockStore, TerrainGenerator};
use crossbeam::channel::{self, Receiver, Sender};
use glam::{Vec2, Vec3};
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::editor::{EditEvent, WorldEditor};

/// Owns the block store and the player for one play session.
///
/// All mutation goes through the session on the frame thread. Edits are
/// returned to the caller and also broadcast to every subscriber.
#[derive(Debug)]
pub struct WorldSession {
    store: SpatialBlockStore,
    player: PlayerController,
    editor: WorldEditor,
    selected: BlockType,
    subscribers: Vec<Sender<EditEvent>>,
}

impl WorldSession {
    /// Generate the world and place the player at the default spawn.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let store = TerrainGenerator::new(config.terrain.clone()).build();
        Ok(Self::assemble(config, store))
    }

    /// Start a session over an existing store instead of generating one.
    pub fn with_store(config: SessionConfig, store: SpatialBlockStore) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, store))
    }

    fn assemble(config: SessionConfig, store: SpatialBlockStore) -> Self {
        let session = Self {
            store,
            player: PlayerController::new(config.player, PlayerState::default()),
            editor: WorldEditor::new(config.pick_range),
            selected: BlockType::default(),
            subscribers: Vec::new(),
        };
        info!(
            blocks = session.store.len(),
            position = ?session.player.state().position,
            "Session started"
        );
        session
    }

    /// The block store.
    #[must_use]
    pub const fn store(&self) -> &SpatialBlockStore {
        &self.store
    }

    /// The player controller.
    #[must_use]
    pub const fn player(&self) -> &PlayerController {
        &self.player
    }

    /// Mutable access to the player controller, e.g. to teleport.
    pub fn player_mut(&mut self) -> &mut PlayerController {
        &mut self.player
    }

    /// Advance the player by one frame.
    pub fn step(&mut self, dt: f32, input: &MovementInput) -> &PlayerState {
        self.player.step(dt, input)
    }

    /// Rotate the view by a mouse motion delta.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.player.look(Vec2::new(dx, dy));
    }

    /// Apply a click along an explicit ray.
    ///
    /// Left removes the targeted block, right places `selected` against the
    /// targeted face. Returns the applied edit, if any.
    pub fn handle_click(
        &mut self,
        button: MouseButton,
        eye_origin: Vec3,
        look_direction: Vec3,
        selected: BlockType,
    ) -> Option<EditEvent> {
        let ray = Ray::new(eye_origin, look_direction);
        let event = self
            .editor
            .apply_click(&mut self.store, button, &ray, selected)?;
        self.broadcast(event);
        Some(event)
    }

    /// Apply a click along the player's view with the selected block type.
    pub fn click(&mut self, button: MouseButton) -> Option<EditEvent> {
        let state = self.player.state();
        let (origin, direction) = (state.position, state.look_direction());
        self.handle_click(button, origin, direction, self.selected)
    }

    /// Choose the block type placed by right clicks.
    pub fn select_block_type(&mut self, block: BlockType) {
        if self.selected != block {
            debug!(%block, "Selected block type");
            self.selected = block;
        }
    }

    /// Block type placed by right clicks.
    #[must_use]
    pub const fn selected_block_type(&self) -> BlockType {
        self.selected
    }

    /// Receive every edit applied from now on.
    pub fn subscribe(&mut self) -> Receiver<EditEvent> {
        let (tx, rx) = channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    fn broadcast(&mut self, event: EditEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }
}
