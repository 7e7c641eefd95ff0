//! Block picking and first-person player movement for the Blockfield voxel sandbox.

pub mod player;
pub mod raycast;

pub use player::{MovementInput, PlayerConfig, PlayerController, PlayerState};
pub use raycast::{raycast, RaycastHit};
