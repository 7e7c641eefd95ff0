//! Session layer for the Blockfield voxel sandbox.
//!
//! A [`WorldSession`] owns the generated block store and the player, and
//! turns per-frame input into player movement and block edits. Every edit is
//! reported as an [`EditEvent`] so a renderer can mirror the store without
//! polling it.
//!
//! # Usage
//!
//! ```ignore
//! use blockfield_session::{controls, SessionConfig, WorldSession};
//! use blockfield_input::InputManager;
//!
//! let mut session = WorldSession::new(SessionConfig::default())?;
//! let edits = session.subscribe();
//! let mut input = InputManager::with_actions(controls::default_actions());
//!
//! // Once per frame, after feeding window events into `input`
//! controls::drive_frame(&mut session, &mut input, dt);
//! for edit in edits.try_iter() {
//!     // add or remove the block's mesh
//! }
//! ```

pub mod config;
pub mod controls;
pub mod editor;
pub mod session;

pub use config::SessionConfig;
pub use editor::{EditEvent, WorldEditor};
pub use session::WorldSession;
