//! Core types and math for the Blockfield voxel sandbox.
//!
//! This crate provides the foundational types shared by every other crate:
//! - Block palette ([`BlockType`])
//! - Integer grid coordinates and cube faces ([`GridCoord`], [`BlockFace`])
//! - Ray and bounding box math
//! - The workspace error type

pub mod coords;
pub mod error;
pub mod math;
pub mod types;

pub use coords::{BlockFace, GridCoord};
pub use error::{Error, Result};
pub use math::{Aabb, Ray};
pub use types::BlockType;

/// World-wide constants
pub mod constants {
    /// Side length of the generated square world, in blocks.
    pub const WORLD_SIZE: i32 = 40;
    /// Edge length of a block.
    pub const BLOCK_SIZE: f32 = 1.0;
    /// Distance from a block's centre to any of its faces.
    pub const HALF_BLOCK: f32 = BLOCK_SIZE * 0.5;
}
