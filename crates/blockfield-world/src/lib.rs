//! Block storage and terrain generation for the Blockfield voxel sandbox.

pub mod generation;
pub mod store;

pub use generation::{TerrainConfig, TerrainGenerator};
pub use store::SpatialBlockStore;

/// Build the block store for a square world of the given side length.
///
/// Runs terrain generation once with the default shape parameters.
pub fn init_world(size: i32) -> SpatialBlockStore {
    TerrainGenerator::new(TerrainConfig::default().with_world_size(size)).build()
}
