//! Procedural terrain generation.

use blockfield_core::constants::WORLD_SIZE;
use blockfield_core::{BlockType, Error, GridCoord, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::store::SpatialBlockStore;

/// Terrain generator configuration.
///
/// Column height follows
/// `floor(base_height + amplitude * sin(frequency * x) + amplitude * cos(frequency * z))`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Side length of the square world, in blocks.
    pub world_size: i32,
    /// Mean column height.
    pub base_height: f64,
    /// Height variation contributed by each of the two waves.
    pub amplitude: f64,
    /// Angular frequency of the waves, in radians per block.
    pub frequency: f64,
    /// Layers below the surface that are not stone (grass included).
    pub dirt_depth: i32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            world_size: WORLD_SIZE,
            base_height: 5.0,
            amplitude: 2.0,
            frequency: 0.2,
            dirt_depth: 3,
        }
    }
}

impl TerrainConfig {
    /// Set the world side length.
    #[must_use]
    pub const fn with_world_size(mut self, world_size: i32) -> Self {
        self.world_size = world_size;
        self
    }

    /// Check that the configuration describes a buildable world.
    pub fn validate(&self) -> Result<()> {
        if self.world_size <= 0 {
            return Err(Error::InvalidConfig(format!(
                "world_size must be positive, got {}",
                self.world_size
            )));
        }
        if self.dirt_depth < 1 {
            return Err(Error::InvalidConfig(format!(
                "dirt_depth must be at least 1, got {}",
                self.dirt_depth
            )));
        }
        Ok(())
    }
}

/// Heightmap terrain generator.
///
/// Pure function of its configuration: the same config always yields the
/// same store.
#[derive(Debug, Clone, Default)]
pub struct TerrainGenerator {
    config: TerrainConfig,
}

impl TerrainGenerator {
    /// Create a new terrain generator with the given configuration.
    pub const fn new(config: TerrainConfig) -> Self {
        Self { config }
    }

    /// Get the terrain configuration.
    pub const fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Number of solid layers in the column at (x, z).
    #[allow(clippy::cast_possible_truncation)]
    pub fn height_at(&self, x: i32, z: i32) -> i32 {
        let c = &self.config;
        let wave_x = c.amplitude * (c.frequency * f64::from(x)).sin();
        let wave_z = c.amplitude * (c.frequency * f64::from(z)).cos();
        (c.base_height + wave_x + wave_z).floor() as i32
    }

    /// Block type for layer `y` of a column with the given height.
    ///
    /// The top layer is always grass; stone fills everything more than
    /// `dirt_depth` layers below the top; dirt fills the band between.
    pub const fn block_at(&self, y: i32, height: i32) -> BlockType {
        if y == height - 1 {
            BlockType::Grass
        } else if y < height - self.config.dirt_depth {
            BlockType::Stone
        } else {
            BlockType::Dirt
        }
    }

    /// All blocks of the column at (x, z), bottom layer first.
    pub fn column(&self, x: i32, z: i32) -> Vec<(GridCoord, BlockType)> {
        let height = self.height_at(x, z);
        (0..height)
            .map(|y| (GridCoord::new(x, y, z), self.block_at(y, height)))
            .collect()
    }

    /// Populate a fresh store with every column of the world.
    ///
    /// Columns are computed in parallel and inserted in column order.
    pub fn build(&self) -> SpatialBlockStore {
        let size = self.config.world_size.max(0);
        let columns: Vec<(i32, i32)> = (0..size)
            .flat_map(|x| (0..size).map(move |z| (x, z)))
            .collect();

        let generated: Vec<Vec<(GridCoord, BlockType)>> = columns
            .par_iter()
            .map(|&(x, z)| self.column(x, z))
            .collect();

        let total = generated.iter().map(Vec::len).sum();
        let mut store = SpatialBlockStore::with_capacity(total);
        for (coord, block) in generated.into_iter().flatten() {
            store.insert_generated(coord, block);
        }

        info!(
            world_size = size,
            blocks = store.len(),
            "Generated terrain"
        );
        store
    }
}
