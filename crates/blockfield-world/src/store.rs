//! Spatial block store keyed by grid coordinate.

use blockfield_core::{Aabb, BlockType, Error, GridCoord, Result};
use glam::IVec3;
use hashbrown::HashMap;

/// Authoritative record of which cells hold a block.
///
/// A coordinate is present iff a solid block occupies that cell; absence
/// means air. Renderers never hold their own truth, they mirror the edits
/// reported by the session.
#[derive(Debug, Clone, Default)]
pub struct SpatialBlockStore {
    /// All blocks indexed by position.
    blocks: HashMap<GridCoord, BlockType>,
    /// Inclusive cell range ever occupied. Grows on insert, never shrinks.
    extent: Option<(IVec3, IVec3)>,
}

impl SpatialBlockStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` blocks.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            blocks: HashMap::with_capacity(capacity),
            extent: None,
        }
    }

    /// Block type at `coord`, or `None` for air.
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<BlockType> {
        self.blocks.get(&coord).copied()
    }

    /// Check if a block occupies `coord`.
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.blocks.contains_key(&coord)
    }

    /// Place a block in an empty cell.
    ///
    /// Fails with [`Error::OccupiedCell`] and leaves the store untouched if
    /// the cell already holds a block.
    pub fn set(&mut self, coord: GridCoord, block: BlockType) -> Result<()> {
        if self.blocks.contains_key(&coord) {
            return Err(Error::OccupiedCell(coord));
        }
        self.insert_generated(coord, block);
        Ok(())
    }

    /// Insert a block without the occupancy check.
    ///
    /// Only terrain generation uses this: it visits every coordinate once.
    pub fn insert_generated(&mut self, coord: GridCoord, block: BlockType) {
        self.blocks.insert(coord, block);
        self.grow_extent(coord.to_ivec3());
    }

    /// Remove the block at `coord`, returning what was there.
    pub fn remove(&mut self, coord: GridCoord) -> Option<BlockType> {
        self.blocks.remove(&coord)
    }

    /// Get the number of blocks.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the world is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over every block for rendering or hit-testing.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, BlockType)> + '_ {
        self.blocks.iter().map(|(coord, block)| (*coord, *block))
    }

    /// Box enclosing every block ever inserted, or `None` if nothing was.
    ///
    /// Removals do not shrink it, so it may be larger than the current
    /// contents but never smaller.
    pub fn bounds(&self) -> Option<Aabb> {
        self.extent.map(|(min, max)| {
            GridCoord::from(min)
                .aabb()
                .merge(&GridCoord::from(max).aabb())
        })
    }

    fn grow_extent(&mut self, cell: IVec3) {
        self.extent = Some(match self.extent {
            Some((min, max)) => (min.min(cell), max.max(cell)),
            None => (cell, cell),
        });
    }
}

impl<'a> IntoIterator for &'a SpatialBlockStore {
    type Item = (&'a GridCoord, &'a BlockType);
    type IntoIter = hashbrown::hash_map::Iter<'a, GridCoord, BlockType>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
