//! Ray picking against the block store.
//!
//! The walk is a voxel-grid DDA: the ray is first clipped against the
//! store's bounding box, then advanced one cell boundary at a time until it
//! enters an occupied cell or runs out of range. Because every reported cell
//! is entered by crossing exactly one face, the hit face falls out of the
//! axis that was stepped last.

use blockfield_core::constants::HALF_BLOCK;
use blockfield_core::{BlockFace, BlockType, GridCoord, Ray};
use blockfield_world::SpatialBlockStore;
use glam::{IVec3, Vec3};

/// Result of a raycast against the block store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// Cell of the block that was hit.
    pub coord: GridCoord,
    /// Face through which the ray entered the block.
    pub face: BlockFace,
    /// Type of the block that was hit.
    pub block: BlockType,
    /// Distance from the ray origin to the entry point.
    pub distance: f32,
    /// Entry point on the block surface.
    pub point: Vec3,
}

impl RaycastHit {
    /// Outward unit normal of the entered face.
    #[inline]
    pub const fn normal(&self) -> IVec3 {
        self.face.normal()
    }

    /// The empty cell in front of the entered face, where a new block goes.
    #[inline]
    pub fn adjacent(&self) -> GridCoord {
        self.coord.offset(self.face)
    }
}

/// Find the nearest block intersected by `ray`.
///
/// `max_distance` limits how far along the ray blocks are considered;
/// `None` searches until the ray leaves the store's bounds. The cell
/// containing the ray origin is never reported. When the ray crosses
/// several boundaries at the same distance, X is stepped before Y before Z.
#[allow(clippy::cast_precision_loss)]
pub fn raycast(
    store: &SpatialBlockStore,
    ray: &Ray,
    max_distance: Option<f32>,
) -> Option<RaycastHit> {
    if ray.is_degenerate() {
        return None;
    }
    let bounds = store.bounds()?;
    let (t_enter, t_exit) = bounds.intersect_ray(ray)?;
    let t_limit = max_distance.map_or(t_exit, |max| t_exit.min(max));
    if t_enter > t_limit {
        return None;
    }

    // Start a little before the entry point so the first solid cell is
    // reached by a step, never by the starting position.
    let t_start = (t_enter - 1.0).max(0.0);

    // Work in corner-aligned space where cell (x, y, z) spans [x, x + 1).
    let start = ray.at(t_start) + Vec3::splat(HALF_BLOCK);
    let dir = ray.direction;
    let mut cell = start.floor().as_ivec3();

    let mut step = IVec3::ZERO;
    let mut t_delta = Vec3::splat(f32::INFINITY);
    let mut t_max = Vec3::splat(f32::INFINITY);
    for axis in 0..3 {
        let d = dir[axis];
        if d > 0.0 {
            step[axis] = 1;
            t_delta[axis] = d.recip();
            t_max[axis] = t_start + (cell[axis] as f32 + 1.0 - start[axis]) * t_delta[axis];
        } else if d < 0.0 {
            step[axis] = -1;
            t_delta[axis] = -d.recip();
            t_max[axis] = t_start + (start[axis] - cell[axis] as f32) * t_delta[axis];
        }
    }

    loop {
        let axis = if t_max.x <= t_max.y && t_max.x <= t_max.z {
            0
        } else if t_max.y <= t_max.z {
            1
        } else {
            2
        };

        let t = t_max[axis];
        if t > t_limit {
            return None;
        }

        cell[axis] += step[axis];
        t_max[axis] += t_delta[axis];

        let coord = GridCoord::from(cell);
        if let Some(block) = store.get(coord) {
            return Some(RaycastHit {
                coord,
                face: BlockFace::from_axis(axis, step[axis] < 0),
                block,
                distance: t,
                point: ray.at(t),
            });
        }
    }
}
