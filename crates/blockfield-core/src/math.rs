//! Math utilities and helpers.

use glam::Vec3;

/// Ray for picking operations.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    /// Ray origin
    pub origin: Vec3,
    /// Ray direction (unit length, or zero for a degenerate ray)
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    ///
    /// A zero-length direction yields a degenerate ray that intersects nothing.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Get a point along the ray at distance t
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Returns `true` if the ray has no direction or starts at a
    /// non-finite point. Degenerate rays intersect nothing.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction == Vec3::ZERO || !self.origin.is_finite()
    }
}

/// Axis-Aligned Bounding Box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max corners
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB around `center` with the given half-extents
    #[inline]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Ray-AABB slab test, returns (t_near, t_far) or None if no intersection.
    ///
    /// `t_near` is clamped to zero when the origin is inside the box.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<(f32, f32)> {
        if ray.is_degenerate() {
            return None;
        }

        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let dir = ray.direction[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if dir == 0.0 {
                // Parallel to this slab: either always inside it or never.
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            let inv = dir.recip();
            let t1 = (lo - origin) * inv;
            let t2 = (hi - origin) * inv;
            t_near = t_near.max(t1.min(t2));
            t_far = t_far.min(t1.max(t2));
        }

        if t_near <= t_far && t_far >= 0.0 {
            Some((t_near.max(0.0), t_far))
        } else {
            None
        }
    }

    /// Merge two AABBs
    #[inline]
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}
