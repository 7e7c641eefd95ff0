//! Integer grid coordinates for the block world.

use std::ops::{Add, Sub};

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::HALF_BLOCK;
use crate::math::Aabb;

/// Position of a unit cell in the world grid.
///
/// A block stored at `(x, y, z)` fills the unit cube centred on that point,
/// so its faces lie on the half-integer planes around it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Cell whose cube contains the given point.
    ///
    /// Points lying exactly on a shared face resolve to the cell on the
    /// positive side.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn containing(point: Vec3) -> Self {
        let snapped = (point + Vec3::splat(HALF_BLOCK)).floor();
        Self::new(snapped.x as i32, snapped.y as i32, snapped.z as i32)
    }

    /// The neighbouring cell across the given face.
    #[inline]
    #[must_use]
    pub fn offset(self, face: BlockFace) -> Self {
        self + face.normal()
    }

    /// Centre of the cell in world space.
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub fn center(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// Bounding box of the block occupying this cell.
    #[inline]
    pub fn aabb(self) -> Aabb {
        Aabb::from_center_half_extents(self.center(), Vec3::splat(HALF_BLOCK))
    }

    /// Convert to glam IVec3
    #[inline]
    pub const fn to_ivec3(self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }
}

impl From<IVec3> for GridCoord {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<GridCoord> for IVec3 {
    fn from(c: GridCoord) -> Self {
        c.to_ivec3()
    }
}

impl From<(i32, i32, i32)> for GridCoord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl Add<IVec3> for GridCoord {
    type Output = Self;

    fn add(self, rhs: IVec3) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<IVec3> for GridCoord {
    type Output = Self;

    fn sub(self, rhs: IVec3) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// One of the six axis-aligned faces of a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockFace {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl BlockFace {
    /// All faces, in axis order.
    pub const ALL: [Self; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// Outward unit normal of the face.
    #[inline]
    pub const fn normal(self) -> IVec3 {
        match self {
            Self::PosX => IVec3::X,
            Self::NegX => IVec3::NEG_X,
            Self::PosY => IVec3::Y,
            Self::NegY => IVec3::NEG_Y,
            Self::PosZ => IVec3::Z,
            Self::NegZ => IVec3::NEG_Z,
        }
    }

    /// The face on the opposite side of the block.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::PosX => Self::NegX,
            Self::NegX => Self::PosX,
            Self::PosY => Self::NegY,
            Self::NegY => Self::PosY,
            Self::PosZ => Self::NegZ,
            Self::NegZ => Self::PosZ,
        }
    }

    /// Face on `axis` (0 = X, 1 = Y, 2 = Z), on the positive or negative side.
    #[inline]
    pub const fn from_axis(axis: usize, positive: bool) -> Self {
        match (axis, positive) {
            (0, true) => Self::PosX,
            (0, false) => Self::NegX,
            (1, true) => Self::PosY,
            (1, false) => Self::NegY,
            (_, true) => Self::PosZ,
            (_, false) => Self::NegZ,
        }
    }
}
