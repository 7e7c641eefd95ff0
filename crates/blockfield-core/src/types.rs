//! Block palette.

use serde::{Deserialize, Serialize};

/// Type of a solid block.
///
/// Empty cells have no block type; absence from the store means air.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    #[default]
    Grass,
    Dirt,
    Stone,
    Wood,
}

impl BlockType {
    /// Every placeable block, in palette order.
    pub const ALL: [Self; 4] = [Self::Grass, Self::Dirt, Self::Stone, Self::Wood];

    /// One-based slot of this block in the palette.
    #[inline]
    pub const fn palette_index(self) -> u8 {
        match self {
            Self::Grass => 1,
            Self::Dirt => 2,
            Self::Stone => 3,
            Self::Wood => 4,
        }
    }

    /// Block in the given one-based palette slot.
    #[inline]
    pub const fn from_palette_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Grass),
            2 => Some(Self::Dirt),
            3 => Some(Self::Stone),
            4 => Some(Self::Wood),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grass => "grass",
            Self::Dirt => "dirt",
            Self::Stone => "stone",
            Self::Wood => "wood",
        }
    }

    /// Base colour (RGB, 0-255) the renderer uses for this block.
    pub const fn color(self) -> [u8; 3] {
        match self {
            Self::Grass => [0x3c, 0xb0, 0x43],
            Self::Dirt => [0x8b, 0x45, 0x13],
            Self::Stone => [0x77, 0x77, 0x77],
            Self::Wood => [0x8b, 0x5a, 0x2b],
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
