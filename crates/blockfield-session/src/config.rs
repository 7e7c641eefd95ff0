//! Session configuration.

use blockfield_core::{Error, Result};
use blockfield_physics::PlayerConfig;
use blockfield_world::TerrainConfig;
use serde::{Deserialize, Serialize};

/// Everything needed to start a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Shape of the generated world.
    pub terrain: TerrainConfig,
    /// Player movement tuning.
    pub player: PlayerConfig,
    /// Farthest distance at which a click can edit a block.
    /// `None` reaches anything inside the world.
    pub pick_range: Option<f32>,
}

impl SessionConfig {
    /// Set the world side length.
    #[must_use]
    pub fn with_world_size(mut self, world_size: i32) -> Self {
        self.terrain = self.terrain.with_world_size(world_size);
        self
    }

    /// Set the terrain configuration.
    #[must_use]
    pub fn with_terrain(mut self, terrain: TerrainConfig) -> Self {
        self.terrain = terrain;
        self
    }

    /// Set the player configuration.
    #[must_use]
    pub fn with_player(mut self, player: PlayerConfig) -> Self {
        self.player = player;
        self
    }

    /// Limit how far away a click can edit.
    #[must_use]
    pub const fn with_pick_range(mut self, range: f32) -> Self {
        self.pick_range = Some(range);
        self
    }

    /// Check every part of the configuration.
    pub fn validate(&self) -> Result<()> {
        self.terrain.validate()?;
        self.player.validate()?;
        if let Some(range) = self.pick_range {
            if range.is_nan() || range <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "pick_range must be positive, got {range}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.terrain.world_size, 40);
        assert_eq!(config.pick_range, None);
    }

    #[test]
    fn builders() {
        let config = SessionConfig::default()
            .with_world_size(8)
            .with_pick_range(6.0)
            .with_player(PlayerConfig::default().with_max_dt(0.1));

        assert_eq!(config.terrain.world_size, 8);
        assert_eq!(config.pick_range, Some(6.0));
        assert_eq!(config.player.max_dt, Some(0.1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_parts() {
        assert!(matches!(
            SessionConfig::default().with_world_size(0).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            SessionConfig::default().with_pick_range(0.0).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            SessionConfig::default()
                .with_player(PlayerConfig::default().with_max_dt(-1.0))
                .validate(),
            Err(Error::InvalidConfig(_))
        ));
    }
}
