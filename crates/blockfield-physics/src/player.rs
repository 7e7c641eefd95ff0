//! First-person player movement.
//!
//! Movement is integrated with explicit Euler steps scaled by the frame
//! time. There is no collision against blocks; the player is held above a
//! flat ground plane instead.

use blockfield_core::{Error, Ray, Result};
use glam::{EulerRot, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Tuning constants for player movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Horizontal velocity decay rate, per second.
    pub damping: f32,
    /// Horizontal acceleration while a movement key is held.
    pub acceleration: f32,
    /// Downward acceleration.
    pub gravity: f32,
    /// Lowest height the player can reach.
    pub ground_level: f32,
    /// Upward velocity applied by a jump.
    pub jump_impulse: f32,
    /// Height above `ground_level` that still counts as standing on it.
    pub ground_epsilon: f32,
    /// Radians of rotation per unit of mouse motion.
    pub mouse_sensitivity: f32,
    /// Maximum pitch magnitude in radians.
    pub pitch_limit: f32,
    /// Upper bound on the frame time fed to the integrator.
    ///
    /// `None` integrates whatever the caller passes, so a long stall can
    /// carry the player through the ground clamp in a single step.
    pub max_dt: Option<f32>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            acceleration: 20.0,
            gravity: 30.0,
            ground_level: 10.0,
            jump_impulse: 12.0,
            ground_epsilon: 0.01,
            mouse_sensitivity: 0.002,
            pitch_limit: 1.5,
            max_dt: None,
        }
    }
}

impl PlayerConfig {
    /// Cap the integration step.
    #[must_use]
    pub const fn with_max_dt(mut self, max_dt: f32) -> Self {
        self.max_dt = Some(max_dt);
        self
    }

    /// Set the mouse look sensitivity.
    #[must_use]
    pub const fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    /// Check that every constant is usable.
    pub fn validate(&self) -> Result<()> {
        if let Some(max_dt) = self.max_dt {
            if max_dt.is_nan() || max_dt <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "max_dt must be positive, got {max_dt}"
                )));
            }
        }
        if self.ground_epsilon < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "ground_epsilon must not be negative, got {}",
                self.ground_epsilon
            )));
        }
        if !(0.0..=std::f32::consts::FRAC_PI_2).contains(&self.pitch_limit) {
            return Err(Error::InvalidConfig(format!(
                "pitch_limit must be within [0, pi/2], got {}",
                self.pitch_limit
            )));
        }
        Ok(())
    }

    fn clamp_dt(&self, dt: f32) -> f32 {
        // Non-finite and negative frame times integrate nothing.
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.max_dt.map_or(dt, |max| dt.min(max))
    }
}

/// Snapshot of the movement keys held this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl MovementInput {
    /// Desired movement as (right, forward), unit length or zero.
    pub fn direction(&self) -> Vec2 {
        Vec2::new(
            f32::from(u8::from(self.right)) - f32::from(u8::from(self.left)),
            f32::from(u8::from(self.forward)) - f32::from(u8::from(self.back)),
        )
        .normalize_or_zero()
    }

    /// Returns `true` if forward or back is held.
    #[inline]
    pub const fn longitudinal(&self) -> bool {
        self.forward || self.back
    }

    /// Returns `true` if left or right is held.
    #[inline]
    pub const fn lateral(&self) -> bool {
        self.left || self.right
    }
}

/// Position, velocity and view angles of the player.
///
/// `velocity.x` and `velocity.z` are along the camera's local axes
/// (x to the right, z backwards); `velocity.y` is world up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Rotation around the world Y axis, in radians.
    pub yaw: f32,
    /// Rotation around the player's X axis, in radians. Positive looks up.
    pub pitch: f32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: Vec3::new(20.0, 20.0, 20.0),
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl PlayerState {
    /// Create a player standing still at `position`.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Camera orientation: pitch applied first, then yaw.
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Unit vector the player is looking along.
    pub fn look_direction(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }

    /// Camera right axis. Pitch leaves it horizontal.
    pub fn right(&self) -> Vec3 {
        self.orientation() * Vec3::X
    }

    /// Camera back axis, opposite the look direction.
    pub fn back(&self) -> Vec3 {
        self.orientation() * Vec3::Z
    }

    /// Pick ray from the eye along the look direction.
    pub fn eye_ray(&self) -> Ray {
        Ray::new(self.position, self.look_direction())
    }
}

/// Integrates player movement frame by frame.
#[derive(Debug, Clone, Default)]
pub struct PlayerController {
    config: PlayerConfig,
    state: PlayerState,
}

impl PlayerController {
    /// Create a controller with the given tuning and initial state.
    pub const fn new(config: PlayerConfig, state: PlayerState) -> Self {
        Self { config, state }
    }

    /// Get the movement configuration.
    pub const fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Get the current player state.
    pub const fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Get mutable access to the player state.
    pub fn state_mut(&mut self) -> &mut PlayerState {
        &mut self.state
    }

    /// Returns `true` if the player is standing on the ground plane.
    pub fn is_grounded(&self) -> bool {
        self.state.position.y <= self.config.ground_level + self.config.ground_epsilon
    }

    /// Rotate the view by a mouse motion delta.
    ///
    /// Moving right turns right, moving down looks down.
    pub fn look(&mut self, delta: Vec2) {
        let limit = self.config.pitch_limit;
        self.state.yaw -= delta.x * self.config.mouse_sensitivity;
        self.state.pitch =
            (self.state.pitch - delta.y * self.config.mouse_sensitivity).clamp(-limit, limit);
    }

    /// Advance the player by `dt` seconds with the given keys held.
    pub fn step(&mut self, dt: f32, input: &MovementInput) -> &PlayerState {
        let c = &self.config;
        let dt = c.clamp_dt(dt);
        let s = &mut self.state;

        s.velocity.x -= s.velocity.x * c.damping * dt;
        s.velocity.z -= s.velocity.z * c.damping * dt;

        let direction = input.direction();
        if input.longitudinal() {
            s.velocity.z -= direction.y * c.acceleration * dt;
        }
        if input.lateral() {
            s.velocity.x += direction.x * c.acceleration * dt;
        }

        // Walking follows the full view, so looking up while moving climbs.
        let (right, back) = (s.right(), s.back());
        s.position += right * (s.velocity.x * dt);
        s.position += back * (s.velocity.z * dt);

        s.velocity.y -= c.gravity * dt;
        s.position.y += s.velocity.y * dt;

        if s.position.y < c.ground_level {
            s.velocity.y = 0.0;
            s.position.y = c.ground_level;
        }

        if input.jump && s.position.y <= c.ground_level + c.ground_epsilon {
            s.velocity.y = c.jump_impulse;
        }

        trace!(position = ?s.position, velocity = ?s.velocity, dt, "Player step");
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 60.0;

    fn controller_at(position: Vec3) -> PlayerController {
        PlayerController::new(PlayerConfig::default(), PlayerState::at(position))
    }

    #[test]
    fn ground_clamp_stops_fall() {
        for dt in [0.0, DT, 0.05] {
            let mut player = controller_at(Vec3::new(0.0, 9.5, 0.0));
            player.state_mut().velocity.y = -5.0;

            let state = *player.step(dt, &MovementInput::default());
            assert_eq!(state.position.y, 10.0);
            assert_eq!(state.velocity.y, 0.0);
        }
    }

    #[test]
    fn jump_from_ground() {
        let mut player = controller_at(Vec3::new(0.0, 10.0, 0.0));
        let input = MovementInput {
            jump: true,
            ..MovementInput::default()
        };

        let state = *player.step(DT, &input);
        assert_eq!(state.velocity.y, 12.0);
        assert_eq!(state.position.y, 10.0);

        // Rises on the next frame and cannot jump again mid-air.
        let state = *player.step(DT, &input);
        assert!(state.position.y > 10.0);
        assert!(state.velocity.y < 12.0);
    }

    #[test]
    fn no_jump_while_airborne() {
        let mut player = controller_at(Vec3::new(0.0, 15.0, 0.0));
        let input = MovementInput {
            jump: true,
            ..MovementInput::default()
        };

        let state = *player.step(DT, &input);
        assert_relative_eq!(state.velocity.y, -30.0 * DT, epsilon = 1e-6);
        assert!(state.position.y < 15.0);
    }

    #[test]
    fn falls_under_gravity() {
        let mut player = controller_at(Vec3::new(0.0, 20.0, 0.0));
        player.step(0.1, &MovementInput::default());
        let state = *player.state();
        assert_relative_eq!(state.velocity.y, -3.0, epsilon = 1e-5);
        assert_relative_eq!(state.position.y, 19.7, epsilon = 1e-5);
        assert!(!player.is_grounded());
    }

    #[test]
    fn forward_moves_along_facing() {
        let mut player = controller_at(Vec3::new(0.0, 10.0, 0.0));
        let input = MovementInput {
            forward: true,
            ..MovementInput::default()
        };
        for _ in 0..30 {
            player.step(DT, &input);
        }
        let pos = player.state().position;
        assert!(pos.z < 0.0, "yaw 0 faces -Z, got {pos}");
        assert_relative_eq!(pos.x, 0.0, epsilon = 1e-5);
        assert_eq!(pos.y, 10.0);
    }

    #[test]
    fn strafe_right_follows_yaw() {
        let mut player = controller_at(Vec3::new(0.0, 10.0, 0.0));
        // Quarter turn to the left: now facing -X, right is -Z.
        player.state_mut().yaw = std::f32::consts::FRAC_PI_2;
        let input = MovementInput {
            right: true,
            ..MovementInput::default()
        };
        for _ in 0..30 {
            player.step(DT, &input);
        }
        let pos = player.state().position;
        assert!(pos.z < 0.0, "expected to move towards -Z, got {pos}");
        assert_relative_eq!(pos.x, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn diagonal_input_is_normalized() {
        let input = MovementInput {
            forward: true,
            right: true,
            ..MovementInput::default()
        };
        assert_relative_eq!(input.direction().length(), 1.0, epsilon = 1e-6);

        let opposed = MovementInput {
            forward: true,
            back: true,
            ..MovementInput::default()
        };
        assert_eq!(opposed.direction(), Vec2::ZERO);
        assert_eq!(MovementInput::default().direction(), Vec2::ZERO);
    }

    #[test]
    fn horizontal_velocity_decays_without_input() {
        let mut player = controller_at(Vec3::new(0.0, 10.0, 0.0));
        player.state_mut().velocity = Vec3::new(2.0, 0.0, -4.0);
        player.step(0.05, &MovementInput::default());
        let v = player.state().velocity;
        assert_relative_eq!(v.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(v.z, -2.0, epsilon = 1e-5);
    }

    #[test]
    fn max_dt_caps_step() {
        let config = PlayerConfig::default().with_max_dt(0.1);
        let mut player = PlayerController::new(config, PlayerState::at(Vec3::new(0.0, 50.0, 0.0)));
        player.step(5.0, &MovementInput::default());
        assert_relative_eq!(player.state().velocity.y, -3.0, epsilon = 1e-5);
    }

    #[test]
    fn negative_dt_integrates_nothing() {
        let mut player = controller_at(Vec3::new(0.0, 20.0, 0.0));
        let before = *player.state();
        player.step(-1.0, &MovementInput::default());
        assert_eq!(*player.state(), before);
    }

    #[test]
    fn non_finite_dt_integrates_nothing() {
        let input = MovementInput {
            forward: true,
            ..MovementInput::default()
        };
        for dt in [f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
            let mut player = controller_at(Vec3::new(0.0, 20.0, 0.0));
            let before = *player.state();
            let state = *player.step(dt, &input);
            assert!(state.position.is_finite() && state.velocity.is_finite());
            assert_eq!(state, before);
        }
    }

    #[test]
    fn forward_while_looking_up_climbs() {
        let mut player = controller_at(Vec3::new(0.0, 10.0, 0.0));
        player.state_mut().pitch = 1.0;
        player.state_mut().velocity.z = -5.0;
        let input = MovementInput {
            forward: true,
            ..MovementInput::default()
        };

        let state = *player.step(DT, &input);
        assert!(state.position.y > 10.0, "expected to climb, got {}", state.position);
        assert!(state.position.z < 0.0);
    }

    #[test]
    fn look_clamps_pitch() {
        let mut player = controller_at(Vec3::ZERO);
        player.look(Vec2::new(0.0, -10_000.0));
        assert_eq!(player.state().pitch, 1.5);
        player.look(Vec2::new(0.0, 10_000.0));
        assert_eq!(player.state().pitch, -1.5);

        player.look(Vec2::new(100.0, 0.0));
        assert_relative_eq!(player.state().yaw, -0.2, epsilon = 1e-6);
    }

    #[test]
    fn look_direction_follows_angles() {
        let mut state = PlayerState::default();
        assert_relative_eq!(state.look_direction().z, -1.0, epsilon = 1e-6);

        state.pitch = -std::f32::consts::FRAC_PI_2;
        assert_relative_eq!(state.look_direction().y, -1.0, epsilon = 1e-6);

        state.pitch = 0.0;
        state.yaw = std::f32::consts::FRAC_PI_2;
        assert_relative_eq!(state.look_direction().x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(state.right().z, -1.0, epsilon = 1e-6);

        state.pitch = 0.5;
        assert_relative_eq!(state.right().y, 0.0, epsilon = 1e-6);
        assert!((state.back() + state.look_direction()).length() < 1e-6);
    }

    #[test]
    fn config_validation() {
        assert!(PlayerConfig::default().validate().is_ok());
        assert!(PlayerConfig::default().with_max_dt(0.0).validate().is_err());
        let bad_pitch = PlayerConfig {
            pitch_limit: 2.0,
            ..PlayerConfig::default()
        };
        assert!(bad_pitch.validate().is_err());
    }
}
