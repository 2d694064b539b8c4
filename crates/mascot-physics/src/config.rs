//! Physics constants.

use crate::{PhysicsError, PhysicsResult};

/// Tunables for [`PhysicsIntegrator`][crate::PhysicsIntegrator].
///
/// Units are pixels and pixels-per-tick; `y` grows downward, so gravity is
/// positive and a jump impulse is negative.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicsConfig {
    /// Added to `vy` every undragged tick.
    pub gravity: f32,

    /// Multiplier applied to `vx` every undragged tick.
    pub friction: f32,

    /// Steering speed toward a target.
    pub walk_speed: f32,

    /// Vertical impulse assigned by `jump()`.
    pub jump_height: f32,

    /// Distance below which a target counts as reached.
    pub arrival_radius: f32,

    /// Fraction of `|vx|` kept when bouncing off a side wall.
    pub bounce_damping: f32,

    /// `|vx|` must exceed this to change facing.
    pub facing_deadband: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity:         0.8,
            friction:        0.8,
            walk_speed:      1.5,
            jump_height:     -12.0,
            arrival_radius:  5.0,
            bounce_damping:  0.5,
            facing_deadband: 0.1,
        }
    }
}

impl PhysicsConfig {
    /// Reject values that would make the integrator diverge or never arrive.
    pub fn validate(&self) -> PhysicsResult<()> {
        let all = [
            ("gravity",         self.gravity),
            ("friction",        self.friction),
            ("walk_speed",      self.walk_speed),
            ("jump_height",     self.jump_height),
            ("arrival_radius",  self.arrival_radius),
            ("bounce_damping",  self.bounce_damping),
            ("facing_deadband", self.facing_deadband),
        ];
        if let Some((name, _)) = all.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PhysicsError::InvalidConfig(format!("{name} must be finite")));
        }
        if self.walk_speed <= 0.0 {
            return Err(PhysicsError::InvalidConfig("walk_speed must be > 0".into()));
        }
        if self.arrival_radius <= 0.0 {
            return Err(PhysicsError::InvalidConfig("arrival_radius must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(PhysicsError::InvalidConfig(format!(
                "friction must be in [0, 1], got {}",
                self.friction
            )));
        }
        if !(0.0..=1.0).contains(&self.bounce_damping) {
            return Err(PhysicsError::InvalidConfig(format!(
                "bounce_damping must be in [0, 1], got {}",
                self.bounce_damping
            )));
        }
        if self.facing_deadband < 0.0 {
            return Err(PhysicsError::InvalidConfig("facing_deadband must be >= 0".into()));
        }
        Ok(())
    }
}
