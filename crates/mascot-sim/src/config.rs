//! `MascotConfig`: everything needed to build a [`Mascot`][crate::Mascot].

use mascot_anim::StateTable;
use mascot_behavior::SchedulerConfig;
use mascot_core::Viewport;
use mascot_physics::PhysicsConfig;

use crate::{SimError, SimResult};

/// Aggregated configuration for one mascot.
///
/// Every field has a default, so a JSON config only needs the keys it
/// changes:
///
/// ```json
/// { "seed": 7, "scheduler": { "idle_timeout_ms": 30000 } }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MascotConfig {
    pub physics:   PhysicsConfig,
    pub scheduler: SchedulerConfig,
    pub states:    StateTable,
    pub viewport:  Viewport,

    /// Render tick period; the physics integrator steps once per tick.
    pub physics_tick_ms: u64,

    /// Animation frame period.
    pub frame_tick_ms: u64,

    /// RNG seed.  Same seed and same host calls give an identical run;
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for MascotConfig {
    fn default() -> Self {
        Self {
            physics:         PhysicsConfig::default(),
            scheduler:       SchedulerConfig::default(),
            states:          StateTable::default(),
            viewport:        Viewport::default(),
            physics_tick_ms: 16,
            frame_tick_ms:   100,
            seed:            None,
        }
    }
}

impl MascotConfig {
    /// Check the structural settings.  Unknown behavior or state names are
    /// not errors; they degrade to `idle` at runtime.
    pub fn validate(&self) -> SimResult<()> {
        if self.physics_tick_ms == 0 {
            return Err(SimError::Config("physics_tick_ms must be > 0".into()));
        }
        if self.frame_tick_ms == 0 {
            return Err(SimError::Config("frame_tick_ms must be > 0".into()));
        }
        self.viewport.validate().map_err(|e| SimError::Config(e.to_string()))?;
        self.physics.validate().map_err(|e| SimError::Config(e.to_string()))?;
        self.scheduler.validate().map_err(|e| SimError::Config(e.to_string()))?;
        self.states.validate().map_err(|e| SimError::Config(e.to_string()))?;
        Ok(())
    }
}
