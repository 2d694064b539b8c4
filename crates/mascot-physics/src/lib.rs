//! `mascot-physics`: the body the mascot moves with.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`body`]       | `PhysicsBody`: position, velocity, target, flags, facing  |
//! | [`config`]     | `PhysicsConfig`: gravity, friction, speeds, radii         |
//! | [`integrator`] | `PhysicsIntegrator`: per-tick `update()` + drag surface   |
//! | [`completion`] | `MoveCompletion`: future fired when `is_moving` clears    |
//! | [`error`]      | `PhysicsError`, `PhysicsResult<T>`                        |
//!
//! # Tick model
//!
//! One `update()` call is one render tick.  The integrator knows nothing
//! about behaviors or animation states; it is driven by whatever periodic
//! tick source the host injects.  Per tick:
//!
//! 1. If a target is set, velocity is *set* to `walk_speed` along the unit
//!    vector toward it.  Inside `arrival_radius` the target clears instead.
//! 2. Unless dragging: gravity, friction, integration, viewport clamp.
//! 3. Facing follows the sign of `vx` outside a small deadband.

pub mod body;
pub mod completion;
pub mod config;
pub mod error;
pub mod integrator;


pub use body::PhysicsBody;
pub use completion::MoveCompletion;
pub use config::PhysicsConfig;
pub use error::{PhysicsError, PhysicsResult};
pub use integrator::{PhysicsIntegrator, StepOutcome};
