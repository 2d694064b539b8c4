//! Mascot observer trait for tracing and data collection.

use mascot_core::{Millis, Vec2};

use crate::Mascot;

/// Callbacks invoked by [`Mascot::advance_to`][crate::Mascot::advance_to] as
/// it works through physics ticks, frame ticks, and timers.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: arrival logger
///
/// ```rust,ignore
/// struct Arrivals(Vec<Millis>);
///
/// impl MascotObserver for Arrivals {
///     fn on_arrival(&mut self, now: Millis, _at: Vec2) {
///         self.0.push(now);
///     }
/// }
/// ```
pub trait MascotObserver {
    /// Called after every physics step, with the whole mascot readable.
    fn on_physics_tick(&mut self, _now: Millis, _mascot: &Mascot) {}

    /// Called after every animation frame advance.
    fn on_frame(&mut self, _now: Millis, _state: &str, _frame: u32) {}

    /// Called once per behavior start, including restarts of the same one.
    fn on_behavior_started(&mut self, _now: Millis, _behavior: &str) {}

    /// Called on the physics tick that reached the steering target.
    fn on_arrival(&mut self, _now: Millis, _position: Vec2) {}
}

/// A [`MascotObserver`] that does nothing.
pub struct NoopObserver;

impl MascotObserver for NoopObserver {}
