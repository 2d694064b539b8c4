//! The `Behavior` trait, the scheduler's unit of activity.

use mascot_core::TimerId;

use crate::BehaviorContext;

/// A named activity with a start/stop lifecycle.
///
/// Behaviors are constructed once and started and stopped many times.  Every
/// timer a behavior arms must be cancelled by its `stop()`, which must also be
/// safe to call when the behavior is not running.  Implementations usually
/// call their own `stop()` first thing in `start()`.
///
/// # Example
///
/// ```rust,ignore
/// struct Sit;
///
/// impl Behavior for Sit {
///     fn name(&self) -> &str { "sit" }
///     fn start(&mut self, ctx: &mut BehaviorContext<'_>) { ctx.set_state("sitting"); }
///     fn stop(&mut self, _ctx: &mut BehaviorContext<'_>) {}
/// }
/// ```
pub trait Behavior {
    /// Registry key.  Also tags this behavior's timers.
    fn name(&self) -> &str;

    fn start(&mut self, ctx: &mut BehaviorContext<'_>);

    fn stop(&mut self, ctx: &mut BehaviorContext<'_>);

    /// A timer armed through `ctx.arm(self.name(), ..)` fired.  Ids the
    /// behavior no longer holds must be ignored.
    ///
    /// Default: ignore.
    fn on_timer(&mut self, _id: TimerId, _ctx: &mut BehaviorContext<'_>) {}
}
