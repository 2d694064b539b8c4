//! The implicit fallback behavior.

use crate::{Behavior, BehaviorContext};

pub const IDLE_BEHAVIOR: &str = "idle";

/// Stand still in the `idle` state.  Selected when nothing else can be.
#[derive(Debug, Default)]
pub struct Idle;

impl Behavior for Idle {
    fn name(&self) -> &str {
        IDLE_BEHAVIOR
    }

    fn start(&mut self, ctx: &mut BehaviorContext<'_>) {
        ctx.set_state("idle");
    }

    fn stop(&mut self, _ctx: &mut BehaviorContext<'_>) {}
}
