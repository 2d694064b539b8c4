//! Wander to random points, sometimes hopping first.

use mascot_core::{TimerId, Vec2};

use crate::{Behavior, BehaviorContext};

pub const EXPLORE_BEHAVIOR: &str = "explore";

/// Chance that a move starts with a jump.
const JUMP_CHANCE: f64 = 0.2;
/// Delay between a jump and heading for the sampled point.
const RETARGET_DELAY_MS: u64 = 1_000;

/// Walk to a random reachable point every 3 to 5 seconds.
#[derive(Debug, Default)]
pub struct Explore {
    /// Repeating move timer.
    interval:  Option<TimerId>,
    period_ms: u64,
    /// Pending post-jump retarget and its destination.
    retarget:  Option<(TimerId, Vec2)>,
}

impl Explore {
    pub fn new() -> Self {
        Self::default()
    }

    fn move_randomly(&mut self, ctx: &mut BehaviorContext<'_>) {
        let point = ctx.random_point();
        if ctx.chance(JUMP_CHANCE) {
            ctx.jump();
            self.cancel_retarget(ctx);
            let id = ctx.arm(EXPLORE_BEHAVIOR, RETARGET_DELAY_MS);
            self.retarget = Some((id, point));
        } else {
            ctx.set_target(point);
            ctx.set_state("walking");
        }
    }

    fn cancel_retarget(&mut self, ctx: &mut BehaviorContext<'_>) {
        let mut slot = self.retarget.take().map(|(id, _)| id);
        ctx.cancel(&mut slot);
    }
}

impl Behavior for Explore {
    fn name(&self) -> &str {
        EXPLORE_BEHAVIOR
    }

    fn start(&mut self, ctx: &mut BehaviorContext<'_>) {
        self.stop(ctx);
        ctx.set_state("walking");
        self.period_ms = ctx.sample_ms(3_000, 5_000);
        self.move_randomly(ctx);
        self.interval = Some(ctx.arm(EXPLORE_BEHAVIOR, self.period_ms));
    }

    fn stop(&mut self, ctx: &mut BehaviorContext<'_>) {
        ctx.cancel(&mut self.interval);
        self.cancel_retarget(ctx);
    }

    fn on_timer(&mut self, id: TimerId, ctx: &mut BehaviorContext<'_>) {
        if self.interval == Some(id) {
            self.interval = Some(ctx.arm(EXPLORE_BEHAVIOR, self.period_ms));
            self.move_randomly(ctx);
        } else if let Some((armed, point)) = self.retarget {
            if armed == id {
                self.retarget = None;
                ctx.set_target(point);
                ctx.set_state("walking");
            }
        }
    }
}
