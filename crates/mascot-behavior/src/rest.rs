//! Settle down, then either nap or ponder.

use mascot_core::TimerId;

use crate::{Behavior, BehaviorContext};

pub const REST_BEHAVIOR: &str = "rest";

const SETTLE_MS: u64 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestPhase {
    /// Idle, about to fall asleep (`sleep = true`) or start thinking.
    Settling { sleep: bool },
    Sleeping,
    Thinking,
    /// Back to idle; nothing further scheduled.
    #[default]
    Awake,
}

/// Idle for two seconds, then sleep for 5 to 10 s or think for 3 to 5 s,
/// then idle again.  Exactly one timer is armed at any moment.
#[derive(Debug, Default)]
pub struct Rest {
    phase: RestPhase,
    armed: Option<TimerId>,
}

impl Rest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RestPhase {
        self.phase
    }
}

impl Behavior for Rest {
    fn name(&self) -> &str {
        REST_BEHAVIOR
    }

    fn start(&mut self, ctx: &mut BehaviorContext<'_>) {
        self.stop(ctx);
        ctx.set_state("idle");
        self.phase = RestPhase::Settling { sleep: ctx.chance(0.5) };
        self.armed = Some(ctx.arm(REST_BEHAVIOR, SETTLE_MS));
    }

    fn stop(&mut self, ctx: &mut BehaviorContext<'_>) {
        ctx.cancel(&mut self.armed);
        self.phase = RestPhase::Awake;
    }

    fn on_timer(&mut self, id: TimerId, ctx: &mut BehaviorContext<'_>) {
        if self.armed != Some(id) {
            return;
        }
        self.armed = None;
        match self.phase {
            RestPhase::Settling { sleep: true } => {
                ctx.set_state("sleeping");
                self.phase = RestPhase::Sleeping;
                let wake = ctx.sample_ms(5_000, 10_000);
                self.armed = Some(ctx.arm(REST_BEHAVIOR, wake));
            }
            RestPhase::Settling { sleep: false } => {
                ctx.set_state("thinking");
                self.phase = RestPhase::Thinking;
                let done = ctx.sample_ms(3_000, 5_000);
                self.armed = Some(ctx.arm(REST_BEHAVIOR, done));
            }
            RestPhase::Sleeping | RestPhase::Thinking => {
                ctx.set_state("idle");
                self.phase = RestPhase::Awake;
            }
            RestPhase::Awake => {}
        }
    }
}
