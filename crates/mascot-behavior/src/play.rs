//! Bounce around happily: jumps, dances, waves, and spins.

use mascot_core::{Facing, TimerId};

use crate::{Behavior, BehaviorContext};

pub const PLAY_BEHAVIOR: &str = "play";

const DANCE_DELAY_MS: u64 = 300;
const DANCE_SPEED: f32 = 2.0;
const WAVE_MS: u64 = 1_500;
const SPIN_STEP_MS: u64 = 150;
const SPIN_FLIPS: u32 = 6;
const DIZZY_MS: u64 = 1_000;

/// The four playful actions, picked uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayAction {
    Jump,
    Dance,
    Wave,
    Spin,
}

impl PlayAction {
    const ALL: [PlayAction; 4] = [PlayAction::Jump, PlayAction::Dance, PlayAction::Wave, PlayAction::Spin];
}

/// The multi-step tail of an action, waiting on `Play::routine`'s timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Routine {
    /// Shuffle sideways once the delay elapses.
    Dance,
    /// Lower the hand and go back to `happy`.
    Wave,
    /// `flips` facing flips done so far.
    Spin { flips: u32 },
    /// Recovering from the spin in `surprised`.
    Dizzy,
}

/// Two independent repeating timers (actions and happy flashes) plus at most
/// one in-flight action routine.  Starting a new action abandons the previous
/// routine.
#[derive(Debug, Default)]
pub struct Play {
    action_timer:   Option<TimerId>,
    action_period:  u64,
    emotion_timer:  Option<TimerId>,
    emotion_period: u64,
    routine:        Option<(TimerId, Routine)>,
}

impl Play {
    pub fn new() -> Self {
        Self::default()
    }

    fn perform(&mut self, action: PlayAction, ctx: &mut BehaviorContext<'_>) {
        self.cancel_routine(ctx);
        tracing::debug!(?action, "play action");
        match action {
            PlayAction::Jump => ctx.jump(),
            PlayAction::Dance => {
                ctx.set_state("happy");
                self.arm_routine(ctx, DANCE_DELAY_MS, Routine::Dance);
            }
            PlayAction::Wave => {
                ctx.set_state("waving");
                self.arm_routine(ctx, WAVE_MS, Routine::Wave);
            }
            PlayAction::Spin => self.arm_routine(ctx, SPIN_STEP_MS, Routine::Spin { flips: 0 }),
        }
    }

    fn step_routine(&mut self, routine: Routine, ctx: &mut BehaviorContext<'_>) {
        match routine {
            Routine::Dance => {
                let vx = match ctx.facing {
                    Facing::Left  => DANCE_SPEED,
                    Facing::Right => -DANCE_SPEED,
                };
                ctx.nudge_velocity_x(vx);
            }
            Routine::Wave | Routine::Dizzy => ctx.set_state("happy"),
            Routine::Spin { flips } => {
                ctx.flip_facing();
                let flips = flips + 1;
                if flips >= SPIN_FLIPS {
                    ctx.set_state("surprised");
                    self.arm_routine(ctx, DIZZY_MS, Routine::Dizzy);
                } else {
                    self.arm_routine(ctx, SPIN_STEP_MS, Routine::Spin { flips });
                }
            }
        }
    }

    fn arm_routine(&mut self, ctx: &mut BehaviorContext<'_>, delay_ms: u64, routine: Routine) {
        let id = ctx.arm(PLAY_BEHAVIOR, delay_ms);
        self.routine = Some((id, routine));
    }

    fn cancel_routine(&mut self, ctx: &mut BehaviorContext<'_>) {
        let mut slot = self.routine.take().map(|(id, _)| id);
        ctx.cancel(&mut slot);
    }
}

impl Behavior for Play {
    fn name(&self) -> &str {
        PLAY_BEHAVIOR
    }

    fn start(&mut self, ctx: &mut BehaviorContext<'_>) {
        self.stop(ctx);
        ctx.set_state("happy");
        self.action_period = ctx.sample_ms(2_000, 4_000);
        self.emotion_period = ctx.sample_ms(3_000, 6_000);
        self.action_timer = Some(ctx.arm(PLAY_BEHAVIOR, self.action_period));
        self.emotion_timer = Some(ctx.arm(PLAY_BEHAVIOR, self.emotion_period));
    }

    fn stop(&mut self, ctx: &mut BehaviorContext<'_>) {
        ctx.cancel(&mut self.action_timer);
        ctx.cancel(&mut self.emotion_timer);
        self.cancel_routine(ctx);
    }

    fn on_timer(&mut self, id: TimerId, ctx: &mut BehaviorContext<'_>) {
        if self.action_timer == Some(id) {
            self.action_timer = Some(ctx.arm(PLAY_BEHAVIOR, self.action_period));
            let pick = ctx.rng.gen_range(0..PlayAction::ALL.len());
            self.perform(PlayAction::ALL[pick], ctx);
        } else if self.emotion_timer == Some(id) {
            self.emotion_timer = Some(ctx.arm(PLAY_BEHAVIOR, self.emotion_period));
            if ctx.chance(0.5) {
                ctx.show_emotion("happy");
            }
        } else if let Some((armed, routine)) = self.routine {
            if armed == id {
                self.routine = None;
                self.step_routine(routine, ctx);
            }
        }
    }
}
