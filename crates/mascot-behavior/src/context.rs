//! The view of the world handed to every behavior callback.

use mascot_core::{Facing, Millis, MascotRng, TimerId, TimerQueue, Vec2, Viewport};

use crate::{Intent, PageElement, PageProbe, Timer};

/// Read access to the mascot plus the two things a behavior may change:
/// its own timers and the list of intents it emits.
///
/// Built fresh by the owner for each callback and consumed afterwards with
/// [`into_intents`][Self::into_intents].  The read-only fields are a snapshot
/// taken when the context was built; intents pushed during the callback are
/// not reflected in them.
pub struct BehaviorContext<'a> {
    /// Current mascot time.
    pub now: Millis,

    pub viewport: Viewport,

    /// Body facing at callback time.
    pub facing: Facing,

    /// `true` while the body is steering toward a target.
    pub is_moving: bool,

    /// Animation state at callback time.
    pub current_state: &'a str,

    pub page: &'a dyn PageProbe,

    pub rng: &'a mut MascotRng,

    timers:  &'a mut TimerQueue<Timer>,
    intents: Vec<Intent>,
}

impl<'a> BehaviorContext<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        now:           Millis,
        viewport:      Viewport,
        facing:        Facing,
        is_moving:     bool,
        current_state: &'a str,
        page:          &'a dyn PageProbe,
        rng:           &'a mut MascotRng,
        timers:        &'a mut TimerQueue<Timer>,
    ) -> Self {
        Self {
            now,
            viewport,
            facing,
            is_moving,
            current_state,
            page,
            rng,
            timers,
            intents: Vec::new(),
        }
    }

    // ── Intents ───────────────────────────────────────────────────────────────

    pub fn set_state(&mut self, name: &str) {
        self.intents.push(Intent::SetState(name.to_owned()));
    }

    pub fn show_emotion(&mut self, name: &str) {
        self.intents.push(Intent::ShowEmotion(name.to_owned()));
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.intents.push(Intent::SetTarget(target));
    }

    /// Full jump, routed through the scheduler.
    pub fn jump(&mut self) {
        self.intents.push(Intent::Jump);
    }

    /// Physics impulse only.
    pub fn jump_impulse(&mut self) {
        self.intents.push(Intent::JumpImpulse);
    }

    pub fn nudge_velocity_x(&mut self, vx: f32) {
        self.intents.push(Intent::NudgeVelocityX(vx));
    }

    pub fn flip_facing(&mut self) {
        self.intents.push(Intent::FlipFacing);
    }

    pub fn request_dialogue(&mut self, context: &str, hint: Option<PageElement>) {
        self.intents.push(Intent::RequestDialogue { context: context.to_owned(), hint });
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    pub fn into_intents(self) -> Vec<Intent> {
        self.intents
    }

    // ── Timers ────────────────────────────────────────────────────────────────

    /// Arm a step timer for the behavior named `owner`, `delay_ms` from now.
    pub fn arm(&mut self, owner: &str, delay_ms: u64) -> TimerId {
        self.arm_timer(delay_ms, Timer::Behavior(owner.to_owned()))
    }

    pub fn arm_timer(&mut self, delay_ms: u64, timer: Timer) -> TimerId {
        self.timers.arm(self.now + delay_ms, timer)
    }

    /// Cancel the timer held in `slot`, if any, and empty the slot.
    pub fn cancel(&mut self, slot: &mut Option<TimerId>) {
        if let Some(id) = slot.take() {
            self.timers.cancel(id);
        }
    }

    // ── Randomness ────────────────────────────────────────────────────────────

    /// Duration sampled uniformly from `[lo, hi)` ms.
    pub fn sample_ms(&mut self, lo: u64, hi: u64) -> u64 {
        self.rng.duration_ms(lo, hi)
    }

    /// A uniformly random point the body can reach.
    pub fn random_point(&mut self) -> Vec2 {
        self.viewport.random_point(self.rng)
    }

    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }
}
