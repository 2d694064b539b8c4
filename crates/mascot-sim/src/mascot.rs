//! The `Mascot` context object and its event loop.

use std::collections::VecDeque;

use mascot_anim::{AnimationSnapshot, AnimationStateMachine};
use mascot_behavior::{Behavior, BehaviorContext, BehaviorScheduler, DialogueSink, Intent, PageProbe, Timer};
use mascot_core::{Cadence, Clock, EmotionToken, MascotRng, Millis, TimerId, TimerQueue, Vec2, VirtualClock, Viewport};
use mascot_physics::{MoveCompletion, PhysicsBody, PhysicsIntegrator};

use crate::{MascotObserver, SimError, SimResult};

// ── Mascot ────────────────────────────────────────────────────────────────────

/// One character: owns every component, its timers, and its RNG.
///
/// Nothing is shared between mascots.  All work happens inside
/// [`advance_to`][Self::advance_to] or a host call, on the caller's thread.
///
/// # Event loop
///
/// ```text
/// advance_to(t):
///   repeat until nothing is due at or before t:
///     pick the earliest of { physics tick, frame tick, next timer }
///     ties: physics, then frame, then timers (by arming order)
///     ① physics tick → integrator.update(); mirror facing; report arrival
///     ② frame tick   → state machine advance_frame()
///     ③ timer        → Timer::Anim → state machine, otherwise → scheduler
///   after every scheduler callback: apply its intents in order
/// ```
///
/// Create via [`MascotBuilder`][crate::MascotBuilder].
pub struct Mascot {
    pub(crate) clock:        VirtualClock,
    pub(crate) physics_tick: Cadence,
    pub(crate) frame_tick:   Cadence,

    /// Every timer of every component, one queue.
    pub(crate) timers: TimerQueue<Timer>,

    pub(crate) rng:       MascotRng,
    pub(crate) physics:   PhysicsIntegrator,
    pub(crate) animation: AnimationStateMachine,
    pub(crate) scheduler: BehaviorScheduler,
    pub(crate) page:      Box<dyn PageProbe>,
    pub(crate) dialogue:  Box<dyn DialogueSink>,

    /// Behavior starts not yet reported to an observer.
    pub(crate) started: Vec<(Millis, String)>,
}

impl Mascot {
    // ── Accessors ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn now(&self) -> Millis {
        self.clock.now()
    }

    pub fn physics(&self) -> &PhysicsIntegrator {
        &self.physics
    }

    /// Direct integrator access for hosts that drive dragging themselves.
    pub fn physics_mut(&mut self) -> &mut PhysicsIntegrator {
        &mut self.physics
    }

    pub fn body(&self) -> &PhysicsBody {
        self.physics.body()
    }

    pub fn animation(&self) -> &AnimationStateMachine {
        &self.animation
    }

    pub fn scheduler(&self) -> &BehaviorScheduler {
        &self.scheduler
    }

    #[inline]
    pub fn current_state(&self) -> &str {
        self.animation.current_state()
    }

    #[inline]
    pub fn frame_index(&self) -> u32 {
        self.animation.frame_index()
    }

    pub fn active_behavior(&self) -> Option<&str> {
        self.scheduler.active()
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn snapshot(&self) -> AnimationSnapshot {
        self.animation.snapshot()
    }

    /// Timers currently armed, across all components.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────────

    /// Start the scheduler and greet the user.
    pub fn start(&mut self) {
        tracing::info!(at = %self.now(), "mascot started");
        self.with_scheduler(|s, ctx| s.start(ctx));
        self.dialogue.request("welcome", None);
    }

    /// Stop the scheduler, drop any emotion overlay where it stands, and
    /// cancel every timer the mascot owns.  Physics and frame ticks keep
    /// running.
    pub fn stop(&mut self) {
        self.with_scheduler(|s, ctx| s.stop(ctx));
        self.animation.cancel_emotion(&mut self.timers);
        self.timers.clear();
        tracing::info!(at = %self.now(), "mascot stopped");
    }

    // ── Host commands ─────────────────────────────────────────────────────────

    /// Walk to `(x, y)` in `state` (default `walking`), abandoning the active
    /// behavior.  The returned handle completes the tick the body arrives, or
    /// as soon as steering is cancelled.
    pub fn move_to(&mut self, x: f32, y: f32, state: Option<&str>) -> MoveCompletion {
        self.with_scheduler(|s, ctx| s.move_to(Vec2::new(x, y), state, ctx));
        self.physics.wait_for_arrival()
    }

    pub fn jump(&mut self) {
        self.with_scheduler(|s, ctx| s.jump(ctx));
    }

    pub fn crawl(&mut self) {
        self.with_scheduler(|s, ctx| s.crawl(ctx));
    }

    pub fn record_interaction(&mut self) {
        self.with_scheduler(|s, ctx| s.record_interaction(ctx));
    }

    /// The user clicked the character.
    pub fn click(&mut self) {
        self.record_interaction();
        self.dialogue.request("click", None);
    }

    /// Pointer grabbed the character.
    pub fn begin_drag(&mut self) {
        self.physics.start_drag();
        self.animation.set_state("surprised");
        self.record_interaction();
    }

    /// Pointer moved while grabbing.
    pub fn drag_to(&mut self, x: f32, y: f32) {
        self.physics.set_position(x, y);
        self.record_interaction();
    }

    /// Pointer released.
    pub fn end_drag(&mut self) {
        self.physics.stop_drag();
        self.animation.set_state("idle");
        self.record_interaction();
    }

    pub fn show_emotion(&mut self, emotion: &str) -> EmotionToken {
        let now = self.now();
        self.animation.show_emotion(emotion, now, &mut self.timers)
    }

    /// Start `name` now, bypassing weighted selection.  Returns the behavior
    /// actually started (`idle` for unknown names).
    pub fn execute_behavior(&mut self, name: &str) -> String {
        self.with_scheduler(|s, ctx| s.execute_behavior(name, ctx))
    }

    pub fn register_behavior(&mut self, behavior: Box<dyn Behavior>) -> SimResult<()> {
        Ok(self.scheduler.register(behavior)?)
    }

    pub fn set_weight(&mut self, name: &str, weight: f64) {
        self.scheduler.set_weight(name, weight);
    }

    /// Resize the reachable area; the body is pulled back inside it.
    pub fn set_viewport(&mut self, viewport: Viewport) -> SimResult<()> {
        viewport.validate().map_err(|e| SimError::Config(e.to_string()))?;
        self.physics.set_viewport(viewport);
        Ok(())
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Process everything due up to and including `target`, then set the
    /// clock to `target`.  A `target` in the past does nothing.
    pub fn advance_to<O: MascotObserver>(&mut self, target: Millis, observer: &mut O) {
        if target < self.now() {
            tracing::debug!(now = %self.now(), %target, "advance_to into the past ignored");
            return;
        }
        loop {
            self.report_started(observer);

            let physics_at = self.physics_tick.next_due();
            let frame_at = self.frame_tick.next_due();
            let next = match self.timers.next_deadline() {
                Some(t) => physics_at.min(frame_at).min(t),
                None    => physics_at.min(frame_at),
            };
            if next > target {
                break;
            }
            self.clock.advance_to(next);

            if self.physics_tick.due(next) {
                self.physics_tick.fire();
                self.physics_step(observer);
            } else if self.frame_tick.due(next) {
                self.frame_tick.fire();
                let frame = self.animation.advance_frame(&mut self.timers);
                observer.on_frame(next, self.animation.current_state(), frame);
            } else if let Some((id, _, timer)) = self.timers.pop_due(next) {
                self.fire_timer(id, timer);
            }
        }
        self.clock.advance_to(target);
        self.report_started(observer);
    }

    /// [`advance_to`][Self::advance_to] `ms` past the current time.
    pub fn advance_by<O: MascotObserver>(&mut self, ms: u64, observer: &mut O) {
        let target = self.now() + ms;
        self.advance_to(target, observer);
    }

    fn physics_step<O: MascotObserver>(&mut self, observer: &mut O) {
        let now = self.now();
        let outcome = self.physics.update();
        self.animation.set_orientation(self.physics.facing());
        if outcome.landed {
            tracing::debug!(at = %now, "landed");
        }
        if outcome.arrived {
            observer.on_arrival(now, self.physics.body().position);
        }
        observer.on_physics_tick(now, self);
    }

    fn fire_timer(&mut self, id: TimerId, timer: Timer) {
        match timer {
            Timer::Anim(anim) => {
                self.animation.on_timer(anim, &mut self.timers);
            }
            other => self.with_scheduler(|s, ctx| s.on_timer(id, &other, ctx)),
        }
    }

    fn report_started<O: MascotObserver>(&mut self, observer: &mut O) {
        for (at, name) in self.started.drain(..) {
            observer.on_behavior_started(at, &name);
        }
    }

    // ── Intent plumbing ───────────────────────────────────────────────────────

    /// Call into the scheduler with a fresh context and apply what it asked for.
    fn with_scheduler<R>(
        &mut self,
        f: impl FnOnce(&mut BehaviorScheduler, &mut BehaviorContext<'_>) -> R,
    ) -> R {
        let (out, intents) = self.collect_intents(f);
        self.apply(intents);
        out
    }

    /// Call into the scheduler and return its intents unapplied.
    fn collect_intents<R>(
        &mut self,
        f: impl FnOnce(&mut BehaviorScheduler, &mut BehaviorContext<'_>) -> R,
    ) -> (R, Vec<Intent>) {
        let now = self.clock.now();
        let starts = self.scheduler.starts();
        let mut ctx = BehaviorContext::new(
            now,
            *self.physics.viewport(),
            self.physics.facing(),
            self.physics.is_moving(),
            self.animation.current_state(),
            &*self.page,
            &mut self.rng,
            &mut self.timers,
        );
        let out = f(&mut self.scheduler, &mut ctx);
        let intents = ctx.into_intents();

        if self.scheduler.starts() != starts {
            if let Some(active) = self.scheduler.active() {
                self.started.push((now, active.to_owned()));
            }
        }
        (out, intents)
    }

    /// Apply intents in order.  `Intent::Jump` expands in place into the
    /// scheduler's jump sequence.
    fn apply(&mut self, intents: Vec<Intent>) {
        let mut queue: VecDeque<Intent> = intents.into();
        while let Some(intent) = queue.pop_front() {
            match intent {
                Intent::SetState(name) => {
                    self.animation.set_state(&name);
                }
                Intent::ShowEmotion(name) => {
                    let now = self.clock.now();
                    self.animation.show_emotion(&name, now, &mut self.timers);
                }
                Intent::SetTarget(target) => {
                    self.physics.set_target(target);
                }
                Intent::Jump => {
                    let ((), expanded) = self.collect_intents(|s, ctx| s.jump(ctx));
                    for step in expanded.into_iter().rev() {
                        queue.push_front(step);
                    }
                }
                Intent::JumpImpulse => {
                    self.physics.jump();
                }
                Intent::NudgeVelocityX(vx) => self.physics.nudge_velocity_x(vx),
                Intent::FlipFacing => {
                    self.physics.flip_facing();
                    self.animation.set_orientation(self.physics.facing());
                }
                Intent::RequestDialogue { context, hint } => {
                    tracing::debug!(context = %context, "dialogue requested");
                    self.dialogue.request(&context, hint.as_ref());
                }
            }
        }
    }
}
