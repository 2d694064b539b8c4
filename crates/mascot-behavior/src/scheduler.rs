//! `BehaviorScheduler`: picks, times, and swaps behaviors.
//!
//! # Timers
//!
//! The scheduler owns three timer slots besides whatever the active behavior
//! holds:
//!
//! | Slot                | Fires                                  | Effect                       |
//! |---------------------|----------------------------------------|------------------------------|
//! | `decision_timer`    | `[5000, 15000)` ms after each decision | `decide_next()`              |
//! | `idle_timer`        | `idle_timeout` after each interaction  | force `rest` if still quiet  |
//! | `jump_revert_timer` | 1000 ms after `jump()`                 | `jumping` → `idle` if unchanged |
//!
//! The decision and idle timers are independent.  A forced `rest` does not
//! reschedule the next decision, so the two may race: the next decision can
//! replace `rest` at any point.

use std::collections::HashMap;

use mascot_core::{Millis, TimerId, Vec2};

use crate::{
    Behavior, BehaviorContext, BehaviorError, BehaviorResult, Explore, Idle, Observe, Play, Rest,
    Timer, WeightTable, IDLE_BEHAVIOR, REST_BEHAVIOR,
};

/// How long a jump shows `jumping` before reverting to `idle`.
pub const JUMP_REVERT_MS: u64 = 1_000;

// ── Config ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SchedulerConfig {
    /// Quiet time before `rest` is forced.
    pub idle_timeout_ms: u64,

    /// Disables the idle timer entirely when `false`.
    pub enable_idle: bool,

    pub weights: WeightTable,

    /// Half-open `[lo, hi)` range for the time between decisions.
    pub decision_interval_ms: (u64, u64),
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            idle_timeout_ms:      10_000,
            enable_idle:          true,
            weights:              WeightTable::default(),
            decision_interval_ms: (5_000, 15_000),
        }
    }
}

impl SchedulerConfig {
    pub fn validate(&self) -> BehaviorResult<()> {
        let (lo, hi) = self.decision_interval_ms;
        if lo == 0 || lo > hi {
            return Err(BehaviorError::Config(format!(
                "decision interval must satisfy 0 < lo <= hi, got [{lo}, {hi})"
            )));
        }
        if self.enable_idle && self.idle_timeout_ms == 0 {
            return Err(BehaviorError::Config("idle_timeout_ms must be > 0".into()));
        }
        Ok(())
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

pub struct BehaviorScheduler {
    config:            SchedulerConfig,
    registry:          HashMap<String, Box<dyn Behavior>>,
    active:            Option<String>,
    decision_timer:    Option<TimerId>,
    idle_timer:        Option<TimerId>,
    jump_revert_timer: Option<TimerId>,
    last_interaction:  Millis,
    running:           bool,
    /// Number of `execute_behavior` calls so far.
    starts:            u64,
}

impl BehaviorScheduler {
    /// A scheduler with the built-in behaviors registered.
    pub fn new(mut config: SchedulerConfig) -> BehaviorResult<Self> {
        config.validate()?;
        config.weights.sanitize();
        let mut scheduler = Self {
            config,
            registry:          HashMap::new(),
            active:            None,
            decision_timer:    None,
            idle_timer:        None,
            jump_revert_timer: None,
            last_interaction:  Millis::ZERO,
            running:           false,
            starts:            0,
        };
        scheduler.registry.insert(IDLE_BEHAVIOR.to_owned(), Box::new(Idle));
        for behavior in [
            Box::new(Explore::new()) as Box<dyn Behavior>,
            Box::new(Rest::new()),
            Box::new(Play::new()),
            Box::new(Observe::new()),
        ] {
            scheduler.registry.insert(behavior.name().to_owned(), behavior);
        }
        Ok(scheduler)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Name of the started behavior, if any.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn last_interaction(&self) -> Millis {
        self.last_interaction
    }

    /// Bumped on every behavior start, including a restart of the same
    /// behavior.  Owners compare it across calls to notice starts.
    pub fn starts(&self) -> u64 {
        self.starts
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn behavior_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.registry.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    // ── Configuration ─────────────────────────────────────────────────────────

    /// Register `behavior` under its name, replacing any previous one.
    ///
    /// # Errors
    ///
    /// `BehaviorError::ActiveBehavior` if the name belongs to the running
    /// behavior; stop it first.
    pub fn register(&mut self, behavior: Box<dyn Behavior>) -> BehaviorResult<()> {
        let name = behavior.name().to_owned();
        if self.active.as_deref() == Some(name.as_str()) {
            return Err(BehaviorError::ActiveBehavior(name));
        }
        tracing::debug!(behavior = %name, "registered behavior");
        self.registry.insert(name, behavior);
        Ok(())
    }

    pub fn set_weight(&mut self, name: &str, weight: f64) {
        self.config.weights.set(name, weight);
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────────

    /// Run one decision immediately and arm the idle monitor.
    pub fn start(&mut self, ctx: &mut BehaviorContext<'_>) {
        self.stop(ctx);
        self.running = true;
        self.decide_next(ctx);
        if self.config.enable_idle {
            self.reset_idle_timer(ctx);
        }
    }

    /// Cancel every scheduler timer and stop the active behavior.
    pub fn stop(&mut self, ctx: &mut BehaviorContext<'_>) {
        ctx.cancel(&mut self.decision_timer);
        ctx.cancel(&mut self.idle_timer);
        ctx.cancel(&mut self.jump_revert_timer);
        self.stop_current(ctx);
        self.running = false;
    }

    pub fn stop_current(&mut self, ctx: &mut BehaviorContext<'_>) {
        let Some(name) = self.active.take() else {
            return;
        };
        if let Some(behavior) = self.registry.get_mut(&name) {
            behavior.stop(ctx);
        }
    }

    /// Stop the active behavior, pick the next by weight, start it, and arm
    /// the following decision.  Returns the started behavior's name.
    pub fn decide_next(&mut self, ctx: &mut BehaviorContext<'_>) -> String {
        self.stop_current(ctx);
        let choice = self.config.weights.select(ctx.rng).to_owned();
        let started = self.execute_behavior(&choice, ctx);

        ctx.cancel(&mut self.decision_timer);
        let (lo, hi) = self.config.decision_interval_ms;
        let delay = ctx.sample_ms(lo, hi);
        self.decision_timer = Some(ctx.arm_timer(delay, Timer::Decision));
        started
    }

    /// Start `name`, stopping whatever runs now.  Unknown names run `idle`.
    pub fn execute_behavior(&mut self, name: &str, ctx: &mut BehaviorContext<'_>) -> String {
        let name = if self.registry.contains_key(name) {
            name
        } else {
            tracing::warn!(behavior = name, "behavior not found, defaulting to idle");
            IDLE_BEHAVIOR
        };
        self.stop_current(ctx);

        tracing::info!(behavior = name, at = %ctx.now, "executing behavior");
        if let Some(behavior) = self.registry.get_mut(name) {
            behavior.start(ctx);
        }
        self.active = Some(name.to_owned());
        self.starts += 1;
        name.to_owned()
    }

    // ── Interaction monitor ───────────────────────────────────────────────────

    pub fn record_interaction(&mut self, ctx: &mut BehaviorContext<'_>) {
        self.last_interaction = self.last_interaction.max(ctx.now);
        self.reset_idle_timer(ctx);
    }

    fn reset_idle_timer(&mut self, ctx: &mut BehaviorContext<'_>) {
        if !self.config.enable_idle || !self.running {
            return;
        }
        ctx.cancel(&mut self.idle_timer);
        self.idle_timer = Some(ctx.arm_timer(self.config.idle_timeout_ms, Timer::IdleCheck));
    }

    // ── Host commands ─────────────────────────────────────────────────────────

    /// Stop the active behavior and walk to `target` in `state`
    /// (default `walking`).  The caller observes completion on the physics
    /// integrator.
    pub fn move_to(&mut self, target: Vec2, state: Option<&str>, ctx: &mut BehaviorContext<'_>) {
        self.stop_current(ctx);
        ctx.set_target(target);
        ctx.set_state(state.unwrap_or("walking"));
        self.record_interaction(ctx);
    }

    pub fn jump(&mut self, ctx: &mut BehaviorContext<'_>) {
        ctx.jump_impulse();
        ctx.set_state("jumping");
        self.record_interaction(ctx);
        ctx.cancel(&mut self.jump_revert_timer);
        self.jump_revert_timer = Some(ctx.arm_timer(JUMP_REVERT_MS, Timer::JumpRevert));
    }

    /// Cosmetic only: no physics effect.
    pub fn crawl(&mut self, ctx: &mut BehaviorContext<'_>) {
        ctx.set_state("crawling");
        self.record_interaction(ctx);
    }

    // ── Timer dispatch ────────────────────────────────────────────────────────

    /// Handle a fired timer.  Timers this scheduler no longer holds are
    /// ignored, as are `Timer::Anim` payloads.
    pub fn on_timer(&mut self, id: TimerId, timer: &Timer, ctx: &mut BehaviorContext<'_>) {
        match timer {
            Timer::Decision => {
                if take_if(&mut self.decision_timer, id) {
                    self.decide_next(ctx);
                }
            }
            Timer::IdleCheck => {
                if take_if(&mut self.idle_timer, id) {
                    let quiet = ctx.now.since(self.last_interaction);
                    if quiet >= self.config.idle_timeout_ms {
                        tracing::info!(quiet_ms = quiet, "no interaction, forcing rest");
                        self.execute_behavior(REST_BEHAVIOR, ctx);
                    }
                }
            }
            Timer::JumpRevert => {
                if take_if(&mut self.jump_revert_timer, id) && ctx.current_state == "jumping" {
                    ctx.set_state("idle");
                }
            }
            Timer::Behavior(owner) => {
                if self.active.as_deref() != Some(owner.as_str()) {
                    tracing::debug!(behavior = %owner, "stale behavior timer ignored");
                    return;
                }
                if let Some(behavior) = self.registry.get_mut(owner) {
                    behavior.on_timer(id, ctx);
                }
            }
            Timer::Anim(_) => {}
        }
    }
}

/// Empty `slot` and return `true` if it holds `id`.
fn take_if(slot: &mut Option<TimerId>, id: TimerId) -> bool {
    if *slot == Some(id) {
        *slot = None;
        true
    } else {
        false
    }
}
