//! Visit interesting spots on the page and react to them.

use mascot_core::{TimerId, Vec2};

use crate::{Behavior, BehaviorContext, PageElement};

pub const OBSERVE_BEHAVIOR: &str = "observe";

/// Below this many visible elements, random points pad the list.
const MIN_ELEMENT_POINTS: usize = 3;
const RANDOM_POINTS: usize = 5;
const ARRIVAL_DELAY_MS: u64 = 1_000;
const COMMENT_CHANCE: f64 = 0.3;
const THINKING_CHANCE: f64 = 0.7;

/// A spot to walk to, optionally tied to the element found there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationPoint {
    pub position: Vec2,
    pub element:  Option<PageElement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObservePhase {
    /// Walking toward `points[current]`.
    Approaching,
    /// Looking at `points[current]` before moving on.
    Lingering,
    /// Nothing left to look at; no timer armed.
    #[default]
    Exhausted,
}

/// Walk from point to point, pausing at each to think or look surprised and
/// sometimes commenting on the element there.
#[derive(Debug, Default)]
pub struct Observe {
    points:  Vec<ObservationPoint>,
    current: usize,
    phase:   ObservePhase,
    armed:   Option<TimerId>,
}

impl Observe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[ObservationPoint] {
        &self.points
    }

    pub fn phase(&self) -> ObservePhase {
        self.phase
    }

    fn find_points(&mut self, ctx: &mut BehaviorContext<'_>) {
        self.points = ctx
            .page
            .interactive_elements()
            .into_iter()
            .filter(|e| e.bounds.is_observable())
            .map(|e| ObservationPoint { position: e.bounds.origin(), element: Some(e) })
            .collect();

        if self.points.len() < MIN_ELEMENT_POINTS {
            for _ in 0..RANDOM_POINTS {
                let position = ctx.random_point();
                self.points.push(ObservationPoint { position, element: None });
            }
        }
    }

    fn observe_random_point(&mut self, ctx: &mut BehaviorContext<'_>) {
        if self.points.is_empty() {
            self.find_points(ctx);
            if self.points.is_empty() {
                ctx.set_state("idle");
                self.phase = ObservePhase::Exhausted;
                return;
            }
        }
        self.current = ctx.rng.gen_range(0..self.points.len());
        ctx.set_target(self.points[self.current].position);
        ctx.set_state("walking");
        self.phase = ObservePhase::Approaching;
        self.armed = Some(ctx.arm(OBSERVE_BEHAVIOR, ARRIVAL_DELAY_MS));
    }

    fn react(&mut self, ctx: &mut BehaviorContext<'_>) {
        let emotion = if ctx.chance(THINKING_CHANCE) { "thinking" } else { "surprised" };
        ctx.set_state(emotion);

        let element = self.points.get(self.current).and_then(|p| p.element);
        if let Some(element) = element {
            if ctx.chance(COMMENT_CHANCE) {
                if let Some(context) = element.kind.comment_context() {
                    ctx.request_dialogue(context, Some(element));
                }
            }
        }

        self.phase = ObservePhase::Lingering;
        let linger = ctx.sample_ms(2_000, 5_000);
        self.armed = Some(ctx.arm(OBSERVE_BEHAVIOR, linger));
    }
}

impl Behavior for Observe {
    fn name(&self) -> &str {
        OBSERVE_BEHAVIOR
    }

    fn start(&mut self, ctx: &mut BehaviorContext<'_>) {
        self.stop(ctx);
        ctx.set_state("thinking");
        self.find_points(ctx);
        self.observe_random_point(ctx);
    }

    fn stop(&mut self, ctx: &mut BehaviorContext<'_>) {
        ctx.cancel(&mut self.armed);
        self.phase = ObservePhase::Exhausted;
    }

    fn on_timer(&mut self, id: TimerId, ctx: &mut BehaviorContext<'_>) {
        if self.armed != Some(id) {
            return;
        }
        self.armed = None;
        match self.phase {
            ObservePhase::Approaching => self.react(ctx),
            ObservePhase::Lingering => {
                if self.current < self.points.len() {
                    self.points.remove(self.current);
                }
                self.observe_random_point(ctx);
            }
            ObservePhase::Exhausted => {}
        }
    }
}
