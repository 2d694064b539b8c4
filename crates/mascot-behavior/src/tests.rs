//! Unit tests for behaviors, weights, and the scheduler.
//!
//! The harness stands in for the mascot: it builds a `BehaviorContext` per
//! callback, tracks the animation state from `SetState` intents, and pops
//! timers in deadline order on a virtual clock.

use std::cell::RefCell;
use std::rc::Rc;

use mascot_core::{Facing, MascotRng, Millis, Rect, TimerId, TimerQueue, Viewport};

use crate::{
    Behavior, BehaviorContext, BehaviorScheduler, ElementKind, Intent, PageElement,
    SchedulerConfig, StaticPage, Timer, WeightTable,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

struct Harness {
    now:    Millis,
    rng:    MascotRng,
    timers: TimerQueue<Timer>,
    page:   StaticPage,
    state:  String,
    facing: Facing,
}

impl Harness {
    fn new(seed: u64) -> Self {
        Self {
            now:    Millis::ZERO,
            rng:    MascotRng::new(seed),
            timers: TimerQueue::new(),
            page:   StaticPage::default(),
            state:  "idle".to_owned(),
            facing: Facing::Right,
        }
    }

    fn with_page(mut self, page: StaticPage) -> Self {
        self.page = page;
        self
    }

    /// Run `f` against a fresh context and absorb its intents.
    fn with<R>(&mut self, f: impl FnOnce(&mut BehaviorContext<'_>) -> R) -> (R, Vec<Intent>) {
        let mut ctx = BehaviorContext::new(
            self.now,
            Viewport::default(),
            self.facing,
            false,
            &self.state,
            &self.page,
            &mut self.rng,
            &mut self.timers,
        );
        let out = f(&mut ctx);
        let intents = ctx.into_intents();
        for intent in &intents {
            match intent {
                Intent::SetState(s) | Intent::ShowEmotion(s) => self.state.clone_from(s),
                Intent::FlipFacing => self.facing = self.facing.flipped(),
                _ => {}
            }
        }
        (out, intents)
    }

    /// Fire every timer due up to `until` through the scheduler.
    fn run_scheduler(&mut self, sched: &mut BehaviorScheduler, until: Millis) -> Vec<Intent> {
        let mut all = Vec::new();
        while let Some((id, at, timer)) = self.timers.pop_due(until) {
            self.now = at;
            let (_, intents) = self.with(|ctx| sched.on_timer(id, &timer, ctx));
            all.extend(intents);
        }
        self.now = until;
        all
    }

    /// Fire every timer due up to `until` straight into one behavior.
    fn run_behavior(&mut self, behavior: &mut dyn Behavior, until: Millis) -> Vec<(Millis, Intent)> {
        let mut all = Vec::new();
        while let Some((id, at, timer)) = self.timers.pop_due(until) {
            self.now = at;
            if let Timer::Behavior(_) = timer {
                let (_, intents) = self.with(|ctx| behavior.on_timer(id, ctx));
                all.extend(intents.into_iter().map(|i| (at, i)));
            }
        }
        self.now = until;
        all
    }
}

fn set_state(name: &str) -> Intent {
    Intent::SetState(name.to_owned())
}

fn states(intents: &[Intent]) -> Vec<&str> {
    intents
        .iter()
        .filter_map(|i| match i {
            Intent::SetState(s) => Some(s.as_str()),
            _ => None,
        })
        .collect()
}

/// Records lifecycle calls into a shared log.
struct Logged {
    name: &'static str,
    log:  Rc<RefCell<Vec<String>>>,
}

impl Behavior for Logged {
    fn name(&self) -> &str {
        self.name
    }

    fn start(&mut self, _ctx: &mut BehaviorContext<'_>) {
        self.log.borrow_mut().push(format!("start {}", self.name));
    }

    fn stop(&mut self, _ctx: &mut BehaviorContext<'_>) {
        self.log.borrow_mut().push(format!("stop {}", self.name));
    }
}

fn scheduler(config: SchedulerConfig) -> BehaviorScheduler {
    BehaviorScheduler::new(config).unwrap()
}

fn element(kind: ElementKind, x: f32, y: f32) -> PageElement {
    PageElement::new(kind, Rect::new(x, y, 80.0, 24.0))
}

// ── Weights ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod weights {
    use tracing_test::traced_test;

    use super::*;
    use crate::IDLE_BEHAVIOR;

    fn shares(table: &WeightTable, draws: usize, seed: u64) -> Vec<(String, f64)> {
        let mut rng = MascotRng::new(seed);
        let mut counts: Vec<(String, usize)> =
            table.entries().iter().map(|e| (e.name.clone(), 0)).collect();
        for _ in 0..draws {
            let pick = table.select(&mut rng);
            if let Some(slot) = counts.iter_mut().find(|(n, _)| n == pick) {
                slot.1 += 1;
            }
        }
        counts.into_iter().map(|(n, c)| (n, c as f64 / draws as f64)).collect()
    }

    #[test]
    fn default_weights_converge() {
        let table = WeightTable::default();
        let total = table.total();
        assert_eq!(total, 100.0);
        for (name, share) in shares(&table, 100_000, 11) {
            let want = table.get(&name).unwrap() / total;
            assert!((share - want).abs() < 0.01, "{name}: {share} vs {want}");
        }
    }

    #[test]
    fn skewed_weights_converge() {
        let table = WeightTable::from_pairs([("a", 1.0), ("b", 3.0)]);
        let got = shares(&table, 50_000, 5);
        assert!((got[0].1 - 0.25).abs() < 0.01);
        assert!((got[1].1 - 0.75).abs() < 0.01);
    }

    #[test]
    fn degenerate_tables_select_idle_without_drawing() {
        for table in [WeightTable::empty(), WeightTable::from_pairs([("a", 0.0), ("b", 0.0)])] {
            let mut rng = MascotRng::new(9);
            assert_eq!(table.select(&mut rng), IDLE_BEHAVIOR);
            // The RNG was not advanced.
            assert_eq!(rng.random::<u64>(), MascotRng::new(9).random::<u64>());
        }
    }

    #[test]
    fn zero_weight_entry_never_chosen() {
        let table = WeightTable::from_pairs([("never", 0.0), ("always", 1.0)]);
        let mut rng = MascotRng::new(1);
        for _ in 0..1_000 {
            assert_eq!(table.select(&mut rng), "always");
        }
    }

    #[traced_test]
    #[test]
    fn invalid_weights_clamp_to_zero() {
        let mut table = WeightTable::from_pairs([("a", -5.0), ("b", f64::NAN)]);
        assert_eq!(table.get("a"), Some(0.0));
        assert_eq!(table.get("b"), Some(0.0));
        assert!(logs_contain("invalid behavior weight"));

        table.set("a", 2.0);
        assert_eq!(table.total(), 2.0);
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler {
    use tracing_test::traced_test;

    use super::*;
    use crate::{BehaviorError, REST_BEHAVIOR};

    #[test]
    fn previous_stops_before_next_starts() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut sched = scheduler(SchedulerConfig::default());
        sched.register(Box::new(Logged { name: "a", log: log.clone() })).unwrap();
        sched.register(Box::new(Logged { name: "b", log: log.clone() })).unwrap();

        let mut h = Harness::new(1);
        h.with(|ctx| sched.execute_behavior("a", ctx));
        h.with(|ctx| sched.execute_behavior("b", ctx));
        assert_eq!(*log.borrow(), vec!["start a", "stop a", "start b"]);
        assert_eq!(sched.active(), Some("b"));
    }

    #[test]
    fn decide_next_stops_before_starting() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let config = SchedulerConfig {
            weights: WeightTable::from_pairs([("a", 1.0)]),
            ..SchedulerConfig::default()
        };
        let mut sched = scheduler(config);
        sched.register(Box::new(Logged { name: "a", log: log.clone() })).unwrap();

        let mut h = Harness::new(2);
        h.with(|ctx| sched.start(ctx));
        h.with(|ctx| sched.decide_next(ctx));
        assert_eq!(*log.borrow(), vec!["start a", "stop a", "start a"]);
    }

    #[traced_test]
    #[test]
    fn unknown_behavior_degrades_to_idle() {
        let mut sched = scheduler(SchedulerConfig::default());
        let mut h = Harness::new(3);
        h.state = "walking".into();
        let (started, intents) = h.with(|ctx| sched.execute_behavior("breakdance", ctx));
        assert_eq!(started, "idle");
        assert_eq!(sched.active(), Some("idle"));
        assert_eq!(intents, vec![set_state("idle")]);
        assert!(logs_contain("behavior not found"));
    }

    #[test]
    fn weights_naming_unregistered_behavior_run_idle() {
        let config = SchedulerConfig {
            weights: WeightTable::from_pairs([("ghost", 1.0)]),
            ..SchedulerConfig::default()
        };
        let mut sched = scheduler(config);
        let mut h = Harness::new(4);
        h.with(|ctx| sched.start(ctx));
        assert_eq!(sched.active(), Some("idle"));
    }

    #[test]
    fn decisions_repeat_within_interval() {
        let config = SchedulerConfig {
            enable_idle: false,
            weights: WeightTable::from_pairs([("idle", 1.0)]),
            ..SchedulerConfig::default()
        };
        let mut sched = scheduler(config);
        let mut h = Harness::new(5);
        h.with(|ctx| sched.start(ctx));

        let mut last = Millis::ZERO;
        for _ in 0..20 {
            let next = h.timers.next_deadline().unwrap();
            let gap = next - last;
            assert!((5_000..15_000).contains(&gap), "gap {gap}");
            assert_eq!(h.timers.len(), 1);
            h.run_scheduler(&mut sched, next);
            last = next;
        }
    }

    #[test]
    fn idle_timeout_forces_rest() {
        let config = SchedulerConfig {
            idle_timeout_ms: 1_000,
            weights: WeightTable::from_pairs([("observe", 1.0)]),
            ..SchedulerConfig::default()
        };
        let mut sched = scheduler(config);
        let mut h = Harness::new(6);
        h.with(|ctx| sched.start(ctx));
        assert_eq!(sched.active(), Some("observe"));

        h.run_scheduler(&mut sched, Millis(999));
        assert_eq!(sched.active(), Some("observe"));
        h.run_scheduler(&mut sched, Millis(1_000));
        assert_eq!(sched.active(), Some(REST_BEHAVIOR));
    }

    #[test]
    fn interaction_postpones_forced_rest() {
        let config = SchedulerConfig {
            idle_timeout_ms: 1_000,
            weights: WeightTable::from_pairs([("observe", 1.0)]),
            ..SchedulerConfig::default()
        };
        let mut sched = scheduler(config);
        let mut h = Harness::new(7);
        h.with(|ctx| sched.start(ctx));

        h.run_scheduler(&mut sched, Millis(600));
        h.with(|ctx| sched.record_interaction(ctx));
        assert_eq!(sched.last_interaction(), Millis(600));

        h.run_scheduler(&mut sched, Millis(1_599));
        assert_eq!(sched.active(), Some("observe"));
        h.run_scheduler(&mut sched, Millis(1_600));
        assert_eq!(sched.active(), Some(REST_BEHAVIOR));
    }

    #[test]
    fn disabled_idle_never_forces_rest() {
        let config = SchedulerConfig {
            idle_timeout_ms: 1_000,
            enable_idle: false,
            weights: WeightTable::from_pairs([("observe", 1.0)]),
            decision_interval_ms: (60_000, 60_001),
            ..SchedulerConfig::default()
        };
        let mut sched = scheduler(config);
        let mut h = Harness::new(8);
        h.with(|ctx| sched.start(ctx));
        h.run_scheduler(&mut sched, Millis(30_000));
        assert_eq!(sched.active(), Some("observe"));
    }

    #[test]
    fn stop_cancels_every_timer() {
        for name in ["idle", "explore", "rest", "play", "observe"] {
            let config = SchedulerConfig {
                weights: WeightTable::from_pairs([(name, 1.0)]),
                ..SchedulerConfig::default()
            };
            let mut sched = scheduler(config);
            let mut h = Harness::new(9);
            h.with(|ctx| sched.start(ctx));
            h.run_scheduler(&mut sched, Millis(2_500));
            h.with(|ctx| sched.jump(ctx));
            h.with(|ctx| sched.stop(ctx));
            assert!(h.timers.is_empty(), "{name} left timers behind");
            assert_eq!(sched.active(), None);
            assert!(!sched.is_running());
        }
    }

    #[test]
    fn jump_reverts_to_idle_when_unchanged() {
        let mut sched = scheduler(SchedulerConfig::default());
        let mut h = Harness::new(10);
        let (_, intents) = h.with(|ctx| sched.jump(ctx));
        assert_eq!(intents, vec![Intent::JumpImpulse, set_state("jumping")]);

        let reverted = h.run_scheduler(&mut sched, Millis(999));
        assert!(reverted.is_empty());
        let reverted = h.run_scheduler(&mut sched, Millis(1_000));
        assert_eq!(reverted, vec![set_state("idle")]);
    }

    #[test]
    fn jump_revert_skipped_when_state_changed() {
        let mut sched = scheduler(SchedulerConfig::default());
        let mut h = Harness::new(11);
        h.with(|ctx| sched.jump(ctx));
        h.state = "walking".into();
        let reverted = h.run_scheduler(&mut sched, Millis(1_000));
        assert!(reverted.is_empty());
    }

    #[test]
    fn crawl_is_cosmetic() {
        let mut sched = scheduler(SchedulerConfig::default());
        let mut h = Harness::new(12);
        h.now = Millis(400);
        let (_, intents) = h.with(|ctx| sched.crawl(ctx));
        assert_eq!(intents, vec![set_state("crawling")]);
        assert_eq!(sched.last_interaction(), Millis(400));
    }

    #[test]
    fn move_to_stops_current_and_steers() {
        let mut sched = scheduler(SchedulerConfig::default());
        let mut h = Harness::new(13);
        h.with(|ctx| sched.execute_behavior("play", ctx));
        let target = mascot_core::Vec2::new(300.0, 200.0);
        let (_, intents) = h.with(|ctx| sched.move_to(target, None, ctx));
        assert_eq!(sched.active(), None);
        assert_eq!(intents, vec![Intent::SetTarget(target), set_state("walking")]);
        // Play's timers went with it.
        assert!(h.timers.is_empty());
    }

    #[test]
    fn stale_behavior_timer_is_ignored() {
        let mut sched = scheduler(SchedulerConfig::default());
        let mut h = Harness::new(14);
        h.with(|ctx| sched.execute_behavior("rest", ctx));
        let stale: TimerId = h.timers.arm(Millis(10), Timer::Behavior("explore".into()));
        h.with(|ctx| sched.on_timer(stale, &Timer::Behavior("explore".into()), ctx));
        assert_eq!(sched.active(), Some("rest"));
        assert_eq!(h.state, "idle");
    }

    #[test]
    fn cannot_replace_running_behavior() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut sched = scheduler(SchedulerConfig::default());
        let mut h = Harness::new(15);
        h.with(|ctx| sched.execute_behavior("rest", ctx));
        let err = sched.register(Box::new(Logged { name: "rest", log })).unwrap_err();
        assert!(matches!(err, BehaviorError::ActiveBehavior(_)));
    }

    #[test]
    fn builtins_are_registered() {
        let mut sched = scheduler(SchedulerConfig::default());
        assert_eq!(sched.behavior_names(), vec!["explore", "idle", "observe", "play", "rest"]);

        let log = Rc::new(RefCell::new(Vec::new()));
        sched.register(Box::new(Logged { name: "explore", log })).unwrap();
        assert!(sched.is_registered("explore"));
        assert_eq!(sched.behavior_names().len(), 5);
        assert!(!sched.is_registered("moonwalk"));
    }

    #[test]
    fn rejects_inverted_decision_interval() {
        let config = SchedulerConfig { decision_interval_ms: (9_000, 1_000), ..SchedulerConfig::default() };
        assert!(BehaviorScheduler::new(config).is_err());
    }
}

// ── Behaviors ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod behaviors {
    use super::*;
    use crate::{Explore, Observe, ObservePhase, Play, Rest, RestPhase};

    #[test]
    fn rest_sleeps_or_thinks_then_wakes() {
        let (mut slept, mut thought) = (false, false);
        for seed in 0..40 {
            let mut h = Harness::new(seed);
            let mut rest = Rest::new();
            let (_, intents) = h.with(|ctx| rest.start(ctx));
            assert_eq!(intents, vec![set_state("idle")]);
            assert_eq!(h.timers.len(), 1);

            let steps = h.run_behavior(&mut rest, Millis(20_000));
            assert_eq!(steps.len(), 2, "seed {seed}");
            let (t1, ref first) = steps[0];
            let (t2, ref second) = steps[1];
            assert_eq!(t1, Millis(2_000));
            assert_eq!(*second, set_state("idle"));
            let nap = t2 - t1;
            match first {
                Intent::SetState(s) if s == "sleeping" => {
                    slept = true;
                    assert!((5_000..10_000).contains(&nap));
                }
                Intent::SetState(s) if s == "thinking" => {
                    thought = true;
                    assert!((3_000..5_000).contains(&nap));
                }
                other => panic!("unexpected {other:?}"),
            }
            assert_eq!(rest.phase(), RestPhase::Awake);
            assert!(h.timers.is_empty());
        }
        assert!(slept && thought);
    }

    #[test]
    fn rest_stop_cancels_pending_step() {
        let mut h = Harness::new(1);
        let mut rest = Rest::new();
        h.with(|ctx| rest.start(ctx));
        h.run_behavior(&mut rest, Millis(2_500));
        assert_eq!(h.timers.len(), 1);
        h.with(|ctx| rest.stop(ctx));
        assert!(h.timers.is_empty());
    }

    #[test]
    fn explore_walks_or_jumps_each_interval() {
        let mut h = Harness::new(21);
        let mut explore = Explore::new();
        let (_, first) = h.with(|ctx| explore.start(ctx));
        assert_eq!(first[0], set_state("walking"));

        let steps = h.run_behavior(&mut explore, Millis(60_000));
        let moves = steps.iter().filter(|(_, i)| matches!(i, Intent::SetTarget(_))).count();
        let jumps = steps.iter().filter(|(_, i)| *i == Intent::Jump).count();
        assert!(moves >= 11, "only {moves} moves in a minute");
        // Every jump is followed by a retarget one second later.
        for (at, intent) in &steps {
            if *intent == Intent::Jump && *at + 1_000 <= Millis(60_000) {
                assert!(steps.iter().any(|(t, i)| *t == *at + 1_000 && matches!(i, Intent::SetTarget(_))));
            }
        }
        for (_, intent) in &steps {
            if let Intent::SetTarget(p) = intent {
                let vp = Viewport::default();
                assert!(p.x >= 0.0 && p.x < vp.max_x() && p.y >= 0.0 && p.y < vp.max_y());
            }
        }
        assert!(jumps < moves);
    }

    #[test]
    fn explore_stop_mid_hop_drops_retarget() {
        let (mut h, mut explore) = (0..100)
            .map(|seed| {
                let mut h = Harness::new(seed);
                let mut explore = Explore::new();
                let (_, first) = h.with(|ctx| explore.start(ctx));
                (h, explore, first)
            })
            .find(|(_, _, first)| first.contains(&Intent::Jump))
            .map(|(h, explore, _)| (h, explore))
            .expect("some seed hops on its first move");
        assert_eq!(h.timers.len(), 2);

        assert!(h.run_behavior(&mut explore, Millis(500)).is_empty());
        h.with(|ctx| explore.stop(ctx));
        assert!(h.timers.is_empty());
        assert!(h.run_behavior(&mut explore, Millis(10_000)).is_empty());
    }

    #[test]
    fn play_routines_complete() {
        let mut h = Harness::new(31);
        let mut play = Play::new();
        let (_, first) = h.with(|ctx| play.start(ctx));
        assert_eq!(first, vec![set_state("happy")]);
        assert_eq!(h.timers.len(), 2);

        let steps: Vec<Intent> =
            h.run_behavior(&mut play, Millis(300_000)).into_iter().map(|(_, i)| i).collect();
        let flips = steps.iter().filter(|i| **i == Intent::FlipFacing).count();
        let dizzy = steps.iter().filter(|i| **i == set_state("surprised")).count();
        assert!(flips > 0, "no spin in five minutes");
        // Spins run to completion; only the last may be cut off by the window.
        assert!(flips >= dizzy * 6 && flips < dizzy * 6 + 6, "{flips} flips, {dizzy} dizzy");
        for intent in &steps {
            match intent {
                Intent::NudgeVelocityX(vx) => assert_eq!(vx.abs(), 2.0),
                Intent::ShowEmotion(e) => assert_eq!(e, "happy"),
                Intent::SetState(s) => {
                    assert!(["happy", "waving", "surprised"].contains(&s.as_str()), "{s}")
                }
                Intent::Jump | Intent::FlipFacing => {}
                other => panic!("unexpected {other:?}"),
            }
        }

        h.with(|ctx| play.stop(ctx));
        assert!(h.timers.is_empty());
    }

    #[test]
    fn dance_pushes_against_facing() {
        for seed in 0..200 {
            let mut h = Harness::new(seed);
            h.facing = Facing::Left;
            let mut play = Play::new();
            h.with(|ctx| play.start(ctx));
            let steps = h.run_behavior(&mut play, Millis(4_500));
            if let Some((_, Intent::NudgeVelocityX(vx))) =
                steps.iter().find(|(_, i)| matches!(i, Intent::NudgeVelocityX(_)))
            {
                assert_eq!(*vx, 2.0);
                return;
            }
        }
        panic!("no dance in 200 seeds");
    }

    #[test]
    fn observe_uses_visible_elements() {
        let page = StaticPage::new(vec![
            element(ElementKind::Link, 10.0, 10.0),
            element(ElementKind::Button, 200.0, 40.0),
            element(ElementKind::Select, 400.0, 80.0),
            element(ElementKind::TextArea, 600.0, 120.0),
            // Scrolled off the left edge.
            element(ElementKind::Link, -50.0, 10.0),
        ]);
        let mut h = Harness::new(41).with_page(page);
        let mut observe = Observe::new();
        let (_, intents) = h.with(|ctx| observe.start(ctx));

        assert_eq!(observe.points().len(), 4);
        assert!(observe.points().iter().all(|p| p.element.is_some()));
        assert_eq!(states(&intents), vec!["thinking", "walking"]);
        assert_eq!(observe.phase(), ObservePhase::Approaching);

        h.run_behavior(&mut observe, Millis(1_000));
        assert_eq!(observe.phase(), ObservePhase::Lingering);
        assert!(["thinking", "surprised"].contains(&h.state.as_str()));
    }

    #[test]
    fn observe_pads_sparse_pages_with_random_points() {
        let mut page = StaticPage::default();
        page.push(element(ElementKind::Button, 20.0, 20.0));
        let mut h = Harness::new(42).with_page(page);
        let mut observe = Observe::new();
        h.with(|ctx| observe.start(ctx));
        assert_eq!(observe.points().len(), 6);
        assert_eq!(observe.points().iter().filter(|p| p.element.is_none()).count(), 5);

        let mut empty = Harness::new(43);
        let mut observe = Observe::new();
        empty.with(|ctx| observe.start(ctx));
        assert_eq!(observe.points().len(), 5);
    }

    #[test]
    fn observe_consumes_points_then_rebuilds() {
        let mut h = Harness::new(44);
        let mut observe = Observe::new();
        h.with(|ctx| observe.start(ctx));
        assert_eq!(observe.points().len(), 5);

        // One visit takes 1 s plus a 2 to 5 s linger.
        let mut seen = Vec::new();
        for _ in 0..12 {
            let next = h.timers.next_deadline().unwrap();
            h.run_behavior(&mut observe, next);
            seen.push(observe.points().len());
        }
        assert!(seen.contains(&1));
        // After the last point is consumed the list is rebuilt to five.
        let pos = seen.iter().position(|n| *n == 1).unwrap();
        assert!(seen[pos + 1..].iter().any(|n| *n == 5));
    }

    #[test]
    fn observe_comments_only_on_commentable_elements() {
        let page = StaticPage::new(vec![
            element(ElementKind::Select, 10.0, 10.0),
            element(ElementKind::OtherInput, 200.0, 40.0),
            element(ElementKind::SubmitInput, 400.0, 80.0),
        ]);
        let mut comments = Vec::new();
        for seed in 0..30 {
            let mut h = Harness::new(seed).with_page(page.clone());
            let mut observe = Observe::new();
            h.with(|ctx| observe.start(ctx));
            for (_, intent) in h.run_behavior(&mut observe, Millis(60_000)) {
                if let Intent::RequestDialogue { context, hint } = intent {
                    comments.push((context, hint.map(|e| e.kind)));
                }
            }
        }
        assert!(!comments.is_empty());
        for (context, kind) in comments {
            assert_eq!(context, "input");
            assert_eq!(kind, Some(ElementKind::SubmitInput));
        }
    }

    #[test]
    fn comment_contexts() {
        assert_eq!(ElementKind::Link.comment_context(), Some("link"));
        assert_eq!(ElementKind::RoleButton.comment_context(), Some("button"));
        assert_eq!(ElementKind::EmailInput.comment_context(), Some("input"));
        assert_eq!(ElementKind::TextArea.comment_context(), Some("input"));
        assert_eq!(ElementKind::OtherInput.comment_context(), None);
        assert_eq!(ElementKind::Select.comment_context(), None);
    }
}

// ── Dialogue ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dialogue {
    use crate::{DialogueSink, RecordingDialogue};

    #[test]
    fn recording_clones_share_log() {
        let probe = RecordingDialogue::new();
        let mut sink = probe.clone();
        sink.request("welcome", None);
        sink.request("click", None);
        assert_eq!(probe.contexts(), vec!["welcome", "click"]);
    }
}
