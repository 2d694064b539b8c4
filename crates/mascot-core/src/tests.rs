//! Unit tests for mascot-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EmotionToken, TimerId};

    #[test]
    fn next_increments() {
        assert_eq!(TimerId(3).next(), TimerId(4));
        assert!(EmotionToken(0) < EmotionToken(0).next());
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(TimerId::default(), TimerId::INVALID);
        assert_eq!(TimerId::INVALID.0, u64::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(TimerId(7).to_string(), "TimerId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{Cadence, Clock, Millis, SystemClock, VirtualClock};

    #[test]
    fn millis_arithmetic() {
        let t = Millis(1_000);
        assert_eq!(t + 500, Millis(1_500));
        assert_eq!(Millis(1_500) - t, 500);
        // Saturates instead of underflowing.
        assert_eq!(t.since(Millis(2_000)), 0);
        assert_eq!(t.to_string(), "1000ms");
    }

    #[test]
    fn virtual_clock_only_moves_forward() {
        let mut clock = VirtualClock::new();
        assert_eq!(clock.now(), Millis::ZERO);
        clock.advance_by(250);
        assert_eq!(clock.now(), Millis(250));
        clock.advance_to(Millis(100));
        assert_eq!(clock.now(), Millis(250));
        clock.advance_to(Millis(900));
        assert_eq!(clock.now(), Millis(900));
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn cadence_fires_every_period() {
        let mut cadence = Cadence::new(100, Millis::ZERO).unwrap();
        assert_eq!(cadence.period_ms(), 100);
        assert_eq!(cadence.next_due(), Millis(100));
        assert!(!cadence.due(Millis(99)));
        assert!(cadence.due(Millis(100)));
        cadence.fire();
        assert_eq!(cadence.next_due(), Millis(200));
    }

    #[test]
    fn cadence_rejects_zero_period() {
        assert!(Cadence::new(0, Millis::ZERO).is_err());
    }
}

#[cfg(test)]
mod timer {
    use crate::{Millis, TimerQueue};

    #[test]
    fn pops_in_deadline_order() {
        let mut q: TimerQueue<&str> = TimerQueue::new();
        q.arm(Millis(300), "c");
        q.arm(Millis(100), "a");
        q.arm(Millis(200), "b");
        assert_eq!(q.next_deadline(), Some(Millis(100)));

        let fired: Vec<&str> = std::iter::from_fn(|| q.pop_due(Millis(1_000)))
            .map(|(_, _, e)| e)
            .collect();
        assert_eq!(fired, vec!["a", "b", "c"]);
        assert!(q.is_empty());
    }

    #[test]
    fn equal_deadlines_fire_in_arming_order() {
        let mut q: TimerQueue<u32> = TimerQueue::new();
        for n in 0u32..5 {
            q.arm(Millis(50), n);
        }
        let fired: Vec<u32> = std::iter::from_fn(|| q.pop_due(Millis(50)))
            .map(|(_, _, e)| e)
            .collect();
        assert_eq!(fired, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn nothing_pops_before_deadline() {
        let mut q: TimerQueue<()> = TimerQueue::new();
        q.arm(Millis(500), ());
        assert!(q.pop_due(Millis(499)).is_none());
        let (_, at, ()) = q.pop_due(Millis(500)).unwrap();
        assert_eq!(at, Millis(500));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut q: TimerQueue<&str> = TimerQueue::new();
        let keep = q.arm(Millis(10), "keep");
        let drop = q.arm(Millis(5), "drop");
        assert!(q.cancel(drop));
        // Idempotent.
        assert!(!q.cancel(drop));
        assert!(!q.is_armed(drop));
        assert!(q.is_armed(keep));
        assert_eq!(q.deadline(keep), Some(Millis(10)));
        assert_eq!(q.deadline(drop), None);

        let (id, _, e) = q.pop_due(Millis(100)).unwrap();
        assert_eq!((id, e), (keep, "keep"));
        assert!(q.pop_due(Millis(100)).is_none());
        // Fired timers cannot be cancelled.
        assert!(!q.cancel(keep));
    }

    #[test]
    fn ids_are_never_reused() {
        let mut q: TimerQueue<()> = TimerQueue::new();
        let a = q.arm(Millis(1), ());
        q.pop_due(Millis(1));
        let b = q.arm(Millis(1), ());
        assert_ne!(a, b);
    }

    #[test]
    fn clear_empties_queue() {
        let mut q: TimerQueue<()> = TimerQueue::new();
        let id = q.arm(Millis(1), ());
        q.arm(Millis(2), ());
        q.clear();
        assert_eq!(q.len(), 0);
        assert!(!q.is_armed(id));
        assert_eq!(q.next_deadline(), None);
    }
}

#[cfg(test)]
mod geo {
    use crate::{MascotRng, Rect, Vec2, Viewport};

    #[test]
    fn vec2_distance_and_normalize() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        let n = b.normalized().unwrap();
        assert!((n.x - 0.6).abs() < 1e-6 && (n.y - 0.8).abs() < 1e-6);
        assert!(Vec2::ZERO.normalized().is_none());
    }

    #[test]
    fn viewport_reachable_bounds() {
        let vp = Viewport::new(800.0, 600.0, 100.0).unwrap();
        assert_eq!(vp.max_x(), 700.0);
        assert_eq!(vp.max_y(), 500.0);
    }

    #[test]
    fn viewport_rejects_degenerate_dimensions() {
        assert!(Viewport::new(0.0, 600.0, 100.0).is_err());
        assert!(Viewport::new(800.0, f32::NAN, 100.0).is_err());
        assert!(Viewport::new(800.0, 600.0, -1.0).is_err());
    }

    #[test]
    fn random_points_stay_in_bounds() {
        let vp = Viewport::new(400.0, 300.0, 100.0).unwrap();
        let mut rng = MascotRng::new(7);
        for _ in 0..1_000 {
            let p = vp.random_point(&mut rng);
            assert!((0.0..vp.max_x()).contains(&p.x), "x out of range: {p}");
            assert!((0.0..vp.max_y()).contains(&p.y), "y out of range: {p}");
        }
    }

    #[test]
    fn sprite_as_large_as_viewport_pins_to_origin() {
        let vp = Viewport::new(100.0, 100.0, 100.0).unwrap();
        let mut rng = MascotRng::new(1);
        assert_eq!(vp.random_point(&mut rng), Vec2::ZERO);
    }

    #[test]
    fn rect_observability() {
        assert!(Rect::new(10.0, 20.0, 50.0, 10.0).is_observable());
        assert!(!Rect::new(10.0, 20.0, 0.0, 10.0).is_observable());
        assert!(!Rect::new(-1.0, 20.0, 50.0, 10.0).is_observable());
        assert!(!Rect::new(10.0, -0.5, 50.0, 10.0).is_observable());
    }
}

#[cfg(test)]
mod rng {
    use crate::{Facing, MascotRng};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = MascotRng::new(42);
        let mut b = MascotRng::new(42);
        for _ in 0..32 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn duration_in_half_open_range() {
        let mut rng = MascotRng::new(3);
        for _ in 0..500 {
            let d = rng.duration_ms(5_000, 15_000);
            assert!((5_000..15_000).contains(&d));
        }
        assert_eq!(rng.duration_ms(1_000, 1_000), 1_000);
    }

    #[test]
    fn facing_flip() {
        assert_eq!(Facing::Left.flipped(), Facing::Right);
        assert_eq!(Facing::default(), Facing::Right);
        assert_eq!(Facing::Left.to_string(), "left");
    }
}
