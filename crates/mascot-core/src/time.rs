//! Time model.
//!
//! # Design
//!
//! Time is a monotonically increasing millisecond counter, `Millis`, measured
//! from the moment the mascot was created.  Every timer deadline and tick
//! cadence is expressed in it, so ordering is exact integer comparison.
//!
//! Two clocks produce `Millis`:
//!
//! - [`VirtualClock`] is advanced by hand.  Tests and headless runs use it to
//!   step the whole event loop deterministically.
//! - [`SystemClock`] reads wall time through `Instant`.  A host binds it to its
//!   frame callback.
//!
//! [`Cadence`] is the periodic tick source injected into the physics
//! integrator and the animation frame advance.

use std::fmt;
use std::time::Instant;

use crate::{MascotError, MascotResult};

// ── Millis ────────────────────────────────────────────────────────────────────

/// An absolute point in mascot time, in milliseconds since creation.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// Return the instant `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: u64) -> Millis {
        Millis(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed from `earlier` to `self`; zero if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Millis {
    type Output = Millis;
    #[inline]
    fn add(self, rhs: u64) -> Millis {
        self.offset(rhs)
    }
}

impl std::ops::Sub for Millis {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Millis) -> u64 {
        self.since(rhs)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── Clocks ────────────────────────────────────────────────────────────────────

/// Source of the current mascot time.
pub trait Clock {
    fn now(&self) -> Millis;
}

/// A clock that only moves when told to.
#[derive(Clone, Debug, Default)]
pub struct VirtualClock {
    now: Millis,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `ms`.
    #[inline]
    pub fn advance_by(&mut self, ms: u64) -> Millis {
        self.now = self.now + ms;
        self.now
    }

    /// Move the clock to `at`.  Moving backwards is ignored.
    #[inline]
    pub fn advance_to(&mut self, at: Millis) -> Millis {
        self.now = self.now.max(at);
        self.now
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Millis {
        self.now
    }
}

/// Wall-clock time since the clock was created.
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Millis {
        Millis(self.origin.elapsed().as_millis() as u64)
    }
}

// ── Cadence ───────────────────────────────────────────────────────────────────

/// A fixed-rate periodic tick source.
///
/// `next_due()` is the instant of the next tick; the owner calls `fire()`
/// once it has processed that tick.
#[derive(Clone, Debug)]
pub struct Cadence {
    period_ms: u64,
    next_due:  Millis,
}

impl Cadence {
    /// A cadence whose first tick is one period after `start`.
    ///
    /// # Errors
    ///
    /// Returns `MascotError::Config` for a zero period, which would never let
    /// time advance past the first tick.
    pub fn new(period_ms: u64, start: Millis) -> MascotResult<Self> {
        if period_ms == 0 {
            return Err(MascotError::Config("tick period must be > 0 ms".into()));
        }
        Ok(Self { period_ms, next_due: start + period_ms })
    }

    #[inline]
    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    #[inline]
    pub fn next_due(&self) -> Millis {
        self.next_due
    }

    /// `true` if a tick is due at or before `now`.
    #[inline]
    pub fn due(&self, now: Millis) -> bool {
        self.next_due <= now
    }

    /// Consume the pending tick and schedule the next one.
    #[inline]
    pub fn fire(&mut self) {
        self.next_due = self.next_due + self.period_ms;
    }
}
