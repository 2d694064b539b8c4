//! Timer payloads for everything a mascot schedules.

use mascot_anim::AnimTimer;

/// What a fired timer means.  One `TimerQueue<Timer>` serves the whole
/// mascot; the owner routes each payload to the component that armed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timer {
    /// Next weighted selection.
    Decision,

    /// Inactivity check that may force `rest`.
    IdleCheck,

    /// Return from `jumping` to `idle` after a jump.
    JumpRevert,

    /// A behavior's internal step, tagged with the owning behavior's name.
    Behavior(String),

    /// Animation machine timers (emotion reverts).
    Anim(AnimTimer),
}

impl From<AnimTimer> for Timer {
    fn from(timer: AnimTimer) -> Self {
        Timer::Anim(timer)
    }
}
