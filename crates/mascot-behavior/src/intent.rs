//! Effects a behavior asks the mascot to perform.

use mascot_core::Vec2;

use crate::PageElement;

/// One requested effect.
///
/// Behaviors and the scheduler never touch the physics body or the animation
/// machine directly.  They push intents into their
/// [`BehaviorContext`][crate::BehaviorContext] and the owner applies them, in
/// order, as soon as the callback returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Switch the animation state.
    SetState(String),

    /// Flash a transient emotion overlay.
    ShowEmotion(String),

    /// Steer the body toward a point.
    SetTarget(Vec2),

    /// The scheduler-level jump: impulse, `jumping` state, an interaction
    /// record, and a guarded revert to `idle`.  Expanded by
    /// [`BehaviorScheduler::jump`][crate::BehaviorScheduler::jump].
    Jump,

    /// The bare physics impulse.
    JumpImpulse,

    /// Overwrite horizontal velocity.
    NudgeVelocityX(f32),

    /// Mirror the facing without moving.
    FlipFacing,

    /// Ask the host's dialogue layer for a line in `context`.
    RequestDialogue {
        context: String,
        hint:    Option<PageElement>,
    },
}
