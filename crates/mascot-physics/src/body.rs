//! Kinematic state of the character.

use mascot_core::{Facing, Vec2};

/// Everything the integrator mutates each tick.
///
/// While `is_dragging` is set the host owns `position`: gravity, friction and
/// boundary handling are suspended and `target` stays cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsBody {
    /// Top-left corner of the sprite, in viewport pixels.
    pub position: Vec2,

    /// Pixels per tick.
    pub velocity: Vec2,

    /// Steering destination, if any.
    pub target: Option<Vec2>,

    /// `true` while steering toward `target`.
    pub is_moving: bool,

    pub is_dragging: bool,

    /// Set by `jump()`, cleared on touching the floor.
    pub is_jumping: bool,

    pub facing: Facing,
}

impl PhysicsBody {
    /// A body at rest at `position`, facing right.
    pub fn at_rest(position: Vec2) -> Self {
        Self {
            position,
            velocity:    Vec2::ZERO,
            target:      None,
            is_moving:   false,
            is_dragging: false,
            is_jumping:  false,
            facing:      Facing::default(),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.position.y
    }
}
