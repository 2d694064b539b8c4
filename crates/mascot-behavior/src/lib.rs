//! `mascot-behavior`: what the mascot decides to do, and when.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`behavior`]  | `Behavior` trait: `name`, `start`, `stop`, `on_timer`         |
//! | [`context`]   | `BehaviorContext`: snapshot, timers, and intent sink          |
//! | [`intent`]    | `Intent`: effects applied by the owner after each callback    |
//! | [`timer`]     | `Timer`: payloads for the mascot's single timer queue         |
//! | [`scheduler`] | `BehaviorScheduler`, `SchedulerConfig`                        |
//! | [`weights`]   | `WeightTable`: weighted random selection                      |
//! | [`page`]      | `PageProbe` seam, `PageElement`, `EmptyPage`, `StaticPage`    |
//! | [`dialogue`]  | `DialogueSink` seam, `NoDialogue`, `RecordingDialogue`        |
//! | [`idle`], [`explore`], [`rest`], [`play`], [`observe`] | built-in behaviors   |
//! | [`error`]     | `BehaviorError`, `BehaviorResult<T>`                          |
//!
//! # Intent / apply split
//!
//! A behavior never holds a reference to the physics body or the animation
//! machine.  Each callback gets a [`BehaviorContext`] with a read-only
//! snapshot, the mascot's RNG, and its timer queue, and pushes [`Intent`]s.
//! The owner applies them in order as soon as the callback returns.  Every
//! timer a behavior arms is kept in a named slot on the behavior so that
//! `stop()` can cancel it.

pub mod behavior;
pub mod context;
pub mod dialogue;
pub mod error;
pub mod explore;
pub mod idle;
pub mod intent;
pub mod observe;
pub mod page;
pub mod play;
pub mod rest;
pub mod scheduler;
pub mod timer;
pub mod weights;

#[cfg(test)]
mod tests;

pub use behavior::Behavior;
pub use context::BehaviorContext;
pub use dialogue::{DialogueRequest, DialogueSink, NoDialogue, RecordingDialogue};
pub use error::{BehaviorError, BehaviorResult};
pub use explore::{Explore, EXPLORE_BEHAVIOR};
pub use idle::{Idle, IDLE_BEHAVIOR};
pub use intent::Intent;
pub use observe::{Observe, ObservationPoint, ObservePhase, OBSERVE_BEHAVIOR};
pub use page::{ElementKind, EmptyPage, PageElement, PageProbe, StaticPage};
pub use play::{Play, PlayAction, PLAY_BEHAVIOR};
pub use rest::{Rest, RestPhase, REST_BEHAVIOR};
pub use scheduler::{BehaviorScheduler, SchedulerConfig, JUMP_REVERT_MS};
pub use timer::Timer;
pub use weights::{WeightEntry, WeightTable};
