//! `mascot-core`: foundational types for the mascot agent framework.
//!
//! This crate is a dependency of every other `mascot-*` crate.  It has no
//! `mascot-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde` and `rustc-hash`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `TimerId`, `EmotionToken`                                 |
//! | [`geo`]     | `Vec2`, `Rect`, `Viewport`                                |
//! | [`time`]    | `Millis`, `Clock`, `VirtualClock`, `SystemClock`, `Cadence` |
//! | [`timer`]   | `TimerQueue<E>`, cancellable one-shot timers              |
//! | [`rng`]     | `MascotRng` (seeded, per-mascot)                          |
//! | [`facing`]  | `Facing` enum                                             |
//! | [`error`]   | `MascotError`, `MascotResult`                             |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `serde`   | Adds `Serialize`/`Deserialize` to configuration types.   |
//! | `fx-hash` | FxHash for the timer cancellation index.                 |

pub mod error;
pub mod facing;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;
pub mod timer;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{MascotError, MascotResult};
pub use facing::Facing;
pub use geo::{Rect, Vec2, Viewport};
pub use ids::{EmotionToken, TimerId};
pub use rng::MascotRng;
pub use time::{Cadence, Clock, Millis, SystemClock, VirtualClock};
pub use timer::TimerQueue;
