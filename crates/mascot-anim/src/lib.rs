//! `mascot-anim`: the discrete visual state of the mascot.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`table`]   | `StateTable`, `StateDescriptor`: frame counts and loop flags   |
//! | [`loader`]  | CSV loader for custom state tables                             |
//! | [`asset`]   | `AssetLoader` seam, `AllAssets`, `MissingAssets`               |
//! | [`machine`] | `AnimationStateMachine`: transitions, fallback, emotions       |
//! | [`error`]   | `AnimError`, `AnimResult<T>`                                   |
//!
//! # Failure model
//!
//! Nothing here fails toward the host at runtime.  Unknown names degrade to
//! `idle` with a warning; asset failures walk the fallback chain
//! (similar name → last successful → idle) and stop at `idle`.  Only table
//! construction and CSV loading return errors.

pub mod asset;
pub mod error;
pub mod loader;
pub mod machine;
pub mod table;


pub use asset::{AllAssets, AssetError, AssetLoader, MissingAssets};
pub use error::{AnimError, AnimResult};
pub use loader::{load_state_table_csv, load_state_table_reader};
pub use machine::{AnimTimer, AnimationSnapshot, AnimationStateMachine, EMOTION_DISPLAY_MS};
pub use table::{StateDescriptor, StateEntry, StateTable, IDLE};
