//! `mascot-sim`: the mascot context object and its event loop.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`mascot`]   | `Mascot`: owns every component, host API, `advance_to` loop  |
//! | [`builder`]  | `MascotBuilder`: validation and assembly                     |
//! | [`config`]   | `MascotConfig`: physics, scheduler, states, viewport, ticks  |
//! | [`observer`] | `MascotObserver` callbacks, `NoopObserver`                   |
//! | [`trace`]    | `CsvTraceObserver`: one CSV row per physics tick             |
//! | [`error`]    | `SimError`, `SimResult<T>`                                   |
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                      |
//! |-----------|-------------------------------------------------------------|
//! | `serde`   | `Serialize`/`Deserialize` on `MascotConfig` and its parts.  |
//! | `fx-hash` | FxHash for the timer cancellation index.                    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mascot_sim::{MascotBuilder, MascotConfig, NoopObserver};
//!
//! let mut mascot = MascotBuilder::new(MascotConfig::default()).build()?;
//! mascot.start();
//! mascot.advance_by(10_000, &mut NoopObserver);
//! println!("{} doing {:?}", mascot.current_state(), mascot.active_behavior());
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod mascot;
pub mod observer;
pub mod trace;


pub use builder::MascotBuilder;
pub use config::MascotConfig;
pub use error::{SimError, SimResult};
pub use mascot::Mascot;
pub use observer::{MascotObserver, NoopObserver};
pub use trace::CsvTraceObserver;
