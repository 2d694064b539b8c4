//! Asset loading seam.
//!
//! Rendering is the host's business; the state machine only needs to know
//! whether the asset for a state could be loaded, so it can fall back.

use std::collections::HashSet;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("no asset for state `{0}`")]
    Missing(String),

    #[error("failed to load asset for state `{state}`: {reason}")]
    Failed { state: String, reason: String },
}

/// Loads (or checks) the visual asset for one animation state.
///
/// Called once per actual state change, never for a no-op `set_state`.
pub trait AssetLoader {
    fn load(&mut self, state: &str) -> Result<(), AssetError>;
}

/// Every asset loads.  The default for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllAssets;

impl AssetLoader for AllAssets {
    fn load(&mut self, _state: &str) -> Result<(), AssetError> {
        Ok(())
    }
}

/// Fails for a fixed set of state names.
#[derive(Debug, Default, Clone)]
pub struct MissingAssets {
    missing: HashSet<String>,
}

impl MissingAssets {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { missing: names.into_iter().map(Into::into).collect() }
    }
}

impl AssetLoader for MissingAssets {
    fn load(&mut self, state: &str) -> Result<(), AssetError> {
        if self.missing.contains(state) {
            Err(AssetError::Missing(state.to_owned()))
        } else {
            Ok(())
        }
    }
}
