//! The known-states table.
//!
//! Entries keep their insertion order: the similar-state search walks them
//! front to back, so order decides which candidate wins.

use crate::{AnimError, AnimResult};

/// The state every fallback chain ends in.  A table without it is invalid.
pub const IDLE: &str = "idle";

/// Frame metadata for one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateDescriptor {
    /// Number of frames; always at least 1.
    pub frame_count: u32,

    /// Wrap to frame 0 after the last frame, or hold the last frame.
    pub loops: bool,
}

/// A named [`StateDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateEntry {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub descriptor: StateDescriptor,
}

/// Ordered map from state name to descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StateTable {
    entries: Vec<StateEntry>,
}

impl StateTable {
    /// Build a table from entries, rejecting zero-frame states, duplicates,
    /// and tables with no `idle`.
    pub fn new(entries: Vec<StateEntry>) -> AnimResult<Self> {
        let table = Self { entries };
        table.validate()?;
        Ok(table)
    }

    /// Check the invariants `new` enforces.  Deserialized tables bypass
    /// `new`, so owners call this after loading config.
    pub fn validate(&self) -> AnimResult<()> {
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.descriptor.frame_count == 0 {
                return Err(AnimError::InvalidTable(format!(
                    "state `{}` has zero frames",
                    entry.name
                )));
            }
            if self.entries[..i].iter().any(|e| e.name == entry.name) {
                return Err(AnimError::InvalidTable(format!(
                    "state `{}` listed twice",
                    entry.name
                )));
            }
        }
        if !self.contains(IDLE) {
            return Err(AnimError::InvalidTable(format!("missing required `{IDLE}` state")));
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<StateDescriptor> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.descriptor)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Add a state, or replace the descriptor of an existing one in place.
    pub fn insert(&mut self, name: impl Into<String>, frame_count: u32, loops: bool) -> AnimResult<()> {
        let name = name.into();
        if frame_count == 0 {
            return Err(AnimError::InvalidTable(format!("state `{name}` has zero frames")));
        }
        let descriptor = StateDescriptor { frame_count, loops };
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.descriptor = descriptor,
            None => self.entries.push(StateEntry { name, descriptor }),
        }
        Ok(())
    }

    /// First state, in table order, whose name extends `name` or is a prefix
    /// of it, excluding `name` itself and anything in `exclude`.
    pub fn similar_to(&self, name: &str, exclude: &[String]) -> Option<&str> {
        self.entries
            .iter()
            .map(|e| e.name.as_str())
            .filter(|s| *s != name && !exclude.iter().any(|x| x == s))
            .find(|s| s.starts_with(name) || name.starts_with(s))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StateTable {
    fn default() -> Self {
        let states: [(&str, u32, bool); 12] = [
            (IDLE,        4, true),
            ("walking",   8, true),
            ("running",   8, true),
            ("jumping",   6, false),
            ("falling",   4, true),
            ("sitting",   4, true),
            ("sleeping",  4, true),
            ("happy",     4, true),
            ("surprised", 4, true),
            ("thinking",  4, true),
            ("waving",    4, true),
            ("crawling",  8, true),
        ];
        Self {
            entries: states
                .into_iter()
                .map(|(name, frame_count, loops)| StateEntry {
                    name:       name.to_owned(),
                    descriptor: StateDescriptor { frame_count, loops },
                })
                .collect(),
        }
    }
}
