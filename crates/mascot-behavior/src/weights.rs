//! Weighted random behavior selection.
//!
//! # Algorithm
//!
//! Draw `r` uniformly from `[0, W)` where `W` is the total weight, walk the
//! entries in table order accumulating weight, and return the first entry
//! whose running total exceeds `r`.  Zero-weight entries are never chosen.
//! The strict `r < cumulative` only departs from `cumulative >= r` when `r`
//! lands exactly on a boundary; with `>=` a zero-weight head entry would win
//! at `r == 0`, since its running total is `0 >= 0`.
//! An empty or all-zero table selects [`IDLE_BEHAVIOR`] without drawing.

use mascot_core::MascotRng;

use crate::IDLE_BEHAVIOR;

/// One `(behavior, weight)` pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightEntry {
    pub name:   String,
    pub weight: f64,
}

/// Ordered behavior weights.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WeightTable {
    entries: Vec<WeightEntry>,
}

impl WeightTable {
    /// An empty table, which always selects idle.
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// Build from pairs; invalid weights are clamped to zero with a warning.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut table = Self::empty();
        for (name, weight) in pairs {
            table.set(name, weight);
        }
        table
    }

    /// Insert or update `name`.  Negative and non-finite weights become 0.
    pub fn set(&mut self, name: impl Into<String>, weight: f64) {
        let name = name.into();
        let weight = sanitize(&name, weight);
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.weight = weight,
            None => self.entries.push(WeightEntry { name, weight }),
        }
    }

    /// Clamp every invalid weight in place.  Needed after deserializing.
    pub fn sanitize(&mut self) {
        for entry in &mut self.entries {
            entry.weight = sanitize(&entry.name, entry.weight);
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.weight)
    }

    pub fn entries(&self) -> &[WeightEntry] {
        &self.entries
    }

    /// Sum of all usable weights.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| usable(e.weight)).sum()
    }

    /// Pick a behavior name.
    pub fn select(&self, rng: &mut MascotRng) -> &str {
        let total = self.total();
        if total <= 0.0 || !total.is_finite() {
            return IDLE_BEHAVIOR;
        }
        let r = rng.gen_range(0.0..total);
        let mut cumulative = 0.0;
        let mut last_positive = IDLE_BEHAVIOR;
        for entry in &self.entries {
            let w = usable(entry.weight);
            if w == 0.0 {
                continue;
            }
            cumulative += w;
            last_positive = &entry.name;
            if r < cumulative {
                return &entry.name;
            }
        }
        // Rounding can leave `r` a hair above the running sum.
        last_positive
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::from_pairs([("explore", 40.0), ("rest", 20.0), ("play", 20.0), ("observe", 20.0)])
    }
}

fn usable(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 { weight } else { 0.0 }
}

fn sanitize(name: &str, weight: f64) -> f64 {
    if weight.is_finite() && weight >= 0.0 {
        weight
    } else {
        tracing::warn!(behavior = name, weight, "invalid behavior weight, using 0");
        0.0
    }
}
