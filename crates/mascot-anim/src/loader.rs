//! CSV state-table loader.
//!
//! # CSV format
//!
//! One row per state, in the order the similar-state search should see them.
//!
//! ```csv
//! state,frame_count,loops
//! idle,4,true
//! walking,8,true
//! jumping,6,false
//! jumping2,6,false
//! ```
//!
//! The resulting table must contain `idle` and no zero-frame state.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::table::{StateDescriptor, StateEntry};
use crate::{AnimError, StateTable};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StateRecord {
    state:       String,
    frame_count: u32,
    loops:       bool,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`StateTable`] from a CSV file.
pub fn load_state_table_csv(path: &Path) -> Result<StateTable, AnimError> {
    let file = std::fs::File::open(path)
        .map_err(AnimError::Io)?;
    load_state_table_reader(file)
}

/// Like [`load_state_table_csv`] but accepts any `Read` source.
pub fn load_state_table_reader<R: Read>(reader: R) -> Result<StateTable, AnimError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();

    for result in csv_reader.deserialize::<StateRecord>() {
        let row = result.map_err(|e| AnimError::Parse(e.to_string()))?;
        let name = row.state.trim();
        if name.is_empty() {
            return Err(AnimError::Parse("empty state name".into()));
        }
        entries.push(StateEntry {
            name:       name.to_owned(),
            descriptor: StateDescriptor { frame_count: row.frame_count, loops: row.loops },
        });
    }

    StateTable::new(entries)
}
