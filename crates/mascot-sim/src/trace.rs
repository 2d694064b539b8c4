//! CSV trace observer.
//!
//! One row per physics tick:
//!
//! ```csv
//! time_ms,x,y,vx,vy,facing,state,frame,behavior
//! 16,0.00,620.00,0.00,0.00,right,idle,0,explore
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use mascot_core::Millis;

use crate::{Mascot, MascotObserver};

const HEADER: [&str; 9] = ["time_ms", "x", "y", "vx", "vy", "facing", "state", "frame", "behavior"];

/// Writes a physics-tick trace as CSV.
///
/// Observer callbacks cannot fail, so the first write error is stored and
/// every later row is skipped.  Check [`take_error`][Self::take_error] after
/// the run.
pub struct CsvTraceObserver<W: Write> {
    writer: Writer<W>,
    error:  Option<csv::Error>,
    rows:   u64,
}

impl CsvTraceObserver<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> csv::Result<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> CsvTraceObserver<W> {
    /// Wrap `sink` and write the header row.
    pub fn new(sink: W) -> csv::Result<Self> {
        let mut writer = Writer::from_writer(sink);
        writer.write_record(HEADER)?;
        Ok(Self { writer, error: None, rows: 0 })
    }

    /// Rows written so far, header excluded.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// The first write error, if any.  Clears it.
    pub fn take_error(&mut self) -> Option<csv::Error> {
        self.error.take()
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    /// Flush and return the sink.
    pub fn into_inner(self) -> Result<W, csv::Error> {
        self.writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))
    }
}

impl<W: Write> MascotObserver for CsvTraceObserver<W> {
    fn on_physics_tick(&mut self, now: Millis, mascot: &Mascot) {
        if self.error.is_some() {
            return;
        }
        let body = mascot.body();
        let result = self.writer.write_record(&[
            now.0.to_string(),
            format!("{:.2}", body.position.x),
            format!("{:.2}", body.position.y),
            format!("{:.2}", body.velocity.x),
            format!("{:.2}", body.velocity.y),
            body.facing.as_str().to_owned(),
            mascot.current_state().to_owned(),
            mascot.frame_index().to_string(),
            mascot.active_behavior().unwrap_or("").to_owned(),
        ]);
        match result {
            Ok(()) => self.rows += 1,
            Err(err) => {
                tracing::warn!(error = %err, "trace write failed, dropping further rows");
                self.error = Some(err);
            }
        }
    }
}
