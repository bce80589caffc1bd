//! Append-only record of cumulative energy after each accepted flip.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Ordered sequence of cumulative system energies, one entry per accepted
/// flip. Rejected proposals leave no entry, so the length is at most the
/// number of attempted steps. Entries are never modified or removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyTrace {
    entries: Vec<f64>,
}

impl EnergyTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty trace with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Appends the cumulative energy observed after an accepted flip.
    pub fn push(&mut self, energy: f64) {
        self.entries.push(energy);
    }

    /// Returns the recorded entries in acceptance order.
    pub fn entries(&self) -> &[f64] {
        &self.entries
    }

    /// Number of accepted flips recorded so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no flip has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Last recorded cumulative energy, if any flip was accepted.
    pub fn last(&self) -> Option<f64> {
        self.entries.last().copied()
    }

    /// Writes the trace as a two-column text table, `index<TAB>energy`,
    /// one line per entry in trace order.
    pub fn write_table<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        for (index, energy) in self.entries.iter().enumerate() {
            writeln!(file, "{}\t{:.6}", index, energy)?;
        }
        Ok(())
    }
}
