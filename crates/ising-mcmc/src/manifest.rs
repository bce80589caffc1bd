use std::fs;
use std::path::{Path, PathBuf};

use ising_core::errors::ErrorInfo;
use ising_core::{IsingError, SimulationParameters};
use serde::{Deserialize, Serialize};

/// Structured manifest describing a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    /// Parameters used for the run.
    pub params: SimulationParameters,
    /// Master seed from which the fill and step substreams were derived.
    pub master_seed: u64,
    /// Canonical hash of the final lattice configuration.
    pub lattice_hash: String,
    /// Number of accepted flips (trace length).
    pub trace_length: usize,
    /// Cumulative energy after the final accepted flip.
    pub final_energy: f64,
    /// Trace table written for the run, if any.
    pub trace_file: Option<PathBuf>,
    /// Lattice snapshot image written for the run, if any.
    pub image_file: Option<PathBuf>,
}

impl RunManifest {
    /// Writes the manifest to a JSON file.
    pub fn write(&self, path: &Path) -> Result<(), IsingError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                IsingError::Serde(
                    ErrorInfo::new("manifest-mkdir", err.to_string())
                        .with_context("path", parent.display().to_string()),
                )
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            IsingError::Serde(
                ErrorInfo::new("manifest-serialize", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        fs::write(path, json).map_err(|err| {
            IsingError::Serde(
                ErrorInfo::new("manifest-write", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }

    /// Loads a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, IsingError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            IsingError::Serde(
                ErrorInfo::new("manifest-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        serde_json::from_str(&contents).map_err(|err| {
            IsingError::Serde(
                ErrorInfo::new("manifest-parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }
}
