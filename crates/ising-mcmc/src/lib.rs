#![deny(missing_docs)]

//! Metropolis Monte Carlo sampler for the 2D Ising model.
//!
//! The crate owns the lattice state, the energy-delta formula, the
//! single-site Metropolis kernel and the fixed-count run driver. Rendering
//! the final configuration and writing trace files are collaborator
//! concerns handled by the `ising-sim` binary; nothing in here performs
//! device I/O apart from the explicit trace and manifest writers.

/// Deterministic seed derivation for the fill and step substreams.
pub mod determinism;
/// Energy-delta formula and the Metropolis acceptance rule.
pub mod energy;
/// Single-site proposal kernel and the public `run` entry points.
pub mod kernel;
/// Periodic-boundary spin lattice.
pub mod lattice;
/// Run manifest serialization helpers.
pub mod manifest;
/// Append-only cumulative energy trace.
pub mod trace;

pub use energy::{acceptance_probability, energy_delta};
pub use kernel::{run, run_with_cancel, RunOutput, RunSummary, StepOutcome};
pub use lattice::SpinLattice;
pub use manifest::RunManifest;
pub use trace::EnergyTrace;
