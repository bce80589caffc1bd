#![deny(missing_docs)]

//! Shared foundation for the ising-mc workspace: the canonical error type,
//! the deterministic RNG handle, and validated simulation parameters.

pub mod errors;
pub mod params;
pub mod rng;

pub use errors::{ErrorInfo, IsingError};
pub use params::SimulationParameters;
pub use rng::{derive_substream_seed, RngHandle};
