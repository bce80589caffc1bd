use ising_core::derive_substream_seed;

/// Substream identifier for the initial lattice fill.
const FILL_SUBSTREAM: u64 = 0;
/// Substream identifier for the proposal loop.
const STEP_SUBSTREAM: u64 = 1;

/// Derives the deterministic seed used to fill the initial lattice.
///
/// The fill and step streams are independent, so the initial configuration
/// for a given master seed does not depend on how many steps follow it.
pub fn fill_seed(master_seed: u64) -> u64 {
    derive_substream_seed(master_seed, FILL_SUBSTREAM)
}

/// Derives the deterministic seed driving the proposal loop.
pub fn step_seed(master_seed: u64) -> u64 {
    derive_substream_seed(master_seed, STEP_SUBSTREAM)
}
