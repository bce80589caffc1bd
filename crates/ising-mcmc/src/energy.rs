//! Energy-delta formula and the Metropolis acceptance rule.

use ising_core::SimulationParameters;

/// Energy change from flipping a spin `s0` whose neighbors sum to
/// `neighbor_sum`: `dE = 2 * s0 * (H + J * Sn)`.
///
/// Exact for every `s0` in `{-1, 1}` and `neighbor_sum` in
/// `{-4, -2, 0, 2, 4}`.
pub fn energy_delta(s0: i8, neighbor_sum: i8, params: &SimulationParameters) -> f64 {
    2.0 * s0 as f64 * (params.field + params.coupling * neighbor_sum as f64)
}

/// Metropolis acceptance probability for a proposed flip.
///
/// Favorable moves (`delta < 0`) are always accepted. Unfavorable moves are
/// accepted with probability `exp(-delta / T)`, clamped to `[0, 1]`. At
/// `T = 0` the exponential is undefined, so the explicit zero-temperature
/// policy applies: accept exactly when `delta <= 0`. No NaN or infinity ever
/// leaves this function for validated parameters.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta < 0.0 {
        return 1.0;
    }
    if temperature == 0.0 {
        return if delta <= 0.0 { 1.0 } else { 0.0 };
    }
    (-delta / temperature).exp().min(1.0)
}
