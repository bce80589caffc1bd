//! Single-site Metropolis kernel and the fixed-count run driver.

use ising_core::errors::ErrorInfo;
use ising_core::{IsingError, RngHandle, SimulationParameters};
use serde::{Deserialize, Serialize};

use crate::determinism;
use crate::energy;
use crate::lattice::SpinLattice;
use crate::trace::EnergyTrace;

/// Outcome of a single proposal evaluated by the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Site `(i, j)` that was proposed for flipping.
    pub site: (usize, usize),
    /// Energy delta of the proposed flip.
    pub delta_energy: f64,
    /// Whether the proposal was accepted.
    pub accepted: bool,
}

/// Summary statistics returned to callers after a run completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of proposals evaluated (always equal to `params.steps`).
    pub proposed: usize,
    /// Number of accepted flips.
    pub accepted: usize,
    /// Fraction of proposals accepted.
    pub acceptance_rate: f64,
    /// Cumulative running energy after the final accepted flip.
    pub final_energy: f64,
    /// Configurational energy of the final lattice.
    pub total_energy: f64,
    /// Mean spin of the final lattice.
    pub magnetization: f64,
    /// Canonical hash of the final lattice configuration.
    pub lattice_hash: String,
}

/// Final lattice, energy trace and summary produced by a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutput {
    /// Final spin configuration.
    pub lattice: SpinLattice,
    /// Cumulative energy after each accepted flip.
    pub trace: EnergyTrace,
    /// Aggregate statistics for the run.
    pub summary: RunSummary,
}

/// Performs one proposal-accept/reject cycle against the lattice.
///
/// Picks a site uniformly, computes `dE = 2 * S0 * (H + J * Sn)` and accepts
/// with the Metropolis rule. On acceptance the spin is flipped, the running
/// energy is advanced by `dE` and the new cumulative energy is appended to
/// the trace. A rejected proposal mutates nothing and leaves no trace entry.
pub fn step(
    lattice: &mut SpinLattice,
    params: &SimulationParameters,
    rng: &mut RngHandle,
    trace: &mut EnergyTrace,
    running_energy: &mut f64,
) -> StepOutcome {
    let n = lattice.side();
    let i = rng.uniform_index(n);
    let j = rng.uniform_index(n);

    let s0 = lattice.spin(i as i64, j as i64);
    let neighbor_sum = lattice.neighbor_sum(i as i64, j as i64);
    let delta = energy::energy_delta(s0, neighbor_sum, params);

    let accepted = if delta < 0.0 {
        true
    } else if params.temperature == 0.0 {
        // Zero-temperature policy: accept only when the move costs nothing.
        delta <= 0.0
    } else {
        rng.uniform_unit() < energy::acceptance_probability(delta, params.temperature)
    };

    if accepted {
        lattice.flip(i as i64, j as i64);
        *running_energy += delta;
        trace.push(*running_energy);
    }

    StepOutcome {
        site: (i, j),
        delta_energy: delta,
        accepted,
    }
}

/// Runs the Metropolis sampler from scratch with the provided parameters
/// and master seed.
///
/// The lattice fill and the proposal loop each consume a substream derived
/// from the master seed, so two runs with the same seed and parameters
/// produce bit-identical lattices and traces. Exactly `params.steps`
/// proposals are evaluated; the iteration count is the only stopping
/// criterion.
pub fn run(params: &SimulationParameters, seed: u64) -> Result<RunOutput, IsingError> {
    run_with_cancel(params, seed, || false)
}

/// Same as [`run`], polling `cancelled` between steps.
///
/// When the poll returns `true` the run aborts with
/// [`IsingError::Cancelled`] and produces no output, matching the
/// all-or-nothing contract of the driver.
pub fn run_with_cancel(
    params: &SimulationParameters,
    seed: u64,
    mut cancelled: impl FnMut() -> bool,
) -> Result<RunOutput, IsingError> {
    params.validate()?;

    let mut fill_rng = RngHandle::from_seed(determinism::fill_seed(seed));
    let mut lattice = SpinLattice::random_fill(params.size, &mut fill_rng)?;

    let mut step_rng = RngHandle::from_seed(determinism::step_seed(seed));
    let mut trace = EnergyTrace::new();
    let mut running_energy = 0.0;
    let mut accepted = 0usize;

    for step_index in 0..params.steps {
        if cancelled() {
            return Err(IsingError::Cancelled(
                ErrorInfo::new("run-cancelled", "run aborted before completing all steps")
                    .with_context("completed_steps", step_index.to_string())
                    .with_context("total_steps", params.steps.to_string()),
            ));
        }
        let outcome = step(
            &mut lattice,
            params,
            &mut step_rng,
            &mut trace,
            &mut running_energy,
        );
        if outcome.accepted {
            accepted += 1;
        }
    }

    let acceptance_rate = if params.steps == 0 {
        0.0
    } else {
        accepted as f64 / params.steps as f64
    };
    let summary = RunSummary {
        proposed: params.steps,
        accepted,
        acceptance_rate,
        final_energy: running_energy,
        total_energy: lattice.total_energy(params.field, params.coupling),
        magnetization: lattice.magnetization(),
        lattice_hash: lattice.canonical_hash(),
    };

    Ok(RunOutput {
        lattice,
        trace,
        summary,
    })
}
