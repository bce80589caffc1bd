//! Validated simulation parameters.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, IsingError};

/// Immutable parameter set governing a single Metropolis run.
///
/// Validation happens once, before the step loop starts; the kernel never
/// re-checks these values. `steps` being unsigned makes a negative step
/// count unrepresentable. A temperature of exactly zero is legal and selects
/// the explicit zero-temperature acceptance policy (accept only when the
/// energy delta is non-positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Lattice side length `n`; the lattice holds `n * n` spins.
    #[serde(default = "default_size")]
    pub size: usize,
    /// Number of flip proposals to evaluate.
    #[serde(default = "default_steps")]
    pub steps: usize,
    /// External field `H`.
    #[serde(default)]
    pub field: f64,
    /// Neighbor coupling constant `J`.
    #[serde(default = "default_coupling")]
    pub coupling: f64,
    /// Temperature `T`.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_size() -> usize {
    100
}

fn default_steps() -> usize {
    500_000
}

fn default_coupling() -> f64 {
    -5.0
}

fn default_temperature() -> f64 {
    0.1
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            size: default_size(),
            steps: default_steps(),
            field: 0.0,
            coupling: default_coupling(),
            temperature: default_temperature(),
        }
    }
}

impl SimulationParameters {
    /// Creates a validated parameter set.
    pub fn new(
        size: usize,
        steps: usize,
        field: f64,
        coupling: f64,
        temperature: f64,
    ) -> Result<Self, IsingError> {
        let params = Self {
            size,
            steps,
            field,
            coupling,
            temperature,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks every invariant required before a run may start.
    pub fn validate(&self) -> Result<(), IsingError> {
        if self.size == 0 {
            return Err(IsingError::Config(
                ErrorInfo::new("params-size", "lattice side length must be positive")
                    .with_context("size", self.size.to_string()),
            ));
        }
        for (name, value) in [
            ("field", self.field),
            ("coupling", self.coupling),
            ("temperature", self.temperature),
        ] {
            if !value.is_finite() {
                return Err(IsingError::Config(
                    ErrorInfo::new("params-finite", format!("{name} must be finite"))
                        .with_context(name, value.to_string()),
                ));
            }
        }
        if self.temperature < 0.0 {
            return Err(IsingError::Config(
                ErrorInfo::new("params-temperature", "temperature must be non-negative")
                    .with_context("temperature", self.temperature.to_string())
                    .with_hint("T = 0 is accepted and uses the zero-temperature policy"),
            ));
        }
        Ok(())
    }
}
