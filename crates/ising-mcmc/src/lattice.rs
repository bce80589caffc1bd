//! Periodic-boundary square lattice of binary spins.

use ising_core::errors::ErrorInfo;
use ising_core::{IsingError, RngHandle};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// An `n x n` torus of spins, each cell holding exactly `-1` or `+1`.
///
/// Indices are signed and wrap with true mathematical modulo, so `spin(-1, 0)`
/// reads the last row. Cells are mutated one at a time through [`flip`];
/// nothing else writes to the grid after the initial fill.
///
/// [`flip`]: SpinLattice::flip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinLattice {
    side: usize,
    spins: Vec<i8>,
}

impl SpinLattice {
    /// Allocates an `n x n` lattice with every cell drawn independently as
    /// `-1` or `+1` with equal probability.
    pub fn random_fill(side: usize, rng: &mut RngHandle) -> Result<Self, IsingError> {
        if side == 0 {
            return Err(IsingError::Config(
                ErrorInfo::new("lattice-size", "lattice side length must be positive")
                    .with_context("side", side.to_string()),
            ));
        }
        let spins = (0..side * side)
            .map(|_| if rng.uniform_index(2) == 0 { -1 } else { 1 })
            .collect();
        Ok(Self { side, spins })
    }

    /// Allocates an `n x n` lattice with every cell set to `spin`.
    ///
    /// Useful for tests and for preparing ordered starting configurations.
    pub fn filled(side: usize, spin: i8) -> Result<Self, IsingError> {
        if side == 0 {
            return Err(IsingError::Config(
                ErrorInfo::new("lattice-size", "lattice side length must be positive")
                    .with_context("side", side.to_string()),
            ));
        }
        if spin != -1 && spin != 1 {
            return Err(IsingError::Lattice(
                ErrorInfo::new("lattice-spin", "spin values must be -1 or +1")
                    .with_context("spin", spin.to_string()),
            ));
        }
        Ok(Self {
            side,
            spins: vec![spin; side * side],
        })
    }

    /// Returns the side length `n`.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the total number of sites, `n * n`.
    pub fn num_sites(&self) -> usize {
        self.spins.len()
    }

    /// Returns the raw spin values in row-major order.
    pub fn spins(&self) -> &[i8] {
        &self.spins
    }

    fn wrapped_offset(&self, i: i64, j: i64) -> usize {
        let n = self.side as i64;
        let row = i.rem_euclid(n) as usize;
        let col = j.rem_euclid(n) as usize;
        row * self.side + col
    }

    /// Returns the spin at wrapped indices `(i mod n, j mod n)`.
    pub fn spin(&self, i: i64, j: i64) -> i8 {
        self.spins[self.wrapped_offset(i, j)]
    }

    /// Sums the four von Neumann neighbors of `(i, j)` through the periodic
    /// wrap. The result is always one of `{-4, -2, 0, 2, 4}`.
    pub fn neighbor_sum(&self, i: i64, j: i64) -> i8 {
        self.spin(i - 1, j) + self.spin(i + 1, j) + self.spin(i, j - 1) + self.spin(i, j + 1)
    }

    /// Negates the spin at `(i, j)` in place.
    pub fn flip(&mut self, i: i64, j: i64) {
        let offset = self.wrapped_offset(i, j);
        self.spins[offset] = -self.spins[offset];
    }

    /// Mean spin over all sites.
    pub fn magnetization(&self) -> f64 {
        let sum: i64 = self.spins.iter().map(|&s| s as i64).sum();
        sum as f64 / self.num_sites() as f64
    }

    /// Total configurational energy `-J * sum_<ij> s_i s_j - H * sum_i s_i`,
    /// counting each nearest-neighbor bond once.
    pub fn total_energy(&self, field: f64, coupling: f64) -> f64 {
        let mut bond_sum = 0i64;
        let mut spin_sum = 0i64;
        for i in 0..self.side as i64 {
            for j in 0..self.side as i64 {
                let s = self.spin(i, j) as i64;
                spin_sum += s;
                bond_sum += s * (self.spin(i + 1, j) as i64 + self.spin(i, j + 1) as i64);
            }
        }
        -coupling * bond_sum as f64 - field * spin_sum as f64
    }

    /// Computes the canonical structural hash of the configuration.
    pub fn canonical_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.side as u64).to_le_bytes());
        for &spin in &self.spins {
            hasher.update((spin as i64).to_le_bytes());
        }
        let digest = hasher.finalize();
        digest
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .collect::<String>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_indices_wrap_to_opposite_edge() {
        let mut rng = RngHandle::from_seed(3);
        let lattice = SpinLattice::random_fill(5, &mut rng).unwrap();
        assert_eq!(lattice.spin(-1, 0), lattice.spin(4, 0));
        assert_eq!(lattice.spin(0, -1), lattice.spin(0, 4));
        assert_eq!(lattice.spin(5, 2), lattice.spin(0, 2));
    }

    #[test]
    fn zero_side_is_rejected() {
        let mut rng = RngHandle::from_seed(3);
        let err = SpinLattice::random_fill(0, &mut rng).unwrap_err();
        assert_eq!(err.info().code, "lattice-size");
    }
}
