use ising_core::{RngHandle, SimulationParameters};
use ising_mcmc::{run, SpinLattice};
use proptest::prelude::*;

fn check_cells(lattice: &SpinLattice) {
    assert!(lattice.spins().iter().all(|&s| s == -1 || s == 1));
}

proptest! {
    #[test]
    fn random_fill_produces_valid_spins(seed in any::<u64>(), side in 1usize..12) {
        let mut rng = RngHandle::from_seed(seed);
        let lattice = SpinLattice::random_fill(side, &mut rng).unwrap();
        check_cells(&lattice);
        prop_assert_eq!(lattice.num_sites(), side * side);
    }

    #[test]
    fn neighbor_sum_stays_in_allowed_set(seed in any::<u64>(), side in 1usize..10) {
        let mut rng = RngHandle::from_seed(seed);
        let lattice = SpinLattice::random_fill(side, &mut rng).unwrap();
        for i in 0..side as i64 {
            for j in 0..side as i64 {
                let sum = lattice.neighbor_sum(i, j);
                prop_assert!([-4, -2, 0, 2, 4].contains(&sum));
            }
        }
    }

    #[test]
    fn wrap_is_true_mathematical_modulo(seed in any::<u64>(), side in 1usize..10) {
        let mut rng = RngHandle::from_seed(seed);
        let lattice = SpinLattice::random_fill(side, &mut rng).unwrap();
        let n = side as i64;
        for i in 0..n {
            for j in 0..n {
                prop_assert_eq!(lattice.spin(i - n, j), lattice.spin(i, j));
                prop_assert_eq!(lattice.spin(i, j - n), lattice.spin(i, j));
                prop_assert_eq!(lattice.spin(i + n, j + n), lattice.spin(i, j));
            }
        }
    }

    #[test]
    fn runs_preserve_spin_invariant_and_trace_shape(
        seed in any::<u64>(),
        side in 1usize..8,
        steps in 0usize..300,
        field in -2.0f64..2.0,
        coupling in -5.0f64..5.0,
        temperature in 0.0f64..3.0,
    ) {
        let params =
            SimulationParameters::new(side, steps, field, coupling, temperature).unwrap();
        let output = run(&params, seed).unwrap();
        check_cells(&output.lattice);
        prop_assert!(output.trace.len() <= steps);

        // Every trace increment must be a reachable energy delta.
        let allowed: Vec<f64> = [-1.0f64, 1.0]
            .iter()
            .flat_map(|&s0| {
                [-4.0f64, -2.0, 0.0, 2.0, 4.0]
                    .iter()
                    .map(move |&sn| 2.0 * s0 * (field + coupling * sn))
                    .collect::<Vec<_>>()
            })
            .collect();
        let mut previous = 0.0;
        for &entry in output.trace.entries() {
            let delta = entry - previous;
            prop_assert!(
                allowed.iter().any(|&a| (a - delta).abs() < 1e-9),
                "unreachable delta {}", delta
            );
            previous = entry;
        }
    }
}

#[test]
fn edge_sites_wrap_to_opposite_edge() {
    let mut rng = RngHandle::from_seed(21);
    let lattice = SpinLattice::random_fill(5, &mut rng).unwrap();
    let n = 5i64;

    // Row 0 reaches row n-1 upward; row n-1 reaches row 0 downward.
    for j in 0..n {
        let top = lattice.spin(-1, j);
        assert_eq!(top, lattice.spin(n - 1, j));
        let bottom = lattice.spin(n, j);
        assert_eq!(bottom, lattice.spin(0, j));
    }
    for i in 0..n {
        assert_eq!(lattice.spin(i, -1), lattice.spin(i, n - 1));
        assert_eq!(lattice.spin(i, n), lattice.spin(i, 0));
    }
}

#[test]
fn single_site_lattice_neighbors_itself() {
    let lattice = SpinLattice::filled(1, 1).unwrap();
    // All four neighbors wrap back to the only cell.
    assert_eq!(lattice.neighbor_sum(0, 0), 4);
}

#[test]
fn uniform_lattice_observables() {
    let lattice = SpinLattice::filled(4, 1).unwrap();
    assert_eq!(lattice.magnetization(), 1.0);
    // 16 sites, 32 bonds, all aligned: E = -J * 32 - H * 16.
    assert_eq!(lattice.total_energy(0.5, 2.0), -2.0 * 32.0 - 0.5 * 16.0);

    let down = SpinLattice::filled(4, -1).unwrap();
    assert_eq!(down.magnetization(), -1.0);
    assert_eq!(down.total_energy(0.5, 2.0), -2.0 * 32.0 + 0.5 * 16.0);
}
