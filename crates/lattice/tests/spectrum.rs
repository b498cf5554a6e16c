use lattice::{
    classify,
    classify::adaptive_tolerance,
    diagonalize,
    edge::{bulk_profile, zero_mode_profiles},
    hamiltonian::{count_offdiagonal_nonzeros, is_hermitian},
    ssh_hamiltonian,
    sweep::{linspace, sweep_intercell},
    winding::winding_number,
    Boundary, LatticeError, Phase, SshParams, Verdict, ZeroTolerance,
};

#[test]
fn hamiltonian_is_hermitian_for_all_sizes() {
    for n in 1..=12 {
        let h = ssh_hamiltonian(&SshParams::new(n, 0.8, 1.3)).unwrap();
        assert_eq!(h.nrows(), 2 * n);
        assert!(is_hermitian(&h, 0.0), "N = {}", n);
    }
}

#[test]
fn open_chain_has_two_entries_per_bond() {
    for n in 1..=10 {
        let h = ssh_hamiltonian(&SshParams::new(n, 0.5, 1.5)).unwrap();
        // 2N - 1 bonds, each mirrored
        assert_eq!(count_offdiagonal_nonzeros(&h), 4 * n - 2, "N = {}", n);
        for i in 0..2 * n {
            assert_eq!(h.read(i, i), 0.0);
        }
    }
}

#[test]
fn periodic_chain_has_4n_entries() {
    for n in 2..=10 {
        let params = SshParams::new(n, 0.5, 1.5).with_boundary(Boundary::Periodic);
        let h = ssh_hamiltonian(&params).unwrap();
        assert_eq!(count_offdiagonal_nonzeros(&h), 4 * n, "N = {}", n);
        assert_eq!(h.read(2 * n - 1, 0), 1.5);
    }
}

#[test]
fn bond_placement_matches_cells() {
    let n = 4;
    let h = ssh_hamiltonian(&SshParams::new(n, 0.25, 2.0)).unwrap();
    for i in 0..n {
        assert_eq!(h.read(2 * i, 2 * i + 1), 0.25);
        assert_eq!(h.read(2 * i + 1, 2 * i), 0.25);
        if i + 1 < n {
            assert_eq!(h.read(2 * i + 1, 2 * i + 2), 2.0);
            assert_eq!(h.read(2 * i + 2, 2 * i + 1), 2.0);
        }
    }
    assert_eq!(h.read(2 * n - 1, 0), 0.0);
}

#[test]
fn rejects_empty_chain_and_nan() {
    assert!(matches!(
        ssh_hamiltonian(&SshParams::new(0, 1.0, 1.0)),
        Err(LatticeError::NoCells(0))
    ));
    assert!(matches!(
        ssh_hamiltonian(&SshParams::new(3, f64::NAN, 1.0)),
        Err(LatticeError::NonFiniteHopping { name: "v", .. })
    ));
}

#[test]
fn builder_is_pure() {
    let params = SshParams::new(7, 0.37, 1.91);
    let a = ssh_hamiltonian(&params).unwrap();
    let b = ssh_hamiltonian(&params).unwrap();
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            assert_eq!(a.read(i, j).to_bits(), b.read(i, j).to_bits());
        }
    }
}

#[test]
fn uniform_chain_closes_gap_with_size() {
    let small = diagonalize(&ssh_hamiltonian(&SshParams::new(5, 1.0, 1.0)).unwrap());
    let large = diagonalize(&ssh_hamiltonian(&SshParams::new(40, 1.0, 1.0)).unwrap());

    let e_small = small.min_abs_energy().unwrap();
    let e_large = large.min_abs_energy().unwrap();
    assert!(e_large < e_small, "{} !< {}", e_large, e_small);
    assert!(e_large < 0.1, "min |E| = {}", e_large);
}

#[test]
fn topological_chain_has_two_zero_modes() {
    let params = SshParams::new(20, 0.5, 1.5);
    let spec = diagonalize(&ssh_hamiltonian(&params).unwrap());

    assert_eq!(spec.near_zero(1e-3).len(), 2);

    let bulk_edge = (params.w - params.v).abs();
    let outside = spec.energies.iter().filter(|e| e.abs() > 1e-3);
    for e in outside {
        assert!(e.abs() >= 0.99 * bulk_edge, "E = {} inside the gap", e);
    }

    let c = classify(&params, &spec, ZeroTolerance::default());
    assert_eq!(c.phase, Phase::Topological);
    assert_eq!(c.zero_modes, 2);
    assert_eq!(c.verdict, Verdict::TopologicalEdgeModes);
}

#[test]
fn trivial_chain_has_no_zero_modes() {
    let params = SshParams::new(20, 1.5, 0.5);
    let spec = diagonalize(&ssh_hamiltonian(&params).unwrap());

    assert_eq!(spec.near_zero(1e-3).len(), 0);

    let c = classify(&params, &spec, ZeroTolerance::default());
    assert_eq!(c.phase, Phase::Trivial);
    assert_eq!(c.verdict, Verdict::TrivialGapped);
}

#[test]
fn spectrum_is_chiral_symmetric() {
    let spec = diagonalize(&ssh_hamiltonian(&SshParams::new(9, 0.6, 1.1)).unwrap());
    let n = spec.len();
    for k in 0..n {
        assert!((spec.energies[k] + spec.energies[n - 1 - k]).abs() < 1e-10);
    }
}

#[test]
fn short_chain_needs_adaptive_tolerance() {
    // Edge splitting at N = 4 is ~1.6e-2, well above the fixed window.
    let params = SshParams::new(4, 0.5, 1.5);
    let spec = diagonalize(&ssh_hamiltonian(&params).unwrap());

    let fixed = classify(&params, &spec, ZeroTolerance::Fixed(1e-3));
    assert_eq!(fixed.verdict, Verdict::TrivialGapped);

    let adaptive = classify(&params, &spec, ZeroTolerance::Adaptive);
    assert_eq!(adaptive.zero_modes, 2, "tol = {}", adaptive.tolerance);
    assert_eq!(adaptive.verdict, Verdict::TopologicalEdgeModes);
}

#[test]
fn adaptive_tolerance_stays_inside_gap() {
    let cases = [
        (20, 0.5, 1.5),
        (3, 0.9, 1.0),
        (10, 1.5, 0.5),
        (6, 0.0, 1.0),
        (1, 0.5, 1.5),
    ];
    for &(n, v, w) in &cases {
        let params = SshParams::new(n, v, w);
        let tol = adaptive_tolerance(&params);
        let gap = (w - v).abs();
        assert!(tol > 0.0 && tol <= gap / 2.0, "tol = {} gap = {}", tol, gap);
    }
}

#[test]
fn single_dimer_is_not_topological() {
    // N = 1 has no intercell bond; its ±v levels are bulk, not edge modes
    let params = SshParams::new(1, 0.5, 1.5);
    let spec = diagonalize(&ssh_hamiltonian(&params).unwrap());
    let c = classify(&params, &spec, ZeroTolerance::Adaptive);
    assert!(c.tolerance < 0.5, "tol = {}", c.tolerance);
    assert_eq!(c.zero_modes, 0);
    assert_eq!(c.verdict, Verdict::TrivialGapped);
}

#[test]
fn critical_point_is_never_topological() {
    let params = SshParams::new(20, 1.0, 1.0);
    let spec = diagonalize(&ssh_hamiltonian(&params).unwrap());
    let c = classify(&params, &spec, ZeroTolerance::default());
    assert_eq!(c.phase, Phase::Critical);
    assert_eq!(c.verdict, Verdict::TrivialGapped);
}

#[test]
fn periodic_ring_has_no_edge_modes() {
    let params = SshParams::new(20, 0.5, 1.5).with_boundary(Boundary::Periodic);
    let spec = diagonalize(&ssh_hamiltonian(&params).unwrap());
    assert_eq!(spec.near_zero(1e-3).len(), 0);
    let band_edge = spec.gap_above_zero(1e-3).unwrap();
    assert!((band_edge - 1.0).abs() < 1e-9, "band edge = {}", band_edge);
}

#[test]
fn winding_matches_phase() {
    assert_eq!(winding_number(1.5, 0.5, 512), Some(0));
    assert_eq!(winding_number(0.5, 1.5, 512), Some(1));
    assert_eq!(winding_number(1.0, 1.0, 512), None);
}

#[test]
fn zero_modes_live_on_the_edges() {
    let params = SshParams::new(20, 0.5, 1.5);
    let spec = diagonalize(&ssh_hamiltonian(&params).unwrap());

    let modes = zero_mode_profiles(&spec, 1e-3);
    assert_eq!(modes.len(), 2);
    for m in &modes {
        let total: f64 = m.density.iter().sum();
        assert!((total - 1.0).abs() < 1e-10);
        assert!(m.edge_weight > 0.8, "edge weight = {}", m.edge_weight);
    }

    let trivial = SshParams::new(20, 1.0, 0.5);
    let spec = diagonalize(&ssh_hamiltonian(&trivial).unwrap());
    let bulk = bulk_profile(&spec).unwrap();
    assert!(bulk.edge_weight < 0.5, "edge weight = {}", bulk.edge_weight);
}

#[test]
fn sweep_crosses_the_transition() {
    let ws = linspace(0.0, 2.5, 26);
    let points = sweep_intercell(10, 1.0, &ws).unwrap();
    assert_eq!(points.len(), 26);

    for p in &points {
        assert_eq!(p.energies.len(), 20);
        let zeros = p.energies.iter().filter(|e| e.abs() < 1e-3).count();
        if p.w < 0.9 {
            assert_eq!(zeros, 0, "w = {}", p.w);
        }
        if p.w > 2.25 {
            assert_eq!(zeros, 2, "w = {}", p.w);
        }
    }
}
