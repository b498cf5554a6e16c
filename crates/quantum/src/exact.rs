//! Exact eigenvalues of a qubit Hamiltonian, for checking phase readouts.

use faer::Mat;

use crate::error::{QuantumError, QuantumResult};
use crate::hamiltonian::PauliHamiltonian;

/// Dense diagonalization gets expensive quickly; the embedding doubles the
/// dimension again.
pub const EXACT_MAX_QUBITS: usize = 10;

/// All 2^n eigenvalues of `h` on `n_qubits`, ascending, with multiplicity.
///
/// A Hermitian H = A + iB is diagonalized through the real symmetric
/// [[A, −B], [B, A]], whose spectrum is that of H with every level doubled.
pub fn exact_eigenvalues(h: &PauliHamiltonian, n_qubits: usize) -> QuantumResult<Vec<f64>> {
    if n_qubits > EXACT_MAX_QUBITS {
        return Err(QuantumError::TooManyQubits {
            requested: n_qubits,
            max: EXACT_MAX_QUBITS,
        });
    }
    let dense = h.to_dense(n_qubits)?;
    let d = dense.len();

    let embedded = Mat::<f64>::from_fn(2 * d, 2 * d, |i, j| {
        let z = dense[i % d][j % d];
        match (i < d, j < d) {
            (true, true) | (false, false) => z.re,
            (true, false) => -z.im,
            (false, true) => z.im,
        }
    });

    let doubled = lattice::eigenvalues(&embedded);
    Ok(doubled.into_iter().step_by(2).collect())
}

/// The value in `reference` closest to `energy`, if any.
pub fn nearest(reference: &[f64], energy: f64) -> Option<f64> {
    reference
        .iter()
        .copied()
        .min_by(|a, b| (a - energy).abs().total_cmp(&(b - energy).abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hamiltonian::{PauliOp, PauliString, PauliTerm};

    #[test]
    fn single_z_has_plus_minus_levels() {
        let h = PauliHamiltonian::from_terms(vec![PauliTerm::z(0, 0.7)]);
        let evals = exact_eigenvalues(&h, 1).unwrap();
        assert_eq!(evals.len(), 2);
        assert!((evals[0] + 0.7).abs() < 1e-12);
        assert!((evals[1] - 0.7).abs() < 1e-12);
    }

    #[test]
    fn complex_entries_survive_the_embedding() {
        // Y has purely imaginary entries; Y + Z has eigenvalues ±√2
        let y = PauliString::from_ops([(0, PauliOp::Y)]);
        let h = PauliHamiltonian::from_terms(vec![PauliTerm::new(1.0, y), PauliTerm::z(0, 1.0)]);
        let evals = exact_eigenvalues(&h, 1).unwrap();
        let r = 2.0_f64.sqrt();
        let expected = [-r, r];
        for (e, x) in evals.iter().zip(expected) {
            assert!((e - x).abs() < 1e-10, "{:?}", evals);
        }
    }

    #[test]
    fn nearest_picks_closest() {
        assert_eq!(nearest(&[-1.0, 0.0, 2.0], 0.8), Some(0.0));
        assert_eq!(nearest(&[], 0.8), None);
    }
}
