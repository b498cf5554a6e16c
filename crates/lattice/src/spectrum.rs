//! Dense self-adjoint eigendecomposition.

use faer::{Mat, Side};

/// Eigenvalues and eigenstates of a real symmetric matrix.
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Eigenvalues in ascending order.
    pub energies: Vec<f64>,
    /// Normalized eigenvectors, `states[k]` belongs to `energies[k]`.
    pub states: Vec<Vec<f64>>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    /// Indices of eigenvalues with |E| <= tol, ascending in |E|.
    pub fn near_zero(&self, tol: f64) -> Vec<usize> {
        let mut idx: Vec<usize> = (0..self.energies.len())
            .filter(|&k| self.energies[k].abs() <= tol)
            .collect();
        idx.sort_by(|&a, &b| self.energies[a].abs().total_cmp(&self.energies[b].abs()));
        idx
    }

    pub fn min_abs_energy(&self) -> Option<f64> {
        self.energies
            .iter()
            .map(|e| e.abs())
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Smallest |E| among states outside the near-zero set.
    ///
    /// For a gapped chain this is the bulk band edge; the full gap is twice it.
    pub fn gap_above_zero(&self, tol: f64) -> Option<f64> {
        self.energies
            .iter()
            .map(|e| e.abs())
            .filter(|e| *e > tol)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// State indices sorted by |E| ascending.
    pub fn by_abs_energy(&self) -> Vec<usize> {
        let mut idx: Vec<usize> = (0..self.energies.len()).collect();
        idx.sort_by(|&a, &b| self.energies[a].abs().total_cmp(&self.energies[b].abs()));
        idx
    }
}

/// Full diagonalization of a real symmetric matrix.
pub fn diagonalize(h: &Mat<f64>) -> Spectrum {
    let eig = h.selfadjoint_eigendecomposition(Side::Lower);
    let s = eig.s().column_vector();
    let u = eig.u();

    let mut order: Vec<usize> = (0..s.nrows()).collect();
    order.sort_by(|&a, &b| s.read(a).total_cmp(&s.read(b)));

    let energies = order.iter().map(|&k| s.read(k)).collect();
    let states = order
        .iter()
        .map(|&k| (0..u.nrows()).map(|i| u.read(i, k)).collect())
        .collect();

    Spectrum { energies, states }
}

/// Eigenvalues only, ascending.
pub fn eigenvalues(h: &Mat<f64>) -> Vec<f64> {
    let mut evals = h.selfadjoint_eigenvalues(Side::Lower);
    evals.sort_by(|a, b| a.total_cmp(b));
    evals
}
