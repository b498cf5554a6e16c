//! Qubit Hamiltonians as sums of weighted Pauli strings.
//!
//!   H = Σ_k  c_k · P_k
//!
//! and the Jordan–Wigner image of the SSH hopping model.

use lattice::SshParams;

use crate::error::{QuantumError, QuantumResult};
use crate::gates::C64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PauliOp {
    I,
    X,
    Y,
    Z,
}

/// Tensor product of Pauli operators, identities omitted, sorted by qubit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PauliString {
    ops: Vec<(usize, PauliOp)>,
}

impl PauliString {
    pub fn from_ops(ops: impl IntoIterator<Item = (usize, PauliOp)>) -> Self {
        let mut v: Vec<(usize, PauliOp)> = ops
            .into_iter()
            .filter(|(_, op)| *op != PauliOp::I)
            .collect();
        v.sort_by_key(|(q, _)| *q);
        Self { ops: v }
    }

    pub fn ops(&self) -> &[(usize, PauliOp)] {
        &self.ops
    }

    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn max_qubit(&self) -> Option<usize> {
        self.ops.last().map(|(q, _)| *q)
    }

    /// P|basis⟩ = phase · |image⟩ for a computational basis index.
    pub fn apply_to_basis(&self, basis: usize) -> (usize, C64) {
        let mut image = basis;
        let mut phase = C64::new(1.0, 0.0);
        for &(q, op) in &self.ops {
            let bit = (basis >> q) & 1;
            match op {
                PauliOp::I => {}
                PauliOp::X => image ^= 1 << q,
                PauliOp::Y => {
                    image ^= 1 << q;
                    // Y|0⟩ = i|1⟩, Y|1⟩ = -i|0⟩
                    phase *= if bit == 0 {
                        C64::new(0.0, 1.0)
                    } else {
                        C64::new(0.0, -1.0)
                    };
                }
                PauliOp::Z => {
                    if bit == 1 {
                        phase = -phase;
                    }
                }
            }
        }
        (image, phase)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PauliTerm {
    pub coeff: f64,
    pub pauli: PauliString,
}

impl PauliTerm {
    pub fn new(coeff: f64, pauli: PauliString) -> Self {
        Self { coeff, pauli }
    }

    pub fn xx(q0: usize, q1: usize, coeff: f64) -> Self {
        Self::new(coeff, PauliString::from_ops([(q0, PauliOp::X), (q1, PauliOp::X)]))
    }

    pub fn yy(q0: usize, q1: usize, coeff: f64) -> Self {
        Self::new(coeff, PauliString::from_ops([(q0, PauliOp::Y), (q1, PauliOp::Y)]))
    }

    pub fn z(qubit: usize, coeff: f64) -> Self {
        Self::new(coeff, PauliString::from_ops([(qubit, PauliOp::Z)]))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PauliHamiltonian {
    terms: Vec<PauliTerm>,
}

impl PauliHamiltonian {
    pub fn from_terms(terms: Vec<PauliTerm>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[PauliTerm] {
        &self.terms
    }

    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// Smallest register that holds every term; 0 for an empty Hamiltonian.
    pub fn min_qubits(&self) -> usize {
        self.terms
            .iter()
            .filter_map(|t| t.pauli.max_qubit())
            .max()
            .map_or(0, |q| q + 1)
    }

    /// Dense 2^n × 2^n matrix, row-major, `n = n_qubits`.
    pub fn to_dense(&self, n_qubits: usize) -> QuantumResult<Vec<Vec<C64>>> {
        if let Some(q) = self.terms.iter().filter_map(|t| t.pauli.max_qubit()).max() {
            if q >= n_qubits {
                return Err(QuantumError::QubitOutOfRange {
                    qubit: q,
                    n_qubits,
                });
            }
        }

        let dim = 1usize << n_qubits;
        let mut m = vec![vec![C64::new(0.0, 0.0); dim]; dim];
        for term in &self.terms {
            for col in 0..dim {
                let (row, phase) = term.pauli.apply_to_basis(col);
                m[row][col] += phase * term.coeff;
            }
        }
        Ok(m)
    }
}

impl FromIterator<PauliTerm> for PauliHamiltonian {
    fn from_iter<T: IntoIterator<Item = PauliTerm>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

/// Jordan–Wigner image of the SSH chain, one qubit per site.
///
/// The hopping c†_i c_{i+1} + h.c. on a nearest-neighbour bond of strength s
/// maps to (s/2)(X_i X_{i+1} + Y_i Y_{i+1}). Terms come out in bond order with
/// XX before YY; the pair commutes, so each bond is evolved exactly.
pub fn jordan_wigner_ssh(params: &SshParams) -> QuantumResult<PauliHamiltonian> {
    params.validate()?;

    let mut terms = Vec::new();
    for bond in params.bonds() {
        let (a, b) = (bond.left.min(bond.right), bond.left.max(bond.right));
        if b != a + 1 {
            // wrap-around bond would need a Z string
            return Err(QuantumError::NonLocalBond {
                left: bond.left,
                right: bond.right,
            });
        }
        terms.push(PauliTerm::xx(a, b, bond.amplitude / 2.0));
        terms.push(PauliTerm::yy(a, b, bond.amplitude / 2.0));
    }

    Ok(PauliHamiltonian::from_terms(terms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_phases_follow_convention() {
        let y = PauliString::from_ops([(0, PauliOp::Y)]);
        assert_eq!(y.apply_to_basis(0), (1, C64::new(0.0, 1.0)));
        assert_eq!(y.apply_to_basis(1), (0, C64::new(0.0, -1.0)));
    }

    #[test]
    fn identity_ops_are_dropped() {
        let p = PauliString::from_ops([(3, PauliOp::Z), (1, PauliOp::I), (0, PauliOp::X)]);
        assert_eq!(p.ops(), &[(0, PauliOp::X), (3, PauliOp::Z)]);
        assert_eq!(p.max_qubit(), Some(3));
    }
}
