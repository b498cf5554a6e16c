//! Trotter-Suzuki product-formula synthesis.
//!
//! Approximates `exp(-i H t)` by splitting the evolution into `n_steps`
//! slices, each evolved exactly under each term in sequence.
//!
//! # First-order Trotter (Lie-Trotter)
//!
//!   exp(-i H t) ≈ [∏_k exp(-i c_k P_k t/n)]^n
//!
//! Error: O(t² / n).
//!
//! # Second-order Trotter (Suzuki-Trotter)
//!
//!   exp(-i H t) ≈ [S₂(t/n)]^n
//!   S₂(τ) = [∏_k exp(-i c_k P_k τ/2)] · [∏_k exp(-i c_{n-k} P_{n-k} τ/2)]
//!
//! Error: O(t³ / n²).

use tracing::debug;

use crate::circuit::Circuit;
use crate::error::{QuantumError, QuantumResult};
use crate::hamiltonian::PauliHamiltonian;
use crate::synthesis::append_exp_pauli;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrotterOrder {
    #[default]
    First,
    Second,
}

/// Trotter product-formula time-evolution synthesiser.
#[derive(Debug, Clone)]
pub struct TrotterEvolution {
    hamiltonian: PauliHamiltonian,
    /// Total evolution time t.
    t: f64,
    /// Number of Trotter steps (repetitions).
    n_steps: usize,
    /// Number of qubits; if None, inferred from the Hamiltonian.
    n_qubits: Option<usize>,
}

impl TrotterEvolution {
    pub fn new(hamiltonian: PauliHamiltonian, t: f64, n_steps: usize) -> Self {
        Self {
            hamiltonian,
            t,
            n_steps,
            n_qubits: None,
        }
    }

    /// Override the circuit width used by [`first_order`](Self::first_order)
    /// and [`second_order`](Self::second_order).
    #[must_use]
    pub fn with_n_qubits(mut self, n: usize) -> Self {
        self.n_qubits = Some(n);
        self
    }

    pub fn hamiltonian(&self) -> &PauliHamiltonian {
        &self.hamiltonian
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    pub fn first_order(&self) -> QuantumResult<Circuit> {
        self.standalone(TrotterOrder::First)
    }

    pub fn second_order(&self) -> QuantumResult<Circuit> {
        self.standalone(TrotterOrder::Second)
    }

    fn standalone(&self, order: TrotterOrder) -> QuantumResult<Circuit> {
        self.validate()?;
        let n_qubits = self.effective_n_qubits();
        let mut circuit = Circuit::new(n_qubits, 0);
        debug!(
            n_terms = self.hamiltonian.n_terms(),
            n_steps = self.n_steps,
            n_qubits,
            ?order,
            "synthesising Trotter circuit"
        );
        self.append(&mut circuit, order, 0, None)?;
        Ok(circuit)
    }

    /// Append one full evolution U(t) to `circuit`, with the Hamiltonian's
    /// qubit 0 mapped to `offset`.
    ///
    /// With `control` set this appends controlled-U.
    pub fn append(
        &self,
        circuit: &mut Circuit,
        order: TrotterOrder,
        offset: usize,
        control: Option<usize>,
    ) -> QuantumResult<()> {
        self.validate()?;
        let terms = self.hamiltonian.terms();

        match order {
            TrotterOrder::First => {
                let step_t = self.t / self.n_steps as f64;
                for _ in 0..self.n_steps {
                    for term in terms {
                        append_exp_pauli(circuit, term, step_t, offset, control)?;
                    }
                }
            }
            TrotterOrder::Second => {
                let half_t = self.t / (2.0 * self.n_steps as f64);
                for _ in 0..self.n_steps {
                    for term in terms {
                        append_exp_pauli(circuit, term, half_t, offset, control)?;
                    }
                    for term in terms.iter().rev() {
                        append_exp_pauli(circuit, term, half_t, offset, control)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn validate(&self) -> QuantumResult<()> {
        if self.hamiltonian.n_terms() == 0 {
            return Err(QuantumError::EmptyHamiltonian);
        }
        if self.n_steps == 0 {
            return Err(QuantumError::InvalidSteps(0));
        }
        if !self.t.is_finite() {
            return Err(QuantumError::InvalidTime(self.t));
        }
        Ok(())
    }

    fn effective_n_qubits(&self) -> usize {
        self.n_qubits.unwrap_or_else(|| self.hamiltonian.min_qubits())
    }
}
