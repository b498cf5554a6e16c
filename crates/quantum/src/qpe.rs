//! Quantum phase estimation of a Trotterized evolution operator.
//!
//! Register layout: evaluation qubits `0..m`, system qubits `m..m+n`.
//! Evaluation qubit k controls U^(2^k) and is measured into clbit k.

use std::f64::consts::PI;

use tracing::debug;

use crate::circuit::Circuit;
use crate::error::{QuantumError, QuantumResult};
use crate::exact::nearest;
use crate::hamiltonian::PauliHamiltonian;
use crate::measurement::Counts;
use crate::qft::inverse_qft;
use crate::trotter::{TrotterEvolution, TrotterOrder};

/// U^(2^k) is synthesised by repetition, so the circuit doubles per bit.
pub const MAX_EVAL_QUBITS: usize = 16;

/// Builder for the phase-estimation circuit of U = exp(-iHt).
#[derive(Debug, Clone)]
pub struct PhaseEstimation {
    hamiltonian: PauliHamiltonian,
    eval_qubits: usize,
    time: f64,
    trotter_steps: usize,
    order: TrotterOrder,
    system_qubits: Option<usize>,
    occupied: Vec<usize>,
}

impl PhaseEstimation {
    pub fn new(hamiltonian: PauliHamiltonian, eval_qubits: usize, time: f64) -> Self {
        Self {
            hamiltonian,
            eval_qubits,
            time,
            trotter_steps: 1,
            order: TrotterOrder::First,
            system_qubits: None,
            occupied: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_trotter_steps(mut self, steps: usize) -> Self {
        self.trotter_steps = steps;
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: TrotterOrder) -> Self {
        self.order = order;
        self
    }

    /// System register width; defaults to the Hamiltonian's support.
    #[must_use]
    pub fn with_system_qubits(mut self, n: usize) -> Self {
        self.system_qubits = Some(n);
        self
    }

    /// System qubits flipped to |1⟩ before estimation (one fermion per site).
    #[must_use]
    pub fn with_occupied_sites(mut self, sites: impl IntoIterator<Item = usize>) -> Self {
        self.occupied = sites.into_iter().collect();
        self
    }

    pub fn eval_qubits(&self) -> usize {
        self.eval_qubits
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn system_qubits(&self) -> usize {
        self.system_qubits.unwrap_or_else(|| self.hamiltonian.min_qubits())
    }

    fn validate(&self) -> QuantumResult<()> {
        if self.eval_qubits == 0 || self.eval_qubits > MAX_EVAL_QUBITS {
            return Err(QuantumError::InvalidEvalQubits(self.eval_qubits));
        }
        if !self.time.is_finite() || self.time == 0.0 {
            return Err(QuantumError::InvalidTime(self.time));
        }
        Ok(())
    }

    pub fn build(&self) -> QuantumResult<Circuit> {
        self.validate()?;
        let m = self.eval_qubits;
        let n = self.system_qubits();
        let mut circuit = Circuit::new(m + n, m);

        for &site in &self.occupied {
            if site >= n {
                return Err(QuantumError::QubitOutOfRange {
                    qubit: site,
                    n_qubits: n,
                });
            }
            circuit.x(m + site)?;
        }

        let eval: Vec<usize> = (0..m).collect();
        for &q in &eval {
            circuit.h(q)?;
        }

        let evolution =
            TrotterEvolution::new(self.hamiltonian.clone(), self.time, self.trotter_steps);
        for k in 0..m {
            for _ in 0..(1u64 << k) {
                evolution.append(&mut circuit, self.order, m, Some(k))?;
            }
        }

        inverse_qft(&mut circuit, &eval)?;
        for k in 0..m {
            circuit.measure(k, k)?;
        }

        debug!(
            eval_qubits = m,
            system_qubits = n,
            gates = circuit.gate_count(),
            two_qubit = circuit.two_qubit_gate_count(),
            "built phase estimation circuit"
        );
        Ok(circuit)
    }
}

/// Phase in (-0.5, 0.5] for readout integer `j` on `m` bits.
///
/// U has eigenvalue e^{2πiφ}; readouts above half the range are negative
/// phases that wrapped around.
pub fn decode_phase(j: u64, m: usize) -> f64 {
    let phase = j as f64 / 2f64.powi(m as i32);
    if phase > 0.5 {
        phase - 1.0
    } else {
        phase
    }
}

/// e^{-iEt} = e^{2πiφ} ⇒ E = −2πφ/t.
pub fn phase_to_energy(phase: f64, time: f64) -> f64 {
    -2.0 * PI * phase / time
}

/// One decoded histogram row.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseReadout {
    pub bitstring: String,
    pub count: usize,
    pub probability: f64,
    pub phase: f64,
    pub energy: f64,
    /// Distance to the nearest reference eigenvalue; `None` without reference.
    pub error: Option<f64>,
}

/// Decode every outcome in `counts`, most frequent first.
pub fn readouts(counts: &Counts, time: f64, reference: &[f64]) -> Vec<PhaseReadout> {
    let total = counts.total().max(1) as f64;
    counts
        .sorted()
        .into_iter()
        .map(|(outcome, count)| {
            let phase = decode_phase(outcome, counts.width());
            let energy = phase_to_energy(phase, time);
            PhaseReadout {
                bitstring: counts.bitstring(outcome),
                count,
                probability: count as f64 / total,
                phase,
                energy,
                error: nearest(reference, energy).map(|e| (energy - e).abs()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_wraps_above_half() {
        assert_eq!(decode_phase(0, 8), 0.0);
        assert_eq!(decode_phase(64, 8), 0.25);
        assert_eq!(decode_phase(128, 8), 0.5);
        assert_eq!(decode_phase(192, 8), -0.25);
    }

    #[test]
    fn energy_sign_follows_evolution_convention() {
        assert!(phase_to_energy(0.25, 10.0) < 0.0);
        assert!((phase_to_energy(-0.25, 2.0 * PI) - 0.25).abs() < 1e-12);
    }
}
