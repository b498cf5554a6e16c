//! Dense statevector engine.
//!
//! Qubit q corresponds to bit q of the amplitude index (little-endian).

use num_complex::Complex64;
use rng::SeededRng;

use crate::circuit::{Circuit, Op};
use crate::error::{QuantumError, QuantumResult};
use crate::gates::{Gate, C64};
use crate::hamiltonian::PauliOp;

/// Largest register the dense engine will allocate.
pub const MAX_QUBITS: usize = 24;

#[derive(Debug, Clone)]
pub struct Statevector {
    amplitudes: Vec<C64>,
    num_qubits: usize,
}

impl Statevector {
    /// |0...0⟩
    pub fn new(num_qubits: usize) -> QuantumResult<Self> {
        Self::basis(num_qubits, 0)
    }

    /// Computational basis state |index⟩.
    pub fn basis(num_qubits: usize, index: usize) -> QuantumResult<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(QuantumError::TooManyQubits {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }
        let size = 1usize << num_qubits;
        if index >= size {
            return Err(QuantumError::BasisOutOfRange {
                index,
                n_qubits: num_qubits,
            });
        }
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[index] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn amplitudes(&self) -> &[C64] {
        &self.amplitudes
    }

    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Apply every gate of `circuit`; measurements are skipped.
    pub fn apply_circuit_gates(&mut self, circuit: &Circuit) -> QuantumResult<()> {
        if circuit.num_qubits() != self.num_qubits {
            return Err(QuantumError::QubitMismatch {
                circuit: circuit.num_qubits(),
                state: self.num_qubits,
            });
        }
        for op in circuit.ops() {
            if let Op::Gate(g) = op {
                self.apply(g);
            }
        }
        Ok(())
    }

    pub fn apply(&mut self, gate: &Gate) {
        match *gate {
            Gate::X(q) => self.apply_x(q),
            Gate::Cx { control, target } => self.apply_cx(control, target),
            Gate::Crz {
                control,
                target,
                theta,
            } => self.apply_crz(control, target, theta),
            Gate::Cp {
                control,
                target,
                theta,
            } => self.apply_cp(control, target, theta),
            Gate::Swap(a, b) => self.apply_swap(a, b),
            ref g => {
                if let (Some(u), crate::gates::Support::One(q)) = (g.matrix_1q(), g.support()) {
                    self.apply_1q(q, u);
                }
            }
        }
    }

    pub fn apply_pauli(&mut self, qubit: usize, op: PauliOp) {
        match op {
            PauliOp::I => {}
            PauliOp::X => self.apply_x(qubit),
            PauliOp::Y => self.apply_1q(qubit, crate::gates::pauli_y()),
            PauliOp::Z => self.apply_1q(qubit, crate::gates::pauli_z()),
        }
    }

    pub fn apply_1q(&mut self, qubit: usize, u: [[C64; 2]; 2]) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = u[0][0] * a + u[0][1] * b;
                self.amplitudes[j] = u[1][0] * a + u[1][1] * b;
            }
        }
    }

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }

    fn apply_crz(&mut self, control: usize, target: usize, theta: f64) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & ctrl_mask != 0 {
                *amp *= if i & tgt_mask == 0 { phase_0 } else { phase_1 };
            }
        }
    }

    fn apply_cp(&mut self, control: usize, target: usize, theta: f64) {
        let mask = (1 << control) | (1 << target);
        let phase = Complex64::from_polar(1.0, theta);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask == mask {
                *amp *= phase;
            }
        }
    }

    fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..self.amplitudes.len() {
            if (i & mask1 != 0) && (i & mask2 == 0) {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }

    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Distribution over the listed qubits; bit k of the outcome is `qubits[k]`.
    pub fn marginal(&self, qubits: &[usize]) -> Vec<f64> {
        let mut out = vec![0.0; 1 << qubits.len()];
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let mut key = 0usize;
            for (k, &q) in qubits.iter().enumerate() {
                key |= ((i >> q) & 1) << k;
            }
            out[key] += amp.norm_sqr();
        }
        out
    }

    /// Projective Z measurement of one qubit; the state collapses.
    pub fn measure(&mut self, qubit: usize, rng: &mut SeededRng) -> u8 {
        let mask = 1 << qubit;
        let p1: f64 = self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, a)| a.norm_sqr())
            .sum();
        let total = self.norm_sqr();
        if total == 0.0 {
            return 0;
        }

        let outcome = u8::from(rng.next_f64(b"MEASURE_Z") * total < p1);
        let kept = if outcome == 1 { p1 } else { total - p1 };
        let norm = kept.sqrt();

        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            let bit = u8::from(i & mask != 0);
            if bit != outcome {
                *amp = C64::new(0.0, 0.0);
            } else if norm > 0.0 {
                *amp /= norm;
            }
        }
        outcome
    }
}
