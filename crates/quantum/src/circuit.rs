//! Gate-sequence circuits.

use crate::error::{QuantumError, QuantumResult};
use crate::gates::{Gate, Support};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Gate(Gate),
    /// Computational-basis measurement of `qubit` into classical bit `clbit`.
    Measure { qubit: usize, clbit: usize },
}

#[derive(Debug, Clone)]
pub struct Circuit {
    num_qubits: usize,
    num_clbits: usize,
    ops: Vec<Op>,
}

impl Circuit {
    pub fn new(num_qubits: usize, num_clbits: usize) -> Self {
        Self {
            num_qubits,
            num_clbits,
            ops: Vec::new(),
        }
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn num_clbits(&self) -> usize {
        self.num_clbits
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn gates(&self) -> impl Iterator<Item = &Gate> {
        self.ops.iter().filter_map(|op| match op {
            Op::Gate(g) => Some(g),
            Op::Measure { .. } => None,
        })
    }

    pub fn gate_count(&self) -> usize {
        self.gates().count()
    }

    pub fn two_qubit_gate_count(&self) -> usize {
        self.gates().filter(|g| g.support().arity() == 2).count()
    }

    fn check_qubit(&self, qubit: usize) -> QuantumResult<()> {
        if qubit >= self.num_qubits {
            return Err(QuantumError::QubitOutOfRange {
                qubit,
                n_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    pub fn push(&mut self, gate: Gate) -> QuantumResult<&mut Self> {
        match gate.support() {
            Support::One(q) => self.check_qubit(q)?,
            Support::Two(a, b) => {
                self.check_qubit(a)?;
                self.check_qubit(b)?;
                if a == b {
                    return Err(QuantumError::DuplicateQubit(a));
                }
            }
        }
        self.ops.push(Op::Gate(gate));
        Ok(self)
    }

    pub fn x(&mut self, q: usize) -> QuantumResult<&mut Self> {
        self.push(Gate::X(q))
    }

    pub fn h(&mut self, q: usize) -> QuantumResult<&mut Self> {
        self.push(Gate::H(q))
    }

    pub fn s(&mut self, q: usize) -> QuantumResult<&mut Self> {
        self.push(Gate::S(q))
    }

    pub fn sdg(&mut self, q: usize) -> QuantumResult<&mut Self> {
        self.push(Gate::Sdg(q))
    }

    pub fn rz(&mut self, theta: f64, qubit: usize) -> QuantumResult<&mut Self> {
        self.push(Gate::Rz { qubit, theta })
    }

    pub fn cx(&mut self, control: usize, target: usize) -> QuantumResult<&mut Self> {
        self.push(Gate::Cx { control, target })
    }

    pub fn crz(&mut self, theta: f64, control: usize, target: usize) -> QuantumResult<&mut Self> {
        self.push(Gate::Crz {
            control,
            target,
            theta,
        })
    }

    pub fn cp(&mut self, theta: f64, control: usize, target: usize) -> QuantumResult<&mut Self> {
        self.push(Gate::Cp {
            control,
            target,
            theta,
        })
    }

    pub fn swap(&mut self, a: usize, b: usize) -> QuantumResult<&mut Self> {
        self.push(Gate::Swap(a, b))
    }

    pub fn measure(&mut self, qubit: usize, clbit: usize) -> QuantumResult<&mut Self> {
        self.check_qubit(qubit)?;
        if clbit >= self.num_clbits {
            return Err(QuantumError::ClbitOutOfRange {
                clbit,
                n_clbits: self.num_clbits,
            });
        }
        self.ops.push(Op::Measure { qubit, clbit });
        Ok(self)
    }

    /// (qubit, clbit) pairs of the trailing measurement block.
    ///
    /// Errors if a gate appears after any measurement.
    pub fn terminal_measurements(&self) -> QuantumResult<Vec<(usize, usize)>> {
        let mut measured = Vec::new();
        for (index, op) in self.ops.iter().enumerate() {
            match *op {
                Op::Measure { qubit, clbit } => measured.push((qubit, clbit)),
                Op::Gate(_) if !measured.is_empty() => {
                    return Err(QuantumError::MidCircuitMeasurement { index });
                }
                Op::Gate(_) => {}
            }
        }
        Ok(measured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_and_duplicate_qubits() {
        let mut c = Circuit::new(2, 1);
        assert!(matches!(
            c.h(2),
            Err(QuantumError::QubitOutOfRange { qubit: 2, n_qubits: 2 })
        ));
        assert!(matches!(c.cx(1, 1), Err(QuantumError::DuplicateQubit(1))));
        assert!(matches!(
            c.measure(0, 1),
            Err(QuantumError::ClbitOutOfRange { clbit: 1, n_clbits: 1 })
        ));
        assert_eq!(c.ops().len(), 0);
    }

    #[test]
    fn gate_after_measure_is_not_terminal() {
        let mut c = Circuit::new(1, 1);
        c.h(0).unwrap().measure(0, 0).unwrap().x(0).unwrap();
        assert!(matches!(
            c.terminal_measurements(),
            Err(QuantumError::MidCircuitMeasurement { index: 2 })
        ));
    }
}
