//! Pauli-string exponentiation.
//!
//! Implements the standard gate synthesis for
//!
//!   exp(-i · coeff · t · P)
//!
//! where P is a tensor product of Pauli operators, using the circuit identity:
//!
//!   exp(-i θ/2 · Z⊗Z⊗...⊗Z) = CNOT_ladder · Rz(θ) · CNOT_ladder†
//!
//! with basis rotations applied before/after to handle X and Y factors:
//!   X → H · Z · H
//!   Y → Sdg · H · Z · H · S
//!   Z → identity
//!
//! A controlled exponential only needs the central Rz controlled: with the
//! control off, the ladder and basis change cancel.

use crate::circuit::Circuit;
use crate::error::{QuantumError, QuantumResult};
use crate::hamiltonian::{PauliOp, PauliTerm};

/// Append `exp(-i · coeff · t · P)` to `circuit`.
///
/// Pauli qubit q lands on circuit qubit `offset + q`. With `control` set, the
/// exponential fires only when that qubit is |1⟩. Identity strings are a
/// global phase and emit nothing (a controlled global phase would not be, but
/// the Jordan–Wigner terms never contain one).
pub fn append_exp_pauli(
    circuit: &mut Circuit,
    term: &PauliTerm,
    t: f64,
    offset: usize,
    control: Option<usize>,
) -> QuantumResult<()> {
    let ops = term.pauli.ops();
    if ops.is_empty() {
        return Ok(());
    }

    let qubits: Vec<usize> = ops.iter().map(|(q, _)| offset + q).collect();
    for &q in &qubits {
        if q >= circuit.num_qubits() {
            return Err(QuantumError::QubitOutOfRange {
                qubit: q,
                n_qubits: circuit.num_qubits(),
            });
        }
        if control == Some(q) {
            return Err(QuantumError::DuplicateQubit(q));
        }
    }

    // Rz(θ) implements exp(-i θ/2 Z)
    let theta = 2.0 * term.coeff * t;

    basis_change(circuit, ops, offset, false)?;
    cnot_ladder(circuit, &qubits)?;

    let target = qubits[qubits.len() - 1];
    match control {
        Some(c) => circuit.crz(theta, c, target)?,
        None => circuit.rz(theta, target)?,
    };

    cnot_ladder_reverse(circuit, &qubits)?;
    basis_change(circuit, ops, offset, true)?;

    Ok(())
}

/// Forward pass: X → H, Y → Sdg·H. Reverse pass: X → H, Y → H·S.
fn basis_change(
    circuit: &mut Circuit,
    ops: &[(usize, PauliOp)],
    offset: usize,
    undo: bool,
) -> QuantumResult<()> {
    for &(q, op) in ops {
        let q = offset + q;
        match (op, undo) {
            (PauliOp::X, _) => {
                circuit.h(q)?;
            }
            (PauliOp::Y, false) => {
                circuit.sdg(q)?.h(q)?;
            }
            (PauliOp::Y, true) => {
                circuit.h(q)?.s(q)?;
            }
            (PauliOp::Z | PauliOp::I, _) => {}
        }
    }
    Ok(())
}

/// CX(q[0],q[1]), CX(q[1],q[2]), …: parity of the string onto the last qubit.
fn cnot_ladder(circuit: &mut Circuit, qubits: &[usize]) -> QuantumResult<()> {
    for window in qubits.windows(2) {
        circuit.cx(window[0], window[1])?;
    }
    Ok(())
}

fn cnot_ladder_reverse(circuit: &mut Circuit, qubits: &[usize]) -> QuantumResult<()> {
    for window in qubits.windows(2).rev() {
        circuit.cx(window[0], window[1])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::Gate;

    #[test]
    fn xx_term_gate_sequence() {
        let mut c = Circuit::new(2, 0);
        append_exp_pauli(&mut c, &PauliTerm::xx(0, 1, 0.25), 2.0, 0, None).unwrap();
        let gates: Vec<Gate> = c.gates().copied().collect();
        assert_eq!(
            gates,
            vec![
                Gate::H(0),
                Gate::H(1),
                Gate::Cx { control: 0, target: 1 },
                Gate::Rz { qubit: 1, theta: 1.0 },
                Gate::Cx { control: 0, target: 1 },
                Gate::H(0),
                Gate::H(1),
            ]
        );
    }

    #[test]
    fn controlled_term_only_controls_the_rotation() {
        let mut c = Circuit::new(3, 0);
        append_exp_pauli(&mut c, &PauliTerm::yy(0, 1, 0.5), 1.0, 1, Some(0)).unwrap();
        assert_eq!(c.gate_count(), 11);
        let controlled: Vec<&Gate> = c
            .gates()
            .filter(|g| matches!(g, Gate::Crz { .. }))
            .collect();
        assert_eq!(
            controlled,
            vec![&Gate::Crz { control: 0, target: 2, theta: 1.0 }]
        );
        assert!(c.gates().all(|g| !matches!(g, Gate::Rz { .. })));
    }

    #[test]
    fn offset_out_of_range_is_rejected() {
        let mut c = Circuit::new(2, 0);
        let err = append_exp_pauli(&mut c, &PauliTerm::xx(0, 1, 1.0), 1.0, 1, None);
        assert!(matches!(
            err,
            Err(QuantumError::QubitOutOfRange { qubit: 2, n_qubits: 2 })
        ));
    }

    #[test]
    fn control_inside_the_string_is_rejected() {
        let mut c = Circuit::new(2, 0);
        let err = append_exp_pauli(&mut c, &PauliTerm::z(1, 1.0), 1.0, 0, Some(1));
        assert!(matches!(err, Err(QuantumError::DuplicateQubit(1))));
    }
}
