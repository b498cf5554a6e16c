use std::f64::consts::PI;

use crate::circuit::Circuit;
use crate::error::QuantumResult;

/// Inverse quantum Fourier transform on `qubits`, least significant first.
///
/// Maps ⊗_k (|0⟩ + e^{2πi·j·2^k/2^m}|1⟩) to |j⟩ with bit k of j on
/// `qubits[k]`. Includes the bit-reversal swaps.
pub fn inverse_qft(circuit: &mut Circuit, qubits: &[usize]) -> QuantumResult<()> {
    let m = qubits.len();
    for i in 0..m / 2 {
        circuit.swap(qubits[i], qubits[m - 1 - i])?;
    }
    for j in 0..m {
        for k in 0..j {
            let theta = -PI / 2f64.powi((j - k) as i32);
            circuit.cp(theta, qubits[k], qubits[j])?;
        }
        circuit.h(qubits[j])?;
    }
    Ok(())
}
