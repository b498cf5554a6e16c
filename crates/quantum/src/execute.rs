//! Running circuits on the statevector engine.

use rng::SeededRng;
use tracing::debug;

use crate::circuit::{Circuit, Op};
use crate::error::{QuantumError, QuantumResult};
use crate::measurement::{sample_measurements, Counts};
use crate::noise::Depolarizing;
use crate::statevector::Statevector;

/// Evolve |0…0⟩ through every gate of `circuit`.
///
/// With a channel, every gate is followed by a depolarizing kick on the qubits
/// it touched; measurements are skipped either way.
pub fn simulate(
    circuit: &Circuit,
    noise: Option<&Depolarizing>,
    rng: &mut SeededRng,
) -> QuantumResult<Statevector> {
    let mut psi = Statevector::new(circuit.num_qubits())?;
    match noise {
        Some(channel) if !channel.is_ideal() => {
            for op in circuit.ops() {
                if let Op::Gate(g) = op {
                    psi.apply(g);
                    channel.apply(&mut psi, g.support(), rng);
                }
            }
        }
        _ => psi.apply_circuit_gates(circuit)?,
    }
    Ok(psi)
}

/// Ideal execution: one simulation, `shots` samples of the terminal
/// measurements.
pub fn run_ideal(circuit: &Circuit, shots: usize, rng: &mut SeededRng) -> QuantumResult<Counts> {
    run_trajectory(circuit, None, shots, rng)
}

/// One noise trajectory sampled `shots` times.
///
/// Each call draws a fresh set of Pauli kicks, so averaging over many calls
/// recovers the depolarized distribution.
pub fn run_trajectory(
    circuit: &Circuit,
    noise: Option<&Depolarizing>,
    shots: usize,
    rng: &mut SeededRng,
) -> QuantumResult<Counts> {
    let measured = circuit.terminal_measurements()?;
    if measured.is_empty() {
        return Err(QuantumError::NoMeasurements);
    }

    let psi = simulate(circuit, noise, rng)?;
    debug!(
        qubits = circuit.num_qubits(),
        gates = circuit.gate_count(),
        shots,
        "sampling terminal measurements"
    );
    Ok(sample_measurements(
        &psi,
        &measured,
        circuit.num_clbits(),
        shots,
        rng,
    ))
}
