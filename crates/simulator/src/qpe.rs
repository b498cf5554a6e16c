//! Phase-estimation experiments: ideal sampling and noisy trajectories.

use std::time::Instant;

use lattice::SshParams;
use quantum::{
    exact::{exact_eigenvalues, EXACT_MAX_QUBITS},
    jordan_wigner_ssh,
    qpe::readouts,
    run_ideal, run_trajectory, Circuit, Counts, Depolarizing, PhaseEstimation, PhaseReadout,
};
use rayon::prelude::*;
use rng::SeededRng;
use tracing::{info, warn};

use crate::config::{QpeMode, QpeRunConfig};
use crate::error::SimulatorResult;

/// Calibration passes when the all-zero readout carries this much weight.
pub const CALIBRATION_MIN_PROBABILITY: f64 = 0.99;
pub const CALIBRATION_MAX_ERROR: f64 = 1e-4;

#[derive(Debug, Clone)]
pub struct QpeReport {
    pub mode: QpeMode,
    pub qubits: usize,
    pub gates: usize,
    pub counts: Counts,
    /// Every observed outcome, most frequent first.
    pub readouts: Vec<PhaseReadout>,
    /// Exact qubit-Hamiltonian eigenvalues, empty when too large to compute.
    pub reference: Vec<f64>,
}

impl QpeReport {
    pub fn top(&self, k: usize) -> &[PhaseReadout] {
        &self.readouts[..k.min(self.readouts.len())]
    }

    /// All-zero bitstring dominates and decodes to a zero-energy level.
    pub fn calibration_passed(&self) -> bool {
        self.readouts.first().is_some_and(|r| {
            r.bitstring.chars().all(|c| c == '0')
                && r.probability >= CALIBRATION_MIN_PROBABILITY
                && r.error.is_some_and(|e| e < CALIBRATION_MAX_ERROR)
        })
    }
}

pub fn build_circuit(cfg: &QpeRunConfig) -> SimulatorResult<Circuit> {
    let h = jordan_wigner_ssh(&SshParams::new(cfg.cells, cfg.v, cfg.w))?;
    let circuit = PhaseEstimation::new(h, cfg.eval_qubits, cfg.time)
        .with_system_qubits(2 * cfg.cells)
        .with_trotter_steps(cfg.trotter_steps)
        .with_order(cfg.order)
        .with_occupied_sites(cfg.occupied.iter().copied())
        .build()?;
    Ok(circuit)
}

pub fn run_qpe(cfg: &QpeRunConfig) -> SimulatorResult<QpeReport> {
    cfg.validate()?;

    let sites = 2 * cfg.cells;
    let h = jordan_wigner_ssh(&SshParams::new(cfg.cells, cfg.v, cfg.w))?;
    let reference = if sites <= EXACT_MAX_QUBITS {
        exact_eigenvalues(&h, sites)?
    } else {
        warn!(sites, "skipping exact reference, register too large");
        Vec::new()
    };

    let circuit = build_circuit(cfg)?;
    info!(
        mode = ?cfg.mode,
        qubits = circuit.num_qubits(),
        gates = circuit.gate_count(),
        two_qubit = circuit.two_qubit_gate_count(),
        "running phase estimation"
    );

    let start = Instant::now();
    let counts = if cfg.is_noisy() {
        let channel = Depolarizing::new(cfg.p)?;
        noisy_counts(&circuit, &channel, cfg.trajectories, cfg.shots, &cfg.seed)?
    } else {
        let mut rng = SeededRng::new(cfg.seed.as_bytes());
        run_ideal(&circuit, cfg.shots, &mut rng)?
    };
    info!(
        elapsed_s = start.elapsed().as_secs_f64(),
        distinct = counts.distinct(),
        "sampling finished"
    );

    let readouts = readouts(&counts, cfg.time, &reference);
    Ok(QpeReport {
        mode: cfg.mode,
        qubits: circuit.num_qubits(),
        gates: circuit.gate_count(),
        counts,
        readouts,
        reference,
    })
}

/// Shots split as evenly as possible over independent noise trajectories.
///
/// Trajectory `i` draws from `seed` forked by `i`, so the merged histogram
/// does not depend on how rayon schedules the work.
pub fn noisy_counts(
    circuit: &Circuit,
    channel: &Depolarizing,
    trajectories: usize,
    shots: usize,
    seed: &str,
) -> SimulatorResult<Counts> {
    let root = SeededRng::new(seed.as_bytes());
    let base = shots / trajectories.max(1);
    let extra = shots % trajectories.max(1);

    let per_trajectory: Vec<Counts> = (0..trajectories)
        .into_par_iter()
        .map(|t| {
            let mut rng = root.fork(b"trajectory", t as u64);
            let n = base + usize::from(t < extra);
            run_trajectory(circuit, Some(channel), n, &mut rng)
        })
        .collect::<Result<_, _>>()?;

    let mut total = Counts::new(circuit.num_clbits());
    for c in &per_trajectory {
        total.merge(c);
    }
    Ok(total)
}
