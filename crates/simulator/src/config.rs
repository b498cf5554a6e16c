//! Run parameters for the two experiments.
//!
//! Defaults are the standard runs: a 100-point w-sweep of a
//! 20-cell chain, and the 4 + 8 qubit phase-estimation circuits.

use lattice::ZeroTolerance;
use quantum::TrotterOrder;

use crate::error::{SimulatorError, SimulatorResult};

#[derive(Debug, Clone)]
pub struct SpectrumSweepConfig {
    pub cells: usize,
    /// Intracell hopping, fixed across the sweep.
    pub v: f64,
    /// Intercell hopping of the single classified point.
    pub w: f64,
    pub w_min: f64,
    pub w_max: f64,
    pub points: usize,
    pub tolerance: ZeroTolerance,
    pub out: String,
}

impl Default for SpectrumSweepConfig {
    fn default() -> Self {
        Self {
            cells: 20,
            v: 1.0,
            w: 1.5,
            w_min: 0.0,
            w_max: 2.5,
            points: 100,
            tolerance: ZeroTolerance::default(),
            out: "ssh_spectrum.csv".to_string(),
        }
    }
}

impl SpectrumSweepConfig {
    pub fn validate(&self) -> SimulatorResult<()> {
        if self.cells == 0 {
            return Err(SimulatorError::Config("cells must be at least 1".into()));
        }
        if self.points == 0 {
            return Err(SimulatorError::Config("points must be at least 1".into()));
        }
        if !(self.w_min.is_finite() && self.w_max.is_finite()) || self.w_min > self.w_max {
            return Err(SimulatorError::Config(format!(
                "bad w range [{}, {}]",
                self.w_min, self.w_max
            )));
        }
        if let ZeroTolerance::Fixed(tol) = self.tolerance {
            if !(tol.is_finite() && tol >= 0.0) {
                return Err(SimulatorError::Config(format!("bad tolerance {}", tol)));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QpeMode {
    /// Vacuum input on the ideal circuit; must read all zeros.
    Calibration,
    /// One particle on the first site, ideal circuit.
    Precision,
    /// One particle on the first site under depolarizing noise.
    Noisy,
}

#[derive(Debug, Clone)]
pub struct QpeRunConfig {
    pub mode: QpeMode,
    pub cells: usize,
    pub v: f64,
    pub w: f64,
    pub eval_qubits: usize,
    pub time: f64,
    pub trotter_steps: usize,
    pub order: TrotterOrder,
    /// Total measurement shots across all trajectories.
    pub shots: usize,
    /// Noise trajectories; ignored by ideal runs.
    pub trajectories: usize,
    /// Depolarizing probability per gate; must be zero outside noisy mode.
    pub p: f64,
    pub seed: String,
    /// System sites flipped to |1⟩ before estimation.
    pub occupied: Vec<usize>,
}

impl QpeRunConfig {
    pub fn preset(mode: QpeMode) -> Self {
        match mode {
            QpeMode::Calibration => Self {
                mode,
                cells: 2,
                v: 0.5,
                w: 1.5,
                eval_qubits: 8,
                time: 10.0,
                trotter_steps: 1,
                order: TrotterOrder::First,
                shots: 4096,
                trajectories: 1,
                p: 0.0,
                seed: "ssh-qpe".to_string(),
                occupied: Vec::new(),
            },
            QpeMode::Precision => Self {
                mode,
                occupied: vec![0],
                ..Self::preset(QpeMode::Calibration)
            },
            QpeMode::Noisy => Self {
                mode,
                v: 0.1,
                eval_qubits: 6,
                time: 20.0,
                trotter_steps: 2,
                trajectories: 64,
                p: 0.02,
                occupied: vec![0],
                ..Self::preset(QpeMode::Calibration)
            },
        }
    }

    pub fn is_noisy(&self) -> bool {
        self.mode == QpeMode::Noisy && self.p > 0.0
    }

    pub fn validate(&self) -> SimulatorResult<()> {
        if self.cells == 0 {
            return Err(SimulatorError::Config("cells must be at least 1".into()));
        }
        if self.shots == 0 {
            return Err(SimulatorError::Config("shots must be at least 1".into()));
        }
        if self.is_noisy() && self.trajectories == 0 {
            return Err(SimulatorError::Config(
                "noisy runs need at least one trajectory".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.p) {
            return Err(SimulatorError::Config(format!(
                "p must lie in [0, 1], got {}",
                self.p
            )));
        }
        if self.mode != QpeMode::Noisy && self.p > 0.0 {
            return Err(SimulatorError::Config(format!(
                "p = {} given for an ideal {:?} run; use the noisy mode",
                self.p, self.mode
            )));
        }
        if let Some(&site) = self.occupied.iter().find(|&&s| s >= 2 * self.cells) {
            return Err(SimulatorError::Config(format!(
                "occupied site {} outside a {}-site chain",
                site,
                2 * self.cells
            )));
        }
        Ok(())
    }
}

impl Default for QpeRunConfig {
    fn default() -> Self {
        Self::preset(QpeMode::Calibration)
    }
}
