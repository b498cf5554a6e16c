//! Classical driver: w-sweep plus classification of a single point.

use lattice::{
    classify, diagonalize,
    edge::{bulk_profile, zero_mode_profiles, EdgeProfile},
    ssh_hamiltonian,
    sweep::{linspace, sweep_intercell, SweepPoint},
    winding::winding_number,
    Classification, SshParams,
};
use tracing::info;

use crate::config::SpectrumSweepConfig;
use crate::error::SimulatorResult;
use crate::output::write_spectrum_csv;

const WINDING_SAMPLES: usize = 512;

#[derive(Debug, Clone)]
pub struct SpectrumReport {
    pub points: Vec<SweepPoint>,
    pub params: SshParams,
    pub classification: Classification,
    pub winding: Option<i32>,
    /// Near-zero modes of the classified point, closest to zero first.
    pub zero_modes: Vec<EdgeProfile>,
    pub bulk: Option<EdgeProfile>,
}

/// Run the sweep and the single-point analysis without touching the disk.
pub fn analyze_spectrum(cfg: &SpectrumSweepConfig) -> SimulatorResult<SpectrumReport> {
    cfg.validate()?;

    let ws = linspace(cfg.w_min, cfg.w_max, cfg.points);
    let points = sweep_intercell(cfg.cells, cfg.v, &ws)?;

    let params = SshParams::new(cfg.cells, cfg.v, cfg.w);
    let spectrum = diagonalize(&ssh_hamiltonian(&params)?);
    let classification = classify(&params, &spectrum, cfg.tolerance);
    let zero_modes = zero_mode_profiles(&spectrum, classification.tolerance);
    let bulk = bulk_profile(&spectrum);
    let winding = winding_number(cfg.v, cfg.w, WINDING_SAMPLES);

    info!(
        cells = cfg.cells,
        v = cfg.v,
        w = cfg.w,
        phase = %classification.phase,
        zero_modes = classification.zero_modes,
        ?winding,
        "classified chain"
    );

    Ok(SpectrumReport {
        points,
        params,
        classification,
        winding,
        zero_modes,
        bulk,
    })
}

/// [`analyze_spectrum`] followed by the CSV dump to `cfg.out`.
pub fn run_spectrum_sweep(cfg: &SpectrumSweepConfig) -> SimulatorResult<SpectrumReport> {
    let report = analyze_spectrum(cfg)?;
    write_spectrum_csv(&cfg.out, &report.points)?;
    info!(path = %cfg.out, rows = report.points.len() * 2 * cfg.cells, "wrote spectrum");
    Ok(report)
}
