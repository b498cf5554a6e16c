use std::fs;

use lattice::{Phase, Verdict, ZeroTolerance};
use simulator::{analyze_spectrum, run_spectrum_sweep, SimulatorError, SpectrumSweepConfig};

#[test]
fn default_point_is_topological() {
    let report = analyze_spectrum(&SpectrumSweepConfig::default()).unwrap();

    assert_eq!(report.points.len(), 100);
    assert_eq!(report.classification.phase, Phase::Topological);
    assert_eq!(report.classification.verdict, Verdict::TopologicalEdgeModes);
    assert_eq!(report.winding, Some(1));
    assert_eq!(report.zero_modes.len(), 2);
    assert!(report.zero_modes.iter().all(|m| m.edge_weight > 0.5));
}

#[test]
fn trivial_point_with_adaptive_tolerance() {
    let cfg = SpectrumSweepConfig {
        cells: 8,
        v: 1.0,
        w: 0.4,
        points: 5,
        tolerance: ZeroTolerance::Adaptive,
        ..SpectrumSweepConfig::default()
    };
    let report = analyze_spectrum(&cfg).unwrap();
    assert_eq!(report.classification.phase, Phase::Trivial);
    assert_eq!(report.classification.zero_modes, 0);
    assert_eq!(report.winding, Some(0));
    assert!(report.zero_modes.is_empty());
}

#[test]
fn sweep_writes_one_row_per_level() {
    let path = std::env::temp_dir().join(format!("ssh_spectrum_{}.csv", std::process::id()));
    let cfg = SpectrumSweepConfig {
        cells: 3,
        points: 4,
        out: path.to_string_lossy().into_owned(),
        ..SpectrumSweepConfig::default()
    };
    run_spectrum_sweep(&cfg).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("w,index,energy"));
    assert_eq!(lines.count(), 4 * 6);
    let _ = fs::remove_file(&path);
}

#[test]
fn unwritable_output_is_reported() {
    let cfg = SpectrumSweepConfig {
        cells: 2,
        points: 2,
        out: "/nonexistent-dir/ssh_spectrum.csv".to_string(),
        ..SpectrumSweepConfig::default()
    };
    assert!(matches!(
        run_spectrum_sweep(&cfg),
        Err(SimulatorError::Output { .. })
    ));
}
