use simulator::{noisy_counts, qpe::build_circuit, run_qpe, QpeMode, QpeRunConfig};

#[test]
fn calibration_run_passes() {
    let report = run_qpe(&QpeRunConfig::preset(QpeMode::Calibration)).unwrap();

    assert_eq!(report.qubits, 12);
    assert_eq!(report.counts.total(), 4096);
    assert_eq!(report.reference.len(), 16);
    assert!(report.calibration_passed(), "{:?}", report.top(3));

    let top = &report.readouts[0];
    assert_eq!(top.bitstring, "00000000");
    assert_eq!(top.count, 4096);
}

#[test]
fn precision_run_is_not_the_vacuum() {
    let mut cfg = QpeRunConfig::preset(QpeMode::Precision);
    cfg.eval_qubits = 5;
    cfg.shots = 512;
    let report = run_qpe(&cfg).unwrap();

    assert_eq!(report.counts.total(), 512);
    assert!(!report.calibration_passed());
    for r in &report.readouts {
        assert_eq!(r.bitstring.len(), 5);
        assert!(r.phase > -0.5 && r.phase <= 0.5);
    }
}

fn small_noisy() -> QpeRunConfig {
    let mut cfg = QpeRunConfig::preset(QpeMode::Noisy);
    cfg.eval_qubits = 5;
    cfg.trajectories = 16;
    cfg.shots = 320;
    cfg
}

#[test]
fn noise_spreads_the_histogram() {
    let cfg = small_noisy();
    let noisy = run_qpe(&cfg).unwrap();

    let mut ideal_cfg = cfg.clone();
    ideal_cfg.p = 0.0;
    let ideal = run_qpe(&ideal_cfg).unwrap();

    assert_eq!(noisy.counts.total(), 320);
    assert_eq!(ideal.counts.total(), 320);

    let noisy_peak = noisy.readouts[0].probability;
    let ideal_peak = ideal.readouts[0].probability;
    assert!(
        noisy_peak < 0.5 * ideal_peak,
        "noisy peak {} vs ideal peak {}",
        noisy_peak,
        ideal_peak
    );
    assert!(
        noisy.counts.distinct() > ideal.counts.distinct(),
        "noisy {} vs ideal {} distinct outcomes",
        noisy.counts.distinct(),
        ideal.counts.distinct()
    );
}

#[test]
fn noisy_runs_are_reproducible() {
    let cfg = small_noisy();
    let a = run_qpe(&cfg).unwrap();
    let b = run_qpe(&cfg).unwrap();
    assert_eq!(a.counts, b.counts);

    let mut other = cfg.clone();
    other.seed = "another-seed".to_string();
    let c = run_qpe(&other).unwrap();
    assert_ne!(a.counts, c.counts);
}

#[test]
fn trajectories_do_not_depend_on_thread_count() {
    let mut cfg = small_noisy();
    cfg.eval_qubits = 3;
    let circuit = build_circuit(&cfg).unwrap();
    let channel = quantum::Depolarizing::new(cfg.p).unwrap();

    let run = |threads: usize| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap()
            .install(|| noisy_counts(&circuit, &channel, 12, 100, "threads").unwrap())
    };

    let serial = run(1);
    let parallel = run(4);
    assert_eq!(serial.total(), 100);
    assert_eq!(serial, parallel);
}
