use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use quantum::TrotterOrder;
use simulator::{run_qpe, write_counts_csv, QpeMode, QpeRunConfig};

/// Trotterized phase estimation of the SSH chain (statevector, optional noise)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Experiment preset; the flags below override its values
    #[arg(long, value_enum, default_value_t = Mode::Calibration)]
    mode: Mode,

    /// Number of unit cells N (2N system qubits)
    #[arg(long)]
    cells: Option<usize>,

    /// Intracell hopping v
    #[arg(long)]
    v: Option<f64>,

    /// Intercell hopping w
    #[arg(long)]
    w: Option<f64>,

    /// Evaluation qubits m (2^m phase bins)
    #[arg(long)]
    eval_qubits: Option<usize>,

    /// Evolution time t of U = exp(-iHt)
    #[arg(long)]
    time: Option<f64>,

    /// Trotter steps per application of U
    #[arg(long)]
    trotter_steps: Option<usize>,

    /// Use the symmetric second-order product formula
    #[arg(long)]
    second_order: bool,

    /// Total measurement shots
    #[arg(long)]
    shots: Option<usize>,

    /// Noise trajectories (noisy mode)
    #[arg(long)]
    trajectories: Option<usize>,

    /// Depolarizing probability per gate (noisy mode only)
    #[arg(long)]
    p: Option<f64>,

    /// RNG seed (full reproducibility)
    #[arg(long)]
    seed: Option<String>,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Rows of the result table
    #[arg(long, default_value_t = 6)]
    top: usize,

    /// CSV output path for the decoded counts
    #[arg(long)]
    out: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Calibration,
    Precision,
    Noisy,
}

impl From<Mode> for QpeMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Calibration => QpeMode::Calibration,
            Mode::Precision => QpeMode::Precision,
            Mode::Noisy => QpeMode::Noisy,
        }
    }
}

fn config_from(args: &Args) -> QpeRunConfig {
    let mut cfg = QpeRunConfig::preset(args.mode.into());
    if let Some(n) = args.cells {
        cfg.cells = n;
    }
    if let Some(v) = args.v {
        cfg.v = v;
    }
    if let Some(w) = args.w {
        cfg.w = w;
    }
    if let Some(m) = args.eval_qubits {
        cfg.eval_qubits = m;
    }
    if let Some(t) = args.time {
        cfg.time = t;
    }
    if let Some(s) = args.trotter_steps {
        cfg.trotter_steps = s;
    }
    if args.second_order {
        cfg.order = TrotterOrder::Second;
    }
    if let Some(s) = args.shots {
        cfg.shots = s;
    }
    if let Some(t) = args.trajectories {
        cfg.trajectories = t;
    }
    if let Some(p) = args.p {
        cfg.p = p;
    }
    if let Some(seed) = &args.seed {
        cfg.seed = seed.clone();
    }
    cfg
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("failed to build Rayon thread pool")?;
    }

    let cfg = config_from(&args);
    println!(
        "System: N = {} ({} qubits) + {} eval qubits, v = {}, w = {}, t = {}",
        cfg.cells,
        2 * cfg.cells,
        cfg.eval_qubits,
        cfg.v,
        cfg.w,
        cfg.time
    );
    if cfg.is_noisy() {
        println!(
            "Noise: {:.1}% depolarizing per gate, {} trajectories",
            cfg.p * 100.0,
            cfg.trajectories
        );
    }

    let report = run_qpe(&cfg)?;

    if !report.reference.is_empty() {
        let lowest: Vec<String> = report
            .reference
            .iter()
            .take(4)
            .map(|e| format!("{:.4}", e))
            .collect();
        println!("Exact energies (lowest): [{}]", lowest.join(", "));
    }

    println!();
    println!(
        "{:<12} | {:<6} | {:<8} | {:<10} | Error",
        "Bitstring", "Prob", "Phase", "Energy"
    );
    println!("{}", "-".repeat(56));
    for r in report.top(args.top) {
        let error = r
            .error
            .map(|e| format!("{:.4}", e))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<12} | {:.3}  | {:<8.4} | {:<10.4} | {}",
            r.bitstring, r.probability, r.phase, r.energy, error
        );
    }
    println!(
        "\n{} distinct outcomes over {} shots",
        report.counts.distinct(),
        report.counts.total()
    );

    if cfg.mode == QpeMode::Calibration {
        if report.calibration_passed() {
            println!("Calibration passed: vacuum reads phase 0");
        } else {
            println!("Calibration FAILED: vacuum did not read phase 0");
        }
    }

    let out = args.out.clone().unwrap_or_else(|| {
        let name = match args.mode {
            Mode::Calibration => "calibration",
            Mode::Precision => "precision",
            Mode::Noisy => "noisy",
        };
        format!("ssh_qpe_{}.csv", name)
    });
    write_counts_csv(&out, &report.readouts)?;
    tracing::info!(path = %out, "wrote counts");

    Ok(())
}
