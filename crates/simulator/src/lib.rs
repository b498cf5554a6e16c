//! Experiment drivers shared by the command-line tools.

pub mod config;
pub mod error;
mod output;
pub mod qpe;
pub mod spectrum;

pub use config::{QpeMode, QpeRunConfig, SpectrumSweepConfig};
pub use error::{SimulatorError, SimulatorResult};
pub use output::{write_counts_csv, write_spectrum_csv};
pub use qpe::{noisy_counts, run_qpe, QpeReport};
pub use spectrum::{analyze_spectrum, run_spectrum_sweep, SpectrumReport};
