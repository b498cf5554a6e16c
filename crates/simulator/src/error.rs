use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Lattice(#[from] lattice::LatticeError),

    #[error(transparent)]
    Quantum(#[from] quantum::QuantumError),

    #[error("failed to write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: io::Error,
    },
}

pub type SimulatorResult<T> = Result<T, SimulatorError>;
