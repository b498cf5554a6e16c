//! Error types for circuit construction and simulation.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuantumError {
    #[error("Hamiltonian is empty, no terms to synthesise")]
    EmptyHamiltonian,

    #[error("qubit {qubit} is out of range for a {n_qubits}-qubit register")]
    QubitOutOfRange { qubit: usize, n_qubits: usize },

    #[error("basis index {index} does not fit a {n_qubits}-qubit register")]
    BasisOutOfRange { index: usize, n_qubits: usize },

    #[error("classical bit {clbit} is out of range for {n_clbits} bits")]
    ClbitOutOfRange { clbit: usize, n_clbits: usize },

    #[error("gate acts twice on qubit {0}")]
    DuplicateQubit(usize),

    #[error("n_steps must be at least 1, got {0}")]
    InvalidSteps(usize),

    #[error("phase estimation needs 1..=16 evaluation qubits, got {0}")]
    InvalidEvalQubits(usize),

    #[error("evolution time must be finite and nonzero, got {0}")]
    InvalidTime(f64),

    #[error("{requested} qubits requested, statevector limit is {max}")]
    TooManyQubits { requested: usize, max: usize },

    #[error("circuit has {circuit} qubits but the state has {state}")]
    QubitMismatch { circuit: usize, state: usize },

    #[error("operation {index} follows a measurement; only terminal measurements are supported")]
    MidCircuitMeasurement { index: usize },

    #[error("circuit has no measurements")]
    NoMeasurements,

    #[error("Jordan-Wigner mapping needs nearest-neighbour bonds, got ({left}, {right})")]
    NonLocalBond { left: usize, right: usize },

    #[error("probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error(transparent)]
    Lattice(#[from] lattice::LatticeError),
}

pub type QuantumResult<T> = Result<T, QuantumError>;
