//! Qubit-level SSH simulation: Jordan–Wigner Hamiltonian, Trotterized
//! evolution, phase estimation and a dense statevector engine with
//! depolarizing noise.

pub mod circuit;
pub mod error;
pub mod exact;
pub mod execute;
pub mod gates;
pub mod hamiltonian;
pub mod measurement;
pub mod noise;
pub mod qft;
pub mod qpe;
pub mod statevector;
pub mod synthesis;
pub mod trotter;

pub use circuit::{Circuit, Op};
pub use error::{QuantumError, QuantumResult};
pub use execute::{run_ideal, run_trajectory, simulate};
pub use gates::Gate;
pub use hamiltonian::{jordan_wigner_ssh, PauliHamiltonian, PauliOp, PauliString, PauliTerm};
pub use measurement::Counts;
pub use noise::Depolarizing;
pub use qpe::{PhaseEstimation, PhaseReadout};
pub use statevector::Statevector;
pub use trotter::{TrotterEvolution, TrotterOrder};
