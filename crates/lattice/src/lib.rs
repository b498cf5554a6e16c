//! Su–Schrieffer–Heeger chain: Hamiltonian assembly, exact diagonalization
//! and topological phase classification.

pub mod classify;
pub mod edge;
pub mod error;
pub mod hamiltonian;
pub mod spectrum;
pub mod sweep;
pub mod winding;

pub use classify::{classify, Classification, Phase, Verdict, ZeroTolerance};
pub use error::{LatticeError, LatticeResult};
pub use hamiltonian::{ssh_hamiltonian, Bond, BondKind, Boundary, SshParams};
pub use spectrum::{diagonalize, eigenvalues, Spectrum};
