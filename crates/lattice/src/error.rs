use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LatticeError {
    #[error("SSH chain needs at least one unit cell, got {0}")]
    NoCells(usize),

    #[error("hopping amplitude {name} must be finite, got {value}")]
    NonFiniteHopping { name: &'static str, value: f64 },

    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Hamiltonian is not Hermitian (max asymmetry {0:.3e})")]
    NotHermitian(f64),
}

pub type LatticeResult<T> = Result<T, LatticeError>;
