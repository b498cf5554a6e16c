//! Real-space SSH Hamiltonian.
//!
//! Sites are numbered 0..2N with sublattice A on even and B on odd indices.
//! Cell i owns sites (2i, 2i+1); the intracell bond carries `v` and the bond
//! from 2i+1 to 2i+2 carries `w`.

use faer::Mat;
use tracing::debug;

use crate::classify::Phase;
use crate::error::{LatticeError, LatticeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Chain ends after the last B site. Supports edge modes.
    #[default]
    Open,
    /// Extra `w` bond from the last site back to site 0 (a ring).
    Periodic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SshParams {
    /// Number of unit cells N.
    pub cells: usize,
    /// Intracell hopping.
    pub v: f64,
    /// Intercell hopping.
    pub w: f64,
    pub boundary: Boundary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondKind {
    Intracell,
    Intercell,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bond {
    pub left: usize,
    pub right: usize,
    pub amplitude: f64,
    pub kind: BondKind,
}

impl SshParams {
    pub fn new(cells: usize, v: f64, w: f64) -> Self {
        Self {
            cells,
            v,
            w,
            boundary: Boundary::Open,
        }
    }

    #[must_use]
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn sites(&self) -> usize {
        2 * self.cells
    }

    pub fn phase(&self) -> Phase {
        Phase::from_hoppings(self.v, self.w)
    }

    pub fn validate(&self) -> LatticeResult<()> {
        if self.cells == 0 {
            return Err(LatticeError::NoCells(self.cells));
        }
        if !self.v.is_finite() {
            return Err(LatticeError::NonFiniteHopping {
                name: "v",
                value: self.v,
            });
        }
        if !self.w.is_finite() {
            return Err(LatticeError::NonFiniteHopping {
                name: "w",
                value: self.w,
            });
        }
        Ok(())
    }

    /// All bonds of the chain in site order, intracell before intercell.
    pub fn bonds(&self) -> Vec<Bond> {
        let n_sites = self.sites();
        let mut bonds = Vec::with_capacity(n_sites);

        for i in 0..n_sites.saturating_sub(1) {
            let (amplitude, kind) = if i % 2 == 0 {
                (self.v, BondKind::Intracell)
            } else {
                (self.w, BondKind::Intercell)
            };
            bonds.push(Bond {
                left: i,
                right: i + 1,
                amplitude,
                kind,
            });
        }

        if self.boundary == Boundary::Periodic && n_sites > 0 {
            bonds.push(Bond {
                left: n_sites - 1,
                right: 0,
                amplitude: self.w,
                kind: BondKind::Intercell,
            });
        }

        bonds
    }
}

/// Build the 2N×2N SSH Hamiltonian.
///
/// Entries are accumulated, so on a periodic single-cell ring the wrap bond
/// adds onto the intracell element (H[0,1] = v + w).
pub fn ssh_hamiltonian(params: &SshParams) -> LatticeResult<Mat<f64>> {
    params.validate()?;

    let dim = params.sites();
    let mut h = Mat::<f64>::zeros(dim, dim);

    for bond in params.bonds() {
        let cur = h.read(bond.left, bond.right);
        h.write(bond.left, bond.right, cur + bond.amplitude);
        let cur = h.read(bond.right, bond.left);
        h.write(bond.right, bond.left, cur + bond.amplitude);
    }

    debug!(
        cells = params.cells,
        v = params.v,
        w = params.w,
        boundary = ?params.boundary,
        "assembled SSH Hamiltonian"
    );

    Ok(h)
}

/// Largest |H[i,j] - H[j,i]|.
pub fn max_asymmetry(h: &Mat<f64>) -> LatticeResult<f64> {
    if h.nrows() != h.ncols() {
        return Err(LatticeError::NotSquare {
            rows: h.nrows(),
            cols: h.ncols(),
        });
    }
    let mut worst = 0.0f64;
    for i in 0..h.nrows() {
        for j in (i + 1)..h.ncols() {
            worst = worst.max((h.read(i, j) - h.read(j, i)).abs());
        }
    }
    Ok(worst)
}

pub fn is_hermitian(h: &Mat<f64>, tol: f64) -> bool {
    matches!(max_asymmetry(h), Ok(a) if a <= tol)
}

pub fn count_offdiagonal_nonzeros(h: &Mat<f64>) -> usize {
    let mut count = 0;
    for i in 0..h.nrows() {
        for j in 0..h.ncols() {
            if i != j && h.read(i, j) != 0.0 {
                count += 1;
            }
        }
    }
    count
}
