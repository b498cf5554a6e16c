//! Spectrum as a function of the intercell hopping.

use tracing::{debug, info};

use crate::error::{LatticeError, LatticeResult};
use crate::hamiltonian::{max_asymmetry, ssh_hamiltonian, SshParams};
use crate::spectrum::eigenvalues;

const HERMITIAN_TOL: f64 = 1e-12;

#[derive(Debug, Clone)]
pub struct SweepPoint {
    pub w: f64,
    /// Ascending eigenvalues at this w.
    pub energies: Vec<f64>,
}

/// `points` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (points - 1) as f64;
            (0..points).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Diagonalize the open chain at fixed `v` for every w in `w_values`.
pub fn sweep_intercell(cells: usize, v: f64, w_values: &[f64]) -> LatticeResult<Vec<SweepPoint>> {
    info!(cells, v, points = w_values.len(), "sweeping intercell hopping");

    let mut out = Vec::with_capacity(w_values.len());
    for &w in w_values {
        let h = ssh_hamiltonian(&SshParams::new(cells, v, w))?;

        let asym = max_asymmetry(&h)?;
        if asym > HERMITIAN_TOL {
            return Err(LatticeError::NotHermitian(asym));
        }

        let energies = eigenvalues(&h);
        debug!(w, lowest = energies.first().copied(), "sweep point");
        out.push(SweepPoint { w, energies });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::linspace;

    #[test]
    fn linspace_hits_both_ends() {
        let xs = linspace(0.0, 2.5, 100);
        assert_eq!(xs.len(), 100);
        assert_eq!(xs[0], 0.0);
        assert!((xs[99] - 2.5).abs() < 1e-12);
    }
}
