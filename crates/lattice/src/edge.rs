//! Real-space localization of eigenstates.

use crate::spectrum::Spectrum;

/// Probability density of one eigenstate over the lattice sites.
#[derive(Debug, Clone)]
pub struct EdgeProfile {
    pub energy: f64,
    /// |ψ_i|² per site.
    pub density: Vec<f64>,
    /// Weight on the first and last unit cell (two sites each).
    pub edge_weight: f64,
}

impl EdgeProfile {
    pub fn from_state(energy: f64, state: &[f64]) -> Self {
        let density: Vec<f64> = state.iter().map(|a| a * a).collect();
        let norm: f64 = density.iter().sum();
        let n = density.len();

        let edge: f64 = density
            .iter()
            .enumerate()
            .filter(|(i, _)| *i < 2 || *i + 2 >= n)
            .map(|(_, p)| *p)
            .sum();

        let edge_weight = if norm > 0.0 { edge / norm } else { 0.0 };
        Self {
            energy,
            density,
            edge_weight,
        }
    }
}

/// Profiles of every state with |E| <= tol, closest to zero first.
pub fn zero_mode_profiles(spectrum: &Spectrum, tol: f64) -> Vec<EdgeProfile> {
    spectrum
        .near_zero(tol)
        .into_iter()
        .map(|k| EdgeProfile::from_state(spectrum.energies[k], &spectrum.states[k]))
        .collect()
}

/// A representative bulk state: the one halfway up the |E| ordering.
pub fn bulk_profile(spectrum: &Spectrum) -> Option<EdgeProfile> {
    let order = spectrum.by_abs_energy();
    let k = *order.get(order.len() / 2)?;
    Some(EdgeProfile::from_state(spectrum.energies[k], &spectrum.states[k]))
}
