//! Phase labels and zero-mode classification.
//!
//! A finite open chain in the topological phase hosts two edge modes whose
//! energies are split away from zero by roughly |w|·(|v|/|w|)^N. The
//! classifier counts eigenvalues inside a tolerance window around zero, so the
//! window has to sit between that splitting and the bulk gap.

use std::fmt;

use tracing::debug;

use crate::hamiltonian::SshParams;
use crate::spectrum::Spectrum;

pub const DEFAULT_ZERO_TOLERANCE: f64 = 1e-3;
const MIN_ZERO_TOLERANCE: f64 = 1e-12;

/// Phase label derived from the hopping magnitudes alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// |v| > |w|, winding 0.
    Trivial,
    /// |w| > |v|, winding 1.
    Topological,
    /// |v| = |w|, the bulk gap closes.
    Critical,
}

impl Phase {
    pub fn from_hoppings(v: f64, w: f64) -> Self {
        let (v, w) = (v.abs(), w.abs());
        if w > v {
            Phase::Topological
        } else if v > w {
            Phase::Trivial
        } else {
            Phase::Critical
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Trivial => write!(f, "trivial"),
            Phase::Topological => write!(f, "topological"),
            Phase::Critical => write!(f, "critical"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    TopologicalEdgeModes,
    TrivialGapped,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::TopologicalEdgeModes => write!(f, "topological, edge-localized zero modes"),
            Verdict::TrivialGapped => write!(f, "trivial, gapped"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZeroTolerance {
    Fixed(f64),
    /// Geometric mean of the expected edge splitting and the bulk gap.
    Adaptive,
}

impl Default for ZeroTolerance {
    fn default() -> Self {
        ZeroTolerance::Fixed(DEFAULT_ZERO_TOLERANCE)
    }
}

impl ZeroTolerance {
    pub fn resolve(&self, params: &SshParams) -> f64 {
        match *self {
            ZeroTolerance::Fixed(tol) => tol,
            ZeroTolerance::Adaptive => adaptive_tolerance(params),
        }
    }
}

/// Tolerance window for counting zero modes of `params`.
pub fn adaptive_tolerance(params: &SshParams) -> f64 {
    let (v, w) = (params.v.abs(), params.w.abs());
    let gap = (w - v).abs();
    if gap == 0.0 {
        return DEFAULT_ZERO_TOLERANCE;
    }

    let tol = if w > v {
        let splitting = w * (v / w).powi(params.cells as i32);
        if params.cells < 2 || splitting >= gap / 2.0 {
            // edge splitting not separated from the bulk; stay below it
            return splitting.min(gap) / 2.0;
        }
        (splitting * gap).sqrt()
    } else {
        gap / 2.0
    };

    tol.clamp(MIN_ZERO_TOLERANCE, (gap / 2.0).max(MIN_ZERO_TOLERANCE))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub phase: Phase,
    pub tolerance: f64,
    pub zero_modes: usize,
    pub verdict: Verdict,
}

pub fn classify(
    params: &SshParams,
    spectrum: &Spectrum,
    tolerance: ZeroTolerance,
) -> Classification {
    let tol = tolerance.resolve(params);
    let zero_modes = spectrum.near_zero(tol).len();
    let phase = params.phase();

    let verdict = if zero_modes == 2 && phase == Phase::Topological {
        Verdict::TopologicalEdgeModes
    } else {
        Verdict::TrivialGapped
    };

    debug!(%phase, tol, zero_modes, %verdict, "classified spectrum");

    Classification {
        phase,
        tolerance: tol,
        zero_modes,
        verdict,
    }
}
