//! Seeded random stream for shot sampling and noise trajectories.
//!
//! Every draw is derived from a SHAKE256 sponge keyed by the seed, the step
//! counter and a caller-supplied context label, so a run is reproducible from
//! its seed string alone and independent trajectories can be forked without
//! sharing state.

use sha3::{digest::{ExtendableOutput, Update, XofReader}, Shake256};

#[derive(Clone)]
pub struct SeededRng {
    state: [u8; 32],
    step: u64,
}

impl SeededRng {
    pub fn new(seed: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[seed, b"SSH_INIT"], &mut state);
        Self { state, step: 0 }
    }

    /// Independent stream for sub-task `index` (e.g. one noise trajectory).
    ///
    /// The parent is not advanced.
    pub fn fork(&self, label: &[u8], index: u64) -> Self {
        let mut state = [0u8; 32];
        shake(&[&self.state, label, &index.to_be_bytes(), b"FORK"], &mut state);
        Self { state, step: 0 }
    }

    /// Uniform draw in [0, 1].
    pub fn next_f64(&mut self, ctx: &[u8]) -> f64 {
        self.step += 1;

        let state = self.state;
        let step_bytes = self.step.to_be_bytes();
        let mut next_state = self.state;
        shake(&[&state, &step_bytes, b"QSIM"], &mut next_state);
        self.state = next_state;

        let mut out = [0u8; 8];
        shake(&[&self.state, ctx], &mut out);

        (u64::from_be_bytes(out) as f64) / (u64::MAX as f64)
    }

    /// Index drawn from unnormalized non-negative `weights`.
    ///
    /// Returns `None` when every weight is zero.
    pub fn categorical(&mut self, weights: &[f64], ctx: &[u8]) -> Option<usize> {
        let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
        if total <= 0.0 {
            return None;
        }

        let mut x = self.next_f64(ctx) * total;
        let mut last = None;
        for (idx, &w) in weights.iter().enumerate() {
            if w <= 0.0 {
                continue;
            }
            if x < w {
                return Some(idx);
            }
            x -= w;
            last = Some(idx);
        }
        // x == total after rounding
        last
    }
}

fn shake(parts: &[&[u8]], out: &mut [u8]) {
    let mut h = Shake256::default();
    for p in parts {
        h.update(p);
    }
    let mut r = h.finalize_xof();
    r.read(out);
}
