//! Bulk winding number of the Bloch Hamiltonian.
//!
//! In momentum space the off-diagonal element is h(k) = v + w·e^{ik}. The
//! winding number counts how often h(k) circles the origin as k runs over the
//! Brillouin zone.

use std::f64::consts::PI;

const GAP_EPS: f64 = 1e-12;

/// Winding number from `samples` points of h(k), or `None` when the bulk gap
/// is closed (|v| = |w|) and the number is undefined.
pub fn winding_number(v: f64, w: f64, samples: usize) -> Option<i32> {
    let scale = v.abs().max(w.abs()).max(1.0);
    if (v.abs() - w.abs()).abs() <= GAP_EPS * scale || samples < 3 {
        return None;
    }

    let h = |k: f64| (v + w * k.cos(), w * k.sin());

    let mut total = 0.0;
    let (re0, im0) = h(0.0);
    let mut prev = im0.atan2(re0);
    for j in 1..=samples {
        let k = 2.0 * PI * j as f64 / samples as f64;
        let (re, im) = h(k);
        let arg = im.atan2(re);
        let mut d = arg - prev;
        if d > PI {
            d -= 2.0 * PI;
        } else if d <= -PI {
            d += 2.0 * PI;
        }
        total += d;
        prev = arg;
    }

    Some((total / (2.0 * PI)).round() as i32)
}
