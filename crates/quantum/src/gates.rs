//! Closed gate set used by the circuit builder and the statevector engine.

use num_complex::Complex64;

pub type C64 = Complex64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    X(usize),
    Y(usize),
    Z(usize),
    H(usize),
    S(usize),
    Sdg(usize),
    Rz { qubit: usize, theta: f64 },
    Cx { control: usize, target: usize },
    Crz { control: usize, target: usize, theta: f64 },
    Cp { control: usize, target: usize, theta: f64 },
    Swap(usize, usize),
}

/// Qubits a gate touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    One(usize),
    Two(usize, usize),
}

impl Support {
    pub fn arity(&self) -> usize {
        match self {
            Support::One(_) => 1,
            Support::Two(_, _) => 2,
        }
    }
}

impl Gate {
    pub fn support(&self) -> Support {
        match *self {
            Gate::X(q) | Gate::Y(q) | Gate::Z(q) | Gate::H(q) | Gate::S(q) | Gate::Sdg(q) => {
                Support::One(q)
            }
            Gate::Rz { qubit, .. } => Support::One(qubit),
            Gate::Cx { control, target }
            | Gate::Crz { control, target, .. }
            | Gate::Cp { control, target, .. } => Support::Two(control, target),
            Gate::Swap(a, b) => Support::Two(a, b),
        }
    }

    /// 2×2 unitary for single-qubit gates, `None` for two-qubit gates.
    pub fn matrix_1q(&self) -> Option<[[C64; 2]; 2]> {
        match *self {
            Gate::X(_) => Some(pauli_x()),
            Gate::Y(_) => Some(pauli_y()),
            Gate::Z(_) => Some(pauli_z()),
            Gate::H(_) => Some(hadamard()),
            Gate::S(_) => Some(phase(std::f64::consts::FRAC_PI_2)),
            Gate::Sdg(_) => Some(phase(-std::f64::consts::FRAC_PI_2)),
            Gate::Rz { theta, .. } => Some(rz(theta)),
            _ => None,
        }
    }
}

pub fn hadamard() -> [[C64; 2]; 2] {
    let s = 1.0 / 2.0_f64.sqrt();
    [
        [C64::new(s, 0.0), C64::new(s, 0.0)],
        [C64::new(s, 0.0), C64::new(-s, 0.0)],
    ]
}

pub fn pauli_x() -> [[C64; 2]; 2] {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    [[z, o], [o, z]]
}

pub fn pauli_y() -> [[C64; 2]; 2] {
    let z = C64::new(0.0, 0.0);
    let i = C64::new(0.0, 1.0);
    let ni = C64::new(0.0, -1.0);
    [[z, ni], [i, z]]
}

pub fn pauli_z() -> [[C64; 2]; 2] {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    let m = C64::new(-1.0, 0.0);
    [[o, z], [z, m]]
}

/// diag(1, e^{iθ})
pub fn phase(theta: f64) -> [[C64; 2]; 2] {
    let z = C64::new(0.0, 0.0);
    [[C64::new(1.0, 0.0), z], [z, C64::from_polar(1.0, theta)]]
}

/// exp(-iθZ/2) = diag(e^{-iθ/2}, e^{iθ/2})
pub fn rz(theta: f64) -> [[C64; 2]; 2] {
    let z = C64::new(0.0, 0.0);
    [
        [C64::from_polar(1.0, -theta / 2.0), z],
        [z, C64::from_polar(1.0, theta / 2.0)],
    ]
}
