use rng::SeededRng;

use crate::error::{QuantumError, QuantumResult};
use crate::gates::Support;
use crate::hamiltonian::PauliOp;
use crate::statevector::Statevector;

/// Gate-level depolarizing channel implemented via random Pauli kicks.
///
/// With probability `p` the qubits a gate touched are replaced by the
/// maximally mixed state: one of the 4^k Paulis on its k qubits (identity
/// included) is applied uniformly at random. A gate is hit at most once,
/// whatever its arity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Depolarizing {
    p: f64,
}

impl Depolarizing {
    pub fn new(p: f64) -> QuantumResult<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(QuantumError::InvalidProbability(p));
        }
        Ok(Self { p })
    }

    pub fn probability(&self) -> f64 {
        self.p
    }

    pub fn is_ideal(&self) -> bool {
        self.p == 0.0
    }

    /// One draw against `p` for the whole `support`.
    pub fn apply(&self, psi: &mut Statevector, support: Support, rng: &mut SeededRng) {
        if self.p <= 0.0 {
            return;
        }

        match support {
            Support::One(q) => {
                let x = rng.next_f64(b"DEPOL_1Q");
                if x >= self.p {
                    return;
                }
                let idx = ((x / self.p) * 4.0) as usize;
                psi.apply_pauli(q, pauli_at(idx));
            }
            Support::Two(a, b) => {
                let x = rng.next_f64(b"DEPOL_2Q");
                if x >= self.p {
                    return;
                }
                let idx = (((x / self.p) * 16.0) as usize).min(15);
                psi.apply_pauli(a, pauli_at(idx % 4));
                psi.apply_pauli(b, pauli_at(idx / 4));
            }
        }
    }
}

fn pauli_at(idx: usize) -> PauliOp {
    match idx {
        0 => PauliOp::I,
        1 => PauliOp::X,
        2 => PauliOp::Y,
        _ => PauliOp::Z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_probability() {
        assert!(Depolarizing::new(-0.1).is_err());
        assert!(Depolarizing::new(1.5).is_err());
        assert!(Depolarizing::new(f64::NAN).is_err());
        assert!(Depolarizing::new(0.02).is_ok());
    }

    #[test]
    fn zero_probability_leaves_state_alone() {
        let channel = Depolarizing::new(0.0).unwrap();
        let mut rng = SeededRng::new(b"ideal");
        let mut psi = Statevector::basis(2, 0b01).unwrap();
        for _ in 0..100 {
            channel.apply(&mut psi, Support::Two(0, 1), &mut rng);
        }
        assert_eq!(psi.probabilities()[0b01], 1.0);
    }

    #[test]
    fn full_depolarizing_flips_about_half_the_time() {
        let channel = Depolarizing::new(1.0).unwrap();
        let mut rng = SeededRng::new(b"flips");
        let trials = 2000;
        let mut flipped = 0;
        for _ in 0..trials {
            let mut psi = Statevector::new(1).unwrap();
            channel.apply(&mut psi, Support::One(0), &mut rng);
            if psi.probabilities()[1] > 0.5 {
                flipped += 1;
            }
        }
        // X and Y flip, I and Z do not
        let frac = flipped as f64 / trials as f64;
        assert!((frac - 0.5).abs() < 0.06, "flip fraction = {}", frac);
    }

    #[test]
    fn two_qubit_gates_are_hit_once() {
        // only the four {I, Z} ⊗ {I, Z} kicks leave |00⟩ in place
        let p = 0.5;
        let channel = Depolarizing::new(p).unwrap();
        let mut rng = SeededRng::new(b"joint");
        let trials = 8000;
        let mut unchanged = 0;
        for _ in 0..trials {
            let mut psi = Statevector::new(2).unwrap();
            channel.apply(&mut psi, Support::Two(0, 1), &mut rng);
            if psi.probabilities()[0b00] > 0.5 {
                unchanged += 1;
            }
        }
        let frac = unchanged as f64 / trials as f64;
        let expected = 1.0 - 0.75 * p;
        assert!((frac - expected).abs() < 0.03, "unchanged fraction = {}", frac);
    }

    #[test]
    fn full_two_qubit_depolarizing_reaches_every_basis_state() {
        let channel = Depolarizing::new(1.0).unwrap();
        let mut rng = SeededRng::new(b"spread");
        let mut seen = [0usize; 4];
        let trials = 4000;
        for _ in 0..trials {
            let mut psi = Statevector::new(2).unwrap();
            channel.apply(&mut psi, Support::Two(0, 1), &mut rng);
            let probs = psi.probabilities();
            let outcome = (0..4).find(|&i| probs[i] > 0.5).unwrap();
            seen[outcome] += 1;
        }
        for (state, &n) in seen.iter().enumerate() {
            let frac = n as f64 / trials as f64;
            assert!((frac - 0.25).abs() < 0.04, "|{:02b}⟩ fraction = {}", state, frac);
        }
    }
}
