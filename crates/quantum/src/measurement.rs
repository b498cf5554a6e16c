//! Terminal-measurement sampling and the histogram it produces.

use std::collections::BTreeMap;

use rng::SeededRng;

use crate::statevector::Statevector;

/// Histogram of classical register outcomes.
///
/// Keys hold clbit k in bit k; [`Counts::bitstring`] renders them most
/// significant bit first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counts {
    width: usize,
    map: BTreeMap<u64, usize>,
}

impl Counts {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            map: BTreeMap::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn record(&mut self, outcome: u64, n: usize) {
        if n > 0 {
            *self.map.entry(outcome).or_insert(0) += n;
        }
    }

    pub fn get(&self, outcome: u64) -> usize {
        self.map.get(&outcome).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.map.values().sum()
    }

    /// Number of distinct outcomes observed.
    pub fn distinct(&self) -> usize {
        self.map.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.map.iter().map(|(k, v)| (*k, *v))
    }

    /// Outcomes by decreasing count; ties keep ascending outcome order.
    pub fn sorted(&self) -> Vec<(u64, usize)> {
        let mut v: Vec<(u64, usize)> = self.iter().collect();
        v.sort_by(|a, b| b.1.cmp(&a.1));
        v
    }

    pub fn most_frequent(&self) -> Option<(u64, usize)> {
        self.sorted().into_iter().next()
    }

    pub fn bitstring(&self, outcome: u64) -> String {
        format!("{:0width$b}", outcome, width = self.width)
    }

    pub fn merge(&mut self, other: &Counts) {
        for (k, v) in other.iter() {
            self.record(k, v);
        }
    }
}

/// Draw `shots` outcomes of the (qubit, clbit) measurements from `psi`
/// without disturbing it.
pub fn sample_measurements(
    psi: &Statevector,
    measured: &[(usize, usize)],
    num_clbits: usize,
    shots: usize,
    rng: &mut SeededRng,
) -> Counts {
    let mut counts = Counts::new(num_clbits);
    if shots == 0 || measured.is_empty() {
        return counts;
    }

    let qubits: Vec<usize> = measured.iter().map(|(q, _)| *q).collect();
    let marginal = psi.marginal(&qubits);

    for _ in 0..shots {
        let Some(idx) = rng.categorical(&marginal, b"SHOT") else {
            break;
        };
        let mut key = 0u64;
        for (k, &(_, clbit)) in measured.iter().enumerate() {
            if (idx >> k) & 1 == 1 {
                key |= 1u64 << clbit;
            }
        }
        counts.record(key, 1);
    }
    counts
}
