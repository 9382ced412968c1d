// src/simulation/results.rs
use crate::core::AmplitudeVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::fmt;

/// Final state of a simulated circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    state: AmplitudeVector,
    num_qubits: usize,
}

impl SimulationResult {
    pub(crate) fn new(state: AmplitudeVector, num_qubits: usize) -> Self {
        Self { state, num_qubits }
    }

    /// The final amplitudes.
    pub fn amplitudes(&self) -> &AmplitudeVector {
        &self.state
    }

    pub fn into_amplitudes(self) -> AmplitudeVector {
        self.state
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Simulates `shots` measurements of every qubit.
    ///
    /// Outcomes are drawn from `|a_k|²` with a `StdRng` seeded by `seed`, so
    /// the same state and seed always give the same histogram. Keys are
    /// basis-state indices; states never drawn are absent.
    pub fn sample_counts(&self, shots: u64, seed: u64) -> BTreeMap<usize, u64> {
        let probabilities = self.state.probabilities();
        let total: f64 = probabilities.iter().sum();
        let mut counts = BTreeMap::new();
        if total <= 0.0 || probabilities.is_empty() {
            return counts;
        }

        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..shots {
            let sample = rng.random::<f64>() * total;
            let mut cumulative = 0.0;
            // Falls back to the last populated state if rounding leaves `sample` past the end.
            let mut outcome = probabilities.iter().rposition(|&p| p > 0.0).unwrap_or(0);
            for (k, p) in probabilities.iter().enumerate() {
                cumulative += p;
                if *p > 0.0 && sample < cumulative {
                    outcome = k;
                    break;
                }
            }
            *counts.entry(outcome).or_insert(0) += 1;
        }
        counts
    }

    /// Formats a basis-state index as `|q0 q1 ... ⟩`.
    pub fn ket(&self, index: usize) -> String {
        format!("|{:0width$b}⟩", index, width = self.num_qubits)
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results:")?;
        for (k, amplitude) in self.state.amplitudes().iter().enumerate() {
            writeln!(f, "  {}: {:.6}", self.ket(k), amplitude)?;
        }
        Ok(())
    }
}
