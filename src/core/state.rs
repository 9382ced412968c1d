// src/core/state.rs

use num_complex::Complex;
use std::fmt;

/// The complex amplitudes of an n-qubit state, one per basis state.
///
/// Index `k` is the basis state whose binary expansion lists qubit 0 as the
/// most significant bit, so for three qubits index 6 is `|110⟩`
/// (q0 = 1, q1 = 1, q2 = 0).
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct AmplitudeVector {
    amplitudes: Vec<Complex<f64>>,
}

impl AmplitudeVector {
    /// Wraps a vector of amplitudes. No normalization is performed; see
    /// [`crate::validation`] for the checks.
    pub fn new(amplitudes: Vec<Complex<f64>>) -> Self {
        Self { amplitudes }
    }

    /// Builds a purely real state, handy for feeding the decoder directly.
    pub fn from_real(values: &[f64]) -> Self {
        Self::new(values.iter().map(|&v| Complex::new(v, 0.0)).collect())
    }

    /// Read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amplitudes
    }

    /// Number of basis states.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// `|a_k|²` for every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Real parts only.
    pub fn real_parts(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.re).collect()
    }
}

impl From<Vec<Complex<f64>>> for AmplitudeVector {
    fn from(amplitudes: Vec<Complex<f64>>) -> Self {
        Self::new(amplitudes)
    }
}

impl fmt::Display for AmplitudeVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amplitudes[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
