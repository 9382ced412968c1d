// src/tree/template.rs

use super::angles::{AngleTree, ensure_finite};
use crate::core::{DeqodeError, NUM_ANGLES, Result};
use std::fmt;

/// The seven parameters of the compact `RY`/`CNOT` circuit.
///
/// ```text
/// RY(α) q0; RY(β) q1; RY(γ) q2
/// CNOT(0,1); RY(θ) q1; CNOT(0,1)
/// CNOT(1,2); RY(φ) q2; CNOT(0,2); RY(μ) q2; CNOT(1,2); RY(ν) q2; CNOT(0,2)
/// ```
///
/// Each CNOT pair flips the sign of the rotations between them whenever the
/// control is 1, so qubit 1 sees `β ± θ` and qubit 2 sees
/// `γ ± φ ± μ ± ν` depending on the basis value of the qubits above it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateAngles {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub phi: f64,
    pub mu: f64,
    pub nu: f64,
}

impl TemplateAngles {
    /// Parameter names in circuit order.
    pub const LABELS: [&'static str; NUM_ANGLES] = ["α", "β", "γ", "θ", "φ", "μ", "ν"];

    /// Converts per-node tree angles into the compact parameters.
    pub fn from_tree(tree: &AngleTree) -> Self {
        let a = tree.node(0, 0);
        let [b0, b1] = [tree.node(1, 0), tree.node(1, 1)];
        let [c00, c01, c10, c11] = [tree.node(2, 0), tree.node(2, 1), tree.node(2, 2), tree.node(2, 3)];
        Self {
            alpha: a,
            beta: (b0 + b1) / 2.0,
            theta: (b0 - b1) / 2.0,
            gamma: (c00 + c01 + c10 + c11) / 4.0,
            phi: (c00 - c01 + c10 - c11) / 4.0,
            mu: (c00 - c01 - c10 + c11) / 4.0,
            nu: (c00 + c01 - c10 - c11) / 4.0,
        }
    }

    /// Parses α, β, γ, θ, φ, μ, ν in that order.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let [alpha, beta, gamma, theta, phi, mu, nu]: [f64; NUM_ANGLES] =
            values.try_into().map_err(|_| DeqodeError::InvalidAngles {
                expected: NUM_ANGLES,
                found: values.len(),
            })?;
        ensure_finite(values)?;
        Ok(Self { alpha, beta, gamma, theta, phi, mu, nu })
    }

    /// α, β, γ, θ, φ, μ, ν.
    pub fn to_array(&self) -> [f64; NUM_ANGLES] {
        [self.alpha, self.beta, self.gamma, self.theta, self.phi, self.mu, self.nu]
    }
}

impl From<&AngleTree> for TemplateAngles {
    fn from(tree: &AngleTree) -> Self {
        Self::from_tree(tree)
    }
}

impl fmt::Display for TemplateAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in Self::LABELS.iter().zip(self.to_array()) {
            writeln!(f, "{label} = {value:.6}")?;
        }
        Ok(())
    }
}
