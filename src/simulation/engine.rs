// src/simulation/engine.rs
use crate::core::{AmplitudeVector, DeqodeError, QubitId, Result};
use crate::operations::Operation;
use num_complex::Complex;
use num_traits::{One, Zero};
use tracing::trace;

type Matrix2 = [[Complex<f64>; 2]; 2];

/// Dense state-vector evolution for a fixed number of qubits.
/// (Internal visibility)
pub(crate) struct SimulationEngine {
    /// `2^n` amplitudes, qubit 0 as the most significant index bit.
    state: AmplitudeVector,
    num_qubits: usize,
}

impl SimulationEngine {
    /// Starts every qubit in `|0⟩`.
    pub(crate) fn init(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(DeqodeError::InvalidOperation {
                message: "Cannot initialize simulation engine with zero qubits".to_string(),
            });
        }
        let dim = u32::try_from(num_qubits)
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
            .ok_or_else(|| DeqodeError::SimulationError {
                message: format!("{num_qubits} qubits overflow the state vector dimension"),
            })?;

        let mut initial = vec![Complex::zero(); dim];
        initial[0] = Complex::one();
        Ok(Self { state: AmplitudeVector::new(initial), num_qubits })
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: AmplitudeVector) -> Result<()> {
        if state.dim() != self.state.dim() {
            return Err(DeqodeError::SimulationError {
                message: format!(
                    "Cannot set state: provided dimension {} does not match engine dimension {}",
                    state.dim(),
                    self.state.dim()
                ),
            });
        }
        self.state = state;
        Ok(())
    }

    pub(crate) fn state(&self) -> &AmplitudeVector {
        &self.state
    }

    pub(crate) fn into_state(self) -> AmplitudeVector {
        self.state
    }

    /// Applies one gate to the global state.
    pub(crate) fn apply_operation(&mut self, op: &Operation) -> Result<()> {
        let target = op.target();
        let controls = op.controls();
        self.check_qubits(target, &controls)?;

        let matrix = match op {
            Operation::Rotation { theta, .. } | Operation::ControlledRotation { theta, .. } => {
                if !theta.is_finite() {
                    return Err(DeqodeError::InvalidOperation { message: format!("rotation angle {theta} on {target} is not finite") });
                }
                ry_matrix(*theta)
            }
            Operation::Flip { .. } | Operation::ControlledFlip { .. } => flip_matrix(),
        };
        trace!(?op, "applying operation");
        self.apply_controlled_gate(target, &controls, &matrix);
        Ok(())
    }

    fn check_qubits(&self, target: QubitId, controls: &[QubitId]) -> Result<()> {
        for &qubit in controls.iter().chain(std::iter::once(&target)) {
            if qubit.0 >= self.num_qubits {
                return Err(DeqodeError::QubitOutOfRange { qubit, num_qubits: self.num_qubits });
            }
        }
        if controls.contains(&target) {
            return Err(DeqodeError::InvalidOperation {
                message: format!("Control and target qubits cannot be the same ({target})"),
            });
        }
        for (i, control) in controls.iter().enumerate() {
            if controls[i + 1..].contains(control) {
                return Err(DeqodeError::InvalidOperation { message: format!("Control {control} listed twice") });
            }
        }
        Ok(())
    }

    /// Bit position of a qubit inside a basis-state index.
    fn bit_mask(&self, qubit: QubitId) -> usize {
        1 << (self.num_qubits - 1 - qubit.0)
    }

    /// Applies `matrix` to `target` on every basis pair whose controls all read 1.
    /// An empty control list makes it a plain single-qubit gate.
    fn apply_controlled_gate(&mut self, target: QubitId, controls: &[QubitId], matrix: &Matrix2) {
        let target_mask = self.bit_mask(target);
        let control_mask = controls.iter().fold(0, |mask, &c| mask | self.bit_mask(c));

        let amplitudes = self.state.amplitudes_mut();
        for i0 in 0..amplitudes.len() {
            if i0 & target_mask != 0 || i0 & control_mask != control_mask {
                continue;
            }
            let i1 = i0 | target_mask;
            let psi_0 = amplitudes[i0];
            let psi_1 = amplitudes[i1];
            amplitudes[i0] = matrix[0][0] * psi_0 + matrix[0][1] * psi_1;
            amplitudes[i1] = matrix[1][0] * psi_0 + matrix[1][1] * psi_1;
        }
    }
}

/// `RY(θ) = [[cos θ/2, -sin θ/2], [sin θ/2, cos θ/2]]`
fn ry_matrix(theta: f64) -> Matrix2 {
    let (sin_a, cos_a) = (theta / 2.0).sin_cos();
    [
        [Complex::new(cos_a, 0.0), Complex::new(-sin_a, 0.0)],
        [Complex::new(sin_a, 0.0), Complex::new(cos_a, 0.0)],
    ]
}

fn flip_matrix() -> Matrix2 {
    [
        [Complex::zero(), Complex::one()],
        [Complex::one(), Complex::zero()],
    ]
}
