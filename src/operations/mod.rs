// src/operations/mod.rs

//! Gate-level operations a circuit is made of.
//!
//! The set is deliberately small: real `RY` rotations, optionally controlled
//! by any number of qubits, and NOT gates, optionally controlled by one
//! qubit. Every control fires on the basis value 1; a control on 0 is
//! written as a NOT before and after the controlled gate.

use crate::core::QubitId;

/// A single gate in a [`crate::circuits::Circuit`].
#[derive(Debug, Clone, PartialEq)] // f64 parameters rule out Eq
pub enum Operation {
    /// `RY(theta)` on `target`:
    /// `[[cos θ/2, -sin θ/2], [sin θ/2, cos θ/2]]`.
    Rotation {
        /// The rotated qubit.
        target: QubitId,
        /// Rotation angle in radians.
        theta: f64,
    },

    /// `RY(theta)` on `target`, applied only on basis states where every
    /// control qubit is 1.
    ControlledRotation {
        /// Qubits that must all read 1.
        controls: Vec<QubitId>,
        /// The rotated qubit.
        target: QubitId,
        /// Rotation angle in radians.
        theta: f64,
    },

    /// NOT (Pauli X) on `target`.
    Flip {
        /// The flipped qubit.
        target: QubitId,
    },

    /// CNOT: flips `target` on basis states where `control` is 1.
    ControlledFlip {
        /// The control qubit.
        control: QubitId,
        /// The flipped qubit.
        target: QubitId,
    },
}

impl Operation {
    /// Returns every qubit the operation touches, controls first.
    pub fn involved_qubits(&self) -> Vec<QubitId> {
        match self {
            Operation::Rotation { target, .. } => vec![*target],
            Operation::ControlledRotation { controls, target, .. } => {
                let mut qubits = controls.clone();
                qubits.push(*target);
                qubits
            }
            Operation::Flip { target } => vec![*target],
            Operation::ControlledFlip { control, target } => vec![*control, *target],
        }
    }

    /// The qubit whose state the operation changes.
    pub fn target(&self) -> QubitId {
        match self {
            Operation::Rotation { target, .. }
            | Operation::ControlledRotation { target, .. }
            | Operation::Flip { target }
            | Operation::ControlledFlip { target, .. } => *target,
        }
    }

    /// Control qubits (empty for uncontrolled gates).
    pub fn controls(&self) -> Vec<QubitId> {
        match self {
            Operation::ControlledRotation { controls, .. } => controls.clone(),
            Operation::ControlledFlip { control, .. } => vec![*control],
            Operation::Rotation { .. } | Operation::Flip { .. } => Vec::new(),
        }
    }
}
