// src/simulation/mod.rs

//! Runs circuits from the all-zero state and returns the final amplitudes.
//!
//! [`CircuitExecutor`] is the only thing the encode/decode pipeline needs from
//! a backend. [`Simulator`] is the bundled dense state-vector implementation;
//! tests and other backends can substitute their own.

mod results;
pub(crate) mod engine;

pub use results::SimulationResult;

use crate::circuits::Circuit;
use crate::core::{AmplitudeVector, DEFAULT_NORM_TOLERANCE, Result};
use crate::validation::validate_state;
use engine::SimulationEngine;
use tracing::debug;

/// Executes a circuit on qubits initialized to `|0…0⟩`.
///
/// The returned vector has `2^n` entries for an `n`-qubit circuit, indexed with
/// qubit 0 as the most significant bit. Implementations are expected to be
/// deterministic and fail only on malformed circuits.
pub trait CircuitExecutor {
    fn execute(&self, circuit: &Circuit) -> Result<AmplitudeVector>;
}

/// Settings for [`Simulator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatorConfig {
    /// Check that the final state is normalized and real.
    pub validate: bool,
    /// Allowed deviation of `Σ|a_k|²` from 1 when validating.
    pub norm_tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self { validate: true, norm_tolerance: DEFAULT_NORM_TOLERANCE }
    }
}

/// Dense state-vector simulator.
#[derive(Debug, Default, Clone)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Creates a simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Runs `circuit` and returns its final state.
    ///
    /// # Errors
    /// * `InvalidOperation` for a zero-qubit circuit, a control equal to its
    ///   target, repeated controls or a non-finite angle.
    /// * `QubitOutOfRange` for a qubit index `>= circuit.num_qubits()`.
    /// * `Incoherence` if validation is on and the final state is not normalized
    ///   or carries an imaginary part.
    pub fn run(&self, circuit: &Circuit) -> Result<SimulationResult> {
        let mut engine = SimulationEngine::init(circuit.num_qubits())?;
        for op in circuit.operations() {
            engine.apply_operation(op)?;
        }

        if self.config.validate {
            validate_state(engine.state(), Some(self.config.norm_tolerance), None)?;
        }
        debug!(num_qubits = circuit.num_qubits(), ops = circuit.len(), "circuit simulated");
        Ok(SimulationResult::new(engine.into_state(), circuit.num_qubits()))
    }
}

impl CircuitExecutor for Simulator {
    fn execute(&self, circuit: &Circuit) -> Result<AmplitudeVector> {
        Ok(self.run(circuit)?.into_amplitudes())
    }
}
