//! Error handling logic

use std::fmt;
use thiserror::Error;

/// Index of a qubit within a circuit.
/// Qubit 0 is the most significant bit of a basis-state index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QubitId(pub usize);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Every way an encode or decode call can fail.
///
/// Failures are local to a single call: nothing is retried or partially
/// recovered, the call either returns a well-formed result or one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeqodeError {
    /// The input is not 1 to 8 lowercase ASCII letters.
    #[error("Invalid name {name:?}: {reason}")]
    InvalidName {
        /// The rejected input
        name: String,
        /// Which constraint was violated
        reason: String,
    },

    /// The code vector has zero length and cannot be normalized.
    #[error("Degenerate vector: cannot normalize empty signal")]
    DegenerateVector,

    /// A rounded amplitude does not map onto a letter.
    #[error("Ambiguous decode: amplitude {index} rounds to {value}, outside 1..=26 (angles/norm do not correspond to a valid name)")]
    DecodeAmbiguous {
        /// Basis-state index of the offending amplitude
        index: usize,
        /// The rounded value
        value: i64,
    },

    /// Every amplitude was filtered out as zero.
    #[error("Empty decode: no name could be recovered")]
    DecodeEmpty,

    /// Wrong number of angles supplied for a template.
    #[error("Invalid angles: expected {expected}, found {found}")]
    InvalidAngles {
        /// Angles the template needs
        expected: usize,
        /// Angles supplied
        found: usize,
    },

    /// A numeric input (angle, norm, tolerance) is unusable.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// InvalidParameter failure message
        message: String,
    },

    /// An operation addresses a qubit the circuit does not have.
    #[error("Qubit {qubit} out of range for a {num_qubits}-qubit circuit")]
    QubitOutOfRange {
        /// The offending qubit
        qubit: QubitId,
        /// Qubits available
        num_qubits: usize,
    },

    /// An operation is malformed (control equals target, repeated controls, ...).
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// InvalidOperation failure message
        message: String,
    },

    /// The executor produced a state that is not normalized or not real.
    #[error("Incoherent state: {message}")]
    Incoherence {
        /// Incoherence failure message
        message: String,
    },

    /// General failure of the simulation process itself.
    #[error("Simulation error: {message}")]
    SimulationError {
        /// SimulationError failure message
        message: String,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DeqodeError>;
