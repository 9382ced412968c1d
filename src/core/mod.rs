// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod state;
pub mod constants;

pub use error::{DeqodeError, QubitId, Result};
pub use state::AmplitudeVector;
pub use constants::{
    ALPHABET_SIZE, DEFAULT_AMPLITUDE_TOLERANCE, DEFAULT_NORM_TOLERANCE, NAME_CAPACITY, NUM_ANGLES,
    NUM_QUBITS,
};
