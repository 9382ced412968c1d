//! Fixed sizes and tolerances shared across the crate.

/// Maximum number of characters in a name, and the length of every code vector.
pub const NAME_CAPACITY: usize = 8;

/// Qubits needed to hold `NAME_CAPACITY` amplitudes.
pub const NUM_QUBITS: usize = 3;

/// Rotation angles in a complete tree over `NAME_CAPACITY` leaves.
pub const NUM_ANGLES: usize = NAME_CAPACITY - 1;

/// Letters in the alphabet; codes run `1..=ALPHABET_SIZE`.
pub const ALPHABET_SIZE: u8 = 26;

/// Amplitudes at or below this magnitude decode as "no character".
/// Expressed in normalized units, before scaling by the norm.
pub const DEFAULT_AMPLITUDE_TOLERANCE: f64 = 1e-6;

/// Allowed deviation of the sum of squared amplitudes from 1.
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;
