// src/decode/mod.rs

//! Amplitudes plus norm back to a name.

use crate::codec::code_to_char;
use crate::core::{ALPHABET_SIZE, AmplitudeVector, DEFAULT_AMPLITUDE_TOLERANCE, DeqodeError, Result};
use crate::validation::check_real;
use std::str::FromStr;
use tracing::{debug, warn};

/// Tie-breaking rule when a scaled amplitude sits exactly between two codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// 2.5 -> 2, 3.5 -> 4.
    #[default]
    HalfEven,
    /// 2.5 -> 3, -2.5 -> -3.
    HalfAwayFromZero,
}

impl RoundingMode {
    pub fn round(self, value: f64) -> f64 {
        match self {
            RoundingMode::HalfEven => value.round_ties_even(),
            RoundingMode::HalfAwayFromZero => value.round(),
        }
    }
}

impl FromStr for RoundingMode {
    type Err = DeqodeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "half-even" => Ok(RoundingMode::HalfEven),
            "half-away" => Ok(RoundingMode::HalfAwayFromZero),
            other => Err(DeqodeError::InvalidParameter {
                message: format!("unknown rounding mode {other:?} (expected half-even or half-away)"),
            }),
        }
    }
}

/// Settings for [`AmplitudeDecoder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecoderConfig {
    /// Amplitudes with magnitude at or below this (before scaling) are skipped.
    pub tolerance: f64,
    pub rounding: RoundingMode,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self { tolerance: DEFAULT_AMPLITUDE_TOLERANCE, rounding: RoundingMode::default() }
    }
}

/// Turns an amplitude vector and its norm back into a name.
#[derive(Debug, Clone, Default)]
pub struct AmplitudeDecoder {
    config: DecoderConfig,
}

impl AmplitudeDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Rescales by `norm`, rounds, and maps each surviving amplitude to a letter,
    /// in ascending basis-state order.
    ///
    /// # Errors
    /// * `InvalidParameter` if `norm` is not a positive finite number, or the
    ///   configured tolerance is negative or not finite.
    /// * `DecodeAmbiguous` if a rounded value is outside `1..=26`.
    /// * `DecodeEmpty` if every amplitude is within tolerance of zero.
    pub fn decode(&self, amplitudes: &AmplitudeVector, norm: f64) -> Result<String> {
        if !(norm.is_finite() && norm > 0.0) {
            return Err(DeqodeError::InvalidParameter { message: format!("norm must be positive and finite, got {norm}") });
        }
        let tolerance = self.config.tolerance;
        if !(tolerance.is_finite() && tolerance >= 0.0) {
            return Err(DeqodeError::InvalidParameter {
                message: format!("tolerance must be finite and non-negative, got {tolerance}"),
            });
        }
        if let Err(residue) = check_real(amplitudes, None) {
            warn!(%residue, "decoding real parts only");
        }

        let mut name = String::new();
        for (index, amplitude) in amplitudes.amplitudes().iter().enumerate() {
            if amplitude.norm() <= tolerance {
                continue;
            }
            let rounded = self.config.rounding.round(amplitude.re * norm);
            let letter = (1.0..=f64::from(ALPHABET_SIZE))
                .contains(&rounded)
                .then(|| code_to_char(rounded as u8))
                .flatten()
                .ok_or(DeqodeError::DecodeAmbiguous { index, value: rounded as i64 })?;
            name.push(letter);
        }

        if name.is_empty() {
            return Err(DeqodeError::DecodeEmpty);
        }
        debug!(%name, norm, "decoded amplitudes");
        Ok(name)
    }
}
