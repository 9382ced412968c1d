// src/validation/mod.rs

//! Sanity checks on [`AmplitudeVector`]s.

use crate::core::{AmplitudeVector, DEFAULT_NORM_TOLERANCE, DeqodeError, Result};

/// Imaginary parts below this are rotation rounding noise.
const DEFAULT_IMAGINARY_TOLERANCE: f64 = 1e-9;

/// Checks that the sum of squared amplitudes is 1.
///
/// # Arguments
/// * `state` - The amplitudes to check.
/// * `tolerance` - Allowed deviation from 1.0; defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(DeqodeError::Incoherence)` otherwise.
pub fn check_normalization(state: &AmplitudeVector, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq: f64 = state.amplitudes().iter().map(|c| c.norm_sqr()).sum();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(DeqodeError::Incoherence {
            message: format!(
                "State vector normalization failed. Sum(|c_i|^2) = {} (Deviation > {})",
                norm_sq, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks that every amplitude is real up to `tolerance` (default 1e-9).
///
/// # Returns
/// * `Err(DeqodeError::Incoherence)` naming the first offending basis state.
pub fn check_real(state: &AmplitudeVector, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_IMAGINARY_TOLERANCE);
    match state.amplitudes().iter().position(|c| c.im.abs() > effective_tolerance) {
        Some(k) => Err(DeqodeError::Incoherence {
            message: format!(
                "Amplitude {} has imaginary part {} (> {})",
                k,
                state.amplitudes()[k].im,
                effective_tolerance
            ),
        }),
        None => Ok(()),
    }
}

/// Runs [`check_normalization`] then [`check_real`].
pub fn validate_state(
    state: &AmplitudeVector,
    norm_tolerance: Option<f64>,
    imaginary_tolerance: Option<f64>,
) -> Result<()> {
    check_normalization(state, norm_tolerance)?;
    check_real(state, imaginary_tolerance)?;
    Ok(())
}
