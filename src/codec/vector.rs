// src/codec/vector.rs

use super::character::char_to_code;
use crate::core::{DeqodeError, NAME_CAPACITY, Result};
use std::fmt;
use tracing::debug;

/// Per-position character codes of a name, zero-padded on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeVector([u8; NAME_CAPACITY]);

impl CodeVector {
    /// The raw codes, each in `0..=26`.
    pub fn codes(&self) -> &[u8; NAME_CAPACITY] {
        &self.0
    }

    /// Euclidean length of the codes viewed as a real vector.
    pub fn norm(&self) -> f64 {
        self.0.iter().map(|&c| f64::from(c) * f64::from(c)).sum::<f64>().sqrt()
    }
}

/// A code vector scaled to unit Euclidean length.
///
/// Every entry is non-negative. Paired with the norm it was divided by, it can be
/// turned back into the exact [`CodeVector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedVector([f64; NAME_CAPACITY]);

impl NormalizedVector {
    /// Normalizes `codes`, returning the unit vector and the norm.
    ///
    /// # Errors
    /// `DegenerateVector` if every code is zero.
    pub fn from_codes(codes: &CodeVector) -> Result<(Self, f64)> {
        let norm = codes.norm();
        if norm == 0.0 {
            return Err(DeqodeError::DegenerateVector);
        }
        let mut values = [0.0; NAME_CAPACITY];
        for (value, &code) in values.iter_mut().zip(codes.codes()) {
            *value = f64::from(code) / norm;
        }
        Ok((Self(values), norm))
    }

    pub fn values(&self) -> &[f64; NAME_CAPACITY] {
        &self.0
    }

    pub fn sum_of_squares(&self) -> f64 {
        self.0.iter().map(|v| v * v).sum()
    }
}

impl fmt::Display for NormalizedVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, v)?;
        }
        write!(f, "]")
    }
}

/// Turns names into normalized code vectors.
pub struct VectorBuilder;

impl VectorBuilder {
    /// Validates `name` and maps it onto its zero-padded code vector.
    ///
    /// # Errors
    /// `InvalidName` when `name` is empty, longer than eight characters, or
    /// contains anything other than `a..=z`.
    pub fn code_vector(name: &str) -> Result<CodeVector> {
        let invalid = |reason: String| DeqodeError::InvalidName { name: name.to_string(), reason };

        let len = name.chars().count();
        if len == 0 {
            return Err(invalid("a name needs at least one character".to_string()));
        }
        if len > NAME_CAPACITY {
            return Err(invalid(format!(
                "a name should have {NAME_CAPACITY} characters or less, found {len}"
            )));
        }

        let mut codes = [0u8; NAME_CAPACITY];
        for (position, c) in name.chars().enumerate() {
            if !c.is_ascii_lowercase() {
                return Err(invalid(format!(
                    "character {c:?} at position {position} is not a lowercase letter"
                )));
            }
            codes[position] = char_to_code(c);
        }
        Ok(CodeVector(codes))
    }

    /// Builds the unit vector for `name` together with its norm.
    pub fn build(name: &str) -> Result<(NormalizedVector, f64)> {
        let codes = Self::code_vector(name)?;
        let (vector, norm) = NormalizedVector::from_codes(&codes)?;
        debug!(name, ?codes, norm, "built normalized vector");
        Ok((vector, norm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn assert_invalid(name: &str) {
        match VectorBuilder::build(name) {
            Err(DeqodeError::InvalidName { name: rejected, .. }) => assert_eq!(rejected, name),
            other => panic!("expected InvalidName for {name:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_full_length_name_has_no_padding() -> Result<()> {
        let codes = VectorBuilder::code_vector("abcdefgh")?;
        assert_eq!(codes.codes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        Ok(())
    }

    #[test]
    fn test_single_letter() -> Result<()> {
        assert_eq!(VectorBuilder::code_vector("a")?.codes(), &[1, 0, 0, 0, 0, 0, 0, 0]);
        let (vector, norm) = VectorBuilder::build("a")?;
        assert_eq!(norm, 1.0);
        assert_eq!(vector.values(), &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        Ok(())
    }

    #[test]
    fn test_hi_vector() -> Result<()> {
        assert_eq!(VectorBuilder::code_vector("hi")?.codes(), &[8, 9, 0, 0, 0, 0, 0, 0]);
        let (vector, norm) = VectorBuilder::build("hi")?;
        assert!((norm - 145f64.sqrt()).abs() < TEST_TOLERANCE);
        assert!((vector.values()[0] - 8.0 / 145f64.sqrt()).abs() < TEST_TOLERANCE);
        assert!((vector.values()[1] - 9.0 / 145f64.sqrt()).abs() < TEST_TOLERANCE);
        assert!(vector.values()[2..].iter().all(|&v| v == 0.0));
        Ok(())
    }

    #[test]
    fn test_unit_norm() -> Result<()> {
        for name in ["z", "zz", "hello", "zzzzzzzz", "quantum"] {
            let (vector, _) = VectorBuilder::build(name)?;
            assert!((vector.sum_of_squares() - 1.0).abs() < TEST_TOLERANCE, "{name}");
        }
        Ok(())
    }

    #[test]
    fn test_norm_scales_back_to_codes() -> Result<()> {
        let codes = VectorBuilder::code_vector("grigori")?;
        let (vector, norm) = NormalizedVector::from_codes(&codes)?;
        for (value, &code) in vector.values().iter().zip(codes.codes()) {
            assert!((value * norm - f64::from(code)).abs() < TEST_TOLERANCE);
        }
        Ok(())
    }

    #[test]
    fn test_rejections() {
        assert_invalid("");
        assert_invalid("Abc");
        assert_invalid("abcdefghi");
        assert_invalid("a1c");
        assert_invalid("a c");
        assert_invalid("é");
        assert_invalid("ab-");
    }

    #[test]
    fn test_zero_codes_are_degenerate() {
        let zeros = CodeVector([0; NAME_CAPACITY]);
        assert_eq!(NormalizedVector::from_codes(&zeros), Err(DeqodeError::DegenerateVector));
    }
}
