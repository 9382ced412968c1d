// tests/encode_decode_tests.rs

use deqode::{
    AmplitudeDecoder, AmplitudeTreeEncoder, AmplitudeVector, DeqodeError, Simulator, Template, VectorBuilder,
    decode_angles, decode_circuit, encode_name,
};
use proptest::prelude::*;

fn round_trip(name: &str, template: Template) -> Result<String, DeqodeError> {
    let encoded = encode_name(name)?;
    decode_angles(
        &Simulator::new(),
        &AmplitudeDecoder::new(),
        template,
        &encoded.angles_for(template),
        encoded.norm,
    )
}

proptest! {
    /// Property: every valid name survives encode -> simulate -> decode
    #[test]
    fn prop_round_trip_tree(name in "[a-z]{1,8}") {
        prop_assert_eq!(round_trip(&name, Template::Tree)?, name);
    }

    #[test]
    fn prop_round_trip_compact(name in "[a-z]{1,8}") {
        prop_assert_eq!(round_trip(&name, Template::Compact)?, name);
    }

    /// Property: the encoded vector has unit length
    #[test]
    fn prop_normalized(name in "[a-z]{1,8}") {
        let (vector, norm) = VectorBuilder::build(&name)?;
        prop_assert!((vector.sum_of_squares() - 1.0).abs() < 1e-9);
        prop_assert!(norm >= 1.0);
    }

    /// Property: seven angles, each a valid split in [0, π]
    #[test]
    fn prop_seven_angles_in_range(name in "[a-z]{1,8}") {
        let encoded = encode_name(&name)?;
        prop_assert_eq!(encoded.angles.angles().len(), 7);
        for angle in encoded.angles.angles() {
            prop_assert!((0.0..=std::f64::consts::PI).contains(angle), "angle {} out of range", angle);
        }
    }

    /// Property: encoding is bit-for-bit deterministic
    #[test]
    fn prop_encode_deterministic(name in "[a-z]{1,8}") {
        let first = encode_name(&name)?;
        let second = encode_name(&name)?;
        prop_assert_eq!(first.norm.to_bits(), second.norm.to_bits());
        prop_assert_eq!(first.vector, second.vector);
        prop_assert_eq!(first.angles, second.angles);
    }

    /// Property: uppercase, digits and overlong input never encode
    #[test]
    fn prop_invalid_names_rejected(name in "[a-z]{0,4}[A-Z0-9 _][a-z]{0,4}|[a-z]{9,12}") {
        let is_invalid_name = matches!(encode_name(&name), Err(DeqodeError::InvalidName { .. }));
        prop_assert!(is_invalid_name);
    }
}

#[test]
fn test_max_length_has_no_padding() -> Result<(), DeqodeError> {
    let codes = VectorBuilder::code_vector("abcdefgh")?;
    assert_eq!(codes.codes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    Ok(())
}

#[test]
fn test_min_length() -> Result<(), DeqodeError> {
    let encoded = encode_name("a")?;
    assert_eq!(VectorBuilder::code_vector("a")?.codes(), &[1, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(encoded.norm, 1.0);
    assert_eq!(encoded.vector.values(), &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(encoded.angles.angles(), &[0.0; 7]);
    Ok(())
}

#[test]
fn test_rejections() {
    for name in ["", "Abc", "abcdefghi", "a1c"] {
        assert!(
            matches!(encode_name(name), Err(DeqodeError::InvalidName { .. })),
            "{name:?} should be rejected"
        );
    }
}

#[test]
fn test_out_of_alphabet_value_is_ambiguous() {
    // A unit amplitude scaled by 27 lands one past 'z'
    let state = AmplitudeVector::from_real(&[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(
        AmplitudeDecoder::new().decode(&state, 27.0),
        Err(DeqodeError::DecodeAmbiguous { index: 0, value: 27 })
    );
}

#[test]
fn test_hi_scenario() -> Result<(), DeqodeError> {
    let encoded = encode_name("hi")?;
    let norm = 145f64.sqrt();
    assert!((encoded.norm - norm).abs() < 1e-12);
    assert!((encoded.norm - 12.0416).abs() < 1e-4);

    let values = encoded.vector.values();
    assert!((values[0] - 8.0 / norm).abs() < 1e-12);
    assert!((values[1] - 9.0 / norm).abs() < 1e-12);
    assert!(values[2..].iter().all(|&v| v == 0.0));

    // All mass sits in the left half, so the root splits nothing off
    assert_eq!(encoded.angles.node(0, 0), 0.0);
    assert_eq!(encoded.angles, AmplitudeTreeEncoder::encode(&encoded.vector));

    for template in [Template::Tree, Template::Compact] {
        let name = decode_circuit(&Simulator::new(), &AmplitudeDecoder::new(), &encoded.circuit(template), norm)?;
        assert_eq!(name, "hi");
    }
    Ok(())
}

#[test]
fn test_norm_rounded_to_two_decimals_still_decodes() -> Result<(), DeqodeError> {
    // The CLI prints the norm with two decimals; that is enough to decode.
    for name in ["hi", "zzzzzzzz", "grigori", "azazazaz"] {
        let encoded = encode_name(name)?;
        let printed_norm = (encoded.norm * 100.0).round() / 100.0;
        let decoded = decode_angles(
            &Simulator::new(),
            &AmplitudeDecoder::new(),
            Template::Compact,
            &encoded.angles_for(Template::Compact),
            printed_norm,
        )?;
        assert_eq!(decoded, name);
    }
    Ok(())
}
