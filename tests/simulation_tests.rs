// tests/simulation_tests.rs

// Import necessary types from the deqode crate
use deqode::{
    AmplitudeVector, Circuit, CircuitBuilder, CircuitExecutor, DeqodeError, Operation, QubitId, Simulator,
    SimulatorConfig, Template, encode_name,
};

use std::f64::consts::{FRAC_PI_2, PI};

const TOLERANCE: f64 = 1e-9;

// Helper function to create QubitId for tests
fn qid(id: usize) -> QubitId {
    QubitId(id)
}

// Helper function to compare a state against expected real amplitudes
fn assert_real_amplitudes(state: &AmplitudeVector, expected: &[f64], context: &str) {
    assert_eq!(state.dim(), expected.len(), "Dimension mismatch - {}", context);
    for (k, (actual, want)) in state.amplitudes().iter().zip(expected).enumerate() {
        assert!(
            (actual.re - want).abs() < TOLERANCE && actual.im.abs() < TOLERANCE,
            "Amplitude {} mismatch - Actual: {}, Expected: {}, Context: {}",
            k, actual, want, context
        );
    }
}

fn basis(index: usize) -> Vec<f64> {
    let mut values = vec![0.0; 8];
    values[index] = 1.0;
    values
}

#[test]
fn test_empty_circuit() -> Result<(), DeqodeError> {
    let state = Simulator::new().execute(&Circuit::new(3))?;
    assert_real_amplitudes(&state, &basis(0), "no operations leaves |000⟩");
    Ok(())
}

#[test]
fn test_rotation_half_turn_on_each_qubit() -> Result<(), DeqodeError> {
    // Qubit 0 is the most significant bit of the basis index
    for (qubit, index) in [(0, 4), (1, 2), (2, 1)] {
        let circuit = CircuitBuilder::new(3).ry(qid(qubit), PI).build();
        let state = Simulator::new().execute(&circuit)?;
        assert_real_amplitudes(&state, &basis(index), &format!("RY(π) on q{qubit}"));
    }
    Ok(())
}

#[test]
fn test_flip_operation() -> Result<(), DeqodeError> {
    let circuit = CircuitBuilder::new(3).add_op(Operation::Flip { target: qid(2) }).build();
    let state = Simulator::new().execute(&circuit)?;
    assert_real_amplitudes(&state, &basis(1), "X on q2");
    Ok(())
}

#[test]
fn test_controlled_rotation_needs_every_control_set() -> Result<(), DeqodeError> {
    let rotation = Operation::ControlledRotation { controls: vec![qid(0), qid(1)], target: qid(2), theta: PI };

    // Only q0 set: the rotation must not fire
    let partial = CircuitBuilder::new(3)
        .add_op(Operation::Flip { target: qid(0) })
        .add_op(rotation.clone())
        .build();
    assert_real_amplitudes(&Simulator::new().execute(&partial)?, &basis(4), "one control set");

    let full = CircuitBuilder::new(3)
        .add_op(Operation::Flip { target: qid(0) })
        .add_op(Operation::Flip { target: qid(1) })
        .add_op(rotation)
        .build();
    assert_real_amplitudes(&Simulator::new().execute(&full)?, &basis(7), "both controls set");
    Ok(())
}

#[test]
fn test_superposition_then_cnot() -> Result<(), DeqodeError> {
    let circuit = CircuitBuilder::new(3)
        .ry(qid(0), FRAC_PI_2)
        .cnot(qid(0), qid(2))
        .build();
    let state = Simulator::new().execute(&circuit)?;
    let h = std::f64::consts::FRAC_1_SQRT_2;
    assert_real_amplitudes(&state, &[h, 0.0, 0.0, 0.0, 0.0, h, 0.0, 0.0], "|000⟩ + |101⟩");
    Ok(())
}

#[test]
fn test_tree_circuit_prepares_encoded_vector() -> Result<(), DeqodeError> {
    for name in ["hi", "abcdefgh", "zzzzzzzz", "grigori", "q"] {
        let encoded = encode_name(name)?;
        for template in [Template::Tree, Template::Compact] {
            let state = Simulator::new().execute(&encoded.circuit(template))?;
            assert_real_amplitudes(&state, encoded.vector.values(), &format!("{name} via {template}"));
        }
    }
    Ok(())
}

#[test]
fn test_tree_and_compact_agree() -> Result<(), DeqodeError> {
    let encoded = encode_name("bob")?;
    let simulator = Simulator::new();
    let tree = simulator.execute(&encoded.circuit(Template::Tree))?;
    let compact = simulator.execute(&encoded.circuit(Template::Compact))?;
    assert_real_amplitudes(&compact, &tree.real_parts(), "tree vs compact");
    Ok(())
}

#[test]
fn test_malformed_circuits_rejected() {
    let simulator = Simulator::new();

    let out_of_range = CircuitBuilder::new(3).cnot(qid(0), qid(3)).build();
    assert_eq!(
        simulator.execute(&out_of_range),
        Err(DeqodeError::QubitOutOfRange { qubit: qid(3), num_qubits: 3 })
    );

    let self_controlled = CircuitBuilder::new(3).cnot(qid(1), qid(1)).build();
    assert!(matches!(simulator.execute(&self_controlled), Err(DeqodeError::InvalidOperation { .. })));

    let repeated = CircuitBuilder::new(3)
        .add_op(Operation::ControlledRotation { controls: vec![qid(0), qid(0)], target: qid(1), theta: 0.2 })
        .build();
    assert!(matches!(simulator.execute(&repeated), Err(DeqodeError::InvalidOperation { .. })));

    let nan = CircuitBuilder::new(3).ry(qid(0), f64::NAN).build();
    assert!(matches!(simulator.execute(&nan), Err(DeqodeError::InvalidOperation { .. })));
}

#[test]
fn test_validation_can_be_disabled() -> Result<(), DeqodeError> {
    let simulator = Simulator::with_config(SimulatorConfig { validate: false, ..SimulatorConfig::default() });
    let circuit = CircuitBuilder::new(3).ry(qid(1), 1.0).build();
    assert_eq!(simulator.execute(&circuit)?, Simulator::new().execute(&circuit)?);
    Ok(())
}

#[test]
fn test_sampling_hi_state() -> Result<(), DeqodeError> {
    let encoded = encode_name("hi")?;
    let result = Simulator::new().run(&encoded.circuit(Template::Tree))?;

    let counts = result.sample_counts(1000, 42);
    assert_eq!(counts.values().sum::<u64>(), 1000);
    assert!(counts.keys().all(|&k| k <= 1), "only |000⟩ and |001⟩ carry weight: {counts:?}");
    assert_eq!(counts, result.sample_counts(1000, 42));

    let listing = result.to_string();
    assert!(listing.starts_with("Simulation Results:"));
    assert!(listing.contains("|001⟩"));
    Ok(())
}
