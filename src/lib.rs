// src/lib.rs

//! `deqode` - hide a short name in the amplitudes of a three-qubit state.
//!
//! A name of up to eight lowercase letters becomes a vector of letter codes,
//! which is normalized and decomposed into seven `RY` rotation angles. Running
//! those rotations on `|000⟩` reproduces the normalized vector as amplitudes;
//! scaling the amplitudes back by the norm and rounding recovers the name.

pub mod core;
pub mod codec;
pub mod tree;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod decode;
pub mod validation;
pub mod pipeline;

// Re-export the most common types for easier top-level use
pub use core::{AmplitudeVector, DeqodeError, QubitId, Result};
pub use codec::{CodeVector, NormalizedVector, VectorBuilder};
pub use tree::{AmplitudeTreeEncoder, AngleTree, TemplateAngles};
pub use operations::Operation;
pub use circuits::{Circuit, CircuitBuilder};
pub use simulation::{CircuitExecutor, SimulationResult, Simulator, SimulatorConfig};
pub use decode::{AmplitudeDecoder, DecoderConfig, RoundingMode};
pub use validation::{check_normalization, check_real, validate_state};
pub use pipeline::{EncodedName, Template, decode_angles, decode_circuit, encode_name};

// Example 1: Encode a name and decode it back through the simulator.
/// ```
/// use deqode::{encode_name, decode_circuit, AmplitudeDecoder, Simulator, Template};
///
/// let encoded = encode_name("hi").expect("valid name");
/// println!("norm = {:.2}", encoded.norm);
/// println!("{}", encoded.angles);
///
/// let circuit = encoded.circuit(Template::Tree);
/// println!("{}", circuit);
///
/// let name = decode_circuit(&Simulator::new(), &AmplitudeDecoder::new(), &circuit, encoded.norm)
///     .expect("decodes");
/// assert_eq!(name, "hi");
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Decode from seven hand-entered compact parameters.
/// ```
/// use deqode::{decode_angles, encode_name, AmplitudeDecoder, DeqodeError, Simulator, Template};
///
/// let encoded = encode_name("grigori")?;
/// let alpha_to_nu = encoded.angles_for(Template::Compact);
///
/// let name = decode_angles(
///     &Simulator::new(),
///     &AmplitudeDecoder::new(),
///     Template::Compact,
///     &alpha_to_nu,
///     encoded.norm,
/// )?;
/// assert_eq!(name, "grigori");
///
/// // A bad name never gets that far.
/// assert!(matches!(encode_name("Grigori"), Err(DeqodeError::InvalidName { .. })));
/// # Ok::<(), DeqodeError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
