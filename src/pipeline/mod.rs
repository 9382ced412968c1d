// src/pipeline/mod.rs

//! End-to-end encode and decode calls.
//!
//! Encode: name -> unit vector + norm -> angle tree -> circuit.
//! Decode: seven angles + norm -> circuit -> executor -> amplitudes -> name.

use crate::circuits::Circuit;
use crate::codec::{NormalizedVector, VectorBuilder};
use crate::core::{DeqodeError, NUM_ANGLES, Result};
use crate::decode::AmplitudeDecoder;
use crate::simulation::CircuitExecutor;
use crate::tree::{AmplitudeTreeEncoder, AngleTree, TemplateAngles};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// How seven angles are laid out as gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Template {
    /// One controlled `RY` per tree node, angles in heap order.
    #[default]
    Tree,
    /// The `RY`/`CNOT` circuit parametrized by α, β, γ, θ, φ, μ, ν.
    Compact,
}

impl Template {
    /// Builds the circuit for seven user-supplied angles.
    pub fn circuit(self, angles: &[f64]) -> Result<Circuit> {
        Ok(match self {
            Template::Tree => Circuit::from_angle_tree(&AngleTree::from_slice(angles)?),
            Template::Compact => Circuit::compact(&TemplateAngles::from_slice(angles)?),
        })
    }
}

impl FromStr for Template {
    type Err = DeqodeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tree" => Ok(Template::Tree),
            "compact" => Ok(Template::Compact),
            other => Err(DeqodeError::InvalidParameter {
                message: format!("unknown template {other:?} (expected tree or compact)"),
            }),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::Tree => write!(f, "tree"),
            Template::Compact => write!(f, "compact"),
        }
    }
}

/// Everything an encode call produces.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedName {
    pub name: String,
    pub vector: NormalizedVector,
    /// Euclidean length of the code vector; the decoder needs it back.
    pub norm: f64,
    pub angles: AngleTree,
}

impl EncodedName {
    /// The seven angles as they should be entered for `template`.
    pub fn angles_for(&self, template: Template) -> [f64; NUM_ANGLES] {
        match template {
            Template::Tree => *self.angles.angles(),
            Template::Compact => TemplateAngles::from_tree(&self.angles).to_array(),
        }
    }

    /// The state-preparation circuit in the requested layout.
    pub fn circuit(&self, template: Template) -> Circuit {
        match template {
            Template::Tree => Circuit::from_angle_tree(&self.angles),
            Template::Compact => Circuit::compact(&TemplateAngles::from_tree(&self.angles)),
        }
    }
}

/// Encodes `name` into its normalized vector, norm and angle tree.
pub fn encode_name(name: &str) -> Result<EncodedName> {
    let (vector, norm) = VectorBuilder::build(name)?;
    let angles = AmplitudeTreeEncoder::encode(&vector);
    info!(name, norm, "name encoded");
    Ok(EncodedName { name: name.to_string(), vector, norm, angles })
}

/// Runs `circuit` on `executor` and decodes the resulting amplitudes.
pub fn decode_circuit<E: CircuitExecutor + ?Sized>(
    executor: &E,
    decoder: &AmplitudeDecoder,
    circuit: &Circuit,
    norm: f64,
) -> Result<String> {
    let amplitudes = executor.execute(circuit)?;
    let name = decoder.decode(&amplitudes, norm)?;
    info!(%name, "circuit decoded");
    Ok(name)
}

/// Rebuilds the circuit for seven angles laid out as `template` and decodes it.
pub fn decode_angles<E: CircuitExecutor + ?Sized>(
    executor: &E,
    decoder: &AmplitudeDecoder,
    template: Template,
    angles: &[f64],
    norm: f64,
) -> Result<String> {
    let circuit = template.circuit(angles)?;
    decode_circuit(executor, decoder, &circuit, norm)
}
