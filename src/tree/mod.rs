// src/tree/mod.rs

//! Recursive state preparation: unit vectors to rotation angles.
//!
//! [`AmplitudeTreeEncoder`] walks the binary tree over the eight amplitudes and
//! records one `RY` angle per internal node. [`TemplateAngles`] re-expresses
//! the same tree as the seven parameters of the compact CNOT circuit.

mod angles;
mod template;

pub use angles::{AmplitudeTreeEncoder, AngleTree, node_label};
pub use template::TemplateAngles;
