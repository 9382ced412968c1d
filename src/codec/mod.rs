// src/codec/mod.rs

//! Letters to codes, names to unit vectors.

mod character;
mod vector;

pub use character::{char_to_code, code_to_char};
pub use vector::{CodeVector, NormalizedVector, VectorBuilder};
