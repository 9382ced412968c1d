// src/tree/angles.rs

use crate::codec::NormalizedVector;
use crate::core::{DeqodeError, NUM_ANGLES, NUM_QUBITS, Result};
use std::fmt;
use tracing::{debug, trace};

/// Rotation angles of a complete binary tree over the eight amplitudes.
///
/// Stored flat in heap order: the node at depth `d` whose root path reads `s`
/// (qubit 0 as the most significant bit) lives at `2^d - 1 + s`. The angle
/// at a node splits its probability mass as `cos²(θ/2)` to the left child and
/// `sin²(θ/2)` to the right child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleTree([f64; NUM_ANGLES]);

impl AngleTree {
    /// Builds a tree from seven angles in heap order.
    ///
    /// # Errors
    /// `InvalidAngles` for any other count, `InvalidParameter` for a NaN or
    /// infinite angle.
    pub fn from_slice(angles: &[f64]) -> Result<Self> {
        let array: [f64; NUM_ANGLES] = angles.try_into().map_err(|_| DeqodeError::InvalidAngles {
            expected: NUM_ANGLES,
            found: angles.len(),
        })?;
        ensure_finite(&array)?;
        Ok(Self(array))
    }

    pub fn angles(&self) -> &[f64; NUM_ANGLES] {
        &self.0
    }

    /// Angle of the node at `depth` reached by `path`.
    ///
    /// # Panics
    /// If `depth >= NUM_QUBITS` or `path >= 2^depth`.
    pub fn node(&self, depth: usize, path: usize) -> f64 {
        assert!(depth < NUM_QUBITS && path < (1 << depth), "no node at depth {depth}, path {path}");
        self.0[node_index(depth, path)]
    }

    /// Angles of all nodes at `depth`, ordered by path.
    pub fn level(&self, depth: usize) -> &[f64] {
        let start = (1 << depth) - 1;
        &self.0[start..start + (1 << depth)]
    }
}

impl fmt::Display for AngleTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for depth in 0..NUM_QUBITS {
            for (path, angle) in self.level(depth).iter().enumerate() {
                writeln!(f, "{:<6} = {:.6}", node_label(depth, path), angle)?;
            }
        }
        Ok(())
    }
}

/// Heap index of a node.
pub(crate) fn node_index(depth: usize, path: usize) -> usize {
    (1 << depth) - 1 + path
}

/// `θ` for the root, `θ0`/`θ1` at depth one, `θ00`.. at depth two.
pub fn node_label(depth: usize, path: usize) -> String {
    if depth == 0 {
        "θ".to_string()
    } else {
        format!("θ{:0width$b}", path, width = depth)
    }
}

pub(crate) fn ensure_finite(angles: &[f64]) -> Result<()> {
    match angles.iter().position(|a| !a.is_finite()) {
        Some(i) => Err(DeqodeError::InvalidParameter { message: format!("angle {i} is not finite: {}", angles[i]) }),
        None => Ok(()),
    }
}

/// Decomposes a unit vector into the rotation angles that prepare it.
pub struct AmplitudeTreeEncoder;

impl AmplitudeTreeEncoder {
    /// Computes one angle per internal node, top-down.
    ///
    /// Applying the angles as (controlled) `RY` rotations to `|000⟩`
    /// reproduces `vector` as real, non-negative amplitudes.
    pub fn encode(vector: &NormalizedVector) -> AngleTree {
        let mut angles = [0.0; NUM_ANGLES];
        split(vector.values(), 0, 0, &mut angles);
        debug!(?angles, "amplitude tree encoded");
        AngleTree(angles)
    }
}

fn split(amplitudes: &[f64], depth: usize, path: usize, angles: &mut [f64; NUM_ANGLES]) {
    if amplitudes.len() < 2 {
        return;
    }
    let (left, right) = amplitudes.split_at(amplitudes.len() / 2);
    let angle = split_angle(left, amplitudes);
    trace!(depth, path, angle, "tree node");
    angles[node_index(depth, path)] = angle;

    split(left, depth + 1, path << 1, angles);
    split(right, depth + 1, (path << 1) | 1, angles);
}

/// `2·acos(√(p_left / p_total))`, zero for an empty subtree.
fn split_angle(left: &[f64], all: &[f64]) -> f64 {
    let p_total: f64 = all.iter().map(|a| a * a).sum();
    if p_total == 0.0 {
        return 0.0;
    }
    let p_left: f64 = left.iter().map(|a| a * a).sum();
    let ratio = (p_left / p_total).clamp(0.0, 1.0);
    2.0 * ratio.sqrt().acos()
}
