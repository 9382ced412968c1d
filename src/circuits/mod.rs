// src/circuits/mod.rs

//! Ordered gate sequences and the two ways of building one from seven angles.
//!
//! - [`Circuit::from_angle_tree`]: one (multi-)controlled `RY` per tree node,
//!   with NOT pairs turning "control on 0" into the native "control on 1".
//! - [`Circuit::compact`]: the fixed `RY`/`CNOT` template driven by
//!   [`TemplateAngles`].
//!
//! Both prepare the same state from `|000⟩`.

use crate::core::{NUM_QUBITS, QubitId};
use crate::operations::Operation;
use crate::tree::{AngleTree, TemplateAngles};
use std::fmt;
use tracing::trace;

/// An ordered sequence of operations on a fixed number of qubits.
///
/// The circuit does not validate its operations; executors reject
/// out-of-range qubits and malformed controls when they run it.
#[derive(Clone, PartialEq)]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<Operation>,
}

impl Circuit {
    /// Creates an empty circuit over `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Self {
        Self { num_qubits, operations: Vec::new() }
    }

    /// Appends one operation.
    pub fn add_operation(&mut self, op: Operation) {
        self.operations.push(op);
    }

    /// Appends every operation from `ops`, in order.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        self.operations.extend(ops);
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The ordered operations.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Multiplexed state preparation straight from the tree.
    ///
    /// The node at depth `d` reached by `path` becomes `RY(θ)` on qubit `d`
    /// controlled by qubits `0..d`. Path bits that are 0 get a NOT on their
    /// qubit before and after, so the rotation fires exactly on that branch.
    pub fn from_angle_tree(tree: &AngleTree) -> Self {
        let mut builder = CircuitBuilder::new(NUM_QUBITS);
        for depth in 0..NUM_QUBITS {
            let target = QubitId(depth);
            for (path, &theta) in tree.level(depth).iter().enumerate() {
                if depth == 0 {
                    builder = builder.add_op(Operation::Rotation { target, theta });
                    continue;
                }
                let zero_controls: Vec<QubitId> = (0..depth)
                    .filter(|q| (path >> (depth - 1 - q)) & 1 == 0)
                    .map(QubitId)
                    .collect();
                trace!(depth, path, theta, ?zero_controls, "tree node gate");

                let toggles = || zero_controls.iter().map(|&q| Operation::Flip { target: q });
                builder = builder
                    .add_ops(toggles())
                    .add_op(Operation::ControlledRotation {
                        controls: (0..depth).map(QubitId).collect(),
                        target,
                        theta,
                    })
                    .add_ops(toggles());
            }
        }
        builder.build()
    }

    /// The compact `RY`/`CNOT` template.
    pub fn compact(angles: &TemplateAngles) -> Self {
        let (q0, q1, q2) = (QubitId(0), QubitId(1), QubitId(2));
        CircuitBuilder::new(NUM_QUBITS)
            .ry(q0, angles.alpha)
            .ry(q1, angles.beta)
            .ry(q2, angles.gamma)
            .cnot(q0, q1)
            .ry(q1, angles.theta)
            .cnot(q0, q1)
            .cnot(q1, q2)
            .ry(q2, angles.phi)
            .cnot(q0, q2)
            .ry(q2, angles.mu)
            .cnot(q1, q2)
            .ry(q2, angles.nu)
            .cnot(q0, q2)
            .build()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Method-chaining construction of [`Circuit`]s.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    pub fn new(num_qubits: usize) -> Self {
        Self { circuit: Circuit::new(num_qubits) }
    }

    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.circuit.add_operations(ops);
        self
    }

    /// Shorthand for an uncontrolled [`Operation::Rotation`].
    pub fn ry(self, target: QubitId, theta: f64) -> Self {
        self.add_op(Operation::Rotation { target, theta })
    }

    /// Shorthand for [`Operation::ControlledFlip`].
    pub fn cnot(self, control: QubitId, target: QubitId) -> Self {
        self.add_op(Operation::ControlledFlip { control, target })
    }

    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num_ops = self.operations.len();
        writeln!(f, "Circuit[{} operations on {} qubits]", num_ops, self.num_qubits)?;
        if num_ops == 0 || self.num_qubits == 0 {
            return Ok(());
        }

        const GATE_WIDTH: usize = 7; // e.g. "──RY───"
        const WIRE: &str = "───────";
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        let rows = self.num_qubits;
        let mut op_grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_ops]; rows];
        // v_connect[row][t]: connector drawn below `row` at time `t`
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_ops]; rows];

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total_dashes = GATE_WIDTH - slen;
                let pre_dashes = total_dashes / 2;
                let post_dashes = total_dashes - pre_dashes;
                format!(
                    "{}{}{}",
                    H_WIRE.to_string().repeat(pre_dashes),
                    symbol,
                    H_WIRE.to_string().repeat(post_dashes)
                )
            }
        }

        for (t, op) in self.operations.iter().enumerate() {
            let target_symbol = match op {
                Operation::Rotation { .. } | Operation::ControlledRotation { .. } => "RY",
                Operation::Flip { .. } | Operation::ControlledFlip { .. } => "X",
            };
            // Out-of-range qubits are an executor error; the diagram just skips them.
            let target = op.target().0;
            if target < rows {
                op_grid[target][t] = format_gate(target_symbol);
            }
            let controls: Vec<usize> = op.controls().iter().map(|q| q.0).filter(|&r| r < rows).collect();
            for &r in &controls {
                op_grid[r][t] = format_gate("@");
            }
            let mut span = controls;
            if target < rows {
                span.push(target);
            }
            if let (Some(&r_min), Some(&r_max)) = (span.iter().min(), span.iter().max()) {
                for row_vec in v_connect.iter_mut().take(r_max).skip(r_min) {
                    row_vec[t] = V_WIRE;
                }
            }
        }

        let max_label_width = format!("{}", QubitId(rows - 1)).len();
        let label_padding = " ".repeat(max_label_width + 2);
        for r in 0..rows {
            let label = format!("{}: ", QubitId(r));
            write!(f, "{:<width$}", label, width = max_label_width + 2)?;
            writeln!(f, "{}", op_grid[r].join(""))?;

            if r < rows - 1 {
                write!(f, "{}", label_padding)?;
                for t in 0..num_ops {
                    let padding_needed = GATE_WIDTH.saturating_sub(1);
                    let pre_pad = padding_needed / 2;
                    let post_pad = padding_needed - pre_pad;
                    write!(f, "{}{}{}", " ".repeat(pre_pad), v_connect[r][t], " ".repeat(post_pad))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
