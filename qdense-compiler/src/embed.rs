//! Operator embedding
//!
//! Lifts a `k`-qubit operator to an `n`-qubit register operator acting on
//! an arbitrary ordered list of register positions:
//!
//! 1. **Gather.** Shift operators bring the target positions, in list
//!    order, into the leading slots `0..k`. Each shift moves one position
//!    and slides the positions between it and its slot by one, so every
//!    not-yet-gathered target that lay below the one just moved is
//!    renumbered up by one ([`scatter_plan`]).
//! 2. **Apply.** The operator acts on the leading slots: `op ⊗ I^{⊗(n-k)}`.
//! 3. **Scatter.** The inverse shifts, applied in reverse order, put every
//!    position back.
//!
//! The embedded operator is `scatter · (op ⊗ I…) · gather`.
//!
//! # Example
//!
//! ```
//! use qdense_compiler::{IdentityCache, OperatorEmbedder};
//! use qdense_core::matrix::{Matrix, PAULI_X};
//! use std::sync::Arc;
//!
//! let embedder = OperatorEmbedder::new(Arc::new(IdentityCache::new()));
//! let x = Matrix::from_array(&PAULI_X);
//!
//! // X on the last qubit of a 3-qubit register flips bit 0 of the index
//! let full = embedder.embed_indices(3, &x, &[2]).unwrap();
//! assert_eq!(full.get(0b001, 0b000).re, 1.0);
//! ```

use crate::identity_cache::IdentityCache;
use crate::shift::ShiftBuilder;
use qdense_core::{Instruction, Matrix, QuantumError, QubitId, Result};
use std::sync::Arc;
use tracing::trace;

/// Register positions consumed by each gather step
///
/// Entry `i` is the position the operator's `i`-th qubit occupies at the
/// moment it is shifted into slot `i`, after the earlier shifts have moved
/// things around.
///
/// ```
/// use qdense_compiler::embed::scatter_plan;
/// use qdense_core::QubitId;
///
/// let targets = [QubitId::new(2), QubitId::new(0)];
/// // Moving position 2 into slot 0 pushes position 0 up to 1
/// assert_eq!(scatter_plan(&targets), vec![2, 1]);
/// ```
pub fn scatter_plan(targets: &[QubitId]) -> Vec<usize> {
    let mut positions: Vec<usize> = targets.iter().map(|q| q.index()).collect();
    for i in 0..positions.len() {
        let moved = positions[i];
        for later in &mut positions[i + 1..] {
            if *later < moved {
                *later += 1;
            }
        }
    }
    positions
}

/// Check an operator/target pair against a register of `num_qubits`
///
/// Returns the operator width on success.
pub fn validate(num_qubits: usize, op: &Matrix, targets: &[QubitId]) -> Result<usize> {
    let width = op
        .num_qubits()
        .ok_or_else(|| QuantumError::invalid_operator(op.rows(), op.cols()))?;

    if width > num_qubits || (targets.is_empty() && width != num_qubits) {
        return Err(QuantumError::register_size(num_qubits, op.rows()));
    }
    if !targets.is_empty() && targets.len() != width {
        return Err(QuantumError::target_count(width, targets.len()));
    }

    for (i, target) in targets.iter().enumerate() {
        if target.index() >= num_qubits {
            return Err(QuantumError::out_of_range(target.index(), num_qubits));
        }
        if targets[..i].contains(target) {
            return Err(QuantumError::DuplicateTarget(*target));
        }
    }

    Ok(width)
}

/// Embeds local operators into full-register operators
#[derive(Debug, Clone)]
pub struct OperatorEmbedder {
    shifts: ShiftBuilder,
}

impl OperatorEmbedder {
    pub fn new(cache: Arc<IdentityCache>) -> Self {
        Self {
            shifts: ShiftBuilder::new(cache),
        }
    }

    pub fn cache(&self) -> &Arc<IdentityCache> {
        self.shifts.cache()
    }

    pub fn shifts(&self) -> &ShiftBuilder {
        &self.shifts
    }

    /// Full-register operator equivalent to `op` acting on `targets`
    ///
    /// `targets[i]` receives the operator's `i`-th (most significant first)
    /// qubit; every other position sees the identity. An empty target list
    /// requires `op` to already span the register and returns it as is.
    ///
    /// # Errors
    /// - [`QuantumError::DimensionMismatch`] for a non power-of-two operator,
    ///   an operator wider than the register, or a target count that does
    ///   not match the operator width
    /// - [`QuantumError::IndexOutOfRange`] for a target outside the register
    /// - [`QuantumError::DuplicateTarget`] for a repeated target
    pub fn embed(&self, num_qubits: usize, op: &Matrix, targets: &[QubitId]) -> Result<Matrix> {
        let width = validate(num_qubits, op, targets)?;
        trace!(num_qubits, width, ?targets, "embedding operator");

        if targets.is_empty() {
            return Ok(op.clone());
        }

        let plan = scatter_plan(targets);
        let identity = self.cache().identity(num_qubits);

        let mut gather = (*identity).clone();
        for (slot, &current) in plan.iter().enumerate() {
            let step = self.shifts.full_shift(num_qubits, current, slot)?;
            gather = step.multiply(&gather)?;
        }

        let mut scatter = (*identity).clone();
        for (slot, &current) in plan.iter().enumerate().rev() {
            let step = self.shifts.full_shift(num_qubits, slot, current)?;
            scatter = step.multiply(&scatter)?;
        }

        let local = op.tensor(&self.cache().identity(num_qubits - width));
        scatter.multiply(&local.multiply(&gather)?)
    }

    /// [`embed`](Self::embed) with raw position indices
    pub fn embed_indices(
        &self,
        num_qubits: usize,
        op: &Matrix,
        targets: &[usize],
    ) -> Result<Matrix> {
        let targets: Vec<QubitId> = targets.iter().map(|&t| QubitId::new(t)).collect();
        self.embed(num_qubits, op, &targets)
    }

    /// Embed a prepared instruction
    pub fn embed_instruction(
        &self,
        num_qubits: usize,
        instruction: &Instruction,
    ) -> Result<Matrix> {
        self.embed(num_qubits, instruction.operator(), instruction.targets())
    }
}

impl Default for OperatorEmbedder {
    fn default() -> Self {
        Self::new(IdentityCache::shared())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qdense_core::matrix::PAULI_X;
    use qdense_core::Complex64;

    const ONE: Complex64 = Complex64::new(1.0, 0.0);

    fn embedder() -> OperatorEmbedder {
        OperatorEmbedder::new(Arc::new(IdentityCache::new()))
    }

    fn ids(raw: &[usize]) -> Vec<QubitId> {
        raw.iter().map(|&i| QubitId::new(i)).collect()
    }

    fn x() -> Matrix {
        Matrix::from_array(&PAULI_X)
    }

    /// Controlled-NOT with the operator's first qubit as control
    fn cnot() -> Matrix {
        let mut m = Matrix::zeros(4, 4);
        m.set(0, 0, ONE);
        m.set(1, 1, ONE);
        m.set(2, 3, ONE);
        m.set(3, 2, ONE);
        m
    }

    fn image_of(m: &Matrix, column: usize) -> usize {
        (0..m.rows()).find(|&r| m.get(r, column) == ONE).unwrap()
    }

    #[test]
    fn test_scatter_plan_renumbering() {
        assert_eq!(scatter_plan(&ids(&[0, 2])), vec![0, 2]);
        assert_eq!(scatter_plan(&ids(&[2, 0])), vec![2, 1]);
        assert_eq!(scatter_plan(&ids(&[1, 2, 0])), vec![1, 2, 2]);
        assert_eq!(scatter_plan(&ids(&[3, 1, 2, 0])), vec![3, 2, 3, 3]);
        assert_eq!(scatter_plan(&ids(&[0, 1, 2])), vec![0, 1, 2]);
    }

    #[test]
    fn test_leading_targets_match_plain_tensor() {
        let e = embedder();
        let full = e.embed_indices(3, &cnot(), &[0, 1]).unwrap();
        assert_eq!(full, cnot().tensor(&Matrix::i()));
    }

    #[test]
    fn test_single_qubit_each_position() {
        let e = embedder();
        let i = Matrix::i();
        let expected = [
            x().tensor(&i).tensor(&i),
            i.tensor(&x()).tensor(&i),
            i.tensor(&i).tensor(&x()),
        ];
        for (t, want) in expected.iter().enumerate() {
            let full = e.embed_indices(3, &x(), &[t]).unwrap();
            assert_eq!(&full, want, "target {}", t);
        }
    }

    #[test]
    fn test_target_order_matters() {
        let e = embedder();
        let forward = e.embed_indices(3, &cnot(), &[0, 2]).unwrap();
        let reversed = e.embed_indices(3, &cnot(), &[2, 0]).unwrap();
        assert_ne!(forward, reversed);

        // Control on position 0, target on position 2
        assert_eq!(image_of(&forward, 0b100), 0b101);
        assert_eq!(image_of(&forward, 0b001), 0b001);
        // Control on position 2, target on position 0
        assert_eq!(image_of(&reversed, 0b001), 0b101);
        assert_eq!(image_of(&reversed, 0b100), 0b100);
    }

    #[test]
    fn test_middle_position_untouched() {
        let e = embedder();
        let full = e.embed_indices(3, &cnot(), &[2, 0]).unwrap();
        for column in 0..8 {
            let row = image_of(&full, column);
            assert_eq!(row & 0b010, column & 0b010);
        }
    }

    #[test]
    fn test_full_width_operator_without_targets() {
        let e = embedder();
        let op = cnot().tensor(&x());
        assert_eq!(e.embed(3, &op, &[]).unwrap(), op);
    }

    #[test]
    fn test_embedded_permutation_stays_permutation() {
        let e = embedder();
        let toffoli_like = cnot().tensor(&Matrix::i());
        let full = e.embed_indices(4, &toffoli_like, &[3, 0, 2]).unwrap();
        assert!(full.is_permutation());
        assert_eq!(full.rows(), 16);
    }

    #[test]
    fn test_invalid_operator_dimension() {
        let e = embedder();
        let err = e.embed_indices(3, &Matrix::identity(3), &[0]).unwrap_err();
        assert!(matches!(err, QuantumError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_non_square_operator() {
        let e = embedder();
        let err = e.embed_indices(3, &Matrix::zeros(4, 2), &[0, 1]).unwrap_err();
        assert_eq!(err, QuantumError::not_square(4, 2));
    }

    #[test]
    fn test_target_count_mismatch() {
        let e = embedder();
        let err = e.embed_indices(3, &cnot(), &[1]).unwrap_err();
        assert!(matches!(err, QuantumError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_missing_targets_for_narrow_operator() {
        let e = embedder();
        let err = e.embed(3, &x(), &[]).unwrap_err();
        assert!(matches!(err, QuantumError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_operator_wider_than_register() {
        let e = embedder();
        let err = e.embed_indices(1, &cnot(), &[0, 1]).unwrap_err();
        assert!(matches!(err, QuantumError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_out_of_range_target() {
        let e = embedder();
        let err = e.embed_indices(3, &x(), &[3]).unwrap_err();
        assert_eq!(
            err,
            QuantumError::IndexOutOfRange {
                index: 3,
                num_qubits: 3
            }
        );
    }

    #[test]
    fn test_duplicate_target() {
        let e = embedder();
        let err = e.embed_indices(3, &cnot(), &[1, 1]).unwrap_err();
        assert_eq!(err, QuantumError::DuplicateTarget(QubitId::new(1)));
    }
}
