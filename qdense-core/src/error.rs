//! Error types for qdense

use crate::QubitId;
use thiserror::Error;

/// Errors raised while building or combining register operators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    /// Operator size is not a power of two, or does not fit the register or target list
    #[error("Dimension mismatch: {reason}")]
    DimensionMismatch { reason: String },

    /// Qubit index outside the register
    #[error("Qubit index {index} out of range for {num_qubits}-qubit register")]
    IndexOutOfRange { index: usize, num_qubits: usize },

    /// The same qubit named twice in one target list
    #[error("Duplicate target {0} in instruction")]
    DuplicateTarget(QubitId),

    /// Matrix operands whose shapes are incompatible for the requested operation
    #[error("Cannot {op} matrices of shape {lhs:?} and {rhs:?}")]
    ShapeMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// Malformed mixed operator/index instruction stream
    #[error("Invalid instruction stream: {0}")]
    InvalidToken(String),
}

impl QuantumError {
    /// Operator dimension that is not a power of two
    pub fn not_power_of_two(dimension: usize) -> Self {
        Self::DimensionMismatch {
            reason: format!("operator dimension {} is not a power of two", dimension),
        }
    }

    /// Operator with a different number of rows and columns
    pub fn not_square(rows: usize, cols: usize) -> Self {
        Self::DimensionMismatch {
            reason: format!("operator of shape {}x{} is not square", rows, cols),
        }
    }

    /// Operator that does not act on a whole number of qubits
    pub fn invalid_operator(rows: usize, cols: usize) -> Self {
        if rows != cols {
            Self::not_square(rows, cols)
        } else {
            Self::not_power_of_two(rows)
        }
    }

    /// Target list whose length disagrees with the operator width
    pub fn target_count(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            reason: format!(
                "operator acts on {} qubits but {} targets were given",
                expected, actual
            ),
        }
    }

    /// Operator wider than the register it is applied to
    pub fn register_size(num_qubits: usize, dimension: usize) -> Self {
        Self::DimensionMismatch {
            reason: format!(
                "operator of dimension {} does not fit a {}-qubit register",
                dimension, num_qubits
            ),
        }
    }

    /// Qubit index outside `[0, num_qubits)`
    pub fn out_of_range(index: usize, num_qubits: usize) -> Self {
        Self::IndexOutOfRange { index, num_qubits }
    }
}
