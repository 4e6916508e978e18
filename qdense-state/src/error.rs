//! Error types for register state operations

use qdense_core::QuantumError;
use thiserror::Error;

/// Errors that can occur while creating or updating a register
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Operator construction failed; the register is unchanged
    #[error(transparent)]
    Operator(#[from] QuantumError),

    /// Qubit count of zero or above the configured maximum
    #[error("Invalid qubit count {num_qubits}, expected 1..={max_qubits}")]
    InvalidQubitCount { num_qubits: usize, max_qubits: usize },

    /// Raw amplitude slice whose length is not 2^n
    #[error("Expected {expected} amplitudes, got {actual}")]
    AmplitudeCountMismatch { expected: usize, actual: usize },
}

/// Result type for register state operations
pub type Result<T> = std::result::Result<T, StateError>;
