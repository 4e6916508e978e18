//! Core types for the qdense register simulator
//!
//! This crate provides the numeric layer and shared vocabulary:
//! - [`Matrix`]: dense complex matrices with multiplication and tensor product
//! - [`QubitId`]: register positions
//! - [`Instruction`]: an operator bound to target positions
//! - [`QuantumError`]: errors raised while building operators
//!
//! # Example
//! ```
//! use qdense_core::{Instruction, Matrix};
//!
//! let cnot_like = Matrix::identity(4);
//! let inst = Instruction::new(cnot_like, &[2, 0]).unwrap();
//! assert_eq!(inst.width(), 2);
//! ```

pub mod error;
pub mod instruction;
pub mod matrix;
pub mod qubit;

pub use error::QuantumError;
pub use instruction::{Instruction, InstructionToken};
pub use matrix::Matrix;
pub use num_complex::Complex64;
pub use qubit::QubitId;

/// Result type for qdense operator construction
pub type Result<T> = std::result::Result<T, QuantumError>;
