//! Dense quantum register state for qdense
//!
//! This crate provides the register a user works with:
//! - [`RegisterState`]: the `2^n` amplitude vector, updated by full-register operators
//! - [`Qubit`]: a borrowed handle addressing one position
//! - [`BasisState`]: basis states keyed by position, used for probabilities
//! - [`RegisterConfig`]: size limits and tolerances
//!
//! # Example
//!
//! ```
//! use qdense_core::matrix::{Matrix, PAULI_X};
//! use qdense_core::Instruction;
//! use qdense_state::RegisterState;
//!
//! let mut reg = RegisterState::new(2).unwrap();
//! let x = Matrix::from_array(&PAULI_X);
//! reg.apply_instructions(&[
//!     Instruction::new(x.clone(), &[0]).unwrap(),
//!     Instruction::new(x, &[1]).unwrap(),
//! ])
//! .unwrap();
//!
//! // Both positions flipped: |11⟩
//! assert_eq!(reg.amplitudes()[3].re, 1.0);
//! ```

pub mod basis;
pub mod config;
pub mod error;
pub mod qubit;
pub mod register;

pub use basis::BasisState;
pub use config::RegisterConfig;
pub use error::{Result, StateError};
pub use qubit::Qubit;
pub use register::RegisterState;
