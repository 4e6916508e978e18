//! Operator construction for the qdense register simulator
//!
//! This crate turns small local operators into full-register operators:
//! - [`IdentityCache`]: memoized `2^n × 2^n` identities
//! - [`ShiftBuilder`]: permutation operators relocating one qubit position
//! - [`OperatorEmbedder`]: a `k`-qubit operator placed on arbitrary positions
//! - [`InstructionCompiler`]: an instruction sequence folded into one operator
//!
//! # Example
//!
//! ```
//! use qdense_compiler::{IdentityCache, InstructionCompiler};
//! use qdense_core::matrix::{Matrix, PAULI_X};
//! use qdense_core::Instruction;
//! use std::sync::Arc;
//!
//! let cache = Arc::new(IdentityCache::new());
//! let compiler = InstructionCompiler::new(3, cache);
//!
//! let x = Matrix::from_array(&PAULI_X);
//! let program = vec![Instruction::new(x, &[2]).unwrap()];
//! let op = compiler.compile(&program).unwrap();
//! assert_eq!(op.rows(), 8);
//! ```

pub mod compiler;
pub mod embed;
pub mod identity_cache;
pub mod shift;

pub use compiler::InstructionCompiler;
pub use embed::OperatorEmbedder;
pub use identity_cache::{CacheStatistics, IdentityCache};
pub use shift::{basic_shift, ShiftBuilder};
