//! Instruction compilation
//!
//! Folds an ordered instruction sequence into one register operator. The
//! first instruction ends up rightmost in the product, so applying the
//! compiled operator to a state is the same as applying the instructions
//! one after another.

use crate::embed::OperatorEmbedder;
use crate::identity_cache::IdentityCache;
use qdense_core::{Instruction, InstructionToken, Matrix, Result};
use std::sync::Arc;
use tracing::debug;

/// Compiles instruction sequences for a register of fixed size
#[derive(Debug, Clone)]
pub struct InstructionCompiler {
    num_qubits: usize,
    embedder: OperatorEmbedder,
}

impl InstructionCompiler {
    pub fn new(num_qubits: usize, cache: Arc<IdentityCache>) -> Self {
        Self {
            num_qubits,
            embedder: OperatorEmbedder::new(cache),
        }
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn embedder(&self) -> &OperatorEmbedder {
        &self.embedder
    }

    /// Register operator for the whole sequence
    ///
    /// An empty sequence compiles to the register identity.
    ///
    /// # Example
    /// ```
    /// use qdense_compiler::{IdentityCache, InstructionCompiler};
    /// use qdense_core::matrix::{Matrix, PAULI_X};
    /// use qdense_core::Instruction;
    /// use std::sync::Arc;
    ///
    /// let compiler = InstructionCompiler::new(1, Arc::new(IdentityCache::new()));
    /// let x = Matrix::from_array(&PAULI_X);
    /// let program = vec![
    ///     Instruction::new(x.clone(), &[0]).unwrap(),
    ///     Instruction::new(x, &[0]).unwrap(),
    /// ];
    /// assert_eq!(compiler.compile(&program).unwrap(), Matrix::identity(2));
    /// ```
    pub fn compile(&self, instructions: &[Instruction]) -> Result<Matrix> {
        let mut compiled = (*self.embedder.cache().identity(self.num_qubits)).clone();
        for instruction in instructions {
            let embedded = self.embedder.embed_instruction(self.num_qubits, instruction)?;
            compiled = embedded.multiply(&compiled)?;
        }
        debug!(
            num_qubits = self.num_qubits,
            instructions = instructions.len(),
            "compiled instruction sequence"
        );
        Ok(compiled)
    }

    /// Compile a flattened operator/index stream
    ///
    /// The stream is normalized with [`Instruction::from_tokens`] first, so
    /// it produces the same operator as the equivalent explicit sequence.
    pub fn compile_tokens(&self, tokens: &[InstructionToken]) -> Result<Matrix> {
        let instructions = Instruction::from_tokens(tokens)?;
        self.compile(&instructions)
    }
}
