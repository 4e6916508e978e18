//! Register instructions
//!
//! An [`Instruction`] pairs an operator with the register positions it acts
//! on. Instruction sequences can also be written as a flat stream of
//! [`InstructionToken`]s, where each operator token opens a new instruction
//! and the index tokens that follow it are its targets:
//!
//! ```
//! use qdense_core::instruction::{Instruction, InstructionToken};
//! use qdense_core::matrix::{Matrix, PAULI_X};
//!
//! let x = Matrix::from_array(&PAULI_X);
//! let tokens = vec![
//!     InstructionToken::from(x.clone()),
//!     InstructionToken::Target(0),
//!     InstructionToken::from(x),
//!     InstructionToken::Target(2),
//! ];
//! let instructions = Instruction::from_tokens(&tokens).unwrap();
//! assert_eq!(instructions.len(), 2);
//! assert_eq!(instructions[1].targets()[0].index(), 2);
//! ```

use crate::matrix::Matrix;
use crate::{QuantumError, QubitId, Result};
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// An operator applied to an ordered list of register positions
///
/// Target `i` is the register position receiving the operator's `i`-th
/// qubit (its `i`-th most significant bit). An empty target list means the
/// operator already spans the whole register.
#[derive(Clone, PartialEq)]
pub struct Instruction {
    operator: Arc<Matrix>,
    targets: SmallVec<[QubitId; 2]>, // Most operators touch 1-2 qubits
}

impl Instruction {
    /// Create an instruction
    ///
    /// Register-independent checks happen here; range checks against a
    /// concrete register happen when the instruction is embedded.
    ///
    /// # Errors
    /// - [`QuantumError::DimensionMismatch`] if the operator is not a square
    ///   power-of-two matrix, or a non-empty target list has the wrong length
    /// - [`QuantumError::DuplicateTarget`] if a position is named twice
    pub fn new(operator: impl Into<Arc<Matrix>>, targets: &[usize]) -> Result<Self> {
        let operator = operator.into();
        let width = operator
            .num_qubits()
            .ok_or_else(|| QuantumError::invalid_operator(operator.rows(), operator.cols()))?;

        if !targets.is_empty() && targets.len() != width {
            return Err(QuantumError::target_count(width, targets.len()));
        }

        let targets: SmallVec<[QubitId; 2]> = targets.iter().map(|&t| QubitId::new(t)).collect();
        if let Some(dup) = first_duplicate(&targets) {
            return Err(QuantumError::DuplicateTarget(dup));
        }

        Ok(Self { operator, targets })
    }

    /// Instruction whose operator already spans the full register
    pub fn full(operator: impl Into<Arc<Matrix>>) -> Result<Self> {
        Self::new(operator, &[])
    }

    #[inline]
    pub fn operator(&self) -> &Matrix {
        &self.operator
    }

    #[inline]
    pub fn targets(&self) -> &[QubitId] {
        &self.targets
    }

    /// Number of qubits the operator acts on
    pub fn width(&self) -> usize {
        self.operator.num_qubits().unwrap_or(0)
    }

    /// Normalize a mixed operator/index stream into instructions
    ///
    /// # Errors
    /// Returns [`QuantumError::InvalidToken`] when an index appears before
    /// any operator, plus any error from [`Instruction::new`].
    pub fn from_tokens(tokens: &[InstructionToken]) -> Result<Vec<Instruction>> {
        let mut instructions = Vec::new();
        let mut current: Option<(Arc<Matrix>, Vec<usize>)> = None;

        for (position, token) in tokens.iter().enumerate() {
            match token {
                InstructionToken::Operator(op) => {
                    if let Some((prev, targets)) = current.take() {
                        instructions.push(Instruction::new(prev, &targets)?);
                    }
                    current = Some((Arc::clone(op), Vec::new()));
                }
                InstructionToken::Target(index) => match current.as_mut() {
                    Some((_, targets)) => targets.push(*index),
                    None => {
                        return Err(QuantumError::InvalidToken(format!(
                            "target {} at position {} precedes any operator",
                            index, position
                        )))
                    }
                },
            }
        }

        if let Some((op, targets)) = current {
            instructions.push(Instruction::new(op, &targets)?);
        }

        Ok(instructions)
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instruction")
            .field("dimension", &self.operator.rows())
            .field("targets", &self.targets)
            .finish()
    }
}

/// One element of a flattened instruction stream
#[derive(Debug, Clone, PartialEq)]
pub enum InstructionToken {
    /// Opens a new instruction
    Operator(Arc<Matrix>),
    /// Target position for the most recent operator
    Target(usize),
}

impl From<Matrix> for InstructionToken {
    fn from(m: Matrix) -> Self {
        Self::Operator(Arc::new(m))
    }
}

impl From<Arc<Matrix>> for InstructionToken {
    fn from(m: Arc<Matrix>) -> Self {
        Self::Operator(m)
    }
}

impl From<usize> for InstructionToken {
    fn from(index: usize) -> Self {
        Self::Target(index)
    }
}

fn first_duplicate(targets: &[QubitId]) -> Option<QubitId> {
    for i in 0..targets.len() {
        for j in (i + 1)..targets.len() {
            if targets[i] == targets[j] {
                return Some(targets[i]);
            }
        }
    }
    None
}
