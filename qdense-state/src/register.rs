//! Dense register state
//!
//! [`RegisterState`] owns a `2^n × 1` state vector and updates it only by
//! left-multiplying a fully built register operator. Operators are
//! constructed first and the vector is replaced afterwards, so a failed
//! apply leaves the register exactly as it was.

use crate::basis::BasisState;
use crate::config::RegisterConfig;
use crate::error::{Result, StateError};
use crate::qubit::Qubit;
use num_complex::Complex64;
use qdense_compiler::{IdentityCache, InstructionCompiler};
use qdense_core::{Instruction, InstructionToken, Matrix, QuantumError, QubitId};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// State of an `n`-qubit register as a dense amplitude vector
///
/// Cloning copies the amplitudes, so clones can branch independently.
///
/// # Example
/// ```
/// use qdense_state::{BasisState, RegisterState};
/// use qdense_core::matrix::{Matrix, PAULI_X};
///
/// let mut reg = RegisterState::new(3).unwrap();
/// reg.apply(&Matrix::from_array(&PAULI_X), &[1]).unwrap();
///
/// let probs = reg.probabilities();
/// assert_eq!(probs[&BasisState::from_bits(&[0, 1, 0])], 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct RegisterState {
    num_qubits: usize,
    vector: Matrix,
    config: RegisterConfig,
    compiler: InstructionCompiler,
}

impl RegisterState {
    /// Create a register in `|0…0⟩` with the default configuration
    ///
    /// # Errors
    /// Returns [`StateError::InvalidQubitCount`] for zero qubits or more than
    /// the configured maximum.
    pub fn new(num_qubits: usize) -> Result<Self> {
        Self::with_config(num_qubits, RegisterConfig::default())
    }

    /// Create a register in `|0…0⟩` using the process-wide identity cache
    pub fn with_config(num_qubits: usize, config: RegisterConfig) -> Result<Self> {
        Self::with_cache(num_qubits, config, IdentityCache::shared())
    }

    /// Create a register in `|0…0⟩` backed by a specific identity cache
    pub fn with_cache(
        num_qubits: usize,
        config: RegisterConfig,
        cache: Arc<IdentityCache>,
    ) -> Result<Self> {
        if num_qubits == 0 || num_qubits > config.max_qubits {
            return Err(StateError::InvalidQubitCount {
                num_qubits,
                max_qubits: config.max_qubits,
            });
        }

        let mut vector = Matrix::zeros(1 << num_qubits, 1);
        vector.set(0, 0, Complex64::new(1.0, 0.0));
        debug!(num_qubits, "created register");

        Ok(Self {
            num_qubits,
            vector,
            config,
            compiler: InstructionCompiler::new(num_qubits, cache),
        })
    }

    /// Create a register holding the given amplitudes
    ///
    /// Amplitudes are taken as given; normalization is the caller's concern.
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        Self::from_amplitudes_with(
            num_qubits,
            amplitudes,
            RegisterConfig::default(),
            IdentityCache::shared(),
        )
    }

    /// [`from_amplitudes`](Self::from_amplitudes) with an explicit config and cache
    ///
    /// # Errors
    /// - [`StateError::InvalidQubitCount`] if `num_qubits` is outside `config`
    /// - [`StateError::AmplitudeCountMismatch`] unless there are `2^num_qubits` amplitudes
    pub fn from_amplitudes_with(
        num_qubits: usize,
        amplitudes: &[Complex64],
        config: RegisterConfig,
        cache: Arc<IdentityCache>,
    ) -> Result<Self> {
        let mut state = Self::with_cache(num_qubits, config, cache)?;
        if amplitudes.len() != state.dimension() {
            return Err(StateError::AmplitudeCountMismatch {
                expected: state.dimension(),
                actual: amplitudes.len(),
            });
        }
        state.vector = Matrix::column(amplitudes.to_vec());
        Ok(state)
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// State dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        1 << self.num_qubits
    }

    pub fn config(&self) -> &RegisterConfig {
        &self.config
    }

    /// Raw amplitudes, indexed by basis state
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        self.vector.as_slice()
    }

    /// The state as a `2^n × 1` column
    pub fn state_vector(&self) -> &Matrix {
        &self.vector
    }

    pub fn compiler(&self) -> &InstructionCompiler {
        &self.compiler
    }

    /// Identity over this register
    pub fn identity(&self) -> Arc<Matrix> {
        self.compiler.embedder().cache().identity(self.num_qubits)
    }

    /// Shift operator moving position `current` to `target` in this register
    pub fn shift_operator(&self, current: usize, target: usize) -> Result<Arc<Matrix>> {
        Ok(self
            .compiler
            .embedder()
            .shifts()
            .full_shift(self.num_qubits, current, target)?)
    }

    /// Register operator for `op` acting on `targets`
    pub fn operation(&self, op: &Matrix, targets: &[usize]) -> Result<Matrix> {
        Ok(self
            .compiler
            .embedder()
            .embed_indices(self.num_qubits, op, targets)?)
    }

    /// Register operator for an instruction sequence
    pub fn compile(&self, instructions: &[Instruction]) -> Result<Matrix> {
        Ok(self.compiler.compile(instructions)?)
    }

    /// Register operator for a flattened operator/index stream
    pub fn compile_tokens(&self, tokens: &[InstructionToken]) -> Result<Matrix> {
        Ok(self.compiler.compile_tokens(tokens)?)
    }

    /// Apply `op` to the given positions
    ///
    /// # Errors
    /// Any embedding error; the state is left unchanged.
    pub fn apply(&mut self, op: &Matrix, targets: &[usize]) -> Result<()> {
        let full = self.operation(op, targets)?;
        self.apply_operator(&full)
    }

    pub fn apply_instruction(&mut self, instruction: &Instruction) -> Result<()> {
        let full = self
            .compiler
            .embedder()
            .embed_instruction(self.num_qubits, instruction)?;
        self.apply_operator(&full)
    }

    /// Compile the sequence, then apply it in one step
    pub fn apply_instructions(&mut self, instructions: &[Instruction]) -> Result<()> {
        let full = self.compile(instructions)?;
        self.apply_operator(&full)
    }

    pub fn apply_tokens(&mut self, tokens: &[InstructionToken]) -> Result<()> {
        let full = self.compile_tokens(tokens)?;
        self.apply_operator(&full)
    }

    /// Apply an operator that already spans the register
    ///
    /// # Errors
    /// Returns a dimension mismatch if `op` is not `2^n × 2^n`.
    pub fn apply_operator(&mut self, op: &Matrix) -> Result<()> {
        let dim = self.dimension();
        if op.rows() != dim || op.cols() != dim {
            return Err(QuantumError::register_size(self.num_qubits, op.rows()).into());
        }
        trace!(num_qubits = self.num_qubits, "applying register operator");
        self.vector = op.multiply(&self.vector)?;
        Ok(())
    }

    /// Basis state for a state-vector index
    pub fn basis_state(&self, index: usize) -> BasisState {
        BasisState::from_index(index, self.num_qubits)
    }

    /// Probability of every basis state
    ///
    /// Values sum to 1 for a normalized state; this is not enforced.
    pub fn probabilities(&self) -> BTreeMap<BasisState, f64> {
        self.amplitudes()
            .iter()
            .enumerate()
            .map(|(i, a)| (self.basis_state(i), a.norm_sqr()))
            .collect()
    }

    /// Probability of one basis state, or `None` if its width differs from the register
    pub fn probability(&self, state: &BasisState) -> Option<f64> {
        if state.num_qubits() != self.num_qubits {
            return None;
        }
        Some(self.amplitudes()[state.index()].norm_sqr())
    }

    /// L2 norm of the state vector
    pub fn norm(&self) -> f64 {
        self.amplitudes()
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Whether the norm is within the configured tolerance of 1
    pub fn is_normalized(&self) -> bool {
        (self.norm() - 1.0).abs() < self.config.normalization_epsilon
    }

    /// Reset to `|0…0⟩`
    pub fn reset(&mut self) {
        self.vector = Matrix::zeros(self.dimension(), 1);
        self.vector.set(0, 0, Complex64::new(1.0, 0.0));
    }

    /// Handle addressing one qubit of this register
    pub fn qubit(&self, index: usize) -> Result<Qubit<'_>> {
        let id = QubitId::checked(index, self.num_qubits)?;
        Ok(Qubit::new(self, id))
    }

    /// Handles for every qubit, in position order
    pub fn qubits(&self) -> impl Iterator<Item = Qubit<'_>> + '_ {
        (0..self.num_qubits).map(move |i| Qubit::new(self, QubitId::new(i)))
    }
}
