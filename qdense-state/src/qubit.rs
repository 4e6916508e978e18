//! Qubit handles

use crate::register::RegisterState;
use qdense_core::QubitId;
use std::fmt;

/// A borrowed reference to one position of a register
///
/// Handles carry no state of their own; they address a qubit for reading.
///
/// # Example
/// ```
/// use qdense_state::RegisterState;
///
/// let reg = RegisterState::new(2).unwrap();
/// let q1 = reg.qubit(1).unwrap();
/// assert_eq!(q1.index(), 1);
/// assert_eq!(q1.probability_one(), 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Qubit<'a> {
    register: &'a RegisterState,
    id: QubitId,
}

impl<'a> Qubit<'a> {
    pub(crate) fn new(register: &'a RegisterState, id: QubitId) -> Self {
        Self { register, id }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.id.index()
    }

    #[inline]
    pub fn id(&self) -> QubitId {
        self.id
    }

    pub fn register(&self) -> &'a RegisterState {
        self.register
    }

    /// Marginal probability of reading 1 on this position
    pub fn probability_one(&self) -> f64 {
        let mask = 1usize << self.id.bit(self.register.num_qubits());
        self.register
            .amplitudes()
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, a)| a.norm_sqr())
            .sum()
    }
}

impl fmt::Display for Qubit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
