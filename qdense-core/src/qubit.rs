//! Qubit addressing

use crate::{QuantumError, Result};
use std::fmt;

/// Position of a qubit inside a register
///
/// Positions are 0-based tensor slots: position 0 is the leftmost factor
/// of the register's tensor product and therefore the most significant bit
/// of a basis-state index.
///
/// # Example
/// ```
/// use qdense_core::QubitId;
///
/// let q = QubitId::new(0);
/// // In a 3-qubit register, position 0 is bit 2 of the basis index
/// assert_eq!(q.bit(3), 2);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct QubitId(usize);

impl QubitId {
    /// Create a new qubit position
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Create a qubit position, rejecting indices outside a register of `num_qubits`
    ///
    /// # Example
    /// ```
    /// use qdense_core::QubitId;
    ///
    /// assert!(QubitId::checked(2, 3).is_ok());
    /// assert!(QubitId::checked(3, 3).is_err());
    /// ```
    pub fn checked(id: usize, num_qubits: usize) -> Result<Self> {
        if id >= num_qubits {
            Err(QuantumError::out_of_range(id, num_qubits))
        } else {
            Ok(Self(id))
        }
    }

    /// Underlying position
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// Bit significance of this position in a basis index of an `num_qubits` register
    ///
    /// # Panics
    /// Panics if the position is not inside the register (`index >= num_qubits`).
    #[inline]
    pub fn bit(&self, num_qubits: usize) -> usize {
        assert!(
            self.0 < num_qubits,
            "qubit {} outside a {}-qubit register",
            self.0,
            num_qubits
        );
        num_qubits - 1 - self.0
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for QubitId {
    #[inline]
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

impl From<QubitId> for usize {
    #[inline]
    fn from(qid: QubitId) -> Self {
        qid.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "outside a 3-qubit register")]
    fn test_bit_outside_register_panics() {
        QubitId::new(3).bit(3);
    }

    #[test]
    fn test_checked_bounds() {
        assert_eq!(QubitId::checked(0, 1).unwrap().index(), 0);
        assert_eq!(
            QubitId::checked(4, 4),
            Err(QuantumError::IndexOutOfRange {
                index: 4,
                num_qubits: 4
            })
        );
    }

    #[test]
    fn test_bit_significance() {
        assert_eq!(QubitId::new(0).bit(4), 3);
        assert_eq!(QubitId::new(3).bit(4), 0);
    }

    #[test]
    fn test_display_and_conversions() {
        let q: QubitId = 7.into();
        assert_eq!(q.to_string(), "q7");
        let raw: usize = q.into();
        assert_eq!(raw, 7);
    }
}
