//! Computational basis states

use std::fmt;

/// One computational basis state of a register, as a bit per position
///
/// `bit(p)` is the value of register position `p`. Position 0 is the most
/// significant bit of the basis index, matching the tensor order used to
/// build register operators, so `|100⟩` has position 0 set and index 4.
/// Ordering follows the basis index.
///
/// # Example
/// ```
/// use qdense_state::BasisState;
///
/// let s = BasisState::from_index(0b100, 3);
/// assert_eq!(s.bits(), &[1, 0, 0]);
/// assert_eq!(s.to_string(), "|100⟩");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BasisState {
    bits: Vec<u8>,
}

impl BasisState {
    /// Basis state with the given index in a register of `num_qubits`
    pub fn from_index(index: usize, num_qubits: usize) -> Self {
        let bits = (0..num_qubits)
            .map(|p| ((index >> (num_qubits - 1 - p)) & 1) as u8)
            .collect();
        Self { bits }
    }

    /// Basis state from explicit position values (non-zero means 1)
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            bits: bits.iter().map(|&b| u8::from(b != 0)).collect(),
        }
    }

    /// Index of this state in the state vector
    pub fn index(&self) -> usize {
        self.bits
            .iter()
            .fold(0, |acc, &b| (acc << 1) | b as usize)
    }

    #[inline]
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Value of register position `position`
    ///
    /// # Panics
    /// Panics if `position >= self.num_qubits()`.
    #[inline]
    pub fn bit(&self, position: usize) -> u8 {
        self.bits[position]
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.bits.len()
    }
}

impl fmt::Display for BasisState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for b in &self.bits {
            write!(f, "{}", b)?;
        }
        write!(f, "⟩")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for n in 1..=5 {
            for index in 0..(1 << n) {
                assert_eq!(BasisState::from_index(index, n).index(), index);
            }
        }
    }

    #[test]
    fn test_position_zero_is_most_significant() {
        let s = BasisState::from_index(1, 3);
        assert_eq!(s.bit(2), 1);
        assert_eq!(s.bit(0), 0);
        assert_eq!(s.to_string(), "|001⟩");
    }

    #[test]
    fn test_ordering_follows_index() {
        let a = BasisState::from_index(3, 3);
        let b = BasisState::from_index(4, 3);
        assert!(a < b);
    }

    #[test]
    fn test_from_bits() {
        let s = BasisState::from_bits(&[1, 0, 2]);
        assert_eq!(s.bits(), &[1, 0, 1]);
        assert_eq!(s.index(), 5);
    }
}
