//! Shift operators
//!
//! A shift operator is a permutation matrix that relocates the information
//! held by one register position to another. Moving position `current` to
//! `target` slides every position in between one step towards `current`:
//!
//! ```text
//! full_shift(3, 0, 2):  |b0 b1 b2⟩ → |b1 b2 b0⟩
//! ```
//!
//! The permutation is synthesized once for the `|dist| + 1` positions it
//! spans ([`basic_shift`]) and then padded with 2×2 identities for every
//! position outside that span ([`ShiftBuilder::full_shift`]).

use crate::identity_cache::IdentityCache;
use num_complex::Complex64;
use qdense_core::{Matrix, QuantumError, Result};
use std::sync::Arc;

const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Permutation over a `(|dist| + 1)`-qubit span
///
/// For `dist > 0` the most significant qubit of the span moves to the least
/// significant slot; for `dist < 0` the least significant qubit moves to
/// the most significant slot. `basic_shift(d)` and `basic_shift(-d)` are
/// inverses.
///
/// `dist == 0` returns the 2×2 identity regardless of any register size;
/// [`ShiftBuilder::full_shift`] never reaches this case.
pub fn basic_shift(dist: isize) -> Matrix {
    if dist == 0 {
        return Matrix::i();
    }

    let dim = 1usize << (dist.unsigned_abs() + 1);
    let half = dim / 2;
    let mut m = Matrix::zeros(dim, dim);

    for r in 0..dim {
        let c = if dist > 0 {
            (if r % 2 == 1 { half } else { 0 }) + r / 2
        } else if 2 * r < dim {
            2 * r
        } else {
            2 * (r - half) + 1
        };
        m.set(r, c, ONE);
    }

    m
}

/// Builds register-sized shift operators
#[derive(Debug, Clone)]
pub struct ShiftBuilder {
    cache: Arc<IdentityCache>,
}

impl ShiftBuilder {
    pub fn new(cache: Arc<IdentityCache>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &Arc<IdentityCache> {
        &self.cache
    }

    /// Operator moving register position `current` to position `target`
    ///
    /// `full_shift(n, a, b)` and `full_shift(n, b, a)` multiply to the
    /// identity.
    ///
    /// # Errors
    /// Returns [`QuantumError::IndexOutOfRange`] if either position is not
    /// inside a register of `num_qubits`.
    pub fn full_shift(
        &self,
        num_qubits: usize,
        current: usize,
        target: usize,
    ) -> Result<Arc<Matrix>> {
        for index in [current, target] {
            if index >= num_qubits {
                return Err(QuantumError::out_of_range(index, num_qubits));
            }
        }

        if current == target {
            return Ok(self.cache.identity(num_qubits));
        }

        let dist = current.abs_diff(target);
        let signed = if target > current {
            dist as isize
        } else {
            -(dist as isize)
        };
        let s = basic_shift(signed);
        let lowest = current.min(target);

        // Slots left of `lowest` and right of the span are single qubits;
        // slot `lowest` holds the whole `dist + 1`-qubit span.
        let i = Matrix::i();
        let mut m = if lowest == 0 { s.clone() } else { Matrix::i() };
        for slot in 1..num_qubits - dist {
            m = m.tensor(if slot == lowest { &s } else { &i });
        }

        Ok(Arc::new(m))
    }
}

impl Default for ShiftBuilder {
    fn default() -> Self {
        Self::new(IdentityCache::shared())
    }
}
