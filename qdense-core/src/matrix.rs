//! Dense complex matrices
//!
//! [`Matrix`] is the numeric workhorse of the simulator: register operators
//! are square `2^n × 2^n` matrices and register states are `2^n × 1`
//! column vectors. Storage is a flattened row-major `Vec<Complex64>`.
//!
//! # Tensor order
//!
//! [`Matrix::tensor`] follows the Kronecker convention: in `A ⊗ B` the left
//! operand occupies the most significant bits of the combined index. Every
//! qubit-position convention in qdense is derived from this.
//!
//! # Example
//!
//! ```
//! use qdense_core::matrix::{Matrix, PAULI_X};
//!
//! let x = Matrix::from_array(&PAULI_X);
//! let xi = x.tensor(&Matrix::i());
//! assert_eq!(xi.rows(), 4);
//!
//! let xx = x.multiply(&x).unwrap();
//! assert_eq!(xx, Matrix::i());
//! ```

use crate::{QuantumError, Result};
use num_complex::Complex64;
use std::fmt;
use std::ops::{Index, IndexMut};

pub(crate) const ZERO: Complex64 = Complex64::new(0.0, 0.0);
pub(crate) const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// The 2×2 identity
/// I = [[1, 0],
///      [0, 1]]
pub const IDENTITY_2X2: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, ONE]];

/// Pauli-X (bit flip)
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: [[Complex64; 2]; 2] = [[ZERO, ONE], [ONE, ZERO]];

/// Dense row-major complex matrix
#[derive(Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Complex64>,
}

impl Matrix {
    /// All-zero matrix of the given shape
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![ZERO; rows * cols],
        }
    }

    /// Square identity of dimension `dim`
    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zeros(dim, dim);
        for i in 0..dim {
            m.data[i * dim + i] = ONE;
        }
        m
    }

    /// The named 2×2 identity `I`
    #[inline]
    pub fn i() -> Self {
        Self::from_array(&IDENTITY_2X2)
    }

    /// Column vector from amplitudes
    pub fn column(values: Vec<Complex64>) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values,
        }
    }

    /// Build from nested rows
    ///
    /// # Errors
    /// Returns [`QuantumError::ShapeMismatch`] if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for row in rows {
            if row.len() != num_cols {
                return Err(QuantumError::ShapeMismatch {
                    op: "stack",
                    lhs: (num_rows, num_cols),
                    rhs: (1, row.len()),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            rows: num_rows,
            cols: num_cols,
            data,
        })
    }

    /// Build from a fixed-size square array, e.g. a gate constant
    pub fn from_array<const N: usize>(array: &[[Complex64; N]; N]) -> Self {
        Self {
            rows: N,
            cols: N,
            data: array.iter().flatten().copied().collect(),
        }
    }

    /// Build by evaluating `f(row, col)` for every entry
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Complex64,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Number of qubits spanned by a square power-of-two matrix
    ///
    /// Returns `None` for non-square matrices and dimensions that are not
    /// powers of two.
    pub fn num_qubits(&self) -> Option<usize> {
        if self.is_square() && self.rows.is_power_of_two() {
            Some(self.rows.trailing_zeros() as usize)
        } else {
            None
        }
    }

    /// Row-major entries
    #[inline]
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Consume into row-major entries
    pub fn into_vec(self) -> Vec<Complex64> {
        self.data
    }

    /// Entry at `(row, col)`
    ///
    /// # Panics
    /// Panics if `row >= self.rows()` or `col >= self.cols()`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self[(row, col)]
    }

    /// Overwrite the entry at `(row, col)`
    ///
    /// # Panics
    /// Panics if `row >= self.rows()` or `col >= self.cols()`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Complex64) {
        self[(row, col)] = value;
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
    }

    /// Matrix product `self · rhs`
    ///
    /// Zero entries of `self` are skipped, which keeps products with
    /// permutation operators close to `O(dim²)`.
    ///
    /// # Errors
    /// Returns [`QuantumError::ShapeMismatch`] when `self.cols() != rhs.rows()`.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(QuantumError::ShapeMismatch {
                op: "multiply",
                lhs: (self.rows, self.cols),
                rhs: (rhs.rows, rhs.cols),
            });
        }

        let mut result = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            let out = &mut result.data[i * rhs.cols..(i + 1) * rhs.cols];
            for k in 0..self.cols {
                let a_ik = self.data[i * self.cols + k];
                if a_ik == ZERO {
                    continue;
                }
                let rhs_row = &rhs.data[k * rhs.cols..(k + 1) * rhs.cols];
                for (o, b_kj) in out.iter_mut().zip(rhs_row) {
                    *o += a_ik * b_kj;
                }
            }
        }
        Ok(result)
    }

    /// Kronecker product `self ⊗ rhs`
    pub fn tensor(&self, rhs: &Matrix) -> Matrix {
        let rows = self.rows * rhs.rows;
        let cols = self.cols * rhs.cols;
        let mut result = Matrix::zeros(rows, cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                let a_ij = self.data[i * self.cols + j];
                if a_ij == ZERO {
                    continue;
                }
                for k in 0..rhs.rows {
                    for l in 0..rhs.cols {
                        let row = i * rhs.rows + k;
                        let col = j * rhs.cols + l;
                        result.data[row * cols + col] = a_ij * rhs.data[k * rhs.cols + l];
                    }
                }
            }
        }

        result
    }

    /// Conjugate transpose
    pub fn adjoint(&self) -> Matrix {
        Matrix::from_fn(self.cols, self.rows, |r, c| self.get(c, r).conj())
    }

    /// Entry-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).norm() <= epsilon)
    }

    /// Check `U†U = I` within `epsilon`
    pub fn is_unitary(&self, epsilon: f64) -> bool {
        if !self.is_square() {
            return false;
        }
        match self.adjoint().multiply(self) {
            Ok(product) => product.approx_eq(&Matrix::identity(self.rows), epsilon),
            Err(_) => false,
        }
    }

    /// Exactly one `1` per row and per column, zeros elsewhere
    pub fn is_permutation(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let mut seen_cols = vec![false; self.cols];
        for r in 0..self.rows {
            let mut ones = 0;
            for c in 0..self.cols {
                let v = self.get(r, c);
                if v == ONE {
                    if seen_cols[c] {
                        return false;
                    }
                    seen_cols[c] = true;
                    ones += 1;
                } else if v != ZERO {
                    return false;
                }
            }
            if ones != 1 {
                return false;
            }
        }
        true
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Complex64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Complex64 {
        self.check_bounds(row, col);
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Complex64 {
        self.check_bounds(row, col);
        &mut self.data[row * self.cols + col]
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix {}x{} [", self.rows, self.cols)?;
        for r in 0..self.rows {
            write!(f, "  ")?;
            for c in 0..self.cols {
                let v = self.get(r, c);
                write!(f, "{:+.3}{:+.3}i ", v.re, v.im)?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn c(re: f64) -> Complex64 {
        Complex64::new(re, 0.0)
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_past_last_column_panics() {
        // (0, 2) in a 2x2 would alias (1, 0) in row-major storage
        let mut m = Matrix::zeros(2, 2);
        m.set(0, 2, c(7.0));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_past_last_column_panics() {
        let m = Matrix::identity(2);
        let _ = m.get(1, 2);
    }

    #[test]
    fn test_in_bounds_set_leaves_neighbours() {
        let mut m = Matrix::zeros(2, 2);
        m.set(0, 1, c(7.0));
        assert_eq!(m.get(1, 0), c(0.0));
        assert_eq!(m[(0, 1)], c(7.0));
    }

    #[test]
    fn test_identity() {
        let i4 = Matrix::identity(4);
        for r in 0..4 {
            for col in 0..4 {
                let expected = if r == col { ONE } else { ZERO };
                assert_eq!(i4.get(r, col), expected);
            }
        }
        assert_eq!(Matrix::i(), Matrix::identity(2));
    }

    #[test]
    fn test_tensor_order() {
        // X ⊗ I flips the most significant bit: |00⟩ → |10⟩
        let x = Matrix::from_array(&PAULI_X);
        let xi = x.tensor(&Matrix::i());
        assert_eq!(xi.get(2, 0), ONE);
        assert_eq!(xi.get(0, 2), ONE);
        assert_eq!(xi.get(1, 0), ZERO);

        // I ⊗ X flips the least significant bit: |00⟩ → |01⟩
        let ix = Matrix::i().tensor(&x);
        assert_eq!(ix.get(1, 0), ONE);
    }

    #[test]
    fn test_tensor_dimensions_multiply() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(4, 1);
        let t = a.tensor(&b);
        assert_eq!((t.rows(), t.cols()), (8, 3));
    }

    #[test]
    fn test_multiply_shape_checked() {
        let a = Matrix::identity(4);
        let v = Matrix::column(vec![ONE, ZERO]);
        assert!(matches!(
            a.multiply(&v),
            Err(QuantumError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_multiply_values() {
        let a = Matrix::from_rows(vec![vec![c(1.0), c(2.0)], vec![c(3.0), c(4.0)]]).unwrap();
        let b = Matrix::from_rows(vec![vec![c(0.0), c(1.0)], vec![c(1.0), c(0.0)]]).unwrap();
        let ab = a.multiply(&b).unwrap();
        assert_eq!(ab.get(0, 0), c(2.0));
        assert_eq!(ab.get(0, 1), c(1.0));
        assert_eq!(ab.get(1, 0), c(4.0));
        assert_eq!(ab.get(1, 1), c(3.0));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows = vec![vec![ONE, ZERO], vec![ONE]];
        assert!(Matrix::from_rows(rows).is_err());
    }

    #[test]
    fn test_num_qubits() {
        assert_eq!(Matrix::identity(8).num_qubits(), Some(3));
        assert_eq!(Matrix::identity(1).num_qubits(), Some(0));
        assert_eq!(Matrix::identity(6).num_qubits(), None);
        assert_eq!(Matrix::zeros(4, 2).num_qubits(), None);
    }

    #[test]
    fn test_unitary_and_permutation() {
        let x = Matrix::from_array(&PAULI_X);
        assert!(x.is_unitary(1e-12));
        assert!(x.is_permutation());

        let h = Matrix::from_fn(2, 2, |r, col| {
            let s = std::f64::consts::FRAC_1_SQRT_2;
            if r == 1 && col == 1 {
                c(-s)
            } else {
                c(s)
            }
        });
        assert!(h.is_unitary(1e-12));
        assert!(!h.is_permutation());

        let mut not_unitary = Matrix::identity(2);
        not_unitary.set(0, 0, c(2.0));
        assert!(!not_unitary.is_unitary(1e-12));
    }

    #[test]
    fn test_adjoint() {
        let mut m = Matrix::zeros(2, 2);
        m.set(0, 1, Complex64::new(0.0, 1.0));
        let adj = m.adjoint();
        assert_relative_eq!(adj.get(1, 0).im, -1.0);
        assert_eq!(adj.get(0, 1), ZERO);
    }
}
