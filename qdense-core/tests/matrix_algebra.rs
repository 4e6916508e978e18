//! Algebraic properties of the dense matrix layer

use approx::assert_relative_eq;
use qdense_core::matrix::{Matrix, PAULI_X};
use qdense_core::Complex64;

const EPSILON: f64 = 1e-12;

fn sample(dim: usize, seed: f64) -> Matrix {
    Matrix::from_fn(dim, dim, |r, c| {
        Complex64::new((r as f64 + seed).sin(), (c as f64 * seed).cos())
    })
}

#[test]
fn test_mixed_product_property() {
    // (A ⊗ B)(C ⊗ D) = AC ⊗ BD
    let a = sample(2, 0.3);
    let b = sample(4, 1.7);
    let c = sample(2, 2.1);
    let d = sample(4, 0.9);

    let lhs = a.tensor(&b).multiply(&c.tensor(&d)).unwrap();
    let rhs = a.multiply(&c).unwrap().tensor(&b.multiply(&d).unwrap());
    assert!(lhs.approx_eq(&rhs, 1e-9));
}

#[test]
fn test_tensor_is_associative() {
    let a = sample(2, 0.1);
    let b = sample(2, 0.2);
    let c = sample(2, 0.3);
    let left = a.tensor(&b).tensor(&c);
    let right = a.tensor(&b.tensor(&c));
    assert!(left.approx_eq(&right, EPSILON));
}

#[test]
fn test_identity_is_neutral() {
    let m = sample(8, 0.5);
    let i = Matrix::identity(8);
    assert_eq!(i.multiply(&m).unwrap(), m);
    assert_eq!(m.multiply(&i).unwrap(), m);
}

#[test]
fn test_operator_on_column_vector() {
    let x = Matrix::from_array(&PAULI_X).tensor(&Matrix::i());
    let zero = Matrix::column(vec![
        Complex64::new(1.0, 0.0),
        Complex64::new(0.0, 0.0),
        Complex64::new(0.0, 0.0),
        Complex64::new(0.0, 0.0),
    ]);
    let flipped = x.multiply(&zero).unwrap();
    assert_eq!((flipped.rows(), flipped.cols()), (4, 1));
    assert_relative_eq!(flipped.get(2, 0).re, 1.0, epsilon = EPSILON);
    assert_relative_eq!(flipped.get(0, 0).re, 0.0, epsilon = EPSILON);
}
