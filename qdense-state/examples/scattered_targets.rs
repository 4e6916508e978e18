//! Example applying multi-qubit operators to non-adjacent register positions
//!
//! Builds a GHZ-style state on positions 0 and 3 of a four-qubit register,
//! compares stepwise application with a single compiled operator, and shows
//! how shift operators relocate a qubit's information.
//!
//! Run with `RUST_LOG=qdense_compiler=debug` to see cache and compiler logs.

use qdense_compiler::IdentityCache;
use qdense_core::matrix::PAULI_X;
use qdense_core::{Complex64, Instruction, InstructionToken, Matrix};
use qdense_state::{RegisterConfig, RegisterState};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Scattered Target Example ===\n");

    example_stepwise();
    example_compiled();
    example_shift();
}

fn hadamard() -> Matrix {
    let s = std::f64::consts::FRAC_1_SQRT_2;
    Matrix::from_fn(2, 2, |r, c| {
        if r == 1 && c == 1 {
            Complex64::new(-s, 0.0)
        } else {
            Complex64::new(s, 0.0)
        }
    })
}

fn cnot() -> Matrix {
    Matrix::from_fn(4, 4, |r, c| {
        let col = if r >= 2 { r ^ 1 } else { r };
        if c == col {
            Complex64::new(1.0, 0.0)
        } else {
            Complex64::new(0.0, 0.0)
        }
    })
}

fn print_probabilities(reg: &RegisterState) {
    for (state, p) in reg.probabilities() {
        if p > 1e-12 {
            println!("    {}  {:.4}", state, p);
        }
    }
}

fn example_stepwise() {
    println!("Example 1: Stepwise application");
    println!("-------------------------------");

    let mut reg = RegisterState::new(4).unwrap();
    reg.apply(&hadamard(), &[0]).unwrap();
    reg.apply(&cnot(), &[0, 3]).unwrap();

    println!("  H on q0, then CNOT(q0 -> q3):");
    print_probabilities(&reg);
    println!();
}

fn example_compiled() {
    println!("Example 2: Compiled program");
    println!("---------------------------");

    let cache = Arc::new(IdentityCache::new());
    let mut reg =
        RegisterState::with_cache(4, RegisterConfig::default(), Arc::clone(&cache)).unwrap();

    let tokens = vec![
        InstructionToken::from(hadamard()),
        InstructionToken::Target(0),
        InstructionToken::from(cnot()),
        InstructionToken::Target(0),
        InstructionToken::Target(3),
        InstructionToken::from(Matrix::from_array(&PAULI_X)),
        InstructionToken::Target(1),
    ];
    let program = Instruction::from_tokens(&tokens).unwrap();
    println!("  {} instructions parsed from {} tokens", program.len(), tokens.len());

    let op = reg.compile(&program).unwrap();
    println!(
        "  Compiled operator: {}x{}, unitary = {}",
        op.rows(),
        op.cols(),
        op.is_unitary(1e-10)
    );

    reg.apply_operator(&op).unwrap();
    print_probabilities(&reg);
    println!("  Identity cache: {}", cache.statistics());
    println!();
}

fn example_shift() {
    println!("Example 3: Moving a qubit");
    println!("-------------------------");

    let mut reg = RegisterState::new(3).unwrap();
    reg.apply(&Matrix::from_array(&PAULI_X), &[0]).unwrap();
    println!("  Before shift:");
    print_probabilities(&reg);

    let shift = reg.shift_operator(0, 2).unwrap();
    reg.apply_operator(&shift).unwrap();
    println!("  After moving q0 to position 2:");
    print_probabilities(&reg);

    for q in reg.qubits() {
        println!("    P({} = 1) = {:.4}", q, q.probability_one());
    }
}
