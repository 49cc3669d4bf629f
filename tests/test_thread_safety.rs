//! Tests for thread safety
//!
//! The minimizer keeps no global state, so independent minimizations may run
//! concurrently and a finished minimizer may be shared between threads.

use qmc_logic::{BoolExpr, Minimizer};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

fn set(values: &[usize]) -> BTreeSet<usize> {
    values.iter().copied().collect()
}

fn textbook() -> Minimizer {
    Minimizer::new(
        &set(&[4, 5, 6, 7, 8, 9, 11]),
        &set(&[2, 3, 12, 15]),
        &["A", "B", "C", "D"],
    )
    .expect("Minimization failed")
}

#[test]
fn test_concurrent_execution() {
    let expected = textbook().minimal_forms_as_strings().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| textbook().minimal_forms_as_strings().unwrap()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("Thread panicked"), expected);
    }
}

#[test]
fn test_different_functions_in_parallel() {
    let handles: Vec<_> = (0u32..16)
        .map(|function| {
            thread::spawn(move || {
                let minterms: BTreeSet<usize> =
                    (0..4).filter(|row| function >> row & 1 == 1).collect();
                let minimizer = Minimizer::new(&minterms, &BTreeSet::new(), &["A", "B"]).unwrap();
                (function, minimizer.minimal_forms_as_expressions().unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (function, forms) = handle.join().expect("Thread panicked");
        assert!(!forms.is_empty());
        if function == 0 {
            assert_eq!(forms, vec![BoolExpr::Constant(false)]);
        }
        if function == 0b1111 {
            assert_eq!(forms, vec![BoolExpr::Constant(true)]);
        }
    }
}

#[test]
fn test_shared_minimizer() {
    let shared = Arc::new(textbook());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let minimizer = Arc::clone(&shared);
            thread::spawn(move || minimizer.prime_implicants().unwrap().len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("Thread panicked"), 7);
    }
}
