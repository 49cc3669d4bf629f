//! Integration tests for the minimizer through the public API

use qmc_logic::truth_table;
use qmc_logic::{BoolExpr, Evaluator, Minimizer, MinimizerConfig, MinimizerError, QmcError};
use std::collections::BTreeSet;

fn set(values: &[usize]) -> BTreeSet<usize> {
    values.iter().copied().collect()
}

/// Check a form against the function table row by row
fn assert_implements(expr: &BoolExpr, variables: &[&str], minterms: &[usize], dont_cares: &[usize]) {
    let evaluator = Evaluator::new(variables);
    for (row, values) in truth_table::assignments(variables.len()).unwrap().enumerate() {
        if dont_cares.contains(&row) {
            continue;
        }
        assert_eq!(
            evaluator.evaluate(expr, &values).unwrap(),
            minterms.contains(&row),
            "{} disagrees with the table on row {}",
            expr,
            row
        );
    }
}

#[test]
fn test_textbook_function_with_dont_cares() {
    let variables = ["A", "B", "C", "D"];
    let minterms = [4, 5, 6, 7, 8, 9, 11];
    let dont_cares = [2, 3, 12, 15];
    let minimizer = Minimizer::new(&set(&minterms), &set(&dont_cares), &variables).unwrap();

    let strings = minimizer.minimal_forms_as_strings().unwrap();
    assert_eq!(strings.len(), 3);
    assert!(strings.contains(&"NOT A AND B OR A AND NOT B AND NOT C OR A AND NOT B AND D".to_string()));

    for expr in minimizer.minimal_forms_as_expressions().unwrap() {
        assert_implements(&expr, &variables, &minterms, &dont_cares);
    }
}

#[test]
fn test_single_minterm_prime_implicant() {
    let minimizer = Minimizer::new(&set(&[3]), &set(&[]), &["A", "B"]).unwrap();
    let primes = minimizer.prime_implicants().unwrap();
    assert_eq!(primes.len(), 1);
    assert_eq!(primes[0].pattern_string(), "11");
    assert_eq!(primes[0].indexes(), &set(&[3]));
    assert_eq!(minimizer.minimal_forms_as_strings().unwrap(), vec!["A AND B"]);
}

#[test]
fn test_empty_function_is_false() {
    let minimizer = Minimizer::new(&set(&[]), &set(&[]), &["A"]).unwrap();
    assert_eq!(
        minimizer.minimal_forms_as_expressions().unwrap(),
        vec![BoolExpr::Constant(false)]
    );
}

#[test]
fn test_full_function_is_true() {
    let minimizer = Minimizer::new(&set(&[0, 1, 2, 3]), &set(&[]), &["A", "B"]).unwrap();
    assert_eq!(
        minimizer.minimal_forms_as_expressions().unwrap(),
        vec![BoolExpr::Constant(true)]
    );
}

#[test]
fn test_overlapping_minterms_and_dont_cares() {
    let err = Minimizer::new(&set(&[1, 2]), &set(&[2, 3]), &["A", "B"]).unwrap_err();
    assert!(matches!(err, MinimizerError::InvalidArgument { .. }));
}

#[test]
fn test_degenerate_minimizer_is_not_ready() {
    let no_variables: [&str; 0] = [];
    let minimizer = Minimizer::new(&set(&[]), &set(&[]), &no_variables).unwrap();
    assert!(!minimizer.is_ready());
    assert_eq!(minimizer.minimal_forms_as_strings().unwrap_err(), MinimizerError::NotReady);
}

#[test]
fn test_forms_share_the_minimum_size() {
    let minimizer = Minimizer::new(
        &set(&[0, 1, 2, 5, 6, 7, 8, 9, 10, 14]),
        &set(&[]),
        &["A", "B", "C", "D"],
    )
    .unwrap();
    let forms = minimizer.minimal_forms().unwrap();
    assert!(!forms.is_empty());
    let size = forms[0].len();
    assert!(forms.iter().all(|form| form.len() == size));
}

#[test]
fn test_cover_limit_surfaces_through_crate_error() {
    let config = MinimizerConfig {
        max_cover_candidates: Some(1),
        ..MinimizerConfig::new()
    };
    let result: Result<Minimizer, QmcError> =
        Minimizer::with_config(&set(&[0, 1, 2, 5, 6, 7]), &set(&[]), &["A", "B", "C"], &config)
            .map_err(QmcError::from);
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        QmcError::Minimizer(MinimizerError::CoverLimitExceeded { limit: 1 })
    ));
}

#[test]
fn test_generous_cover_limit_is_harmless() {
    let config = MinimizerConfig {
        max_cover_candidates: Some(1000),
        ..MinimizerConfig::default()
    };
    let limited =
        Minimizer::with_config(&set(&[0, 1, 2, 5, 6, 7]), &set(&[]), &["A", "B", "C"], &config).unwrap();
    let unlimited = Minimizer::new(&set(&[0, 1, 2, 5, 6, 7]), &set(&[]), &["A", "B", "C"]).unwrap();
    assert_eq!(
        limited.minimal_forms_as_strings().unwrap(),
        unlimited.minimal_forms_as_strings().unwrap()
    );
}

#[test]
fn test_random_five_variable_functions() {
    let variables = ["A", "B", "C", "D", "E"];
    // xorshift, so the cases are fixed from run to run
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    for _ in 0..20 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let table = state as u32;
        let care = (state >> 32) as u32;

        let minterms: Vec<usize> = (0..32).filter(|r| table >> r & 1 == 1).collect();
        let dont_cares: Vec<usize> = (0..32)
            .filter(|r| table >> r & 1 == 0 && care >> r & 0b111 == 0)
            .collect();

        let minimizer = Minimizer::new(&set(&minterms), &set(&dont_cares), &variables).unwrap();
        for expr in minimizer.minimal_forms_as_expressions().unwrap() {
            assert_implements(&expr, &variables, &minterms, &dont_cares);
        }
    }
}
