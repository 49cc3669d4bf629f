//! Integration tests for expression parsing, evaluation and minimization

use qmc_logic::truth_table;
use qmc_logic::{BoolExpr, MinimizerConfig, Minimizer};
use std::collections::BTreeSet;

#[test]
fn test_minimized_expression_is_equivalent() {
    let inputs = [
        "a and b or a and not b",
        "(a or b) and (a or c)",
        "a xor b xor c",
        "not (a and b) or c and d",
        "a * b + !a * c + b * c",
    ];
    for input in inputs {
        let expr = BoolExpr::parse(input).unwrap();
        let minimized = expr.minimize().unwrap();
        assert!(
            expr.equivalent_to(&minimized).unwrap(),
            "{} is not equivalent to {}",
            input,
            minimized
        );
    }
}

#[test]
fn test_consensus_term_is_removed() {
    let expr = BoolExpr::parse("a * b + !a * c + b * c").unwrap();
    let forms = expr.minimal_forms().unwrap();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].to_string(), "NOT A AND C OR A AND B");
}

#[test]
fn test_constant_expressions() {
    assert_eq!(
        BoolExpr::parse("true and false").unwrap().minimize().unwrap(),
        BoolExpr::Constant(false)
    );
    assert_eq!(
        BoolExpr::parse("a and not a").unwrap().minimize().unwrap(),
        BoolExpr::Constant(false)
    );
    assert_eq!(
        BoolExpr::parse("a or not a").unwrap().minimize().unwrap(),
        BoolExpr::Constant(true)
    );
}

#[test]
fn test_printed_form_reparses() {
    let expr = BoolExpr::parse("a and (b or not c) xor d").unwrap();
    let reparsed = BoolExpr::parse(&expr.to_string()).unwrap();
    assert!(expr.equivalent_to(&reparsed).unwrap());

    let minimized = expr.minimize().unwrap();
    let reparsed = BoolExpr::parse(&minimized.to_string()).unwrap();
    assert!(minimized.equivalent_to(&reparsed).unwrap());
}

#[test]
fn test_truth_table_feeds_minimizer() {
    let expr = BoolExpr::parse("a and b or c").unwrap();
    let variables = expr.collect_variables();
    let minterms = truth_table::sum_of_minterms(&variables, &expr).unwrap();
    let maxterms = truth_table::product_of_maxterms(&variables, &expr).unwrap();
    assert_eq!(minterms.len() + maxterms.len(), 8);
    assert!(minterms.is_disjoint(&maxterms));

    let minimizer = Minimizer::new(&minterms, &BTreeSet::new(), &variables).unwrap();
    let forms = minimizer.minimal_forms_as_expressions().unwrap();
    assert_eq!(forms.len(), 1);
    assert!(forms[0].equivalent_to(&expr).unwrap());
}

#[test]
fn test_tree_output_of_minimal_form() {
    let expr = BoolExpr::parse("a and b or a and not b").unwrap();
    let minimized = expr.minimize_with_config(&MinimizerConfig::default()).unwrap();
    assert_eq!(minimized.tree().to_string(), "A\n");
}

#[test]
fn test_parse_error_is_reported() {
    let err = BoolExpr::parse("a and or b").unwrap_err();
    assert!(err.to_string().starts_with("Syntax error"));
}
