use std::{env, fs};

use logica::{evaluate_source, Interpreter};

fn assert_value(source: &str, expected: bool) {
    match evaluate_source(source) {
        Some(value) => assert_eq!(value, expected,
                                  "Sentence {source:?} evaluated to the wrong value"),
        None => panic!("Sentence {source:?} was rejected but should evaluate to {expected}"),
    }
}

fn assert_invalid(source: &str) {
    if evaluate_source(source).is_some() {
        panic!("Sentence {source:?} was accepted but should be rejected")
    }
}

#[test]
fn atoms_evaluate_to_their_literal_value() {
    assert_value("T.", true);
    assert_value("F.", false);
}

#[test]
fn negation_flips_the_value() {
    assert_value("~T.", false);
    assert_value("~F.", true);
    assert_value("~~T.", true);
}

#[test]
fn conjunction_truth_table() {
    assert_value("T ^ T.", true);
    assert_value("T ^ F.", false);
    assert_value("F ^ T.", false);
    assert_value("F ^ F.", false);
}

#[test]
fn disjunction_truth_table() {
    assert_value("T v T.", true);
    assert_value("T v F.", true);
    assert_value("F v T.", true);
    assert_value("F v F.", false);
}

#[test]
fn implication_truth_table() {
    assert_value("T -> T.", true);
    assert_value("T -> F.", false);
    assert_value("F -> T.", true);
    assert_value("F -> F.", true);
}

#[test]
fn conjunction_binds_tighter_than_disjunction() {
    assert_value("T v F ^ F.", true);
    assert_value("F ^ F v T.", true);
}

#[test]
fn negation_binds_tighter_than_conjunction() {
    assert_value("~T ^ F.", false);
    assert_value("~(T ^ F).", true);
}

#[test]
fn operators_chain_left_associatively() {
    assert_value("F -> F -> F.", false);
    assert_value("(F -> F) -> F.", false);
    assert_value("F -> (F -> F).", true);
    assert_value("T ^ T ^ F.", false);
    assert_value("F v F v T.", true);
}

#[test]
fn parentheses_group_subsentences() {
    assert_value("(T).", true);
    assert_value("((F)).", false);
    assert_value("(T -> F) v T.", true);
    assert_value("~(T v F).", false);
    assert_value("(T -> F) -> (F -> T).", true);
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("T  v   F .", true);
    assert_value("TvF.", true);
    assert_value("\tT\n v\r\n F .", true);
}

#[test]
fn content_after_the_period_is_never_read() {
    assert_value("T. trailing garbage $$$", true);
    assert_value("F.F.", false);
}

#[test]
fn validity_checks_are_repeatable() {
    let mut interpreter = Interpreter::new("T -> F.");
    assert!(interpreter.is_valid());
    assert!(interpreter.is_valid());
    assert_eq!(interpreter.evaluate(), Some(false));
    assert_eq!(interpreter.evaluate(), Some(false));

    let mut interpreter = Interpreter::new("T F.");
    assert!(!interpreter.is_valid());
    assert!(!interpreter.is_valid());
    assert_eq!(interpreter.evaluate(), None);
}

#[test]
fn malformed_sentences_are_rejected() {
    assert_invalid("T F.");
    assert_invalid("T ->.");
    assert_invalid("(T.");
    assert_invalid("T");
    assert_invalid("$T.");
    assert_invalid("~.");
    assert_invalid("v T.");
    assert_invalid("T ^ .");
    assert_invalid("T v F");
    assert_invalid(".");
    assert_invalid("T )");
}

#[test]
fn a_stray_atom_in_operator_position_is_rejected() {
    assert_invalid("T T.");
    assert_invalid("(T F).");
    assert_invalid("~T F.");
}

#[test]
fn a_dash_without_an_arrow_head_is_rejected() {
    assert_invalid("T-F.");
    assert_invalid("T - F.");
    assert_invalid("T -");
    assert_invalid("-.");
}

#[test]
fn empty_and_blank_input_is_rejected() {
    assert_invalid("");
    assert_invalid("   \n\t  ");
}

#[test]
fn sentences_can_be_read_from_a_file() {
    let path = env::temp_dir().join("logica_sentence_test.txt");
    fs::write(&path, "~(T -> F).\n").unwrap_or_else(|e| panic!("Failed to write {path:?}: {e}"));

    let mut interpreter =
        Interpreter::from_file(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
    assert_eq!(interpreter.evaluate(), Some(true));

    fs::remove_file(&path).unwrap_or_else(|e| panic!("Failed to remove {path:?}: {e}"));
}

#[test]
fn missing_files_fail_at_construction() {
    assert!(Interpreter::from_file("no/such/file.txt").is_err());
}
