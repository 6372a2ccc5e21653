//! # logica
//!
//! logica is a propositional-logic interpreter written in Rust.
//! It tokenizes, parses, and evaluates a single sentence built from the
//! atoms `T` and `F`, negation `~`, conjunction `^`, disjunction `v`,
//! material implication `->`, parentheses, and a terminating period.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error type for parsing failures.
///
/// This module defines the error that can be raised while tokenizing or
/// parsing a sentence. It standardizes error reporting and carries detailed
/// information about failures, including descriptions and the source
/// position where the failure was detected.
///
/// # Responsibilities
/// - Defines the error enum covering all syntactic failure modes.
/// - Attaches byte positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of sentence evaluation.
///
/// This module ties together tokenizing, parsing, evaluation, and error
/// handling to provide a complete checker for propositional-logic
/// sentences. It exposes the public API for validating and evaluating one
/// sentence per run.
///
/// # Responsibilities
/// - Coordinates the core components: tokenizer, parser, and value stack.
/// - Provides entry points for checking validity and computing a value.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::interpreter::core::Interpreter;

/// Evaluates a single propositional-logic sentence.
///
/// This is the convenience entry point for callers that already hold the
/// sentence text. It constructs an [`Interpreter`] over the source, checks
/// the syntax, and returns the computed truth value.
///
/// Returns `None` when the sentence is malformed; the diagnostic describing
/// the failure has already been printed to stderr by the validity check.
///
/// # Examples
/// ```
/// use logica::evaluate_source;
///
/// assert_eq!(evaluate_source("T -> F."), Some(false));
/// assert_eq!(evaluate_source("~(T ^ F)."), Some(true));
/// assert_eq!(evaluate_source("T ->."), None);
/// ```
#[must_use]
pub fn evaluate_source(source: &str) -> Option<bool> {
    let mut interpreter = Interpreter::new(source);
    interpreter.evaluate()
}
