//! # minicalc
//!
//! minicalc is an evaluator for integer and boolean expressions written in
//! Rust. Each line of input is lexed, parsed into a syntax tree, bound into a
//! typed tree and then evaluated directly, with positioned diagnostics for
//! anything malformed or ill-typed.

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
#![allow(clippy::missing_errors_doc, clippy::multiple_crate_versions)]

use crate::{
    error::RuntimeError,
    interpreter::compilation::{Compilation, EvaluationResult},
};

/// Defines the structure of parsed code.
///
/// This module declares the `SyntaxNode` enum and the read-only traversal
/// types used to walk and print it. The syntax tree is built by the parser and
/// consumed by the binder.
///
/// # Responsibilities
/// - Defines one node variant per expression form.
/// - Keeps every token a node was built from, with its source span.
/// - Exposes node kinds and children for tree dumps.
pub mod ast;
/// Provides the error types for every stage.
///
/// Diagnostics describe bad input and are collected while lexing, parsing and
/// binding. Runtime errors are fatal failures raised while evaluating.
///
/// # Responsibilities
/// - Defines the diagnostic record, its severity and the collector.
/// - Defines the fatal `RuntimeError` enum.
/// - Keeps the two tiers apart so a fatal failure is never reported as a
///   diagnostic.
pub mod error;
/// Orchestrates the entire process of evaluating a line.
///
/// This module ties together lexing, parsing, binding, evaluation and value
/// representations, and exposes the [`interpreter::compilation::Compilation`]
/// driver.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, binder, evaluator.
/// - Gates evaluation on the absence of diagnostics.
pub mod interpreter;
/// General utilities shared across the interpreter.
///
/// Source spans and logging setup.
pub mod util;

/// Evaluates one line of source text.
///
/// Returns the computed value, or every diagnostic found while lexing, parsing
/// and binding (in that order) when the input is malformed or ill-typed.
///
/// # Errors
/// Returns a `RuntimeError` for fatal failures during evaluation, such as
/// division by zero or integer overflow.
///
/// # Examples
/// ```
/// use minicalc::{evaluate, interpreter::compilation::EvaluationResult, interpreter::value::Value};
///
/// let result = evaluate("1 + 2 * 3").unwrap();
/// assert_eq!(result, EvaluationResult::Value(Value::Integer(7)));
///
/// // A type error is a diagnostic, not a failure.
/// let result = evaluate("1 + true").unwrap();
/// assert!(matches!(result, EvaluationResult::Diagnostics(_)));
///
/// // Division by zero is a failure.
/// assert!(evaluate("1 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<EvaluationResult, RuntimeError> {
    Compilation::new(source).evaluate()
}
