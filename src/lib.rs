//! # calc-cli
//!
//! calc-cli is an interactive expression calculator written in Rust.
//! It tokenizes and evaluates one statement at a time, with support for
//! arithmetic, postfix factorial, named constants, `let` variables, the
//! previous result `_`, and builtin functions called as `name[args]`.

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
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

use crate::{
    error::CalcResult,
    interpreter::{environment::Environment, evaluator::core::Calculator, lexer::tokenize},
};

/// Provides the error type shared by tokenizing and evaluation.
///
/// This module defines the closed set of failures a statement can end with.
/// Every operation returns [`error::CalcResult`] and propagates failures with
/// `?`, so the driver receives exactly one error per failed statement.
///
/// # Responsibilities
/// - Defines one error variant per failure kind.
/// - Formats user-facing messages.
/// - Exposes a stable short name for each kind.
pub mod error;
/// Orchestrates tokenizing and evaluating statements.
///
/// This module ties together the lexer, the evaluator, the constant table
/// and the environment. It exposes the building blocks a driver needs to run
/// statements one after another.
pub mod interpreter;
/// Numeric helpers that are not tied to a single grammar level.
pub mod util;

/// Tokenizes and evaluates one statement.
///
/// This is the entry point a driver calls once per line. On success the
/// result also becomes the environment's previous value.
///
/// # Parameters
/// - `source`: The statement text.
/// - `calculator`: The constant and function tables to evaluate against.
/// - `env`: Variables and the previous value, updated on success.
///
/// # Returns
/// The value of the statement.
///
/// # Errors
/// Returns the first error raised while tokenizing or evaluating. The
/// environment is unchanged in that case.
///
/// # Examples
/// ```
/// use calc_cli::{
///     evaluate,
///     interpreter::{environment::Environment, evaluator::core::Calculator},
/// };
///
/// let calculator = Calculator::new();
/// let mut env = Environment::new();
///
/// assert_eq!(evaluate("let r = 2", &calculator, &mut env), Ok(2.0));
/// assert_eq!(evaluate("r ^ 2 * 3", &calculator, &mut env), Ok(12.0));
///
/// // `y` has never been declared.
/// assert!(evaluate("y + 1", &calculator, &mut env).is_err());
/// ```
pub fn evaluate(source: &str, calculator: &Calculator, env: &mut Environment) -> CalcResult<f64> {
    let tokens = tokenize(source)?;
    calculator.statement(&tokens, env)
}
