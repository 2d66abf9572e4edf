/// Binary operator levels of the grammar.
///
/// Implements `expression` (`+`, `-`), `term` (`*`, `/`, `%`) and `power`
/// (`^`) by splitting the token range at a top-level operator found with the
/// shared backward scan.
pub mod binary;

/// The calculator and its statement-level entry points.
///
/// Contains the `Calculator` type, statement dispatch, `let` declarations and
/// the result type used throughout evaluation.
pub mod core;

/// Named functions callable as `name[args]`.
///
/// Handles the function table, arity checking and all builtin functions.
pub mod function;

/// `primary` and function-call argument lists.
///
/// Resolves literals, variables, constants, `_`, parenthesized groups,
/// function calls and postfix factorial.
pub mod primary;

/// The backward top-level operator scan shared by every binary level.
pub mod scan;

/// Prefix sign handling.
pub mod unary;
