/// The error taxonomy shared by the tokenizer and the evaluator.
///
/// Every failure mode of a statement is one variant of [`CalcError`]. The
/// driver pattern-matches on the variant (or its [`CalcError::kind`]) to
/// report the failure, then carries on with the next statement.
pub mod calc_error;

pub use calc_error::{CalcError, CalcResult};
