use crate::error::{CalcError, CalcResult};

/// Sum of all arguments. `sum[]` is `0`.
pub fn sum(args: &[f64]) -> CalcResult<f64> {
    Ok(args.iter().sum())
}

/// Arithmetic mean of all arguments.
///
/// # Errors
/// [`CalcError::UnsupportedOperand`] when called without arguments.
///
/// # Example
/// ```
/// use calc_cli::interpreter::evaluator::function::aggregate::average;
///
/// assert_eq!(average(&[1.0, 2.0, 6.0]).unwrap(), 3.0);
/// assert!(average(&[]).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn average(args: &[f64]) -> CalcResult<f64> {
    if args.is_empty() {
        return Err(CalcError::unsupported("can't take average of zero numbers"));
    }

    Ok(sum(args)? / args.len() as f64)
}
