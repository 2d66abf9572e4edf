use crate::{
    error::CalcResult,
    interpreter::evaluator::function::core::check_arity,
    util::gamma,
};

/// `factorial[n]`, the same operation as postfix `n!`.
pub fn factorial(args: &[f64]) -> CalcResult<f64> {
    check_arity(args, 1)?;

    gamma::factorial(args[0])
}

/// Number of ordered selections of `k` items out of `n`, `n! / (n - k)!`.
///
/// Both arguments may be any real for which the factorials are defined.
///
/// # Example
/// ```
/// use calc_cli::interpreter::evaluator::function::choose::permutation;
///
/// assert_eq!(permutation(&[5.0, 2.0]).unwrap(), 20.0);
/// ```
pub fn permutation(args: &[f64]) -> CalcResult<f64> {
    check_arity(args, 2)?;

    let (n, k) = (args[0], args[1]);

    Ok(gamma::factorial(n)? / gamma::factorial(n - k)?)
}

/// Binomial coefficient, `n! / (k! (n - k)!)`.
///
/// # Example
/// ```
/// use calc_cli::interpreter::evaluator::function::choose::combination;
///
/// assert_eq!(combination(&[5.0, 2.0]).unwrap(), 10.0);
/// ```
pub fn combination(args: &[f64]) -> CalcResult<f64> {
    check_arity(args, 2)?;

    Ok(permutation(args)? / gamma::factorial(args[1])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;

    #[test]
    fn counting_identities() {
        assert_eq!(permutation(&[4.0, 4.0]).unwrap(), 24.0);
        assert_eq!(permutation(&[4.0, 0.0]).unwrap(), 1.0);
        assert_eq!(combination(&[6.0, 3.0]).unwrap(), 20.0);
        assert_eq!(combination(&[6.0, 0.0]).unwrap(), 1.0);
    }

    #[test]
    fn k_larger_than_n_hits_a_gamma_pole() {
        assert!(matches!(permutation(&[3.0, 5.0]),
                         Err(CalcError::UnsupportedOperand { .. })));
    }

    #[test]
    fn factorial_builtin_matches_postfix() {
        assert_eq!(factorial(&[5.0]).unwrap(), 120.0);
        assert!(factorial(&[5.0, 1.0]).is_err());
    }
}
