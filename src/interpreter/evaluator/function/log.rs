use crate::{error::CalcResult, interpreter::evaluator::function::core::check_arity};

/// Natural logarithm. Registered as `ln`.
pub fn ln(args: &[f64]) -> CalcResult<f64> {
    check_arity(args, 1)?;

    Ok(args[0].ln())
}

/// Common (base 10) logarithm. Registered as `log`.
///
/// # Example
/// ```
/// use calc_cli::interpreter::evaluator::function::log::log10;
///
/// assert_eq!(log10(&[1000.0]).unwrap(), 3.0);
/// ```
pub fn log10(args: &[f64]) -> CalcResult<f64> {
    check_arity(args, 1)?;

    Ok(args[0].log10())
}

/// Binary logarithm. Registered as `logb`.
pub fn log2(args: &[f64]) -> CalcResult<f64> {
    check_arity(args, 1)?;

    Ok(args[0].log2())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logarithm_bases() {
        assert_eq!(ln(&[1.0]).unwrap(), 0.0);
        assert!((ln(&[std::f64::consts::E]).unwrap() - 1.0).abs() < 1e-15);
        assert_eq!(log10(&[100.0]).unwrap(), 2.0);
        assert_eq!(log2(&[8.0]).unwrap(), 3.0);
    }

    #[test]
    fn out_of_domain_is_not_finite() {
        assert!(ln(&[-1.0]).unwrap().is_nan());
        assert_eq!(log10(&[0.0]).unwrap(), f64::NEG_INFINITY);
    }
}
