use crate::{error::CalcResult, interpreter::evaluator::function::core::check_arity};

/// Applies a one-argument `f64` method as a builtin.
///
/// The generated function accepts exactly one argument and forwards it to the
/// named method of `f64`.
///
/// # Example
/// ```
/// use calc_cli::interpreter::evaluator::function::builtin::sin;
///
/// let r = sin(&[std::f64::consts::PI / 2.0]).unwrap();
/// assert_eq!(r, 1.0);
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[f64]) -> CalcResult<f64> {
            check_arity(args, 1)?;

            Ok(args[0].$real_fn())
        }
    };
}

/// Builds `1 / f(x)`, e.g. `csc` from `sin`.
macro_rules! reciprocal_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[f64]) -> CalcResult<f64> {
            check_arity(args, 1)?;

            Ok(args[0].$real_fn().recip())
        }
    };
}

/// Builds `f(1 / x)`, e.g. `acsc` from `asin`.
macro_rules! inverse_reciprocal_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[f64]) -> CalcResult<f64> {
            check_arity(args, 1)?;

            Ok(args[0].recip().$real_fn())
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);
real_builtin!(asin, asin);
real_builtin!(acos, acos);
real_builtin!(atan, atan);
real_builtin!(sinh, sinh);
real_builtin!(cosh, cosh);
real_builtin!(tanh, tanh);
real_builtin!(asinh, asinh);
real_builtin!(acosh, acosh);
real_builtin!(atanh, atanh);
real_builtin!(sqrt, sqrt);
real_builtin!(cbrt, cbrt);
real_builtin!(abs, abs);
real_builtin!(round, round);

reciprocal_builtin!(csc, sin);
reciprocal_builtin!(sec, cos);
reciprocal_builtin!(cot, tan);
reciprocal_builtin!(csch, sinh);
reciprocal_builtin!(sech, cosh);
reciprocal_builtin!(coth, tanh);

inverse_reciprocal_builtin!(acsc, asin);
inverse_reciprocal_builtin!(asec, acos);
inverse_reciprocal_builtin!(acot, atan);
inverse_reciprocal_builtin!(acsch, asinh);
inverse_reciprocal_builtin!(asech, acosh);
inverse_reciprocal_builtin!(acoth, atanh);

/// Converts an angle from radians to degrees. Registered as `d`.
///
/// # Example
/// ```
/// use calc_cli::interpreter::evaluator::function::builtin::degrees;
///
/// let d = degrees(&[std::f64::consts::PI]).unwrap();
/// assert_eq!(d, 180.0);
/// ```
pub fn degrees(args: &[f64]) -> CalcResult<f64> {
    check_arity(args, 1)?;

    Ok(args[0].to_degrees())
}

/// Converts an angle from degrees to radians. Registered as `r`.
///
/// # Example
/// ```
/// use calc_cli::interpreter::evaluator::function::builtin::radians;
///
/// let r = radians(&[180.0]).unwrap();
/// assert_eq!(r, std::f64::consts::PI);
/// ```
pub fn radians(args: &[f64]) -> CalcResult<f64> {
    check_arity(args, 1)?;

    Ok(args[0].to_radians())
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn reciprocal_trigonometry() {
        assert!(close(csc(&[FRAC_PI_2]).unwrap(), 1.0));
        assert!(close(sec(&[0.0]).unwrap(), 1.0));
        assert!(close(cot(&[FRAC_PI_4]).unwrap(), 1.0));
        assert!(close(acsc(&[1.0]).unwrap(), FRAC_PI_2));
        assert!(close(acot(&[1.0]).unwrap(), FRAC_PI_4));
    }

    #[test]
    fn hyperbolic_family() {
        assert!(close(sech(&[0.0]).unwrap(), 1.0));
        assert!(close(asech(&[1.0]).unwrap(), 0.0));
        assert!(close(acoth(&[coth(&[0.5]).unwrap()]).unwrap(), 0.5));
    }

    #[test]
    fn roots_and_rounding() {
        assert_eq!(sqrt(&[9.0]).unwrap(), 3.0);
        assert_eq!(cbrt(&[-27.0]).unwrap(), -3.0);
        assert_eq!(abs(&[-2.5]).unwrap(), 2.5);
        assert_eq!(round(&[2.5]).unwrap(), 3.0);
    }

    #[test]
    fn builtins_reject_wrong_argument_counts() {
        assert!(sin(&[]).is_err());
        assert!(degrees(&[1.0, 2.0]).is_err());
    }
}
