use std::f64::consts::{PI, TAU};

use crate::error::{CalcError, CalcResult};

/// Largest `n` for which `n!` is finite in `f64`.
pub const MAX_FACTORIAL: f64 = 170.0;

/// Computes the Gamma function using the Lanczos approximation.
///
/// Arguments below `0.5` use the reflection formula
/// `Γ(z) = π / (sin(πz) · Γ(1 − z))`. At the poles (zero and the negative
/// integers) the result is not finite.
///
/// # Example
/// ```
/// use calc_cli::util::gamma::euler_gamma;
///
/// assert!((euler_gamma(5.0) - 24.0).abs() < 1e-9);
/// assert!((euler_gamma(0.5) - std::f64::consts::PI.sqrt()).abs() < 1e-12);
/// ```
#[must_use]
pub fn euler_gamma(z: f64) -> f64 {
    // Lanczos coefficients, g = 7, n = 9.
    const COEFFS: [f64; 9] = [0.999_999_999_999_809_9,
                              676.520_368_121_885_1,
                              -1_259.139_216_722_402_8,
                              771.323_428_777_653_1,
                              -176.615_029_162_140_6,
                              12.507_343_278_686_905,
                              -0.138_571_095_265_720_12,
                              9.984_369_578_019_572e-6,
                              1.505_632_735_149_311_6e-7];
    const G: f64 = 7.0;

    if z < 0.5 {
        return PI / ((PI * z).sin() * euler_gamma(1.0 - z));
    }
    // Γ(171.62...) already overflows; avoid inf * 0 below.
    if z > MAX_FACTORIAL + 2.0 {
        return f64::INFINITY;
    }

    let z_minus_1 = z - 1.0;
    let mut x = COEFFS[0];
    let mut offset = 1.0;
    for &c in &COEFFS[1..] {
        x += c / (z_minus_1 + offset);
        offset += 1.0;
    }

    let t = z_minus_1 + G + 0.5;

    // t^(z - 0.5) alone overflows from z ≈ 143; split it around e^-t.
    let half_power = t.powf((z_minus_1 + 0.5) / 2.0);

    TAU.sqrt() * half_power * (-t).exp() * half_power * x
}

/// Generalized factorial, `Γ(x + 1)`.
///
/// Non-negative integers up to [`MAX_FACTORIAL`] are computed as an exact
/// product so that `5!` is exactly `120`. Larger integers overflow to
/// infinity and every other real goes through [`euler_gamma`].
///
/// # Errors
/// [`CalcError::UnsupportedOperand`] for negative integers, where Gamma has
/// a pole, and for `NaN`.
///
/// # Example
/// ```
/// use calc_cli::util::gamma::factorial;
///
/// assert_eq!(factorial(5.0).unwrap(), 120.0);
/// assert!((factorial(0.5).unwrap() - 0.886_226_925_452_758).abs() < 1e-12);
/// assert!(factorial(-3.0).is_err());
/// ```
pub fn factorial(x: f64) -> CalcResult<f64> {
    if x.is_nan() {
        return Err(CalcError::unsupported("factorial of NaN"));
    }
    if x.fract() == 0.0 && x < 0.0 {
        let details = format!("factorial is not defined for negative integer {x}");
        return Err(CalcError::unsupported(details));
    }

    if x.fract() == 0.0 {
        if x > MAX_FACTORIAL {
            return Ok(f64::INFINITY);
        }
        let mut product = 1.0;
        let mut k = 2.0;
        while k <= x {
            product *= k;
            k += 1.0;
        }
        return Ok(product);
    }

    Ok(euler_gamma(x + 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-10 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn small_integers_are_exact() {
        assert_eq!(factorial(0.0).unwrap(), 1.0);
        assert_eq!(factorial(1.0).unwrap(), 1.0);
        assert_eq!(factorial(3.0).unwrap(), 6.0);
        assert_eq!(factorial(10.0).unwrap(), 3_628_800.0);
    }

    #[test]
    fn non_integers_follow_gamma() {
        assert!(close(factorial(0.5).unwrap(), PI.sqrt() / 2.0));
        assert!(close(factorial(-0.5).unwrap(), PI.sqrt()));
        assert!(close(factorial(2.5).unwrap(), 3.323_350_970_447_843));
    }

    #[test]
    fn negative_non_integers_are_supported() {
        // Γ(-0.5) = -2√π
        assert!(close(factorial(-1.5).unwrap(), -2.0 * PI.sqrt()));
    }

    #[test]
    fn negative_integers_are_rejected() {
        assert!(matches!(factorial(-1.0), Err(CalcError::UnsupportedOperand { .. })));
        assert!(matches!(factorial(-4.0), Err(CalcError::UnsupportedOperand { .. })));
    }

    #[test]
    fn overflow_becomes_infinity() {
        assert!(factorial(170.0).unwrap().is_finite());
        assert_eq!(factorial(171.0).unwrap(), f64::INFINITY);
        assert_eq!(factorial(500.5).unwrap(), f64::INFINITY);
    }

    #[test]
    fn large_non_integers_stay_finite() {
        // 150.5! = 150.5 * 149.5 * ... * 1.5 * 0.5!
        let mut expected = factorial(0.5).unwrap();
        let mut k = 1.5;
        while k <= 150.5 {
            expected *= k;
            k += 1.0;
        }

        let actual = factorial(150.5).unwrap();
        assert!(actual.is_finite());
        assert!(close(actual, expected), "{actual} != {expected}");
        assert!(factorial(145.5).unwrap().is_finite());
        assert!(factorial(170.5).unwrap().is_finite());
    }

    #[test]
    fn gamma_matches_factorial_on_integers() {
        for n in 1..15 {
            let n = f64::from(n);
            assert!(close(euler_gamma(n + 1.0), factorial(n).unwrap()));
        }
    }
}
