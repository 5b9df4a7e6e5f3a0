//! Gamma and digamma functions for the informational moments.

use std::f64::consts::PI;

/// ln |Γ(x)|. Reflection below 0.5, Lanczos (g = 7) above.
pub(crate) fn ln_gamma(x: f64) -> f64 {
    #[allow(clippy::excessive_precision)]
    const COEFFICIENTS: [f64; 9] = [
        0.99999999999980993,
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];
    const G: f64 = 7.0;

    if x < 0.5 {
        // Γ(x)·Γ(1−x) = π/sin(πx)
        return (PI / (PI * x).sin().abs()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let mut sum = COEFFICIENTS[0];
    for (i, &c) in COEFFICIENTS[1..].iter().enumerate() {
        sum += c / (x + i as f64 + 1.0);
    }

    let t = x + G + 0.5;
    0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + sum.ln()
}

/// ψ(x). `NaN` at the poles (zero and negative integers).
pub(crate) fn digamma(x: f64) -> f64 {
    if x.is_nan() || (x <= 0.0 && x == x.floor()) {
        return f64::NAN;
    }
    if x < 0.0 {
        // ψ(1 - x) - ψ(x) = π cot(πx)
        return digamma(1.0 - x) - PI / (PI * x).tan();
    }

    // Shift up with ψ(x) = ψ(x + 1) - 1/x, then use the asymptotic series
    let mut x = x;
    let mut result = 0.0;
    while x < 6.0 {
        result -= 1.0 / x;
        x += 1.0;
    }
    let inv = 1.0 / x;
    let inv2 = inv * inv;
    let series = inv2
        * (1.0 / 12.0
            - inv2 * (1.0 / 120.0 - inv2 * (1.0 / 252.0 - inv2 * (1.0 / 240.0 - inv2 / 132.0))));
    result + x.ln() - 0.5 * inv - series
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EULER_GAMMA: f64 = 0.5772156649015329;

    #[test]
    fn test_ln_gamma_factorials() {
        let mut ln_factorial = 0.0;
        for k in 1..30 {
            assert_relative_eq!(
                ln_gamma(k as f64),
                ln_factorial,
                epsilon = 1e-12,
                max_relative = 1e-9
            );
            ln_factorial += (k as f64).ln();
        }
    }

    #[test]
    fn test_ln_gamma_half_integers() {
        assert_relative_eq!(ln_gamma(0.5), PI.sqrt().ln(), max_relative = 1e-9);
        assert_relative_eq!(ln_gamma(-0.5), (2.0 * PI.sqrt()).ln(), max_relative = 1e-9);
    }

    #[test]
    fn test_ln_gamma_past_gamma_overflow() {
        // Γ(200) overflows f64; ln Γ(200) = 857.93...
        let value = ln_gamma(200.0);
        assert!(value.is_finite());
        assert_relative_eq!(value, 857.9336698258574, max_relative = 1e-9);
    }

    #[test]
    fn test_digamma_known() {
        assert_relative_eq!(digamma(1.0), -EULER_GAMMA, max_relative = 1e-9);
        assert_relative_eq!(digamma(2.0), 1.0 - EULER_GAMMA, max_relative = 1e-9);
        assert_relative_eq!(
            digamma(0.5),
            -EULER_GAMMA - 2.0 * 2.0_f64.ln(),
            max_relative = 1e-9
        );
        assert_relative_eq!(digamma(10.0), 2.251752589066721, max_relative = 1e-9);
    }

    #[test]
    fn test_digamma_poles() {
        assert!(digamma(0.0).is_nan());
        assert!(digamma(-2.0).is_nan());
        assert!(digamma(f64::NAN).is_nan());
    }
}
