use std::f64::consts::PI;

// Bessel functions of the first kind and the zeros of J1', which set the
// canonical sample radii of a circular aperture's angular spectrum.
// Sources:
// [1] Abramowitz & Stegun, Handbook of Mathematical Functions, ch. 9
//     https://personal.math.ubc.ca/~cbm/aands/page_358.htm
// The J0/J1 evaluations are the usual two-regime rational fits: a
// rational polynomial below |x| = 8 and the asymptotic cosine form with
// slowly varying amplitude/phase polynomials above. Accuracy is a few
// parts in 1e8, plenty for a taper whose own curve fit carries 1e-8
// coefficients.

/// Bessel function of the first kind, order 0.
pub fn bessel_j0(x: f64) -> f64 {
    let ax = x.abs();
    if ax < 8.0 {
        let y = x * x;
        let num = 57568490574.0
            + y * (-13362590354.0
                + y * (651619640.7
                    + y * (-11214424.18 + y * (77392.33017 + y * (-184.9052456)))));
        let den = 57568490411.0
            + y * (1029532985.0
                + y * (9494680.718 + y * (59272.64853 + y * (267.8532712 + y))));
        num / den
    } else {
        let z = 8.0 / ax;
        let y = z * z;
        let xx = ax - 0.785398164;
        let p = 1.0
            + y * (-0.1098628627e-2
                + y * (0.2734510407e-4 + y * (-0.2073370639e-5 + y * 0.2093887211e-6)));
        let q = -0.1562499995e-1
            + y * (0.1430488765e-3
                + y * (-0.6911147651e-5 + y * (0.7621095161e-6 + y * (-0.934935152e-7))));
        (0.636619772 / ax).sqrt() * (xx.cos() * p - z * xx.sin() * q)
    }
}

/// Bessel function of the first kind, order 1. Odd in x.
pub fn bessel_j1(x: f64) -> f64 {
    let ax = x.abs();
    if ax < 8.0 {
        let y = x * x;
        let num = x
            * (72362614232.0
                + y * (-7895059235.0
                    + y * (242396853.1
                        + y * (-2972611.439 + y * (15704.48260 + y * (-30.16036606))))));
        let den = 144725228442.0
            + y * (2300535178.0
                + y * (18583304.74 + y * (99447.43394 + y * (376.9991397 + y))));
        num / den
    } else {
        let z = 8.0 / ax;
        let y = z * z;
        let xx = ax - 2.356194491;
        let p = 1.0
            + y * (0.183105e-2
                + y * (-0.3516396496e-4 + y * (0.2457520174e-5 + y * (-0.240337019e-6))));
        let q = 0.04687499995
            + y * (-0.2002690873e-3
                + y * (0.8449199096e-5 + y * (-0.88228987e-6 + y * 0.105787412e-6)));
        let mag = (0.636619772 / ax).sqrt() * (xx.cos() * p - z * xx.sin() * q);
        if x < 0.0 {
            -mag
        } else {
            mag
        }
    }
}

/// Derivative of J1, via J1'(x) = J0(x) - J1(x)/x. The x = 0 limit is 1/2.
pub fn bessel_j1_prime(x: f64) -> f64 {
    if x == 0.0 {
        0.5
    } else {
        bessel_j0(x) - bessel_j1(x) / x
    }
}

// Second derivative of J1 from the Bessel equation,
// x² J1'' + x J1' + (x² - 1) J1 = 0. Only used to drive Newton below.
fn bessel_j1_second(x: f64) -> f64 {
    -bessel_j1_prime(x) / x - (1.0 - 1.0 / (x * x)) * bessel_j1(x)
}

/// First `n` positive zeros of J1', in increasing order. The k-th zero
/// (1-indexed) is seeded from the McMahon expansion around
/// β = (k - 1/4)π and polished by Newton iteration; the expansion is
/// within ~2% even for k = 1, so Newton lands on the right root.
pub fn bessel_j1_prime_zeros(n: usize) -> Vec<f64> {
    let mut zeros = Vec::with_capacity(n);
    for k in 1..=n {
        let β = (k as f64 - 0.25) * PI;
        let b8 = 8.0 * β;
        // McMahon, A&S 9.5.13 with μ = 4ν² = 4
        let mut x = β - 7.0 / b8 - 4.0 * 431.0 / (3.0 * b8.powi(3))
            - 32.0 * 29893.0 / (15.0 * b8.powi(5));
        for _ in 0..50 {
            let dx = bessel_j1_prime(x) / bessel_j1_second(x);
            x -= dx;
            if dx.abs() < 1e-13 * x {
                break;
            }
        }
        zeros.push(x);
    }
    zeros
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn j0_reference_values() {
        // the rational fit is only good to a few 1e-8, even at x = 0
        assert_relative_eq!(bessel_j0(0.0), 1.0, max_relative = 1e-7);
        assert_relative_eq!(bessel_j0(1.0), 0.7651976866, max_relative = 1e-7);
        assert_relative_eq!(bessel_j0(10.0), -0.2459357645, max_relative = 1e-6);
        // first zero of J0
        assert_abs_diff_eq!(bessel_j0(2.4048255577), 0.0, epsilon = 1e-7);
    }

    #[test]
    fn j1_reference_values() {
        assert_relative_eq!(bessel_j1(0.0), 0.0);
        assert_relative_eq!(bessel_j1(1.0), 0.4400505857, max_relative = 1e-7);
        assert_relative_eq!(bessel_j1(10.0), 0.0434727462, max_relative = 1e-6);
    }

    #[test]
    fn j1_is_odd() {
        for &x in &[0.3, 1.7, 5.0, 9.5, 20.0] {
            assert_relative_eq!(bessel_j1(-x), -bessel_j1(x));
        }
    }

    #[test]
    fn j1_prime_limit_at_zero() {
        assert_relative_eq!(bessel_j1_prime(0.0), 0.5);
        assert_relative_eq!(bessel_j1_prime(1e-6), 0.5, max_relative = 1e-6);
    }

    #[test]
    fn j1_prime_zeros_reference_values() {
        let zeros = bessel_j1_prime_zeros(5);
        let expected = [1.84118378, 5.33144277, 8.53631637, 11.70600490, 14.86358863];
        for (z, e) in zeros.iter().zip(expected.iter()) {
            assert_relative_eq!(*z, *e, max_relative = 1e-6);
        }
    }

    #[test]
    fn j1_prime_vanishes_at_zeros() {
        for z in bessel_j1_prime_zeros(20) {
            assert_abs_diff_eq!(bessel_j1_prime(z), 0.0, epsilon = 1e-7);
        }
    }

    #[test]
    fn j1_prime_zeros_strictly_increasing() {
        let zeros = bessel_j1_prime_zeros(30);
        assert_eq!(zeros.len(), 30);
        for w in zeros.windows(2) {
            assert!(w[0] > 0.0 && w[0] < w[1]);
        }
    }
}
