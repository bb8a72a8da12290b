//! Gamma function via argument reduction and rational approximation.

use num_traits::Float;

use super::rational::rational;
use super::small::small_approx;
use super::stirling::stirling;
use super::{OVERFLOW_HI, OVERFLOW_LO, POLE_EPS, STIRLING_MIN};

/// Gamma function Γ(x).
///
/// For |x| ≤ 33 the argument is shifted onto [2, 3] with the recurrence
/// Γ(x + 1) = x·Γ(x) and evaluated with a degree 7/7 rational function.
/// Larger positive arguments use Stirling's formula; larger negative
/// arguments are mapped onto the positive axis with the reflection formula
/// Γ(x)·Γ(1 − x) = π / sin(πx).
///
/// The function is total. Undefined or unrepresentable results are reported
/// through the return value:
///
/// | Input | Result |
/// |-------|--------|
/// | NaN, −∞, negative integer | NaN |
/// | +0 | +∞ |
/// | −0 | −∞ |
/// | x > 171.61447887182298 or x < −170.5674972726612 | +∞ |
///
/// # Example
///
/// ```
/// use cephes_gamma::gamma;
///
/// // Γ(n) = (n−1)! is exact on the reduction path
/// assert_eq!(gamma(6.0), 120.0);
///
/// // Γ(−0.5) = −2√π
/// let sqrt_pi = core::f64::consts::PI.sqrt();
/// assert!((gamma(-0.5) + 2.0 * sqrt_pi).abs() < 1e-14);
///
/// assert!(gamma(-3.0).is_nan());
/// assert_eq!(gamma(200.0), f64::INFINITY);
/// ```
pub fn gamma(x: f64) -> f64 {
    if x.is_nan() || is_negative_integer(x) {
        return f64::NAN;
    }
    if x == 0.0 {
        return if x.is_sign_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    if x < OVERFLOW_LO || x > OVERFLOW_HI {
        return f64::INFINITY;
    }

    let q = Float::abs(x);
    if q > STIRLING_MIN {
        if x >= 0.0 {
            return stirling(x);
        }
        return reflect(q);
    }

    reduce(x)
}

/// Negative integers and −∞ are poles with no defined sign.
#[inline]
fn is_negative_integer(x: f64) -> bool {
    x < 0.0 && Float::floor(x) == x
}

/// Γ(−q) for q > 33 via Γ(−q) = −π / (q · sin(πq) · Γ(q)).
fn reflect(q: f64) -> f64 {
    let mut p = Float::floor(q);
    let sign = if p % 2.0 == 0.0 { -1.0 } else { 1.0 };
    let mut z = q - p;
    if z > 0.5 {
        p += 1.0;
        z = q - p;
    }
    z = q * Float::sin(core::f64::consts::PI * z);
    sign * core::f64::consts::PI / (Float::abs(z) * stirling(q))
}

/// Shift `x` onto [2, 3] and evaluate there, or bail out to the small-value
/// approximation when the shift lands within `POLE_EPS` of a pole.
fn reduce(mut x: f64) -> f64 {
    let mut z = 1.0;
    while x >= 3.0 {
        x -= 1.0;
        z *= x;
    }
    while x < 0.0 {
        if x > -POLE_EPS {
            return small_approx(x, z);
        }
        z /= x;
        x += 1.0;
    }
    while x < 2.0 {
        if x < POLE_EPS {
            return small_approx(x, z);
        }
        z /= x;
        x += 1.0;
    }
    if x == 2.0 {
        return z;
    }
    z * rational(x - 2.0)
}
