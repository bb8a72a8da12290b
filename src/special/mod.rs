//! Special mathematical functions.
//!
//! Provides the gamma function Γ(x) for `f64`, following the Cephes `tgamma`
//! algorithm: argument reduction onto (2, 3) with a degree 7/7 rational
//! approximation, Stirling's formula for large arguments, and the reflection
//! formula for large negative arguments. no-std compatible and stack-only.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`gamma`] | Gamma function Γ(x) |
//!
//! # Example
//!
//! ```
//! use cephes_gamma::special::gamma;
//!
//! // Γ(5) = 4! = 24
//! assert_eq!(gamma(5.0), 24.0);
//!
//! // Γ(0.5) = √π
//! let sqrt_pi = core::f64::consts::PI.sqrt();
//! assert!((gamma(0.5) - sqrt_pi).abs() < 1e-14);
//!
//! // Signed zero selects the side of the pole
//! assert_eq!(gamma(-0.0), f64::NEG_INFINITY);
//! ```

mod gamma_fn;
mod rational;
mod small;
mod stirling;


pub use gamma_fn::gamma;

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Largest argument for which Γ(x) is finite in double precision.
pub(crate) const OVERFLOW_HI: f64 = 171.61447887182298;

/// Smallest argument for which |Γ(x)| is representable in double precision.
pub(crate) const OVERFLOW_LO: f64 = -170.5674972726612;

/// |x| above which Stirling's formula is used instead of argument reduction.
pub(crate) const STIRLING_MIN: f64 = 33.0;

/// Distance from a pole below which the reduction loop stops dividing.
pub(crate) const POLE_EPS: f64 = 1e-9;

/// Euler–Mascheroni constant γ.
pub(crate) const EULER: f64 = 0.5772156649015329;

// ---------------------------------------------------------------------------
// Coefficient tables (Cephes tgamma), ascending degree: index 0 is the
// constant term.
// ---------------------------------------------------------------------------

/// Numerator of Γ(x + 2) on [0, 1].
pub(crate) const P: [f64; 8] = [
    9.99999999999999996796e-01,
    4.94214826801497100753e-01,
    2.07448227648435975150e-01,
    4.76367800457137231464e-02,
    1.04213797561761569935e-02,
    1.19135147006586384913e-03,
    1.60119522476751861407e-04,
    0.0,
];

/// Denominator of Γ(x + 2) on [0, 1].
pub(crate) const Q: [f64; 8] = [
    1.00000000000000000320e+00,
    7.14304917030273074085e-02,
    -2.34591795718243348568e-01,
    3.58236398605498653373e-02,
    1.18139785222060435552e-02,
    -4.45641913851797240494e-03,
    5.39605580493303397842e-04,
    -2.31581873324120129819e-05,
];

/// Stirling correction series in powers of 1/x.
pub(crate) const S: [f64; 5] = [
    8.33333333333482257126e-02,
    3.47222221605458667310e-03,
    -2.68132617805781232825e-03,
    -2.29549961613378126380e-04,
    7.87311395793093628397e-04,
];

/// Evaluate `c[0] + c[1]·x + … + c[n-1]·x^(n-1)` by Horner's rule.
#[inline]
pub(crate) fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Evaluate the rational function `num(x) / den(x)`, both in ascending order.
#[inline]
pub(crate) fn ratval(num: &[f64], den: &[f64], x: f64) -> f64 {
    polyval(num, x) / polyval(den, x)
}
