//! Stirling's formula for large arguments.

use num_traits::Float;

use super::{polyval, S};

/// √(2π).
const SQRT_2PI: f64 = 2.506628274631000502417;

/// Above this, x^(x − 0.5) overflows before the division by eˣ.
const MAX_STIRLING: f64 = 143.01608;

/// Γ(x) for x > 33 via √(2π) · x^(x − 0.5) · e^(−x) · (1 + S(1/x)/x).
///
/// Valid up to the overflow threshold near 171.6.
pub(crate) fn stirling(x: f64) -> f64 {
    let w = 1.0 / x;
    let w = 1.0 + w * polyval(&S, w);
    let y = Float::exp(x);
    let y = if x > MAX_STIRLING {
        // split the power so neither half overflows
        let v = Float::powf(x, 0.5 * x - 0.25);
        v * (v / y)
    } else {
        Float::powf(x, x - 0.5) / y
    };
    SQRT_2PI * y * w
}
