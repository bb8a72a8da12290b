//! Rational approximation of Γ on the reduced interval (2, 3).

use super::{ratval, P, Q};

/// Γ(x + 2) for `x` in [0, 1], as `P(x) / Q(x)`.
#[inline]
pub(crate) fn rational(x: f64) -> f64 {
    ratval(&P, &Q, x)
}
