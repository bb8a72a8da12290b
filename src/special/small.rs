//! First-order Laurent expansion of Γ at a pole.

use super::EULER;

/// `z · Γ(x)` for `x` within `POLE_EPS` of zero, using Γ(x) ≈ 1/x − γ.
///
/// `z` is the correction factor accumulated by the reduction loop, so the
/// same expansion covers the poles at the negative integers. An exact zero
/// returns +∞ whatever the sign of `z`.
#[inline]
pub(crate) fn small_approx(x: f64, z: f64) -> f64 {
    if x == 0.0 {
        return f64::INFINITY;
    }
    z / ((1.0 + EULER * x) * x)
}
