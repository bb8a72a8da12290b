//! # cephes-gamma
//!
//! The gamma function Γ(x) for every `f64` input, following the Cephes
//! `tgamma` algorithm. no-std compatible, allocation free, and pure: every
//! call only reads constant coefficient tables, so it is safe to call from
//! any number of threads.
//!
//! ## Quick start
//!
//! ```
//! use cephes_gamma::gamma;
//!
//! // Γ(n) = (n−1)!
//! assert_eq!(gamma(5.0), 24.0);
//!
//! // Reflection identity Γ(x)·Γ(1−x) = π / sin(πx)
//! let x = 0.3_f64;
//! let lhs = gamma(x) * gamma(1.0 - x) * (core::f64::consts::PI * x).sin();
//! assert!((lhs - core::f64::consts::PI).abs() < 1e-12);
//!
//! // Batches are a plain map over the scalar function
//! let ys: Vec<f64> = [1.0, 2.0, 3.0, 4.0].iter().map(|&x| gamma(x)).collect();
//! assert_eq!(ys, [1.0, 1.0, 2.0, 6.0]);
//! ```
//!
//! ## Modules
//!
//! - [`special`] — [`gamma`] and its components: the domain dispatcher,
//!   the reduction loop onto (2, 3), the rational approximation on that
//!   interval, Stirling's formula for |x| > 33, and the near-pole expansion.
//!
//! ## Special values
//!
//! | Input | Result |
//! |-------|--------|
//! | NaN, −∞, negative integer | NaN |
//! | +0 / −0 | +∞ / −∞ |
//! | x > 171.61447887182298 or x < −170.5674972726612 | +∞ |
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm |
//! | (none)    | baseline | Pure-Rust software float fallback via `libm` |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod special;

pub use special::gamma;
