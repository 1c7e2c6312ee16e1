//! # pwflat-curves
//!
//! Piecewise-flat forward curve bootstrap from market instruments.
//!
//! This crate provides:
//!
//! - **Forward Curve View**: read-only evaluator over a stepwise-constant
//!   forward-rate term structure ([`ForwardCurve`])
//! - **Instruments**: tagged instrument model for calibration (deposits,
//!   forward rate agreements, generic cash-flow streams)
//! - **Bootstrap**: closed-form and Newton calibrators, one knot per
//!   instrument
//! - **Yield Curve**: the growing aggregate that owns the calibrated knots
//!   ([`YieldCurve`])
//!
//! ## Quick Start
//!
//! ```rust
//! use pwflat_curves::prelude::*;
//!
//! let mut curve: YieldCurve<f64> = YieldCurve::new();
//!
//! // 1Y deposit paying 1.05 per unit notional
//! curve.add_deposit(1.0, 1.05).unwrap();
//!
//! // 1Y-2Y forward rate agreement quoted at par
//! curve.add_fra(1.0, -1.0, 2.0, 1.06).unwrap();
//!
//! let forward = curve.forward();
//! let df = forward.discount(1.5);
//! assert!(df > 0.0 && df < 1.0);
//! ```
//!
//! ## Model
//!
//! A curve is a pair of parallel arrays `t[0..n)` (strictly increasing
//! maturities) and `f[0..n)` (flat forward rates), plus an extrapolation
//! rate beyond `t[n-1]`:
//!
//! ```text
//!        { f[0]   , 0 <= u <= t[0]
//! f(u) = { f[i]   , t[i-1] < u <= t[i]
//!        { extrap , u > t[n-1]
//! ```
//!
//! Note `f(t[i]) = f[i]`: the rate is attained exactly at a knot.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

pub mod bootstrap;
pub mod curve;
pub mod error;
pub mod instruments;
pub mod yield_curve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curve::ForwardCurve;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::instruments::{CashFlows, Deposit, ForwardRateAgreement, Instrument};
    pub use crate::yield_curve::YieldCurve;
    pub use pwflat_math::solvers::SolverConfig;
}

pub use curve::ForwardCurve;
pub use error::{CurveError, CurveResult};
pub use instruments::Instrument;
pub use yield_curve::YieldCurve;
