//! # pwflat-math
//!
//! Numerical kernel for the pwflat curve bootstrap library.
//!
//! This crate provides:
//!
//! - **Solvers**: scalar root finding (Newton-Raphson)
//! - **Configuration**: precision-adaptive convergence settings
//!
//! ## Design Philosophy
//!
//! - **Numerical Stability**: convergence tests are relative to the working
//!   precision, never absolute
//! - **Generic**: every routine works with `f32` and `f64` through
//!   [`num_traits::Float`]
//! - **No sentinels**: failures are typed errors, never quiet NaN

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{newton_raphson, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
