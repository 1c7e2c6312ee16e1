//! Root-finding algorithms.
//!
//! The bootstrap engine needs exactly one solver: an unguarded local
//! Newton-Raphson iteration with an analytic derivative supplied by the
//! caller. There is no bracketing, no damping, and no multiple-root
//! disambiguation; callers are expected to provide a good starting guess.
//!
//! Convergence is judged relative to the working precision via the
//! "one-plus" test (`1 + f(x) == 1`), so the same code behaves sensibly
//! at both `f32` and `f64`.

mod newton;

pub use newton::newton_raphson;

use num_traits::Float;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (`f32` or `f64`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance on the residual `|f(x)|`.
    ///
    /// The default is `100 * T::epsilon()`, which scales with the working
    /// precision (about 2.2e-14 for `f64`, 1.2e-5 for `f32`).
    pub tolerance: T,
    /// Maximum number of iterations before giving up.
    pub max_iterations: u32,
}

impl<T: Float> Default for SolverConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: T::from(100).unwrap() * T::epsilon(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Creates a new solver configuration.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance` is not positive or `max_iterations` is zero.
    #[must_use]
    pub fn new(tolerance: T, max_iterations: u32) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a successful root-finding run.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult<T> {
    /// The converged root.
    pub root: T,
    /// Number of iterations used.
    pub iterations: u32,
    /// Residual `f(root)` at exit.
    pub residual: T,
}
