//! Newton-Raphson root-finding algorithm.

use log::debug;
use num_traits::Float;

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// This is an unguarded local method with quadratic convergence near a
/// root. The iteration stops when any of the following holds:
///
/// - the residual passes the relative one-plus test (`1 + f(x) == 1` in
///   the working precision) or falls below `config.tolerance`;
/// - the update reaches a floating-point fixed point (`x_{n+1} == x_n`);
/// - `config.max_iterations` is exhausted, which is an error.
///
/// A derivative that is numerically indistinguishable from zero
/// (`1 + f'(x) == 1`) is reported as [`MathError::DerivativeNearZero`]
/// rather than letting the step blow up.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use pwflat_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<T, F, DF>(
    f: F,
    df: DF,
    initial_guess: T,
    config: &SolverConfig<T>,
) -> MathResult<SolverResult<T>>
where
    T: Float,
    F: Fn(T) -> T,
    DF: Fn(T) -> T,
{
    if !initial_guess.is_finite() {
        return Err(MathError::invalid_input("initial guess is not finite"));
    }

    let one = T::one();
    let mut x = initial_guess;
    let mut fx = f(x);

    for iteration in 0..config.max_iterations {
        if one + fx.abs() == one || fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);
        if one + dfx.abs() == one {
            return Err(MathError::derivative_near_zero(
                dfx.to_f64().unwrap_or(f64::NAN),
            ));
        }

        let next = x - fx / dfx;
        if !next.is_finite() {
            return Err(MathError::invalid_input(
                "Newton step produced a non-finite iterate",
            ));
        }

        // Fixed point in the working precision: the iterate cannot improve.
        if next == x {
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: fx,
            });
        }

        x = next;
        fx = f(x);
    }

    let residual = fx.abs().to_f64().unwrap_or(f64::NAN);
    debug!(
        "newton-raphson exhausted {} iterations (residual {:.2e})",
        config.max_iterations, residual,
    );
    Err(MathError::convergence_failed(
        config.max_iterations,
        residual,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert!(result.iterations < 10);
    }

    #[test]
    fn test_log_root() {
        // exp(x) - 2 = 0 at ln(2), the shape bootstrap residuals take
        let f = |x: f64| x.exp() - 2.0;
        let df = |x: f64| x.exp();

        let result = newton_raphson(f, df, 0.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 2.0_f64.ln(), epsilon = 1e-10);
    }

    #[test]
    fn test_sqrt_2_f32() {
        let f = |x: f32| x * x - 2.0;
        let df = |x: f32| 2.0 * x;

        let result = newton_raphson(f, df, 1.5_f32, &SolverConfig::default()).unwrap();

        assert!((result.root - std::f32::consts::SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn test_cube_root() {
        let f = |x: f64| x * x * x - 7.0;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 2.0, &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, 7.0_f64.cbrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_derivative_error() {
        let f = |x: f64| x * x + 1.0; // no real root
        let df = |_x: f64| 0.0;

        let result = newton_raphson(f, df, 1.0, &SolverConfig::default());

        assert!(matches!(
            result,
            Err(MathError::DerivativeNearZero { .. })
        ));
    }

    #[test]
    fn test_max_iterations_error() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;
        // Impossible tolerance forces the iteration cap; the fixed-point
        // exit would normally rescue this, so divergent input is needed.
        let config = SolverConfig::new(1e-300, 3);

        let result = newton_raphson(f, df, 1e10, &config);

        assert!(matches!(
            result,
            Err(MathError::ConvergenceFailed { iterations: 3, .. })
        ));
    }

    #[test]
    fn test_non_finite_guess_rejected() {
        let f = |x: f64| x;
        let df = |_x: f64| 1.0;

        let result = newton_raphson(f, df, f64::NAN, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidInput { .. })));
    }

    #[test]
    fn test_immediate_convergence_at_root() {
        let f = |x: f64| x - 1.0;
        let df = |_x: f64| 1.0;

        let result = newton_raphson(f, df, 1.0, &SolverConfig::default()).unwrap();

        assert_eq!(result.iterations, 0);
        assert_eq!(result.root, 1.0);
    }

    proptest! {
        #[test]
        fn prop_square_root_converges(c in 0.25f64..4.0) {
            let f = |x: f64| x * x - c;
            let df = |x: f64| 2.0 * x;

            let result = newton_raphson(f, df, 1.0, &SolverConfig::default()).unwrap();
            prop_assert!((result.root - c.sqrt()).abs() < 1e-10);
        }
    }
}
