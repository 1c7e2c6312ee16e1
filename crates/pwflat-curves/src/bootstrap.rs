//! Bootstrap calibrators.
//!
//! Each calibrator consumes the committed portion of the curve (as a
//! [`ForwardCurve`] view) plus one instrument, and produces the single
//! flat forward rate for the interval between the curve's last knot and
//! the instrument's maturity. Deposits and FRAs solve in closed form;
//! generic cash-flow streams fall back to Newton's method with the
//! analytic duration as the Jacobian.
//!
//! Calibrators never mutate: trial rates live on copies of the view made
//! with [`ForwardCurve::extrapolate`], and the caller (the
//! [`YieldCurve`](crate::yield_curve::YieldCurve) aggregate) commits the
//! result only on success.

use log::trace;
use num_traits::Float;

use pwflat_math::solvers::{newton_raphson, SolverConfig};

use crate::curve::ForwardCurve;
use crate::error::{CurveError, CurveResult};

/// Closed-form rate for a cash deposit paying `cashflow` at `maturity`.
///
/// The entire interval `(t_last, maturity]` is flat at the unknown rate,
/// so repricing `1 = cashflow * discount(maturity)` is linear in the
/// log-discount:
///
/// ```text
/// rate = ln(cashflow * discount(t_last)) / (maturity - t_last)
/// ```
///
/// with `t_last = 0` on an empty curve.
pub fn deposit_rate<T: Float>(curve: &ForwardCurve<'_, T>, maturity: T, cashflow: T) -> CurveResult<T> {
    if maturity <= T::zero() || cashflow <= T::zero() {
        return Err(CurveError::invalid_instrument(
            "deposit maturity and cashflow must be positive",
        ));
    }

    let t_last = curve.last_knot();
    let d0 = curve.discount(t_last);

    Ok((cashflow * d0).ln() / (maturity - t_last))
}

/// Closed-form rate for a forward rate agreement.
///
/// The legs pay `start_flow` at `start` and `end_flow` at `end` and net
/// to zero. With `d = -end_flow / start_flow`, solving
/// `start_flow * D(start) + end_flow * D(end) = 0` for the flat rate on
/// `(t_last, end]` gives:
///
/// - overlap (`start < t_last`): the discount at `start` is already fixed
///   by the calibrated curve, so
///   `rate = ln(d * discount(t_last) / discount(start)) / (end - t_last)`;
/// - underlap (`start >= t_last`): both legs sit inside the flat unknown
///   segment and the last-knot discount cancels, so
///   `rate = ln(d) / (end - start)`.
///
/// The two branches agree at `start == t_last`.
pub fn fra_rate<T: Float>(
    curve: &ForwardCurve<'_, T>,
    start: T,
    start_flow: T,
    end: T,
    end_flow: T,
) -> CurveResult<T> {
    if start_flow == T::zero() {
        return Err(CurveError::invalid_instrument(
            "FRA start flow must be nonzero",
        ));
    }
    if end <= start {
        return Err(CurveError::invalid_instrument("FRA end must be after start"));
    }

    let d = -(end_flow / start_flow);
    if d <= T::zero() {
        return Err(CurveError::invalid_instrument(
            "FRA legs must have opposite signs",
        ));
    }

    let t_last = curve.last_knot();
    let rate = if start < t_last {
        (d * curve.discount(t_last) / curve.discount(start)).ln() / (end - t_last)
    } else {
        d.ln() / (end - start)
    };

    Ok(rate)
}

/// Newton calibration for a generic cash-flow stream.
///
/// Flows at or before the curve's last knot are priced off the committed
/// curve once, contributing a constant `p0`. The remaining flows depend on
/// the unknown extrapolation rate, so the residual
///
/// ```text
/// pv(r) = -price + p0 + trial(r).present_value(tail)
/// ```
///
/// is driven to zero with `trial(r).duration(tail, t_last)` as the exact
/// Jacobian. The initial guess is the last committed rate when nonzero
/// (forward curves are usually near-continuous across knots), else 1%.
///
/// Solver failure, including a degenerate Jacobian, surfaces as
/// [`CurveError::CalibrationFailure`]; the committed curve is untouched.
pub fn flows_rate<T: Float>(
    curve: &ForwardCurve<'_, T>,
    times: &[T],
    amounts: &[T],
    price: T,
    config: &SolverConfig<T>,
) -> CurveResult<T> {
    let t_last = curve.last_knot();

    let maturity = times.last().copied().unwrap_or_else(T::zero);
    if times.is_empty() || maturity <= t_last {
        return Err(CurveError::invalid_instrument(
            "cash-flow stream must extend past the last knot",
        ));
    }

    // Flows already covered by the calibrated curve contribute a fixed
    // present value; only the tail is sensitive to the trial rate.
    let split = times.partition_point(|&u| u <= t_last);
    let p0 = curve.present_value(&times[..split], &amounts[..split]);
    let (tail_times, tail_amounts) = (&times[split..], &amounts[split..]);

    let pv = |r: T| p0 - price + curve.extrapolate(r).present_value(tail_times, tail_amounts);
    let dur = |r: T| curve.extrapolate(r).duration(tail_times, tail_amounts, t_last);

    let guess = match curve.rates().last() {
        Some(&f) if f != T::zero() => f,
        _ => T::from(0.01).unwrap(),
    };

    let solved = newton_raphson(pv, dur, guess, config)
        .map_err(|e| CurveError::from_solver(&e))?;

    trace!(
        "flows calibration: {} tail flows, rate {:.6} in {} iterations (residual {:.2e})",
        tail_times.len(),
        solved.root.to_f64().unwrap_or(f64::NAN),
        solved.iterations,
        solved.residual.to_f64().unwrap_or(f64::NAN),
    );

    Ok(solved.root)
}
