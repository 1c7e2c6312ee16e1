//! Read-only view over a piecewise-flat forward curve.
//!
//! A [`ForwardCurve`] borrows the knot and rate arrays of its owner (the
//! [`YieldCurve`](crate::yield_curve::YieldCurve) aggregate, usually) and
//! evaluates everything a pricer needs: instantaneous forward, cumulative
//! integral, discount factor, spot rate, present value and duration of
//! cash-flow vectors. It never mutates; calibration trials work on copies
//! produced by [`extrapolate`](ForwardCurve::extrapolate).

use num_traits::Float;

/// A piecewise-flat forward curve view.
///
/// The curve is stepwise constant with the rate attained exactly at each
/// knot:
///
/// ```text
///        { rates[0], 0 <= u <= times[0]
/// f(u) = { rates[i], times[i-1] < u <= times[i]
///        { extrap  , u > times[n-1]
/// ```
///
/// # Invariants
///
/// Borrowed from the owning aggregate, which guarantees that `times` and
/// `rates` have equal length, `times` is strictly increasing and positive,
/// and all rates are finite. Constructing a view over arrays that violate
/// these gives meaningless (but memory-safe) results.
///
/// The view is `Copy`; a calibration trial at a candidate rate is just
/// `view.extrapolate(rate)` and costs two pointer-size copies.
#[derive(Debug, Clone, Copy)]
pub struct ForwardCurve<'a, T> {
    times: &'a [T],
    rates: &'a [T],
    extrap: T,
}

impl<'a, T: Float> ForwardCurve<'a, T> {
    /// Creates a view over parallel knot/rate slices.
    ///
    /// `extrap` is the flat rate assumed beyond the last knot.
    #[must_use]
    pub fn new(times: &'a [T], rates: &'a [T], extrap: T) -> Self {
        debug_assert_eq!(times.len(), rates.len());
        debug_assert!(times.windows(2).all(|w| w[0] < w[1]));
        Self {
            times,
            rates,
            extrap,
        }
    }

    /// Creates an empty view: every query sees the flat rate `extrap`.
    #[must_use]
    pub fn flat(extrap: T) -> Self {
        Self {
            times: &[],
            rates: &[],
            extrap,
        }
    }

    /// Number of knots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns true if the view has no knots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Knot maturities.
    #[must_use]
    pub fn knots(&self) -> &'a [T] {
        self.times
    }

    /// Flat forward rates, parallel to [`knots`](Self::knots).
    #[must_use]
    pub fn rates(&self) -> &'a [T] {
        self.rates
    }

    /// The extrapolation rate applied beyond the last knot.
    #[must_use]
    pub fn extrap(&self) -> T {
        self.extrap
    }

    /// The last knot maturity, or zero for an empty view.
    #[must_use]
    pub fn last_knot(&self) -> T {
        self.times.last().copied().unwrap_or_else(T::zero)
    }

    /// Returns a copy of the view with a different extrapolation rate.
    ///
    /// This is the trial mechanism used during calibration: the committed
    /// arrays are shared, only the candidate rate changes.
    #[must_use]
    pub fn extrapolate(&self, extrap: T) -> Self {
        Self { extrap, ..*self }
    }

    /// Instantaneous forward rate at `u`.
    ///
    /// Binary search for the first knot `>= u`; beyond the last knot the
    /// extrapolation rate applies. `O(log n)`.
    #[must_use]
    pub fn forward(&self, u: T) -> T {
        let i = self.times.partition_point(|&t| t < u);
        if i == self.times.len() {
            self.extrap
        } else {
            self.rates[i]
        }
    }

    /// Cumulative integral of the forward rate over `[0, u]`.
    ///
    /// Piecewise-linear and continuous in `u` even though
    /// [`forward`](Self::forward) is a step function.
    #[must_use]
    pub fn integral(&self, u: T) -> T {
        let mut acc = T::zero();
        let mut t0 = T::zero();

        let mut i = 0;
        while i < self.times.len() && self.times[i] < u {
            acc = acc + self.rates[i] * (self.times[i] - t0);
            t0 = self.times[i];
            i += 1;
        }

        let rate = if i == self.times.len() {
            self.extrap
        } else {
            self.rates[i]
        };

        acc + rate * (u - t0)
    }

    /// Discount factor `exp(-integral(u))`.
    ///
    /// `discount(0) == 1` always.
    #[must_use]
    pub fn discount(&self, u: T) -> T {
        (-self.integral(u)).exp()
    }

    /// Continuously compounded spot rate `integral(u) / u`.
    ///
    /// At `u == 0` this is the limiting value `forward(0)`.
    #[must_use]
    pub fn spot(&self, u: T) -> T {
        if u == T::zero() {
            self.forward(u)
        } else {
            self.integral(u) / u
        }
    }

    /// Present value of a cash-flow vector.
    ///
    /// `times` and `amounts` are parallel arrays; excess entries in the
    /// longer one are ignored.
    #[must_use]
    pub fn present_value(&self, times: &[T], amounts: &[T]) -> T {
        times
            .iter()
            .zip(amounts)
            .fold(T::zero(), |pv, (&u, &c)| pv + c * self.discount(u))
    }

    /// Duration of a cash-flow vector with respect to a shift beyond `u0`.
    ///
    /// `-sum (times[i] - u0) * amounts[i] * discount(times[i])` over flows
    /// with `times[i] >= u0`. When every such flow lies beyond the last
    /// knot this is exactly the derivative of
    /// [`present_value`](Self::present_value) with respect to the
    /// extrapolation rate, which is what makes it the analytic Jacobian
    /// for calibration.
    #[must_use]
    pub fn duration(&self, times: &[T], amounts: &[T], u0: T) -> T {
        let start = times.partition_point(|&t| t < u0);
        times[start..]
            .iter()
            .zip(&amounts[start..])
            .fold(T::zero(), |dur, (&u, &c)| {
                dur - (u - u0) * c * self.discount(u)
            })
    }
}
