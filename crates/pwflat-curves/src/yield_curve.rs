//! Bootstrapped piecewise-flat yield curve.
//!
//! [`YieldCurve`] owns the growing knot/rate arrays. Instruments are added
//! one at a time in increasing maturity order; each successful `add`
//! appends exactly one knot, calibrated so the instrument reprices to its
//! target on the extended curve. Failed adds never mutate the curve.

use log::debug;
use num_traits::Float;

use pwflat_math::solvers::SolverConfig;

use crate::bootstrap::{deposit_rate, flows_rate, fra_rate};
use crate::curve::ForwardCurve;
use crate::error::{CurveError, CurveResult};
use crate::instruments::{CashFlows, Deposit, ForwardRateAgreement, Instrument};

/// A bootstrapped piecewise-flat yield curve.
///
/// # Example
///
/// ```rust
/// use pwflat_curves::prelude::*;
///
/// let mut curve: YieldCurve<f64> = YieldCurve::new();
/// curve.add_deposit(1.0, 1.05).unwrap();
/// curve.add_fra(1.0, -1.0, 2.0, 1.06).unwrap();
///
/// assert_eq!(curve.len(), 2);
/// assert!((curve.forward().forward(0.5) - 1.05_f64.ln()).abs() < 1e-12);
/// ```
///
/// The aggregate is a single mutable owner; serialize `add` calls if an
/// embedding system calibrates concurrently. Snapshots returned by
/// [`forward`](Self::forward) stay valid for as long as they borrow the
/// curve and reflect only committed knots.
#[derive(Debug, Clone)]
pub struct YieldCurve<T: Float> {
    /// Knot maturities, strictly increasing.
    times: Vec<T>,
    /// Calibrated flat forward rates, parallel to `times`.
    rates: Vec<T>,
    /// Solver settings for the generic cash-flow calibrator.
    solver: SolverConfig<T>,
}

impl<T: Float> Default for YieldCurve<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> YieldCurve<T> {
    /// Creates an empty curve.
    #[must_use]
    pub fn new() -> Self {
        Self {
            times: Vec::new(),
            rates: Vec::new(),
            solver: SolverConfig::default(),
        }
    }

    /// Seeds a curve from parallel maturity/rate arrays.
    ///
    /// # Errors
    ///
    /// Rejects mismatched lengths, non-increasing or non-positive
    /// maturities, and non-finite rates.
    pub fn from_points(times: Vec<T>, rates: Vec<T>) -> CurveResult<Self> {
        if times.len() != rates.len() {
            return Err(CurveError::length_mismatch(times.len(), rates.len()));
        }
        if let Some(first) = times.first() {
            if *first <= T::zero() {
                return Err(CurveError::invalid_value("knot times must be positive"));
            }
        }
        for (i, pair) in times.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                return Err(CurveError::non_monotonic_knots(
                    i + 1,
                    pair[0].to_f64().unwrap_or(f64::NAN),
                    pair[1].to_f64().unwrap_or(f64::NAN),
                ));
            }
        }
        if !(times.iter().all(|t| t.is_finite()) && rates.iter().all(|f| f.is_finite())) {
            return Err(CurveError::invalid_value(
                "knot times and rates must be finite",
            ));
        }

        Ok(Self {
            times,
            rates,
            solver: SolverConfig::default(),
        })
    }

    /// Sets the solver configuration used for cash-flow calibration.
    #[must_use]
    pub fn with_solver_config(mut self, solver: SolverConfig<T>) -> Self {
        self.solver = solver;
        self
    }

    /// Number of calibrated knots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns true if no instrument has been calibrated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Knot maturities.
    #[must_use]
    pub fn knots(&self) -> &[T] {
        &self.times
    }

    /// Calibrated flat forward rates.
    #[must_use]
    pub fn rates(&self) -> &[T] {
        &self.rates
    }

    /// The committed forward-curve snapshot.
    ///
    /// The snapshot borrows the committed arrays and carries a zero
    /// extrapolation rate; override with
    /// [`ForwardCurve::extrapolate`] to evaluate past the last knot.
    /// Trial rates used during calibration never show up here.
    #[must_use]
    pub fn forward(&self) -> ForwardCurve<'_, T> {
        ForwardCurve::new(&self.times, &self.rates, T::zero())
    }

    /// Adds an instrument, calibrating one new knot.
    ///
    /// Returns the newly calibrated forward rate. On any error the curve
    /// is left exactly as it was.
    pub fn add(&mut self, instrument: &Instrument<T>) -> CurveResult<T> {
        instrument.validate()?;

        let maturity = instrument.maturity();
        if let Some(&last) = self.times.last() {
            if maturity <= last {
                return Err(CurveError::maturity_not_extending(
                    maturity.to_f64().unwrap_or(f64::NAN),
                    last.to_f64().unwrap_or(f64::NAN),
                ));
            }
        }

        let rate = {
            let forward = self.forward();
            match instrument {
                Instrument::Deposit(dep) => {
                    deposit_rate(&forward, dep.maturity(), dep.cashflow())?
                }
                Instrument::Fra(fra) => fra_rate(
                    &forward,
                    fra.start(),
                    fra.start_flow(),
                    fra.end(),
                    fra.end_flow(),
                )?,
                Instrument::Flows(flows) => flows_rate(
                    &forward,
                    flows.times(),
                    flows.amounts(),
                    flows.price(),
                    &self.solver,
                )?,
            }
        };

        if !rate.is_finite() {
            return Err(CurveError::calibration_failed(
                0,
                rate.to_f64().unwrap_or(f64::NAN),
                "calibrated rate is not finite",
            ));
        }

        self.times.push(maturity);
        self.rates.push(rate);

        debug!(
            "knot {} committed: t = {:.4}, f = {:.6}",
            self.times.len(),
            maturity.to_f64().unwrap_or(f64::NAN),
            rate.to_f64().unwrap_or(f64::NAN),
        );

        Ok(rate)
    }

    /// Adds a cash deposit paying `cashflow` at `maturity`.
    pub fn add_deposit(&mut self, maturity: T, cashflow: T) -> CurveResult<T> {
        self.add(&Instrument::Deposit(Deposit::new(maturity, cashflow)))
    }

    /// Adds a forward rate agreement from its two legs.
    pub fn add_fra(&mut self, start: T, start_flow: T, end: T, end_flow: T) -> CurveResult<T> {
        self.add(&Instrument::Fra(ForwardRateAgreement::new(
            start, start_flow, end, end_flow,
        )))
    }

    /// Adds a generic cash-flow stream with a target price.
    ///
    /// Pass a zero `price` for par-quoted instruments.
    pub fn add_flows(&mut self, times: Vec<T>, amounts: Vec<T>, price: T) -> CurveResult<T> {
        self.add(&Instrument::Flows(
            CashFlows::new(times, amounts).with_price(price),
        ))
    }
}
