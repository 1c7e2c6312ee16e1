//! Forward rate agreement instrument.

use num_traits::Float;

use crate::error::{CurveError, CurveResult};

/// A two-flow forward rate agreement quoted at par.
///
/// Pays `start_flow` at `start` and `end_flow` at `end`, with the two
/// legs netting to a zero price. The canonical quote is
/// `(-1, 1 + r * tau)`: borrow one unit at `start`, repay with interest
/// at `end`.
///
/// The legs must have opposite signs; the calibrator works with the ratio
/// `d = -end_flow / start_flow`, so `start_flow` must be nonzero and `d`
/// strictly positive.
///
/// # Example
///
/// ```rust
/// use pwflat_curves::instruments::ForwardRateAgreement;
///
/// // 1Y-2Y agreement locking roughly 6%
/// let fra = ForwardRateAgreement::new(1.0, -1.0, 2.0, 1.06);
/// assert_eq!(fra.end(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardRateAgreement<T> {
    /// First leg time.
    start: T,
    /// First leg amount.
    start_flow: T,
    /// Second leg time.
    end: T,
    /// Second leg amount.
    end_flow: T,
}

impl<T: Float> ForwardRateAgreement<T> {
    /// Creates a new agreement from its two legs.
    #[must_use]
    pub fn new(start: T, start_flow: T, end: T, end_flow: T) -> Self {
        Self {
            start,
            start_flow,
            end,
            end_flow,
        }
    }

    /// First leg time.
    #[must_use]
    pub fn start(&self) -> T {
        self.start
    }

    /// First leg amount.
    #[must_use]
    pub fn start_flow(&self) -> T {
        self.start_flow
    }

    /// Second leg time (the new knot on success).
    #[must_use]
    pub fn end(&self) -> T {
        self.end
    }

    /// Second leg amount.
    #[must_use]
    pub fn end_flow(&self) -> T {
        self.end_flow
    }

    /// The flow ratio `d = -end_flow / start_flow`.
    #[must_use]
    pub fn flow_ratio(&self) -> T {
        -(self.end_flow / self.start_flow)
    }

    /// Checks leg ordering, sign structure and finiteness.
    pub fn validate(&self) -> CurveResult<()> {
        let finite = self.start.is_finite()
            && self.start_flow.is_finite()
            && self.end.is_finite()
            && self.end_flow.is_finite();
        if !finite {
            return Err(CurveError::invalid_value("FRA fields must be finite"));
        }
        if self.start < T::zero() {
            return Err(CurveError::invalid_instrument(
                "FRA start must be non-negative",
            ));
        }
        if self.end <= self.start {
            return Err(CurveError::invalid_instrument(
                "FRA end must be after start",
            ));
        }
        if self.start_flow == T::zero() {
            return Err(CurveError::invalid_instrument(
                "FRA start flow must be nonzero",
            ));
        }
        if self.flow_ratio() <= T::zero() {
            return Err(CurveError::invalid_instrument(
                "FRA legs must have opposite signs",
            ));
        }
        Ok(())
    }
}
