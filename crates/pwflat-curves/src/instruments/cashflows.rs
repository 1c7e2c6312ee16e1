//! Generic cash-flow stream instrument.

use num_traits::Float;

use crate::error::{CurveError, CurveResult};

/// An arbitrary-length cash-flow stream with a target price.
///
/// Payment times must be strictly increasing; amounts are signed. The
/// default target price is zero, meaning the instrument is quoted at par.
/// Calibration finds the flat rate beyond the curve's last knot that makes
/// the stream's present value equal the target price, via Newton's method.
///
/// # Example
///
/// ```rust
/// use pwflat_curves::instruments::CashFlows;
///
/// // 4Y par bond paying 4% annually, bought for 1 at time 0
/// let bond = CashFlows::new(
///     vec![0.0, 1.0, 2.0, 3.0, 4.0],
///     vec![-1.0, 0.04, 0.04, 0.04, 1.04],
/// );
/// assert_eq!(bond.price(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlows<T> {
    /// Payment times, strictly increasing.
    times: Vec<T>,
    /// Signed amounts, parallel to `times`.
    amounts: Vec<T>,
    /// Target present value.
    price: T,
}

impl<T: Float> CashFlows<T> {
    /// Creates a par-quoted stream (target price zero).
    #[must_use]
    pub fn new(times: Vec<T>, amounts: Vec<T>) -> Self {
        Self {
            times,
            amounts,
            price: T::zero(),
        }
    }

    /// Sets the target price.
    #[must_use]
    pub fn with_price(mut self, price: T) -> Self {
        self.price = price;
        self
    }

    /// Payment times.
    #[must_use]
    pub fn times(&self) -> &[T] {
        &self.times
    }

    /// Signed cash amounts.
    #[must_use]
    pub fn amounts(&self) -> &[T] {
        &self.amounts
    }

    /// Target present value.
    #[must_use]
    pub fn price(&self) -> T {
        self.price
    }

    /// The final payment time.
    ///
    /// Zero for an empty stream; `validate` rejects those before any
    /// calibrator sees them.
    #[must_use]
    pub fn maturity(&self) -> T {
        self.times.last().copied().unwrap_or_else(T::zero)
    }

    /// Checks non-emptiness, parallel lengths, strict time ordering and
    /// finiteness.
    pub fn validate(&self) -> CurveResult<()> {
        if self.times.is_empty() {
            return Err(CurveError::invalid_instrument(
                "cash-flow stream must have at least one flow",
            ));
        }
        if self.times.len() != self.amounts.len() {
            return Err(CurveError::length_mismatch(
                self.times.len(),
                self.amounts.len(),
            ));
        }
        let finite = self.times.iter().all(|t| t.is_finite())
            && self.amounts.iter().all(|c| c.is_finite())
            && self.price.is_finite();
        if !finite {
            return Err(CurveError::invalid_value("cash flows must be finite"));
        }
        if self.times[0] < T::zero() {
            return Err(CurveError::invalid_instrument(
                "payment times must be non-negative",
            ));
        }
        for (i, pair) in self.times.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                return Err(CurveError::non_monotonic_knots(
                    i + 1,
                    pair[0].to_f64().unwrap_or(f64::NAN),
                    pair[1].to_f64().unwrap_or(f64::NAN),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_stream() {
        let flows = CashFlows::new(vec![0.0, 1.0, 2.0], vec![-1.0, 0.05, 1.05]);
        assert!(flows.validate().is_ok());
        assert_eq!(flows.maturity(), 2.0);
    }

    #[test]
    fn test_with_price() {
        let flows = CashFlows::new(vec![1.0], vec![1.0]).with_price(0.95);
        assert_eq!(flows.price(), 0.95);
        assert!(flows.validate().is_ok());
    }

    #[test]
    fn test_empty_rejected() {
        let flows: CashFlows<f64> = CashFlows::new(vec![], vec![]);
        assert!(flows.validate().is_err());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let flows = CashFlows::new(vec![1.0, 2.0], vec![1.0]);
        assert!(matches!(
            flows.validate(),
            Err(CurveError::LengthMismatch {
                times: 2,
                amounts: 1
            })
        ));
    }

    #[test]
    fn test_unordered_times_rejected() {
        let flows = CashFlows::new(vec![1.0, 1.0], vec![-1.0, 1.05]);
        assert!(flows.validate().is_err());
        let flows = CashFlows::new(vec![2.0, 1.0], vec![-1.0, 1.05]);
        assert!(flows.validate().is_err());
    }

    #[test]
    fn test_negative_time_rejected() {
        let flows = CashFlows::new(vec![-0.5, 1.0], vec![-1.0, 1.05]);
        assert!(flows.validate().is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let flows = CashFlows::new(vec![1.0], vec![f64::NAN]);
        assert!(flows.validate().is_err());
    }
}
