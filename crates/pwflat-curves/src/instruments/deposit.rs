//! Cash deposit instrument.

use num_traits::Float;

use crate::error::{CurveError, CurveResult};

/// A unit-notional cash deposit.
///
/// One unit invested now returns `cashflow` at `maturity`. This is the
/// simplest instrument for the short end of the curve and calibrates in
/// closed form: the relationship between the unknown flat rate and the
/// log-discount is linear.
///
/// # Example
///
/// ```rust
/// use pwflat_curves::instruments::Deposit;
///
/// // 1Y deposit paying 5% simple interest
/// let deposit = Deposit::new(1.0, 1.05);
/// assert_eq!(deposit.maturity(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deposit<T> {
    /// Payment time in years.
    maturity: T,
    /// Amount returned per unit notional.
    cashflow: T,
}

impl<T: Float> Deposit<T> {
    /// Creates a new deposit paying `cashflow` at `maturity`.
    #[must_use]
    pub fn new(maturity: T, cashflow: T) -> Self {
        Self { maturity, cashflow }
    }

    /// Payment time.
    #[must_use]
    pub fn maturity(&self) -> T {
        self.maturity
    }

    /// Amount paid at maturity per unit notional.
    #[must_use]
    pub fn cashflow(&self) -> T {
        self.cashflow
    }

    /// Checks `maturity > 0`, `cashflow > 0` and finiteness.
    pub fn validate(&self) -> CurveResult<()> {
        if !(self.maturity.is_finite() && self.cashflow.is_finite()) {
            return Err(CurveError::invalid_value("deposit fields must be finite"));
        }
        if self.maturity <= T::zero() {
            return Err(CurveError::invalid_instrument(
                "deposit maturity must be positive",
            ));
        }
        if self.cashflow <= T::zero() {
            return Err(CurveError::invalid_instrument(
                "deposit cashflow must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_deposit() {
        assert!(Deposit::new(0.25, 1.0125).validate().is_ok());
    }

    #[test]
    fn test_non_positive_maturity_rejected() {
        assert!(Deposit::new(0.0, 1.05).validate().is_err());
        assert!(Deposit::new(-1.0, 1.05).validate().is_err());
    }

    #[test]
    fn test_non_positive_cashflow_rejected() {
        assert!(Deposit::new(1.0, 0.0).validate().is_err());
        assert!(Deposit::new(1.0, -1.05).validate().is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Deposit::new(f64::NAN, 1.05).validate().is_err());
        assert!(Deposit::new(1.0, f64::INFINITY).validate().is_err());
    }
}
