//! Calibration instruments.
//!
//! Each instrument pins down exactly one new knot of the curve. The three
//! recognized shapes each get a dedicated calibration path:
//!
//! - [`Deposit`]: single time/amount pair, closed form
//! - [`ForwardRateAgreement`]: two flows netting to zero, closed form
//! - [`CashFlows`]: arbitrary flow vector with a target price, Newton
//!
//! Dispatch is by the explicit [`Instrument`] tag, never by inspecting the
//! shape of raw arrays: a two-flow [`CashFlows`] quoted at par goes down
//! the general Newton path, and only [`Instrument::Fra`] gets the FRA
//! closed form.

mod cashflows;
mod deposit;
mod fra;

pub use cashflows::CashFlows;
pub use deposit::Deposit;
pub use fra::ForwardRateAgreement;

use num_traits::Float;

use crate::error::CurveResult;

/// A calibration instrument, tagged by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Instrument<T> {
    /// Single cash deposit.
    Deposit(Deposit<T>),
    /// Two-flow forward rate agreement quoted at par.
    Fra(ForwardRateAgreement<T>),
    /// Generic cash-flow stream with a target price.
    Flows(CashFlows<T>),
}

impl<T: Float> Instrument<T> {
    /// The final payment time, which becomes the new knot on success.
    #[must_use]
    pub fn maturity(&self) -> T {
        match self {
            Self::Deposit(dep) => dep.maturity(),
            Self::Fra(fra) => fra.end(),
            Self::Flows(flows) => flows.maturity(),
        }
    }

    /// Checks the instrument's shape preconditions.
    ///
    /// Rejected instruments never reach a calibrator, so a failed
    /// validation can never mutate a curve.
    pub fn validate(&self) -> CurveResult<()> {
        match self {
            Self::Deposit(dep) => dep.validate(),
            Self::Fra(fra) => fra.validate(),
            Self::Flows(flows) => flows.validate(),
        }
    }
}

impl<T> From<Deposit<T>> for Instrument<T> {
    fn from(dep: Deposit<T>) -> Self {
        Self::Deposit(dep)
    }
}

impl<T> From<ForwardRateAgreement<T>> for Instrument<T> {
    fn from(fra: ForwardRateAgreement<T>) -> Self {
        Self::Fra(fra)
    }
}

impl<T> From<CashFlows<T>> for Instrument<T> {
    fn from(flows: CashFlows<T>) -> Self {
        Self::Flows(flows)
    }
}
