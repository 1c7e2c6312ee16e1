//! Integration test: bootstrap a money-market curve from mixed instruments.
//!
//! Builds a curve from deposits, an FRA, par coupon streams and a priced
//! zero coupon, then verifies that every instrument reprices exactly on
//! the final committed curve and that the curve invariants hold.
//!
//! | Maturity | Instrument         | Quote              |
//! |----------|--------------------|--------------------|
//! | 3M       | Deposit            | 4.8% simple        |
//! | 6M       | Deposit            | 5.0% simple        |
//! | 1Y       | Deposit            | 5.2% simple        |
//! | 2Y       | 1Yx2Y FRA          | 5.5% simple        |
//! | 3Y       | Par coupon stream  | 5.4% annual        |
//! | 5Y       | Par coupon stream  | 5.6% annual        |
//! | 7Y       | Zero coupon        | price 0.70         |

use approx::assert_relative_eq;
use pwflat_curves::prelude::*;

fn build_market_curve() -> YieldCurve<f64> {
    let mut yc: YieldCurve<f64> = YieldCurve::new();

    // Short end: simple-interest deposits
    yc.add_deposit(0.25, 1.0 + 0.048 * 0.25).unwrap();
    yc.add_deposit(0.5, 1.0 + 0.050 * 0.5).unwrap();
    yc.add_deposit(1.0, 1.0 + 0.052).unwrap();

    // 1Y-2Y forward rate agreement at 5.5%
    yc.add_fra(1.0, -1.0, 2.0, 1.055).unwrap();

    // Par coupon streams (annual coupons, unit notional at time 0)
    yc.add_flows(
        vec![0.0, 1.0, 2.0, 3.0],
        vec![-1.0, 0.054, 0.054, 1.054],
        0.0,
    )
    .unwrap();
    yc.add_flows(
        vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        vec![-1.0, 0.056, 0.056, 0.056, 0.056, 1.056],
        0.0,
    )
    .unwrap();

    // 7Y zero coupon bought at 0.70
    yc.add_flows(vec![7.0], vec![1.0], 0.70).unwrap();

    yc
}

#[test]
fn test_curve_grows_one_knot_per_instrument() {
    let yc = build_market_curve();
    assert_eq!(yc.len(), 7);
    assert_eq!(yc.knots(), &[0.25, 0.5, 1.0, 2.0, 3.0, 5.0, 7.0]);
    assert!(yc.knots().windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_every_instrument_reprices() {
    let yc = build_market_curve();
    let curve = yc.forward();

    // Deposits: 1 unit at t=0 grows to the quoted payoff at maturity.
    for (u, c) in [
        (0.25, 1.0 + 0.048 * 0.25),
        (0.5, 1.0 + 0.050 * 0.5),
        (1.0, 1.052),
    ] {
        assert_relative_eq!(c * curve.discount(u), 1.0, epsilon = 1e-12);
    }

    // FRA nets to zero.
    let fra_pv = curve.present_value(&[1.0, 2.0], &[-1.0, 1.055]);
    assert_relative_eq!(fra_pv, 0.0, epsilon = 1e-12);

    // Par streams net to zero.
    let pv_3y = curve.present_value(
        &[0.0, 1.0, 2.0, 3.0],
        &[-1.0, 0.054, 0.054, 1.054],
    );
    assert_relative_eq!(pv_3y, 0.0, epsilon = 1e-9);

    let pv_5y = curve.present_value(
        &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        &[-1.0, 0.056, 0.056, 0.056, 0.056, 1.056],
    );
    assert_relative_eq!(pv_5y, 0.0, epsilon = 1e-9);

    // Priced zero coupon hits its target.
    assert_relative_eq!(curve.discount(7.0), 0.70, epsilon = 1e-9);
}

#[test]
fn test_curve_invariants() {
    let yc = build_market_curve();
    let curve = yc.forward();

    // Knot attainment
    for (t, f) in yc.knots().iter().zip(yc.rates()) {
        assert_eq!(curve.forward(*t), *f);
    }

    // Discount at zero and positivity
    assert_eq!(curve.discount(0.0), 1.0);
    let mut prev_df = 1.0;
    for &t in yc.knots() {
        let df = curve.discount(t);
        assert!(df > 0.0 && df < prev_df, "discount must decrease at {}", t);
        prev_df = df;
    }

    // Integral continuity across each knot
    for &t in yc.knots() {
        let e = 1e-10;
        assert_relative_eq!(curve.integral(t - e), curve.integral(t), epsilon = 1e-8);
        assert_relative_eq!(curve.integral(t + e), curve.integral(t), epsilon = 1e-8);
    }

    // Spot equals integral / time away from zero
    for &t in yc.knots() {
        assert_relative_eq!(curve.spot(t), curve.integral(t) / t, epsilon = 1e-14);
    }
}

#[test]
fn test_snapshot_reflects_only_committed_knots() {
    let mut yc = build_market_curve();
    let before = yc.knots().to_vec();

    // A rejected add must not disturb outstanding state.
    assert!(yc.add_deposit(6.0, 1.3).is_err());
    assert_eq!(yc.knots(), before.as_slice());

    // A successful add extends the snapshot by exactly one knot.
    yc.add_deposit(10.0, 1.7).unwrap();
    assert_eq!(yc.len(), before.len() + 1);
    assert_relative_eq!(1.7 * yc.forward().discount(10.0), 1.0, epsilon = 1e-12);
}

#[test]
fn test_retry_after_failed_quote() {
    // A bad quote fails loudly; a corrected quote then succeeds. Retry
    // policy is the caller's, and the curve must stay usable throughout.
    let mut yc: YieldCurve<f64> = YieldCurve::new();
    yc.add_deposit(1.0, 1.05).unwrap();

    let bad = yc.add_flows(vec![2.0], vec![0.0], 1.0);
    assert!(matches!(bad, Err(CurveError::CalibrationFailure { .. })));
    assert_eq!(yc.len(), 1);

    yc.add_flows(vec![2.0], vec![1.0], 0.90).unwrap();
    assert_eq!(yc.len(), 2);
    assert_relative_eq!(yc.forward().discount(2.0), 0.90, epsilon = 1e-9);
}
