use range_curve::engine::{
    DEFAULT_SAMPLE_STEPS, ViewWindow, drag_point, interpolate, move_point, scale_curve,
};
use range_curve::model::preset;
use range_curve::model::{Curve, CurveBounds, CurvePoint, RangeOrder, Side};

// ── Helpers ─────────────────────────────────────────────────────────

fn curve(side: Side, knots: &[(f64, f64)]) -> Curve {
    Curve::new(
        side,
        knots.iter().map(|&(a, r)| CurvePoint::new(a, r)).collect(),
        CurveBounds::default(),
    )
}

fn balanced_lend() -> Curve {
    let preset = preset::find("balanced").expect("balanced preset");
    Curve::from_preset(Side::Lend, &preset, CurveBounds::default())
}

// ── Interpolation ───────────────────────────────────────────────────

#[test]
fn test_scenario_a_interpolation() {
    let curve = curve(
        Side::Lend,
        &[
            (0.0, 45.0),
            (900_000.0, 19.0),
            (3_400_000.0, 35.0),
            (3_900_000.0, 45.0),
        ],
    );
    assert_eq!(interpolate(&curve, 900_000.0), 19.0);
    assert_eq!(interpolate(&curve, 2_150_000.0), 27.0);
}

#[test]
fn test_balanced_preset_matches_scenario_a() {
    let curve = balanced_lend();
    assert_eq!(curve.len(), 4);
    assert_eq!(curve.rate_at(2_150_000.0), 27.0);
    // preset percentages are recomputed, not copied
    assert_eq!(curve.points[3].percentage, 100.0);
    assert_eq!(curve.points[1].percentage, 900_000.0 / 3_900_000.0 * 100.0);
}

#[test]
fn test_scenario_c_single_point_is_constant() {
    let curve = curve(Side::Borrow, &[(1_000_000.0, 10.0)]);
    for amount in [0.0, 1.0, 999_999.0, 1_000_000.0, 5_000_000.0] {
        assert_eq!(interpolate(&curve, amount), 10.0, "amount {amount}");
    }
}

#[test]
fn test_curve_from_json_is_usable() {
    let json = r#"{
        "side": "lend",
        "points": [
            {"amount": 0, "apr": 12},
            {"amount": 2000000, "apr": 20}
        ]
    }"#;
    let curve = Curve::from_json(json).unwrap();
    assert_eq!(curve.bounds, CurveBounds::default());
    assert_eq!(curve.points[1].percentage, 100.0);
    assert_eq!(curve.rate_at(1_000_000.0), 16.0);
}

#[test]
fn test_unsorted_json_curve_is_sorted_on_read() {
    let json = r#"{
        "side": "borrow",
        "points": [
            {"amount": 2000000, "apr": 20, "percentage": 7},
            {"amount": 0, "apr": 12}
        ]
    }"#;
    let curve = Curve::from_json(json).unwrap();
    let amounts: Vec<f64> = curve.points.iter().map(|p| p.amount).collect();
    assert_eq!(amounts, vec![0.0, 2_000_000.0]);
    assert_eq!(curve.points[1].percentage, 100.0);
    assert_eq!(interpolate(&curve, 1_000_000.0), 16.0);

    let sorted = Curve::new(
        Side::Borrow,
        vec![
            CurvePoint::new(0.0, 12.0),
            CurvePoint::new(2_000_000.0, 20.0),
        ],
        CurveBounds::default(),
    );
    assert_eq!(curve, sorted);
}

// ── Editing ─────────────────────────────────────────────────────────

#[test]
fn test_drag_session_keeps_curve_drawable() {
    let mut curve = balanced_lend();
    // a pointer dragging knot 2 far left, far down, then far right and up
    for (da, dr) in [(-4_000_000.0, -50.0), (500_000.0, 5.0), (9_000_000.0, 90.0)] {
        curve = drag_point(&curve, 2, da, dr);
    }
    let amounts: Vec<f64> = curve.points.iter().map(|p| p.amount).collect();
    assert_eq!(amounts, vec![0.0, 900_000.0, 3_899_000.0, 3_900_000.0]);
    assert_eq!(curve.points[2].apr, 70.0);
    assert!(curve.points.windows(2).all(|w| w[1].amount - w[0].amount >= 1_000.0));
}

#[test]
fn test_moving_last_point_rescales_percentages() {
    let curve = balanced_lend();
    let moved = move_point(&curve, 3, Some(7_800_000.0), None);
    assert_eq!(moved.points[3].percentage, 100.0);
    assert_eq!(moved.points[2].percentage, 3_400_000.0 / 7_800_000.0 * 100.0);
    // the original is untouched
    assert_eq!(curve.points[3].amount, 3_900_000.0);
}

#[test]
fn test_leveraged_curve() {
    let base = balanced_lend();
    let leveraged = scale_curve(&base, 1.5);
    for (b, l) in base.points.iter().zip(&leveraged.points) {
        assert_eq!(l.amount, b.amount);
        assert_eq!(l.apr, b.apr * 1.5);
    }
    assert_eq!(interpolate(&leveraged, 2_150_000.0), 40.5);
}

#[test]
fn test_two_way_order_rates() {
    let order = RangeOrder {
        id: "two_way".into(),
        market: "USDC".into(),
        lend: Some(curve(Side::Lend, &[(0.0, 4.0), (1_000_000.0, 8.0)])),
        borrow: Some(curve(Side::Borrow, &[(0.0, 9.0), (1_000_000.0, 13.0)])),
    };
    assert_eq!(order.rate_at(Side::Lend, 250_000.0), Some(5.0));
    assert_eq!(order.rate_at(Side::Borrow, 250_000.0), Some(10.0));
    let lev = order.leveraged(2.0);
    assert_eq!(lev.rate_at(Side::Lend, 250_000.0), Some(10.0));
}

// ── Zoom / sampling ─────────────────────────────────────────────────

#[test]
fn test_sampling_window() {
    let curve = balanced_lend();
    let window = ViewWindow::new(2.0);
    assert_eq!(window.domain_max(&curve), 7_800_000.0);

    let samples = window.sample(&curve, DEFAULT_SAMPLE_STEPS);
    assert_eq!(samples.len(), DEFAULT_SAMPLE_STEPS + 1);
    assert_eq!(samples[0].amount, 0.0);
    assert_eq!(samples[DEFAULT_SAMPLE_STEPS].amount, 7_800_000.0);
    // everything past the last knot is flat
    assert!(samples[51..].iter().all(|s| s.apr == 45.0));
}
