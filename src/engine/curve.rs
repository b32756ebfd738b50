use tracing::debug;

use crate::model::curve::Curve;

// ── Interpolation ────────────────────────────────────────────────────

/// APR at `amount` on a piecewise-linear curve.
///
/// Amounts outside the curve's range take the nearest boundary knot's APR
/// (flat extrapolation). A single-knot curve is constant. An empty curve
/// yields 0.
pub fn interpolate(curve: &Curve, amount: f64) -> f64 {
    let points = &curve.points;
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return 0.0;
    };

    if amount <= first.amount {
        return first.apr;
    }
    if amount >= last.amount {
        return last.apr;
    }

    // first.amount < amount < last.amount, so 1 <= idx <= len - 1 on a sorted
    // curve; the clamp keeps an unvalidated one from indexing out of bounds
    let idx = points
        .partition_point(|p| p.amount < amount)
        .clamp(1, points.len() - 1);
    let hi = &points[idx];
    if hi.amount == amount {
        return hi.apr;
    }
    let lo = &points[idx - 1];
    let span = hi.amount - lo.amount;
    if span <= 0.0 {
        return lo.apr;
    }
    lo.apr + (amount - lo.amount) / span * (hi.apr - lo.apr)
}

// ── Point editing ────────────────────────────────────────────────────

/// Move the knot at `index` to a new amount and/or APR.
///
/// The amount is clamped to keep at least `bounds.min_gap` from each
/// neighbour (and to stay non-negative), the APR to
/// `[bounds.min_apr, bounds.max_apr]`. Percentages are re-derived
/// afterwards. An out-of-range `index` returns the curve unchanged.
pub fn move_point(
    curve: &Curve,
    index: usize,
    new_amount: Option<f64>,
    new_apr: Option<f64>,
) -> Curve {
    let mut next = curve.clone();
    if index >= next.points.len() {
        debug!(index, len = next.points.len(), "move_point: index out of range");
        return next;
    }

    if let Some(amount) = new_amount.filter(|a| a.is_finite()) {
        next.points[index].amount = clamp_amount(curve, index, amount);
    }
    if let Some(apr) = new_apr.filter(|a| a.is_finite()) {
        let clamped = curve.bounds.clamp_apr(apr);
        if clamped != apr {
            debug!(index, apr, clamped, "move_point: apr clamped to domain");
        }
        next.points[index].apr = clamped;
    }

    next.recompute_percentages();
    next
}

/// Move the knot at `index` by a pointer delta, with the same clamping as
/// [`move_point`].
pub fn drag_point(curve: &Curve, index: usize, delta_amount: f64, delta_apr: f64) -> Curve {
    let Some(point) = curve.points.get(index) else {
        debug!(index, "drag_point: index out of range");
        return curve.clone();
    };
    move_point(
        curve,
        index,
        Some(point.amount + delta_amount),
        Some(point.apr + delta_apr),
    )
}

/// Clamp a proposed amount for knot `index` between its neighbours.
fn clamp_amount(curve: &Curve, index: usize, amount: f64) -> f64 {
    let gap = curve.bounds.min_gap.max(0.0);
    let points = &curve.points;

    let lower = match index.checked_sub(1) {
        Some(prev) => points[prev].amount + gap,
        None => 0.0,
    };
    let upper = points
        .get(index + 1)
        .map(|next| next.amount - gap)
        .unwrap_or(f64::INFINITY);

    if lower > upper {
        // Neighbours already closer than the gap allows; leave the knot where it is.
        debug!(index, lower, upper, "move_point: no room between neighbours");
        return points[index].amount;
    }

    let clamped = amount.max(lower).min(upper);
    if clamped != amount {
        debug!(index, amount, clamped, "move_point: amount clamped to neighbours");
    }
    clamped
}

// ── Derived curves ───────────────────────────────────────────────────

/// Multiply every knot's APR by `factor`. Amounts and percentages are untouched.
pub fn scale_curve(curve: &Curve, factor: f64) -> Curve {
    let mut next = curve.clone();
    for p in &mut next.points {
        p.apr *= factor;
    }
    next
}
