use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::preset::StrategyPreset;

/// Which side of a market a curve prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Rate earned by supplying principal.
    Lend,
    /// Rate paid for drawing principal.
    Borrow,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Lend => write!(f, "lend"),
            Side::Borrow => write!(f, "borrow"),
        }
    }
}

/// One knot of a piecewise-linear rate curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CurvePoint {
    /// Cumulative principal at which this knot applies.
    pub amount: f64,
    /// Annualized rate in percent at `amount`.
    pub apr: f64,
    /// `amount` as a percent of the curve's largest amount. Derived; any
    /// value supplied in JSON is overwritten by [`Curve::from_json`] and
    /// [`Curve::new`].
    #[serde(default)]
    pub percentage: f64,
}

impl CurvePoint {
    pub fn new(amount: f64, apr: f64) -> Self {
        Self {
            amount,
            apr,
            percentage: 0.0,
        }
    }
}

/// Editing limits for a single curve.
///
/// Different editors use different separations between knots, so the limits
/// travel with the curve instead of living in global constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CurveBounds {
    /// Minimum distance between two neighbouring knots' amounts. Default: 1000.
    #[serde(default = "default_min_gap")]
    pub min_gap: f64,
    /// Lowest APR a knot may be dragged to. Default: 1.
    #[serde(default = "default_min_apr")]
    pub min_apr: f64,
    /// Highest APR a knot may be dragged to. Default: 70.
    #[serde(default = "default_max_apr")]
    pub max_apr: f64,
}

fn default_min_gap() -> f64 {
    1_000.0
}
fn default_min_apr() -> f64 {
    1.0
}
fn default_max_apr() -> f64 {
    70.0
}

impl Default for CurveBounds {
    fn default() -> Self {
        Self {
            min_gap: default_min_gap(),
            min_apr: default_min_apr(),
            max_apr: default_max_apr(),
        }
    }
}

impl CurveBounds {
    /// Bounds used by the coarse-grained range order editor (10k separation).
    pub fn wide_gap() -> Self {
        Self {
            min_gap: 10_000.0,
            ..Self::default()
        }
    }

    /// Clamp into `[min_apr, max_apr]`. Inverted bounds resolve to `max_apr`
    /// rather than panicking like `f64::clamp`.
    pub fn clamp_apr(&self, apr: f64) -> f64 {
        apr.max(self.min_apr).min(self.max_apr)
    }
}

/// A piecewise-linear map from cumulative amount to APR for one side of a market.
///
/// Points are kept sorted by ascending `amount`. Editing goes through
/// [`crate::engine::curve`], which returns new values instead of mutating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Curve {
    pub side: Side,
    pub points: Vec<CurvePoint>,
    #[serde(default)]
    pub bounds: CurveBounds,
}

impl Curve {
    /// Build a curve, sorting the knots and deriving their percentages.
    pub fn new(side: Side, mut points: Vec<CurvePoint>, bounds: CurveBounds) -> Self {
        points.sort_by(|a, b| a.amount.total_cmp(&b.amount));
        let mut curve = Self {
            side,
            points,
            bounds,
        };
        curve.recompute_percentages();
        curve
    }

    /// Parse a curve from JSON and normalize it like [`Curve::new`]: knots
    /// are sorted by amount and percentages re-derived, whatever order and
    /// values the caller sent.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let raw: Curve = serde_json::from_str(json)?;
        Ok(Self::new(raw.side, raw.points, raw.bounds))
    }

    /// Build a curve from a named preset. The preset's percentages are
    /// informational and get recomputed from the amounts.
    pub fn from_preset(side: Side, preset: &StrategyPreset, bounds: CurveBounds) -> Self {
        let points = preset
            .points
            .iter()
            .map(|p| CurvePoint::new(p.amount, p.apr))
            .collect();
        Self::new(side, points, bounds)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Largest amount on the curve, or 0 for an empty curve.
    pub fn max_amount(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.amount)
            .fold(0.0, f64::max)
    }

    /// Rate at `amount`. See [`crate::engine::curve::interpolate`].
    pub fn rate_at(&self, amount: f64) -> f64 {
        crate::engine::curve::interpolate(self, amount)
    }

    /// Re-derive every knot's `percentage` from the current largest amount.
    pub fn recompute_percentages(&mut self) {
        let max = self.max_amount();
        for p in &mut self.points {
            p.percentage = if max > 0.0 { p.amount / max * 100.0 } else { 0.0 };
        }
    }
}
