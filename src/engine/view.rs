use serde::{Deserialize, Serialize};

use super::curve::interpolate;
use crate::model::curve::Curve;

/// Smallest zoom level an editor may use.
pub const MIN_ZOOM: f64 = 0.5;

/// Number of segments the editors draw a curve with.
pub const DEFAULT_SAMPLE_STEPS: usize = 100;

/// One `(amount, apr)` sample of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub amount: f64,
    pub apr: f64,
}

/// Display window over a curve's amount axis.
///
/// The visible domain is `[0, last_amount * zoom_level]`. Zoom is held by the
/// caller and is not part of the curve itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    zoom_level: f64,
}

impl Default for ViewWindow {
    fn default() -> Self {
        Self { zoom_level: 1.0 }
    }
}

impl ViewWindow {
    pub fn new(zoom_level: f64) -> Self {
        let zoom_level = if zoom_level.is_finite() {
            zoom_level.max(MIN_ZOOM)
        } else {
            1.0
        };
        Self { zoom_level }
    }

    pub fn zoom_level(&self) -> f64 {
        self.zoom_level
    }

    /// New window with the zoom multiplied by `factor`.
    pub fn zoom_by(&self, factor: f64) -> Self {
        Self::new(self.zoom_level * factor)
    }

    /// Right edge of the visible domain.
    pub fn domain_max(&self, curve: &Curve) -> f64 {
        curve.points.last().map(|p| p.amount).unwrap_or(0.0) * self.zoom_level
    }

    /// `steps + 1` evenly spaced samples across `[0, domain_max]`.
    pub fn sample(&self, curve: &Curve, steps: usize) -> Vec<Sample> {
        let steps = steps.max(1);
        let max = self.domain_max(curve);
        (0..=steps)
            .map(|i| {
                let amount = max * i as f64 / steps as f64;
                Sample {
                    amount,
                    apr: interpolate(curve, amount),
                }
            })
            .collect()
    }
}
