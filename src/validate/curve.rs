use crate::model::Curve;

use super::ValidationError;

/// Check a curve against its own bounds: non-empty, non-negative amounts,
/// ascending knots at least `min_gap` apart, APRs inside the domain.
pub fn check_curve(order_id: &str, curve: &Curve) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let side = curve.side;
    let bounds = &curve.bounds;

    if curve.is_empty() {
        errors.push(ValidationError::EmptyCurve {
            order_id: order_id.to_string(),
            side,
        });
        return errors;
    }

    for (index, p) in curve.points.iter().enumerate() {
        if p.amount < 0.0 {
            errors.push(ValidationError::NegativeAmount {
                order_id: order_id.to_string(),
                side,
                index,
                amount: p.amount,
            });
        }
        if !(bounds.min_apr..=bounds.max_apr).contains(&p.apr) {
            errors.push(ValidationError::AprOutOfRange {
                order_id: order_id.to_string(),
                side,
                index,
                apr: p.apr,
                min_apr: bounds.min_apr,
                max_apr: bounds.max_apr,
            });
        }
    }

    for (index, w) in curve.points.windows(2).enumerate() {
        let gap = w[1].amount - w[0].amount;
        if gap < bounds.min_gap {
            errors.push(ValidationError::PointsTooClose {
                order_id: order_id.to_string(),
                side,
                index,
                gap,
                min_gap: bounds.min_gap,
            });
        }
    }

    errors
}
