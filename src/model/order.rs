use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::curve::{Curve, Side};

/// A unique identifier for an order within a book.
pub type OrderId = String;

/// Which sides an order quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    Lend,
    Borrow,
    TwoWay,
    /// No curve on either side yet.
    Empty,
}

/// A range order: one rate curve per quoted side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RangeOrder {
    pub id: OrderId,
    /// Market label, e.g. "USDC".
    pub market: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lend: Option<Curve>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borrow: Option<Curve>,
}

impl RangeOrder {
    pub fn kind(&self) -> OrderKind {
        match (&self.lend, &self.borrow) {
            (Some(_), Some(_)) => OrderKind::TwoWay,
            (Some(_), None) => OrderKind::Lend,
            (None, Some(_)) => OrderKind::Borrow,
            (None, None) => OrderKind::Empty,
        }
    }

    pub fn curve(&self, side: Side) -> Option<&Curve> {
        match side {
            Side::Lend => self.lend.as_ref(),
            Side::Borrow => self.borrow.as_ref(),
        }
    }

    /// Rate quoted on `side` for `amount`, or `None` if the order does not quote that side.
    pub fn rate_at(&self, side: Side, amount: f64) -> Option<f64> {
        self.curve(side).map(|c| c.rate_at(amount))
    }

    /// Copy of this order with every quoted rate multiplied by `factor`.
    pub fn leveraged(&self, factor: f64) -> Self {
        use crate::engine::curve::scale_curve;
        Self {
            id: self.id.clone(),
            market: self.market.clone(),
            lend: self.lend.as_ref().map(|c| scale_curve(c, factor)),
            borrow: self.borrow.as_ref().map(|c| scale_curve(c, factor)),
        }
    }

    pub(crate) fn curves_mut(&mut self) -> impl Iterator<Item = &mut Curve> {
        self.lend.iter_mut().chain(self.borrow.iter_mut())
    }
}
