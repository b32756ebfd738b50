use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::order::{OrderId, OrderKind};

/// Rates quoted by the order an allocation funds, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrderRates {
    /// Lend-only order.
    Lend { lend_apr: f64 },
    /// Borrow-only order.
    Borrow { borrow_apr: f64 },
    /// Order quoting both sides.
    TwoWay { lend_apr: f64, borrow_apr: f64 },
}

impl OrderRates {
    /// Rate used for vault-level averages. Two-way orders use the mean of both sides.
    pub fn effective_rate(&self) -> f64 {
        match *self {
            OrderRates::Lend { lend_apr } => lend_apr,
            OrderRates::Borrow { borrow_apr } => borrow_apr,
            OrderRates::TwoWay {
                lend_apr,
                borrow_apr,
            } => (lend_apr + borrow_apr) / 2.0,
        }
    }

    pub fn kind(&self) -> OrderKind {
        match self {
            OrderRates::Lend { .. } => OrderKind::Lend,
            OrderRates::Borrow { .. } => OrderKind::Borrow,
            OrderRates::TwoWay { .. } => OrderKind::TwoWay,
        }
    }
}

/// One market order's share of a vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AllocationEntry {
    /// Order this allocation funds.
    pub id: OrderId,
    /// Share of the vault's total value, 0.0 - 100.0.
    pub allocation_percentage: f64,
    /// `allocation_percentage / 100 * total_vault_value`. Derived.
    #[serde(default)]
    pub allocated_amount: f64,
    /// Most the order can absorb, in USD. Informational only.
    pub max_capacity: f64,
    pub rates: OrderRates,
}

impl AllocationEntry {
    pub fn new(
        id: impl Into<OrderId>,
        allocation_percentage: f64,
        max_capacity: f64,
        rates: OrderRates,
    ) -> Self {
        Self {
            id: id.into(),
            allocation_percentage,
            allocated_amount: 0.0,
            max_capacity,
            rates,
        }
    }

    pub fn effective_rate(&self) -> f64 {
        self.rates.effective_rate()
    }

    /// Capacity left after the current allocation. Negative when over capacity.
    pub fn headroom(&self) -> f64 {
        self.max_capacity - self.allocated_amount
    }

    pub(crate) fn reprice(&mut self, total_vault_value: f64) {
        self.allocated_amount = self.allocation_percentage * total_vault_value / 100.0;
    }
}

/// Vault-level figures shown alongside the allocation editor.
///
/// `allocated_value` is re-derived from the entries while `unallocated_value`
/// only moves with deposits and withdrawals, so after an allocation edit the
/// two no longer have to sum to `total_vault_value`. The gap is reported by
/// [`RebalanceMetrics::unaccounted_value`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RebalanceMetrics {
    pub total_vault_value: f64,
    /// Idle capital. Tracked as a running figure moved only by deposits and withdrawals.
    pub unallocated_value: f64,
    /// Sum of the entries' allocated amounts.
    pub allocated_value: f64,
    /// Allocation-weighted average of the entries' effective rates.
    pub average_apy: f64,
}

impl RebalanceMetrics {
    /// Capital neither allocated nor counted as idle:
    /// `total - allocated - unallocated`. Positive after allocations are
    /// lowered, negative after they are raised past the idle figure.
    pub fn unaccounted_value(&self) -> f64 {
        self.total_vault_value - self.allocated_value - self.unallocated_value
    }
}
