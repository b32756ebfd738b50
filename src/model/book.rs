use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::engine::recompute_metrics;

use super::allocation::{AllocationEntry, RebalanceMetrics};
use super::order::RangeOrder;

/// A vault's capital split across orders, as last saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VaultSnapshot {
    pub metrics: RebalanceMetrics,
    pub entries: Vec<AllocationEntry>,
}

/// A curator's book: the range orders they manage plus the vault funding them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Book {
    /// Human-readable name for this book.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The range orders in this book.
    pub orders: Vec<RangeOrder>,
    /// Optional vault whose capital is allocated across `orders`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault: Option<VaultSnapshot>,
}

impl Book {
    pub fn order(&self, id: &str) -> Option<&RangeOrder> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Re-derive every curve's percentages, every entry's allocated amount and
    /// the vault's allocated value and average APY. Values typed into JSON for
    /// those fields are not trusted.
    pub fn refresh_derived(&mut self) {
        for order in &mut self.orders {
            for curve in order.curves_mut() {
                curve.recompute_percentages();
            }
        }
        if let Some(vault) = &mut self.vault {
            let total = vault.metrics.total_vault_value;
            for entry in &mut vault.entries {
                entry.reprice(total);
            }
            vault.metrics = recompute_metrics(&vault.entries, &vault.metrics, 0.0, 0.0);
        }
    }
}
