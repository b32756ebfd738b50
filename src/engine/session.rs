use thiserror::Error;
use tracing::debug;

use super::allocation::{recompute_metrics, set_allocation};
use crate::model::allocation::{AllocationEntry, RebalanceMetrics};
use crate::model::book::VaultSnapshot;
use crate::validate::{self, ValidationError};

/// Receives a committed vault snapshot when the curator saves.
pub trait SaveSink {
    fn save(&mut self, snapshot: &VaultSnapshot) -> anyhow::Result<()>;
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save blocked by {} validation error(s)", .0.len())]
    Gated(Vec<ValidationError>),

    #[error("save sink failed: {0}")]
    Sink(#[from] anyhow::Error),
}

/// An in-progress rebalance of one vault.
///
/// Holds the last committed snapshot plus the curator's pending edits. Every
/// edit goes through the pure normalizer and metrics functions; the session
/// only keeps the latest result.
#[derive(Debug, Clone)]
pub struct RebalanceSession {
    baseline: VaultSnapshot,
    entries: Vec<AllocationEntry>,
    deposit: f64,
    withdraw: f64,
    metrics: RebalanceMetrics,
}

impl RebalanceSession {
    pub fn new(baseline: VaultSnapshot) -> Self {
        let mut session = Self {
            entries: baseline.entries.clone(),
            metrics: baseline.metrics,
            baseline,
            deposit: 0.0,
            withdraw: 0.0,
        };
        session.refresh();
        session
    }

    pub fn entries(&self) -> &[AllocationEntry] {
        &self.entries
    }

    pub fn metrics(&self) -> &RebalanceMetrics {
        &self.metrics
    }

    pub fn deposit(&self) -> f64 {
        self.deposit
    }

    pub fn withdraw(&self) -> f64 {
        self.withdraw
    }

    /// Set one entry's allocation, redistributing if the vault is over-committed.
    pub fn set_allocation(&mut self, id: &str, percentage: f64) {
        let total = self.metrics.total_vault_value;
        self.entries = set_allocation(&self.entries, id, percentage, total);
        self.refresh();
    }

    /// Pending deposit into the vault. Negative amounts are treated as zero.
    pub fn set_deposit(&mut self, amount: f64) {
        self.deposit = non_negative(amount);
        self.refresh();
    }

    /// Pending withdrawal from the vault. Negative amounts are treated as zero.
    pub fn set_withdraw(&mut self, amount: f64) {
        self.withdraw = non_negative(amount);
        self.refresh();
    }

    /// Whether the pending state passes the save gate. Re-validates rather
    /// than trusting the normalizer's output.
    pub fn can_save(&self) -> bool {
        validate::check_allocations(&self.entries).is_empty()
    }

    /// Current pending state as a snapshot.
    pub fn snapshot(&self) -> VaultSnapshot {
        VaultSnapshot {
            metrics: self.metrics,
            entries: self.entries.clone(),
        }
    }

    /// Hand the pending state to `sink` and make it the new baseline.
    pub fn save(&mut self, sink: &mut dyn SaveSink) -> Result<VaultSnapshot, SaveError> {
        let errors = validate::check_allocations(&self.entries);
        if !errors.is_empty() {
            return Err(SaveError::Gated(errors));
        }
        let snapshot = self.snapshot();
        sink.save(&snapshot)?;
        *self = Self::new(snapshot.clone());
        Ok(snapshot)
    }

    /// Drop every pending edit and return to the baseline.
    pub fn discard(&mut self) {
        debug!("rebalance session discarded");
        *self = Self::new(self.baseline.clone());
    }

    fn refresh(&mut self) {
        let total = self.baseline.metrics.total_vault_value + self.deposit - self.withdraw;
        for entry in &mut self.entries {
            entry.reprice(total);
        }
        self.metrics = recompute_metrics(
            &self.entries,
            &self.baseline.metrics,
            self.deposit,
            self.withdraw,
        );
    }
}

fn non_negative(amount: f64) -> f64 {
    if amount.is_finite() { amount.max(0.0) } else { 0.0 }
}
