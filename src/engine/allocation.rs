use tracing::{debug, warn};

use crate::model::allocation::{AllocationEntry, RebalanceMetrics};

/// Tolerance on the 100% ceiling for float noise after redistribution.
pub const SUM_EPSILON: f64 = 1e-9;

/// Sum of allocation percentages across `entries`.
pub fn allocation_total(entries: &[AllocationEntry]) -> f64 {
    entries.iter().map(|e| e.allocation_percentage).sum()
}

/// Set one entry's allocation and scale the others down if the vault is
/// over-committed.
///
/// `new_percentage` is clamped to `[0, 100]`. If the total then exceeds 100,
/// every other entry gives up a share of the excess proportional to its own
/// allocation, floored at zero. This is a single proportional pass; callers
/// gating a save must re-check the total. An unknown `target_id` returns the
/// entries unchanged.
pub fn set_allocation(
    entries: &[AllocationEntry],
    target_id: &str,
    new_percentage: f64,
    total_vault_value: f64,
) -> Vec<AllocationEntry> {
    let mut next = entries.to_vec();
    let Some(target) = next.iter().position(|e| e.id == target_id) else {
        debug!(target_id, "set_allocation: unknown entry");
        return next;
    };

    let pct = clamp_percentage(new_percentage);
    if pct != new_percentage {
        debug!(target_id, new_percentage, pct, "set_allocation: percentage clamped");
    }
    next[target].allocation_percentage = pct;
    next[target].reprice(total_vault_value);

    let total = allocation_total(&next);
    if total > 100.0 {
        let excess = total - 100.0;
        let others_total: f64 = next
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != target)
            .map(|(_, e)| e.allocation_percentage)
            .sum();
        if others_total > 0.0 {
            let ratio = excess / others_total;
            for (i, entry) in next.iter_mut().enumerate() {
                if i == target {
                    continue;
                }
                let reduced = entry.allocation_percentage - entry.allocation_percentage * ratio;
                entry.allocation_percentage = reduced.max(0.0);
                entry.reprice(total_vault_value);
            }
        }

        let after = allocation_total(&next);
        if after > 100.0 + SUM_EPSILON {
            warn!(target_id, total = after, "set_allocation: vault still over-committed");
        }
    }

    next
}

fn clamp_percentage(pct: f64) -> f64 {
    if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 100.0) }
}

/// Recompute vault metrics after an allocation edit or a deposit/withdraw change.
///
/// `base` is the last committed snapshot. Total and unallocated value move by
/// the net deposit; allocated value is re-derived from the entries so it cannot
/// drift from their sum. Average APY is the allocation-weighted mean of each
/// entry's effective rate.
pub fn recompute_metrics(
    entries: &[AllocationEntry],
    base: &RebalanceMetrics,
    deposit_delta: f64,
    withdraw_delta: f64,
) -> RebalanceMetrics {
    let net = deposit_delta - withdraw_delta;
    RebalanceMetrics {
        total_vault_value: base.total_vault_value + net,
        unallocated_value: base.unallocated_value + net,
        allocated_value: entries.iter().map(|e| e.allocated_amount).sum(),
        average_apy: entries
            .iter()
            .map(|e| e.effective_rate() * e.allocation_percentage / 100.0)
            .sum(),
    }
}
