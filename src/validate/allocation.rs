use std::collections::HashSet;

use crate::engine::allocation::{SUM_EPSILON, allocation_total};
use crate::model::AllocationEntry;

use super::ValidationError;

/// The save gate: unique ids, each percentage within 0..=100, total at most 100.
pub fn check_allocations(entries: &[AllocationEntry]) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for entry in entries {
        if !seen.insert(entry.id.as_str()) {
            errors.push(ValidationError::DuplicateEntry {
                entry_id: entry.id.clone(),
            });
        }
        if !(0.0..=100.0).contains(&entry.allocation_percentage) {
            errors.push(ValidationError::PercentageOutOfRange {
                entry_id: entry.id.clone(),
                value: entry.allocation_percentage,
            });
        }
    }

    let total = allocation_total(entries);
    if total > 100.0 + SUM_EPSILON {
        errors.push(ValidationError::OverAllocated { total });
    }

    errors
}
