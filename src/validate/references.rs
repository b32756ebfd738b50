use std::collections::HashSet;

use crate::model::{AllocationEntry, Book, OrderKind};

use super::ValidationError;

/// Check that all order IDs are unique.
pub fn check_duplicate_orders(book: &Book) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for order in &book.orders {
        if !seen.insert(order.id.as_str()) {
            errors.push(ValidationError::DuplicateOrderId {
                order_id: order.id.clone(),
            });
        }
    }

    errors
}

/// Check that every allocation entry funds an existing order of the same kind.
pub fn check_entry_references(book: &Book, entries: &[AllocationEntry]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for entry in entries {
        let Some(order) = book.order(&entry.id) else {
            errors.push(ValidationError::UnknownOrder {
                entry_id: entry.id.clone(),
            });
            continue;
        };
        let order_kind = order.kind();
        let entry_kind = entry.rates.kind();
        if order_kind != OrderKind::Empty && order_kind != entry_kind {
            errors.push(ValidationError::KindMismatch {
                entry_id: entry.id.clone(),
                entry_kind,
                order_kind,
            });
        }
    }

    errors
}
