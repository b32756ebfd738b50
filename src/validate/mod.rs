mod allocation;
mod curve;
mod references;

use std::path::Path;

use thiserror::Error;

use crate::model::{Book, OrderKind, Side};

pub use allocation::check_allocations;
pub use curve::check_curve;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Order `{order_id}` has an empty {side} curve")]
    EmptyCurve { order_id: String, side: Side },

    #[error("Order `{order_id}` {side} curve point {index} has negative amount {amount}")]
    NegativeAmount {
        order_id: String,
        side: Side,
        index: usize,
        amount: f64,
    },

    #[error(
        "Order `{order_id}` {side} curve points {index} and {} are {gap} apart (minimum {min_gap})",
        .index + 1
    )]
    PointsTooClose {
        order_id: String,
        side: Side,
        index: usize,
        gap: f64,
        min_gap: f64,
    },

    #[error("Order `{order_id}` {side} curve point {index} has APR {apr} outside {min_apr}..={max_apr}")]
    AprOutOfRange {
        order_id: String,
        side: Side,
        index: usize,
        apr: f64,
        min_apr: f64,
        max_apr: f64,
    },

    #[error("Duplicate order ID `{order_id}`")]
    DuplicateOrderId { order_id: String },

    #[error("Order `{order_id}` quotes neither side")]
    OrderWithoutCurves { order_id: String },

    #[error("Duplicate allocation entry `{entry_id}`")]
    DuplicateEntry { entry_id: String },

    #[error("Allocation entry `{entry_id}` references unknown order")]
    UnknownOrder { entry_id: String },

    #[error("Allocation entry `{entry_id}` has {entry_kind:?} rates but its order is {order_kind:?}")]
    KindMismatch {
        entry_id: String,
        entry_kind: OrderKind,
        order_kind: OrderKind,
    },

    #[error("Allocation entry `{entry_id}` has percentage {value} outside 0..=100")]
    PercentageOutOfRange { entry_id: String, value: f64 },

    #[error("Allocations sum to {total:.4}%, above 100%")]
    OverAllocated { total: f64 },
}

/// Load and fully validate a book from a JSON file. Derived fields are
/// refreshed once the book passes.
pub fn load_and_validate(path: &Path) -> Result<Book, Vec<ValidationError>> {
    let contents = std::fs::read_to_string(path).map_err(|e| vec![ValidationError::Io(e)])?;
    let mut book: Book =
        serde_json::from_str(&contents).map_err(|e| vec![ValidationError::Json(e)])?;
    validate(&book)?;
    book.refresh_derived();
    Ok(book)
}

/// Validate a book, collecting all errors.
pub fn validate(book: &Book) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    errors.extend(references::check_duplicate_orders(book));
    for order in &book.orders {
        if order.kind() == OrderKind::Empty {
            errors.push(ValidationError::OrderWithoutCurves {
                order_id: order.id.clone(),
            });
        }
        for curve in [&order.lend, &order.borrow].into_iter().flatten() {
            errors.extend(check_curve(&order.id, curve));
        }
    }
    if let Some(vault) = &book.vault {
        errors.extend(references::check_entry_references(book, &vault.entries));
        errors.extend(check_allocations(&vault.entries));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// CLI entry point for the `validate` subcommand.
#[cfg(feature = "full")]
pub fn run(path: &Path) -> anyhow::Result<()> {
    match load_and_validate(path) {
        Ok(book) => {
            println!(
                "Book '{}' is valid. {} orders, {} allocations.",
                book.name,
                book.orders.len(),
                book.vault.as_ref().map_or(0, |v| v.entries.len())
            );
            Ok(())
        }
        Err(errors) => {
            eprintln!("Validation failed with {} error(s):", errors.len());
            for (i, e) in errors.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, e);
            }
            std::process::exit(1);
        }
    }
}
