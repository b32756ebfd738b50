//! Rate curves and vault allocations for fixed-rate range orders.
//!
//! [`engine::curve`] prices a cumulative amount off a piecewise-linear APR
//! curve and edits its knots without breaking their ordering.
//! [`engine::allocation`] spreads a vault's capital across orders while
//! keeping the total at or under 100%.

pub mod engine;
pub mod model;
pub mod validate;

#[cfg(feature = "wasm")]
pub mod wasm;
