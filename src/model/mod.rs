pub mod allocation;
pub mod book;
pub mod curve;
pub mod order;
pub mod preset;

pub use allocation::{AllocationEntry, OrderRates, RebalanceMetrics};
pub use book::{Book, VaultSnapshot};
pub use curve::{Curve, CurveBounds, CurvePoint, Side};
pub use order::{OrderId, OrderKind, RangeOrder};
pub use preset::StrategyPreset;
