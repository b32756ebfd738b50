//! Pure transforms over curves and allocations.
//!
//! Nothing here performs I/O or holds shared state: every function takes
//! values and returns new ones, so editors may call them at any rate.

pub mod allocation;
pub mod curve;
pub mod session;
pub mod view;

pub use allocation::{SUM_EPSILON, allocation_total, recompute_metrics, set_allocation};
pub use curve::{drag_point, interpolate, move_point, scale_curve};
pub use session::{RebalanceSession, SaveError, SaveSink};
pub use view::{DEFAULT_SAMPLE_STEPS, MIN_ZOOM, Sample, ViewWindow};
