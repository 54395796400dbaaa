//! Capacity engine services.
//!
//! Pure computation over snapshot data: period generation, availability and
//! actuals aggregation, work-item resolution, allocation spreading, and the
//! orchestrating capacity calculator. The only async code here is the
//! snapshot loader in [`capacity`], which fans out the independent
//! repository reads.

pub mod actuals;
pub mod availability;
pub mod capacity;
pub mod periods;
pub mod policy;
pub mod spreader;
pub mod work_items;

pub use actuals::actual_hours;
pub use availability::AvailabilityIndex;
pub use capacity::{
    capacity_series, capacity_series_at, compute_capacity, load_snapshot, resolve_scope_users,
    CapacitySnapshot,
};
pub use periods::generate_periods;
pub use policy::AllocationPolicy;
pub use spreader::{spread_hours, spread_total};
pub use work_items::resolve_work_items;
