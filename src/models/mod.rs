//! Domain model for the capacity engine.

pub mod calendar;
pub mod capacity;

pub use capacity::{CapacityPoint, Granularity, Period, Scope, WorkItem, WorkItemSource};
