//! Availability repository trait: declared weekly capacity.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::RepositoryResult;
use crate::api::{AvailabilityRecord, UserId};

/// Repository trait for weekly availability declarations.
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Fetch availability rows for the given users whose `week_start` falls
    /// inside `[from_week, to_week]` (both Monday-aligned, inclusive).
    ///
    /// Users without rows simply do not appear in the result; the aggregator
    /// treats absence as 0 available hours.
    async fn fetch_availability(
        &self,
        user_ids: &[UserId],
        from_week: NaiveDate,
        to_week: NaiveDate,
    ) -> RepositoryResult<Vec<AvailabilityRecord>>;
}
