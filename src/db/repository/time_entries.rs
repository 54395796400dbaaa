//! Time entry repository trait: logged hours.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::RepositoryResult;
use crate::api::{TimeEntry, UserId};

/// Repository trait for logged time entries.
#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    /// Fetch time entries for the given users whose `entry_date` falls
    /// inside `[from, to]` inclusive.
    async fn fetch_time_entries(
        &self,
        user_ids: &[UserId],
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepositoryResult<Vec<TimeEntry>>;
}
