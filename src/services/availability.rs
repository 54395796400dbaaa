//! Availability aggregation.
//!
//! Availability is stored as one row per (user, ISO week). This module folds
//! those weekly rows into whatever period shape the caller is rendering.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::api::UserId;
use crate::db::models::AvailabilityRecord;
use crate::models::calendar;
use crate::models::capacity::{Granularity, Period};
use crate::services::policy::AllocationPolicy;

/// Weekly availability indexed by (user, week start). Missing rows mean zero
/// availability for that week.
#[derive(Debug, Default, Clone)]
pub struct AvailabilityIndex {
    by_user_week: HashMap<(UserId, NaiveDate), f64>,
}

impl AvailabilityIndex {
    pub fn from_records(records: &[AvailabilityRecord]) -> Self {
        let mut by_user_week = HashMap::with_capacity(records.len());
        for record in records {
            // Last row wins if the source holds duplicates for a week.
            by_user_week.insert((record.user_id, record.week_start), record.hours());
        }
        Self { by_user_week }
    }

    fn week_hours(&self, user_id: UserId, week: NaiveDate) -> f64 {
        self.by_user_week
            .get(&(user_id, week))
            .copied()
            .unwrap_or(0.0)
    }

    /// Total available hours for `user_id` within `period`.
    ///
    /// Weekly periods read the single matching row. Daily periods take a
    /// flat one-workday share of the week. Monthly and quarterly periods sum
    /// every week whose Monday falls inside the period; a week straddling a
    /// month boundary is attributed wholly to the month holding its Monday.
    pub fn hours_for_period(
        &self,
        user_id: UserId,
        period: &Period,
        granularity: Granularity,
        policy: &AllocationPolicy,
    ) -> f64 {
        match granularity {
            Granularity::Weekly => {
                self.week_hours(user_id, calendar::week_start(period.start))
            }
            Granularity::Daily => {
                let week = calendar::week_start(period.start);
                self.week_hours(user_id, week) / policy.workdays_per_week
            }
            Granularity::Monthly | Granularity::Quarterly => {
                calendar::mondays_within(period.start, period.end)
                    .into_iter()
                    .map(|monday| self.week_hours(user_id, monday))
                    .sum()
            }
        }
    }

    /// Sum of `hours_for_period` across a set of users.
    pub fn total_for_period(
        &self,
        user_ids: &[UserId],
        period: &Period,
        granularity: Granularity,
        policy: &AllocationPolicy,
    ) -> f64 {
        user_ids
            .iter()
            .map(|&user_id| self.hours_for_period(user_id, period, granularity, policy))
            .sum()
    }
}
