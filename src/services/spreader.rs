//! Allocation spreading.
//!
//! Distributes one work item's hours across calendar periods. Three mutually
//! exclusive cases, evaluated in order:
//!
//! 1. overdue: every hour lands in the period containing today
//! 2. no due date: uniform over a synthetic 90-day window from the
//!    effective start
//! 3. future due date: uniform over `[effective start, due]`
//!
//! Overlap day counts are inclusive on both ends. For a dated window the
//! daily rate divides by the same inclusive count, so hours are conserved
//! across any gap-free tiling of the window. The 90-day window keeps its
//! divisor at 90 while overlaps stay inclusive; that mismatch is carried
//! over intact for output compatibility.

use chrono::NaiveDate;

use crate::models::calendar::days_inclusive;
use crate::models::capacity::{Period, WorkItem};
use crate::services::policy::AllocationPolicy;

/// Hours of `item` attributable to `period`, as of `today`. Never negative.
pub fn spread_hours(
    item: &WorkItem,
    today: NaiveDate,
    period: &Period,
    policy: &AllocationPolicy,
) -> f64 {
    if item.is_overdue(today) {
        return if period.contains(today) { item.hours } else { 0.0 };
    }

    let effective_start = item.effective_start(today);
    if effective_start > period.end {
        return 0.0;
    }

    let (window_end, divisor) = match item.effective_due_date {
        Some(due) => {
            let remaining = days_inclusive(effective_start, due).max(1);
            (due, remaining as f64)
        }
        None => {
            let window_days = policy.no_due_date_window_days;
            let end = effective_start + chrono::Duration::days(window_days);
            (end, window_days.max(1) as f64)
        }
    };

    let overlap_start = effective_start.max(period.start);
    let overlap_end = window_end.min(period.end);
    let overlap = days_inclusive(overlap_start, overlap_end);
    if overlap == 0 {
        return 0.0;
    }

    (item.hours / divisor) * overlap as f64
}

/// Sum of [`spread_hours`] across a set of items.
pub fn spread_total(
    items: &[WorkItem],
    today: NaiveDate,
    period: &Period,
    policy: &AllocationPolicy,
) -> f64 {
    items
        .iter()
        .map(|item| spread_hours(item, today, period, policy))
        .sum()
}
