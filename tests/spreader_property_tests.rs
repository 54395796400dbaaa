//! Property tests for the allocation spreader.

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

use psa_rust::api::TaskId;
use psa_rust::models::capacity::{Period, WorkItem, WorkItemSource};
use psa_rust::services::policy::AllocationPolicy;
use psa_rust::services::spreader::spread_hours;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
}

fn work_item(hours: f64, start: Option<NaiveDate>, due: Option<NaiveDate>) -> WorkItem {
    WorkItem {
        source: WorkItemSource::Task(TaskId::new(1)),
        owner_id: None,
        project_id: None,
        hours,
        start_date: start,
        effective_due_date: due,
    }
}

/// Weekly periods tiling at least `[from, to]`, starting at the Monday on
/// or before `from`.
fn tiling_weeks(from: NaiveDate, to: NaiveDate) -> Vec<Period> {
    let mut monday = from - Duration::days(from.weekday().num_days_from_monday() as i64);
    let mut periods = Vec::new();
    while monday <= to {
        periods.push(Period::new(
            format!("Wk of {}", monday),
            monday,
            monday + Duration::days(6),
        ));
        monday += Duration::days(7);
    }
    periods
}

proptest! {
    #[test]
    fn prop_future_due_conservation(
        hours in 0.5f64..500.0,
        start_offset in 0i64..30,
        span_days in 0i64..120,
    ) {
        let today = base_date();
        let start = today + Duration::days(start_offset);
        let due = start + Duration::days(span_days);
        let item = work_item(hours, Some(start), Some(due));
        let policy = AllocationPolicy::default();

        let total: f64 = tiling_weeks(start, due)
            .iter()
            .map(|p| spread_hours(&item, today, p, &policy))
            .sum();

        prop_assert!((total - hours).abs() < 1e-6, "total {} != {}", total, hours);
    }

    #[test]
    fn prop_overdue_concentrates(
        hours in 0.5f64..500.0,
        overdue_by in 1i64..365,
        window_weeks in 1usize..30,
    ) {
        let today = base_date();
        let due = today - Duration::days(overdue_by);
        let item = work_item(hours, Some(due - Duration::days(10)), Some(due));
        let policy = AllocationPolicy::default();

        let periods = tiling_weeks(
            today - Duration::days(window_weeks as i64 * 7),
            today + Duration::days(window_weeks as i64 * 7),
        );
        let mut current = 0.0;
        let mut elsewhere = 0.0;
        for period in &periods {
            let value = spread_hours(&item, today, period, &policy);
            if period.contains(today) {
                current += value;
            } else {
                elsewhere += value;
            }
        }
        prop_assert_eq!(current, hours);
        prop_assert_eq!(elsewhere, 0.0);
    }

    #[test]
    fn prop_no_due_date_bounded_to_window(
        hours in 0.5f64..500.0,
        start_offset in 0i64..30,
        gap in 1i64..200,
    ) {
        let today = base_date();
        let start = today + Duration::days(start_offset);
        let item = work_item(hours, Some(start), None);
        let policy = AllocationPolicy::default();

        // One-day period strictly after the 90-day window
        let day = start + Duration::days(90 + gap);
        let after = Period::new("after".to_string(), day, day);
        prop_assert_eq!(spread_hours(&item, today, &after, &policy), 0.0);

        // And strictly before the effective start
        if start > today {
            let day = today - Duration::days(gap);
            let before = Period::new("before".to_string(), day, day);
            prop_assert_eq!(spread_hours(&item, today, &before, &policy), 0.0);
        }
    }

    #[test]
    fn prop_contribution_never_negative(
        hours in 0.0f64..500.0,
        start_offset in -60i64..60,
        due_offset in -60i64..120,
        period_offset in -60i64..60,
        period_len in 0i64..30,
    ) {
        let today = base_date();
        let item = work_item(
            hours,
            Some(today + Duration::days(start_offset)),
            Some(today + Duration::days(due_offset)),
        );
        let start = today + Duration::days(period_offset);
        let period = Period::new("p".to_string(), start, start + Duration::days(period_len));
        let value = spread_hours(&item, today, &period, &AllocationPolicy::default());
        prop_assert!(value >= 0.0);
    }
}
