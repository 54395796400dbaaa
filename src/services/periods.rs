//! Period generation.
//!
//! Produces the ordered, non-overlapping list of calendar periods a capacity
//! series is computed over. The window is fixed and symmetric around today
//! on purpose: every view shows equal history and forecast.

use chrono::{Datelike, NaiveDate};

use crate::models::calendar;
use crate::models::capacity::{Granularity, Period};
use crate::services::policy::AllocationPolicy;

/// Generate the period list for a granularity, centered on `today`.
///
/// - daily: one period per day, `today - 7 .. today + 7` (15 periods)
/// - weekly: ISO weeks (Monday start), `-4w .. +4w` (9 periods)
/// - monthly: calendar months, `-3m .. +3m` (7 periods)
/// - quarterly: calendar quarters, `-2q .. +2q` (5 periods)
pub fn generate_periods(
    granularity: Granularity,
    today: NaiveDate,
    policy: &AllocationPolicy,
) -> Vec<Period> {
    match granularity {
        Granularity::Daily => daily_periods(today, policy.daily_window),
        Granularity::Weekly => weekly_periods(today, policy.weekly_window),
        Granularity::Monthly => monthly_periods(today, policy.monthly_window),
        Granularity::Quarterly => quarterly_periods(today, policy.quarterly_window),
    }
}

fn daily_periods(today: NaiveDate, window: u32) -> Vec<Period> {
    let window = window as i64;
    (-window..=window)
        .map(|offset| {
            let day = calendar::shift_days(today, offset);
            Period::new(day.format("%b %d").to_string(), day, day)
        })
        .collect()
}

fn weekly_periods(today: NaiveDate, window: u32) -> Vec<Period> {
    let window = window as i64;
    let current_monday = calendar::week_start(today);
    (-window..=window)
        .map(|offset| {
            let monday = calendar::shift_days(current_monday, offset * 7);
            Period::new(
                format!("Wk of {}", monday.format("%b %d")),
                monday,
                calendar::shift_days(monday, 6),
            )
        })
        .collect()
}

fn monthly_periods(today: NaiveDate, window: u32) -> Vec<Period> {
    let window = window as i32;
    (-window..=window)
        .map(|offset| {
            let anchor = calendar::shift_months(calendar::month_start(today), offset);
            Period::new(
                anchor.format("%b %Y").to_string(),
                anchor,
                calendar::month_end(anchor),
            )
        })
        .collect()
}

fn quarterly_periods(today: NaiveDate, window: u32) -> Vec<Period> {
    let window = window as i32;
    (-window..=window)
        .map(|offset| {
            let anchor = calendar::shift_months(calendar::quarter_start(today), offset * 3);
            Period::new(
                format!("Q{} {}", calendar::quarter_of(anchor), anchor.year()),
                anchor,
                calendar::quarter_end(anchor),
            )
        })
        .collect()
}
