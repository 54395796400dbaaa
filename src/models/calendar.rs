//! Calendar arithmetic helpers.
//!
//! All week boundaries in the capacity engine use Monday as the week start
//! (ISO 8601). Day counts between two dates are inclusive on both ends: the
//! interval `[2026-03-02, 2026-03-02]` counts as one day. The allocation math
//! depends on that convention for conservation across adjacent periods, so
//! every component goes through these helpers instead of rolling its own.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Monday of the ISO week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - chrono::Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Sunday of the ISO week containing `date`.
pub fn week_end(date: NaiveDate) -> NaiveDate {
    week_start(date) + chrono::Duration::days(6)
}

/// First day of the calendar month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    // from_ymd with day 1 is always valid for a valid year/month
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Last day of the calendar month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let first = month_start(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next - chrono::Duration::days(1),
        None => date,
    }
}

/// 1-based quarter index (1..=4) of the month containing `date`.
pub fn quarter_of(date: NaiveDate) -> u32 {
    (date.month() - 1) / 3 + 1
}

/// First day of the calendar quarter containing `date`.
pub fn quarter_start(date: NaiveDate) -> NaiveDate {
    let month = (quarter_of(date) - 1) * 3 + 1;
    NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date)
}

/// Last day of the calendar quarter containing `date`.
pub fn quarter_end(date: NaiveDate) -> NaiveDate {
    let first = quarter_start(date);
    match first.checked_add_months(Months::new(3)) {
        Some(next) => next - chrono::Duration::days(1),
        None => date,
    }
}

/// Shift a date by whole months, clamping the day to the target month's end.
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new((-months) as u32))
    };
    shifted.unwrap_or(date)
}

/// Shift a date by whole days.
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new((-days) as u64))
    };
    shifted.unwrap_or(date)
}

/// Number of days in the inclusive interval `[start, end]`.
///
/// Returns 0 when `end < start`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> i64 {
    if end < start {
        0
    } else {
        (end - start).num_days() + 1
    }
}

/// Every Monday `m` with `start <= m <= end`, in ascending order.
///
/// This enumerates the week starts that fall inside a period, which is how
/// monthly and quarterly availability is accumulated.
pub fn mondays_within(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut mondays = Vec::new();
    let mut monday = week_start(start);
    if monday < start {
        monday += chrono::Duration::days(7);
    }
    while monday <= end {
        mondays.push(monday);
        monday += chrono::Duration::days(7);
    }
    mondays
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2026-08-30 is a Sunday
        assert_eq!(week_start(d(2026, 8, 30)), d(2026, 8, 24));
        // Monday maps to itself
        assert_eq!(week_start(d(2026, 8, 24)), d(2026, 8, 24));
        // Wednesday
        assert_eq!(week_start(d(2026, 8, 26)), d(2026, 8, 24));
    }

    #[test]
    fn test_week_end_is_sunday() {
        assert_eq!(week_end(d(2026, 8, 24)), d(2026, 8, 30));
        assert_eq!(week_end(d(2026, 8, 30)), d(2026, 8, 30));
    }

    #[test]
    fn test_week_start_across_month_boundary() {
        // 2026-09-01 is a Tuesday; its week starts in August
        assert_eq!(week_start(d(2026, 9, 1)), d(2026, 8, 31));
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_start(d(2026, 2, 14)), d(2026, 2, 1));
        assert_eq!(month_end(d(2026, 2, 14)), d(2026, 2, 28));
        // Leap year
        assert_eq!(month_end(d(2028, 2, 1)), d(2028, 2, 29));
        assert_eq!(month_end(d(2026, 12, 31)), d(2026, 12, 31));
    }

    #[test]
    fn test_quarter_bounds() {
        assert_eq!(quarter_of(d(2026, 1, 15)), 1);
        assert_eq!(quarter_of(d(2026, 6, 30)), 2);
        assert_eq!(quarter_of(d(2026, 12, 1)), 4);
        assert_eq!(quarter_start(d(2026, 8, 30)), d(2026, 7, 1));
        assert_eq!(quarter_end(d(2026, 8, 30)), d(2026, 9, 30));
        assert_eq!(quarter_end(d(2026, 11, 2)), d(2026, 12, 31));
    }

    #[test]
    fn test_shift_months_clamps_day() {
        // Jan 31 + 1 month clamps to Feb 28
        assert_eq!(shift_months(d(2026, 1, 31), 1), d(2026, 2, 28));
        assert_eq!(shift_months(d(2026, 3, 15), -3), d(2025, 12, 15));
    }

    #[test]
    fn test_days_inclusive() {
        assert_eq!(days_inclusive(d(2026, 3, 2), d(2026, 3, 2)), 1);
        assert_eq!(days_inclusive(d(2026, 3, 2), d(2026, 3, 8)), 7);
        // Reversed interval is empty
        assert_eq!(days_inclusive(d(2026, 3, 8), d(2026, 3, 2)), 0);
    }

    #[test]
    fn test_mondays_within_month() {
        // August 2026: Mondays are 3, 10, 17, 24, 31
        let mondays = mondays_within(d(2026, 8, 1), d(2026, 8, 31));
        assert_eq!(
            mondays,
            vec![
                d(2026, 8, 3),
                d(2026, 8, 10),
                d(2026, 8, 17),
                d(2026, 8, 24),
                d(2026, 8, 31),
            ]
        );
    }

    #[test]
    fn test_mondays_within_short_range() {
        // No Monday inside a Tuesday..Friday slice
        assert_eq!(mondays_within(d(2026, 8, 25), d(2026, 8, 28)), vec![]);
        // Exactly one when the range starts on a Monday
        assert_eq!(
            mondays_within(d(2026, 8, 24), d(2026, 8, 24)),
            vec![d(2026, 8, 24)]
        );
    }
}
