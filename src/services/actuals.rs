//! Actuals aggregation.
//!
//! Logged time is a historical fact: entries are summed into the period
//! containing their entry date, never spread.

use crate::db::models::TimeEntry;
use crate::models::capacity::Period;

/// Total logged hours whose entry date falls inside `period` (inclusive).
pub fn actual_hours(entries: &[TimeEntry], period: &Period) -> f64 {
    entries
        .iter()
        .filter(|entry| period.contains(entry.entry_date))
        .map(|entry| entry.hours())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ProjectId, UserId};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn entry(date: NaiveDate, hours: Option<f64>) -> TimeEntry {
        TimeEntry {
            user_id: UserId::new(1),
            project_id: Some(ProjectId::new(5)),
            task_id: None,
            entry_date: date,
            hours_logged: hours,
        }
    }

    #[test]
    fn test_sums_entries_within_period() {
        let period = Period::new("wk", d(2026, 8, 24), d(2026, 8, 30));
        let entries = vec![
            entry(d(2026, 8, 24), Some(8.0)),
            entry(d(2026, 8, 30), Some(4.0)),
            entry(d(2026, 8, 31), Some(6.0)),
            entry(d(2026, 8, 23), Some(2.0)),
        ];
        assert_eq!(actual_hours(&entries, &period), 12.0);
    }

    #[test]
    fn test_null_hours_count_as_zero() {
        let period = Period::new("wk", d(2026, 8, 24), d(2026, 8, 30));
        let entries = vec![entry(d(2026, 8, 25), None), entry(d(2026, 8, 26), Some(3.5))];
        assert_eq!(actual_hours(&entries, &period), 3.5);
    }

    #[test]
    fn test_empty_entries() {
        let period = Period::new("wk", d(2026, 8, 24), d(2026, 8, 30));
        assert_eq!(actual_hours(&[], &period), 0.0);
    }
}
