//! Business policy constants for the capacity engine.
//!
//! These numbers are policy, not derived values: a fixed symmetric window of
//! history and forecast around today, a 5-workday week for pro-rating weekly
//! availability onto days, and a 90-day synthetic horizon for work items
//! that have no due date. They are grouped here so a deployment can tune
//! them in one place without touching the allocation math.

/// Tunable policy knobs for period generation and allocation spreading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationPolicy {
    /// Days of history and forecast around today for the daily view.
    pub daily_window: u32,
    /// ISO weeks before and after the current week for the weekly view.
    pub weekly_window: u32,
    /// Calendar months before and after the current month.
    pub monthly_window: u32,
    /// Calendar quarters before and after the current quarter.
    pub quarterly_window: u32,
    /// Workdays per week used to pro-rate weekly availability onto days.
    pub workdays_per_week: f64,
    /// Length in days of the synthetic spreading window for work items
    /// without a due date.
    pub no_due_date_window_days: i64,
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self {
            daily_window: 7,
            weekly_window: 4,
            monthly_window: 3,
            quarterly_window: 2,
            workdays_per_week: 5.0,
            no_due_date_window_days: 90,
        }
    }
}
