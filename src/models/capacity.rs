//! Core domain types for the capacity engine.
//!
//! `Period` and `Granularity` describe the calendar partition; `WorkItem` is
//! the transient projection the allocation spreader consumes (never
//! persisted); `CapacityPoint` is the engine's sole output record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::api::{DepartmentId, ProjectId, TaskId, UserId};
use crate::models::calendar;

/// Reporting granularity for the capacity series.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
            Granularity::Quarterly => "quarterly",
        }
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            _ => Err(format!("Unknown granularity: {}", s)),
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inclusive calendar interval produced by the period generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Human-readable label ("Mar 03", "Wk of Mar 02", "Mar 2026", "Q1 2026")
    pub label: String,
    /// First day of the period (inclusive)
    pub start: NaiveDate,
    /// Last day of the period (inclusive)
    pub end: NaiveDate,
}

impl Period {
    pub fn new(label: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }

    /// Check if a calendar day lies inside this period (both ends inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Check if this period overlaps another inclusive interval.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start <= end && start <= self.end
    }

    /// Length of the period in days (inclusive count).
    pub fn len_days(&self) -> i64 {
        calendar::days_inclusive(self.start, self.end)
    }
}

/// Scope of a capacity request: whose hours are being aggregated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Scope {
    /// A single user.
    User(UserId),
    /// Every user belonging to a department.
    Department(DepartmentId),
    /// Every user in the organization.
    Org,
}

/// Where a work item came from: a task, or a task-less project used as a
/// capacity-consuming fallback.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum WorkItemSource {
    Task(TaskId),
    Project(ProjectId),
}

/// Transient projection of a task (or task-less project) fed to the
/// allocation spreader. Computed fresh per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Originating task or fallback project
    pub source: WorkItemSource,
    /// Assigned user, when the item is a directly assigned task
    pub owner_id: Option<UserId>,
    /// Owning project
    pub project_id: Option<ProjectId>,
    /// Remaining effort in hours (remaining ?? estimated ?? 0)
    pub hours: f64,
    /// Declared start date, if any
    pub start_date: Option<NaiveDate>,
    /// Own due date, else owning project's end date, else none
    pub effective_due_date: Option<NaiveDate>,
}

impl WorkItem {
    /// An item is overdue when it has a due date strictly before today.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        matches!(self.effective_due_date, Some(due) if due < today)
    }

    /// The day spreading starts from: the later of the declared start date
    /// and today. Items without a start date start today.
    pub fn effective_start(&self, today: NaiveDate) -> NaiveDate {
        match self.start_date {
            Some(start) if start > today => start,
            _ => today,
        }
    }
}

/// One point of the capacity series: available, allocated (forecast) and
/// actual (logged) hours for a period, plus the derived utilization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityPoint {
    pub period: Period,
    /// Declared available hours for the period
    pub available: f64,
    /// Forecast hours spread from in-flight work items
    pub allocated: f64,
    /// Logged hours whose entry date falls in the period
    pub actual: f64,
    /// round(actual / available * 100), 0 when nothing is available
    pub utilization: i64,
}

impl CapacityPoint {
    /// Build a point from raw sums, deriving utilization.
    pub fn new(period: Period, available: f64, allocated: f64, actual: f64) -> Self {
        let utilization = if available > 0.0 {
            (actual / available * 100.0).round() as i64
        } else {
            0
        };
        Self {
            period,
            available,
            allocated,
            actual,
            utilization,
        }
    }

    /// An all-zero point for a period, used for empty scopes.
    pub fn zero(period: Period) -> Self {
        Self::new(period, 0.0, 0.0, 0.0)
    }
}
