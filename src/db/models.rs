//! Row types returned by the repository layer.
//!
//! These are the explicit, validated shapes the engine consumes. Dates are
//! parsed by serde/chrono when a row is constructed, so a malformed date is a
//! hard failure at the data-access boundary and the engine itself never sees
//! an unparsed value. Missing numeric fields are carried as `Option` and
//! resolved to 0 by the consumers, never as an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{DepartmentId, ProjectId, TaskId, UserId};

/// A user of the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: UserId,
    pub name: String,
    /// Department membership, if any
    pub department_id: Option<DepartmentId>,
}

/// Declared available hours for one user and one ISO week.
///
/// One row per user per week; absence of a row means 0 available hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    pub user_id: UserId,
    /// Monday of the week the declaration covers
    pub week_start: NaiveDate,
    pub available_hours: Option<f64>,
}

impl AvailabilityRecord {
    /// Declared hours, with a missing value resolved to 0.
    pub fn hours(&self) -> f64 {
        self.available_hours.unwrap_or(0.0)
    }
}

/// A project row as stored by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRow {
    pub id: ProjectId,
    pub name: String,
    /// Free-form status; "complete" (or "done") excludes the project
    pub status: String,
    pub estimated_hours: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// A task row as stored by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRow {
    pub id: TaskId,
    pub project_id: Option<ProjectId>,
    pub assigned_to: Option<UserId>,
    /// Free-form status; "done"/"complete" excludes the task
    pub status: String,
    pub remaining_hours: Option<f64>,
    pub estimated_hours: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

/// Membership of a user on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectAssignmentRow {
    pub user_id: UserId,
    pub project_id: ProjectId,
    /// Set when the user was removed from the project; active rows are None
    pub removed_at: Option<NaiveDate>,
}

impl ProjectAssignmentRow {
    pub fn is_active(&self) -> bool {
        self.removed_at.is_none()
    }
}

/// A logged time entry. Immutable historical fact; summed, never spread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub user_id: UserId,
    pub project_id: Option<ProjectId>,
    pub task_id: Option<TaskId>,
    pub entry_date: NaiveDate,
    pub hours_logged: Option<f64>,
}

impl TimeEntry {
    /// Logged hours, with a missing value resolved to 0.
    pub fn hours(&self) -> f64 {
        self.hours_logged.unwrap_or(0.0)
    }
}

/// Check whether a task or project status string marks it finished.
///
/// The platform stores both "done" and "complete" historically, in mixed
/// case; both are treated as finished.
pub fn is_closed_status(status: &str) -> bool {
    matches!(status.to_lowercase().as_str(), "done" | "complete")
}
