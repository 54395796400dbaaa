//! Public API surface for the Rust backend.
//!
//! This file consolidates the typed identifiers and DTO types used by the
//! capacity engine and the HTTP API. All types derive Serialize/Deserialize
//! for JSON serialization.

pub use crate::models::capacity::CapacityPoint;
pub use crate::models::capacity::Granularity;
pub use crate::models::capacity::Period;
pub use crate::models::capacity::Scope;
pub use crate::models::capacity::WorkItem;
pub use crate::models::capacity::WorkItemSource;

pub use crate::db::models::AvailabilityRecord;
pub use crate::db::models::ProjectAssignmentRow;
pub use crate::db::models::ProjectRow;
pub use crate::db::models::TaskRow;
pub use crate::db::models::TimeEntry;
pub use crate::db::models::UserRow;

use serde::{Deserialize, Serialize};

/// User identifier (database primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

/// Department identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DepartmentId(pub i64);

/// Project identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub i64);

/// Task identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        UserId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl DepartmentId {
    pub fn new(value: i64) -> Self {
        DepartmentId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl ProjectId {
    pub fn new(value: i64) -> Self {
        ProjectId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TaskId {
    pub fn new(value: i64) -> Self {
        TaskId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::{DepartmentId, ProjectId, TaskId, UserId};

    #[test]
    fn test_user_id_new() {
        let id = UserId::new(42);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_user_id_equality() {
        let id1 = UserId::new(100);
        let id2 = UserId::new(100);
        let id3 = UserId::new(101);

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_user_id_ordering() {
        let id1 = UserId::new(1);
        let id2 = UserId::new(2);

        assert!(id1 < id2);
        assert!(id2 > id1);
    }

    #[test]
    fn test_department_id_new() {
        let id = DepartmentId::new(7);
        assert_eq!(id.value(), 7);
    }

    #[test]
    fn test_project_id_equality() {
        let id1 = ProjectId::new(300);
        let id2 = ProjectId::new(300);
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_task_id_display() {
        let id = TaskId::new(88);
        assert_eq!(id.to_string(), "88");
    }

    #[test]
    fn test_all_ids_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(TaskId::new(1));
        set.insert(TaskId::new(2));
        set.insert(TaskId::new(1)); // Duplicate

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_user_id_zero() {
        let id = UserId::new(0);
        assert_eq!(id.value(), 0);
    }
}
