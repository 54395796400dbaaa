//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and local development. All data is stored in
//! memory using HashMap and Vec structures, providing fast, deterministic,
//! and isolated execution.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::api::{
    AvailabilityRecord, DepartmentId, ProjectAssignmentRow, ProjectId, ProjectRow, TaskId,
    TaskRow, TimeEntry, UserId, UserRow,
};
use crate::db::repository::{
    AvailabilityRepository, DirectoryRepository, RepositoryError, RepositoryResult,
    TimeEntryRepository, WorkRepository,
};

/// In-memory local repository.
///
/// Seed it with the `insert_*` helpers, then hand it to the capacity
/// services as an `Arc<dyn FullRepository>`.
///
/// # Example
/// ```
/// use psa_rust::db::repositories::LocalRepository;
/// use psa_rust::api::{UserId, UserRow};
///
/// let repo = LocalRepository::new();
/// repo.insert_user(UserRow {
///     id: UserId::new(1),
///     name: "Dana".to_string(),
///     department_id: None,
/// });
/// assert_eq!(repo.user_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    users: HashMap<UserId, UserRow>,
    availability: Vec<AvailabilityRecord>,
    projects: HashMap<ProjectId, ProjectRow>,
    tasks: HashMap<TaskId, TaskRow>,
    assignments: Vec<ProjectAssignmentRow>,
    time_entries: Vec<TimeEntry>,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            availability: Vec::new(),
            projects: HashMap::new(),
            tasks: HashMap::new(),
            assignments: Vec::new(),
            time_entries: Vec::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user.
    pub fn insert_user(&self, user: UserRow) {
        let mut data = self.data.write().unwrap();
        data.users.insert(user.id, user);
    }

    /// Add a weekly availability declaration.
    pub fn insert_availability(&self, record: AvailabilityRecord) {
        let mut data = self.data.write().unwrap();
        data.availability.push(record);
    }

    /// Add a project.
    pub fn insert_project(&self, project: ProjectRow) {
        let mut data = self.data.write().unwrap();
        data.projects.insert(project.id, project);
    }

    /// Add a task.
    pub fn insert_task(&self, task: TaskRow) {
        let mut data = self.data.write().unwrap();
        data.tasks.insert(task.id, task);
    }

    /// Add a project assignment.
    pub fn insert_assignment(&self, assignment: ProjectAssignmentRow) {
        let mut data = self.data.write().unwrap();
        data.assignments.push(assignment);
    }

    /// Add a logged time entry.
    pub fn insert_time_entry(&self, entry: TimeEntry) {
        let mut data = self.data.write().unwrap();
        data.time_entries.push(entry);
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Number of users stored.
    pub fn user_count(&self) -> usize {
        self.data.read().unwrap().users.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::connection("Repository is not healthy"));
        }
        Ok(())
    }
}

#[async_trait]
impl DirectoryRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn fetch_user(&self, user_id: UserId) -> RepositoryResult<Option<UserRow>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data.users.get(&user_id).cloned())
    }

    async fn list_user_ids(&self) -> RepositoryResult<Vec<UserId>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        let mut ids: Vec<UserId> = data.users.keys().copied().collect();
        ids.sort();
        Ok(ids)
    }

    async fn fetch_department_user_ids(
        &self,
        department_id: DepartmentId,
    ) -> RepositoryResult<Vec<UserId>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        let mut ids: Vec<UserId> = data
            .users
            .values()
            .filter(|u| u.department_id == Some(department_id))
            .map(|u| u.id)
            .collect();
        ids.sort();
        Ok(ids)
    }
}

#[async_trait]
impl AvailabilityRepository for LocalRepository {
    async fn fetch_availability(
        &self,
        user_ids: &[UserId],
        from_week: NaiveDate,
        to_week: NaiveDate,
    ) -> RepositoryResult<Vec<AvailabilityRecord>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data
            .availability
            .iter()
            .filter(|r| {
                user_ids.contains(&r.user_id)
                    && r.week_start >= from_week
                    && r.week_start <= to_week
            })
            .cloned()
            .collect())
    }
}

#[async_trait]
impl WorkRepository for LocalRepository {
    async fn fetch_tasks_assigned_to(
        &self,
        user_ids: &[UserId],
    ) -> RepositoryResult<Vec<TaskRow>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data
            .tasks
            .values()
            .filter(|t| matches!(t.assigned_to, Some(u) if user_ids.contains(&u)))
            .cloned()
            .collect())
    }

    async fn fetch_active_assignments(
        &self,
        user_ids: &[UserId],
    ) -> RepositoryResult<Vec<ProjectAssignmentRow>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data
            .assignments
            .iter()
            .filter(|a| a.is_active() && user_ids.contains(&a.user_id))
            .cloned()
            .collect())
    }

    async fn fetch_projects(
        &self,
        project_ids: &[ProjectId],
    ) -> RepositoryResult<Vec<ProjectRow>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(project_ids
            .iter()
            .filter_map(|id| data.projects.get(id).cloned())
            .collect())
    }

    async fn fetch_tasks_for_projects(
        &self,
        project_ids: &[ProjectId],
    ) -> RepositoryResult<Vec<TaskRow>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data
            .tasks
            .values()
            .filter(|t| matches!(t.project_id, Some(p) if project_ids.contains(&p)))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TimeEntryRepository for LocalRepository {
    async fn fetch_time_entries(
        &self,
        user_ids: &[UserId],
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepositoryResult<Vec<TimeEntry>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data
            .time_entries
            .iter()
            .filter(|e| {
                user_ids.contains(&e.user_id) && e.entry_date >= from && e.entry_date <= to
            })
            .cloned()
            .collect())
    }
}
