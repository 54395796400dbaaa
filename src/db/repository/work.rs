//! Work repository trait: tasks, projects and project assignments.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{ProjectAssignmentRow, ProjectId, ProjectRow, TaskRow, UserId};

/// Repository trait for the work graph the resolver walks.
///
/// These queries return raw rows; status filtering, deduplication and
/// due-date inheritance are the resolver's job so that every backend yields
/// identical allocation behavior.
#[async_trait]
pub trait WorkRepository: Send + Sync {
    /// Tasks directly assigned to any of the given users.
    async fn fetch_tasks_assigned_to(&self, user_ids: &[UserId])
        -> RepositoryResult<Vec<TaskRow>>;

    /// Active project assignments (`removed_at` unset) for the given users.
    async fn fetch_active_assignments(
        &self,
        user_ids: &[UserId],
    ) -> RepositoryResult<Vec<ProjectAssignmentRow>>;

    /// Project rows for the given ids. Unknown ids are skipped.
    async fn fetch_projects(&self, project_ids: &[ProjectId])
        -> RepositoryResult<Vec<ProjectRow>>;

    /// All tasks belonging to any of the given projects, regardless of
    /// status or assignee. The resolver needs the full set to decide which
    /// projects are task-less.
    async fn fetch_tasks_for_projects(
        &self,
        project_ids: &[ProjectId],
    ) -> RepositoryResult<Vec<TaskRow>>;
}
