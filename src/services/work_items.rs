//! Work-item resolution.
//!
//! Builds the deduplicated set of in-flight work items for a scope: tasks
//! assigned directly to scope users, tasks belonging to projects those users
//! are actively assigned to, and a synthetic project-level item for any
//! assigned project that has no tasks at all.

use std::collections::{HashMap, HashSet};

use crate::api::{ProjectId, TaskId};
use crate::db::models::{is_closed_status, ProjectAssignmentRow, ProjectRow, TaskRow};
use crate::models::capacity::{WorkItem, WorkItemSource};

/// Resolve work items from the raw rows of a scope snapshot.
///
/// `direct_tasks` are tasks assigned to scope users. `project_tasks` must be
/// the complete task set of the assigned projects, open and closed alike, so
/// that a project with only closed tasks is not mistaken for a task-less one.
/// A task reachable both directly and via an assigned project appears once.
pub fn resolve_work_items(
    direct_tasks: &[TaskRow],
    assignments: &[ProjectAssignmentRow],
    projects: &[ProjectRow],
    project_tasks: &[TaskRow],
) -> Vec<WorkItem> {
    let projects_by_id: HashMap<ProjectId, &ProjectRow> =
        projects.iter().map(|p| (p.id, p)).collect();

    let mut task_counts: HashMap<ProjectId, usize> = HashMap::new();
    for task in project_tasks {
        if let Some(project_id) = task.project_id {
            *task_counts.entry(project_id).or_insert(0) += 1;
        }
    }

    let mut seen_tasks: HashSet<TaskId> = HashSet::new();
    let mut items = Vec::new();

    for task in direct_tasks.iter().chain(project_tasks.iter()) {
        if !seen_tasks.insert(task.id) {
            continue;
        }
        if is_closed_status(&task.status) {
            continue;
        }
        let hours = task.remaining_hours.or(task.estimated_hours).unwrap_or(0.0);
        if hours == 0.0 {
            continue;
        }
        let project = task.project_id.and_then(|id| projects_by_id.get(&id));
        let effective_due_date = task
            .due_date
            .or_else(|| project.and_then(|p| p.end_date));
        items.push(WorkItem {
            source: WorkItemSource::Task(task.id),
            owner_id: task.assigned_to,
            project_id: task.project_id,
            hours,
            start_date: task.start_date,
            effective_due_date,
        });
    }

    // Projects a scope user is assigned to but which carry no tasks still
    // consume capacity; represent each as one project-level item.
    let assigned_project_ids: HashSet<ProjectId> = assignments
        .iter()
        .filter(|a| a.is_active())
        .map(|a| a.project_id)
        .collect();

    let mut fallback_ids: Vec<ProjectId> = assigned_project_ids
        .into_iter()
        .filter(|id| task_counts.get(id).copied().unwrap_or(0) == 0)
        .collect();
    fallback_ids.sort();

    for project_id in fallback_ids {
        let Some(project) = projects_by_id.get(&project_id) else {
            continue;
        };
        if is_closed_status(&project.status) {
            continue;
        }
        let hours = project.estimated_hours.unwrap_or(0.0);
        if hours == 0.0 {
            continue;
        }
        items.push(WorkItem {
            source: WorkItemSource::Project(project.id),
            owner_id: None,
            project_id: Some(project.id),
            hours,
            start_date: project.start_date,
            effective_due_date: project.end_date,
        });
    }

    items
}
