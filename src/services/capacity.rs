//! Capacity calculation.
//!
//! Orchestrates the engine: resolve the scope to users, load one immutable
//! snapshot of everything the date range needs, then compute the capacity
//! series as a pure function of that snapshot. Nothing here holds state
//! across calls; identical snapshots produce identical output.

use chrono::{Local, NaiveDate};
use log::debug;

use crate::api::UserId;
use crate::db::models::{AvailabilityRecord, TimeEntry};
use crate::db::repository::{FullRepository, RepositoryResult};
use crate::models::calendar::week_start;
use crate::models::capacity::{CapacityPoint, Granularity, Period, Scope, WorkItem};
use crate::services::actuals::actual_hours;
use crate::services::availability::AvailabilityIndex;
use crate::services::periods::generate_periods;
use crate::services::policy::AllocationPolicy;
use crate::services::spreader::spread_total;
use crate::services::work_items::resolve_work_items;

/// Everything one capacity computation reads, fetched once up front.
///
/// The snapshot is plain owned data: computing from it is pure, so the same
/// snapshot can be reused or inspected in tests without touching a backend.
#[derive(Debug, Clone)]
pub struct CapacitySnapshot {
    pub today: NaiveDate,
    pub user_ids: Vec<UserId>,
    pub availability: Vec<AvailabilityRecord>,
    pub work_items: Vec<WorkItem>,
    pub time_entries: Vec<TimeEntry>,
}

/// Resolve a scope to the set of users it covers.
///
/// Unknown user or department ids resolve to an empty set; the caller then
/// produces an all-zero series rather than an error.
pub async fn resolve_scope_users(
    repository: &dyn FullRepository,
    scope: &Scope,
) -> RepositoryResult<Vec<UserId>> {
    match scope {
        Scope::User(user_id) => Ok(repository
            .fetch_user(*user_id)
            .await?
            .map(|user| vec![user.id])
            .unwrap_or_default()),
        Scope::Department(department_id) => {
            repository.fetch_department_user_ids(*department_id).await
        }
        Scope::Org => repository.list_user_ids().await,
    }
}

/// Load the snapshot for a scope over the union of the given periods.
///
/// The independent reads (availability, direct tasks, assignments, time
/// entries) run in parallel; the project and project-task reads follow once
/// the assignment set is known.
pub async fn load_snapshot(
    repository: &dyn FullRepository,
    scope: &Scope,
    periods: &[Period],
    today: NaiveDate,
) -> RepositoryResult<CapacitySnapshot> {
    let user_ids = resolve_scope_users(repository, scope).await?;

    let (range_start, range_end) = match (periods.first(), periods.last()) {
        (Some(first), Some(last)) => (first.start, last.end),
        _ => (today, today),
    };

    let (availability, direct_tasks, assignments, time_entries) = tokio::join!(
        repository.fetch_availability(&user_ids, week_start(range_start), week_start(range_end)),
        repository.fetch_tasks_assigned_to(&user_ids),
        repository.fetch_active_assignments(&user_ids),
        repository.fetch_time_entries(&user_ids, range_start, range_end),
    );
    let availability = availability?;
    let direct_tasks = direct_tasks?;
    let assignments = assignments?;
    let time_entries = time_entries?;

    let mut assigned_project_ids: Vec<_> = assignments
        .iter()
        .filter(|a| a.is_active())
        .map(|a| a.project_id)
        .collect();
    assigned_project_ids.sort();
    assigned_project_ids.dedup();

    // Only assigned projects are expanded into their tasks, but project rows
    // are also needed for due-date inheritance on direct tasks, whose
    // projects the user may not be assigned to.
    let mut project_ids = assigned_project_ids.clone();
    project_ids.extend(direct_tasks.iter().filter_map(|t| t.project_id));
    project_ids.sort();
    project_ids.dedup();

    let (projects, project_tasks) = tokio::join!(
        repository.fetch_projects(&project_ids),
        repository.fetch_tasks_for_projects(&assigned_project_ids),
    );
    let projects = projects?;
    let project_tasks = project_tasks?;

    let work_items = resolve_work_items(&direct_tasks, &assignments, &projects, &project_tasks);
    debug!(
        "snapshot for {:?}: {} users, {} availability rows, {} work items, {} time entries",
        scope,
        user_ids.len(),
        availability.len(),
        work_items.len(),
        time_entries.len()
    );

    Ok(CapacitySnapshot {
        today,
        user_ids,
        availability,
        work_items,
        time_entries,
    })
}

/// Compute the capacity series from a snapshot. Pure.
pub fn compute_capacity(
    snapshot: &CapacitySnapshot,
    periods: &[Period],
    granularity: Granularity,
    policy: &AllocationPolicy,
) -> Vec<CapacityPoint> {
    let availability = AvailabilityIndex::from_records(&snapshot.availability);

    periods
        .iter()
        .map(|period| {
            let available =
                availability.total_for_period(&snapshot.user_ids, period, granularity, policy);
            let allocated = spread_total(&snapshot.work_items, snapshot.today, period, policy);
            let actual = actual_hours(&snapshot.time_entries, period);
            CapacityPoint::new(period.clone(), available, allocated, actual)
        })
        .collect()
}

/// Full capacity series for a scope and granularity, as of `today`.
pub async fn capacity_series_at(
    repository: &dyn FullRepository,
    scope: &Scope,
    granularity: Granularity,
    today: NaiveDate,
) -> RepositoryResult<Vec<CapacityPoint>> {
    let policy = AllocationPolicy::default();
    let periods = generate_periods(granularity, today, &policy);
    let snapshot = load_snapshot(repository, scope, &periods, today).await?;
    Ok(compute_capacity(&snapshot, &periods, granularity, &policy))
}

/// [`capacity_series_at`] anchored on the local calendar date.
pub async fn capacity_series(
    repository: &dyn FullRepository,
    scope: &Scope,
    granularity: Granularity,
) -> RepositoryResult<Vec<CapacityPoint>> {
    capacity_series_at(repository, scope, granularity, Local::now().date_naive()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{TaskId, TaskRow, UserRow};
    use crate::db::repositories::LocalRepository;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn seeded_repository() -> LocalRepository {
        let repo = LocalRepository::new();
        repo.insert_user(UserRow {
            id: UserId::new(1),
            name: "Dana".to_string(),
            department_id: None,
        });
        repo.insert_availability(AvailabilityRecord {
            user_id: UserId::new(1),
            week_start: d(2026, 8, 24),
            available_hours: Some(40.0),
        });
        repo.insert_task(TaskRow {
            id: TaskId::new(10),
            project_id: None,
            assigned_to: Some(UserId::new(1)),
            status: "open".to_string(),
            remaining_hours: Some(40.0),
            estimated_hours: None,
            start_date: Some(d(2026, 8, 26)),
            due_date: Some(d(2026, 9, 5)),
        });
        repo
    }

    #[tokio::test]
    async fn test_weekly_series_shape() {
        let repo = seeded_repository();
        let series = capacity_series_at(
            &repo,
            &Scope::User(UserId::new(1)),
            Granularity::Weekly,
            d(2026, 8, 26),
        )
        .await
        .unwrap();

        assert_eq!(series.len(), 9);
        let current = &series[4];
        assert_eq!(current.period.start, d(2026, 8, 24));
        assert_eq!(current.available, 40.0);
        assert!((current.allocated - 40.0 / 11.0 * 5.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_unknown_user_yields_all_zero_series() {
        let repo = LocalRepository::new();
        let series = capacity_series_at(
            &repo,
            &Scope::User(UserId::new(999)),
            Granularity::Weekly,
            d(2026, 8, 26),
        )
        .await
        .unwrap();

        assert_eq!(series.len(), 9);
        for point in &series {
            assert_eq!(point.available, 0.0);
            assert_eq!(point.allocated, 0.0);
            assert_eq!(point.actual, 0.0);
            assert_eq!(point.utilization, 0);
        }
    }

    #[tokio::test]
    async fn test_compute_is_pure() {
        let repo = seeded_repository();
        let policy = AllocationPolicy::default();
        let periods = generate_periods(Granularity::Weekly, d(2026, 8, 26), &policy);
        let snapshot = load_snapshot(
            &repo,
            &Scope::User(UserId::new(1)),
            &periods,
            d(2026, 8, 26),
        )
        .await
        .unwrap();

        let first = compute_capacity(&snapshot, &periods, Granularity::Weekly, &policy);
        let second = compute_capacity(&snapshot, &periods, Granularity::Weekly, &policy);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.available, b.available);
            assert_eq!(a.allocated, b.allocated);
            assert_eq!(a.actual, b.actual);
            assert_eq!(a.utilization, b.utilization);
        }
    }
}
