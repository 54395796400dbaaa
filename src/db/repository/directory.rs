//! Directory repository trait: users and departments.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{DepartmentId, UserId, UserRow};

/// Repository trait for resolving scopes to user sets.
///
/// Scope resolution is deliberately forgiving: an unknown user or department
/// resolves to an empty set, not an error, so callers can always render a
/// full (all-zero) capacity series.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Check that the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Fetch a single user, `None` when the id is unknown.
    async fn fetch_user(&self, user_id: UserId) -> RepositoryResult<Option<UserRow>>;

    /// All user ids in the organization.
    async fn list_user_ids(&self) -> RepositoryResult<Vec<UserId>>;

    /// User ids belonging to a department. Unknown departments yield an
    /// empty list.
    async fn fetch_department_user_ids(
        &self,
        department_id: DepartmentId,
    ) -> RepositoryResult<Vec<UserId>>;
}
