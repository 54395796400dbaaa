//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! capacity services for the actual computation.

use axum::extract::{Path, Query, State};
use axum::Json;

use super::dto::{CapacityQuery, CapacityResponse, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::{DepartmentId, UserId};
use crate::models::capacity::{Granularity, Scope};
use crate::services::capacity_series;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn parse_granularity(query: &CapacityQuery) -> Result<Granularity, AppError> {
    match &query.granularity {
        None => Ok(Granularity::Weekly),
        Some(raw) => raw.parse().map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid granularity '{}': expected daily, weekly, monthly or quarterly",
                raw
            ))
        }),
    }
}

async fn capacity_response(
    state: &AppState,
    scope: Scope,
    granularity: Granularity,
) -> Result<CapacityResponse, AppError> {
    let points = capacity_series(state.repository.as_ref(), &scope, granularity).await?;
    Ok(CapacityResponse {
        scope,
        granularity,
        points,
    })
}

/// GET /health
///
/// Health check endpoint to verify the service is running and the repository
/// is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

/// GET /v1/capacity
///
/// Organization-wide capacity series.
pub async fn get_org_capacity(
    State(state): State<AppState>,
    Query(query): Query<CapacityQuery>,
) -> HandlerResult<CapacityResponse> {
    let granularity = parse_granularity(&query)?;
    Ok(Json(capacity_response(&state, Scope::Org, granularity).await?))
}

/// GET /v1/users/{user_id}/capacity
///
/// Capacity series for a single user. An unknown user id yields a full
/// all-zero series, not a 404.
pub async fn get_user_capacity(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(query): Query<CapacityQuery>,
) -> HandlerResult<CapacityResponse> {
    let granularity = parse_granularity(&query)?;
    let scope = Scope::User(UserId::new(user_id));
    Ok(Json(capacity_response(&state, scope, granularity).await?))
}

/// GET /v1/departments/{department_id}/capacity
///
/// Capacity series aggregated over every user in a department.
pub async fn get_department_capacity(
    State(state): State<AppState>,
    Path(department_id): Path<i64>,
    Query(query): Query<CapacityQuery>,
) -> HandlerResult<CapacityResponse> {
    let granularity = parse_granularity(&query)?;
    let scope = Scope::Department(DepartmentId::new(department_id));
    Ok(Json(capacity_response(&state, scope, granularity).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_defaults_to_weekly() {
        let query = CapacityQuery { granularity: None };
        assert_eq!(parse_granularity(&query).unwrap(), Granularity::Weekly);
    }

    #[test]
    fn test_granularity_parses_known_values() {
        for (raw, expected) in [
            ("daily", Granularity::Daily),
            ("weekly", Granularity::Weekly),
            ("monthly", Granularity::Monthly),
            ("quarterly", Granularity::Quarterly),
        ] {
            let query = CapacityQuery {
                granularity: Some(raw.to_string()),
            };
            assert_eq!(parse_granularity(&query).unwrap(), expected);
        }
    }

    #[test]
    fn test_unknown_granularity_is_bad_request() {
        let query = CapacityQuery {
            granularity: Some("hourly".to_string()),
        };
        assert!(matches!(
            parse_granularity(&query),
            Err(AppError::BadRequest(_))
        ));
    }
}
