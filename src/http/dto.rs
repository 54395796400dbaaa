//! Data Transfer Objects for the HTTP API.
//!
//! The capacity models already derive Serialize/Deserialize, so the series
//! payload is re-exported directly; only the request/envelope shapes live
//! here.

use serde::{Deserialize, Serialize};

pub use crate::models::capacity::{CapacityPoint, Granularity, Period, Scope};

/// Query parameters accepted by every capacity endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapacityQuery {
    /// One of daily, weekly, monthly, quarterly. Defaults to weekly.
    pub granularity: Option<String>,
}

/// Response envelope for a capacity series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityResponse {
    /// Scope the series was computed for
    pub scope: Scope,
    /// Granularity of the periods
    pub granularity: Granularity,
    /// Ordered capacity points, one per period
    pub points: Vec<CapacityPoint>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Repository backend status
    pub database: String,
}
