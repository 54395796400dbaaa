//! # PSA Capacity Engine
//!
//! Capacity allocation and utilization engine for a professional-services
//! platform.
//!
//! This crate computes, for a scope of users (single user, department, or
//! the whole organization) and a calendar granularity, the series of
//! `{available, allocated, actual, utilization}` points the resource
//! planning views render. The HTTP layer exposes the series as a REST API
//! via Axum.
//!
//! ## Features
//!
//! - **Period Generation**: Fixed symmetric calendar windows (daily, weekly,
//!   monthly, quarterly) centered on today
//! - **Availability Aggregation**: Weekly declarations folded into any
//!   period shape
//! - **Work-Item Resolution**: Deduplicated tasks plus task-less-project
//!   fallbacks, with due-date inheritance
//! - **Allocation Spreading**: Hours distributed across periods by
//!   day-overlap, with overdue concentration
//! - **Actuals Aggregation**: Logged time summed into the period it was
//!   logged in
//! - **HTTP API**: RESTful capacity endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Typed identifiers and re-exported public types
//! - [`db`]: Repository pattern over the platform's read-only data
//! - [`models`]: Calendar math and the capacity data model
//! - [`services`]: The capacity engine itself
//! - [`http`]: Axum-based HTTP server and request handlers

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
