//! Data-access module for the capacity engine.
//!
//! This module provides abstractions for read-only platform data via the
//! Repository pattern, allowing different storage backends to be swapped
//! easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, schedulers, etc.)          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services/) - Capacity Engine             │
//! │  - Period generation                                     │
//! │  - Allocation spreading                                  │
//! │  - Availability / actuals aggregation                    │
//! └───────────────────┬─────────────────────────────────────┘
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The engine only ever reads: availability declarations, tasks, projects,
//! project assignments and time entries, all bounded by the requested date
//! range. Writes happen elsewhere in the platform and are out of scope here.

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod models;
pub mod repo_config;
pub mod repositories;
pub mod repository;

pub use repo_config::RepositoryConfig;

// Repository trait and implementations
pub use factory::{RepositoryFactory, RepositoryType};
pub use repositories::LocalRepository;
pub use repository::{
    AvailabilityRepository, DirectoryRepository, ErrorContext, FullRepository, RepositoryError,
    RepositoryResult, TimeEntryRepository, WorkRepository,
};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn FullRepository>> = OnceLock::new();

/// Initialize the global repository singleton for the configured backend.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo = RepositoryFactory::from_default_config()
        .map_err(|e| anyhow::Error::msg(e.to_string()))?;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn FullRepository>> {
    if REPOSITORY.get().is_none() {
        let _ = init_repository();
    }

    REPOSITORY
        .get()
        .context("Repository not initialized. Call init_repository() first.")
}
