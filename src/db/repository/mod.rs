//! Repository trait definitions.
//!
//! One trait per concern, combined into `FullRepository` for consumers that
//! need the whole read surface (the capacity snapshot loader, the HTTP
//! state). All traits are async and object-safe so backends can be swapped
//! behind `Arc<dyn FullRepository>`.

pub mod availability;
pub mod directory;
pub mod error;
pub mod time_entries;
pub mod work;

pub use availability::AvailabilityRepository;
pub use directory::DirectoryRepository;
pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use time_entries::TimeEntryRepository;
pub use work::WorkRepository;

/// Combined repository surface required by the capacity engine.
pub trait FullRepository:
    DirectoryRepository + AvailabilityRepository + WorkRepository + TimeEntryRepository
{
}

impl<T> FullRepository for T where
    T: DirectoryRepository + AvailabilityRepository + WorkRepository + TimeEntryRepository
{
}
