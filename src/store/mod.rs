//! The document store backing all services.
//!
//! One JSON file per collection under a data directory supplied at startup:
//! `users.json`, `employees.json`, `leaves.json`. Collections load fully
//! into memory at open and rewrite their file on every mutation, so the
//! process can stop at any point without losing acknowledged writes.

mod collection;
mod employees;
mod leaves;
mod users;

use std::path::Path;

pub use employees::EmployeeStore;
pub use leaves::LeaveStore;
pub use users::CredentialStore;

use crate::error::{HrError, HrResult};

/// The process-wide data store: one typed store per collection.
pub struct Database {
    /// User identity records.
    pub users: CredentialStore,
    /// Employee records.
    pub employees: EmployeeStore,
    /// Leave applications.
    pub leaves: LeaveStore,
}

impl Database {
    /// Opens (creating if needed) the data directory and all collections.
    ///
    /// Fails if the directory cannot be created or any collection file is
    /// unreadable or corrupt, making a bad data store a startup failure
    /// rather than a per-request surprise.
    pub async fn open(data_dir: &Path) -> HrResult<Self> {
        tokio::fs::create_dir_all(data_dir).await.map_err(|e| {
            HrError::store(format!(
                "failed to create data directory {}: {e}",
                data_dir.display()
            ))
        })?;

        Ok(Database {
            users: CredentialStore::open(data_dir).await?,
            employees: EmployeeStore::open(data_dir).await?,
            leaves: LeaveStore::open(data_dir).await?,
        })
    }
}
