//! Leave store: persistence for leave applications.

use std::path::Path;

use crate::error::HrResult;
use crate::models::LeaveApplication;

use super::collection::Collection;

/// Persists leave applications. Applications are never deleted.
pub struct LeaveStore {
    leaves: Collection<LeaveApplication>,
}

impl LeaveStore {
    /// Opens the store backed by `leaves.json` under `data_dir`.
    pub async fn open(data_dir: &Path) -> HrResult<Self> {
        Ok(LeaveStore {
            leaves: Collection::open(data_dir.join("leaves.json")).await?,
        })
    }

    /// Persists a new application.
    pub async fn insert(&self, application: LeaveApplication) -> HrResult<()> {
        self.leaves
            .mutate(|docs| {
                docs.push(application);
                Ok(())
            })
            .await
    }

    /// Returns all applications for `employee` (document id), most recently
    /// applied first.
    pub async fn list_for_employee(&self, employee: &str) -> Vec<LeaveApplication> {
        self.leaves
            .with_docs(|docs| {
                let mut mine: Vec<LeaveApplication> = docs
                    .iter()
                    .filter(|l| l.employee == employee)
                    .cloned()
                    .collect();
                mine.sort_by(|a, b| b.applied_on.cmp(&a.applied_on));
                mine
            })
            .await
    }
}
