//! Credential store: persistence for user accounts.

use std::path::Path;

use crate::error::{HrError, HrResult};
use crate::models::UserAccount;

use super::collection::Collection;

/// Persists user identity records; sole owner of password hashes.
pub struct CredentialStore {
    accounts: Collection<UserAccount>,
}

impl CredentialStore {
    /// Opens the store backed by `users.json` under `data_dir`.
    pub async fn open(data_dir: &Path) -> HrResult<Self> {
        Ok(CredentialStore {
            accounts: Collection::open(data_dir.join("users.json")).await?,
        })
    }

    /// Inserts a new account, rejecting duplicate email or username.
    pub async fn insert(&self, account: UserAccount) -> HrResult<()> {
        self.accounts
            .mutate(|accounts| {
                if accounts.iter().any(|a| a.email == account.email) {
                    return Err(HrError::Conflict {
                        entity: "user",
                        field: "email",
                    });
                }
                if accounts.iter().any(|a| a.username == account.username) {
                    return Err(HrError::Conflict {
                        entity: "user",
                        field: "username",
                    });
                }
                accounts.push(account);
                Ok(())
            })
            .await
    }

    /// Looks up an account whose email or username equals `identifier`.
    pub async fn find_by_identifier(&self, identifier: &str) -> Option<UserAccount> {
        self.accounts
            .with_docs(|accounts| {
                accounts
                    .iter()
                    .find(|a| a.matches_identifier(identifier))
                    .cloned()
            })
            .await
    }
}
