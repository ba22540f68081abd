//! Registration and login over the credential store.

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::error::{HrError, HrResult};
use crate::models::{Role, UserAccount};
use crate::store::CredentialStore;

use super::password;

/// The public view of an authenticated user.
///
/// This is everything login returns; the password hash never leaves the
/// credential store boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDescriptor {
    /// The account's username.
    pub username: String,
    /// The account's full display name.
    pub full_name: String,
    /// The role the account was registered under.
    pub role: Role,
}

/// Registers a new account.
///
/// Fails with a conflict when an account with the same email or username
/// already exists. `role` defaults to employee when omitted. Returns only an
/// acknowledgment; the caller never sees the hash.
pub async fn register(
    store: &CredentialStore,
    full_name: String,
    email: String,
    username: String,
    password: &str,
    role: Option<Role>,
) -> HrResult<()> {
    let password_hash = password::hash_password(password)?;
    let account = UserAccount {
        full_name,
        email,
        username: username.clone(),
        password_hash,
        role: role.unwrap_or(Role::Employee),
        created_at: Utc::now(),
    };

    store.insert(account).await?;
    info!(username = %username, "registered new account");
    Ok(())
}

/// Validates credentials and the requested role, returning the public
/// user descriptor.
///
/// `identifier` may be the email or the username. The stored role must
/// equal `role`: the same account is rejected when the wrong login button
/// was used; role is deliberately not auto-detected. The failure variants
/// (`UserNotFound`, `RoleMismatch`, `BadPassword`) are distinguishable to
/// the caller; the HTTP boundary maps all three to 401.
pub async fn login(
    store: &CredentialStore,
    identifier: &str,
    password: &str,
    role: Role,
) -> HrResult<UserDescriptor> {
    let account = store
        .find_by_identifier(identifier)
        .await
        .ok_or(HrError::UserNotFound)?;

    if account.role != role {
        return Err(HrError::RoleMismatch {
            requested: role.to_string(),
        });
    }

    if !password::verify_password(password, &account.password_hash)? {
        return Err(HrError::BadPassword);
    }

    info!(username = %account.username, role = %account.role, "login succeeded");
    Ok(UserDescriptor {
        username: account.username,
        full_name: account.full_name,
        role: account.role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn open_store(dir: &tempfile::TempDir) -> CredentialStore {
        CredentialStore::open(dir.path()).await.unwrap()
    }

    async fn register_alice(store: &CredentialStore, role: Option<Role>) {
        register(
            store,
            "Alice Example".to_string(),
            "alice@example.com".to_string(),
            "alice".to_string(),
            "correct-horse",
            role,
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_register_then_login_by_username() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir).await;
        register_alice(&store, Some(Role::Hr)).await;

        let descriptor = login(&store, "alice", "correct-horse", Role::Hr)
            .await
            .unwrap();
        assert_eq!(descriptor.username, "alice");
        assert_eq!(descriptor.full_name, "Alice Example");
        assert_eq!(descriptor.role, Role::Hr);
    }

    #[tokio::test]
    async fn test_login_by_email() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir).await;
        register_alice(&store, Some(Role::Hr)).await;

        let descriptor = login(&store, "alice@example.com", "correct-horse", Role::Hr)
            .await
            .unwrap();
        assert_eq!(descriptor.username, "alice");
    }

    #[tokio::test]
    async fn test_role_defaults_to_employee() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir).await;
        register_alice(&store, None).await;

        let descriptor = login(&store, "alice", "correct-horse", Role::Employee)
            .await
            .unwrap();
        assert_eq!(descriptor.role, Role::Employee);
    }

    #[tokio::test]
    async fn test_correct_password_wrong_role_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir).await;
        register_alice(&store, Some(Role::Hr)).await;

        let result = login(&store, "alice", "correct-horse", Role::Employee).await;
        assert!(matches!(result, Err(HrError::RoleMismatch { .. })));
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir).await;
        register_alice(&store, Some(Role::Hr)).await;

        let result = login(&store, "alice", "wrong", Role::Hr).await;
        assert!(matches!(result, Err(HrError::BadPassword)));
    }

    #[tokio::test]
    async fn test_unknown_identifier_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir).await;

        let result = login(&store, "nobody", "irrelevant", Role::Employee).await;
        assert!(matches!(result, Err(HrError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_duplicate_registration_conflicts() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir).await;
        register_alice(&store, None).await;

        // Same username, different email.
        let result = register(
            &store,
            "Other".to_string(),
            "other@example.com".to_string(),
            "alice".to_string(),
            "pw",
            None,
        )
        .await;
        assert!(matches!(result, Err(HrError::Conflict { .. })));
    }

    #[test]
    fn test_descriptor_serializes_without_hash_field() {
        let descriptor = UserDescriptor {
            username: "alice".to_string(),
            full_name: "Alice Example".to_string(),
            role: Role::Hr,
        };
        let json = serde_json::to_string(&descriptor).unwrap();
        assert!(json.contains("\"username\":\"alice\""));
        assert!(json.contains("\"full_name\":\"Alice Example\""));
        assert!(json.contains("\"role\":\"hr\""));
        assert!(!json.contains("password"));
    }
}
