//! User account model and role enum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The role an account was registered under.
///
/// Role-gated branching is plain conditional dispatch on this two-variant
/// enum; login fails when the requested role differs from the stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular employee: self-service views only.
    Employee,
    /// Privileged role that manages employee records and salary structure.
    Hr,
}

impl Role {
    /// The wire representation of the role ("employee" or "hr").
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Hr => "hr",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user account.
///
/// Created once at registration and immutable afterwards; there is no
/// profile-edit flow. Owned solely by the credential store; the password
/// hash must never appear in an API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    /// The user's full display name.
    pub full_name: String,
    /// Email address, unique across accounts.
    pub email: String,
    /// Username, unique across accounts.
    pub username: String,
    /// Argon2id hash of the password, PHC string format.
    pub password_hash: String,
    /// The role selected at registration.
    pub role: Role,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    /// Returns true if `identifier` matches this account's email or username.
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        self.email == identifier || self.username == identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_account() -> UserAccount {
        UserAccount {
            full_name: "Alice Example".to_string(),
            email: "alice@example.com".to_string(),
            username: "alice".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$hash".to_string(),
            role: Role::Hr,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Employee).unwrap(), "\"employee\"");
        assert_eq!(serde_json::to_string(&Role::Hr).unwrap(), "\"hr\"");
    }

    #[test]
    fn test_role_deserialization() {
        let role: Role = serde_json::from_str("\"hr\"").unwrap();
        assert_eq!(role, Role::Hr);
        let role: Role = serde_json::from_str("\"employee\"").unwrap();
        assert_eq!(role, Role::Employee);
    }

    #[test]
    fn test_role_rejects_unknown_value() {
        let result: Result<Role, _> = serde_json::from_str("\"admin\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_role_display_matches_wire_form() {
        assert_eq!(Role::Hr.to_string(), "hr");
        assert_eq!(Role::Employee.to_string(), "employee");
    }

    #[test]
    fn test_matches_identifier_by_email() {
        let account = create_test_account();
        assert!(account.matches_identifier("alice@example.com"));
    }

    #[test]
    fn test_matches_identifier_by_username() {
        let account = create_test_account();
        assert!(account.matches_identifier("alice"));
    }

    #[test]
    fn test_matches_identifier_rejects_other_values() {
        let account = create_test_account();
        assert!(!account.matches_identifier("bob"));
        assert!(!account.matches_identifier(""));
    }

    #[test]
    fn test_account_round_trip() {
        let account = create_test_account();
        let json = serde_json::to_string(&account).unwrap();
        let back: UserAccount = serde_json::from_str(&json).unwrap();
        assert_eq!(account, back);
    }
}
