//! Error types for the HR core services.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the services can produce. The HTTP boundary maps each
//! variant to a status code and a stable machine-readable error code; see
//! `api::response`.

use thiserror::Error;

/// The main error type for HR core operations.
///
/// # Example
///
/// ```
/// use hr_core::error::HrError;
///
/// let error = HrError::NotFound {
///     entity: "employee",
///     id: "missing-id".to_string(),
/// };
/// assert_eq!(error.to_string(), "employee not found: missing-id");
/// ```
#[derive(Debug, Error)]
pub enum HrError {
    /// A required field was missing or malformed.
    #[error("Validation error: {message}")]
    Validation {
        /// A description of what was missing or malformed.
        message: String,
    },

    /// A uniqueness constraint was violated.
    #[error("{entity} already exists with this {field}")]
    Conflict {
        /// The entity kind whose constraint was violated.
        entity: &'static str,
        /// The field carrying the duplicate value.
        field: &'static str,
    },

    /// A referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The entity kind that was looked up.
        entity: &'static str,
        /// The identifier that did not resolve.
        id: String,
    },

    /// No user account matches the supplied identifier.
    #[error("Invalid Credentials: User not found.")]
    UserNotFound,

    /// The account exists but is registered under a different role.
    ///
    /// Kept separate from [`HrError::BadPassword`] so the boundary can tell
    /// a wrong login button apart from a wrong password, even though both
    /// surface as 401.
    #[error("Access Denied: You are not registered as {requested}.")]
    RoleMismatch {
        /// The role the caller asked to log in as.
        requested: String,
    },

    /// The password did not match the stored hash.
    #[error("Invalid Credentials: Password incorrect.")]
    BadPassword,

    /// The underlying persistence layer failed.
    #[error("Store error: {message}")]
    Store {
        /// A description of the persistence failure.
        message: String,
    },

    /// Startup configuration was missing or invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// A description of what was missing or invalid.
        message: String,
    },
}

impl HrError {
    /// Shorthand for a [`HrError::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        HrError::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a [`HrError::Store`] with the given message.
    pub fn store(message: impl Into<String>) -> Self {
        HrError::Store {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return HrError.
pub type HrResult<T> = Result<T, HrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_displays_message() {
        let error = HrError::validation("reason is required");
        assert_eq!(error.to_string(), "Validation error: reason is required");
    }

    #[test]
    fn test_conflict_displays_entity_and_field() {
        let error = HrError::Conflict {
            entity: "user",
            field: "username",
        };
        assert_eq!(error.to_string(), "user already exists with this username");
    }

    #[test]
    fn test_not_found_displays_entity_and_id() {
        let error = HrError::NotFound {
            entity: "employee",
            id: "abc-123".to_string(),
        };
        assert_eq!(error.to_string(), "employee not found: abc-123");
    }

    #[test]
    fn test_role_mismatch_names_requested_role() {
        let error = HrError::RoleMismatch {
            requested: "hr".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Access Denied: You are not registered as hr."
        );
    }

    #[test]
    fn test_auth_failures_use_contract_wording() {
        assert_eq!(
            HrError::UserNotFound.to_string(),
            "Invalid Credentials: User not found."
        );
        assert_eq!(
            HrError::BadPassword.to_string(),
            "Invalid Credentials: Password incorrect."
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<HrError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_store_error() -> HrResult<()> {
            Err(HrError::store("disk full"))
        }

        fn propagates_error() -> HrResult<()> {
            returns_store_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
