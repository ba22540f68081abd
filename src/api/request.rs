//! Request types for the HTTP API.
//!
//! Field casing follows the external contract exactly: auth bodies are
//! snake_case, employee/leave bodies are camelCase.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{HrError, HrResult};
use crate::models::{EmployeePatch, Role};

/// Body for `POST /api/employees/new`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployeeRequest {
    /// The employee's display name.
    pub employee_name: String,
    /// Organization-assigned identifier, unique.
    pub employee_id: String,
    /// Department the employee belongs to.
    pub department: String,
    /// Job title.
    pub position: String,
    /// Fixed salary component; zero when omitted.
    #[serde(default)]
    pub base_pay: Decimal,
}

/// Body for `POST /api/employees/update`: the target id plus the partial
/// fields to merge.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEmployeeRequest {
    /// Document id of the employee to update.
    pub id: Uuid,
    /// The fields to change; everything absent stays untouched.
    #[serde(flatten)]
    pub patch: EmployeePatch,
}

/// Body for `POST /api/employees/delete`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteEmployeeRequest {
    /// Document id of the employee to remove.
    pub id: Uuid,
}

/// Body for `POST /api/leaves/apply`.
///
/// Dates arrive as strings and are normalized to calendar dates before
/// persisting; see [`parse_leave_date`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyLeaveRequest {
    /// Document id of the employee applying.
    pub employee_id: String,
    /// The type of leave requested.
    pub leave_type: String,
    /// Free-text reason.
    pub reason: String,
    /// First day of leave.
    pub start_date: String,
    /// Last day of leave.
    pub end_date: String,
}

/// Body for `POST /api/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// The user's full display name.
    pub full_name: String,
    /// Email address, unique.
    pub email: String,
    /// Username, unique.
    pub username: String,
    /// Plaintext password; hashed before it is stored.
    pub password: String,
    /// Requested role; defaults to employee when omitted.
    #[serde(default)]
    pub role: Option<Role>,
}

/// Body for `POST /api/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Email or username.
    pub identifier: String,
    /// Plaintext password.
    pub password: String,
    /// The role the caller is logging in as; must match the stored role.
    pub role: Role,
}

/// Query string for `GET /api/me/details`.
#[derive(Debug, Clone, Deserialize)]
pub struct MeDetailsQuery {
    /// The logged-in username (doubles as the employeeId to look up).
    pub username: Option<String>,
}

/// Query string for `GET /api/leaves/my-leaves`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyLeavesQuery {
    /// Document id of the employee whose applications to list.
    pub employee_id: String,
}

/// Normalizes a leave date to a calendar date (year-month-day, no time).
///
/// Accepts a plain `YYYY-MM-DD` date or a full RFC 3339 timestamp, whose
/// time component is dropped. Blank or unparseable input is a validation
/// error.
pub fn parse_leave_date(field: &str, value: &str) -> HrResult<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return Err(HrError::validation(format!("{field} is required")));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .map_err(|_| HrError::validation(format!("{field} is not a valid date: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_employee_from_camel_case() {
        let json = r#"{
            "employeeName": "Bob",
            "employeeId": "EMP001",
            "department": "Engineering",
            "position": "Developer",
            "basePay": 50000
        }"#;

        let request: NewEmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_name, "Bob");
        assert_eq!(request.base_pay, Decimal::from(50_000));
    }

    #[test]
    fn test_new_employee_base_pay_defaults_to_zero() {
        let json = r#"{
            "employeeName": "Bob",
            "employeeId": "EMP001",
            "department": "Engineering",
            "position": "Developer"
        }"#;

        let request: NewEmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.base_pay, Decimal::ZERO);
    }

    #[test]
    fn test_update_flattens_patch_fields() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"id":"{id}","basePay":5000,"department":"Finance"}}"#);

        let request: UpdateEmployeeRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.id, id);
        assert_eq!(request.patch.base_pay, Some(Decimal::from(5_000)));
        assert_eq!(request.patch.department.as_deref(), Some("Finance"));
        assert!(request.patch.employee_name.is_none());
    }

    #[test]
    fn test_register_role_is_optional() {
        let json = r#"{
            "full_name": "Alice Example",
            "email": "alice@example.com",
            "username": "alice",
            "password": "correct-horse"
        }"#;

        let request: RegisterRequest = serde_json::from_str(json).unwrap();
        assert!(request.role.is_none());
    }

    #[test]
    fn test_login_requires_role() {
        let json = r#"{"identifier":"alice","password":"pw"}"#;
        let result: Result<LoginRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_leave_date_plain() {
        let date = parse_leave_date("startDate", "2025-01-10").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
    }

    #[test]
    fn test_parse_leave_date_drops_time_component() {
        let date = parse_leave_date("startDate", "2025-01-10T14:30:00Z").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
    }

    #[test]
    fn test_parse_leave_date_blank_is_validation_error() {
        let result = parse_leave_date("startDate", "  ");
        assert!(matches!(result, Err(HrError::Validation { .. })));
    }

    #[test]
    fn test_parse_leave_date_garbage_is_validation_error() {
        let result = parse_leave_date("endDate", "next tuesday");
        assert!(matches!(result, Err(HrError::Validation { .. })));
    }
}
