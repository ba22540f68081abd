//! Leave application model and status enum.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a leave application.
///
/// No exposed operation transitions this state: there is no approve/reject
/// endpoint in the current contract, so applications stay `Pending`. The
/// other variants exist as data states only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveStatus {
    /// Submitted, awaiting a decision.
    Pending,
    /// Approved by HR.
    Approved,
    /// Rejected by HR.
    Rejected,
}

/// A leave application submitted by an employee.
///
/// `employee` is the document id of the employee record; it is a referential
/// hint, not an enforced foreign key. Applications are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplication {
    /// Store document id.
    pub id: Uuid,
    /// Document id of the employee this application belongs to.
    pub employee: String,
    /// The type of leave requested (e.g. "Casual", "Sick").
    pub leave_type: String,
    /// Free-text reason for the leave.
    pub reason: String,
    /// First day of leave, calendar date only.
    pub start_date: NaiveDate,
    /// Last day of leave, calendar date only.
    pub end_date: NaiveDate,
    /// Current status; defaults to `Pending` on creation.
    pub status: LeaveStatus,
    /// When the application was submitted.
    pub applied_on: DateTime<Utc>,
}

impl LeaveApplication {
    /// Creates a new pending application stamped with the current time.
    pub fn new(
        employee: String,
        leave_type: String,
        reason: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        LeaveApplication {
            id: Uuid::new_v4(),
            employee,
            leave_type,
            reason,
            start_date,
            end_date,
            status: LeaveStatus::Pending,
            applied_on: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_application() -> LeaveApplication {
        LeaveApplication::new(
            "emp-doc-1".to_string(),
            "Casual".to_string(),
            "family trip".to_string(),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
        )
    }

    #[test]
    fn test_new_application_is_pending() {
        let application = create_test_application();
        assert_eq!(application.status, LeaveStatus::Pending);
    }

    #[test]
    fn test_status_serializes_capitalized() {
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Pending).unwrap(),
            "\"Pending\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Approved).unwrap(),
            "\"Approved\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Rejected).unwrap(),
            "\"Rejected\""
        );
    }

    #[test]
    fn test_dates_serialize_as_calendar_dates() {
        let application = create_test_application();
        let json = serde_json::to_string(&application).unwrap();
        assert!(json.contains("\"startDate\":\"2025-01-10\""));
        assert!(json.contains("\"endDate\":\"2025-01-12\""));
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let application = create_test_application();
        let json = serde_json::to_string(&application).unwrap();
        assert!(json.contains("\"leaveType\""));
        assert!(json.contains("\"appliedOn\""));
    }

    #[test]
    fn test_round_trip() {
        let application = create_test_application();
        let json = serde_json::to_string(&application).unwrap();
        let back: LeaveApplication = serde_json::from_str(&json).unwrap();
        assert_eq!(application, back);
    }
}
