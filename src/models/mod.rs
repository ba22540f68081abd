//! Core data models for the HR system.
//!
//! This module contains the documents persisted by the store layer:
//! user accounts, employee records, and leave applications.

mod employee;
mod leave;
mod user;

pub use employee::{Employee, EmployeePatch, LeaveBalance, PayComponent};
pub use leave::{LeaveApplication, LeaveStatus};
pub use user::{Role, UserAccount};
