//! Employee record model and salary structure line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named salary adjustment line item (allowance or deduction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayComponent {
    /// Display name of the line item (e.g. "HRA", "Tax").
    pub name: String,
    /// The amount of the adjustment.
    pub amount: Decimal,
}

/// Remaining allotted leave days for one leave type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalance {
    /// The leave type this balance applies to (e.g. "Casual").
    pub leave_type: String,
    /// Remaining days.
    pub balance: u32,
}

/// An employee record.
///
/// `basePay`, `allowances` and `deductions` all default when absent so older
/// documents without a salary structure still deserialize; net salary is
/// derived from them (see [`crate::salary::net_salary`]) and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store document id.
    pub id: Uuid,
    /// The employee's display name.
    pub employee_name: String,
    /// Organization-assigned identifier, unique across employees.
    pub employee_id: String,
    /// Department the employee belongs to.
    pub department: String,
    /// Job title.
    pub position: String,
    /// Fixed salary component before allowances/deductions.
    #[serde(default)]
    pub base_pay: Decimal,
    /// Ordered allowance line items.
    #[serde(default)]
    pub allowances: Vec<PayComponent>,
    /// Ordered deduction line items.
    #[serde(default)]
    pub deductions: Vec<PayComponent>,
    /// Remaining leave days per leave type.
    #[serde(default)]
    pub leave_balances: Vec<LeaveBalance>,
}

impl Employee {
    /// Creates a new employee record with the default leave balances
    /// (12 Casual, 6 Sick) and an empty salary structure.
    pub fn new(
        employee_name: String,
        employee_id: String,
        department: String,
        position: String,
        base_pay: Decimal,
    ) -> Self {
        Employee {
            id: Uuid::new_v4(),
            employee_name,
            employee_id,
            department,
            position,
            base_pay,
            allowances: Vec::new(),
            deductions: Vec::new(),
            leave_balances: Self::default_leave_balances(),
        }
    }

    /// The leave balances every new employee starts with.
    pub fn default_leave_balances() -> Vec<LeaveBalance> {
        vec![
            LeaveBalance {
                leave_type: "Casual".to_string(),
                balance: 12,
            },
            LeaveBalance {
                leave_type: "Sick".to_string(),
                balance: 6,
            },
        ]
    }
}

/// A partial update to an employee record.
///
/// Every field is optional; only supplied fields are merged into the stored
/// record. Fields absent from the request are left untouched, never cleared.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    /// New display name, if supplied.
    pub employee_name: Option<String>,
    /// New organization identifier, if supplied.
    pub employee_id: Option<String>,
    /// New department, if supplied.
    pub department: Option<String>,
    /// New position, if supplied.
    pub position: Option<String>,
    /// New base pay, if supplied.
    pub base_pay: Option<Decimal>,
    /// Replacement allowance list, if supplied.
    pub allowances: Option<Vec<PayComponent>>,
    /// Replacement deduction list, if supplied.
    pub deductions: Option<Vec<PayComponent>>,
    /// Replacement leave balances, if supplied.
    pub leave_balances: Option<Vec<LeaveBalance>>,
}

impl EmployeePatch {
    /// Merges the supplied fields into `employee`.
    pub fn apply(self, employee: &mut Employee) {
        if let Some(name) = self.employee_name {
            employee.employee_name = name;
        }
        if let Some(id) = self.employee_id {
            employee.employee_id = id;
        }
        if let Some(department) = self.department {
            employee.department = department;
        }
        if let Some(position) = self.position {
            employee.position = position;
        }
        if let Some(base_pay) = self.base_pay {
            employee.base_pay = base_pay;
        }
        if let Some(allowances) = self.allowances {
            employee.allowances = allowances;
        }
        if let Some(deductions) = self.deductions {
            employee.deductions = deductions;
        }
        if let Some(balances) = self.leave_balances {
            employee.leave_balances = balances;
        }
    }
}
