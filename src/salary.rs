//! Net salary computation.
//!
//! Net salary is a derived value, never stored on the employee record:
//!
//! ```text
//! net = basePay + sum(allowances.amount) - sum(deductions.amount)
//! ```

use rust_decimal::Decimal;

use crate::models::Employee;

/// Computes the net salary for an employee.
///
/// Missing salary structure is not an error: a defaulted `basePay`
/// contributes zero and empty component lists contribute nothing, so the
/// net of a bare record is zero.
///
/// # Example
///
/// ```
/// use hr_core::models::{Employee, PayComponent};
/// use hr_core::salary::net_salary;
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee::new(
///     "Bob".to_string(),
///     "EMP001".to_string(),
///     "Engineering".to_string(),
///     "Developer".to_string(),
///     Decimal::from(50_000),
/// );
/// employee.allowances.push(PayComponent {
///     name: "HRA".to_string(),
///     amount: Decimal::from(5_000),
/// });
/// employee.deductions.push(PayComponent {
///     name: "Tax".to_string(),
///     amount: Decimal::from(7_500),
/// });
///
/// assert_eq!(net_salary(&employee), Decimal::from(47_500));
/// ```
pub fn net_salary(employee: &Employee) -> Decimal {
    let allowances: Decimal = employee.allowances.iter().map(|c| c.amount).sum();
    let deductions: Decimal = employee.deductions.iter().map(|c| c.amount).sum();
    employee.base_pay + allowances - deductions
}
