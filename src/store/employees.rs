//! Employee store: persistence for employee records.

use std::path::Path;

use uuid::Uuid;

use crate::error::{HrError, HrResult};
use crate::models::{Employee, EmployeePatch};

use super::collection::Collection;

/// Persists employee records.
pub struct EmployeeStore {
    employees: Collection<Employee>,
}

impl EmployeeStore {
    /// Opens the store backed by `employees.json` under `data_dir`.
    pub async fn open(data_dir: &Path) -> HrResult<Self> {
        Ok(EmployeeStore {
            employees: Collection::open(data_dir.join("employees.json")).await?,
        })
    }

    /// Returns all employees in natural (insertion) order.
    pub async fn list(&self) -> Vec<Employee> {
        self.employees.with_docs(|docs| docs.to_vec()).await
    }

    /// Inserts a new employee, rejecting a duplicate `employeeId`.
    pub async fn insert(&self, employee: Employee) -> HrResult<()> {
        self.employees
            .mutate(|docs| {
                if docs.iter().any(|e| e.employee_id == employee.employee_id) {
                    return Err(HrError::Conflict {
                        entity: "employee",
                        field: "employeeId",
                    });
                }
                docs.push(employee);
                Ok(())
            })
            .await
    }

    /// Merges `patch` into the employee with document id `id`.
    ///
    /// Only supplied fields change; fails with `NotFound` when the id does
    /// not resolve.
    pub async fn update(&self, id: Uuid, patch: EmployeePatch) -> HrResult<Employee> {
        self.employees
            .mutate(|docs| {
                let employee = docs.iter_mut().find(|e| e.id == id).ok_or_else(|| {
                    HrError::NotFound {
                        entity: "employee",
                        id: id.to_string(),
                    }
                })?;
                patch.apply(employee);
                Ok(employee.clone())
            })
            .await
    }

    /// Removes the employee with document id `id`.
    ///
    /// Lenient by contract: deleting an id that does not exist is not an
    /// error. Returns whether a record was actually removed.
    pub async fn delete(&self, id: Uuid) -> HrResult<bool> {
        self.employees
            .mutate(|docs| {
                let before = docs.len();
                docs.retain(|e| e.id != id);
                Ok(docs.len() != before)
            })
            .await
    }

    /// Looks up an employee by the organization-assigned `employeeId`.
    pub async fn find_by_employee_id(&self, employee_id: &str) -> Option<Employee> {
        self.employees
            .with_docs(|docs| docs.iter().find(|e| e.employee_id == employee_id).cloned())
            .await
    }
}
