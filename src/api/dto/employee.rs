//! DTOs for the employee endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Employee, NewEmployee};

/// Request body for `POST /api/v1/employees` and `PUT /api/v1/employees/{id}`.
///
/// Any `id` in the body is ignored: the store assigns identifiers on create and
/// the path identifies the record on update.
#[derive(Debug, Deserialize, Validate)]
pub struct EmployeeRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    pub salary: i32,

    #[validate(length(min = 1, max = 255, message = "Department must be 1-255 characters"))]
    pub department: String,
}

impl EmployeeRequest {
    pub fn into_new_employee(self) -> NewEmployee {
        NewEmployee {
            name: self.name,
            salary: self.salary,
            department: self.department,
        }
    }

    pub fn into_employee(self, id: i64) -> Employee {
        Employee::new(id, self.name, self.salary, self.department)
    }
}

/// JSON representation of an employee.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeResponse {
    pub id: i64,
    pub name: String,
    pub salary: i32,
    pub department: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            salary: employee.salary,
            department: employee.department,
        }
    }
}
