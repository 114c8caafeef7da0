//! Employee entity.

use serde::{Deserialize, Serialize};

/// A persisted employee record.
///
/// The `id` is assigned by the backing store when the record is first saved and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub salary: i32,
    pub department: String,
}

impl Employee {
    /// Creates a new Employee instance.
    pub fn new(id: i64, name: String, salary: i32, department: String) -> Self {
        Self {
            id,
            name,
            salary,
            department,
        }
    }
}

/// Input data for creating an employee. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub salary: i32,
    pub department: String,
}

impl NewEmployee {
    /// Attaches a store-assigned identifier.
    pub fn with_id(self, id: i64) -> Employee {
        Employee::new(id, self.name, self.salary, self.department)
    }
}
