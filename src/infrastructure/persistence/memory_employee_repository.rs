//! Process-local employee repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Employee, NewEmployee};
use crate::domain::repositories::EmployeeRepository;
use crate::error::AppError;

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Employee>,
}

/// Employee storage held in process memory.
///
/// Identifiers start at 1 and are never reused, matching an identity column.
/// Contents are lost when the process exits.
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    table: RwLock<Table>,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.table.read().await.rows.contains_key(&id))
    }

    async fn insert(&self, new_employee: NewEmployee) -> Result<Employee, AppError> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let employee = new_employee.with_id(table.next_id);
        table.rows.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn update(&self, employee: Employee) -> Result<Employee, AppError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&employee.id) {
            Some(row) => {
                *row = employee.clone();
                Ok(employee)
            }
            None => Err(AppError::not_found(
                format!("Employee with ID {} does not exist.", employee.id),
                json!({ "id": employee.id }),
            )),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_employee(name: &str) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            salary: 10000,
            department: "IT".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = InMemoryEmployeeRepository::new();

        let first = repo.insert(new_employee("John Doe")).await.unwrap();
        let second = repo.insert(new_employee("Jane Roe")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.find_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryEmployeeRepository::new();
        let first = repo.insert(new_employee("John Doe")).await.unwrap();

        repo.delete_by_id(first.id).await.unwrap();
        let second = repo.insert(new_employee("Jane Roe")).await.unwrap();

        assert_eq!(second.id, 2);
        assert!(!repo.exists_by_id(first.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let repo = InMemoryEmployeeRepository::new();

        let result = repo
            .update(Employee::new(99, "Ghost".to_string(), 0, "None".to_string()))
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_overwrites_row() {
        let repo = InMemoryEmployeeRepository::new();
        let employee = repo.insert(new_employee("John Doe")).await.unwrap();

        let changed = Employee::new(employee.id, "John Doe".to_string(), 12000, "HR".to_string());
        repo.update(changed.clone()).await.unwrap();

        assert_eq!(repo.find_by_id(employee.id).await.unwrap(), Some(changed));
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let repo = InMemoryEmployeeRepository::new();
        assert!(repo.delete_by_id(5).await.is_ok());
    }
}
