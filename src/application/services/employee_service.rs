//! Read-through, write-invalidate employee service.

use std::sync::Arc;

use crate::domain::entities::{Employee, NewEmployee};
use crate::domain::repositories::EmployeeRepository;
use crate::error::AppError;
use crate::infrastructure::cache::{CacheStats, EmployeeCache};
use serde_json::json;

/// Employee operations with caching in front of the backing store.
///
/// Reads are served from the injected [`EmployeeCache`] when possible and populate
/// it on a miss. Every mutation writes to the repository first and then invalidates
/// the affected entries:
///
/// | Operation  | Per-id entry | Collection |
/// |------------|--------------|------------|
/// | `save`     | untouched    | cleared    |
/// | `update`   | cleared      | cleared    |
/// | `delete`   | cleared      | cleared    |
///
/// Absent lookups are not cached, so a freshly saved id can never be shadowed by a
/// cached miss.
pub struct EmployeeService<R: EmployeeRepository + ?Sized> {
    repository: Arc<R>,
    cache: Arc<dyn EmployeeCache>,
}

impl<R: EmployeeRepository + ?Sized> EmployeeService<R> {
    /// Creates a new employee service.
    pub fn new(repository: Arc<R>, cache: Arc<dyn EmployeeCache>) -> Self {
        Self { repository, cache }
    }

    /// Returns all employees ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_all(&self) -> Result<Vec<Employee>, AppError> {
        if let Some(employees) = self.cache.get_all() {
            return Ok(employees);
        }

        let generation = self.cache.generation();
        let employees = self.repository.find_all().await?;
        self.cache.put_all(generation, employees.clone());

        Ok(employees)
    }

    /// Retrieves an employee by identifier.
    ///
    /// Returns `Ok(None)` when no such employee exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        if let Some(employee) = self.cache.get(id) {
            return Ok(Some(employee));
        }

        let generation = self.cache.generation();
        let employee = self.repository.find_by_id(id).await?;
        if let Some(employee) = &employee {
            self.cache.put(generation, employee.clone());
        }

        Ok(employee)
    }

    /// Creates an employee and returns its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn save(&self, new_employee: NewEmployee) -> Result<i64, AppError> {
        let result = self.repository.insert(new_employee).await;
        self.cache.invalidate_all();
        let employee = result?;

        tracing::debug!(id = employee.id, "Employee created");
        Ok(employee.id)
    }

    /// Replaces an existing employee.
    ///
    /// Checks existence itself, so it is safe to call after the caller has already
    /// verified the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no employee has `employee.id`; nothing is
    /// written in that case.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update(&self, employee: Employee) -> Result<(), AppError> {
        let id = employee.id;

        if !self.repository.exists_by_id(id).await? {
            return Err(AppError::not_found(
                format!("Employee with ID {} does not exist.", id),
                json!({ "id": id }),
            ));
        }

        // Invalidate even if the write reports failure: it may still have landed.
        let result = self.repository.update(employee).await;
        self.cache.invalidate(id);
        self.cache.invalidate_all();

        result.map(|_| ())
    }

    /// Deletes an employee.
    ///
    /// Returns `Ok(false)` without touching the store or the cache when the
    /// employee does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        if !self.repository.exists_by_id(id).await? {
            return Ok(false);
        }

        let result = self.repository.delete_by_id(id).await;
        self.cache.invalidate(id);
        self.cache.invalidate_all();
        result?;

        Ok(true)
    }

    /// Reports cache occupancy.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
