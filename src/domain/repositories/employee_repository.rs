//! Repository trait for employee data access.

use crate::domain::entities::{Employee, NewEmployee};
use crate::error::AppError;
use async_trait::async_trait;

/// Backing store for employee records.
///
/// This is the source of truth that [`crate::application::services::EmployeeService`]
/// caches in front of.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgEmployeeRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryEmployeeRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Returns every employee ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_all(&self) -> Result<Vec<Employee>, AppError>;

    /// Finds an employee by identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Employee))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError>;

    /// Checks whether an employee with the given identifier exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Stores a new employee and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_employee: NewEmployee) -> Result<Employee, AppError>;

    /// Overwrites the stored employee with the same identifier.
    ///
    /// Callers verify existence first; implementations report a missing row as
    /// [`AppError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, employee: Employee) -> Result<Employee, AppError>;

    /// Deletes an employee by identifier. Deleting a missing row is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
