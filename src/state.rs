//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, EmployeeService};
use crate::domain::repositories::EmployeeRepository;

/// Employee service over whichever backing store was configured at startup.
pub type DynEmployeeService = EmployeeService<dyn EmployeeRepository>;

#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<DynEmployeeService>,
    pub auth_service: Arc<AuthService>,
    /// Database pool, absent when running on the in-memory store.
    pub db: Option<Arc<PgPool>>,
}

impl AppState {
    pub fn new(
        employee_service: Arc<DynEmployeeService>,
        auth_service: Arc<AuthService>,
        db: Option<Arc<PgPool>>,
    ) -> Self {
        Self {
            employee_service,
            auth_service,
            db,
        }
    }
}
