//! API route configuration.
//!
//! All API endpoints require HTTP basic authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_employee_handler, delete_employee_handler, get_employee_handler,
    list_employees_handler, update_employee_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Employee routes, mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `GET    /employees`                 - List all employees
/// - `POST   /employees`                 - Create an employee
/// - `GET    /employees/{employee_id}`   - Fetch one employee
/// - `PUT    /employees/{employee_id}`   - Replace an employee's fields
/// - `DELETE /employees/{employee_id}`   - Delete an employee
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/employees/{employee_id}",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
}
