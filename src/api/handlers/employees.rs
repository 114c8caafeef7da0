//! Handlers for employee CRUD endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::employee::{EmployeeRequest, EmployeeResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all employees.
///
/// # Endpoint
///
/// `GET /api/v1/employees`
pub async fn list_employees_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let employees = state.employee_service.list_all().await?;

    Ok(Json(
        employees.into_iter().map(EmployeeResponse::from).collect(),
    ))
}

/// Retrieves a single employee.
///
/// # Endpoint
///
/// `GET /api/v1/employees/{employee_id}`
///
/// # Errors
///
/// Returns 404 Not Found if the employee does not exist.
pub async fn get_employee_handler(
    Path(employee_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<EmployeeResponse>, AppError> {
    state
        .employee_service
        .get_by_id(employee_id)
        .await?
        .map(|employee| Json(employee.into()))
        .ok_or_else(|| AppError::not_found("Employee not found", json!({ "id": employee_id })))
}

/// Creates an employee.
///
/// # Endpoint
///
/// `POST /api/v1/employees`
///
/// # Request Body
///
/// ```json
/// { "name": "John Doe", "salary": 10000, "department": "IT" }
/// ```
///
/// # Response
///
/// 201 Created with a `Location` header pointing at the new record.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn create_employee_handler(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let id = state
        .employee_service
        .save(payload.into_new_employee())
        .await?;

    tracing::info!(id, "Employee saved");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/v1/employees/{}", id))],
    ))
}

/// Replaces an employee's fields.
///
/// # Endpoint
///
/// `PUT /api/v1/employees/{employee_id}`
///
/// The path identifier selects the record; the body carries the new values.
///
/// # Errors
///
/// Returns 404 Not Found if the employee does not exist.
/// Returns 400 Bad Request if validation fails.
pub async fn update_employee_handler(
    Path(employee_id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<EmployeeRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    state
        .employee_service
        .update(payload.into_employee(employee_id))
        .await?;

    tracing::info!(id = employee_id, "Employee updated");

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes an employee.
///
/// # Endpoint
///
/// `DELETE /api/v1/employees/{employee_id}`
///
/// # Errors
///
/// Returns 404 Not Found if the employee does not exist.
pub async fn delete_employee_handler(
    Path(employee_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if !state.employee_service.delete(employee_id).await? {
        return Err(AppError::not_found(
            "Employee not found",
            json!({ "id": employee_id }),
        ));
    }

    tracing::info!(id = employee_id, "Employee deleted");

    Ok(StatusCode::NO_CONTENT)
}
