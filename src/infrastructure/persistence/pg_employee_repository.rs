//! PostgreSQL implementation of the employee repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Employee, NewEmployee};
use crate::domain::repositories::EmployeeRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    employee_name: String,
    employee_salary: i32,
    department: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee::new(row.id, row.employee_name, row.employee_salary, row.department)
    }
}

/// PostgreSQL repository for employee records.
///
/// Uses SQLx prepared statements for SQL injection protection and type safety.
pub struct PgEmployeeRepository {
    pool: Arc<PgPool>,
}

impl PgEmployeeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, employee_name, employee_salary, department
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, employee_name, employee_salary, department
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Employee::from))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM employees WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn insert(&self, new_employee: NewEmployee) -> Result<Employee, AppError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            INSERT INTO employees (employee_name, employee_salary, department)
            VALUES ($1, $2, $3)
            RETURNING id, employee_name, employee_salary, department
            "#,
        )
        .bind(new_employee.name)
        .bind(new_employee.salary)
        .bind(new_employee.department)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, employee: Employee) -> Result<Employee, AppError> {
        let id = employee.id;
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            UPDATE employees
            SET employee_name = $2, employee_salary = $3, department = $4
            WHERE id = $1
            RETURNING id, employee_name, employee_salary, department
            "#,
        )
        .bind(employee.id)
        .bind(employee.name)
        .bind(employee.salary)
        .bind(employee.department)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Employee::from).ok_or_else(|| {
            AppError::not_found(
                format!("Employee with ID {} does not exist.", id),
                json!({ "id": id }),
            )
        })
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
