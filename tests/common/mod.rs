#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use employee_directory::application::services::{AuthService, EmployeeService};
use employee_directory::domain::entities::{Employee, NewEmployee};
use employee_directory::domain::repositories::EmployeeRepository;
use employee_directory::infrastructure::cache::{EmployeeCache, InMemoryEmployeeCache};
use employee_directory::infrastructure::persistence::InMemoryEmployeeRepository;
use employee_directory::routes::api_router;
use employee_directory::state::AppState;
use std::sync::Arc;

pub const USERNAME: &str = "axa";
pub const PASSWORD: &str = "axa-secret";

/// State over an in-memory store and cache, returned with handles to both.
pub fn create_test_state() -> (
    AppState,
    Arc<InMemoryEmployeeRepository>,
    Arc<InMemoryEmployeeCache>,
) {
    let repository = Arc::new(InMemoryEmployeeRepository::new());
    let cache = Arc::new(InMemoryEmployeeCache::new());

    let store: Arc<dyn EmployeeRepository> = repository.clone();
    let employee_cache: Arc<dyn EmployeeCache> = cache.clone();

    let employee_service = Arc::new(EmployeeService::new(store, employee_cache));
    let auth_service = Arc::new(AuthService::new(USERNAME, PASSWORD));

    (
        AppState::new(employee_service, auth_service, None),
        repository,
        cache,
    )
}

/// Test server exposing the authenticated API under `/api/v1`.
pub fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .nest("/api/v1", api_router(state.clone()))
        .with_state(state);
    TestServer::new(app).unwrap()
}

pub fn basic_auth(username: &str, password: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", username, password))
    )
}

pub fn auth_header() -> String {
    basic_auth(USERNAME, PASSWORD)
}

pub fn new_employee(name: &str, salary: i32, department: &str) -> NewEmployee {
    NewEmployee {
        name: name.to_string(),
        salary,
        department: department.to_string(),
    }
}

pub async fn seed_employee(
    repository: &InMemoryEmployeeRepository,
    name: &str,
    salary: i32,
    department: &str,
) -> Employee {
    repository
        .insert(new_employee(name, salary, department))
        .await
        .unwrap()
}
