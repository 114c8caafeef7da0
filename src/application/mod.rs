//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::employee_service::EmployeeService`] - Cached employee reads and invalidating writes
//! - [`services::auth_service::AuthService`] - HTTP basic credential checks

pub mod services;
