//! Backing store implementations.
//!
//! # Repositories
//!
//! - [`PgEmployeeRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryEmployeeRepository`] - process-local storage used when no database
//!   is configured, and in tests

pub mod memory_employee_repository;
pub mod pg_employee_repository;

pub use memory_employee_repository::InMemoryEmployeeRepository;
pub use pg_employee_repository::PgEmployeeRepository;
