//! Repository trait definitions for the domain layer.
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod employee_repository;

pub use employee_repository::EmployeeRepository;

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
