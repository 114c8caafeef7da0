//! Core domain entities.
//!
//! Entities are plain data structures. Following the "New Type" pattern, creation
//! input lives in a separate struct:
//!
//! - [`Employee`] - a stored employee record
//! - [`NewEmployee`] - an employee that has not been assigned an identifier yet

pub mod employee;

pub use employee::{Employee, NewEmployee};
