//! Infrastructure layer.
//!
//! Implements interfaces defined by the domain layer, providing concrete
//! implementations for data persistence and caching.
//!
//! # Modules
//!
//! - [`cache`] - In-process employee cache and its no-op counterpart
//! - [`persistence`] - PostgreSQL and in-memory repository implementations

pub mod cache;
pub mod persistence;
