//! Caching layer for employee reads.
//!
//! Provides an [`EmployeeCache`] trait with two implementations:
//! - [`InMemoryEmployeeCache`] - Process-local read-through cache
//! - [`NullCache`] - No-op implementation for disabled caching

mod memory_cache;
mod null_cache;
mod service;

pub use memory_cache::InMemoryEmployeeCache;
pub use null_cache::NullCache;
pub use service::{CacheGeneration, CacheStats, EmployeeCache};
