//! No-op cache implementation for disabled caching.

use super::service::{CacheGeneration, CacheStats, EmployeeCache};
use crate::domain::entities::Employee;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Selected when `CACHE_ENABLED=false`. Every read is a miss, so the service
/// always goes to the backing store.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeCache for NullCache {
    fn generation(&self) -> CacheGeneration {
        CacheGeneration(0)
    }

    fn get_all(&self) -> Option<Vec<Employee>> {
        None
    }

    fn put_all(&self, _generation: CacheGeneration, _employees: Vec<Employee>) -> bool {
        false
    }

    fn get(&self, _id: i64) -> Option<Employee> {
        None
    }

    fn put(&self, _generation: CacheGeneration, _employee: Employee) -> bool {
        false
    }

    fn invalidate(&self, _id: i64) {}

    fn invalidate_all(&self) {}

    fn stats(&self) -> CacheStats {
        CacheStats {
            enabled: false,
            entries: 0,
            collection_cached: false,
        }
    }
}
