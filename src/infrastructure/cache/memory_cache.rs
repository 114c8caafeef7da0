//! `RwLock<HashMap>` backed employee cache.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::service::{CacheGeneration, CacheStats, EmployeeCache};
use crate::domain::entities::Employee;
use tracing::debug;

#[derive(Default)]
struct CacheState {
    generation: u64,
    collection: Option<Vec<Employee>>,
    by_id: HashMap<i64, Employee>,
}

/// Process-local employee cache.
///
/// All state sits behind one `RwLock` so that the generation check and the insert
/// of a fill happen atomically with respect to invalidation. Reads take the shared
/// lock only; the service itself holds no lock across backing-store calls.
#[derive(Default)]
pub struct InMemoryEmployeeCache {
    state: RwLock<CacheState>,
}

impl InMemoryEmployeeCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        debug!("Using in-memory employee cache");
        Self::default()
    }

    /// Number of per-identifier entries currently cached.
    pub fn len(&self) -> usize {
        self.read().by_id.len()
    }

    /// Returns true if neither the collection nor any single employee is cached.
    pub fn is_empty(&self) -> bool {
        let state = self.read();
        state.by_id.is_empty() && state.collection.is_none()
    }

    fn read(&self) -> RwLockReadGuard<'_, CacheState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CacheState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EmployeeCache for InMemoryEmployeeCache {
    fn generation(&self) -> CacheGeneration {
        CacheGeneration(self.read().generation)
    }

    fn get_all(&self) -> Option<Vec<Employee>> {
        let hit = self.read().collection.clone();
        match &hit {
            Some(employees) => {
                debug!(count = employees.len(), "Cache HIT: all employees");
                metrics::counter!("employee_cache_hits_total", "cache" => "employees")
                    .increment(1);
            }
            None => {
                debug!("Cache MISS: all employees");
                metrics::counter!("employee_cache_misses_total", "cache" => "employees")
                    .increment(1);
            }
        }
        hit
    }

    fn put_all(&self, generation: CacheGeneration, employees: Vec<Employee>) -> bool {
        let mut state = self.write();
        if state.generation != generation.0 {
            debug!("Cache SKIP: all employees (invalidated during fetch)");
            return false;
        }
        state.collection = Some(employees);
        true
    }

    fn get(&self, id: i64) -> Option<Employee> {
        let hit = self.read().by_id.get(&id).cloned();
        if hit.is_some() {
            debug!(id, "Cache HIT: employee");
            metrics::counter!("employee_cache_hits_total", "cache" => "employee").increment(1);
        } else {
            debug!(id, "Cache MISS: employee");
            metrics::counter!("employee_cache_misses_total", "cache" => "employee")
                .increment(1);
        }
        hit
    }

    fn put(&self, generation: CacheGeneration, employee: Employee) -> bool {
        let mut state = self.write();
        if state.generation != generation.0 {
            debug!(id = employee.id, "Cache SKIP: employee (invalidated during fetch)");
            return false;
        }
        state.by_id.insert(employee.id, employee);
        true
    }

    fn invalidate(&self, id: i64) {
        let mut state = self.write();
        state.generation += 1;
        if state.by_id.remove(&id).is_some() {
            debug!(id, "Cache INVALIDATE: employee");
        }
        metrics::counter!("employee_cache_invalidations_total", "cache" => "employee")
            .increment(1);
    }

    fn invalidate_all(&self) {
        let mut state = self.write();
        state.generation += 1;
        if state.collection.take().is_some() {
            debug!("Cache INVALIDATE: all employees");
        }
        metrics::counter!("employee_cache_invalidations_total", "cache" => "employees")
            .increment(1);
    }

    fn stats(&self) -> CacheStats {
        let state = self.read();
        CacheStats {
            enabled: true,
            entries: state.by_id.len(),
            collection_cached: state.collection.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn john() -> Employee {
        Employee::new(1, "John Doe".to_string(), 10000, "IT".to_string())
    }

    #[test]
    fn test_put_and_get() {
        let cache = InMemoryEmployeeCache::new();
        assert!(cache.is_empty());

        assert!(cache.put(cache.generation(), john()));

        assert_eq!(cache.get(1), Some(john()));
        assert!(cache.get(2).is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_invalidate_removes_only_that_id() {
        let cache = InMemoryEmployeeCache::new();
        let other = Employee::new(2, "Jane Roe".to_string(), 9000, "HR".to_string());
        cache.put(cache.generation(), john());
        cache.put(cache.generation(), other.clone());

        cache.invalidate(1);

        assert!(cache.get(1).is_none());
        assert_eq!(cache.get(2), Some(other));
    }

    #[test]
    fn test_invalidate_all_keeps_single_entries() {
        let cache = InMemoryEmployeeCache::new();
        cache.put(cache.generation(), john());
        cache.put_all(cache.generation(), vec![john()]);
        assert!(cache.stats().collection_cached);

        cache.invalidate_all();

        assert!(cache.get_all().is_none());
        assert_eq!(cache.get(1), Some(john()));
    }

    #[test]
    fn test_fill_started_before_invalidation_is_discarded() {
        let cache = InMemoryEmployeeCache::new();

        let before = cache.generation();
        cache.invalidate(1);

        assert!(!cache.put(before, john()));
        assert!(cache.get(1).is_none());

        assert!(!cache.put_all(before, vec![john()]));
        assert!(cache.get_all().is_none());
    }

    #[test]
    fn test_generation_advances_on_invalidation() {
        let cache = InMemoryEmployeeCache::new();
        let first = cache.generation();

        cache.invalidate_all();

        assert!(cache.generation() > first);
    }

    #[test]
    fn test_concurrent_fills_leave_single_entry() {
        let cache = Arc::new(InMemoryEmployeeCache::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    let generation = cache.generation();
                    cache.put(generation, john());
                    cache.get(1)
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(john()));
        }
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(1), Some(john()));
    }
}
