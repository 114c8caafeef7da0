//! Employee cache trait and supporting types.

use crate::domain::entities::Employee;

/// Snapshot of the cache's invalidation counter.
///
/// Taken before a backing-store fetch and handed back when storing the result.
/// Any invalidation between the two bumps the counter, so a fill carrying an older
/// generation is discarded instead of resurrecting pre-invalidation data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CacheGeneration(pub(crate) u64);

/// Point-in-time cache occupancy, reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub enabled: bool,
    pub entries: usize,
    pub collection_cached: bool,
}

/// In-process cache for employee reads.
///
/// Holds two logical caches: the whole ordered collection and a per-identifier map.
/// Entries are only ever removed by explicit invalidation. Absent lookups are never
/// cached.
///
/// Implementations must be thread-safe: concurrent readers never observe a partially
/// applied write, and an invalidation is visible to every read issued after it
/// returns.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::InMemoryEmployeeCache`] - `RwLock<HashMap>` backed cache
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
pub trait EmployeeCache: Send + Sync {
    /// Returns the current generation. Call before fetching from the backing store.
    fn generation(&self) -> CacheGeneration;

    /// Returns the cached collection, if present.
    fn get_all(&self) -> Option<Vec<Employee>>;

    /// Caches the collection unless an invalidation happened after `generation`.
    ///
    /// Returns `true` if the value was stored.
    fn put_all(&self, generation: CacheGeneration, employees: Vec<Employee>) -> bool;

    /// Returns the cached employee for `id`, if present.
    fn get(&self, id: i64) -> Option<Employee>;

    /// Caches a single employee unless an invalidation happened after `generation`.
    ///
    /// Returns `true` if the value was stored.
    fn put(&self, generation: CacheGeneration, employee: Employee) -> bool;

    /// Removes the per-identifier entry for `id`.
    fn invalidate(&self, id: i64);

    /// Removes the cached collection.
    fn invalidate_all(&self);

    /// Reports cache occupancy.
    fn stats(&self) -> CacheStats;
}
