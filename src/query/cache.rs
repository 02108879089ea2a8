//! Process-wide query cache, passed around explicitly as a service object.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant};

use crate::domain::entity::EntityKind;
use crate::query::key::QueryKey;
use crate::repository::errors::RepositoryResult;

struct CacheEntry {
    value: Arc<dyn Any + Send + Sync>,
    stored_at: Instant,
}

/// Results keyed by [`QueryKey`], fresh for a fixed time-to-live.
///
/// Concurrent fetches of one key are serialised through a per-key gate, so
/// callers asking for the same key share a single request and its result.
pub struct QueryCache {
    ttl: Duration,
    entries: RwLock<HashMap<QueryKey, CacheEntry>>,
    gates: Mutex<HashMap<QueryKey, Arc<tokio::sync::Mutex<()>>>>,
}

impl QueryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
            gates: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached value if it is fresh and of type `V`.
    pub fn get<V>(&self, key: &QueryKey) -> Option<V>
    where
        V: Clone + Send + Sync + 'static,
    {
        let entries = self
            .entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let entry = entries.get(key)?;
        if entry.stored_at.elapsed() >= self.ttl {
            return None;
        }
        entry.value.downcast_ref::<V>().cloned()
    }

    /// Stores `value` under `key`, dropping every expired entry first.
    pub fn insert<V>(&self, key: QueryKey, value: V)
    where
        V: Send + Sync + 'static,
    {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let ttl = self.ttl;
        entries.retain(|_, entry| entry.stored_at.elapsed() < ttl);
        entries.insert(
            key,
            CacheEntry {
                value: Arc::new(value),
                stored_at: Instant::now(),
            },
        );
    }

    /// Drops one key. Returns whether anything was cached under it.
    pub fn invalidate(&self, key: &QueryKey) -> bool {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let removed = entries.remove(key).is_some();
        if removed {
            log::debug!("Invalidated {key}");
        }
        removed
    }

    /// Drops every key of the given entity, list and detail alike.
    pub fn invalidate_entity(&self, entity: EntityKind) -> usize {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = entries.len();
        entries.retain(|key, _| key.entity() != entity);
        let removed = before - entries.len();
        log::debug!("Invalidated {removed} cached {entity} queries");
        removed
    }

    /// Whether a fetch for `key` is currently running.
    pub fn is_loading(&self, key: &QueryKey) -> bool {
        let gates = self
            .gates
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        gates.get(key).is_some_and(|gate| gate.try_lock().is_err())
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn gate(&self, key: &QueryKey) -> Arc<tokio::sync::Mutex<()>> {
        let mut gates = self
            .gates
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(gates.entry(key.clone()).or_default())
    }

    fn release_gate(&self, key: &QueryKey, gate: Arc<tokio::sync::Mutex<()>>) {
        let mut gates = self
            .gates
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // One reference is held by the map, one by `gate`.
        if Arc::strong_count(&gate) <= 2 {
            gates.remove(key);
        }
    }

    /// Returns the fresh cached value for `key` or runs `fetch` and caches
    /// its result. Failures are not cached.
    pub async fn fetch<V, F, Fut>(&self, key: &QueryKey, fetch: F) -> RepositoryResult<V>
    where
        V: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = RepositoryResult<V>>,
    {
        if let Some(value) = self.get::<V>(key) {
            return Ok(value);
        }

        let gate = self.gate(key);
        let result = {
            let _guard = gate.lock().await;
            match self.get::<V>(key) {
                Some(value) => Ok(value),
                None => {
                    let fetched = fetch().await;
                    if let Ok(value) = &fetched {
                        self.insert(key.clone(), value.clone());
                    }
                    fetched
                }
            }
        };
        self.release_gate(key, gate);
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::domain::listing::ListingQueryState;
    use crate::domain::types::EntityId;
    use crate::repository::errors::RepositoryError;

    fn key(page: u32) -> QueryKey {
        QueryKey::listing(
            EntityKind::Blog,
            &ListingQueryState::default().with_page(page),
        )
    }

    #[test]
    fn values_are_typed() {
        let cache = QueryCache::new(Duration::from_secs(60));
        cache.insert(key(1), 42_u32);

        assert_eq!(cache.get::<u32>(&key(1)), Some(42));
        assert_eq!(cache.get::<String>(&key(1)), None);
        assert_eq!(cache.get::<u32>(&key(2)), None);
    }

    #[test]
    fn expired_values_are_not_returned() {
        let cache = QueryCache::new(Duration::ZERO);
        cache.insert(key(1), 1_u32);
        assert_eq!(cache.get::<u32>(&key(1)), None);
    }

    #[test]
    fn expired_entries_are_dropped_on_insert() {
        let cache = QueryCache::new(Duration::ZERO);
        for page in 1..=500 {
            cache.insert(key(page), page);
        }
        assert_eq!(cache.len(), 1);

        let cache = QueryCache::new(Duration::from_secs(60));
        for page in 1..=5 {
            cache.insert(key(page), page);
        }
        assert_eq!(cache.len(), 5);
    }

    #[test]
    fn invalidate_entity_keeps_other_entities() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let id = EntityId::new("7").unwrap();
        cache.insert(key(1), 1_u32);
        cache.insert(QueryKey::detail(EntityKind::Blog, &id), 2_u32);
        cache.insert(QueryKey::detail(EntityKind::Brand, &id), 3_u32);

        assert_eq!(cache.invalidate_entity(EntityKind::Blog), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(
            cache.get::<u32>(&QueryKey::detail(EntityKind::Brand, &id)),
            Some(3)
        );
        assert!(!cache.invalidate(&key(1)));
    }

    #[actix_web::test]
    async fn fetch_runs_once_per_fresh_key() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let counter = AtomicUsize::new(0);
        let calls = &counter;

        for _ in 0..3 {
            let value = cache
                .fetch(&key(1), move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, RepositoryError>(5_u32)
                })
                .await
                .unwrap();
            assert_eq!(value, 5);
        }

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(!cache.is_loading(&key(1)));
    }

    #[actix_web::test]
    async fn concurrent_fetches_of_one_key_share_a_request() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let counter = AtomicUsize::new(0);
        let calls = &counter;
        let fetch = move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            Ok::<_, RepositoryError>(9_u32)
        };

        let shared = key(3);
        let (a, b) = tokio::join!(cache.fetch(&shared, fetch), cache.fetch(&shared, fetch));

        assert_eq!(a.unwrap(), 9);
        assert_eq!(b.unwrap(), 9);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn failures_are_not_cached() {
        let cache = QueryCache::new(Duration::from_secs(60));

        let failed = cache
            .fetch(&key(1), || async {
                Err::<u32, _>(RepositoryError::ConnectionError("down".into()))
            })
            .await;
        assert!(failed.is_err());
        assert!(cache.is_empty());

        let value = cache
            .fetch(&key(1), || async { Ok::<_, RepositoryError>(1_u32) })
            .await
            .unwrap();
        assert_eq!(value, 1);
    }
}
