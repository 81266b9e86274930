use crate::api::models::{OrdersPage, PageQuery};
use crate::api::ApiError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

struct CacheEntry {
    page: Arc<OrdersPage>,
    fetched_at: Instant,
}

/// Successful order fetches keyed by `(page, limit)`.
///
/// Entries expire after `ttl`. Storing one key never touches another, and
/// failed fetches are never stored.
pub struct OrderCache {
    ttl: Duration,
    entries: Mutex<HashMap<PageQuery, CacheEntry>>,
}

impl OrderCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Fresh entry for `key`, if any.
    pub fn get(&self, key: PageQuery) -> Option<Arc<OrdersPage>> {
        self.lock()
            .get(&key)
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.page.clone())
    }

    pub fn insert(&self, key: PageQuery, page: OrdersPage) -> Arc<OrdersPage> {
        let page = Arc::new(page);
        self.lock().insert(
            key,
            CacheEntry {
                page: page.clone(),
                fetched_at: Instant::now(),
            },
        );
        page
    }

    /// Returns the cached page or runs `fetch` and caches its success.
    ///
    /// The lock is not held during `fetch`; two concurrent misses both fetch
    /// and the later result wins.
    pub fn get_or_fetch<F>(&self, key: PageQuery, fetch: F) -> Result<Arc<OrdersPage>, ApiError>
    where
        F: FnOnce() -> Result<OrdersPage, ApiError>,
    {
        if let Some(page) = self.get(key) {
            debug!(page = key.page, limit = key.limit, "order cache hit");
            return Ok(page);
        }

        debug!(page = key.page, limit = key.limit, "order cache miss");
        let page = fetch()?;
        Ok(self.insert(key, page))
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<PageQuery, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
