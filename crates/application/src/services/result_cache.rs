use std::collections::HashMap;
use std::future::Future;
use std::sync::RwLock;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

struct CachedEntry<V> {
    value: V,
    expires_at: Instant,
}

/// Short-lived keyed result cache, refreshed lazily on miss.
///
/// Concurrent misses are serialised through `refresh_lock` so an expensive
/// refresh runs once; later callers find the fresh entry on the re-check.
pub struct ResultCache<V> {
    entries: RwLock<HashMap<String, CachedEntry<V>>>,
    refresh_lock: Mutex<()>,
}

impl<V: Clone> ResultCache<V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        let guard = self.entries.read().unwrap_or_else(|e| e.into_inner());
        guard
            .get(key)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.value.clone())
    }

    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let mut guard = self.entries.write().unwrap_or_else(|e| e.into_inner());
        guard.insert(
            key.into(),
            CachedEntry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
    }

    /// Returns the cached value for `key`, or runs `refresh` and caches its
    /// result for `ttl`. Failed refreshes are not cached.
    pub async fn get_or_refresh<F, Fut, E>(
        &self,
        key: &str,
        ttl: Duration,
        refresh: F,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }

        let _lock = self.refresh_lock.lock().await;

        if let Some(value) = self.get(key) {
            return Ok(value);
        }

        let value = refresh().await?;
        self.set(key, value.clone(), ttl);
        Ok(value)
    }
}

impl<V: Clone> Default for ResultCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
