use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;
use crate::errors::Result;

declare_object_cache_plugin!("moka", MokaCacheWrapper);

pub struct MokaCacheWrapper {
    inner: Cache<String, String>,
}

impl MokaCacheWrapper {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::get();
        let inner = Cache::builder()
            .max_capacity(config.cache.memory.max_capacity)
            .time_to_live(std::time::Duration::from_secs(config.cache.default_ttl))
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}",
            config.cache.memory.max_capacity
        );
        Ok(Self { inner })
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        if let Some(value) = self.inner.get(key).await {
            CacheResult::Found(value)
        } else {
            CacheResult::NotFound
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        // Moka uses the global TTL configured at construction; the per-item
        // TTL argument is ignored.
        self.inner.insert(key, value).await;

        if ttl != 0 {
            tracing::debug!("Moka cache ignores per-item TTL, using global TTL configuration");
        }
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cache() -> MokaCacheWrapper {
        MokaCacheWrapper {
            inner: Cache::builder().max_capacity(64).build(),
        }
    }

    #[tokio::test]
    async fn insert_get_remove() {
        let cache = bare_cache();
        cache
            .insert_raw("user:1".into(), "{\"id\":1}".into(), 0)
            .await;
        assert!(matches!(
            cache.get_raw("user:1").await,
            CacheResult::Found(v) if v == "{\"id\":1}"
        ));

        cache.remove("user:1").await;
        assert!(matches!(cache.get_raw("user:1").await, CacheResult::NotFound));
    }

    #[tokio::test]
    async fn invalidate_all_clears_entries() {
        let cache = bare_cache();
        cache.insert_raw("a".into(), "1".into(), 0).await;
        cache.insert_raw("b".into(), "2".into(), 0).await;
        cache.invalidate_all().await;
        // invalidate_all is lazy; run_pending_tasks makes it observable
        cache.inner.run_pending_tasks().await;
        assert!(matches!(cache.get_raw("a").await, CacheResult::NotFound));
    }
}
