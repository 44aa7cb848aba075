//! Object cache layer.
//!
//! Backends are registered at link time through the plugin registry; the
//! configured backend is constructed during startup. The cache backs JWT user
//! lookups and the login rate limiter.

pub mod object_cache;
pub mod register;

use async_trait::async_trait;

/// Result of a cache lookup
#[derive(Debug, Clone)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    ExistsButNoValue,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// Register a cache backend under a name; the constructor runs when the
/// backend is selected in configuration.
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $plugin:ty) => {
        #[ctor::ctor]
        fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let plugin = <$plugin>::new().await?;
                        Ok(Box::new(plugin) as Box<dyn $crate::cache::ObjectCache>)
                    }) as $crate::cache::register::BoxedObjectCacheFuture
                }),
            );
        }
    };
}
