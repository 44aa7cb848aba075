use crate::cache::ObjectCache;
use crate::errors::Result;
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type BoxedObjectCacheFuture =
    Pin<Box<dyn Future<Output = Result<Box<dyn ObjectCache>>> + Send>>;
pub type ObjectCacheConstructor = Arc<dyn Fn() -> BoxedObjectCacheFuture + Send + Sync>;

static OBJECT_CACHE_REGISTRY: Lazy<RwLock<HashMap<String, ObjectCacheConstructor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

pub fn register_object_cache_plugin<S: Into<String>>(name: S, constructor: ObjectCacheConstructor) {
    let name = name.into();
    let mut registry = OBJECT_CACHE_REGISTRY
        .write()
        .expect("Cache registry lock poisoned");
    registry.insert(name, constructor);
}

pub fn get_object_cache_plugin(name: &str) -> Option<ObjectCacheConstructor> {
    OBJECT_CACHE_REGISTRY
        .read()
        .expect("Cache registry lock poisoned")
        .get(name)
        .cloned()
}

pub fn debug_object_cache_registry() {
    let registry = OBJECT_CACHE_REGISTRY
        .read()
        .expect("Cache registry lock poisoned");
    if registry.is_empty() {
        tracing::debug!("No object cache plugins registered.");
    } else {
        tracing::debug!("Registered object cache plugins:");
        for key in registry.keys() {
            tracing::debug!(" - {}", key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheResult;
    use async_trait::async_trait;

    struct NullCache;

    #[async_trait]
    impl ObjectCache for NullCache {
        async fn get_raw(&self, _key: &str) -> CacheResult<String> {
            CacheResult::NotFound
        }
        async fn insert_raw(&self, _key: String, _value: String, _ttl: u64) {}
        async fn remove(&self, _key: &str) {}
        async fn invalidate_all(&self) {}
    }

    #[tokio::test]
    async fn registered_plugin_is_retrievable() {
        register_object_cache_plugin(
            "null-test",
            Arc::new(|| {
                Box::pin(async { Ok(Box::new(NullCache) as Box<dyn ObjectCache>) })
                    as BoxedObjectCacheFuture
            }),
        );

        let constructor = get_object_cache_plugin("null-test").expect("plugin missing");
        let cache = constructor().await.unwrap();
        assert!(matches!(cache.get_raw("k").await, CacheResult::NotFound));
    }

    #[test]
    fn unknown_plugin_returns_none() {
        assert!(get_object_cache_plugin("no-such-backend").is_none());
    }
}
