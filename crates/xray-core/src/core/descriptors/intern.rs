use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Process-wide cache handing out one shared instance per distinct key.
///
/// Lookups take the read lock first; the value is only built when the key is
/// missing, and insertion re-checks under the write lock so concurrent callers
/// racing on the same key all receive the instance that won.
pub(crate) struct Interner<K, V> {
    kind: &'static str,
    cache: OnceLock<RwLock<HashMap<K, Arc<V>>>>,
}

impl<K, V> Interner<K, V>
where
    K: Eq + Hash + Debug,
{
    pub(crate) const fn new(kind: &'static str) -> Self {
        Self {
            kind,
            cache: OnceLock::new(),
        }
    }

    fn cache(&self) -> &RwLock<HashMap<K, Arc<V>>> {
        self.cache.get_or_init(|| RwLock::new(HashMap::new()))
    }

    pub(crate) fn get_or_try_insert_with<E, F>(&self, key: K, build: F) -> Result<Arc<V>, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        let cache = self.cache();

        if let Some(existing) = cache.read().get(&key) {
            return Ok(Arc::clone(existing));
        }

        let value = build()?;

        let mut guard = cache.write();
        if let Some(existing) = guard.get(&key) {
            return Ok(Arc::clone(existing));
        }

        debug!(descriptor = self.kind, key = ?key, "Interned new descriptor.");
        let value = Arc::new(value);
        guard.insert(key, Arc::clone(&value));
        Ok(value)
    }

    pub(crate) fn get_or_insert_with<F>(&self, key: K, build: F) -> Arc<V>
    where
        F: FnOnce() -> V,
    {
        match self.get_or_try_insert_with(key, || Ok::<V, std::convert::Infallible>(build())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    pub(crate) fn clear(&self) {
        if let Some(cache) = self.cache.get() {
            let mut guard = cache.write();
            debug!(descriptor = self.kind, count = guard.len(), "Cleared descriptor cache.");
            guard.clear();
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.cache.get().map_or(0, |cache| cache.read().len())
    }
}
