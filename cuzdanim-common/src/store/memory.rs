use super::Store;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("memory store error")]
pub struct Error;

/// A [`Store`] held entirely in memory. Useful for tests and for hosts that
/// do not need sessions to survive a restart.
#[derive(Clone)]
pub struct MemoryStore<K, V> {
    store: Arc<Mutex<HashMap<K, V>>>,
}

impl<K, V> Default for MemoryStore<K, V> {
    fn default() -> Self {
        Self { store: Arc::new(Mutex::new(HashMap::new())) }
    }
}

impl<K, V> Store<K, V> for MemoryStore<K, V>
where
    K: Debug + Eq + Hash + Send + Sync + 'static,
    V: Debug + Clone + Send + Sync + 'static,
{
    type Error = Error;

    async fn get(&self, key: &K) -> Result<Option<V>, Self::Error> {
        Ok(self.store.lock().expect("failed to lock store").get(key).cloned())
    }
    async fn set(&self, key: K, value: V) -> Result<(), Self::Error> {
        self.store.lock().expect("failed to lock store").insert(key, value);
        Ok(())
    }
    async fn del(&self, key: &K) -> Result<(), Self::Error> {
        self.store.lock().expect("failed to lock store").remove(key);
        Ok(())
    }
    async fn clear(&self) -> Result<(), Self::Error> {
        self.store.lock().expect("failed to lock store").clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn last_write_wins() {
        let store = MemoryStore::<String, String>::default();
        store.set("key".into(), "first".into()).await.expect("set should succeed");
        store.set("key".into(), "second".into()).await.expect("set should succeed");
        assert_eq!(
            store.get(&"key".into()).await.expect("get should succeed"),
            Some("second".into())
        );
    }

    #[tokio::test]
    async fn del_and_clear() {
        let store = MemoryStore::<String, String>::default();
        store.set("a".into(), "1".into()).await.expect("set should succeed");
        store.set("b".into(), "2".into()).await.expect("set should succeed");
        store.del(&"a".into()).await.expect("del should succeed");
        assert_eq!(store.get(&"a".into()).await.expect("get should succeed"), None);
        store.clear().await.expect("clear should succeed");
        assert_eq!(store.get(&"b".into()).await.expect("get should succeed"), None);
    }
}
