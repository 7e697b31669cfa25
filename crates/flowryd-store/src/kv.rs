use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use crate::error::StoreError;

/// Boxed future returned by [`KvStore`] operations.
pub type KvFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + Send + 'a>>;

/// Trait for session-scoped key-value storage.
///
/// Plays the part of a browser's local storage: small string values under
/// fixed keys, surviving between sessions when the backend is persistent.
///
/// This trait is async so file-backed stores can use non-blocking IO.
pub trait KvStore: Send + Sync {
  /// Get a value by key.
  fn get(&self, key: &str) -> KvFuture<'_, Option<String>>;

  /// Set a value.
  fn set(&mut self, key: &str, value: String) -> KvFuture<'_, ()>;

  /// Delete a value. Deleting a missing key is not an error.
  fn delete(&mut self, key: &str) -> KvFuture<'_, ()>;
}

/// In-memory KV store implementation.
///
/// Nothing survives the process. Suitable for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct InMemoryKvStore {
  data: HashMap<String, String>,
}

impl InMemoryKvStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl KvStore for InMemoryKvStore {
  fn get(&self, key: &str) -> KvFuture<'_, Option<String>> {
    let value = self.data.get(key).cloned();
    Box::pin(async move { Ok(value) })
  }

  fn set(&mut self, key: &str, value: String) -> KvFuture<'_, ()> {
    self.data.insert(key.to_string(), value);
    Box::pin(async { Ok(()) })
  }

  fn delete(&mut self, key: &str) -> KvFuture<'_, ()> {
    self.data.remove(key);
    Box::pin(async { Ok(()) })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_in_memory_kv_store() {
    let mut store = InMemoryKvStore::new();

    assert_eq!(store.get("key").await.unwrap(), None);

    store.set("key", "value".to_string()).await.unwrap();
    assert_eq!(store.get("key").await.unwrap(), Some("value".to_string()));

    store.set("key", "updated".to_string()).await.unwrap();
    assert_eq!(store.get("key").await.unwrap(), Some("updated".to_string()));

    store.delete("key").await.unwrap();
    assert_eq!(store.get("key").await.unwrap(), None);

    store.delete("key").await.unwrap();
  }
}
