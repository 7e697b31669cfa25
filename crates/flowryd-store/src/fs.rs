use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::StoreError;
use crate::kv::{KvFuture, KvStore};

/// File name used inside a data directory.
pub const PREFS_FILE_NAME: &str = "prefs.json";

/// Filesystem-backed KV store.
///
/// All entries live in a single JSON object file:
/// ```text
/// {data_dir}/
/// └── prefs.json   {"flowryd_onboarding_seen": "true", ...}
/// ```
/// A missing file reads as an empty store. The parent directory is created
/// on first write.
#[derive(Debug, Clone)]
pub struct FsKvStore {
  path: PathBuf,
}

impl FsKvStore {
  /// Create a store backed by the given file.
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// Create a store backed by `prefs.json` inside `data_dir`.
  pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
    Self::new(data_dir.as_ref().join(PREFS_FILE_NAME))
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  async fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
    match fs::read_to_string(&self.path).await {
      Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
      Ok(content) => Ok(serde_json::from_str(&content)?),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
      Err(e) => Err(e.into()),
    }
  }

  async fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
    if let Some(parent) = self.path.parent() {
      fs::create_dir_all(parent).await?;
    }
    let content = serde_json::to_string_pretty(entries)?;
    fs::write(&self.path, content).await?;
    debug!(path = %self.path.display(), entries = entries.len(), "preferences written");
    Ok(())
  }
}

impl KvStore for FsKvStore {
  fn get(&self, key: &str) -> KvFuture<'_, Option<String>> {
    let key = key.to_string();
    Box::pin(async move {
      let mut entries = self.read_all().await?;
      Ok(entries.remove(&key))
    })
  }

  fn set(&mut self, key: &str, value: String) -> KvFuture<'_, ()> {
    let key = key.to_string();
    Box::pin(async move {
      let mut entries = self.read_all().await?;
      entries.insert(key, value);
      self.write_all(&entries).await
    })
  }

  fn delete(&mut self, key: &str) -> KvFuture<'_, ()> {
    let key = key.to_string();
    Box::pin(async move {
      let mut entries = self.read_all().await?;
      if entries.remove(&key).is_some() {
        self.write_all(&entries).await?;
      }
      Ok(())
    })
  }
}
