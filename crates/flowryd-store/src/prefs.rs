use tracing::info;

use crate::error::StoreError;
use crate::kv::KvStore;

/// Key of the "has seen onboarding" flag.
pub const ONBOARDING_SEEN_KEY: &str = "flowryd_onboarding_seen";
/// Key of the connected party id.
pub const PARTY_ID_KEY: &str = "flowryd_party_id";

const TRUE: &str = "true";

/// The handful of values a session keeps between runs.
///
/// Only the onboarding flag and the connected party id persist. The working
/// network is never stored.
pub struct Preferences<S: KvStore> {
  store: S,
}

impl<S: KvStore> Preferences<S> {
  pub fn new(store: S) -> Self {
    Self { store }
  }

  pub fn into_inner(self) -> S {
    self.store
  }

  pub async fn has_seen_onboarding(&self) -> Result<bool, StoreError> {
    Ok(self.store.get(ONBOARDING_SEEN_KEY).await?.as_deref() == Some(TRUE))
  }

  pub async fn mark_onboarding_seen(&mut self) -> Result<(), StoreError> {
    self.store.set(ONBOARDING_SEEN_KEY, TRUE.to_string()).await?;
    info!("onboarding marked as seen");
    Ok(())
  }

  pub async fn reset_onboarding(&mut self) -> Result<(), StoreError> {
    self.store.delete(ONBOARDING_SEEN_KEY).await?;
    info!("onboarding reset");
    Ok(())
  }

  /// The connected party id, if any.
  pub async fn party_id(&self) -> Result<Option<String>, StoreError> {
    Ok(self.store.get(PARTY_ID_KEY).await?.filter(|id| !id.is_empty()))
  }

  pub async fn is_connected(&self) -> Result<bool, StoreError> {
    Ok(self.party_id().await?.is_some())
  }

  pub async fn connect(&mut self, party_id: &str) -> Result<(), StoreError> {
    self.store.set(PARTY_ID_KEY, party_id.to_string()).await?;
    info!(party_id = %party_id, "party connected");
    Ok(())
  }

  pub async fn disconnect(&mut self) -> Result<(), StoreError> {
    self.store.delete(PARTY_ID_KEY).await?;
    info!("party disconnected");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fs::FsKvStore;
  use crate::kv::InMemoryKvStore;

  #[tokio::test]
  async fn test_onboarding_flag() {
    let mut prefs = Preferences::new(InMemoryKvStore::new());
    assert!(!prefs.has_seen_onboarding().await.unwrap());

    prefs.mark_onboarding_seen().await.unwrap();
    assert!(prefs.has_seen_onboarding().await.unwrap());

    prefs.reset_onboarding().await.unwrap();
    assert!(!prefs.has_seen_onboarding().await.unwrap());
  }

  #[tokio::test]
  async fn test_only_exact_true_counts_as_seen() {
    let mut store = InMemoryKvStore::new();
    store.set(ONBOARDING_SEEN_KEY, "yes".to_string()).await.unwrap();
    let prefs = Preferences::new(store);
    assert!(!prefs.has_seen_onboarding().await.unwrap());
  }

  #[tokio::test]
  async fn test_connect_and_disconnect() {
    let mut prefs = Preferences::new(InMemoryKvStore::new());
    assert_eq!(prefs.party_id().await.unwrap(), None);

    prefs.connect("participant::1234").await.unwrap();
    assert_eq!(
      prefs.party_id().await.unwrap().as_deref(),
      Some("participant::1234")
    );
    assert!(prefs.is_connected().await.unwrap());

    prefs.disconnect().await.unwrap();
    assert!(!prefs.is_connected().await.unwrap());
  }

  #[tokio::test]
  async fn test_preferences_persist_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    let mut prefs = Preferences::new(FsKvStore::in_dir(dir.path()));
    prefs.mark_onboarding_seen().await.unwrap();
    prefs.connect("participant::abcd").await.unwrap();

    let reopened = Preferences::new(FsKvStore::in_dir(dir.path()));
    assert!(reopened.has_seen_onboarding().await.unwrap());
    assert_eq!(
      reopened.party_id().await.unwrap().as_deref(),
      Some("participant::abcd")
    );
  }
}
