//! Flowryd Store
//!
//! Small key-value storage for values a session keeps between runs: whether
//! onboarding has been shown and which party id is connected.
//!
//! [`KvStore`] has an in-memory implementation for tests and ephemeral use
//! and a file-backed one that keeps a single JSON file in the data directory.
//! [`Preferences`] wraps either with typed accessors.

mod error;
mod fs;
mod kv;
mod prefs;

pub use error::StoreError;
pub use fs::{FsKvStore, PREFS_FILE_NAME};
pub use kv::{InMemoryKvStore, KvFuture, KvStore};
pub use prefs::{ONBOARDING_SEEN_KEY, PARTY_ID_KEY, Preferences};
