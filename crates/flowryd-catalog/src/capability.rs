use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flag value marking a capability as present.
pub const PRESENT: u8 = 1;

/// Capability flags held by a participant.
///
/// Serialized as a plain object of `name -> 1`. A name that is missing from the
/// map means the participant does not have that capability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capabilities(BTreeMap<String, u8>);

impl Capabilities {
  pub fn new() -> Self {
    Self::default()
  }

  /// Build from a list of capability names, all flagged present.
  pub fn from_names<I, S>(names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self(names.into_iter().map(|n| (n.into(), PRESENT)).collect())
  }

  /// True iff `name` is flagged exactly `1`.
  pub fn has(&self, name: &str) -> bool {
    self.0.get(name) == Some(&PRESENT)
  }

  pub fn insert(&mut self, name: impl Into<String>) {
    self.0.insert(name.into(), PRESENT);
  }

  /// Capability names, flag value ignored.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.0.keys().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// First entry whose flag is not `1`, if any.
  pub(crate) fn first_invalid(&self) -> Option<(&str, u8)> {
    self
      .0
      .iter()
      .find(|(_, v)| **v != PRESENT)
      .map(|(k, v)| (k.as_str(), *v))
  }
}

impl<S: Into<String>> FromIterator<S> for Capabilities {
  fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
    Self::from_names(iter)
  }
}
