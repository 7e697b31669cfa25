use std::ops::Deref;

use flowryd_catalog::Participant;
use serde::Serialize;
use tracing::debug;

/// The working set of participants a user has assembled in one session.
///
/// Insertion order is kept and no two entries share an id. The matcher never
/// holds onto a network; callers own it and pass it by reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Network {
  participants: Vec<Participant>,
}

impl Network {
  pub fn new() -> Self {
    Self::default()
  }

  /// A network seeded with the synthetic "Your Node" participant.
  pub fn with_user_node() -> Self {
    Self {
      participants: vec![Participant::user_node()],
    }
  }

  /// Add a participant unless one with the same id is already present.
  ///
  /// Returns `false` when the participant was skipped.
  pub fn add(&mut self, participant: Participant) -> bool {
    if self.contains(&participant.id) {
      debug!(participant_id = %participant.id, "participant already in network, skipping");
      return false;
    }
    debug!(participant_id = %participant.id, "participant added to network");
    self.participants.push(participant);
    true
  }

  /// Remove a participant by id.
  pub fn remove(&mut self, id: &str) -> Option<Participant> {
    let index = self.participants.iter().position(|p| p.id == id)?;
    debug!(participant_id = %id, "participant removed from network");
    Some(self.participants.remove(index))
  }

  pub fn contains(&self, id: &str) -> bool {
    self.participants.iter().any(|p| p.id == id)
  }

  pub fn ids(&self) -> Vec<&str> {
    self.participants.iter().map(|p| p.id.as_str()).collect()
  }

  pub fn as_slice(&self) -> &[Participant] {
    &self.participants
  }
}

impl Deref for Network {
  type Target = [Participant];

  fn deref(&self) -> &Self::Target {
    &self.participants
  }
}

impl FromIterator<Participant> for Network {
  fn from_iter<T: IntoIterator<Item = Participant>>(iter: T) -> Self {
    let mut network = Network::new();
    for p in iter {
      network.add(p);
    }
    network
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use flowryd_catalog::{Catalog, USER_NODE_ID};

  fn participant(id: &str) -> Participant {
    Catalog::builtin().participant(id).unwrap().clone()
  }

  #[test]
  fn test_add_skips_duplicates() {
    let mut network = Network::new();
    assert!(network.add(participant("p_bny")));
    assert!(!network.add(participant("p_bny")));
    assert_eq!(network.len(), 1);
  }

  #[test]
  fn test_insertion_order_is_kept() {
    let mut network = Network::with_user_node();
    network.add(participant("p_gs"));
    network.add(participant("p_dtcc"));
    assert_eq!(network.ids(), vec![USER_NODE_ID, "p_gs", "p_dtcc"]);
  }

  #[test]
  fn test_remove() {
    let mut network: Network = ["p_gs", "p_dtcc"].into_iter().map(participant).collect();
    let removed = network.remove("p_gs").unwrap();
    assert_eq!(removed.id, "p_gs");
    assert!(network.remove("p_gs").is_none());
    assert_eq!(network.ids(), vec!["p_dtcc"]);
  }

  #[test]
  fn test_collect_deduplicates() {
    let network: Network = ["p_gs", "p_gs", "p_jpm"].into_iter().map(participant).collect();
    assert_eq!(network.len(), 2);
    assert!(network.contains("p_jpm"));
    assert!(!network.is_empty());
  }
}
