use serde::{Deserialize, Serialize};

use crate::capability::Capabilities;

/// Identifier of the synthetic participant representing the local user.
pub const USER_NODE_ID: &str = "user-node";

/// How essential a participant is considered. Display and sorting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Criticality {
  Critical,
  Required,
  Optional,
}

impl Criticality {
  pub fn as_str(&self) -> &'static str {
    match self {
      Criticality::Critical => "CRITICAL",
      Criticality::Required => "REQUIRED",
      Criticality::Optional => "OPTIONAL",
    }
  }
}

impl std::fmt::Display for Criticality {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// An entity on the network (bank, custodian, registry, ...) and the
/// capabilities it can fulfill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
  pub id: String,
  pub name: String,
  /// Free-text role, e.g. "Registry + Issuer". Never used for matching.
  pub role_label: String,
  #[serde(default)]
  pub capabilities: Capabilities,
  pub criticality: Criticality,
  /// Money string such as "$45.2T" or "N/A".
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub holdings: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub validator_nodes: Option<u32>,
  #[serde(default)]
  pub super_validator: bool,
  #[serde(default)]
  pub hosted: bool,
  #[serde(default)]
  pub is_user: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

impl Participant {
  /// The "Your Node" participant every discovery session starts with.
  pub fn user_node() -> Self {
    Self {
      id: USER_NODE_ID.to_string(),
      name: "Your Node".to_string(),
      role_label: "Participant".to_string(),
      capabilities: Capabilities::from_names(["Custody", "Settlement", "Registry"]),
      criticality: Criticality::Required,
      holdings: Some("$1.2B".to_string()),
      validator_nodes: Some(1),
      super_validator: false,
      hosted: true,
      is_user: true,
      description: Some("Your local Canton participant node.".to_string()),
    }
  }

  pub fn has_capability(&self, name: &str) -> bool {
    self.capabilities.has(name)
  }

  /// Validator node count, treating a missing count as zero.
  pub fn validator_count(&self) -> u32 {
    self.validator_nodes.unwrap_or(0)
  }
}
