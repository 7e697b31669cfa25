use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::data;
use crate::error::CatalogError;
use crate::flow::PrivateFlow;
use crate::participant::Participant;
use crate::workflow::Workflow;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
  participants: data::participants(),
  workflows: data::workflows(),
  private_flows: data::private_flows(),
});

/// The participant and workflow catalogs the matcher runs against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
  pub participants: Vec<Participant>,
  pub workflows: Vec<Workflow>,
  #[serde(default)]
  pub private_flows: Vec<PrivateFlow>,
}

impl Catalog {
  /// Build a catalog, checking that ids are unique and capability flags are 1.
  pub fn new(
    participants: Vec<Participant>,
    workflows: Vec<Workflow>,
    private_flows: Vec<PrivateFlow>,
  ) -> Result<Self, CatalogError> {
    let catalog = Self {
      participants,
      workflows,
      private_flows,
    };
    catalog.validate()?;
    Ok(catalog)
  }

  /// The dataset shipped with the demo.
  pub fn builtin() -> &'static Catalog {
    &BUILTIN
  }

  /// Parse and validate a catalog from JSON.
  pub fn from_json(json: &str) -> Result<Self, CatalogError> {
    let catalog: Catalog = serde_json::from_str(json)?;
    catalog.validate()?;
    Ok(catalog)
  }

  /// Read a JSON catalog file.
  pub fn load(path: &Path) -> Result<Self, CatalogError> {
    let content = std::fs::read_to_string(path)?;
    Self::from_json(&content)
  }

  pub fn validate(&self) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for p in &self.participants {
      if !seen.insert(p.id.as_str()) {
        return Err(CatalogError::DuplicateParticipant(p.id.clone()));
      }
      if let Some((capability, value)) = p.capabilities.first_invalid() {
        return Err(CatalogError::InvalidCapability {
          participant: p.id.clone(),
          capability: capability.to_string(),
          value,
        });
      }
    }

    let mut seen = HashSet::new();
    for w in &self.workflows {
      if !seen.insert(w.id.as_str()) {
        return Err(CatalogError::DuplicateWorkflow(w.id.clone()));
      }
    }

    Ok(())
  }

  pub fn participant(&self, id: &str) -> Result<&Participant, CatalogError> {
    self
      .participants
      .iter()
      .find(|p| p.id == id)
      .ok_or_else(|| CatalogError::ParticipantNotFound(id.to_string()))
  }

  pub fn workflow(&self, id: &str) -> Result<&Workflow, CatalogError> {
    self
      .workflows
      .iter()
      .find(|w| w.id == id)
      .ok_or_else(|| CatalogError::WorkflowNotFound(id.to_string()))
  }

  pub fn private_flow(&self, id: &str) -> Result<&PrivateFlow, CatalogError> {
    self
      .private_flows
      .iter()
      .find(|f| f.id == id)
      .ok_or_else(|| CatalogError::FlowNotFound(id.to_string()))
  }

  /// Every capability name used by at least one participant, sorted.
  pub fn capability_names(&self) -> Vec<&str> {
    let mut names: Vec<&str> = self
      .participants
      .iter()
      .flat_map(|p| p.capabilities.names())
      .collect::<HashSet<_>>()
      .into_iter()
      .collect();
    names.sort_unstable();
    names
  }
}
