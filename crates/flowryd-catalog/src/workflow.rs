use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Stage name used when a workflow defines no stages of its own.
pub const DEFAULT_STAGE_NAME: &str = "Required Roles";

/// A named group of workflow roles. Layout and grouping only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
  pub name: String,
  pub roles: Vec<String>,
}

/// A business process template: an ordered list of required roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
  pub id: String,
  pub name: String,
  pub category: String,
  #[serde(default)]
  pub description: String,
  /// Required capability names, in insertion order.
  pub roles: Vec<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub stages: Vec<Stage>,
}

impl Workflow {
  /// Stages to group by, falling back to a single stage covering every role.
  pub fn stages(&self) -> Cow<'_, [Stage]> {
    if self.stages.is_empty() {
      Cow::Owned(vec![Stage {
        name: DEFAULT_STAGE_NAME.to_string(),
        roles: self.roles.clone(),
      }])
    } else {
      Cow::Borrowed(&self.stages)
    }
  }

  pub fn requires(&self, role: &str) -> bool {
    self.roles.iter().any(|r| r == role)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn workflow(stages: Vec<Stage>) -> Workflow {
    Workflow {
      id: "WF-T".to_string(),
      name: "Test".to_string(),
      category: "Testing".to_string(),
      description: String::new(),
      roles: vec!["A".to_string(), "B".to_string()],
      stages,
    }
  }

  #[test]
  fn test_stages_fallback_covers_all_roles() {
    let wf = workflow(vec![]);
    let stages = wf.stages();
    assert_eq!(stages.len(), 1);
    assert_eq!(stages[0].name, DEFAULT_STAGE_NAME);
    assert_eq!(stages[0].roles, wf.roles);
  }

  #[test]
  fn test_declared_stages_are_borrowed() {
    let wf = workflow(vec![
      Stage {
        name: "First".to_string(),
        roles: vec!["A".to_string()],
      },
      Stage {
        name: "Second".to_string(),
        roles: vec!["B".to_string()],
      },
    ]);
    assert!(matches!(wf.stages(), Cow::Borrowed(s) if s.len() == 2));
    assert!(wf.requires("B"));
    assert!(!wf.requires("C"));
  }
}
