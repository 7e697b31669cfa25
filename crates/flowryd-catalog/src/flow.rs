//! Private flows drafted by the user, with roles that are known, filled by a
//! recruited participant, or still an open gap.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowStatus {
  Draft,
  Recruiting,
  Ready,
  Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleStatus {
  Known,
  Filled,
  Gap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowRole {
  pub id: String,
  pub name: String,
  pub requirements: String,
  pub status: RoleStatus,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub filled_by: Option<String>,
  /// Percentage of the flow's rewards allotted to this role.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub reward_share: Option<u32>,
}

impl FlowRole {
  pub fn is_gap(&self) -> bool {
    self.status == RoleStatus::Gap
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateFlow {
  pub id: String,
  pub name: String,
  pub description: String,
  pub status: FlowStatus,
  /// ISO-8601 date.
  pub created_at: String,
  pub roles: Vec<FlowRole>,
}

impl PrivateFlow {
  /// Roles that are not gaps (known or filled).
  pub fn filled_count(&self) -> usize {
    self.roles.iter().filter(|r| !r.is_gap()).count()
  }

  pub fn gap_count(&self) -> usize {
    self.roles.iter().filter(|r| r.is_gap()).count()
  }

  pub fn gaps(&self) -> impl Iterator<Item = &FlowRole> {
    self.roles.iter().filter(|r| r.is_gap())
  }

  /// A flow is ready once no role is left as a gap.
  pub fn is_ready(&self) -> bool {
    self.roles.iter().all(|r| !r.is_gap())
  }

  /// Mark a role as filled by the named participant.
  pub fn fill_role(&mut self, role_id: &str, filled_by: impl Into<String>) -> Result<(), CatalogError> {
    let role = self
      .roles
      .iter_mut()
      .find(|r| r.id == role_id)
      .ok_or_else(|| CatalogError::RoleNotFound {
        flow_id: self.id.clone(),
        role_id: role_id.to_string(),
      })?;

    role.status = RoleStatus::Filled;
    role.filled_by = Some(filled_by.into());
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn role(id: &str, status: RoleStatus) -> FlowRole {
    FlowRole {
      id: id.to_string(),
      name: id.to_uppercase(),
      requirements: String::new(),
      status,
      filled_by: None,
      reward_share: Some(10),
    }
  }

  fn flow() -> PrivateFlow {
    PrivateFlow {
      id: "flow-test".to_string(),
      name: "Flow_Test".to_string(),
      description: String::new(),
      status: FlowStatus::Draft,
      created_at: "2026-01-01".to_string(),
      roles: vec![
        role("r1", RoleStatus::Known),
        role("r2", RoleStatus::Filled),
        role("r3", RoleStatus::Gap),
      ],
    }
  }

  #[test]
  fn test_counts() {
    let f = flow();
    assert_eq!(f.filled_count(), 2);
    assert_eq!(f.gap_count(), 1);
    assert!(!f.is_ready());
    assert_eq!(f.gaps().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["r3"]);
  }

  #[test]
  fn test_fill_role_closes_gap() {
    let mut f = flow();
    f.fill_role("r3", "Anchorage Digital").unwrap();
    assert!(f.is_ready());
    assert_eq!(f.roles[2].status, RoleStatus::Filled);
    assert_eq!(f.roles[2].filled_by.as_deref(), Some("Anchorage Digital"));
  }

  #[test]
  fn test_fill_unknown_role() {
    let mut f = flow();
    let err = f.fill_role("r9", "Nobody").unwrap_err();
    assert!(matches!(err, CatalogError::RoleNotFound { ref role_id, .. } if role_id == "r9"));
  }
}
