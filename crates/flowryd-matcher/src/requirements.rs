//! Per-stage views of a workflow against the current network: which roles
//! are covered and by whom, and which stage each participant slots into.

use flowryd_catalog::{DEFAULT_STAGE_NAME, Participant, Workflow};
use serde::Serialize;

/// Fulfillment of a single workflow role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleRequirement<'a> {
  pub role: &'a str,
  pub fulfilled: bool,
  /// Names of the network participants that fulfill the role.
  pub fulfilled_by: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageRequirements<'a> {
  pub stage: &'a str,
  pub roles: Vec<RoleRequirement<'a>>,
}

impl StageRequirements<'_> {
  pub fn is_complete(&self) -> bool {
    self.roles.iter().all(|r| r.fulfilled)
  }
}

/// Participants placed under one stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageColumn<'a> {
  pub stage: &'a str,
  pub participants: Vec<&'a Participant>,
}

/// Network participants grouped by the earliest stage they can serve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageLayout<'a> {
  pub columns: Vec<StageColumn<'a>>,
  /// Participants that fulfill no role in any stage.
  pub leftovers: Vec<&'a Participant>,
}

/// Stage names paired with their roles, using a single default stage when
/// the workflow declares none.
fn stage_roles(workflow: &Workflow) -> Vec<(&str, &[String])> {
  if workflow.stages.is_empty() {
    vec![(DEFAULT_STAGE_NAME, workflow.roles.as_slice())]
  } else {
    workflow
      .stages
      .iter()
      .map(|s| (s.name.as_str(), s.roles.as_slice()))
      .collect()
  }
}

/// Role-by-role fulfillment of a workflow, grouped by stage.
pub fn requirements<'a>(
  workflow: &'a Workflow,
  network: &'a [Participant],
) -> Vec<StageRequirements<'a>> {
  stage_roles(workflow)
    .into_iter()
    .map(|(stage, roles)| StageRequirements {
      stage,
      roles: roles
        .iter()
        .map(|role| {
          let fulfilled_by: Vec<&str> = network
            .iter()
            .filter(|p| p.has_capability(role))
            .map(|p| p.name.as_str())
            .collect();
          RoleRequirement {
            role: role.as_str(),
            fulfilled: !fulfilled_by.is_empty(),
            fulfilled_by,
          }
        })
        .collect(),
    })
    .collect()
}

/// Assign each participant to the first stage where it has any role.
///
/// The local user's node is left out. Stages keep their declared order and
/// appear even when nobody lands in them.
pub fn stage_layout<'a>(workflow: &'a Workflow, network: &'a [Participant]) -> StageLayout<'a> {
  let stages = stage_roles(workflow);
  let mut columns: Vec<StageColumn<'a>> = stages
    .iter()
    .map(|&(stage, _)| StageColumn {
      stage,
      participants: Vec::new(),
    })
    .collect();
  let mut leftovers = Vec::new();

  for participant in network.iter().filter(|p| !p.is_user) {
    let earliest = stages
      .iter()
      .position(|(_, roles)| roles.iter().any(|r| participant.has_capability(r)));

    match earliest {
      Some(index) => columns[index].participants.push(participant),
      None => leftovers.push(participant),
    }
  }

  StageLayout { columns, leftovers }
}

#[cfg(test)]
mod tests {
  use super::*;
  use flowryd_catalog::Catalog;

  fn network(ids: &[&str]) -> Vec<Participant> {
    let catalog = Catalog::builtin();
    let mut out = vec![Participant::user_node()];
    out.extend(ids.iter().map(|id| catalog.participant(id).unwrap().clone()));
    out
  }

  #[test]
  fn test_requirements_lists_fulfilling_participants() {
    let catalog = Catalog::builtin();
    let wf = catalog.workflow("WF-021").unwrap();
    let net = network(&["p_gs", "p_chainlink"]);
    let report = requirements(wf, &net);

    assert_eq!(report.len(), 4);
    assert_eq!(report[0].stage, "Collateral Sourcing");

    let provider = &report[0].roles[0];
    assert_eq!(provider.role, "Collateral_Provider");
    assert!(provider.fulfilled);
    assert_eq!(provider.fulfilled_by, vec!["Goldman Sachs"]);

    let taker = &report[0].roles[1];
    assert!(!taker.fulfilled);
    assert!(taker.fulfilled_by.is_empty());
    assert!(!report[0].is_complete());

    // The user node covers Settlement and Registry.
    assert!(report[2].is_complete());
    assert_eq!(report[2].roles[0].fulfilled_by, vec!["Your Node"]);
  }

  #[test]
  fn test_requirements_default_stage() {
    let mut wf = Catalog::builtin().workflow("WF-022").unwrap().clone();
    wf.stages.clear();
    let net = network(&[]);
    let report = requirements(&wf, &net);
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].stage, DEFAULT_STAGE_NAME);
    assert_eq!(report[0].roles.len(), wf.roles.len());
  }

  #[test]
  fn test_stage_layout_uses_earliest_stage() {
    let catalog = Catalog::builtin();
    let wf = catalog.workflow("WF-021").unwrap();
    // Euroclear has Collateral_Agent (stage 2) and Settlement (stage 3).
    // Microsoft only has Infrastructure.
    let net = network(&["p_euroclear", "p_jpm", "p_microsoft", "p_deloitte"]);
    let layout = stage_layout(wf, &net);

    let ids = |col: &StageColumn| col.participants.iter().map(|p| p.id.clone()).collect::<Vec<_>>();
    assert_eq!(layout.columns.len(), 4);
    assert_eq!(ids(&layout.columns[0]), vec!["p_jpm"]);
    assert_eq!(ids(&layout.columns[1]), vec!["p_euroclear"]);
    assert!(layout.columns[2].participants.is_empty());
    assert_eq!(ids(&layout.columns[3]), vec!["p_deloitte"]);
    assert_eq!(layout.leftovers.len(), 1);
    assert_eq!(layout.leftovers[0].id, "p_microsoft");
  }

  #[test]
  fn test_stage_layout_skips_user_node() {
    let catalog = Catalog::builtin();
    let wf = catalog.workflow("WF-035").unwrap();
    let net = network(&[]);
    let layout = stage_layout(wf, &net);
    assert!(layout.columns.iter().all(|c| c.participants.is_empty()));
    assert!(layout.leftovers.is_empty());
  }
}
