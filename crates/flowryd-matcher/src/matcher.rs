//! Role fulfillment, participant matching and the two display scores.
//!
//! Everything here is a pure function of its arguments. Missing or odd input
//! (no workflow, an empty role list, an empty network, unknown role names)
//! yields a neutral value rather than an error.

use std::collections::HashSet;

use flowryd_catalog::{Participant, Workflow};
use serde::Serialize;

/// Weight of each of the four centrality components.
const CENTRALITY_WEIGHT: f64 = 25.0;
/// Distinct capability count at which the diversity component saturates.
const DIVERSITY_SATURATION: f64 = 8.0;
/// Network size at which the scale component saturates.
const SCALE_SATURATION: f64 = 10.0;

/// True iff at least one participant in `network` has `role` flagged.
pub fn is_role_fulfilled(network: &[Participant], role: &str) -> bool {
  network.iter().any(|p| p.has_capability(role))
}

/// A catalog participant that satisfies at least one selected role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match<'a> {
  #[serde(flatten)]
  pub participant: &'a Participant,
  /// Selected roles this participant satisfies, in selection order.
  pub matched_roles: Vec<String>,
}

/// Find every catalog participant fulfilling at least one of `selected_roles`.
///
/// Results keep catalog order and every qualifying participant is returned.
/// No workflow or an empty selection gives an empty list.
pub fn find_matches<'a, S: AsRef<str>>(
  catalog: &'a [Participant],
  workflow: Option<&Workflow>,
  selected_roles: &[S],
) -> Vec<Match<'a>> {
  if workflow.is_none() || selected_roles.is_empty() {
    return Vec::new();
  }

  catalog
    .iter()
    .filter_map(|participant| {
      let matched_roles: Vec<String> = selected_roles
        .iter()
        .map(|role| role.as_ref())
        .filter(|role| participant.has_capability(role))
        .map(str::to_string)
        .collect();

      (!matched_roles.is_empty()).then_some(Match {
        participant,
        matched_roles,
      })
    })
    .collect()
}

/// Workflow roles the network fulfills, in workflow order.
pub fn fulfilled_roles<'w>(workflow: &'w Workflow, network: &[Participant]) -> Vec<&'w str> {
  workflow
    .roles
    .iter()
    .map(String::as_str)
    .filter(|role| is_role_fulfilled(network, role))
    .collect()
}

/// Workflow roles nobody in the network fulfills, in workflow order.
pub fn missing_roles<'w>(workflow: &'w Workflow, network: &[Participant]) -> Vec<&'w str> {
  workflow
    .roles
    .iter()
    .map(String::as_str)
    .filter(|role| !is_role_fulfilled(network, role))
    .collect()
}

/// Percentage of the workflow's roles the network fulfills, rounded.
///
/// `0` when there is no workflow or the workflow lists no roles.
pub fn compute_readiness(workflow: Option<&Workflow>, network: &[Participant]) -> u32 {
  let Some(workflow) = workflow else {
    return 0;
  };
  if workflow.roles.is_empty() {
    return 0;
  }

  let fulfilled = fulfilled_roles(workflow, network).len() as f64;
  let total = workflow.roles.len() as f64;
  round_score(fulfilled / total * 100.0)
}

/// The four weighted components of the centrality score, each in `0..=25`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CentralityBreakdown {
  /// Share of participants flagged as super validators.
  pub super_validators: f64,
  /// Share of participants running at least one validator node.
  pub validators: f64,
  /// Distinct capability names, saturating at 8.
  pub diversity: f64,
  /// Network size, saturating at 10.
  pub scale: f64,
}

impl CentralityBreakdown {
  pub fn compute(network: &[Participant]) -> Self {
    if network.is_empty() {
      return Self::default();
    }

    let n = network.len() as f64;
    let super_validators = network.iter().filter(|p| p.super_validator).count() as f64;
    let validators = network.iter().filter(|p| p.validator_count() > 0).count() as f64;
    let distinct: HashSet<&str> = network.iter().flat_map(|p| p.capabilities.names()).collect();

    Self {
      super_validators: CENTRALITY_WEIGHT * super_validators / n,
      validators: CENTRALITY_WEIGHT * validators / n,
      diversity: CENTRALITY_WEIGHT * (distinct.len() as f64 / DIVERSITY_SATURATION).min(1.0),
      scale: CENTRALITY_WEIGHT * (n / SCALE_SATURATION).min(1.0),
    }
  }

  /// Components summed, then rounded.
  pub fn total(&self) -> u32 {
    round_score(self.super_validators + self.validators + self.diversity + self.scale)
  }
}

/// Heuristic 0-100 "network quality" score used for gamified display.
///
/// `0` for an empty network.
pub fn compute_centrality(network: &[Participant]) -> u32 {
  CentralityBreakdown::compute(network).total()
}

/// Round half up. Scores are never negative.
fn round_score(value: f64) -> u32 {
  value.round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
  use super::*;
  use flowryd_catalog::{Capabilities, Catalog, Criticality};

  fn participant(id: &str, caps: &[&str]) -> Participant {
    Participant {
      id: id.to_string(),
      name: id.to_uppercase(),
      role_label: "Test".to_string(),
      capabilities: Capabilities::from_names(caps.iter().copied()),
      criticality: Criticality::Required,
      holdings: None,
      validator_nodes: None,
      super_validator: false,
      hosted: false,
      is_user: false,
      description: None,
    }
  }

  fn workflow(roles: &[&str]) -> Workflow {
    Workflow {
      id: "WF-T".to_string(),
      name: "Test".to_string(),
      category: "Testing".to_string(),
      description: String::new(),
      roles: roles.iter().map(|r| r.to_string()).collect(),
      stages: Vec::new(),
    }
  }

  #[test]
  fn test_is_role_fulfilled() {
    let network = vec![participant("a", &["Custody"]), participant("b", &["Registry"])];
    assert!(is_role_fulfilled(&network, "Custody"));
    assert!(is_role_fulfilled(&network, "Registry"));
    assert!(!is_role_fulfilled(&network, "Settlement"));
    assert!(!is_role_fulfilled(&[], "Custody"));
  }

  #[test]
  fn test_find_matches_custody_example() {
    let catalog = vec![
      participant("custodian", &["Custody"]),
      participant("settler", &["Settlement"]),
    ];
    let wf = workflow(&["Custody", "Registry"]);
    let matches = find_matches(&catalog, Some(&wf), &["Custody"]);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].participant.id, "custodian");
    assert_eq!(matches[0].matched_roles, vec!["Custody"]);
  }

  #[test]
  fn test_find_matches_keeps_selection_and_catalog_order() {
    let catalog = vec![
      participant("first", &["Registry", "Custody"]),
      participant("second", &["Custody"]),
      participant("third", &["Issuer"]),
    ];
    let wf = workflow(&["Registry", "Custody"]);
    let selected = vec!["Custody".to_string(), "Registry".to_string()];
    let matches = find_matches(&catalog, Some(&wf), &selected);

    let ids: Vec<&str> = matches.iter().map(|m| m.participant.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second"]);
    assert_eq!(matches[0].matched_roles, vec!["Custody", "Registry"]);
    assert_eq!(matches[1].matched_roles, vec!["Custody"]);
  }

  #[test]
  fn test_find_matches_empty_selection() {
    let catalog = Catalog::builtin();
    let wf = catalog.workflow("WF-021").unwrap();
    let none: [&str; 0] = [];
    assert!(find_matches(&catalog.participants, Some(wf), &none).is_empty());
    assert!(find_matches(&catalog.participants, None, &["Custody"]).is_empty());
  }

  #[test]
  fn test_match_serializes_flat() {
    let catalog = vec![participant("custodian", &["Custody"])];
    let wf = workflow(&["Custody"]);
    let matches = find_matches(&catalog, Some(&wf), &["Custody"]);
    let value = serde_json::to_value(&matches[0]).unwrap();
    assert_eq!(value["id"], "custodian");
    assert_eq!(value["matched_roles"][0], "Custody");
  }

  #[test]
  fn test_readiness_half() {
    let wf = workflow(&["A", "B", "C", "D"]);
    let network = vec![participant("x", &["A"]), participant("y", &["C", "Z"])];
    assert_eq!(compute_readiness(Some(&wf), &network), 50);
    assert_eq!(fulfilled_roles(&wf, &network), vec!["A", "C"]);
    assert_eq!(missing_roles(&wf, &network), vec!["B", "D"]);
  }

  #[test]
  fn test_readiness_rounds_half_up() {
    let wf = workflow(&["A", "B", "C", "D", "E", "F", "G", "H"]);
    let network = vec![participant("x", &["A"])];
    // 1/8 = 12.5%
    assert_eq!(compute_readiness(Some(&wf), &network), 13);
  }

  #[test]
  fn test_readiness_guards() {
    let network = vec![participant("x", &["A"])];
    assert_eq!(compute_readiness(None, &network), 0);
    assert_eq!(compute_readiness(Some(&workflow(&[])), &network), 0);
    assert_eq!(compute_readiness(Some(&workflow(&["A"])), &network), 100);
  }

  #[test]
  fn test_centrality_empty() {
    assert_eq!(compute_centrality(&[]), 0);
    assert_eq!(CentralityBreakdown::compute(&[]), CentralityBreakdown::default());
  }

  #[test]
  fn test_centrality_components() {
    let mut sv = participant("sv", &["A", "B", "C", "D"]);
    sv.super_validator = true;
    sv.validator_nodes = Some(8);
    let mut v = participant("v", &["E", "F"]);
    v.validator_nodes = Some(1);
    let plain = participant("plain", &["A"]);
    let network = vec![sv, v, plain];

    let breakdown = CentralityBreakdown::compute(&network);
    assert!((breakdown.super_validators - 25.0 / 3.0).abs() < 1e-9);
    assert!((breakdown.validators - 50.0 / 3.0).abs() < 1e-9);
    // 6 distinct of 8
    assert!((breakdown.diversity - 18.75).abs() < 1e-9);
    assert!((breakdown.scale - 7.5).abs() < 1e-9);
    // 8.333 + 16.667 + 18.75 + 7.5 = 51.25
    assert_eq!(compute_centrality(&network), 51);
  }

  #[test]
  fn test_centrality_saturates_at_100() {
    let network: Vec<Participant> = (0..12)
      .map(|i| {
        let mut p = participant(&format!("p{i}"), &[format!("Cap{i}").as_str()]);
        p.super_validator = true;
        p.validator_nodes = Some(1);
        p
      })
      .collect();
    assert_eq!(compute_centrality(&network), 100);
  }

  #[test]
  fn test_centrality_of_user_node() {
    // 0 super validators, 1/1 validators, 3/8 capabilities, 1/10 scale:
    // 0 + 25 + 9.375 + 2.5 = 36.875
    assert_eq!(compute_centrality(&[Participant::user_node()]), 37);
  }
}
