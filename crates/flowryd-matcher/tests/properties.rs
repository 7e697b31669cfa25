//! Behavioural properties of the matcher over the built-in dataset.

use flowryd_catalog::{Capabilities, Catalog, Criticality, Participant, Workflow};
use flowryd_matcher::{
  Network, compute_centrality, compute_readiness, find_matches, format_large_number,
  fulfilled_roles, is_role_fulfilled, parse_holdings,
};

fn bare(id: &str, caps: &[&str]) -> Participant {
  Participant {
    id: id.to_string(),
    name: id.to_string(),
    role_label: "Test".to_string(),
    capabilities: Capabilities::from_names(caps.iter().copied()),
    criticality: Criticality::Optional,
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
    id: "WF-P".to_string(),
    name: "Property".to_string(),
    category: "Testing".to_string(),
    description: String::new(),
    roles: roles.iter().map(|r| r.to_string()).collect(),
    stages: Vec::new(),
  }
}

#[test]
fn test_adding_participants_never_lowers_readiness() {
  let catalog = Catalog::builtin();

  for wf in &catalog.workflows {
    let mut network = Network::new();
    let mut last_readiness = compute_readiness(Some(wf), &network);
    let mut last_fulfilled = fulfilled_roles(wf, &network).len();

    for p in &catalog.participants {
      network.add(p.clone());
      let readiness = compute_readiness(Some(wf), &network);
      let fulfilled = fulfilled_roles(wf, &network).len();
      assert!(readiness >= last_readiness, "{} dropped after {}", wf.id, p.id);
      assert!(fulfilled >= last_fulfilled);
      assert!(readiness <= 100);
      last_readiness = readiness;
      last_fulfilled = fulfilled;
    }
  }
}

#[test]
fn test_full_catalog_cannot_cover_distribution() {
  let catalog = Catalog::builtin();
  let network: Network = catalog.participants.iter().cloned().collect();

  assert_eq!(compute_readiness(catalog.workflow("WF-021").ok(), &network), 100);
  assert_eq!(compute_readiness(catalog.workflow("WF-022").ok(), &network), 100);
  // Nobody offers Distribution: 5 of 6 roles.
  assert_eq!(compute_readiness(catalog.workflow("WF-035").ok(), &network), 83);
}

#[test]
fn test_fulfillment_check_is_repeatable() {
  let catalog = Catalog::builtin();
  let network: Network = ["p_bny", "p_dtcc"]
    .iter()
    .map(|id| catalog.participant(id).unwrap().clone())
    .collect();

  for role in ["Custody", "Registry", "Issuer", "Nonexistent"] {
    assert_eq!(
      is_role_fulfilled(&network, role),
      is_role_fulfilled(&network, role)
    );
  }
}

#[test]
fn test_centrality_bounds() {
  let catalog = Catalog::builtin();
  assert_eq!(compute_centrality(&[]), 0);

  let mut network = Network::with_user_node();
  for p in &catalog.participants {
    network.add(p.clone());
    let score = compute_centrality(&network);
    assert!(score <= 100);
  }
}

#[test]
fn test_find_matches_example() {
  let catalog = vec![bare("custodian", &["Custody"]), bare("settler", &["Settlement"])];
  let wf = workflow(&["Custody", "Registry"]);
  let matches = find_matches(&catalog, Some(&wf), &["Custody"]);

  assert_eq!(matches.len(), 1);
  assert_eq!(matches[0].participant.id, "custodian");
  assert_eq!(matches[0].matched_roles, vec!["Custody".to_string()]);
}

#[test]
fn test_find_matches_empty_inputs() {
  let catalog = Catalog::builtin();
  let wf = catalog.workflow("WF-022").unwrap();
  let no_roles: Vec<String> = Vec::new();

  assert!(find_matches(&catalog.participants, Some(wf), &no_roles).is_empty());
  assert!(find_matches(&catalog.participants, None, &wf.roles).is_empty());
}

#[test]
fn test_find_matches_over_builtin_catalog() {
  let catalog = Catalog::builtin();
  let wf = catalog.workflow("WF-022").unwrap();
  let matches = find_matches(&catalog.participants, Some(wf), &["Repo_Platform"]);
  let ids: Vec<&str> = matches.iter().map(|m| m.participant.id.as_str()).collect();
  assert_eq!(ids, vec!["p_broadridge", "p_equilend"]);
}

#[test]
fn test_readiness_example() {
  let wf = workflow(&["A", "B", "C", "D"]);
  let network = vec![bare("x", &["A"]), bare("y", &["C"])];
  assert_eq!(compute_readiness(Some(&wf), &network), 50);
}

#[test]
fn test_holdings_examples() {
  assert_eq!(parse_holdings(Some("$45.2T")), 45_200_000_000_000.0);
  assert_eq!(format_large_number(45_200_000_000_000.0), "$45.2T");
  assert_eq!(parse_holdings(Some("N/A")), 0.0);
}
