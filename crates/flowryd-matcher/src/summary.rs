use flowryd_catalog::{Participant, Workflow};
use serde::Serialize;

use crate::holdings::{format_large_number, parse_holdings};
use crate::matcher::{CentralityBreakdown, compute_readiness, fulfilled_roles};

/// Headline numbers for a network, optionally measured against a workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSummary {
  pub participants: usize,
  pub total_holdings: f64,
  /// `total_holdings` formatted for display, e.g. "$45.2T".
  pub total_holdings_display: String,
  pub total_validators: u32,
  pub centrality: u32,
  pub centrality_breakdown: CentralityBreakdown,
  /// Readiness percentage, `0` without a workflow.
  pub readiness: u32,
  pub fulfilled_roles: usize,
  pub required_roles: usize,
}

impl NetworkSummary {
  pub fn compute(network: &[Participant], workflow: Option<&Workflow>) -> Self {
    let total_holdings: f64 = network
      .iter()
      .map(|p| parse_holdings(p.holdings.as_deref()))
      .sum();
    let total_validators = network.iter().map(Participant::validator_count).sum();
    let breakdown = CentralityBreakdown::compute(network);

    Self {
      participants: network.len(),
      total_holdings,
      total_holdings_display: format_large_number(total_holdings),
      total_validators,
      centrality: breakdown.total(),
      centrality_breakdown: breakdown,
      readiness: compute_readiness(workflow, network),
      fulfilled_roles: workflow.map_or(0, |w| fulfilled_roles(w, network).len()),
      required_roles: workflow.map_or(0, |w| w.roles.len()),
    }
  }
}
