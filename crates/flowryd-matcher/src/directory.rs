//! Participant directory search used when adding to a network.

use std::str::FromStr;

use flowryd_catalog::{Criticality, Participant};
use serde::{Deserialize, Serialize};

/// Coarse directory categories, derived from the free-text role label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryCategory {
  #[default]
  All,
  Infrastructure,
  Custody,
  Liquidity,
  Financing,
  Validators,
}

impl DirectoryCategory {
  pub const ALL: [DirectoryCategory; 6] = [
    DirectoryCategory::All,
    DirectoryCategory::Infrastructure,
    DirectoryCategory::Custody,
    DirectoryCategory::Liquidity,
    DirectoryCategory::Financing,
    DirectoryCategory::Validators,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      DirectoryCategory::All => "all",
      DirectoryCategory::Infrastructure => "infrastructure",
      DirectoryCategory::Custody => "custody",
      DirectoryCategory::Liquidity => "liquidity",
      DirectoryCategory::Financing => "financing",
      DirectoryCategory::Validators => "validators",
    }
  }

  pub fn includes(&self, participant: &Participant) -> bool {
    let role = participant.role_label.to_lowercase();
    match self {
      DirectoryCategory::All => true,
      DirectoryCategory::Infrastructure => role.contains("registry") || role.contains("oracle"),
      DirectoryCategory::Custody => role.contains("custody"),
      DirectoryCategory::Liquidity => role.contains("liquidity") || role.contains("exchange"),
      DirectoryCategory::Financing => role.contains("financing") || role.contains("bank"),
      DirectoryCategory::Validators => participant.validator_count() > 0,
    }
  }
}

impl FromStr for DirectoryCategory {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|c| c.as_str().eq_ignore_ascii_case(s))
      .ok_or_else(|| format!("unknown category: {s}"))
  }
}

impl std::fmt::Display for DirectoryCategory {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Search parameters for the participant directory.
#[derive(Debug, Clone, Default)]
pub struct DirectoryQuery<'q> {
  /// Case-insensitive text matched against name and role label.
  pub search: &'q str,
  pub category: DirectoryCategory,
  /// Participants already added, which are never offered again.
  pub exclude_ids: &'q [&'q str],
}

impl DirectoryQuery<'_> {
  pub fn matches(&self, participant: &Participant) -> bool {
    let needle = self.search.to_lowercase();
    let matches_search = participant.name.to_lowercase().contains(&needle)
      || participant.role_label.to_lowercase().contains(&needle);
    let not_added = !self.exclude_ids.contains(&participant.id.as_str());

    matches_search && not_added && self.category.includes(participant)
  }

  /// Matching catalog entries, in catalog order.
  pub fn run<'a>(&self, catalog: &'a [Participant]) -> Vec<&'a Participant> {
    catalog.iter().filter(|p| self.matches(p)).collect()
  }
}

/// The first `limit` critical participants not yet added.
pub fn top_picks<'a>(
  catalog: &'a [Participant],
  exclude_ids: &[&str],
  limit: usize,
) -> Vec<&'a Participant> {
  catalog
    .iter()
    .filter(|p| p.criticality == Criticality::Critical && !exclude_ids.contains(&p.id.as_str()))
    .take(limit)
    .collect()
}
