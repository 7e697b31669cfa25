//! Flowryd Matcher
//!
//! The capability matcher behind the discovery screens. Given a workflow
//! (an ordered list of required roles) and a working set of participants,
//! it answers:
//! - which roles are fulfilled ([`is_role_fulfilled`], [`requirements`])
//! - which catalog participants match a role selection ([`find_matches`])
//! - how ready the network is for the workflow ([`compute_readiness`])
//! - a cosmetic network quality score ([`compute_centrality`])
//!
//! The matcher is stateless. The [`Network`] working set belongs to the
//! caller and is passed in by reference.

mod directory;
mod holdings;
mod matcher;
mod network;
mod requirements;
mod summary;

pub use directory::{DirectoryCategory, DirectoryQuery, top_picks};
pub use holdings::{format_large_number, parse_holdings};
pub use matcher::{
  CentralityBreakdown, Match, compute_centrality, compute_readiness, find_matches,
  fulfilled_roles, is_role_fulfilled, missing_roles,
};
pub use network::Network;
pub use requirements::{
  RoleRequirement, StageColumn, StageLayout, StageRequirements, requirements, stage_layout,
};
pub use summary::NetworkSummary;
