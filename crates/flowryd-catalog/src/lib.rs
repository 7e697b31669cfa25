//! Flowryd Catalog
//!
//! Serializable data model for the discovery demo: participants and their
//! capability flags, workflow templates with their required roles, and the
//! user's private flows.
//!
//! The built-in dataset is available through [`Catalog::builtin`]. A custom
//! catalog can be loaded from JSON with [`Catalog::load`], which enforces the
//! same invariants:
//! - participant and workflow ids are unique
//! - capability flags are exactly `1` when present

mod capability;
mod catalog;
mod data;
mod error;
mod flow;
mod participant;
mod workflow;

pub use capability::Capabilities;
pub use catalog::Catalog;
pub use error::CatalogError;
pub use flow::{FlowRole, FlowStatus, PrivateFlow, RoleStatus};
pub use participant::{Criticality, Participant, USER_NODE_ID};
pub use workflow::{DEFAULT_STAGE_NAME, Stage, Workflow};
