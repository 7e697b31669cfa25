use thiserror::Error;

/// Errors raised when looking up or loading catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("workflow not found: {0}")]
  WorkflowNotFound(String),

  #[error("participant not found: {0}")]
  ParticipantNotFound(String),

  #[error("private flow not found: {0}")]
  FlowNotFound(String),

  #[error("role not found in flow {flow_id}: {role_id}")]
  RoleNotFound { flow_id: String, role_id: String },

  #[error("duplicate participant id: {0}")]
  DuplicateParticipant(String),

  #[error("duplicate workflow id: {0}")]
  DuplicateWorkflow(String),

  /// Capability flags must be exactly 1 when present.
  #[error("participant {participant} has capability {capability} flagged {value}, expected 1")]
  InvalidCapability {
    participant: String,
    capability: String,
    value: u8,
  },

  #[error("invalid catalog: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}
