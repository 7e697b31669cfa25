use thiserror::Error;

/// Errors raised before a demo sequence starts.
#[derive(Debug, Error)]
pub enum DemoError {
  /// The party id was empty or whitespace.
  #[error("party id must not be empty")]
  EmptyPartyId,
}
