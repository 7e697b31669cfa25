use thiserror::Error;

/// Errors raised by preference storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
  /// IO error when reading or writing the backing file.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  /// The backing file is not a JSON object of strings.
  #[error("invalid store file: {0}")]
  Json(#[from] serde_json::Error),
}
