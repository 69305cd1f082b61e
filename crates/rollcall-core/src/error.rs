//! Error types for `rollcall-core`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("student not found: {0}")]
  StudentNotFound(String),

  #[error("activity not found: {0}")]
  ActivityNotFound(String),

  /// A required field was blank or a seed was inconsistent.
  #[error("validation failed: {0}")]
  Validation(String),
}

impl Error {
  /// `true` for errors caused by a dangling student or activity id.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::StudentNotFound(_) | Self::ActivityNotFound(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
