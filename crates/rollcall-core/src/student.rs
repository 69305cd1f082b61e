//! Student: a member of the roster that attendance is recorded for.
//!
//! Students are seeded once when a store is built and never change
//! afterwards.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
  /// Stable identity string; unique within a roster.
  pub id:          String,
  pub name:        String,
  /// Display-only roll number, e.g. `"001"`.
  pub roll_number: String,
}

impl Student {
  pub fn new(
    id: impl Into<String>,
    name: impl Into<String>,
    roll_number: impl Into<String>,
  ) -> Self {
    Self {
      id:          id.into(),
      name:        name.into(),
      roll_number: roll_number.into(),
    }
  }
}
