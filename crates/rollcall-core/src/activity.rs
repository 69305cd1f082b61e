//! Activity: a curriculum session that attendance is recorded against.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A curriculum unit or session. Activities are appended and never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
  pub id:          String,
  pub title:       String,
  pub description: String,
  /// Creation date, assigned by the store.
  pub date:        NaiveDate,
}

/// Input to [`crate::store::AttendanceStore::add_activity`].
/// `id` and `date` are always set by the store; they are not accepted from
/// callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActivity {
  pub title:       String,
  #[serde(default)]
  pub description: String,
}

impl NewActivity {
  pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
    Self { title: title.into(), description: description.into() }
  }

  /// Reject a title that is empty or only whitespace.
  pub fn validate(&self) -> Result<()> {
    if self.title.trim().is_empty() {
      return Err(Error::Validation("activity title must not be blank".into()));
    }
    Ok(())
  }
}
