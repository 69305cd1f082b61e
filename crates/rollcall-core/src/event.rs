//! Change notifications published by a store after each successful
//! mutation.

use serde::{Deserialize, Serialize};

use crate::{activity::Activity, attendance::AttendanceRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreEvent {
  ActivityAdded { activity: Activity },
  AttendanceMarked {
    record:   AttendanceRecord,
    /// `true` when an existing record for the same day was replaced.
    replaced: bool,
  },
}

impl StoreEvent {
  /// Short dotted name, used as a log field.
  pub fn name(&self) -> &'static str {
    match self {
      Self::ActivityAdded { .. } => "activity.added",
      Self::AttendanceMarked { replaced: false, .. } => "attendance.marked",
      Self::AttendanceMarked { replaced: true, .. } => "attendance.updated",
    }
  }
}
