//! Attendance records: one student's mark for one activity on one day.
//!
//! At most one record exists per `(student_id, activity_id, date)`. Marking
//! the same triple again replaces the existing record in place and keeps its
//! id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
  pub id:          String,
  pub student_id:  String,
  pub activity_id: String,
  /// The day the mark applies to.
  pub date:        NaiveDate,
  pub is_present:  bool,
}

impl AttendanceRecord {
  /// Whether this record is the one keyed by the given triple.
  pub fn matches(
    &self,
    activity_id: &str,
    student_id: &str,
    date: NaiveDate,
  ) -> bool {
    self.activity_id == activity_id
      && self.student_id == student_id
      && self.date == date
  }
}

/// Input to [`crate::store::AttendanceStore::mark_attendance`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
  pub activity_id: String,
  pub student_id:  String,
  pub is_present:  bool,
  /// The day to mark. `None` means today according to the store's clock.
  #[serde(default)]
  pub date:        Option<NaiveDate>,
}

impl Mark {
  /// A mark for today.
  pub fn new(
    activity_id: impl Into<String>,
    student_id: impl Into<String>,
    is_present: bool,
  ) -> Self {
    Self {
      activity_id: activity_id.into(),
      student_id: student_id.into(),
      is_present,
      date: None,
    }
  }

  pub fn on(mut self, date: NaiveDate) -> Self {
    self.date = Some(date);
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record() -> AttendanceRecord {
    AttendanceRecord {
      id:          "1".into(),
      student_id:  "s".into(),
      activity_id: "a".into(),
      date:        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
      is_present:  true,
    }
  }

  #[test]
  fn matches_requires_all_three_keys() {
    let r = record();
    let d = r.date;
    let other = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();

    assert!(r.matches("a", "s", d));
    assert!(!r.matches("b", "s", d));
    assert!(!r.matches("a", "t", d));
    assert!(!r.matches("a", "s", other));
  }

  #[test]
  fn record_date_serialises_as_plain_day() {
    let json = serde_json::to_value(record()).unwrap();
    assert_eq!(json["date"], "2024-03-01");
    assert_eq!(json["is_present"], true);
  }
}
