//! Derived attendance figures.
//!
//! Nothing here is stored; every figure is computed from a snapshot of the
//! store's collections at the time it is asked for. Percentages use integer
//! division and truncate toward zero, so 2 of 3 is 66, not 67.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{attendance::AttendanceRecord, student::Student};

/// `100 * part / whole`, or 0 when `whole` is 0.
///
/// `part` is expected not to exceed `whole`; if it does the result is above
/// 100, saturating at `u32::MAX` instead of wrapping.
pub fn percentage(part: usize, whole: usize) -> u32 {
  if whole == 0 {
    return 0;
  }
  u32::try_from(part.saturating_mul(100) / whole).unwrap_or(u32::MAX)
}

/// One student's attendance across every activity and date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentAttendance {
  pub student_id: String,
  pub present:    usize,
  /// Number of records (present or absent) for the student.
  pub total:      usize,
  pub percentage: u32,
}

/// Overall attendance for `student_id`. A student with no records is at 0%.
pub fn student_attendance(
  records: &[AttendanceRecord],
  student_id: &str,
) -> StudentAttendance {
  let (present, total) = records
    .iter()
    .filter(|r| r.student_id == student_id)
    .fold((0, 0), |(p, t), r| (p + usize::from(r.is_present), t + 1));

  StudentAttendance {
    student_id: student_id.to_owned(),
    present,
    total,
    percentage: percentage(present, total),
  }
}

/// Overall attendance for every student on the roster, in roster order.
/// Students without any records are included at 0%.
pub fn roster_attendance(
  students: &[Student],
  records: &[AttendanceRecord],
) -> Vec<StudentAttendance> {
  let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
  for r in records {
    let entry = counts.entry(r.student_id.as_str()).or_default();
    entry.0 += usize::from(r.is_present);
    entry.1 += 1;
  }

  students
    .iter()
    .map(|s| {
      let (present, total) = counts.get(s.id.as_str()).copied().unwrap_or_default();
      StudentAttendance {
        student_id: s.id.clone(),
        present,
        total,
        percentage: percentage(present, total),
      }
    })
    .collect()
}

/// Attendance for one activity on one day, measured against the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
  pub activity_id: String,
  pub date:        NaiveDate,
  /// Roster students marked present.
  pub present:     usize,
  /// Roster size.
  pub total:       usize,
  pub percentage:  u32,
}

/// Summarise a day's marks for an activity. Unmarked students count as
/// absent; marks for ids not on the roster are ignored.
pub fn day_summary(
  activity_id: &str,
  date: NaiveDate,
  students: &[Student],
  marks: &BTreeMap<String, bool>,
) -> DaySummary {
  let present = students
    .iter()
    .filter(|s| marks.get(&s.id).copied().unwrap_or(false))
    .count();
  let total = students.len();

  DaySummary {
    activity_id: activity_id.to_owned(),
    date,
    present,
    total,
    percentage: percentage(present, total),
  }
}
