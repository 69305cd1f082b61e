//! The `AttendanceStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `rollcall-store-memory`). Higher layers (`rollcall-api`,
//! `rollcall-server`) depend on this abstraction, not on any concrete
//! backend.

use std::{collections::BTreeMap, future::Future};

use chrono::NaiveDate;

use crate::{
  activity::{Activity, NewActivity},
  attendance::{AttendanceRecord, Mark},
  student::Student,
};

/// Abstraction over a Rollcall attendance store backend.
///
/// Students are fixed when the store is built. Activities are append-only.
/// Attendance records are upserted per `(student, activity, day)` and never
/// removed.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait AttendanceStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// The date the store considers to be today.
  fn today(&self) -> NaiveDate;

  // ── Students ──────────────────────────────────────────────────────────

  /// All students, in roster order.
  fn list_students(
    &self,
  ) -> impl Future<Output = Result<Vec<Student>, Self::Error>> + Send + '_;

  /// Retrieve a student by id. Returns `None` if not found.
  fn get_student<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Student>, Self::Error>> + Send + 'a;

  // ── Activities ────────────────────────────────────────────────────────

  /// Append a new activity dated today. The id is assigned by the store.
  fn add_activity(
    &self,
    input: NewActivity,
  ) -> impl Future<Output = Result<Activity, Self::Error>> + Send + '_;

  /// All activities, in creation order.
  fn list_activities(
    &self,
  ) -> impl Future<Output = Result<Vec<Activity>, Self::Error>> + Send + '_;

  /// Retrieve an activity by id. Returns `None` if not found.
  fn get_activity<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Activity>, Self::Error>> + Send + 'a;

  // ── Attendance ────────────────────────────────────────────────────────

  /// Record a student's presence for an activity on a day, replacing any
  /// earlier mark for the same day. Returns the stored record.
  ///
  /// Returns an error if the student or activity does not exist.
  fn mark_attendance(
    &self,
    mark: Mark,
  ) -> impl Future<Output = Result<AttendanceRecord, Self::Error>> + Send + '_;

  /// Marks for one activity on one day, keyed by student id.
  ///
  /// `date` defaults to [`today`](Self::today). Unknown activities yield an
  /// empty map.
  fn attendance_for_activity<'a>(
    &'a self,
    activity_id: &'a str,
    date: Option<NaiveDate>,
  ) -> impl Future<Output = Result<BTreeMap<String, bool>, Self::Error>> + Send + 'a;

  /// Every attendance record, optionally restricted to one student.
  fn list_attendance<'a>(
    &'a self,
    student_id: Option<&'a str>,
  ) -> impl Future<Output = Result<Vec<AttendanceRecord>, Self::Error>> + Send + 'a;
}
