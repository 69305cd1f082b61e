//! Handlers for `/students` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/students` | Roster order |
//! | `GET`  | `/students/averages` | Overall attendance for every student |
//! | `GET`  | `/students/:id` | 404 if not found |
//! | `GET`  | `/students/:id/attendance` | Overall attendance for one student |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use rollcall_core::{
  stats::{self, StudentAttendance},
  store::AttendanceStore,
  student::Student,
};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /students`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Student>>, ApiError>
where
  S: AttendanceStore,
{
  let students = store.list_students().await.map_err(ApiError::from_store)?;
  Ok(Json(students))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /students/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Student>, ApiError>
where
  S: AttendanceStore,
{
  let student = store
    .get_student(&id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("student {id} not found")))?;
  Ok(Json(student))
}

// ─── Attendance ───────────────────────────────────────────────────────────────

/// `GET /students/:id/attendance`: present/total across every activity and
/// date.
pub async fn attendance<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<StudentAttendance>, ApiError>
where
  S: AttendanceStore,
{
  store
    .get_student(&id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("student {id} not found")))?;

  let records = store
    .list_attendance(Some(&id))
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(stats::student_attendance(&records, &id)))
}

/// `GET /students/averages`
pub async fn averages<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<StudentAttendance>>, ApiError>
where
  S: AttendanceStore,
{
  let students = store.list_students().await.map_err(ApiError::from_store)?;
  let records = store.list_attendance(None).await.map_err(ApiError::from_store)?;
  Ok(Json(stats::roster_attendance(&students, &records)))
}
