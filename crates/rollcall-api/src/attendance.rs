//! Handlers for marking and reading attendance.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/activities/:id/attendance` | Optional `?date=YYYY-MM-DD`; map of student id → present |
//! | `POST` | `/activities/:id/attendance` | Body: [`MarkBody`]; returns the stored record |
//! | `GET`  | `/attendance` | Optional `?student_id=` |

use std::{collections::BTreeMap, sync::Arc};

use axum::{
  Json,
  extract::{Path, State},
};
use chrono::NaiveDate;
use rollcall_core::{
  attendance::{AttendanceRecord, Mark},
  store::AttendanceStore,
};
use serde::Deserialize;

use crate::{
  DateParams,
  error::ApiError,
  extract::{JsonBody, QueryParams},
};

// ─── Per activity ─────────────────────────────────────────────────────────────

/// `GET /activities/:id/attendance[?date=YYYY-MM-DD]`
///
/// An unknown activity yields an empty map rather than a 404.
pub async fn for_activity<S>(
  State(store): State<Arc<S>>,
  Path(activity_id): Path<String>,
  QueryParams(params): QueryParams<DateParams>,
) -> Result<Json<BTreeMap<String, bool>>, ApiError>
where
  S: AttendanceStore,
{
  let marks = store
    .attendance_for_activity(&activity_id, params.date)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(marks))
}

/// JSON body accepted by `POST /activities/:id/attendance`.
#[derive(Debug, Deserialize)]
pub struct MarkBody {
  pub student_id: String,
  pub is_present: bool,
  /// Defaults to the store's today.
  pub date:       Option<NaiveDate>,
}

/// `POST /activities/:id/attendance`: upserts the mark for that day.
pub async fn mark<S>(
  State(store): State<Arc<S>>,
  Path(activity_id): Path<String>,
  JsonBody(body): JsonBody<MarkBody>,
) -> Result<Json<AttendanceRecord>, ApiError>
where
  S: AttendanceStore,
{
  let mark = Mark {
    activity_id,
    student_id: body.student_id,
    is_present: body.is_present,
    date: body.date,
  };
  let record = store.mark_attendance(mark).await.map_err(ApiError::from_store)?;
  Ok(Json(record))
}

// ─── All records ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub student_id: Option<String>,
}

/// `GET /attendance[?student_id=<id>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  QueryParams(params): QueryParams<ListParams>,
) -> Result<Json<Vec<AttendanceRecord>>, ApiError>
where
  S: AttendanceStore,
{
  let records = store
    .list_attendance(params.student_id.as_deref())
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(records))
}
