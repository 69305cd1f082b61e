//! Handlers for `/activities` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/activities` | Creation order |
//! | `POST` | `/activities` | Body: `{"title":"...","description":"..."}`; 400 if the title is blank |
//! | `GET`  | `/activities/:id` | 404 if not found |
//! | `GET`  | `/activities/:id/summary` | Optional `?date=YYYY-MM-DD` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use rollcall_core::{
  activity::{Activity, NewActivity},
  stats::{self, DaySummary},
  store::AttendanceStore,
};

use crate::{
  DateParams,
  error::ApiError,
  extract::{JsonBody, QueryParams},
};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /activities`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Activity>>, ApiError>
where
  S: AttendanceStore,
{
  let activities = store.list_activities().await.map_err(ApiError::from_store)?;
  Ok(Json(activities))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /activities`: returns 201 + the stored [`Activity`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  JsonBody(body): JsonBody<NewActivity>,
) -> Result<impl IntoResponse, ApiError>
where
  S: AttendanceStore,
{
  let activity = store.add_activity(body).await.map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(activity)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /activities/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Activity>, ApiError>
where
  S: AttendanceStore,
{
  let activity = store
    .get_activity(&id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("activity {id} not found")))?;
  Ok(Json(activity))
}

// ─── Summary ──────────────────────────────────────────────────────────────────

/// `GET /activities/:id/summary[?date=YYYY-MM-DD]`
///
/// Present count against the whole roster for one day. Unmarked students
/// count as absent.
pub async fn summary<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  QueryParams(params): QueryParams<DateParams>,
) -> Result<Json<DaySummary>, ApiError>
where
  S: AttendanceStore,
{
  store
    .get_activity(&id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("activity {id} not found")))?;

  let date = params.date.unwrap_or_else(|| store.today());
  let students = store.list_students().await.map_err(ApiError::from_store)?;
  let marks = store
    .attendance_for_activity(&id, Some(date))
    .await
    .map_err(ApiError::from_store)?;

  Ok(Json(stats::day_summary(&id, date, &students, &marks)))
}
