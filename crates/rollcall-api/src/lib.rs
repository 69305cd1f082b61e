//! JSON REST API for Rollcall.
//!
//! Exposes an axum [`Router`] backed by any
//! [`rollcall_core::store::AttendanceStore`]. TLS and transport concerns are
//! the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", rollcall_api::api_router(store.clone()))
//! ```

pub mod activities;
pub mod attendance;
pub mod error;
pub mod extract;
pub mod students;

use std::sync::Arc;

use axum::{Router, routing::get};
use chrono::NaiveDate;
use rollcall_core::store::AttendanceStore;
use serde::Deserialize;

pub use error::ApiError;

/// `?date=YYYY-MM-DD`; omitted means the store's today.
#[derive(Debug, Default, Deserialize)]
pub struct DateParams {
  pub date: Option<NaiveDate>,
}

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: AttendanceStore + 'static,
{
  Router::new()
    // Students
    .route("/students", get(students::list::<S>))
    .route("/students/averages", get(students::averages::<S>))
    .route("/students/{id}", get(students::get_one::<S>))
    .route("/students/{id}/attendance", get(students::attendance::<S>))
    // Activities
    .route("/activities", get(activities::list::<S>).post(activities::create::<S>))
    .route("/activities/{id}", get(activities::get_one::<S>))
    .route("/activities/{id}/summary", get(activities::summary::<S>))
    .route(
      "/activities/{id}/attendance",
      get(attendance::for_activity::<S>).post(attendance::mark::<S>),
    )
    // Attendance
    .route("/attendance", get(attendance::list::<S>))
    .with_state(store)
}
