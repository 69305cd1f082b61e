//! [`MemoryStore`]: the in-memory implementation of [`AttendanceStore`].

use std::{collections::BTreeMap, sync::Arc};

use chrono::NaiveDate;
use tokio::sync::{RwLock, broadcast};

use rollcall_core::{
  Error, Result,
  activity::{Activity, NewActivity},
  attendance::{AttendanceRecord, Mark},
  clock::{Clock, SystemClock},
  event::StoreEvent,
  store::AttendanceStore,
  student::Student,
};

use crate::Seed;

/// Buffer size of the change-notification channel.
const EVENT_CAPACITY: usize = 256;

// ─── State ───────────────────────────────────────────────────────────────────

/// The three collections plus the id counters. Only ever touched while the
/// store's lock is held.
struct State {
  students:         Vec<Student>,
  activities:       Vec<Activity>,
  attendance:       Vec<AttendanceRecord>,
  next_activity_id: u64,
  next_record_id:   u64,
}

impl State {
  fn push_activity(&mut self, input: NewActivity, date: NaiveDate) -> Activity {
    let activity = Activity {
      id: self.next_activity_id.to_string(),
      title: input.title,
      description: input.description,
      date,
    };
    self.next_activity_id += 1;
    self.activities.push(activity.clone());
    activity
  }

  fn has_student(&self, id: &str) -> bool {
    self.students.iter().any(|s| s.id == id)
  }

  fn has_activity(&self, id: &str) -> bool {
    self.activities.iter().any(|a| a.id == id)
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Rollcall attendance store held entirely in memory.
///
/// Cloning is cheap; clones share the same collections and event channel.
#[derive(Clone)]
pub struct MemoryStore {
  state:  Arc<RwLock<State>>,
  events: broadcast::Sender<StoreEvent>,
  clock:  Arc<dyn Clock>,
}

impl MemoryStore {
  /// Build a store from `seed`, dating seeded activities by the host's
  /// calendar.
  pub fn new(seed: Seed) -> Result<Self> { Self::with_clock(seed, SystemClock) }

  /// Build a store from `seed` that reads "today" from `clock`.
  pub fn with_clock(seed: Seed, clock: impl Clock + 'static) -> Result<Self> {
    seed.validate()?;

    let today = clock.today();
    let mut state = State {
      students:         seed.students,
      activities:       Vec::new(),
      attendance:       Vec::new(),
      next_activity_id: 1,
      next_record_id:   1,
    };
    for input in seed.activities {
      state.push_activity(input, today);
    }

    tracing::debug!(
      students = state.students.len(),
      activities = state.activities.len(),
      "seeded memory store"
    );

    let (events, _) = broadcast::channel(EVENT_CAPACITY);
    Ok(Self {
      state: Arc::new(RwLock::new(state)),
      events,
      clock: Arc::new(clock),
    })
  }

  /// The demo roster and activities, dated by the host's calendar.
  pub fn demo() -> Result<Self> { Self::new(Seed::demo()) }

  /// Receive a [`StoreEvent`] for every successful mutation made after this
  /// call. Slow receivers observe `RecvError::Lagged`.
  pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
    self.events.subscribe()
  }

  fn publish(&self, event: StoreEvent) {
    // An error only means nobody is subscribed.
    let _ = self.events.send(event);
  }
}

// ─── AttendanceStore impl ────────────────────────────────────────────────────

impl AttendanceStore for MemoryStore {
  type Error = Error;

  fn today(&self) -> NaiveDate { self.clock.today() }

  // ── Students ──────────────────────────────────────────────────────────────

  async fn list_students(&self) -> Result<Vec<Student>> {
    Ok(self.state.read().await.students.clone())
  }

  async fn get_student(&self, id: &str) -> Result<Option<Student>> {
    let state = self.state.read().await;
    Ok(state.students.iter().find(|s| s.id == id).cloned())
  }

  // ── Activities ────────────────────────────────────────────────────────────

  async fn add_activity(&self, input: NewActivity) -> Result<Activity> {
    input.validate()?;

    let mut state = self.state.write().await;
    let activity = state.push_activity(input, self.clock.today());

    tracing::debug!(id = %activity.id, title = %activity.title, "activity added");
    // Published under the lock so subscribers see events in mutation order.
    self.publish(StoreEvent::ActivityAdded { activity: activity.clone() });
    Ok(activity)
  }

  async fn list_activities(&self) -> Result<Vec<Activity>> {
    Ok(self.state.read().await.activities.clone())
  }

  async fn get_activity(&self, id: &str) -> Result<Option<Activity>> {
    let state = self.state.read().await;
    Ok(state.activities.iter().find(|a| a.id == id).cloned())
  }

  // ── Attendance ────────────────────────────────────────────────────────────

  async fn mark_attendance(&self, mark: Mark) -> Result<AttendanceRecord> {
    let date = mark.date.unwrap_or_else(|| self.clock.today());

    // Lookup and write happen under one write guard so two marks for the
    // same triple cannot both append.
    let mut state = self.state.write().await;

    if !state.has_activity(&mark.activity_id) {
      return Err(Error::ActivityNotFound(mark.activity_id));
    }
    if !state.has_student(&mark.student_id) {
      return Err(Error::StudentNotFound(mark.student_id));
    }

    let existing = state
      .attendance
      .iter()
      .position(|r| r.matches(&mark.activity_id, &mark.student_id, date));

    let (record, replaced) = match existing {
      Some(index) => {
        let slot = &mut state.attendance[index];
        slot.is_present = mark.is_present;
        (slot.clone(), true)
      }
      None => {
        let record = AttendanceRecord {
          id: state.next_record_id.to_string(),
          student_id: mark.student_id,
          activity_id: mark.activity_id,
          date,
          is_present: mark.is_present,
        };
        state.next_record_id += 1;
        state.attendance.push(record.clone());
        (record, false)
      }
    };

    tracing::debug!(
      id = %record.id,
      activity = %record.activity_id,
      student = %record.student_id,
      %date,
      present = record.is_present,
      replaced,
      "attendance marked"
    );
    self.publish(StoreEvent::AttendanceMarked { record: record.clone(), replaced });
    Ok(record)
  }

  async fn attendance_for_activity(
    &self,
    activity_id: &str,
    date: Option<NaiveDate>,
  ) -> Result<BTreeMap<String, bool>> {
    let date = date.unwrap_or_else(|| self.clock.today());
    let state = self.state.read().await;

    Ok(
      state
        .attendance
        .iter()
        .filter(|r| r.activity_id == activity_id && r.date == date)
        .map(|r| (r.student_id.clone(), r.is_present))
        .collect(),
    )
  }

  async fn list_attendance(&self, student_id: Option<&str>) -> Result<Vec<AttendanceRecord>> {
    let state = self.state.read().await;
    Ok(
      state
        .attendance
        .iter()
        .filter(|r| student_id.is_none_or(|id| r.student_id == id))
        .cloned()
        .collect(),
    )
  }
}
