//! Integration tests for `MemoryStore`.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rollcall_core::{
  Error,
  activity::NewActivity,
  attendance::Mark,
  clock::FixedClock,
  event::StoreEvent,
  stats,
  store::AttendanceStore,
  student::Student,
};

use crate::{MemoryStore, Seed};

fn day(d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(2024, 9, d).unwrap() }

fn store() -> (MemoryStore, FixedClock) {
  let clock = FixedClock::new(day(2));
  let store = MemoryStore::with_clock(Seed::demo(), clock.clone()).expect("demo store");
  (store, clock)
}

// ─── Seeding ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn demo_seed_populates_roster_and_activities() {
  let (s, _) = store();

  let students = s.list_students().await.unwrap();
  assert_eq!(students.len(), 5);
  assert_eq!(students[0], Student::new("1", "John Doe", "001"));

  let activities = s.list_activities().await.unwrap();
  let ids: Vec<_> = activities.iter().map(|a| a.id.as_str()).collect();
  assert_eq!(ids, ["1", "2", "3"]);
  assert!(activities.iter().all(|a| a.date == day(2)));
  assert!(s.list_attendance(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn invalid_seed_is_rejected() {
  let seed = Seed {
    students:   vec![Student::new("7", "A", "1"), Student::new("7", "B", "2")],
    activities: vec![],
  };
  assert!(MemoryStore::with_clock(seed, FixedClock::new(day(1))).is_err());
}

#[tokio::test]
async fn get_student_missing_returns_none() {
  let (s, _) = store();
  assert!(s.get_student("3").await.unwrap().is_some());
  assert!(s.get_student("42").await.unwrap().is_none());
}

// ─── Activities ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn activity_ids_follow_creation_order() {
  let s = MemoryStore::with_clock(Seed::default(), FixedClock::new(day(1))).unwrap();

  for n in 1..=5 {
    let a = s
      .add_activity(NewActivity::new(format!("Session {n}"), ""))
      .await
      .unwrap();
    assert_eq!(a.id, n.to_string());
  }

  let all = s.list_activities().await.unwrap();
  assert_eq!(all.len(), 5);
  assert_eq!(all[4].title, "Session 5");
}

#[tokio::test]
async fn add_activity_continues_after_seeded_ids_and_uses_clock() {
  let (s, clock) = store();
  clock.set(day(10));

  let a = s
    .add_activity(NewActivity::new("Art", "Drawing and painting"))
    .await
    .unwrap();
  assert_eq!(a.id, "4");
  assert_eq!(a.date, day(10));

  let fetched = s.get_activity("4").await.unwrap().unwrap();
  assert_eq!(fetched, a);
}

#[tokio::test]
async fn blank_title_leaves_store_unchanged() {
  let (s, _) = store();

  let err = s.add_activity(NewActivity::new("   ", "x")).await.unwrap_err();
  assert!(matches!(err, Error::Validation(_)));
  assert_eq!(s.list_activities().await.unwrap().len(), 3);

  // The failed call must not consume an id.
  let a = s.add_activity(NewActivity::new("Music", "")).await.unwrap();
  assert_eq!(a.id, "4");
}

// ─── Marking ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn remarking_same_day_replaces_in_place() {
  let (s, _) = store();

  let first = s.mark_attendance(Mark::new("1", "1", true)).await.unwrap();
  let second = s.mark_attendance(Mark::new("1", "1", false)).await.unwrap();

  assert_eq!(first.id, second.id);
  assert!(!second.is_present);

  let records = s.list_attendance(None).await.unwrap();
  assert_eq!(records.len(), 1);
  assert_eq!(records[0], second);
}

#[tokio::test]
async fn marks_on_different_days_are_separate_records() {
  let (s, clock) = store();

  s.mark_attendance(Mark::new("1", "2", true)).await.unwrap();
  clock.advance(1);
  let next = s.mark_attendance(Mark::new("1", "2", false)).await.unwrap();

  assert_eq!(next.id, "2");
  assert_eq!(next.date, day(3));
  assert_eq!(s.list_attendance(Some("2")).await.unwrap().len(), 2);
}

#[tokio::test]
async fn explicit_date_overrides_clock() {
  let (s, _) = store();

  let r = s
    .mark_attendance(Mark::new("2", "3", true).on(day(1)))
    .await
    .unwrap();
  assert_eq!(r.date, day(1));

  assert!(s.attendance_for_activity("2", None).await.unwrap().is_empty());
  let past = s.attendance_for_activity("2", Some(day(1))).await.unwrap();
  assert_eq!(past, BTreeMap::from([("3".to_string(), true)]));
}

#[tokio::test]
async fn record_ids_survive_interleaved_updates() {
  let (s, _) = store();

  let a = s.mark_attendance(Mark::new("1", "1", true)).await.unwrap();
  let b = s.mark_attendance(Mark::new("1", "2", true)).await.unwrap();
  s.mark_attendance(Mark::new("1", "1", false)).await.unwrap();
  let c = s.mark_attendance(Mark::new("2", "1", true)).await.unwrap();

  assert_eq!((a.id.as_str(), b.id.as_str(), c.id.as_str()), ("1", "2", "3"));
}

#[tokio::test]
async fn unknown_ids_are_rejected_without_side_effects() {
  let (s, _) = store();

  let err = s.mark_attendance(Mark::new("99", "1", true)).await.unwrap_err();
  assert_eq!(err, Error::ActivityNotFound("99".into()));
  assert!(err.is_not_found());

  let err = s.mark_attendance(Mark::new("1", "99", true)).await.unwrap_err();
  assert_eq!(err, Error::StudentNotFound("99".into()));

  assert!(s.list_attendance(None).await.unwrap().is_empty());
}

// ─── Queries ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn attendance_for_activity_filters_by_activity_and_date() {
  let (s, clock) = store();

  s.mark_attendance(Mark::new("1", "1", true)).await.unwrap();
  s.mark_attendance(Mark::new("1", "2", false)).await.unwrap();
  s.mark_attendance(Mark::new("2", "3", true)).await.unwrap();
  clock.advance(1);
  s.mark_attendance(Mark::new("1", "4", true)).await.unwrap();

  let marks = s.attendance_for_activity("1", Some(day(2))).await.unwrap();
  assert_eq!(
    marks,
    BTreeMap::from([("1".to_string(), true), ("2".to_string(), false)])
  );

  let today = s.attendance_for_activity("1", None).await.unwrap();
  assert_eq!(today, BTreeMap::from([("4".to_string(), true)]));

  assert!(s.attendance_for_activity("nope", None).await.unwrap().is_empty());
}

#[tokio::test]
async fn overall_percentages_from_snapshot() {
  let (s, clock) = store();

  for (activity, present) in [("1", true), ("2", true), ("3", false)] {
    s.mark_attendance(Mark::new(activity, "1", present)).await.unwrap();
  }
  clock.advance(1);
  s.mark_attendance(Mark::new("1", "1", true)).await.unwrap();

  let records = s.list_attendance(None).await.unwrap();
  assert_eq!(stats::student_attendance(&records, "1").percentage, 75);
  assert_eq!(stats::student_attendance(&records, "5").percentage, 0);
}

#[tokio::test]
async fn end_to_end_present_then_absent() {
  let (s, _) = store();
  let d = s.today();

  s.mark_attendance(Mark::new("1", "1", true).on(d)).await.unwrap();
  s.mark_attendance(Mark::new("1", "1", false).on(d)).await.unwrap();

  let matching: Vec<_> = s
    .list_attendance(Some("1"))
    .await
    .unwrap()
    .into_iter()
    .filter(|r| r.matches("1", "1", d))
    .collect();
  assert_eq!(matching.len(), 1);
  assert!(!matching[0].is_present);

  let marks = s.attendance_for_activity("1", Some(d)).await.unwrap();
  assert_eq!(marks, BTreeMap::from([("1".to_string(), false)]));
}

// ─── Events ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn subscribers_see_one_event_per_mutation() {
  let (s, _) = store();
  let mut rx = s.subscribe();

  let activity = s.add_activity(NewActivity::new("Art", "")).await.unwrap();
  s.mark_attendance(Mark::new("4", "1", true)).await.unwrap();
  s.mark_attendance(Mark::new("4", "1", false)).await.unwrap();
  // Rejected calls publish nothing.
  let _ = s.mark_attendance(Mark::new("4", "99", true)).await;

  assert_eq!(rx.recv().await.unwrap(), StoreEvent::ActivityAdded { activity });

  match rx.recv().await.unwrap() {
    StoreEvent::AttendanceMarked { record, replaced } => {
      assert!(record.is_present);
      assert!(!replaced);
    }
    other => panic!("unexpected event: {other:?}"),
  }

  let third = rx.recv().await.unwrap();
  assert_eq!(third.name(), "attendance.updated");

  assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn clones_share_state() {
  let (s, _) = store();
  let other = s.clone();

  other.add_activity(NewActivity::new("Art", "")).await.unwrap();
  assert_eq!(s.list_activities().await.unwrap().len(), 4);
}

#[tokio::test]
async fn concurrent_marks_for_same_triple_never_duplicate() {
  let (s, _) = store();

  let handles: Vec<_> = (0..32)
    .map(|i| {
      let s = s.clone();
      tokio::spawn(async move { s.mark_attendance(Mark::new("1", "1", i % 2 == 0)).await })
    })
    .collect();
  for h in handles {
    h.await.unwrap().unwrap();
  }

  assert_eq!(s.list_attendance(None).await.unwrap().len(), 1);
}
