//! Where a store gets "today" from.

use chrono::{Local, NaiveDate};

#[cfg(any(test, feature = "test-util"))]
pub use fixed::FixedClock;

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
  fn today(&self) -> NaiveDate;
}

/// The local calendar date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn today(&self) -> NaiveDate { Local::now().date_naive() }
}

// ─── Test clock ───────────────────────────────────────────────────────────────

#[cfg(any(test, feature = "test-util"))]
mod fixed {
  use std::sync::{
    Arc,
    atomic::{AtomicI32, Ordering},
  };

  use chrono::{Datelike, Days, NaiveDate};

  use super::Clock;

  /// A clock that stays on one day until told otherwise. Only built with
  /// the `test-util` feature.
  ///
  /// Clones share the same date, so a test can keep a handle and move the
  /// store's clock forward.
  #[derive(Debug, Clone)]
  pub struct FixedClock {
    // Days since the Common Era, as produced by `num_days_from_ce`.
    day: Arc<AtomicI32>,
  }

  impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
      Self { day: Arc::new(AtomicI32::new(date.num_days_from_ce())) }
    }

    pub fn set(&self, date: NaiveDate) {
      self.day.store(date.num_days_from_ce(), Ordering::SeqCst);
    }

    /// Move forward by `days`.
    pub fn advance(&self, days: u64) {
      if let Some(next) = self.today().checked_add_days(Days::new(days)) {
        self.set(next);
      }
    }
  }

  impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
      let day = self.day.load(Ordering::SeqCst);
      NaiveDate::from_num_days_from_ce_opt(day).unwrap_or(NaiveDate::MIN)
    }
  }
}
