//! Initial contents of a store.

use std::collections::HashSet;

use rollcall_core::{Error, Result, activity::NewActivity, student::Student};
use serde::{Deserialize, Serialize};

/// The roster and starting activities a [`MemoryStore`](crate::MemoryStore)
/// is built from. Students can only enter a store through its seed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
  #[serde(default)]
  pub students:   Vec<Student>,
  /// Created in order, dated on the day the store is built.
  #[serde(default)]
  pub activities: Vec<NewActivity>,
}

impl Seed {
  /// Five students and three subjects.
  pub fn demo() -> Self {
    Self {
      students:   vec![
        Student::new("1", "John Doe", "001"),
        Student::new("2", "Jane Smith", "002"),
        Student::new("3", "Bob Johnson", "003"),
        Student::new("4", "Alice Williams", "004"),
        Student::new("5", "Charlie Brown", "005"),
      ],
      activities: vec![
        NewActivity::new("Mathematics", "Algebra and Geometry"),
        NewActivity::new("Science", "Physics and Chemistry"),
        NewActivity::new("English", "Literature and Grammar"),
      ],
    }
  }

  /// Reject duplicate or blank student ids and blank activity titles.
  pub fn validate(&self) -> Result<()> {
    let mut seen = HashSet::new();
    for s in &self.students {
      if s.id.trim().is_empty() {
        return Err(Error::Validation("student id must not be blank".into()));
      }
      if !seen.insert(s.id.as_str()) {
        return Err(Error::Validation(format!("duplicate student id: {}", s.id)));
      }
    }
    self.activities.iter().try_for_each(NewActivity::validate)
  }
}
