//! Instructor records attached to a course section.
//!
//! Storage only: the registrar's name fields are carried as-is. Formatting
//! belongs to display layers.

use serde::{Deserialize, Serialize};

/// Serialized instructor shape handed over by the scraper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructorSnapshot {
  pub full_name:      String,
  #[serde(default)]
  pub first_name:     Option<String>,
  #[serde(default)]
  pub last_name:      Option<String>,
  #[serde(default)]
  pub middle_initial: Option<String>,
}

/// An instructor of record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
  pub full_name:      String,
  pub first_name:     Option<String>,
  pub last_name:      Option<String>,
  pub middle_initial: Option<String>,
}

impl Instructor {
  /// Re-construct an owned instructor from snapshot data.
  pub fn from_snapshot(snapshot: InstructorSnapshot) -> Self {
    Self {
      full_name:      snapshot.full_name,
      first_name:     snapshot.first_name,
      last_name:      snapshot.last_name,
      middle_initial: snapshot.middle_initial,
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn snapshot_fields_carry_over_verbatim() {
    let snapshot: InstructorSnapshot = serde_json::from_str(
      r#"{
        "full_name": "Liddell, Alice P",
        "first_name": "Alice",
        "last_name": "Liddell",
        "middle_initial": "P"
      }"#,
    )
    .unwrap();

    let instructor = Instructor::from_snapshot(snapshot);
    assert_eq!(instructor.full_name, "Liddell, Alice P");
    assert_eq!(instructor.first_name.as_deref(), Some("Alice"));
    assert_eq!(instructor.last_name.as_deref(), Some("Liddell"));
    assert_eq!(instructor.middle_initial.as_deref(), Some("P"));
  }

  #[test]
  fn name_parts_are_optional() {
    let snapshot: InstructorSnapshot =
      serde_json::from_str(r#"{ "full_name": "Staff" }"#).unwrap();

    let instructor = Instructor::from_snapshot(snapshot);
    assert_eq!(instructor.full_name, "Staff");
    assert!(instructor.first_name.is_none());
    assert!(instructor.last_name.is_none());
  }
}
