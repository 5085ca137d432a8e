//! Commitment — a non-course scheduled obligation.
//!
//! A commitment (a recurring job shift, a rehearsal, a blocked-off study
//! hour) shares the scheduling and display concerns of a course and none
//! of the registrar semantics: no status, instructors, credit hours, or
//! term. It exists so conflict checks can treat everything on a calendar
//! uniformly.

use serde::{Deserialize, Serialize};

use crate::{
  colors::{CourseColors, Palette},
  conflict,
  meeting::CourseMeeting,
  schedule::{CourseSchedule, ScheduleSnapshot},
};

/// Serialized commitment shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitmentSnapshot {
  pub unique_id:   u32,
  pub number:      String,
  pub full_name:   String,
  pub course_name: String,
  #[serde(default)]
  pub description: Option<Vec<String>>,
  #[serde(default)]
  pub schedule:    ScheduleSnapshot,
  #[serde(default)]
  pub colors:      Option<CourseColors>,
}

/// A non-course obligation occupying calendar time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commitment {
  pub unique_id:   u32,
  pub number:      String,
  pub full_name:   String,
  pub course_name: String,
  pub description: Option<Vec<String>>,
  pub schedule:    CourseSchedule,
  pub colors:      CourseColors,
}

impl Commitment {
  /// Build an owned commitment from snapshot data, with the same schedule
  /// ownership and color defaulting as course construction.
  pub fn from_snapshot(
    snapshot: CommitmentSnapshot,
    palette: &Palette,
  ) -> Self {
    Self {
      unique_id:   snapshot.unique_id,
      number:      snapshot.number,
      full_name:   snapshot.full_name,
      course_name: snapshot.course_name,
      description: snapshot.description,
      schedule:    CourseSchedule::from_snapshot(snapshot.schedule),
      colors:      snapshot
        .colors
        .unwrap_or_else(|| palette.default_pair()),
    }
  }

  /// Every conflicting meeting pair between this commitment and any other
  /// schedule owner, row-major: our meetings on the outer loop.
  pub fn conflicts_with<'a>(
    &'a self,
    other: &'a CourseSchedule,
  ) -> Vec<(&'a CourseMeeting, &'a CourseMeeting)> {
    conflict::conflicting_pairs(&self.schedule, other)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::meeting::{DayOfWeek, MeetingSnapshot};

  fn snapshot() -> CommitmentSnapshot {
    serde_json::from_str(
      r#"{
        "unique_id": 1,
        "number": "EV 1",
        "full_name": "Evening shift at the library",
        "course_name": "Library shift",
        "schedule": {
          "meetings": [
            { "days": ["T", "TH"], "start_minutes": 1080, "end_minutes": 1200 }
          ]
        }
      }"#,
    )
    .unwrap()
  }

  #[test]
  fn absent_colors_get_the_default_pair() {
    let built = Commitment::from_snapshot(snapshot(), &Palette);
    assert_eq!(built.colors, Palette.default_pair());
  }

  #[test]
  fn supplied_colors_are_kept() {
    let mut snap = snapshot();
    let supplied = Palette.resolve("slate", 300);
    snap.colors = Some(supplied.clone());
    let built = Commitment::from_snapshot(snap, &Palette);
    assert_eq!(built.colors, supplied);
  }

  #[test]
  fn schedule_is_reconstructed_in_order() {
    let built = Commitment::from_snapshot(snapshot(), &Palette);
    assert_eq!(built.schedule.meetings.len(), 1);
    assert_eq!(built.schedule.meetings[0].days, vec![
      DayOfWeek::Tuesday,
      DayOfWeek::Thursday
    ]);
  }

  #[test]
  fn conflicts_against_any_schedule_owner() {
    let built = Commitment::from_snapshot(snapshot(), &Palette);
    let other = CourseSchedule::from_snapshot(ScheduleSnapshot {
      meetings: vec![MeetingSnapshot {
        days:          vec![DayOfWeek::Thursday],
        start_minutes: 1140,
        end_minutes:   1260,
        location:      None,
      }],
    });
    let pairs = built.conflicts_with(&other);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0.start_minutes, 1080);
    assert_eq!(pairs[0].1.start_minutes, 1140);
  }
}
