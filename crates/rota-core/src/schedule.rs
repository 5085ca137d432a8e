//! A section's schedule — the ordered list of its meetings.

use serde::{Deserialize, Serialize};

use crate::meeting::{CourseMeeting, MeetingSnapshot};

/// Serialized schedule shape handed over by the scraper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
  #[serde(default)]
  pub meetings: Vec<MeetingSnapshot>,
}

/// The meetings of one section, in the order the registrar lists them.
/// Order matters: conflict enumeration walks it as declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSchedule {
  pub meetings: Vec<CourseMeeting>,
}

impl CourseSchedule {
  /// Re-construct an owned schedule from snapshot data, preserving meeting
  /// order.
  pub fn from_snapshot(snapshot: ScheduleSnapshot) -> Self {
    Self {
      meetings: snapshot
        .meetings
        .into_iter()
        .map(CourseMeeting::from_snapshot)
        .collect(),
    }
  }

  /// Whether any meeting of `self` collides with any meeting of `other`.
  pub fn conflicts_with(&self, other: &CourseSchedule) -> bool {
    self
      .meetings
      .iter()
      .any(|m| other.meetings.iter().any(|o| m.is_conflicting(o)))
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::meeting::DayOfWeek;

  fn snapshot(intervals: &[(u16, u16)]) -> ScheduleSnapshot {
    ScheduleSnapshot {
      meetings: intervals
        .iter()
        .map(|&(start, end)| MeetingSnapshot {
          days:          vec![DayOfWeek::Monday],
          start_minutes: start,
          end_minutes:   end,
          location:      None,
        })
        .collect(),
    }
  }

  #[test]
  fn reconstruction_preserves_declaration_order() {
    let schedule =
      CourseSchedule::from_snapshot(snapshot(&[(600, 660), (480, 540)]));
    let starts: Vec<u16> =
      schedule.meetings.iter().map(|m| m.start_minutes).collect();
    assert_eq!(starts, vec![600, 480]);
  }

  #[test]
  fn empty_snapshot_yields_empty_schedule() {
    let schedule = CourseSchedule::from_snapshot(ScheduleSnapshot::default());
    assert!(schedule.meetings.is_empty());
  }

  #[test]
  fn conflicts_with_is_an_any_pair_check() {
    let a = CourseSchedule::from_snapshot(snapshot(&[(600, 660)]));
    let b = CourseSchedule::from_snapshot(snapshot(&[(480, 540), (630, 690)]));
    let c = CourseSchedule::from_snapshot(snapshot(&[(480, 540)]));
    assert!(a.conflicts_with(&b));
    assert!(!a.conflicts_with(&c));
  }
}
