//! Meeting-pair conflict enumeration between two schedules.

use tracing::trace;

use crate::{meeting::CourseMeeting, schedule::CourseSchedule};

/// Enumerate every conflicting meeting pair between two schedules.
///
/// The cartesian product is walked with `a`'s meetings on the outer loop
/// and `b`'s on the inner, each in declaration order, so results come back
/// row-major. Swapping the arguments yields the same logical pairs with
/// their elements swapped, in the swapped walk order.
///
/// Empty schedules and conflict-free pairs produce an empty vec, never an
/// error. Both inputs are borrowed immutably.
pub fn conflicting_pairs<'a>(
  a: &'a CourseSchedule,
  b: &'a CourseSchedule,
) -> Vec<(&'a CourseMeeting, &'a CourseMeeting)> {
  let mut pairs = Vec::new();
  for ours in &a.meetings {
    for theirs in &b.meetings {
      if ours.is_conflicting(theirs) {
        pairs.push((ours, theirs));
      }
    }
  }
  trace!(
    checked = a.meetings.len() * b.meetings.len(),
    conflicting = pairs.len(),
    "conflict scan"
  );
  pairs
}

// ─── Tests ───────────────────────────────────────────────────────────────────
