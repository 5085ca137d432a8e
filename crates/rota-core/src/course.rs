//! Course — the canonical record for one registrar section.
//!
//! A [`Course`] is built exactly once, from a [`CourseSnapshot`] the
//! upstream scraper has already deserialized, and is an immutable value
//! afterwards. Construction is where the defaults get resolved and where
//! the Summer identifier repair runs.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::debug;

use crate::{
  colors::{CourseColors, Palette},
  conflict,
  instructor::{Instructor, InstructorSnapshot},
  meeting::CourseMeeting,
  normalize::normalize_summer_term,
  schedule::{CourseSchedule, ScheduleSnapshot},
  semester::{Season, Semester},
};

// ─── Registrar enums ─────────────────────────────────────────────────────────

/// Section enrollment status as the registrar reports it.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
  Open,
  Closed,
  Waitlisted,
  Cancelled,
}

/// How a section is delivered.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display,
)]
pub enum InstructionMode {
  Online,
  #[serde(rename = "In Person")]
  #[strum(serialize = "In Person")]
  InPerson,
  Hybrid,
}

// ─── Snapshot ────────────────────────────────────────────────────────────────

/// The fully-deserialized input shape a [`Course`] is built from.
///
/// Produced upstream by the scraper. Construction consumes it — callers
/// must treat a snapshot as spent once handed over. Optional fields carry
/// serde defaults so a snapshot deserializes whether or not the scraper
/// captured them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSnapshot {
  pub unique_id:        u32,
  pub number:           String,
  pub department:       String,
  pub full_name:        String,
  pub course_name:      String,
  pub credit_hours:     f32,
  pub status:           Status,
  pub instruction_mode: InstructionMode,
  #[serde(default)]
  pub description:      Option<Vec<String>>,
  #[serde(default)]
  pub flags:            Vec<String>,
  #[serde(default)]
  pub core:             Vec<String>,
  #[serde(default)]
  pub instructors:      Vec<InstructorSnapshot>,
  #[serde(default)]
  pub schedule:         ScheduleSnapshot,
  #[serde(default)]
  pub colors:           Option<CourseColors>,
  pub semester:         Semester,
  /// Epoch milliseconds; zero or absent means "not recorded".
  #[serde(default)]
  pub scraped_at:       i64,
  pub url:              String,
  #[serde(default)]
  pub register_url:     Option<String>,
  #[serde(default)]
  pub is_reserved:      bool,
}

// ─── Course ──────────────────────────────────────────────────────────────────

/// The canonical record for one course section.
///
/// Every field is fully populated after construction: `colors` is always
/// present, `scraped_at` is always a positive timestamp, and for Summer
/// sections the sub-term letter lives on `number`, never on `department`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
  pub unique_id:        u32,
  pub number:           String,
  pub department:       String,
  pub full_name:        String,
  pub course_name:      String,
  pub credit_hours:     f32,
  pub status:           Status,
  pub instruction_mode: InstructionMode,
  pub description:      Option<Vec<String>>,
  pub flags:            Vec<String>,
  pub core:             Vec<String>,
  pub instructors:      Vec<Instructor>,
  pub schedule:         CourseSchedule,
  pub colors:           CourseColors,
  pub semester:         Semester,
  /// Epoch milliseconds.
  pub scraped_at:       i64,
  pub url:              String,
  pub register_url:     Option<String>,
  pub is_reserved:      bool,
}

impl Course {
  /// Build an owned course from a scraped snapshot.
  ///
  /// The snapshot's scalar and collection fields move onto the entity; the
  /// schedule and instructors are re-constructed as owned values. The
  /// remaining defaults are resolved here, in one place:
  ///
  /// - `scraped_at` absent (zero) → the clock at construction;
  /// - `colors` absent → `palette.default_pair()`;
  /// - Summer sections get the `(department, number)` identifier repair.
  ///
  /// No validation beyond that: a malformed time range or a bogus credit
  /// count is stored as-is. Shape correctness is the scraper's contract.
  pub fn from_snapshot(snapshot: CourseSnapshot, palette: &Palette) -> Self {
    let scraped_at = if snapshot.scraped_at > 0 {
      snapshot.scraped_at
    } else {
      Utc::now().timestamp_millis()
    };

    let colors = snapshot
      .colors
      .unwrap_or_else(|| palette.default_pair());

    let (department, number) =
      if snapshot.semester.season == Season::Summer {
        let (department, number) =
          normalize_summer_term(&snapshot.department, &snapshot.number);
        if department != snapshot.department {
          debug!(
            unique_id = snapshot.unique_id,
            department = %department,
            number = %number,
            "repaired summer term identifier"
          );
        }
        (department, number)
      } else {
        (snapshot.department, snapshot.number)
      };

    Self {
      unique_id: snapshot.unique_id,
      number,
      department,
      full_name: snapshot.full_name,
      course_name: snapshot.course_name,
      credit_hours: snapshot.credit_hours,
      status: snapshot.status,
      instruction_mode: snapshot.instruction_mode,
      description: snapshot.description,
      flags: snapshot.flags,
      core: snapshot.core,
      instructors: snapshot
        .instructors
        .into_iter()
        .map(Instructor::from_snapshot)
        .collect(),
      schedule: CourseSchedule::from_snapshot(snapshot.schedule),
      colors,
      semester: snapshot.semester,
      scraped_at,
      url: snapshot.url,
      register_url: snapshot.register_url,
      is_reserved: snapshot.is_reserved,
    }
  }

  /// The catalog number with a single leading term letter removed
  /// (`"f301"` → `"301"`). A number that already starts with a digit, or
  /// is empty, comes back unchanged.
  pub fn number_without_term(&self) -> &str {
    match self.number.chars().next() {
      Some(c) if !c.is_ascii_digit() => &self.number[c.len_utf8()..],
      _ => &self.number,
    }
  }

  /// Every conflicting meeting pair between this course and `other`,
  /// row-major: our meetings on the outer loop, theirs on the inner.
  pub fn conflicts_with<'a>(
    &'a self,
    other: &'a Course,
  ) -> Vec<(&'a CourseMeeting, &'a CourseMeeting)> {
    conflict::conflicting_pairs(&self.schedule, &other.schedule)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
