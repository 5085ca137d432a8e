//! Meetings — one scheduled occurrence of a section, plus the registrar's
//! day and clock-time encodings.
//!
//! The registrar encodes days as concatenated codes (`"MWF"`, `"TTH"`) and
//! times as 12-hour clock strings (`"11:00 a.m."`). A meeting stores the
//! decoded forms: an ordered day list and minutes past midnight.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{Error, Result};

// ─── Days ────────────────────────────────────────────────────────────────────

/// A calendar day, carried on the wire as its registrar code.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display,
  EnumString,
)]
pub enum DayOfWeek {
  #[serde(rename = "M")]
  #[strum(serialize = "M")]
  Monday,
  #[serde(rename = "T")]
  #[strum(serialize = "T")]
  Tuesday,
  #[serde(rename = "W")]
  #[strum(serialize = "W")]
  Wednesday,
  #[serde(rename = "TH")]
  #[strum(serialize = "TH")]
  Thursday,
  #[serde(rename = "F")]
  #[strum(serialize = "F")]
  Friday,
  #[serde(rename = "S")]
  #[strum(serialize = "S")]
  Saturday,
  #[serde(rename = "SU")]
  #[strum(serialize = "SU")]
  Sunday,
}

impl DayOfWeek {
  /// Parse a single registrar day code (`"TH"` → Thursday).
  pub fn from_code(code: &str) -> Result<Self> {
    code
      .parse()
      .map_err(|_| Error::InvalidDayCode(code.to_string()))
  }
}

/// Split a concatenated day pattern (`"MWTH"`) into days, preserving the
/// pattern's order.
///
/// Two-letter codes are matched greedily, so `TH` wins over `T` and `SU`
/// over `S`. Any unrecognized residue fails the whole pattern.
pub fn parse_day_pattern(pattern: &str) -> Result<Vec<DayOfWeek>> {
  let mut days = Vec::new();
  let mut rest = pattern.trim();
  while !rest.is_empty() {
    let day = if let Some(r) = rest.strip_prefix("TH") {
      rest = r;
      DayOfWeek::Thursday
    } else if let Some(r) = rest.strip_prefix("SU") {
      rest = r;
      DayOfWeek::Sunday
    } else if let Some(r) = rest.strip_prefix('M') {
      rest = r;
      DayOfWeek::Monday
    } else if let Some(r) = rest.strip_prefix('T') {
      rest = r;
      DayOfWeek::Tuesday
    } else if let Some(r) = rest.strip_prefix('W') {
      rest = r;
      DayOfWeek::Wednesday
    } else if let Some(r) = rest.strip_prefix('F') {
      rest = r;
      DayOfWeek::Friday
    } else if let Some(r) = rest.strip_prefix('S') {
      rest = r;
      DayOfWeek::Saturday
    } else {
      return Err(Error::InvalidDayPattern(pattern.to_string()));
    };
    days.push(day);
  }
  Ok(days)
}

// ─── Clock times ─────────────────────────────────────────────────────────────

/// Parse a registrar 12-hour clock string to minutes past midnight.
///
/// Accepts the forms the registrar emits (`"11:00 a.m."`, `"11:00am"`,
/// `"2:15 PM"`), including the `12:xx` midnight/noon cases.
pub fn parse_clock_time(input: &str) -> Result<u16> {
  let lowered = input.trim().to_ascii_lowercase().replace('.', "");
  let (time, pm) = if let Some(t) = lowered.strip_suffix("am") {
    (t, false)
  } else if let Some(t) = lowered.strip_suffix("pm") {
    (t, true)
  } else {
    return Err(Error::InvalidClockTime(input.to_string()));
  };

  let (hour, minute) = time
    .trim()
    .split_once(':')
    .ok_or_else(|| Error::InvalidClockTime(input.to_string()))?;
  let hour: u16 = hour
    .parse()
    .map_err(|_| Error::InvalidClockTime(input.to_string()))?;
  let minute: u16 = minute
    .parse()
    .map_err(|_| Error::InvalidClockTime(input.to_string()))?;
  if !(1..=12).contains(&hour) || minute > 59 {
    return Err(Error::InvalidClockTime(input.to_string()));
  }

  let hour24 = match (hour, pm) {
    (12, false) => 0,
    (12, true) => 12,
    (h, false) => h,
    (h, true) => h + 12,
  };
  Ok(hour24 * 60 + minute)
}

/// Render minutes past midnight as a 12-hour clock string (`"11:00am"`).
pub fn format_clock_time(minutes: u16) -> String {
  let hour24 = (minutes / 60) % 24;
  let minute = minutes % 60;
  let (hour, suffix) = match hour24 {
    0 => (12, "am"),
    12 => (12, "pm"),
    h if h < 12 => (h, "am"),
    h => (h - 12, "pm"),
  };
  format!("{hour}:{minute:02}{suffix}")
}

// ─── Meeting ─────────────────────────────────────────────────────────────────

/// Where a meeting is held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
  pub building: String,
  pub room:     String,
}

/// Serialized meeting shape handed over by the scraper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingSnapshot {
  pub days:          Vec<DayOfWeek>,
  pub start_minutes: u16,
  pub end_minutes:   u16,
  #[serde(default)]
  pub location:      Option<Location>,
}

/// One scheduled occurrence of a section: a day set and a time interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseMeeting {
  pub days:          Vec<DayOfWeek>,
  /// Minutes past midnight.
  pub start_minutes: u16,
  pub end_minutes:   u16,
  pub location:      Option<Location>,
}

impl CourseMeeting {
  /// Re-construct an owned meeting from snapshot data.
  pub fn from_snapshot(snapshot: MeetingSnapshot) -> Self {
    Self {
      days:          snapshot.days,
      start_minutes: snapshot.start_minutes,
      end_minutes:   snapshot.end_minutes,
      location:      snapshot.location,
    }
  }

  /// Whether two meetings collide: they share at least one calendar day
  /// AND their time intervals overlap by a strictly positive amount.
  ///
  /// The single comparison `max(starts) < min(ends)` makes back-to-back
  /// meetings and zero-duration meetings non-conflicting.
  pub fn is_conflicting(&self, other: &CourseMeeting) -> bool {
    let shares_day = self.days.iter().any(|day| other.days.contains(day));
    shares_day
      && self.start_minutes.max(other.start_minutes)
        < self.end_minutes.min(other.end_minutes)
  }

  /// Concatenated registrar day codes, e.g. `"MWF"`.
  pub fn days_string(&self) -> String {
    self.days.iter().map(|day| day.to_string()).collect()
  }

  /// The interval as a 12-hour range, e.g. `"11:00am - 12:00pm"`.
  pub fn time_string(&self) -> String {
    format!(
      "{} - {}",
      format_clock_time(self.start_minutes),
      format_clock_time(self.end_minutes)
    )
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
