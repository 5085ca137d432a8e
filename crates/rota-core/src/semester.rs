//! Semester — the academic term a section is offered in.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::Display;

/// Variant order is chronological within a calendar year, so the derived
/// `Ord` sorts terms correctly.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
  Display,
)]
pub enum Season {
  Spring,
  Summer,
  Fall,
}

/// The term a course section belongs to. Immutable once attached to a
/// course. The derived `Ord` compares `(year, season)`; the opaque code is
/// only a final tiebreaker.
#[derive(
  Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Semester {
  pub year:   u16,
  pub season: Season,
  /// The registrar's opaque term code (e.g. `"20259"`), when known.
  pub code:   Option<String>,
}

impl fmt::Display for Semester {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.season, self.year)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn term(year: u16, season: Season) -> Semester {
    Semester {
      year,
      season,
      code: None,
    }
  }

  #[test]
  fn seasons_order_chronologically_within_a_year() {
    assert!(term(2025, Season::Spring) < term(2025, Season::Summer));
    assert!(term(2025, Season::Summer) < term(2025, Season::Fall));
  }

  #[test]
  fn year_dominates_season() {
    assert!(term(2025, Season::Fall) < term(2026, Season::Spring));
  }

  #[test]
  fn displays_season_then_year() {
    assert_eq!(term(2025, Season::Fall).to_string(), "Fall 2025");
  }

  #[test]
  fn season_wire_form_is_the_capitalized_word() {
    assert_eq!(serde_json::to_string(&Season::Summer).unwrap(), "\"Summer\"");
    let parsed: Season = serde_json::from_str("\"Fall\"").unwrap();
    assert_eq!(parsed, Season::Fall);
  }
}
