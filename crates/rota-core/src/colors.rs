//! Display colors carried on every schedulable entity.
//!
//! Courses and commitments own a primary/secondary hex pair so every
//! consumer renders a section the same way. The default lookup lives in
//! [`Palette`], a stateless collaborator passed into construction
//! explicitly; construction stays deterministic and testable.

use serde::{Deserialize, Serialize};

/// A primary/secondary pair of hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseColors {
  pub primary_color:   String,
  pub secondary_color: String,
}

// ─── Theme table ─────────────────────────────────────────────────────────────

struct Theme {
  name:   &'static str,
  /// Swatches from lightest to darkest.
  shades: [(u16, &'static str); 6],
}

/// Row 0 is the default theme.
const THEMES: &[Theme] = &[
  Theme {
    name:   "emerald",
    shades: [
      (200, "#a7f3d0"),
      (300, "#6ee7b7"),
      (400, "#34d399"),
      (500, "#10b981"),
      (600, "#059669"),
      (700, "#047857"),
    ],
  },
  Theme {
    name:   "sky",
    shades: [
      (200, "#bae6fd"),
      (300, "#7dd3fc"),
      (400, "#38bdf8"),
      (500, "#0ea5e9"),
      (600, "#0284c7"),
      (700, "#0369a1"),
    ],
  },
  Theme {
    name:   "amber",
    shades: [
      (200, "#fde68a"),
      (300, "#fcd34d"),
      (400, "#fbbf24"),
      (500, "#f59e0b"),
      (600, "#d97706"),
      (700, "#b45309"),
    ],
  },
  Theme {
    name:   "rose",
    shades: [
      (200, "#fecdd3"),
      (300, "#fda4af"),
      (400, "#fb7185"),
      (500, "#f43f5e"),
      (600, "#e11d48"),
      (700, "#be123c"),
    ],
  },
  Theme {
    name:   "violet",
    shades: [
      (200, "#ddd6fe"),
      (300, "#c4b5fd"),
      (400, "#a78bfa"),
      (500, "#8b5cf6"),
      (600, "#7c3aed"),
      (700, "#6d28d9"),
    ],
  },
  Theme {
    name:   "slate",
    shades: [
      (200, "#e2e8f0"),
      (300, "#cbd5e1"),
      (400, "#94a3b8"),
      (500, "#64748b"),
      (600, "#475569"),
      (700, "#334155"),
    ],
  },
];

const DEFAULT_SHADE: u16 = 500;

fn hex_for(theme: &Theme, shade: u16) -> Option<&'static str> {
  theme
    .shades
    .iter()
    .find(|(s, _)| *s == shade)
    .map(|(_, hex)| *hex)
}

// ─── Palette ─────────────────────────────────────────────────────────────────

/// The fixed theme/shade table courses draw their colors from.
#[derive(Debug, Clone, Copy, Default)]
pub struct Palette;

impl Palette {
  /// Resolve a theme name and shade to a concrete color pair.
  ///
  /// Unknown theme names fall back to the default theme and unknown shades
  /// to the default shade, so the lookup is total. The secondary color is
  /// the same theme two shade steps darker, clamped to the darkest swatch.
  pub fn resolve(&self, name: &str, shade: u16) -> CourseColors {
    let theme = THEMES
      .iter()
      .find(|t| t.name.eq_ignore_ascii_case(name))
      .unwrap_or(&THEMES[0]);
    let shade = if hex_for(theme, shade).is_some() {
      shade
    } else {
      DEFAULT_SHADE
    };

    let darkest = theme.shades[theme.shades.len() - 1].1;
    let primary = hex_for(theme, shade).unwrap_or(darkest);
    let secondary = hex_for(theme, shade + 200).unwrap_or(darkest);

    CourseColors {
      primary_color:   primary.to_string(),
      secondary_color: secondary.to_string(),
    }
  }

  /// The pair assigned when a snapshot carries no colors: emerald at shade
  /// 500.
  pub fn default_pair(&self) -> CourseColors {
    self.resolve("emerald", DEFAULT_SHADE)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
