//! Summer-term identifier repair.
//!
//! A historical registrar defect stored the summer sub-term prefix letter
//! (`f`/`s`/`n`/`w`: first, second, nine-week, whole session) at the end
//! of the department field instead of the front of the course number:
//! `("P R f", "378")` where `("P R", "f378")` was meant. The repair moves
//! the letter back where it belongs.
//!
//! Callers invoke this only for Summer sections. Outside Summer a
//! department that happens to end in one of these letters must be left
//! alone, which is why the check lives at the construction site and not
//! here.

/// The sub-term prefix letters. Lowercase only; an uppercase trailing
/// letter is a legitimate department name, not the defect signature.
pub const SUMMER_TERM_PREFIXES: [char; 4] = ['f', 's', 'n', 'w'];

/// Repair a `(department, number)` pair carrying the defect signature.
///
/// When `department` ends in a sub-term letter, the letter is stripped
/// (along with any trailing whitespace left behind) and prepended to
/// `number`; otherwise both strings come back unchanged. Total and
/// deterministic, and idempotent on repaired output: the trailing-letter
/// condition no longer holds once the department is clean.
///
/// A number that already carries a prefix is NOT deduplicated: a
/// double-encoded pair gains a second prefix, faithfully to the input
/// shape.
pub fn normalize_summer_term(
  department: &str,
  number: &str,
) -> (String, String) {
  match department.chars().last() {
    Some(letter) if SUMMER_TERM_PREFIXES.contains(&letter) => {
      let kept = department[..department.len() - letter.len_utf8()].trim_end();
      (kept.to_string(), format!("{letter}{number}"))
    }
    _ => (department.to_string(), number.to_string()),
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn repaired(department: &str, number: &str) -> (String, String) {
    normalize_summer_term(department, number)
  }

  #[test]
  fn correctness_table() {
    assert_eq!(repaired("C S", "314H"), ("C S".into(), "314H".into()));
    assert_eq!(repaired("P R", "f378"), ("P R".into(), "f378".into()));
    assert_eq!(repaired("P R f", "378"), ("P R".into(), "f378".into()));
    assert_eq!(repaired("P S", "n303"), ("P S".into(), "n303".into()));
    assert_eq!(repaired("P S n", "303"), ("P S".into(), "n303".into()));
  }

  #[test]
  fn idempotent_on_repaired_output() {
    let (department, number) = repaired("P R f", "378");
    assert_eq!(
      repaired(&department, &number),
      (department.clone(), number.clone())
    );
  }

  #[test]
  fn uppercase_trailing_letter_is_not_the_signature() {
    assert_eq!(repaired("GOV W", "312"), ("GOV W".into(), "312".into()));
  }

  #[test]
  fn double_encoded_pair_gains_a_second_prefix() {
    // Known input-shape quirk: the repair is not a deduplication.
    assert_eq!(repaired("P R f", "f378"), ("P R".into(), "ff378".into()));
  }

  #[test]
  fn all_four_subterm_letters_trigger() {
    for letter in SUMMER_TERM_PREFIXES {
      let department = format!("HIS {letter}");
      let (kept, number) = repaired(&department, "315");
      assert_eq!(kept, "HIS");
      assert_eq!(number, format!("{letter}315"));
    }
  }

  #[test]
  fn empty_department_passes_through() {
    assert_eq!(repaired("", "301"), ("".into(), "301".into()));
  }

  #[test]
  fn letter_only_department_strips_to_empty() {
    assert_eq!(repaired("f", "301"), ("".into(), "f301".into()));
  }
}
