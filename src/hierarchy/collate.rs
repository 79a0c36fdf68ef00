//! Natural, base-sensitivity collation for access level names.
//!
//! Names are compatibility-decomposed, case folded (`ß` folds to `ss`) and
//! stripped of diacritical marks before comparison, so case and accents never
//! separate two names. Marks outside the diacritic blocks, such as Indic vowel
//! signs, are kept: they spell different names. Runs of digits compare by
//! numeric value, so `"Site 2"` sorts before `"Site 10"`.

use caseless::Caseless;
use std::cmp::Ordering;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// One comparable unit of a folded name.
///
/// Variant order is the class order: whitespace and punctuation sort before
/// numbers, numbers before letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Segment {
    Symbol(char),
    /// Digits without leading zeros; `len` first so longer runs are larger.
    Number { len: usize, digits: String },
    Letter(char),
}

impl Segment {
    fn number(run: &str) -> Self {
        let digits = run.trim_start_matches('0').to_string();
        Self::Number {
            len: digits.len(),
            digits,
        }
    }
}

/// Precomputed sort key for a name; compare keys instead of re-folding names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey(Vec<Segment>);

impl CollationKey {
    #[must_use]
    pub fn new(name: &str) -> Self {
        let mut segments = Vec::with_capacity(name.len());
        let mut run = String::new();

        for ch in fold(name) {
            if ch.is_ascii_digit() {
                run.push(ch);
                continue;
            }
            if !run.is_empty() {
                segments.push(Segment::number(&run));
                run.clear();
            }
            if ch.is_whitespace() || ch.is_ascii_punctuation() || is_symbol(ch) {
                segments.push(Segment::Symbol(ch));
            } else {
                segments.push(Segment::Letter(ch));
            }
        }
        if !run.is_empty() {
            segments.push(Segment::number(&run));
        }

        Self(segments)
    }
}

// NFKD maps full-width digits and ligatures onto their ASCII forms; folding
// runs after it because compatibility forms may decompose to upper case.
fn fold(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfkd()
        .default_case_fold()
        .filter(|ch| !is_diacritic(*ch))
}

/// Combining marks from the diacritical mark blocks (accents, cedillas,
/// umlauts). Spacing and script-specific marks are not diacritics.
fn is_diacritic(ch: char) -> bool {
    is_combining_mark(ch)
        && matches!(
            ch,
            '\u{0300}'..='\u{036F}'
                | '\u{1AB0}'..='\u{1AFF}'
                | '\u{1DC0}'..='\u{1DFF}'
                | '\u{20D0}'..='\u{20FF}'
                | '\u{FE20}'..='\u{FE2F}'
        )
}

fn is_symbol(ch: char) -> bool {
    !ch.is_alphanumeric() && !ch.is_control()
}

/// Compares two names the way the depth buckets are sorted.
#[must_use]
pub fn compare_names(left: &str, right: &str) -> Ordering {
    CollationKey::new(left).cmp(&CollationKey::new(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_runs_compare_by_value() {
        assert_eq!(compare_names("Site 2", "Site 10"), Ordering::Less);
        assert_eq!(compare_names("Site 10", "Site 9"), Ordering::Greater);
        assert_eq!(compare_names("Building 007", "Building 7"), Ordering::Equal);
        assert_eq!(compare_names("Floor 2A", "Floor 2B"), Ordering::Less);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(compare_names("site", "Site"), Ordering::Equal);
        assert_eq!(compare_names("alpha", "Beta"), Ordering::Less);
        assert_eq!(compare_names("ALPHA", "beta"), Ordering::Less);
    }

    #[test]
    fn test_accent_insensitive() {
        assert_eq!(compare_names("Café", "Cafe"), Ordering::Equal);
        assert_eq!(compare_names("Érable", "Ewing"), Ordering::Less);
        assert_eq!(compare_names("Zürich", "Zurich"), Ordering::Equal);
    }

    #[test]
    fn test_full_case_folding() {
        assert_eq!(compare_names("Weißenburg", "Weiz"), Ordering::Less);
        assert_eq!(compare_names("Straße", "Strasse"), Ordering::Equal);
        assert_eq!(compare_names("STRASSE", "straße"), Ordering::Equal);
    }

    #[test]
    fn test_vowel_signs_are_not_accents() {
        // same consonant, different vowel sign
        assert_ne!(compare_names("कि", "का"), Ordering::Equal);
        assert_eq!(compare_names("का", "कि"), Ordering::Less);
        assert_eq!(compare_names("कि", "कि"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare_names("Site", "Site 1"), Ordering::Less);
        assert_eq!(compare_names("", "A"), Ordering::Less);
        assert_eq!(compare_names("", ""), Ordering::Equal);
    }

    #[test]
    fn test_class_order() {
        // punctuation < digits < letters
        assert_eq!(compare_names("-North", "1 North"), Ordering::Less);
        assert_eq!(compare_names("9 Elm", "Elm"), Ordering::Less);
        assert_eq!(compare_names("Lot 5", "Lot-5"), Ordering::Less);
    }

    #[test]
    fn test_long_digit_runs_do_not_overflow() {
        let small = format!("Meter {}", "9".repeat(40));
        let large = format!("Meter 1{}", "0".repeat(40));
        assert_eq!(compare_names(&small, &large), Ordering::Less);
    }

    #[test]
    fn test_full_width_digits() {
        assert_eq!(compare_names("Site ２", "Site 10"), Ordering::Less);
    }
}
