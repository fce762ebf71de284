//! Combined-form classification.

use crate::hebrew;
use crate::types::RootLetter;

/// Decide whether the surface word is a combined form: a root with a
/// one-letter grammatical formative attached.
///
/// Ordered rules, first match wins:
/// 1. a literal `+` in the raw root field is an explicit author marker;
/// 2. a surface form opening with a formative letter that differs from the
///    first root letter carries an attached conjunction, preposition, or
///    article.
///
/// Rule 2 is a surface heuristic: a root that genuinely begins with a
/// formative-shaped letter is indistinguishable from a prefixed root without
/// a root lexicon, so a `false` here can be a merely ambiguous root rather
/// than a standalone form.
pub fn is_combined_form(hebrew_word: &str, root: &str, letters: &[RootLetter]) -> bool {
    if root.contains('+') {
        return true;
    }

    let Some(surface) = hebrew::first_consonant(hebrew_word) else {
        return false;
    };
    if !hebrew::is_formative(surface) {
        return false;
    }
    match letters.first().and_then(RootLetter::leading_consonant) {
        Some(first) => surface != first,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::root::extract;

    fn classify(hebrew_word: &str, root: &str) -> bool {
        let letters = extract(root).unwrap();
        is_combined_form(hebrew_word, root, &letters)
    }

    #[test]
    fn test_plus_marker_wins() {
        assert!(classify("וְהָאָרֶץ", "ו+ארץ (erets)"));
    }

    #[test]
    fn test_leading_formative_absent_from_root() {
        // bet prefix on bereshit, root begins with resh
        assert!(classify("בְּרֵאשִׁית", "רֵאשִׁית (reshit)"));
        // he article on haarets
        assert!(classify("הָאָרֶץ", "ארץ (erets)"));
    }

    #[test]
    fn test_root_beginning_with_formative_letter() {
        // bara starts with bet and so does its root: standalone form
        assert!(!classify("בָּרָא", "ברא (bara)"));
    }

    #[test]
    fn test_non_formative_first_letter() {
        assert!(!classify("שָׁמַר", "שמר (shamar)"));
    }

    #[test]
    fn test_degenerate_inputs() {
        let letters = extract("ארץ").unwrap();
        assert!(!is_combined_form("", "ארץ", &letters));
        assert!(!is_combined_form("הָאָרֶץ", "ארץ", &[]));
    }
}
