//! Root-field parsing.
//!
//! The `root` field is free text that grew organically: consonants, optional
//! hyphen separators, a trailing parenthetical romanization, sometimes a `+`
//! marker. Parsing stays tolerant of every observed variant rather than
//! guessing intent.

use crate::error::{Result, RootParseError};
use crate::hebrew;
use crate::types::RootLetter;

/// Separators accepted between author-segmented letters: the ASCII hyphen
/// and the Hebrew maqaf.
const SEPARATORS: [char; 2] = ['-', '־'];

/// Parse a free-text root field into its ordered consonant letters.
///
/// A trailing parenthetical romanization is dropped first. If the remainder
/// is hyphen-separated, each token is one letter as segmented by the data
/// author; otherwise the letters are the characters inside the Hebrew
/// consonant block, with niqqud and punctuation discarded.
pub fn extract(root: &str) -> Result<Vec<RootLetter>> {
    let bare = strip_romanization(root);

    let letters: Vec<RootLetter> = if bare.contains(SEPARATORS) {
        bare.split(SEPARATORS)
            .map(consonants_of)
            .filter(|token| !token.is_empty())
            .map(RootLetter::new)
            .collect()
    } else {
        bare.chars()
            .filter(|&ch| hebrew::is_consonant(ch))
            .map(RootLetter::from)
            .collect()
    };

    if letters.is_empty() {
        return Err(RootParseError::NoConsonantsFound);
    }
    Ok(letters)
}

/// Drop a trailing `(...)` romanization, e.g. `"ברא (bara)" -> "ברא "`.
fn strip_romanization(root: &str) -> &str {
    root.find('(').map_or(root, |open| &root[..open])
}

fn consonants_of(token: &str) -> String {
    token.chars().filter(|&ch| hebrew::is_consonant(ch)).collect()
}
