//! Letter-to-chunk alignment.

use crate::romanize;
use crate::types::{RootAnalysisEntry, RootLetter};

/// Zip root letters to pronunciation chunks, reconciling length mismatches.
///
/// The output always has exactly one entry per letter:
/// - no chunks at all: every letter gets its fixed romanization, so the
///   result is populated even with zero phonetic information;
/// - more chunks than letters: the surplus is concatenated onto the final
///   letter, so no phonetic material is dropped;
/// - fewer chunks than letters: trailing letters get an empty pronunciation,
///   an explicit unknown rather than a guess.
pub fn align(letters: &[RootLetter], chunks: &[String]) -> Vec<RootAnalysisEntry> {
    if chunks.is_empty() {
        return letters
            .iter()
            .map(|letter| RootAnalysisEntry::new(letter.as_str(), romanize::letter(letter)))
            .collect();
    }

    let last = letters.len().saturating_sub(1);
    letters
        .iter()
        .enumerate()
        .map(|(i, letter)| {
            let pronunciation = if i == last && chunks.len() > letters.len() {
                chunks[i..].concat()
            } else {
                chunks.get(i).cloned().unwrap_or_default()
            };
            RootAnalysisEntry::new(letter.as_str(), pronunciation)
        })
        .collect()
}
