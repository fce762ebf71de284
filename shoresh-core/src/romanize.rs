//! Fallback romanization for root consonants.
//!
//! Used when a record carries no usable transcription: the aligner still has
//! to emit one pronunciation per letter, so each consonant gets a fixed
//! romanized reading. Final forms share the reading of their base letter.

use crate::types::RootLetter;

/// Fixed romanization for a single Hebrew consonant.
///
/// Returns an empty string for anything outside the consonant block, which
/// the aligner passes through as an explicit unknown.
pub fn consonant(ch: char) -> &'static str {
    match ch {
        'א' => "a",
        'ב' => "b",
        'ג' => "g",
        'ד' => "d",
        'ה' => "h",
        'ו' => "v",
        'ז' => "z",
        'ח' => "kh",
        'ט' => "t",
        'י' => "y",
        'כ' => "k",
        'ך' => "kh",
        'ל' => "l",
        'מ' | 'ם' => "m",
        'נ' | 'ן' => "n",
        'ס' => "s",
        'ע' => "a",
        'פ' => "p",
        'ף' => "f",
        'צ' | 'ץ' => "ts",
        'ק' => "k",
        'ר' => "r",
        'ש' => "sh",
        'ת' => "t",
        _ => "",
    }
}

/// Fallback romanization for a letter token, keyed off its first consonant.
pub fn letter(letter: &RootLetter) -> &'static str {
    letter.leading_consonant().map(consonant).unwrap_or("")
}
