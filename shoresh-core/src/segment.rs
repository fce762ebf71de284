//! Transcription segmentation.
//!
//! Splits a romanized or IPA transcription into syllable-like chunks. Pure
//! and byte-deterministic: identical input yields identical chunks, with no
//! locale or normalization dependence, so regenerated data stays diffable.

/// IPA primary-stress marker (U+02C8).
pub const STRESS_MARKER: char = 'ˈ';

/// IPA secondary-stress marker (U+02CC).
pub const SECONDARY_STRESS_MARKER: char = 'ˌ';

/// IPA length mark (U+02D0). Extends the preceding vowel, never opens a
/// nucleus of its own.
pub const LENGTH_MARK: char = 'ː';

/// Characters that open a syllable nucleus: ASCII vowels plus the IPA and
/// diacritic variants seen in the source data.
pub const VOWELS: [char; 19] = [
    'a', 'e', 'i', 'o', 'u', 'A', 'E', 'I', 'O', 'U', 'ə', 'ɔ', 'ɛ', 'ʊ', 'ɪ', 'æ', 'ɑ', 'ʌ', 'ɒ',
];

/// IPA consonant symbols accepted alongside ASCII letters in transcriptions.
const IPA_CONSONANTS: [char; 9] = ['ʃ', 'ʒ', 'χ', 'ħ', 'ʔ', 'ʕ', 'θ', 'ð', 'ɡ'];

fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

/// Split a transcription into syllable-like chunks.
///
/// When the text carries primary-stress markers, they are the authoritative
/// syllable boundaries: the text is split at every marker, the pre-marker
/// prefix becomes chunk 0 when non-empty, and each remainder keeps its
/// marker so stress travels with the correct chunk. Otherwise chunks close
/// at hiatus: once the running buffer holds a vowel, the next vowel starts a
/// new chunk. Empty input yields no chunks.
pub fn segment(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if text.contains(STRESS_MARKER) {
        split_at_stress(text)
    } else {
        split_at_nuclei(text)
    }
}

fn split_at_stress(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut parts = text.split(STRESS_MARKER);
    if let Some(head) = parts.next() {
        if !head.is_empty() {
            chunks.push(head.to_string());
        }
    }
    for rest in parts {
        chunks.push(format!("{STRESS_MARKER}{rest}"));
    }
    chunks
}

fn split_at_nuclei(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut buf = String::new();
    let mut buf_has_vowel = false;

    for ch in text.chars() {
        if buf_has_vowel && is_vowel(ch) {
            chunks.push(std::mem::take(&mut buf));
            buf_has_vowel = false;
        }
        buf.push(ch);
        buf_has_vowel = buf_has_vowel || is_vowel(ch);
    }
    if !buf.is_empty() {
        chunks.push(buf);
    }
    chunks
}

/// Whether `text` stays inside the accepted romanization/IPA repertoire.
///
/// Anything else in a pronunciation field is a likely data-entry mistake
/// (stray Hebrew, digits, markup) and the caller treats the transcription as
/// absent instead of segmenting garbage.
pub fn is_supported_transcription(text: &str) -> bool {
    text.chars().all(|ch| {
        ch.is_ascii_alphabetic()
            || is_vowel(ch)
            || IPA_CONSONANTS.contains(&ch)
            || matches!(
                ch,
                STRESS_MARKER | SECONDARY_STRESS_MARKER | LENGTH_MARK | '\'' | '-'
            )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_input_yields_no_chunks() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_stress_markers_delimit_chunks() {
        assert_eq!(segment("bəˈra"), ["bə", "ˈra"]);
        assert_eq!(segment("ˈerets"), ["ˈerets"]);
        assert_eq!(segment("təˈhoˈma"), ["tə", "ˈho", "ˈma"]);
    }

    #[test]
    fn test_leading_stress_marker_produces_no_empty_head() {
        assert_eq!(segment("ˈba"), ["ˈba"]);
    }

    #[test]
    fn test_hiatus_opens_a_new_chunk() {
        // a new chunk opens at every vowel once the buffer holds one, so
        // trailing consonants stay with the preceding nucleus
        assert_eq!(segment("haarets"), ["ha", "ar", "ets"]);
        assert_eq!(segment("bara"), ["bar", "a"]);
    }

    #[test]
    fn test_no_vowel_input_is_one_chunk() {
        assert_eq!(segment("shh"), ["shh"]);
    }

    #[test]
    fn test_length_mark_stays_with_its_vowel() {
        // ː is not a vowel, so it cannot open a nucleus
        assert_eq!(segment("raːa"), ["raː", "a"]);
    }

    #[test]
    fn test_supported_transcriptions() {
        assert!(is_supported_transcription("bəreˈʃit"));
        assert!(is_supported_transcription("toːhu"));
        assert!(is_supported_transcription(""));
        // stray Hebrew in a pronunciation field
        assert!(!is_supported_transcription("ברא"));
        assert!(!is_supported_transcription("bara2"));
        assert!(!is_supported_transcription("ba ra"));
    }

    proptest! {
        #[test]
        fn prop_segment_is_deterministic(text in ".{0,40}") {
            prop_assert_eq!(segment(&text), segment(&text));
        }

        #[test]
        fn prop_chunks_reassemble_to_input(text in "[a-zəɔˈː]{0,24}") {
            prop_assert_eq!(segment(&text).concat(), text);
        }
    }
}
