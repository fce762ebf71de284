//! Word record data model shared with the document store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One letter of a consonantal root.
///
/// Usually a single Hebrew consonant. Hyphen-separated root fields are
/// segmented by the data author, and a token there may deliberately carry a
/// digraph; such tokens are kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RootLetter(String);

impl RootLetter {
    /// Create a letter from author-provided text.
    pub fn new(text: impl Into<String>) -> Self {
        RootLetter(text.into())
    }

    /// The letter text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first consonant of the letter token.
    ///
    /// For the common single-consonant case this is the letter itself; for a
    /// digraph token it is the consonant the romanization fallback keys off.
    pub fn leading_consonant(&self) -> Option<char> {
        self.0.chars().next()
    }
}

impl fmt::Display for RootLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<char> for RootLetter {
    fn from(ch: char) -> Self {
        RootLetter(ch.to_string())
    }
}

/// One `{letter, pronunciation}` pair of a computed alignment.
///
/// `pronunciation` is always present, possibly empty, so consumers never
/// branch on missing-vs-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootAnalysisEntry {
    /// The root letter this slice of the pronunciation belongs to.
    pub letter: String,
    /// The slice of the transcription aligned to the letter; empty when no
    /// phonetic material could be attributed.
    pub pronunciation: String,
}

impl RootAnalysisEntry {
    /// Create an alignment entry.
    pub fn new(letter: impl Into<String>, pronunciation: impl Into<String>) -> Self {
        Self {
            letter: letter.into(),
            pronunciation: pronunciation.into(),
        }
    }
}

/// A word record as stored in the collection.
///
/// Field names serialize in camelCase to match the upstream document store.
/// Records live in documents owned by other tooling, so unknown sibling
/// fields are captured in `extra` and survive a read-modify-write cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    /// Pointed Hebrew surface form, niqqud included.
    #[serde(default)]
    pub hebrew: String,

    /// Free-text root field: consonants, optional hyphen separators, an
    /// optional trailing parenthetical romanization, an optional `+` marker.
    #[serde(default)]
    pub root: String,

    /// Full-word transcription.
    #[serde(default)]
    pub pronunciation: String,

    /// Root-only transcription; preferred over `pronunciation` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_pronunciation: Option<String>,

    /// Per-letter alignment. Present once computed or hand-curated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_analysis: Option<Vec<RootAnalysisEntry>>,

    /// Sibling fields owned by other tooling, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
