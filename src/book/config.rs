//! Guesser configuration.

use super::types::charset::Charset;

/// Text returned when no candidate encoding can decode a book.
pub const FALLBACK_TEXT: &str = "Не удалось прочитать текст";

/// Settings for an [`EncodingGuesser`](crate::EncodingGuesser).
///
/// The default configuration tries windows-1251, KOI8-R, UTF-8 and
/// ISO-8859-1 in that order, replaces malformed sequences instead of failing,
/// and falls back to [`FALLBACK_TEXT`].
#[derive(Debug, Clone, PartialEq)]
pub struct GuesserConfig {
    /// Candidate encodings in tie-break order.
    pub candidates: Vec<Charset>,
    /// Fail a candidate on malformed input instead of substituting U+FFFD.
    pub strict: bool,
    /// Returned by `decode` when no candidate decodes.
    pub fallback_text: String,
}

impl Default for GuesserConfig {
    fn default() -> Self {
        Self {
            candidates: Charset::DEFAULT_ORDER.to_vec(),
            strict: false,
            fallback_text: FALLBACK_TEXT.to_owned(),
        }
    }
}

impl GuesserConfig {
    pub fn with_candidates(mut self, candidates: impl IntoIterator<Item = Charset>) -> Self {
        self.candidates = candidates.into_iter().collect();
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_fallback_text(mut self, text: impl Into<String>) -> Self {
        self.fallback_text = text.into();
        self
    }

    /// Restricts detection to a single, user-chosen encoding.
    pub fn forced(charset: Charset) -> Self {
        Self::default().with_candidates([charset])
    }
}
