//! Core data structures for books and decode attempts.
//!
//! This module defines the plain data types shared by the codec and the
//! library layer:
//! - Decode attempts and their outcome
//! - Book metadata

use std::path::{Path, PathBuf};

use super::charset::Charset;

/// Prefix of the description given to every book found in a library.
pub const DESCRIPTION_PREFIX: &str = "Импортированная книга: ";

/// One decode attempt: a hypothesized encoding paired with its score.
///
/// Candidates are ephemeral. They are produced per attempt and discarded
/// once the best one has been chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub charset: Charset,
    pub text: String,
    /// Cyrillic density of `text`, in `[0, 1]`.
    pub score: f64,
    /// `false` if decoding failed; `text` is then empty and `score` is 0.0.
    pub decoded: bool,
}

impl Candidate {
    /// A candidate whose decoding did not succeed.
    pub fn failed(charset: Charset) -> Self {
        Self {
            charset,
            text: String::new(),
            score: 0.0,
            decoded: false,
        }
    }
}

/// The outcome of guessing the encoding of a byte sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Guess {
    /// The best-scoring candidate.
    Decoded(Candidate),
    /// No candidate could decode the input.
    Undecodable,
}

impl Guess {
    /// The winning candidate, if any.
    pub fn candidate(&self) -> Option<&Candidate> {
        match self {
            Guess::Decoded(candidate) => Some(candidate),
            Guess::Undecodable => None,
        }
    }

    /// Consumes the guess, returning the decoded text or `fallback`.
    pub fn into_text_or(self, fallback: &str) -> String {
        match self {
            Guess::Decoded(candidate) => candidate.text,
            Guess::Undecodable => fallback.to_owned(),
        }
    }
}

/// A plain-text book stored as a single `.txt` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Stable identifier, equal to the title.
    pub id: String,
    pub title: String,
    pub description: String,
    pub path: PathBuf,
}

impl Book {
    /// Builds a book from its file, using the file stem as title and id.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let title = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            id: title.clone(),
            description: format!("{}{}", DESCRIPTION_PREFIX, title),
            title,
            path: path.to_path_buf(),
        }
    }
}
