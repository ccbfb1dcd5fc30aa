//! # txt-reader
//!
//! A reader for plain-text e-books stored in an unknown encoding.
//!
//! Book files are decoded by trying windows-1251, KOI8-R, UTF-8 and
//! ISO-8859-1 in turn and keeping the decoding with the highest share of
//! Cyrillic characters. A [`Library`] lists, reads and removes the `.txt`
//! books of a directory.
pub mod book;

// Re-export the main types for convenience
pub use book::{
    BookError,
    EncodingGuesser,
    GuesserConfig,
    Library,
    Result,
    codec::score::cyrillic_density,
    config::FALLBACK_TEXT,
    types::{
        charset::Charset,
        models::{Book, Candidate, Guess},
    },
};

/// Decodes `bytes` with the default candidate list.
///
/// Never fails: undecodable input yields [`FALLBACK_TEXT`].
pub fn decode_text(bytes: &[u8]) -> String {
    EncodingGuesser::default().decode(bytes)
}
