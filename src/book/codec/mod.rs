//! Codec layer: turning raw book bytes into text.
//!
//! # Submodules
//!
//! - [`guesser`][]: Candidate decoding and best-encoding selection
//! - [`score`][]: Cyrillic density scoring

pub mod guesser;
pub mod score;
