//! Core book reading module.
//!
//! # Module Organization
//!
//! - [`types`]: Errors, book metadata, decode candidates, candidate encodings
//! - [`codec`]: Encoding detection and scoring
//! - [`config`]: Guesser settings
//! - [`library`]: A directory of `.txt` books read through the guesser

pub mod codec;
pub mod config;
pub mod library;
pub mod types;
pub mod utils;

pub use codec::guesser::EncodingGuesser;
pub use config::GuesserConfig;
pub use library::Library;
pub use types::error::{BookError, Result};
