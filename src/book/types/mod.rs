//! Foundational data structures, error types, and the candidate encodings.

pub mod charset;
pub mod error;
pub mod models;
