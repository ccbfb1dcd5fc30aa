//! # Encoding Detection
//!
//! Book files carry no encoding declaration, so the encoding is guessed from
//! the bytes alone. Every configured candidate decodes the full input, each
//! result is scored by its Cyrillic density, and the best one wins.
//!
//! ## Selection Rules
//! 1. A candidate that decoded beats one that failed.
//! 2. Among decoded candidates the higher score wins.
//! 3. Ties go to the candidate listed first.
//!
//! When nothing decodes the result is [`Guess::Undecodable`]. Detection never
//! returns an error and never panics, whatever the input.

use log::{debug, info, warn};

use crate::book::config::GuesserConfig;
use crate::book::types::charset::Charset;
use crate::book::types::models::{Candidate, Guess};

use super::score::cyrillic_density;

/// Picks the most plausible encoding for a byte sequence.
///
/// Stateless apart from its configuration; safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct EncodingGuesser {
    config: GuesserConfig,
}

impl EncodingGuesser {
    pub fn new(config: GuesserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GuesserConfig {
        &self.config
    }

    /// Decodes `bytes` with every candidate, in configured order.
    pub fn candidates<'a>(&'a self, bytes: &'a [u8]) -> impl Iterator<Item = Candidate> + 'a {
        self.config
            .candidates
            .iter()
            .map(move |&charset| self.attempt(charset, bytes))
    }

    /// Returns the best candidate for `bytes`.
    pub fn guess(&self, bytes: &[u8]) -> Guess {
        self.select(self.candidates(bytes))
    }

    /// Picks the winner among already decoded candidates.
    ///
    /// Lets a caller that needs every candidate, and the winner too, decode
    /// only once.
    pub fn select(&self, candidates: impl IntoIterator<Item = Candidate>) -> Guess {
        let mut best: Option<Candidate> = None;
        let mut tried = 0usize;
        for candidate in candidates {
            tried += 1;
            let replace = match &best {
                None => true,
                Some(current) => outranks(&candidate, current),
            };
            if replace {
                best = Some(candidate);
            }
        }

        match best {
            Some(candidate) if candidate.decoded => {
                info!(
                    "Selected {} with score {:.3} ({} bytes of text)",
                    candidate.charset,
                    candidate.score,
                    candidate.text.len()
                );
                Guess::Decoded(candidate)
            }
            _ => {
                warn!("No candidate encoding could decode the input ({} candidates tried)", tried);
                Guess::Undecodable
            }
        }
    }

    /// Returns the decoded text of the best candidate, or the configured
    /// fallback text when nothing decodes.
    pub fn decode(&self, bytes: &[u8]) -> String {
        self.guess(bytes).into_text_or(&self.config.fallback_text)
    }

    fn attempt(&self, charset: Charset, bytes: &[u8]) -> Candidate {
        match charset.decode(bytes, self.config.strict) {
            Some(text) => {
                let score = cyrillic_density(&text);
                debug!("Candidate {}: score={:.3}", charset, score);
                Candidate {
                    charset,
                    text: text.into_owned(),
                    score,
                    decoded: true,
                }
            }
            None => {
                debug!("Candidate {}: malformed input", charset);
                Candidate::failed(charset)
            }
        }
    }
}

/// Strict ordering: equal rank never replaces, so earlier candidates keep ties.
fn outranks(challenger: &Candidate, current: &Candidate) -> bool {
    match (challenger.decoded, current.decoded) {
        (true, false) => true,
        (false, true) => false,
        _ => challenger.score > current.score,
    }
}
