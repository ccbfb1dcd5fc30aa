//! Cyrillic density scoring.

use std::ops::RangeInclusive;

/// The Cyrillic Unicode block.
pub const CYRILLIC: RangeInclusive<char> = '\u{0400}'..='\u{04FF}';

/// Fraction of the characters of `text` that lie in the Cyrillic block.
///
/// Characters are counted as Unicode scalar values. Empty text scores 0.0.
pub fn cyrillic_density(text: &str) -> f64 {
    let (total, cyrillic) = text.chars().fold((0usize, 0usize), |(total, cyrillic), c| {
        (total + 1, cyrillic + usize::from(CYRILLIC.contains(&c)))
    });
    if total == 0 {
        0.0
    } else {
        cyrillic as f64 / total as f64
    }
}
