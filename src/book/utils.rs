//! Encoding label parsing for user-supplied configuration.

use super::types::charset::Charset;
use super::types::error::{BookError, Result};

/// Parses a single encoding label.
pub fn parse_charset(label: &str) -> Result<Charset> {
    Charset::for_label(label).ok_or_else(|| BookError::UnknownEncoding(label.trim().to_string()))
}

/// Parses a comma-separated list of encoding labels, keeping their order.
///
/// Empty items are skipped, so `"cp1251,,utf-8,"` yields two charsets.
pub fn parse_charset_list(labels: &str) -> Result<Vec<Charset>> {
    labels
        .split(',')
        .filter(|label| !label.trim().is_empty())
        .map(parse_charset)
        .collect()
}
