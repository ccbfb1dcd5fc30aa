//! The candidate text encodings a book may be stored in.

use std::borrow::Cow;
use std::fmt;

use encoding_rs::{Encoding, KOI8_R, UTF_8, WINDOWS_1251};

/// Labels that mean true ISO-8859-1.
///
/// `Encoding::for_label` maps all of these to windows-1252 (WHATWG behavior),
/// so they are resolved before falling back to it.
const LATIN1_LABELS: &[&str] = &[
    "iso-8859-1",
    "iso8859-1",
    "iso_8859-1",
    "iso88591",
    "latin1",
    "latin-1",
    "l1",
    "cp819",
    "ibm819",
];

/// ASCII labels.
///
/// `Encoding::for_label` also maps these to windows-1252. ASCII is a subset of
/// UTF-8 and decodes losslessly with every candidate, so they resolve to
/// UTF-8.
const ASCII_LABELS: &[&str] = &["ascii", "us-ascii", "ansi_x3.4-1968", "iso646-us"];

/// A candidate character encoding for book content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    Windows1251,
    Koi8R,
    Utf8,
    Latin1,
}

impl Charset {
    /// The order in which candidates are tried. Earlier entries win ties.
    pub const DEFAULT_ORDER: [Charset; 4] = [
        Charset::Windows1251,
        Charset::Koi8R,
        Charset::Utf8,
        Charset::Latin1,
    ];

    /// Canonical label of this encoding.
    pub fn name(&self) -> &'static str {
        match self {
            Charset::Windows1251 => "windows-1251",
            Charset::Koi8R => "KOI8-R",
            Charset::Utf8 => "UTF-8",
            Charset::Latin1 => "ISO-8859-1",
        }
    }

    /// Resolves a user-supplied label such as `cp1251`, `koi8-r` or `latin1`.
    ///
    /// ASCII labels resolve to [`Charset::Utf8`].
    ///
    /// Returns `None` for unknown labels and for encodings that are not
    /// one of the four candidates.
    pub fn for_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase();
        if LATIN1_LABELS.contains(&label.as_str()) {
            return Some(Charset::Latin1);
        }
        if ASCII_LABELS.contains(&label.as_str()) {
            return Some(Charset::Utf8);
        }
        let encoding = Encoding::for_label(label.as_bytes())?;
        if encoding == WINDOWS_1251 {
            Some(Charset::Windows1251)
        } else if encoding == KOI8_R {
            Some(Charset::Koi8R)
        } else if encoding == UTF_8 {
            Some(Charset::Utf8)
        } else {
            None
        }
    }

    /// Decodes the whole byte slice as this encoding.
    ///
    /// No BOM sniffing is done. With `strict` unset malformed sequences become
    /// U+FFFD and this always returns `Some`; with `strict` set they make the
    /// attempt fail with `None`. Single-byte charsets map every byte and so
    /// never fail.
    pub fn decode<'a>(&self, bytes: &'a [u8], strict: bool) -> Option<Cow<'a, str>> {
        match self {
            Charset::Latin1 => Some(encoding_rs::mem::decode_latin1(bytes)),
            Charset::Windows1251 => decode_with(WINDOWS_1251, bytes, strict),
            Charset::Koi8R => decode_with(KOI8_R, bytes, strict),
            Charset::Utf8 => decode_with(UTF_8, bytes, strict),
        }
    }
}

fn decode_with<'a>(
    encoding: &'static Encoding,
    bytes: &'a [u8],
    strict: bool,
) -> Option<Cow<'a, str>> {
    if strict {
        encoding.decode_without_bom_handling_and_without_replacement(bytes)
    } else {
        let (text, _had_errors) = encoding.decode_without_bom_handling(bytes);
        Some(text)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
