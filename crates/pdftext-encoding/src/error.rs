//! Error types for encoding lookups.
//!
//! Uses [`thiserror`] for error derivation. Every failed lookup is reported
//! as [`EncodingError::NotFound`], carrying the [`LookupKey`] that missed.

use std::fmt;

use thiserror::Error;

/// The key of a lookup that can miss.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "value")
)]
pub enum LookupKey {
    /// A single-byte character code.
    Code(u8),
    /// A Unicode scalar value.
    Char(char),
    /// A glyph name such as `"bullet"`.
    GlyphName(String),
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Code(code) => write!(f, "character code {code}"),
            LookupKey::Char(ch) => write!(f, "character U+{:04X}", u32::from(*ch)),
            LookupKey::GlyphName(name) => write!(f, "glyph name /{name}"),
        }
    }
}

/// Error returned when a code, character, or glyph name has no mapping.
///
/// Lookups are pure, so a `NotFound` for a given key is permanent; retrying
/// the same lookup always yields the same result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncodingError {
    /// The key has no mapping in the requested direction.
    #[error("{0} not found in encoding")]
    NotFound(LookupKey),
}

impl EncodingError {
    /// The key whose lookup failed.
    pub fn key(&self) -> &LookupKey {
        match self {
            EncodingError::NotFound(key) => key,
        }
    }

    pub(crate) fn code(code: u8) -> Self {
        EncodingError::NotFound(LookupKey::Code(code))
    }

    pub(crate) fn char(ch: char) -> Self {
        EncodingError::NotFound(LookupKey::Char(ch))
    }

    pub(crate) fn glyph_name(name: &str) -> Self {
        EncodingError::NotFound(LookupKey::GlyphName(name.to_string()))
    }
}
