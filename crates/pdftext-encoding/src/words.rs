//! Word segmentation on the encoding's `space` glyph.
//!
//! Words are delimited by glyph identity rather than Unicode whitespace:
//! a character splits only if the encoder maps it to the glyph named
//! [`SPACE_GLYPH`]. Layout code measuring text in an encoding's glyph space
//! needs the same notion of "space" the font will draw.

use crate::encoder::TextEncoder;

/// Glyph name that delimits words.
pub const SPACE_GLYPH: &str = "space";

/// Split `text` into words on characters whose glyph is `space`.
///
/// - Consecutive spaces produce empty words between them.
/// - A trailing empty word is omitted, so `"lonely "` yields `["lonely"]`.
/// - Characters the encoder cannot map to a glyph are skipped: they neither
///   end a word nor appear in one. Each skip is logged at debug level.
pub fn split_words<E>(text: &str, encoder: &E) -> Vec<String>
where
    E: TextEncoder + ?Sized,
{
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        match encoder.char_to_glyph_name(ch) {
            Ok(SPACE_GLYPH) => words.push(std::mem::take(&mut current)),
            Ok(_) => current.push(ch),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    encoding = encoder.identifier(),
                    ch = %ch.escape_unicode(),
                    error = %_err,
                    "glyph not found, skipping character"
                );
            }
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}
