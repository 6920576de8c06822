//! The text-encoding capability consumed by font and content-stream layers.

use crate::error::EncodingError;

/// A named single-byte text encoding with glyph-name lookups.
///
/// Implementors supply the table lookups; the composite lookup
/// [`char_to_glyph_name`](TextEncoder::char_to_glyph_name) and the lossy
/// [`encode`](TextEncoder::encode) are provided on top of them.
///
/// The trait is object safe, so callers may hold a `&dyn TextEncoder` or
/// `Box<dyn TextEncoder>` chosen from a font's `/Encoding` entry.
pub trait TextEncoder {
    /// The encoding's name as written in a font dictionary, e.g. `WinAnsiEncoding`.
    fn identifier(&self) -> &str;

    /// Look up the glyph name assigned to a character code.
    fn code_to_glyph_name(&self, code: u8) -> Result<&str, EncodingError>;

    /// Find the character code carrying a glyph name.
    fn glyph_name_to_code(&self, name: &str) -> Result<u8, EncodingError>;

    /// Look up the canonical character code for a Unicode scalar.
    fn char_to_code(&self, ch: char) -> Result<u8, EncodingError>;

    /// Look up the Unicode scalar for a character code.
    fn code_to_char(&self, code: u8) -> Result<char, EncodingError>;

    /// Resolve a Unicode scalar to its glyph name through its character code.
    ///
    /// Both steps are checked: the scalar must be encodable and the resulting
    /// code must carry a glyph name.
    fn char_to_glyph_name(&self, ch: char) -> Result<&str, EncodingError> {
        let code = self.char_to_code(ch)?;
        self.code_to_glyph_name(code)
    }

    /// Encode text into character codes.
    ///
    /// Characters without a code are dropped without error, so the output may
    /// be shorter than the input. Callers that need a lossless conversion must
    /// check the text first.
    fn encode(&self, text: &str) -> Vec<u8> {
        text.chars()
            .filter_map(|ch| self.char_to_code(ch).ok())
            .collect()
    }
}
