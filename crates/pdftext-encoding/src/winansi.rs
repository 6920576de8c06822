//! WinAnsiEncoding: the PDF single-byte encoding based on Windows code page 1252.
//!
//! Provides [`WinAnsiEncoder`], a stateless [`TextEncoder`] over three fixed
//! tables: code → glyph name, code → Unicode scalar, and the canonical
//! Unicode scalar → code reverse table.
//!
//! The forward tables are many-to-one. Codes 0xA0 and 0xAD duplicate `space`
//! and `hyphen`, and every code left undefined by cp1252 (0x7F, 0x81, 0x8D,
//! 0x8F, 0x90, 0x9D) is aliased to `bullet` alongside the real bullet at
//! 0x95. Reverse lookups always resolve to the lowest code.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::encoder::TextEncoder;
use crate::error::EncodingError;

/// Name of this encoding as written in a font dictionary's `/Encoding` entry.
pub const WIN_ANSI_ENCODING_NAME: &str = "WinAnsiEncoding";

/// One position of the WinAnsiEncoding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EncodingEntry {
    /// The character code.
    pub code: u8,
    /// Glyph name assigned to the code.
    pub glyph_name: &'static str,
    /// Unicode scalar the code decodes to.
    pub unicode: char,
}

/// Stateless encoder for WinAnsiEncoding.
///
/// All lookups read process-wide immutable tables, so the encoder is free to
/// copy and share across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WinAnsiEncoder;

impl WinAnsiEncoder {
    /// Create a new encoder.
    pub const fn new() -> Self {
        Self
    }

    /// Decode a byte string into a Unicode string.
    ///
    /// Codes with no mapping (the C0 control range) are replaced with
    /// U+FFFD (replacement character).
    pub fn decode(&self, bytes: &[u8]) -> String {
        bytes
            .iter()
            .map(|&b| WIN_ANSI_CHARS[usize::from(b)].unwrap_or('\u{FFFD}'))
            .collect()
    }

    /// Returns `true` if every character of `text` has a code, i.e. if
    /// [`encode`](TextEncoder::encode) would not drop anything.
    pub fn can_encode(&self, text: &str) -> bool {
        text.chars().all(|ch| CHAR_TO_CODE.contains_key(&ch))
    }

    /// Resolve a glyph name to the Unicode scalar of its first code.
    pub fn glyph_name_to_char(&self, name: &str) -> Result<char, EncodingError> {
        let code = self.glyph_name_to_code(name)?;
        self.code_to_char(code)
    }

    /// Iterate over the defined positions of the table in ascending code order.
    pub fn entries(&self) -> impl Iterator<Item = EncodingEntry> {
        (0..=u8::MAX).filter_map(|code| {
            let glyph_name = WIN_ANSI_GLYPH_NAMES[usize::from(code)]?;
            let unicode = WIN_ANSI_CHARS[usize::from(code)]?;
            Some(EncodingEntry {
                code,
                glyph_name,
                unicode,
            })
        })
    }
}

impl TextEncoder for WinAnsiEncoder {
    fn identifier(&self) -> &str {
        WIN_ANSI_ENCODING_NAME
    }

    fn code_to_glyph_name(&self, code: u8) -> Result<&str, EncodingError> {
        WIN_ANSI_GLYPH_NAMES[usize::from(code)].ok_or_else(|| EncodingError::code(code))
    }

    /// Scans codes in ascending order and returns the first match, so an
    /// aliased name such as `bullet` resolves to its lowest code.
    fn glyph_name_to_code(&self, name: &str) -> Result<u8, EncodingError> {
        (0..=u8::MAX)
            .find(|&code| WIN_ANSI_GLYPH_NAMES[usize::from(code)] == Some(name))
            .ok_or_else(|| EncodingError::glyph_name(name))
    }

    fn char_to_code(&self, ch: char) -> Result<u8, EncodingError> {
        CHAR_TO_CODE
            .get(&ch)
            .copied()
            .ok_or_else(|| EncodingError::char(ch))
    }

    fn code_to_char(&self, code: u8) -> Result<char, EncodingError> {
        WIN_ANSI_CHARS[usize::from(code)].ok_or_else(|| EncodingError::code(code))
    }
}

// =============================================================================
// Encoding tables
// =============================================================================

/// Canonical reverse table, built once from [`WIN_ANSI_CHARS`].
///
/// Codes are visited in ascending order and an existing entry is never
/// replaced, so a scalar shared by several codes maps to the lowest one.
static CHAR_TO_CODE: LazyLock<HashMap<char, u8>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(224);
    for code in 0..=u8::MAX {
        if let Some(ch) = WIN_ANSI_CHARS[usize::from(code)] {
            map.entry(ch).or_insert(code);
        }
    }
    map
});

/// Code → Unicode scalar. Codes 0x00–0x1F are undefined.
static WIN_ANSI_CHARS: [Option<char>; 256] = {
    let mut t = [None; 256];
    // 0x20–0x7E: ASCII printable
    let mut i = 0x20;
    while i <= 0x7E {
        t[i] = Some(i as u8 as char);
        i += 1;
    }
    t[0x7F] = Some('\u{2022}'); // bullet (undefined)
    // 0x80–0x9F: Windows-1252 extensions
    t[0x80] = Some('\u{20AC}'); // Euro sign
    t[0x81] = Some('\u{2022}'); // bullet (undefined)
    t[0x82] = Some('\u{201A}'); // Single low-9 quotation mark
    t[0x83] = Some('\u{0192}'); // Latin small letter f with hook
    t[0x84] = Some('\u{201E}'); // Double low-9 quotation mark
    t[0x85] = Some('\u{2026}'); // Horizontal ellipsis
    t[0x86] = Some('\u{2020}'); // Dagger
    t[0x87] = Some('\u{2021}'); // Double dagger
    t[0x88] = Some('\u{02C6}'); // Modifier letter circumflex accent
    t[0x89] = Some('\u{2030}'); // Per mille sign
    t[0x8A] = Some('\u{0160}'); // Latin capital letter S with caron
    t[0x8B] = Some('\u{2039}'); // Single left-pointing angle quotation mark
    t[0x8C] = Some('\u{0152}'); // Latin capital ligature OE
    t[0x8D] = Some('\u{2022}'); // bullet (undefined)
    t[0x8E] = Some('\u{017D}'); // Latin capital letter Z with caron
    t[0x8F] = Some('\u{2022}'); // bullet (undefined)
    t[0x90] = Some('\u{2022}'); // bullet (undefined)
    t[0x91] = Some('\u{2018}'); // Left single quotation mark
    t[0x92] = Some('\u{2019}'); // Right single quotation mark
    t[0x93] = Some('\u{201C}'); // Left double quotation mark
    t[0x94] = Some('\u{201D}'); // Right double quotation mark
    t[0x95] = Some('\u{2022}'); // Bullet
    t[0x96] = Some('\u{2013}'); // En dash
    t[0x97] = Some('\u{2014}'); // Em dash
    t[0x98] = Some('\u{02DC}'); // Small tilde
    t[0x99] = Some('\u{2122}'); // Trade mark sign
    t[0x9A] = Some('\u{0161}'); // Latin small letter s with caron
    t[0x9B] = Some('\u{203A}'); // Single right-pointing angle quotation mark
    t[0x9C] = Some('\u{0153}'); // Latin small ligature oe
    t[0x9D] = Some('\u{2022}'); // bullet (undefined)
    t[0x9E] = Some('\u{017E}'); // Latin small letter z with caron
    t[0x9F] = Some('\u{0178}'); // Latin capital letter Y with diaeresis
    // 0xA0–0xFF: ISO 8859-1 upper half, except the two duplicates below
    let mut i = 0xA1;
    while i <= 0xFF {
        t[i] = Some(i as u8 as char);
        i += 1;
    }
    t[0xA0] = Some(' '); // no-break space decodes as space
    t[0xAD] = Some('-'); // soft hyphen decodes as hyphen
    t
};

/// Code → glyph name. Codes 0x00–0x1F are undefined.
#[rustfmt::skip]
static WIN_ANSI_GLYPH_NAMES: [Option<&str>; 256] = {
    let mut t = [None; 256];
    t[0x20] = Some("space");
    t[0x21] = Some("exclam");
    t[0x22] = Some("quotedbl");
    t[0x23] = Some("numbersign");
    t[0x24] = Some("dollar");
    t[0x25] = Some("percent");
    t[0x26] = Some("ampersand");
    t[0x27] = Some("quotesingle");
    t[0x28] = Some("parenleft");
    t[0x29] = Some("parenright");
    t[0x2A] = Some("asterisk");
    t[0x2B] = Some("plus");
    t[0x2C] = Some("comma");
    t[0x2D] = Some("hyphen");
    t[0x2E] = Some("period");
    t[0x2F] = Some("slash");
    t[0x30] = Some("zero");
    t[0x31] = Some("one");
    t[0x32] = Some("two");
    t[0x33] = Some("three");
    t[0x34] = Some("four");
    t[0x35] = Some("five");
    t[0x36] = Some("six");
    t[0x37] = Some("seven");
    t[0x38] = Some("eight");
    t[0x39] = Some("nine");
    t[0x3A] = Some("colon");
    t[0x3B] = Some("semicolon");
    t[0x3C] = Some("less");
    t[0x3D] = Some("equal");
    t[0x3E] = Some("greater");
    t[0x3F] = Some("question");
    t[0x40] = Some("at");
    t[0x41] = Some("A");
    t[0x42] = Some("B");
    t[0x43] = Some("C");
    t[0x44] = Some("D");
    t[0x45] = Some("E");
    t[0x46] = Some("F");
    t[0x47] = Some("G");
    t[0x48] = Some("H");
    t[0x49] = Some("I");
    t[0x4A] = Some("J");
    t[0x4B] = Some("K");
    t[0x4C] = Some("L");
    t[0x4D] = Some("M");
    t[0x4E] = Some("N");
    t[0x4F] = Some("O");
    t[0x50] = Some("P");
    t[0x51] = Some("Q");
    t[0x52] = Some("R");
    t[0x53] = Some("S");
    t[0x54] = Some("T");
    t[0x55] = Some("U");
    t[0x56] = Some("V");
    t[0x57] = Some("W");
    t[0x58] = Some("X");
    t[0x59] = Some("Y");
    t[0x5A] = Some("Z");
    t[0x5B] = Some("bracketleft");
    t[0x5C] = Some("backslash");
    t[0x5D] = Some("bracketright");
    t[0x5E] = Some("asciicircum");
    t[0x5F] = Some("underscore");
    t[0x60] = Some("grave");
    t[0x61] = Some("a");
    t[0x62] = Some("b");
    t[0x63] = Some("c");
    t[0x64] = Some("d");
    t[0x65] = Some("e");
    t[0x66] = Some("f");
    t[0x67] = Some("g");
    t[0x68] = Some("h");
    t[0x69] = Some("i");
    t[0x6A] = Some("j");
    t[0x6B] = Some("k");
    t[0x6C] = Some("l");
    t[0x6D] = Some("m");
    t[0x6E] = Some("n");
    t[0x6F] = Some("o");
    t[0x70] = Some("p");
    t[0x71] = Some("q");
    t[0x72] = Some("r");
    t[0x73] = Some("s");
    t[0x74] = Some("t");
    t[0x75] = Some("u");
    t[0x76] = Some("v");
    t[0x77] = Some("w");
    t[0x78] = Some("x");
    t[0x79] = Some("y");
    t[0x7A] = Some("z");
    t[0x7B] = Some("braceleft");
    t[0x7C] = Some("bar");
    t[0x7D] = Some("braceright");
    t[0x7E] = Some("asciitilde");
    t[0x7F] = Some("bullet");
    t[0x80] = Some("Euro");
    t[0x81] = Some("bullet");
    t[0x82] = Some("quotesinglbase");
    t[0x83] = Some("florin");
    t[0x84] = Some("quotedblbase");
    t[0x85] = Some("ellipsis");
    t[0x86] = Some("dagger");
    t[0x87] = Some("daggerdbl");
    t[0x88] = Some("circumflex");
    t[0x89] = Some("perthousand");
    t[0x8A] = Some("Scaron");
    t[0x8B] = Some("guilsinglleft");
    t[0x8C] = Some("OE");
    t[0x8D] = Some("bullet");
    t[0x8E] = Some("Zcaron");
    t[0x8F] = Some("bullet");
    t[0x90] = Some("bullet");
    t[0x91] = Some("quoteleft");
    t[0x92] = Some("quoteright");
    t[0x93] = Some("quotedblleft");
    t[0x94] = Some("quotedblright");
    t[0x95] = Some("bullet");
    t[0x96] = Some("endash");
    t[0x97] = Some("emdash");
    t[0x98] = Some("tilde");
    t[0x99] = Some("trademark");
    t[0x9A] = Some("scaron");
    t[0x9B] = Some("guilsinglright");
    t[0x9C] = Some("oe");
    t[0x9D] = Some("bullet");
    t[0x9E] = Some("zcaron");
    t[0x9F] = Some("Ydieresis");
    t[0xA0] = Some("space");
    t[0xA1] = Some("exclamdown");
    t[0xA2] = Some("cent");
    t[0xA3] = Some("sterling");
    t[0xA4] = Some("currency");
    t[0xA5] = Some("yen");
    t[0xA6] = Some("brokenbar");
    t[0xA7] = Some("section");
    t[0xA8] = Some("dieresis");
    t[0xA9] = Some("copyright");
    t[0xAA] = Some("ordfeminine");
    t[0xAB] = Some("guillemotleft");
    t[0xAC] = Some("logicalnot");
    t[0xAD] = Some("hyphen");
    t[0xAE] = Some("registered");
    t[0xAF] = Some("macron");
    t[0xB0] = Some("degree");
    t[0xB1] = Some("plusminus");
    t[0xB2] = Some("twosuperior");
    t[0xB3] = Some("threesuperior");
    t[0xB4] = Some("acute");
    t[0xB5] = Some("mu");
    t[0xB6] = Some("paragraph");
    t[0xB7] = Some("periodcentered");
    t[0xB8] = Some("cedilla");
    t[0xB9] = Some("onesuperior");
    t[0xBA] = Some("ordmasculine");
    t[0xBB] = Some("guillemotright");
    t[0xBC] = Some("onequarter");
    t[0xBD] = Some("onehalf");
    t[0xBE] = Some("threequarters");
    t[0xBF] = Some("questiondown");
    t[0xC0] = Some("Agrave");
    t[0xC1] = Some("Aacute");
    t[0xC2] = Some("Acircumflex");
    t[0xC3] = Some("Atilde");
    t[0xC4] = Some("Adieresis");
    t[0xC5] = Some("Aring");
    t[0xC6] = Some("AE");
    t[0xC7] = Some("Ccedilla");
    t[0xC8] = Some("Egrave");
    t[0xC9] = Some("Eacute");
    t[0xCA] = Some("Ecircumflex");
    t[0xCB] = Some("Edieresis");
    t[0xCC] = Some("Igrave");
    t[0xCD] = Some("Iacute");
    t[0xCE] = Some("Icircumflex");
    t[0xCF] = Some("Idieresis");
    t[0xD0] = Some("Eth");
    t[0xD1] = Some("Ntilde");
    t[0xD2] = Some("Ograve");
    t[0xD3] = Some("Oacute");
    t[0xD4] = Some("Ocircumflex");
    t[0xD5] = Some("Otilde");
    t[0xD6] = Some("Odieresis");
    t[0xD7] = Some("multiply");
    t[0xD8] = Some("Oslash");
    t[0xD9] = Some("Ugrave");
    t[0xDA] = Some("Uacute");
    t[0xDB] = Some("Ucircumflex");
    t[0xDC] = Some("Udieresis");
    t[0xDD] = Some("Yacute");
    t[0xDE] = Some("Thorn");
    t[0xDF] = Some("germandbls");
    t[0xE0] = Some("agrave");
    t[0xE1] = Some("aacute");
    t[0xE2] = Some("acircumflex");
    t[0xE3] = Some("atilde");
    t[0xE4] = Some("adieresis");
    t[0xE5] = Some("aring");
    t[0xE6] = Some("ae");
    t[0xE7] = Some("ccedilla");
    t[0xE8] = Some("egrave");
    t[0xE9] = Some("eacute");
    t[0xEA] = Some("ecircumflex");
    t[0xEB] = Some("edieresis");
    t[0xEC] = Some("igrave");
    t[0xED] = Some("iacute");
    t[0xEE] = Some("icircumflex");
    t[0xEF] = Some("idieresis");
    t[0xF0] = Some("eth");
    t[0xF1] = Some("ntilde");
    t[0xF2] = Some("ograve");
    t[0xF3] = Some("oacute");
    t[0xF4] = Some("ocircumflex");
    t[0xF5] = Some("otilde");
    t[0xF6] = Some("odieresis");
    t[0xF7] = Some("divide");
    t[0xF8] = Some("oslash");
    t[0xF9] = Some("ugrave");
    t[0xFA] = Some("uacute");
    t[0xFB] = Some("ucircumflex");
    t[0xFC] = Some("udieresis");
    t[0xFD] = Some("yacute");
    t[0xFE] = Some("thorn");
    t[0xFF] = Some("ydieresis");
    t
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupKey;

    const BULLET_CODES: [u8; 7] = [127, 129, 141, 143, 144, 149, 157];

    #[test]
    fn identifier_is_encoding_name() {
        assert_eq!(WinAnsiEncoder.identifier(), "WinAnsiEncoding");
    }

    #[test]
    fn glyph_names_defined_from_space_to_ydieresis() {
        let enc = WinAnsiEncoder::new();
        for code in 0x20..=0xFF {
            assert!(enc.code_to_glyph_name(code).is_ok(), "code {code}");
            assert!(enc.code_to_char(code).is_ok(), "code {code}");
        }
    }

    #[test]
    fn control_codes_undefined() {
        let enc = WinAnsiEncoder::new();
        for code in 0x00..0x20 {
            assert_eq!(enc.code_to_glyph_name(code), Err(EncodingError::code(code)));
            assert_eq!(enc.code_to_char(code), Err(EncodingError::code(code)));
        }
    }

    #[test]
    fn ascii_glyph_names() {
        let enc = WinAnsiEncoder;
        assert_eq!(enc.code_to_glyph_name(0x20), Ok("space"));
        assert_eq!(enc.code_to_glyph_name(0x27), Ok("quotesingle"));
        assert_eq!(enc.code_to_glyph_name(0x30), Ok("zero"));
        assert_eq!(enc.code_to_glyph_name(0x41), Ok("A"));
        assert_eq!(enc.code_to_glyph_name(0x60), Ok("grave"));
        assert_eq!(enc.code_to_glyph_name(0x7E), Ok("asciitilde"));
    }

    #[test]
    fn extended_glyph_names() {
        let enc = WinAnsiEncoder;
        assert_eq!(enc.code_to_glyph_name(0x80), Ok("Euro"));
        assert_eq!(enc.code_to_glyph_name(0x83), Ok("florin"));
        assert_eq!(enc.code_to_glyph_name(0x9F), Ok("Ydieresis"));
        assert_eq!(enc.code_to_glyph_name(0xB5), Ok("mu"));
        assert_eq!(enc.code_to_glyph_name(0xC0), Ok("Agrave"));
        assert_eq!(enc.code_to_glyph_name(0xDF), Ok("germandbls"));
        assert_eq!(enc.code_to_glyph_name(0xFF), Ok("ydieresis"));
    }

    #[test]
    fn undefined_cp1252_codes_alias_bullet() {
        let enc = WinAnsiEncoder;
        for code in BULLET_CODES {
            assert_eq!(enc.code_to_glyph_name(code), Ok("bullet"), "code {code}");
            assert_eq!(enc.code_to_char(code), Ok('\u{2022}'), "code {code}");
        }
    }

    #[test]
    fn duplicate_space_and_hyphen() {
        let enc = WinAnsiEncoder;
        assert_eq!(enc.code_to_glyph_name(0xA0), Ok("space"));
        assert_eq!(enc.code_to_char(0xA0), Ok(' '));
        assert_eq!(enc.code_to_glyph_name(0xAD), Ok("hyphen"));
        assert_eq!(enc.code_to_char(0xAD), Ok('-'));
    }

    #[test]
    fn reverse_lookup_prefers_lowest_code() {
        let enc = WinAnsiEncoder;
        assert_eq!(enc.char_to_code(' '), Ok(32));
        assert_eq!(enc.char_to_code('-'), Ok(45));
        assert_eq!(enc.char_to_code('\u{2022}'), Ok(127));
    }

    #[test]
    fn glyph_name_lookup_prefers_lowest_code() {
        let enc = WinAnsiEncoder;
        assert_eq!(enc.glyph_name_to_code("bullet"), Ok(127));
        assert_eq!(enc.glyph_name_to_code("space"), Ok(32));
        assert_eq!(enc.glyph_name_to_code("hyphen"), Ok(45));
        assert_eq!(enc.glyph_name_to_code("Euro"), Ok(128));
        assert_eq!(enc.glyph_name_to_code("thorn"), Ok(254));
    }

    #[test]
    fn unknown_glyph_name_not_found() {
        let err = WinAnsiEncoder.glyph_name_to_code("fi").unwrap_err();
        assert_eq!(err.key(), &LookupKey::GlyphName("fi".to_string()));
    }

    #[test]
    fn unencodable_chars_not_found() {
        let enc = WinAnsiEncoder;
        assert_eq!(enc.char_to_code('\u{4E2D}'), Err(EncodingError::char('\u{4E2D}')));
        // No-break space and soft hyphen only decode; they never encode.
        assert_eq!(enc.char_to_code('\u{00A0}'), Err(EncodingError::char('\u{00A0}')));
        assert_eq!(enc.char_to_code('\u{00AD}'), Err(EncodingError::char('\u{00AD}')));
        assert_eq!(enc.char_to_code('\n'), Err(EncodingError::char('\n')));
    }

    #[test]
    fn char_to_glyph_name_via_code() {
        let enc = WinAnsiEncoder;
        assert_eq!(enc.char_to_glyph_name('\u{00C0}'), Ok("Agrave"));
        assert_eq!(enc.char_to_glyph_name('\u{20AC}'), Ok("Euro"));
        assert_eq!(enc.char_to_glyph_name(' '), Ok("space"));
        assert!(enc.char_to_glyph_name('\u{00A0}').is_err());
    }

    #[test]
    fn reverse_table_round_trips() {
        let enc = WinAnsiEncoder;
        for (&ch, &code) in CHAR_TO_CODE.iter() {
            assert_eq!(enc.code_to_char(code), Ok(ch));
        }
    }

    #[test]
    fn reverse_table_size() {
        // 224 defined codes, minus six bullet aliases, 0xA0 and 0xAD.
        assert_eq!(CHAR_TO_CODE.len(), 216);
    }

    #[test]
    fn encode_text() {
        let enc = WinAnsiEncoder;
        assert_eq!(enc.encode("caf\u{00E9}"), vec![0x63, 0x61, 0x66, 0xE9]);
        assert_eq!(enc.encode("\u{201C}ok\u{201D}"), vec![0x93, 0x6F, 0x6B, 0x94]);
    }

    #[test]
    fn encode_drops_unencodable() {
        let enc = WinAnsiEncoder;
        assert_eq!(enc.encode("a\u{4E2D}b"), b"ab".to_vec());
        assert!(enc.encode("\u{4E2D}\u{6587}").is_empty());
    }

    #[test]
    fn decode_bytes() {
        let enc = WinAnsiEncoder;
        assert_eq!(enc.decode(&[0x48, 0x65, 0x6C, 0x6C, 0x6F]), "Hello");
        assert_eq!(enc.decode(&[0x80, 0x20, 0xA0, 0x35]), "\u{20AC}  5");
    }

    #[test]
    fn decode_bytes_with_undefined() {
        assert_eq!(WinAnsiEncoder.decode(&[0x41, 0x09, 0x42]), "A\u{FFFD}B");
    }

    #[test]
    fn can_encode() {
        let enc = WinAnsiEncoder;
        assert!(enc.can_encode("Na\u{00EF}ve \u{2014} \u{00A9}2024"));
        assert!(enc.can_encode(""));
        assert!(!enc.can_encode("a\u{4E2D}"));
        assert!(!enc.can_encode("non\u{00A0}breaking"));
    }

    #[test]
    fn glyph_name_to_char() {
        let enc = WinAnsiEncoder;
        assert_eq!(enc.glyph_name_to_char("Scaron"), Ok('\u{0160}'));
        assert_eq!(enc.glyph_name_to_char("bullet"), Ok('\u{2022}'));
        assert!(enc.glyph_name_to_char("uni2022").is_err());
    }

    #[test]
    fn entries_cover_defined_codes_in_order() {
        let entries: Vec<EncodingEntry> = WinAnsiEncoder.entries().collect();
        assert_eq!(entries.len(), 224);
        assert_eq!(
            entries[0],
            EncodingEntry {
                code: 0x20,
                glyph_name: "space",
                unicode: ' ',
            }
        );
        assert_eq!(entries.last().map(|e| e.glyph_name), Some("ydieresis"));
        assert!(entries.windows(2).all(|w| w[0].code < w[1].code));
    }

    #[test]
    fn glyph_and_char_tables_agree_on_domain() {
        for code in 0..=u8::MAX {
            let idx = usize::from(code);
            assert_eq!(
                WIN_ANSI_GLYPH_NAMES[idx].is_some(),
                WIN_ANSI_CHARS[idx].is_some(),
                "code {code}"
            );
        }
    }

    #[test]
    fn lookups_are_deterministic() {
        let enc = WinAnsiEncoder;
        for _ in 0..3 {
            assert_eq!(enc.code_to_glyph_name(0x8A), Ok("Scaron"));
            assert_eq!(enc.char_to_code('\u{0178}'), Ok(0x9F));
        }
    }
}
