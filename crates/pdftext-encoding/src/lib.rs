//! pdftext-encoding: WinAnsiEncoding text codec for PDF content streams.
//!
//! This crate converts text between Unicode and WinAnsiEncoding, maps
//! character codes to and from the glyph names used for font lookups, and
//! splits text into words on the encoding's `space` glyph. The content-stream
//! and font layers that call into it live elsewhere; this crate only provides
//! the conversion primitives behind the [`TextEncoder`] capability.

pub mod encoder;
pub mod error;
pub mod winansi;
pub mod words;

pub use encoder::TextEncoder;
pub use error::{EncodingError, LookupKey};
pub use winansi::{EncodingEntry, WIN_ANSI_ENCODING_NAME, WinAnsiEncoder};
pub use words::{SPACE_GLYPH, split_words};
