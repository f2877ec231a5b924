//! Character-level scanning of UTF-8 (or ASCII) byte buffers.
//!
//! The crate never builds a decoded `Vec<char>`. Everything is layered on a
//! single byte decoder ([`decode`]) that reports one [`CharInfo`] per call,
//! and a lazy, borrowed [`CharRange`] that walks a buffer with it:
//!
//! - access by character index: [`length`], [`is_empty`], [`at`], [`front`],
//!   [`back`],
//! - selection: [`copy`], [`copy_if`], [`copy_until`], [`copy_from`],
//!   [`copy_n`], [`copy_while`],
//! - directive-driven rewriting: [`scan_utf8`], [`scan_ascii`], [`scan`],
//! - classification: [`predicates`].
//!
//! A leading UTF-8 BOM (`EF BB BF`) is skipped by every entry point and is
//! never reported as a character.
//!
//! Malformed input is not an error. An invalid byte becomes a one-byte
//! character with `is_valid_utf8 == false` and the walk continues at the next
//! byte. The only error is [`AccessError`], for character positions that do
//! not exist.
//!
//! ```
//! use u8scan::{at, copy_if, length, predicates};
//!
//! let text = "Hello 世界! 123";
//! assert_eq!(length(text), 13);
//! assert_eq!(at(text, 6).unwrap().codepoint, 0x4E16);
//! assert_eq!(copy_if(text, predicates::is_digit_ascii), "123");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod access;
mod bom;
mod case;
mod char_info;
mod copy;
mod decode;
mod error;
pub mod predicates;
mod quote;
mod range;
mod scan;

#[cfg(test)]
mod tests;

pub use access::{
    at, at_with, back, back_with, front, front_with, is_empty, is_empty_with, length, length_with,
};
pub use bom::{BOM, BomAction, BomInfo, bom_str, detect_bom, has_bom, with_bom};
pub use bstr::{BStr, BString};
pub use case::{
    encode_codepoint, lowercase_ascii, to_bytes, to_lower_ascii, to_lower_ascii_str,
    to_upper_ascii, to_upper_ascii_str, transform_chars, uppercase_ascii,
};
pub use char_info::{CharInfo, DecodeOptions, Mode};
pub use copy::{copy, copy_from, copy_if, copy_n, copy_until, copy_while};
pub use decode::{char_info_at, decode, decode_with};
pub use error::AccessError;
pub use quote::{quoted, quoted_str};
pub use range::{CharIter, CharRange, Cursor, chars, make_char_range};
pub use scan::{BomHandler, ScanAction, ScanConfig, scan, scan_ascii, scan_ascii_limited, scan_utf8};
