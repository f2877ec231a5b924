//! ASCII case mapping and codepoint re-encoding.
//!
//! Only `A`-`Z` and `a`-`z` change case. Everything else, including
//! non-ASCII letters, passes through untouched.

use alloc::vec::Vec;

use bstr::BString;

use crate::{
    char_info::CharInfo,
    predicates::{is_lowercase_ascii, is_uppercase_ascii},
    range::CharRange,
    scan::{ScanAction, scan_utf8},
};

const CASE_OFFSET: u32 = (b'a' - b'A') as u32;

/// Lowercase scalar for an ASCII uppercase letter, the scalar unchanged
/// otherwise.
#[must_use]
pub fn to_lower_ascii(info: &CharInfo) -> u32 {
    if info.is_ascii && is_uppercase_ascii(info) {
        info.codepoint + CASE_OFFSET
    } else {
        info.codepoint
    }
}

/// Uppercase scalar for an ASCII lowercase letter, the scalar unchanged
/// otherwise.
#[must_use]
pub fn to_upper_ascii(info: &CharInfo) -> u32 {
    if info.is_ascii && is_lowercase_ascii(info) {
        info.codepoint - CASE_OFFSET
    } else {
        info.codepoint
    }
}

/// Encodes `codepoint` with plain UTF-8 bit-packing into `buf`.
///
/// Any value below `0x110000` is encoded, surrogate halves included. Larger
/// values produce an empty slice.
pub fn encode_codepoint(codepoint: u32, buf: &mut [u8; 4]) -> &[u8] {
    #[allow(clippy::cast_possible_truncation)]
    let len = match codepoint {
        0..0x80 => {
            buf[0] = codepoint as u8;
            1
        }
        0x80..0x800 => {
            buf[0] = 0xC0 | (codepoint >> 6) as u8;
            buf[1] = 0x80 | (codepoint & 0x3F) as u8;
            2
        }
        0x800..0x1_0000 => {
            buf[0] = 0xE0 | (codepoint >> 12) as u8;
            buf[1] = 0x80 | ((codepoint >> 6) & 0x3F) as u8;
            buf[2] = 0x80 | (codepoint & 0x3F) as u8;
            3
        }
        0x1_0000..0x11_0000 => {
            buf[0] = 0xF0 | (codepoint >> 18) as u8;
            buf[1] = 0x80 | ((codepoint >> 12) & 0x3F) as u8;
            buf[2] = 0x80 | ((codepoint >> 6) & 0x3F) as u8;
            buf[3] = 0x80 | (codepoint & 0x3F) as u8;
            4
        }
        _ => 0,
    };
    &buf[..len]
}

/// The descriptor's scalar re-encoded as UTF-8.
#[must_use]
pub fn to_bytes(info: &CharInfo) -> Vec<u8> {
    let mut buf = [0u8; 4];
    encode_codepoint(info.codepoint, &mut buf).to_vec()
}

/// The character lowercased (ASCII only) as bytes.
///
/// A single-byte descriptor yields exactly one byte, so bytes `>= 0x80` read
/// in [`Mode::Ascii`](crate::Mode::Ascii) pass through unchanged. Other
/// descriptors are re-encoded as UTF-8.
#[must_use]
pub fn to_lower_ascii_str(info: &CharInfo) -> Vec<u8> {
    case_bytes(info, to_lower_ascii(info))
}

/// The character uppercased (ASCII only) as bytes. Single-byte descriptors
/// stay one byte, as in [`to_lower_ascii_str`].
#[must_use]
pub fn to_upper_ascii_str(info: &CharInfo) -> Vec<u8> {
    case_bytes(info, to_upper_ascii(info))
}

#[allow(clippy::cast_possible_truncation)]
fn case_bytes(info: &CharInfo, mapped: u32) -> Vec<u8> {
    if info.is_ascii {
        // Single-byte descriptors carry their byte value as the scalar.
        alloc::vec![mapped as u8]
    } else {
        let mut buf = [0u8; 4];
        encode_codepoint(mapped, &mut buf).to_vec()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn map_ascii<B: AsRef<[u8]> + ?Sized>(input: &B, map: fn(&CharInfo) -> u32) -> BString {
    // `map` only ever moves a scalar between `A-Z` and `a-z`.
    scan_utf8(input, |info, _| {
        let mapped = map(info);
        if mapped == info.codepoint {
            ScanAction::Copy
        } else {
            ScanAction::Replace(alloc::vec![mapped as u8])
        }
    })
}

/// `input` with ASCII uppercase letters lowered. A leading BOM is dropped;
/// all other bytes, valid or not, are copied.
#[must_use]
pub fn lowercase_ascii<B: AsRef<[u8]> + ?Sized>(input: &B) -> BString {
    map_ascii(input, to_lower_ascii)
}

/// `input` with ASCII lowercase letters raised. A leading BOM is dropped;
/// all other bytes, valid or not, are copied.
#[must_use]
pub fn uppercase_ascii<B: AsRef<[u8]> + ?Sized>(input: &B) -> BString {
    map_ascii(input, to_upper_ascii)
}

/// Lazily applies `f` to every character of `input` (leading BOM skipped).
///
/// ```
/// let upper: String = u8scan::transform_chars("abc", |c| {
///     char::from_u32(u8scan::to_upper_ascii(c)).unwrap()
/// })
/// .collect();
/// assert_eq!(upper, "ABC");
/// ```
pub fn transform_chars<B, T, F>(input: &B, mut f: F) -> impl Iterator<Item = T>
where
    B: AsRef<[u8]> + ?Sized,
    F: FnMut(&CharInfo) -> T,
{
    CharRange::new(input).iter().map(move |info| f(&info))
}
