//! Byte decoder: one character descriptor per call, no state, no allocation.
//!
//! Validation is structural only. Lead bytes are classified by their high
//! bits and continuation bytes must match `10xxxxxx`. Overlong encodings,
//! surrogate halves and scalars above `U+10FFFF` are not rejected.
//!
//! Recovery after an invalid sequence advances a single byte, so a corrupt
//! multi-byte sequence surfaces as one invalid character per byte until a
//! byte that can start a character is reached.

use crate::char_info::{CharInfo, DecodeOptions, Mode};

/// Expected sequence length for a UTF-8 lead byte, or `None` for bytes that
/// cannot start a multi-byte sequence (`10xxxxxx` and `>= 0xF8`).
///
/// ASCII bytes are handled before this is consulted.
#[inline]
const fn sequence_len(lead: u8) -> Option<usize> {
    if lead & 0xE0 == 0xC0 {
        Some(2)
    } else if lead & 0xF0 == 0xE0 {
        Some(3)
    } else if lead & 0xF8 == 0xF0 {
        Some(4)
    } else {
        None
    }
}

#[inline]
const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Decodes the character starting at byte offset `pos` of `input`.
///
/// Decoding is total. The returned descriptor always has
/// `byte_count >= 1`, so repeatedly adding `byte_count` to an offset walks
/// any buffer to its end.
///
/// - `pos >= input.len()` yields an invalid sentinel with `byte_count == 1`;
///   callers check bounds before using its scalar.
/// - In [`Mode::Ascii`], and for bytes below `0x80`, the byte is one valid
///   ASCII character.
/// - An impossible lead byte, or a sequence that would run past the end of
///   `input`, is one invalid byte whose scalar is the byte value.
/// - With `validate`, a continuation byte not matching `10xxxxxx` downgrades
///   the whole character to one invalid byte. Without it, continuation bytes
///   are trusted.
#[must_use]
pub fn decode(input: &[u8], pos: usize, mode: Mode, validate: bool) -> CharInfo {
    let Some(&lead) = input.get(pos) else {
        return CharInfo {
            start_pos: pos,
            is_valid_utf8: false,
            ..CharInfo::default()
        };
    };

    if mode == Mode::Ascii || lead < 0x80 {
        return CharInfo::single_byte(pos, lead, true, true);
    }

    let Some(len) = sequence_len(lead) else {
        return CharInfo::single_byte(pos, lead, false, false);
    };

    let Some(tail) = input.get(pos + 1..pos + len) else {
        return CharInfo::single_byte(pos, lead, false, false);
    };

    // Payload bits of the lead byte: 5, 4 or 3 for lengths 2, 3, 4.
    let mut codepoint = u32::from(lead) & ((1 << (7 - len)) - 1);
    for &byte in tail {
        if validate && !is_continuation(byte) {
            return CharInfo::single_byte(pos, lead, false, false);
        }
        codepoint = (codepoint << 6) | u32::from(byte & 0x3F);
    }

    CharInfo {
        start_pos: pos,
        byte_count: len,
        codepoint,
        is_ascii: false,
        is_valid_utf8: true,
        is_bom: false,
    }
}

/// [`decode`] with the switches taken from `options`.
#[inline]
#[must_use]
pub fn decode_with(input: &[u8], pos: usize, options: DecodeOptions) -> CharInfo {
    decode(input, pos, options.mode, options.validate)
}

/// UTF-8, validating decode of the character at byte offset `pos`.
///
/// No BOM handling happens here: `pos` is a raw byte offset.
#[inline]
#[must_use]
pub fn char_info_at<B: AsRef<[u8]> + ?Sized>(input: &B, pos: usize) -> CharInfo {
    decode(input.as_ref(), pos, Mode::Utf8, true)
}

#[cfg(test)]
mod tests;
