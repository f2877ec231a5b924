//! Character-indexed access, in the spirit of `str::len`/`slice::get` but
//! counting characters instead of bytes.
//!
//! Every function skips a leading BOM before counting, so positions are the
//! same with and without one. All of them walk the input from the start; none
//! is better than O(n) in the index.

use crate::{
    char_info::{CharInfo, DecodeOptions},
    error::AccessError,
    range::CharRange,
};

fn range<B: AsRef<[u8]> + ?Sized>(input: &B, options: DecodeOptions) -> CharRange<'_> {
    CharRange::with_options(input, options, true)
}

/// Number of characters in `input`, BOM excluded.
///
/// ```
/// assert_eq!(u8scan::length("Hello 世界"), 8);
/// assert_eq!(u8scan::length("\u{FEFF}Hello"), 5);
/// ```
#[must_use]
pub fn length<B: AsRef<[u8]> + ?Sized>(input: &B) -> usize {
    length_with(input, DecodeOptions::default())
}

/// [`length`] with explicit decoding options.
#[must_use]
pub fn length_with<B: AsRef<[u8]> + ?Sized>(input: &B, options: DecodeOptions) -> usize {
    range(input, options).len()
}

/// `true` if `input` has no characters. A BOM-only buffer is empty.
#[must_use]
pub fn is_empty<B: AsRef<[u8]> + ?Sized>(input: &B) -> bool {
    is_empty_with(input, DecodeOptions::default())
}

/// [`is_empty`] with explicit decoding options.
#[must_use]
pub fn is_empty_with<B: AsRef<[u8]> + ?Sized>(input: &B, options: DecodeOptions) -> bool {
    range(input, options).is_empty()
}

/// The character at character index `index`.
///
/// # Errors
///
/// [`AccessError::IndexOutOfRange`] if `input` has `index` or fewer characters.
pub fn at<B: AsRef<[u8]> + ?Sized>(input: &B, index: usize) -> Result<CharInfo, AccessError> {
    at_with(input, index, DecodeOptions::default())
}

/// [`at`] with explicit decoding options.
///
/// # Errors
///
/// [`AccessError::IndexOutOfRange`] if `input` has `index` or fewer characters.
pub fn at_with<B: AsRef<[u8]> + ?Sized>(
    input: &B,
    index: usize,
    options: DecodeOptions,
) -> Result<CharInfo, AccessError> {
    let range = range(input, options);
    let mut cursor = range.begin();
    let end = range.end();
    let mut walked = 0;
    while walked < index && cursor != end {
        cursor.advance();
        walked += 1;
    }
    if cursor == end {
        return Err(AccessError::IndexOutOfRange {
            index,
            len: walked,
        });
    }
    Ok(cursor.get())
}

/// The first character.
///
/// # Errors
///
/// [`AccessError::Empty`] if `input` has no characters.
pub fn front<B: AsRef<[u8]> + ?Sized>(input: &B) -> Result<CharInfo, AccessError> {
    front_with(input, DecodeOptions::default())
}

/// [`front`] with explicit decoding options.
///
/// # Errors
///
/// [`AccessError::Empty`] if `input` has no characters.
pub fn front_with<B: AsRef<[u8]> + ?Sized>(
    input: &B,
    options: DecodeOptions,
) -> Result<CharInfo, AccessError> {
    range(input, options).iter().next().ok_or(AccessError::Empty)
}

/// The last character. UTF-8 is not walked backwards, so this is a full
/// forward traversal.
///
/// # Errors
///
/// [`AccessError::Empty`] if `input` has no characters.
pub fn back<B: AsRef<[u8]> + ?Sized>(input: &B) -> Result<CharInfo, AccessError> {
    back_with(input, DecodeOptions::default())
}

/// [`back`] with explicit decoding options.
///
/// # Errors
///
/// [`AccessError::Empty`] if `input` has no characters.
pub fn back_with<B: AsRef<[u8]> + ?Sized>(
    input: &B,
    options: DecodeOptions,
) -> Result<CharInfo, AccessError> {
    range(input, options).iter().last().ok_or(AccessError::Empty)
}
