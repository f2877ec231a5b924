//! Character ranges: lazy, forward-only views over a borrowed byte buffer.
//!
//! A [`CharRange`] is `(buffer, start, end, options)`. It never owns or
//! copies the buffer, and the borrow keeps the buffer alive and unchanged for
//! as long as the range or any cursor derived from it exists.
//!
//! Two ways to walk a range:
//! - [`Cursor`] for external iteration: compare against [`CharRange::end`],
//!   read with [`Cursor::get`], move with [`Cursor::advance`].
//! - [`CharIter`] for everything built on [`Iterator`]: `for c in &range`,
//!   `filter`, `count`, `find`, and the rest.
//!
//! Decoding is bounded by the range's `end`. A multi-byte sequence cut by
//! `end` decodes as invalid single bytes, so a walk always stops exactly at
//! `end`.
//!
//! ```
//! use u8scan::{make_char_range, predicates};
//!
//! let range = make_char_range("Hello 世界! 123");
//! assert_eq!(range.len(), 13);
//! assert_eq!(range.iter().filter(predicates::is_digit_ascii).count(), 3);
//! ```

use core::{cell::Cell, iter::FusedIterator};

use crate::{
    bom::detect_bom,
    char_info::{CharInfo, DecodeOptions},
    decode::decode_with,
};

/// A view of the characters of `input[start..end]`.
#[derive(Debug, Clone, Copy)]
pub struct CharRange<'a> {
    input: &'a [u8],
    start: usize,
    end: usize,
    options: DecodeOptions,
}

impl<'a> CharRange<'a> {
    /// The whole buffer, UTF-8 with validation, leading BOM skipped.
    #[must_use]
    pub fn new<B: AsRef<[u8]> + ?Sized>(input: &'a B) -> Self {
        Self::with_options(input, DecodeOptions::default(), true)
    }

    /// The whole buffer with explicit decoding options.
    ///
    /// With `skip_bom`, a leading BOM is excluded from the range.
    #[must_use]
    pub fn with_options<B: AsRef<[u8]> + ?Sized>(
        input: &'a B,
        options: DecodeOptions,
        skip_bom: bool,
    ) -> Self {
        let input = input.as_ref();
        Self::bounded(input, 0, input.len(), options, skip_bom)
    }

    /// The byte span `[start, end)` of the buffer.
    ///
    /// With `skip_bom`, a BOM is skipped only when `start == 0`. If the span is
    /// shorter than the BOM the range becomes empty.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > input.len()`.
    #[must_use]
    pub fn bounded<B: AsRef<[u8]> + ?Sized>(
        input: &'a B,
        start: usize,
        end: usize,
        options: DecodeOptions,
        skip_bom: bool,
    ) -> Self {
        let input = input.as_ref();
        assert!(
            start <= end && end <= input.len(),
            "range {start}..{end} out of bounds for buffer of length {}",
            input.len()
        );
        let start = if skip_bom && start == 0 {
            detect_bom(input).skip().min(end)
        } else {
            start
        };
        Self {
            input,
            start,
            end,
            options,
        }
    }

    /// Cursor at the first character.
    #[must_use]
    pub fn begin(&self) -> Cursor<'a> {
        Cursor::new(&self.input[..self.end], self.start, self.options)
    }

    /// Cursor one past the last character.
    #[must_use]
    pub fn end(&self) -> Cursor<'a> {
        Cursor::new(&self.input[..self.end], self.end, self.options)
    }

    /// Iterator over the characters of the range.
    #[must_use]
    pub fn iter(&self) -> CharIter<'a> {
        CharIter {
            cursor: self.begin(),
            end: self.end,
        }
    }

    /// Number of characters. O(n): character count is not derivable from the
    /// byte count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// `true` if the range holds no bytes (a BOM-only buffer is empty). O(1).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Byte offset of the first character, after any BOM skip.
    #[must_use]
    pub const fn start_pos(&self) -> usize {
        self.start
    }

    /// Byte offset one past the range.
    #[must_use]
    pub const fn end_pos(&self) -> usize {
        self.end
    }

    /// The buffer the range borrows.
    #[must_use]
    pub const fn input(&self) -> &'a [u8] {
        self.input
    }

    /// The raw bytes covered by the range.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.input[self.start..self.end]
    }

    /// Decoding options used for every character.
    #[must_use]
    pub const fn options(&self) -> DecodeOptions {
        self.options
    }
}

impl<'a> IntoIterator for CharRange<'a> {
    type Item = CharInfo;
    type IntoIter = CharIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &CharRange<'a> {
    type Item = CharInfo;
    type IntoIter = CharIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A forward-only position in a buffer.
///
/// The descriptor for the current position is decoded on first [`get`] and
/// cached until the cursor moves.
///
/// Two cursors are equal when they point into the same buffer at the same byte
/// offset. Cursors over different buffers never compare equal, even if the
/// contents match.
///
/// [`get`]: Cursor::get
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    options: DecodeOptions,
    cached: Cell<Option<CharInfo>>,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a [u8], pos: usize, options: DecodeOptions) -> Self {
        Self {
            input,
            pos,
            options,
            cached: Cell::new(None),
        }
    }

    /// The character at the current position.
    ///
    /// At or past the end of the buffer this is the decoder's invalid
    /// sentinel; compare against [`CharRange::end`] first.
    pub fn get(&self) -> CharInfo {
        if let Some(info) = self.cached.get() {
            return info;
        }
        let info = decode_with(self.input, self.pos, self.options);
        self.cached.set(Some(info));
        info
    }

    /// Moves past the current character. Always moves at least one byte.
    pub fn advance(&mut self) {
        let info = self.get();
        self.pos += info.byte_count;
        self.cached.set(None);
    }

    /// Current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.input.as_ptr(), other.input.as_ptr()) && self.pos == other.pos
    }
}

impl Eq for Cursor<'_> {}

/// Iterator over the characters of a [`CharRange`].
#[derive(Debug, Clone)]
pub struct CharIter<'a> {
    cursor: Cursor<'a>,
    end: usize,
}

impl CharIter<'_> {
    /// Byte offset of the next character to be yielded.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor.pos
    }
}

impl Iterator for CharIter<'_> {
    type Item = CharInfo;

    #[inline]
    fn next(&mut self) -> Option<CharInfo> {
        if self.cursor.pos >= self.end {
            return None;
        }
        let info = self.cursor.get();
        self.cursor.advance();
        Some(info)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.cursor.pos);
        (remaining.div_ceil(4), Some(remaining))
    }
}

impl FusedIterator for CharIter<'_> {}

/// A [`CharRange`] over the whole buffer with default options and BOM skip.
#[must_use]
pub fn make_char_range<B: AsRef<[u8]> + ?Sized>(input: &B) -> CharRange<'_> {
    CharRange::new(input)
}

/// Iterator over the characters of `input`, leading BOM skipped.
#[must_use]
pub fn chars<B: AsRef<[u8]> + ?Sized>(input: &B) -> CharIter<'_> {
    CharRange::new(input).iter()
}
