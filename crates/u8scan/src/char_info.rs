use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

/// How bytes are grouped into characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Multi-byte UTF-8 sequences are decoded into one character each.
    #[default]
    Utf8,
    /// Every byte is its own character. Intended for input known to be ASCII.
    Ascii,
}

/// Decoding switches shared by the range, the access functions and the
/// configurable scan engine.
///
/// # Default
///
/// UTF-8 mode with validation enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeOptions {
    /// Byte grouping.
    pub mode: Mode,

    /// Whether continuation bytes are checked against `10xxxxxx`.
    ///
    /// Disabling validation trusts the continuation bytes and packs them into
    /// a scalar without any check. Out-of-range or overlong scalars may be
    /// produced for malformed input.
    pub validate: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Utf8,
            validate: true,
        }
    }
}

impl DecodeOptions {
    /// ASCII mode. Validation has no effect in this mode.
    #[must_use]
    pub const fn ascii() -> Self {
        Self {
            mode: Mode::Ascii,
            validate: true,
        }
    }

    /// UTF-8 mode without continuation-byte validation.
    #[must_use]
    pub const fn unvalidated() -> Self {
        Self {
            mode: Mode::Utf8,
            validate: false,
        }
    }
}

/// One character as seen by the decoder: where it starts, how many bytes it
/// spans and which scalar value it encodes.
///
/// A `CharInfo` never borrows the input. Use [`CharInfo::as_bytes`] to get the
/// raw span back from the buffer it was decoded from.
///
/// Equality, ordering and hashing look at [`codepoint`](Self::codepoint)
/// only. Two descriptors for the same character at different offsets (for
/// example with and without a leading BOM) compare equal.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharInfo {
    /// Byte offset of the first byte of this character.
    pub start_pos: usize,
    /// Number of bytes in this character (1-4). Never zero, even on error.
    pub byte_count: usize,
    /// Decoded scalar value. For invalid sequences, the value of the leading
    /// byte.
    pub codepoint: u32,
    /// Single-byte character. In [`Mode::Ascii`] this holds for every byte.
    pub is_ascii: bool,
    /// The bytes conform to the structural UTF-8 rules.
    pub is_valid_utf8: bool,
    /// Reserved. A BOM is skipped before a range starts and never surfaces as
    /// a character, so this is always `false`.
    pub is_bom: bool,
}

impl Default for CharInfo {
    fn default() -> Self {
        Self {
            start_pos: 0,
            byte_count: 1,
            codepoint: 0,
            is_ascii: true,
            is_valid_utf8: true,
            is_bom: false,
        }
    }
}

impl CharInfo {
    /// A single-byte character at `pos`.
    #[inline]
    pub(crate) const fn single_byte(pos: usize, byte: u8, is_ascii: bool, is_valid: bool) -> Self {
        Self {
            start_pos: pos,
            byte_count: 1,
            codepoint: byte as u32,
            is_ascii,
            is_valid_utf8: is_valid,
            is_bom: false,
        }
    }

    /// Byte offset one past the last byte of this character.
    #[inline]
    #[must_use]
    pub const fn end_pos(&self) -> usize {
        self.start_pos + self.byte_count
    }

    /// The raw bytes of this character within `input`.
    ///
    /// `input` must be the buffer this descriptor was decoded from; the span is
    /// clamped to `input` so a foreign buffer cannot cause a panic.
    #[must_use]
    pub fn as_bytes<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        let start = self.start_pos.min(input.len());
        let end = self.end_pos().min(input.len());
        &input[start..end]
    }

    /// The scalar as a `char`, if it is a valid Unicode scalar value and the
    /// sequence was valid.
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        if self.is_valid_utf8 {
            char::from_u32(self.codepoint)
        } else {
            None
        }
    }

    /// The low seven bits of the scalar as a byte.
    #[inline]
    #[must_use]
    pub const fn ascii_byte(&self) -> u8 {
        (self.codepoint & 0x7F) as u8
    }
}

impl PartialEq for CharInfo {
    fn eq(&self, other: &Self) -> bool {
        self.codepoint == other.codepoint
    }
}

impl Eq for CharInfo {}

impl PartialOrd for CharInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CharInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.codepoint.cmp(&other.codepoint)
    }
}

impl Hash for CharInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.codepoint.hash(state);
    }
}

impl PartialEq<char> for CharInfo {
    fn eq(&self, other: &char) -> bool {
        self.codepoint == u32::from(*other)
    }
}
