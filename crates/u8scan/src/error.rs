use thiserror::Error;

/// Character-position access past the end of the (BOM-skipped) input.
///
/// This is the only error the crate reports. Malformed UTF-8 is never an
/// error: it shows up in-band as [`CharInfo::is_valid_utf8`] being `false`.
///
/// [`CharInfo::is_valid_utf8`]: crate::CharInfo::is_valid_utf8
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// `index` does not name a character.
    #[error("character index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested character index.
        index: usize,
        /// Number of characters actually present.
        len: usize,
    },
    /// `front`/`back` on an input with no characters.
    #[error("string is empty")]
    Empty,
}

impl AccessError {
    /// Both variants report a character position that does not exist.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. } | Self::Empty)
    }
}
