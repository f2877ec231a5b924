//! Character classification.
//!
//! Every predicate is a pure function of one [`CharInfo`]. Parameterless
//! predicates are plain `fn(&CharInfo) -> bool` items and can be passed
//! directly to iterator adapters and to the copy family:
//!
//! ```
//! use u8scan::{chars, copy_if, predicates};
//!
//! assert_eq!(chars("a1b2").filter(predicates::is_digit_ascii).count(), 2);
//! assert_eq!(copy_if("a1b2", predicates::is_alpha_ascii), "ab");
//! ```
//!
//! The ASCII classes look at the scalar only. An invalid byte never matches
//! them because its scalar is at least `0x80`.

use crate::char_info::CharInfo;

/// Single-byte character.
#[must_use]
pub fn is_ascii(info: &CharInfo) -> bool {
    info.is_ascii
}

/// Multi-byte character (or an invalid byte in UTF-8 mode).
#[must_use]
pub fn is_utf8(info: &CharInfo) -> bool {
    !info.is_ascii
}

/// Structurally valid UTF-8.
#[must_use]
pub fn is_valid(info: &CharInfo) -> bool {
    info.is_valid_utf8
}

/// Structurally invalid UTF-8.
#[must_use]
pub fn is_invalid(info: &CharInfo) -> bool {
    !info.is_valid_utf8
}

/// Matches characters whose scalar equals `codepoint`.
pub fn has_codepoint(codepoint: u32) -> impl Fn(&CharInfo) -> bool + Copy {
    move |info: &CharInfo| info.codepoint == codepoint
}

/// Matches characters whose scalar lies in `min..=max`.
pub fn in_range(min: u32, max: u32) -> impl Fn(&CharInfo) -> bool + Copy {
    move |info: &CharInfo| (min..=max).contains(&info.codepoint)
}

#[inline]
fn between(info: &CharInfo, lo: u8, hi: u8) -> bool {
    (u32::from(lo)..=u32::from(hi)).contains(&info.codepoint)
}

/// `0`-`9`.
#[must_use]
pub fn is_digit_ascii(info: &CharInfo) -> bool {
    between(info, b'0', b'9')
}

/// `A`-`Z` or `a`-`z`.
#[must_use]
pub fn is_alpha_ascii(info: &CharInfo) -> bool {
    is_uppercase_ascii(info) || is_lowercase_ascii(info)
}

/// ASCII letter or digit.
#[must_use]
pub fn is_alphanum_ascii(info: &CharInfo) -> bool {
    is_alpha_ascii(info) || is_digit_ascii(info)
}

/// `a`-`z`.
#[must_use]
pub fn is_lowercase_ascii(info: &CharInfo) -> bool {
    between(info, b'a', b'z')
}

/// `A`-`Z`.
#[must_use]
pub fn is_uppercase_ascii(info: &CharInfo) -> bool {
    between(info, b'A', b'Z')
}

/// Space, tab, line feed or carriage return. Vertical tab and form feed are
/// not whitespace here.
#[must_use]
pub fn is_whitespace_ascii(info: &CharInfo) -> bool {
    matches!(info.codepoint, 0x20 | 0x09 | 0x0A | 0x0D)
}

/// Inclusive scalar ranges treated as emoji, sorted and non-overlapping.
///
/// This is a curated approximation of the Unicode emoji property, not a
/// property lookup. Symbols that are emoji only with a variation selector
/// (`©`, `®`, `™`) are left out.
pub const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x203C, 0x203C), // double exclamation mark
    (0x2049, 0x2049), // exclamation question mark
    (0x2139, 0x2139), // information source
    (0x2190, 0x2199), // arrows
    (0x21A9, 0x21AA), // hooked arrows
    (0x231A, 0x231B), // watch, hourglass
    (0x2328, 0x2328), // keyboard
    (0x23CF, 0x23CF), // eject
    (0x23E9, 0x23F3), // media controls, clocks
    (0x23F8, 0x23FA), // pause, stop, record
    (0x24C2, 0x24C2), // circled M
    (0x25AA, 0x25AB), // small squares
    (0x25B6, 0x25B6), // play
    (0x25C0, 0x25C0), // reverse
    (0x25FB, 0x25FE), // medium squares
    (0x2600, 0x26FF), // miscellaneous symbols
    (0x2702, 0x2705), // dingbats
    (0x2708, 0x270F),
    (0x2712, 0x2714),
    (0x2716, 0x2716),
    (0x271D, 0x271D),
    (0x2721, 0x2721),
    (0x2728, 0x2728),
    (0x2733, 0x2734),
    (0x2744, 0x2744),
    (0x2747, 0x2747),
    (0x274C, 0x274C),
    (0x274E, 0x274E),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2763, 0x2764),
    (0x2795, 0x2797),
    (0x27A1, 0x27A1),
    (0x27B0, 0x27B0),
    (0x27BF, 0x27BF),
    (0x2934, 0x2935), // curved arrows
    (0x2B05, 0x2B07), // left, up, down arrows
    (0x2B1B, 0x2B1C), // large squares
    (0x2B50, 0x2B50), // star
    (0x2B55, 0x2B55), // heavy circle
    (0x3030, 0x3030), // wavy dash
    (0x303D, 0x303D), // part alternation mark
    (0x3297, 0x3297), // circled ideograph congratulation
    (0x3299, 0x3299), // circled ideograph secret
    (0x1F004, 0x1F004), // mahjong red dragon
    (0x1F0CF, 0x1F0CF), // joker
    (0x1F1E6, 0x1F1FF), // regional indicators
    (0x1F300, 0x1F5FF), // miscellaneous symbols and pictographs
    (0x1F600, 0x1F64F), // emoticons
    (0x1F680, 0x1F6FF), // transport and map
    (0x1F900, 0x1F9FF), // supplemental symbols and pictographs
    (0x1FA70, 0x1FAFF), // symbols and pictographs extended-A
];

/// Scalar is inside one of the [`EMOJI_RANGES`].
#[must_use]
pub fn is_emoji_codepoint(codepoint: u32) -> bool {
    EMOJI_RANGES
        .binary_search_by(|&(lo, hi)| {
            if hi < codepoint {
                core::cmp::Ordering::Less
            } else if lo > codepoint {
                core::cmp::Ordering::Greater
            } else {
                core::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Heuristic emoji check. See [`EMOJI_RANGES`].
#[must_use]
pub fn is_emoji(info: &CharInfo) -> bool {
    is_emoji_codepoint(info.codepoint)
}
