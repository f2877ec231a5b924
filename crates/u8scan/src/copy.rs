//! Copy family: select characters of a buffer and return their raw bytes.
//!
//! Each function walks the BOM-skipped character range of `input` once and
//! appends the original byte span of every selected character. Nothing is
//! re-encoded, so invalid bytes that are selected come through unchanged.

use alloc::vec::Vec;

use bstr::BString;

use crate::{char_info::CharInfo, range::CharRange};

fn collect<I>(input: &[u8], selected: I) -> BString
where
    I: IntoIterator<Item = CharInfo>,
{
    let mut out = Vec::with_capacity(input.len());
    for info in selected {
        out.extend_from_slice(info.as_bytes(input));
    }
    BString::from(out)
}

/// Every character.
///
/// For well-formed UTF-8 without a BOM this is a byte-for-byte copy.
#[must_use]
pub fn copy<B: AsRef<[u8]> + ?Sized>(input: &B) -> BString {
    let input = input.as_ref();
    BString::from(CharRange::new(input).as_bytes())
}

/// Characters for which `pred` holds.
#[must_use]
pub fn copy_if<B, P>(input: &B, pred: P) -> BString
where
    B: AsRef<[u8]> + ?Sized,
    P: FnMut(&CharInfo) -> bool,
{
    let input = input.as_ref();
    collect(input, CharRange::new(input).iter().filter(pred))
}

/// Characters before the first match of `pred`. The match is excluded.
#[must_use]
pub fn copy_until<B, P>(input: &B, mut pred: P) -> BString
where
    B: AsRef<[u8]> + ?Sized,
    P: FnMut(&CharInfo) -> bool,
{
    let input = input.as_ref();
    collect(input, CharRange::new(input).iter().take_while(|c| !pred(c)))
}

/// Characters from the first match of `pred` onwards, match included. Empty
/// if nothing matches.
#[must_use]
pub fn copy_from<B, P>(input: &B, mut pred: P) -> BString
where
    B: AsRef<[u8]> + ?Sized,
    P: FnMut(&CharInfo) -> bool,
{
    let input = input.as_ref();
    collect(input, CharRange::new(input).iter().skip_while(|c| !pred(c)))
}

/// The first `n` characters, or all of them if there are fewer.
#[must_use]
pub fn copy_n<B: AsRef<[u8]> + ?Sized>(input: &B, n: usize) -> BString {
    let input = input.as_ref();
    collect(input, CharRange::new(input).iter().take(n))
}

/// Characters from the start for as long as `pred` holds.
#[must_use]
pub fn copy_while<B, P>(input: &B, pred: P) -> BString
where
    B: AsRef<[u8]> + ?Sized,
    P: FnMut(&CharInfo) -> bool,
{
    let input = input.as_ref();
    collect(input, CharRange::new(input).iter().take_while(pred))
}
