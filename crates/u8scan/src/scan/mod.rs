//! Scan engines: walk a buffer character by character and build an output
//! buffer from per-character directives.
//!
//! A handler sees each [`CharInfo`] together with the character's raw bytes
//! and answers with a [`ScanAction`]:
//!
//! - [`ScanAction::Copy`] appends the raw bytes unchanged,
//! - [`ScanAction::Replace`] appends the given bytes instead,
//! - [`ScanAction::Skip`] appends nothing,
//! - [`ScanAction::Stop`] ends the scan and returns what was built so far.
//!
//! The engines never fail. Malformed input reaches the handler as descriptors
//! with `is_valid_utf8 == false`, and the handler decides what to emit.
//!
//! ```
//! use u8scan::{ScanAction, scan_utf8};
//!
//! let out = scan_utf8("Valid\u{FF}More", |info, _| {
//!     if info.is_ascii { ScanAction::Copy } else { ScanAction::replace("?") }
//! });
//! assert_eq!(out, "Valid?More");
//! ```

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use bstr::BString;
use log::{debug, trace};

use crate::{
    bom::{BOM, BomAction, BomInfo, detect_bom},
    char_info::{CharInfo, DecodeOptions, Mode},
    decode::decode,
};

/// What to do with the character a handler was just shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanAction {
    /// Append the character's original bytes.
    #[default]
    Copy,
    /// Append these bytes instead. Any length, including empty.
    Replace(Vec<u8>),
    /// Append nothing.
    Skip,
    /// Stop scanning and return the output built so far.
    Stop,
}

impl ScanAction {
    /// `Replace` from anything convertible to bytes (`&str`, `String`,
    /// `&[u8]`, `Vec<u8>`).
    pub fn replace(with: impl Into<Vec<u8>>) -> Self {
        Self::Replace(with.into())
    }
}

/// Produces the bytes written in place of a BOM under [`BomAction::Custom`].
/// Receives the detection result and the three BOM bytes.
pub type BomHandler = Box<dyn Fn(&BomInfo, &[u8]) -> Vec<u8>>;

/// Settings for [`scan`].
///
/// # Default
///
/// UTF-8 mode, validation on, BOM dropped, no output limit.
pub struct ScanConfig {
    /// Byte grouping.
    pub mode: Mode,
    /// Disposition of a leading BOM.
    pub bom_action: BomAction,
    /// Used with [`BomAction::Custom`]. Without a handler a custom BOM is
    /// dropped.
    pub bom_handler: Option<BomHandler>,
    /// Continuation-byte validation.
    pub validate: bool,
    /// Stop once the output holds at least this many bytes. The check runs
    /// before each character, so the last append may overshoot.
    pub max_output_size: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Utf8,
            bom_action: BomAction::Ignore,
            bom_handler: None,
            validate: true,
            max_output_size: None,
        }
    }
}

impl fmt::Debug for ScanConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanConfig")
            .field("mode", &self.mode)
            .field("bom_action", &self.bom_action)
            .field("bom_handler", &self.bom_handler.as_ref().map(|_| ".."))
            .field("validate", &self.validate)
            .field("max_output_size", &self.max_output_size)
            .finish()
    }
}

impl ScanConfig {
    /// Decoding options implied by this configuration.
    #[must_use]
    pub const fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            mode: self.mode,
            validate: self.validate,
        }
    }

    /// Copy a leading BOM through to the output.
    #[must_use]
    pub fn copy_bom(mut self) -> Self {
        self.bom_action = BomAction::Copy;
        self.bom_handler = None;
        self
    }

    /// Replace a leading BOM with the output of `handler`.
    #[must_use]
    pub fn custom_bom(mut self, handler: impl Fn(&BomInfo, &[u8]) -> Vec<u8> + 'static) -> Self {
        self.bom_action = BomAction::Custom;
        self.bom_handler = Some(Box::new(handler));
        self
    }
}

/// Appends the bytes a directive calls for. Returns `false` on `Stop`.
#[inline]
fn apply(out: &mut Vec<u8>, action: ScanAction, raw: &[u8]) -> bool {
    match action {
        ScanAction::Copy => out.extend_from_slice(raw),
        ScanAction::Replace(bytes) => out.extend_from_slice(&bytes),
        ScanAction::Skip => {}
        ScanAction::Stop => return false,
    }
    true
}

/// UTF-8 scan with validation. A leading BOM is dropped.
pub fn scan_utf8<B, F>(input: &B, mut handler: F) -> BString
where
    B: AsRef<[u8]> + ?Sized,
    F: FnMut(&CharInfo, &[u8]) -> ScanAction,
{
    let input = input.as_ref();
    let mut out = Vec::with_capacity(input.len());
    let mut pos = detect_bom(input).skip();
    while pos < input.len() {
        let info = decode(input, pos, Mode::Utf8, true);
        let raw = &input[pos..info.end_pos()];
        if !apply(&mut out, handler(&info, raw), raw) {
            break;
        }
        pos = info.end_pos();
    }
    BString::from(out)
}

/// Byte-at-a-time scan. Every byte is reported as a one-byte ASCII
/// character and no BOM handling takes place.
pub fn scan_ascii<B, F>(input: &B, mut handler: F) -> BString
where
    B: AsRef<[u8]> + ?Sized,
    F: FnMut(&CharInfo, &[u8]) -> ScanAction,
{
    let input = input.as_ref();
    let mut out = Vec::with_capacity(input.len());
    for (pos, &byte) in input.iter().enumerate() {
        let info = CharInfo::single_byte(pos, byte, true, true);
        let raw = &input[pos..=pos];
        if !apply(&mut out, handler(&info, raw), raw) {
            break;
        }
    }
    BString::from(out)
}

/// [`scan_ascii`], with the result truncated to at most `max_output_size`
/// bytes. Truncation may cut a replacement in the middle.
pub fn scan_ascii_limited<B, F>(input: &B, handler: F, max_output_size: usize) -> BString
where
    B: AsRef<[u8]> + ?Sized,
    F: FnMut(&CharInfo, &[u8]) -> ScanAction,
{
    let mut out = scan_ascii(input, handler);
    out.truncate(max_output_size);
    out
}

/// Configurable scan. See [`ScanConfig`].
///
/// A leading BOM is detected in both modes and never shown to `handler`;
/// `config.bom_action` decides what, if anything, replaces it in the output.
pub fn scan<B, F>(input: &B, mut handler: F, config: &ScanConfig) -> BString
where
    B: AsRef<[u8]> + ?Sized,
    F: FnMut(&CharInfo, &[u8]) -> ScanAction,
{
    let input = input.as_ref();
    let mut out = Vec::with_capacity(input.len());
    let mut bom = detect_bom(input);
    if bom.found {
        bom.action_taken = config.bom_action;
        match (config.bom_action, &config.bom_handler) {
            (BomAction::Ignore, _) | (BomAction::Custom, None) => {}
            (BomAction::Copy, _) => out.extend_from_slice(&BOM),
            (BomAction::Custom, Some(bom_handler)) => {
                out.extend_from_slice(&bom_handler(&bom, &input[..bom.size]));
            }
        }
        debug!("scan: leading BOM handled with {:?}", config.bom_action);
    }

    let mut pos = bom.skip();
    while pos < input.len() {
        if let Some(max) = config.max_output_size {
            if out.len() >= max {
                debug!("scan: output limit of {max} bytes reached at offset {pos}");
                break;
            }
        }
        let info = decode(input, pos, config.mode, config.validate);
        let raw = &input[pos..info.end_pos()];
        if !apply(&mut out, handler(&info, raw), raw) {
            trace!("scan: handler stopped at offset {pos}");
            break;
        }
        pos = info.end_pos();
    }
    BString::from(out)
}

#[cfg(test)]
mod tests;
