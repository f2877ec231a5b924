use alloc::vec::Vec;

/// The UTF-8 encoding of U+FEFF.
pub const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// What the configurable scan engine does with a leading BOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BomAction {
    /// Drop the BOM.
    #[default]
    Ignore,
    /// Copy the BOM to the output.
    Copy,
    /// Replace the BOM with whatever the configured handler returns.
    Custom,
}

/// Result of BOM detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BomInfo {
    /// The buffer starts with [`BOM`].
    pub found: bool,
    /// BOM length in bytes: 3 when found, 0 otherwise.
    pub size: usize,
    /// Disposition applied by the scan engine that produced this value.
    pub action_taken: BomAction,
}

impl BomInfo {
    /// Byte offset at which character processing starts.
    #[inline]
    #[must_use]
    pub const fn skip(&self) -> usize {
        self.size
    }
}

/// Detects a UTF-8 BOM at the start of `input`. O(1).
#[must_use]
pub fn detect_bom(input: &[u8]) -> BomInfo {
    if input.starts_with(&BOM) {
        BomInfo {
            found: true,
            size: BOM.len(),
            action_taken: BomAction::Ignore,
        }
    } else {
        BomInfo::default()
    }
}

/// Returns `true` if `input` starts with a UTF-8 BOM.
#[must_use]
pub fn has_bom<B: AsRef<[u8]> + ?Sized>(input: &B) -> bool {
    detect_bom(input.as_ref()).found
}

/// The BOM as a string slice, for building test and fixture input.
#[must_use]
pub const fn bom_str() -> &'static str {
    "\u{FEFF}"
}

/// `input` with a BOM prepended.
#[must_use]
pub fn with_bom<B: AsRef<[u8]> + ?Sized>(input: &B) -> Vec<u8> {
    let input = input.as_ref();
    let mut out = Vec::with_capacity(BOM.len() + input.len());
    out.extend_from_slice(&BOM);
    out.extend_from_slice(input);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_only_leading_bom() {
        let found = detect_bom(b"\xEF\xBB\xBFabc");
        assert!(found.found);
        assert_eq!(found.size, 3);
        assert_eq!(found.skip(), 3);

        assert!(!detect_bom(b"a\xEF\xBB\xBF").found);
        assert!(!detect_bom(b"\xEF\xBB").found);
        assert_eq!(detect_bom(b"").size, 0);
    }

    #[test]
    fn bom_str_is_the_bom() {
        assert_eq!(bom_str().as_bytes(), &BOM);
        assert!(has_bom(bom_str()));
        assert_eq!(with_bom("hi"), b"\xEF\xBB\xBFhi");
    }
}
