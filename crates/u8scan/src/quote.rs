use alloc::vec::Vec;

use bstr::BString;

use crate::range::CharRange;

/// Wraps `input` in `start_delim`/`end_delim`, escaping the delimiters and the
/// escape byte itself with `escape`.
///
/// Only single-byte characters are compared against the markers. Multi-byte
/// characters and invalid bytes are copied as they are. A leading BOM is
/// dropped.
///
/// ```
/// let q = u8scan::quoted_str("A\"B世界", b'"', b'"', b'\\');
/// assert_eq!(q, "\"A\\\"B世界\"");
/// ```
#[must_use]
pub fn quoted_str<B: AsRef<[u8]> + ?Sized>(
    input: &B,
    start_delim: u8,
    end_delim: u8,
    escape: u8,
) -> BString {
    let input = input.as_ref();
    let mut out = Vec::with_capacity(input.len() + 10);
    out.push(start_delim);
    for info in &CharRange::new(input) {
        let raw = info.as_bytes(input);
        if info.is_ascii {
            let byte = info.ascii_byte();
            if byte == start_delim || byte == end_delim || byte == escape {
                out.push(escape);
            }
        }
        out.extend_from_slice(raw);
    }
    out.push(end_delim);
    BString::from(out)
}

/// [`quoted_str`] with double quotes and a backslash escape.
#[must_use]
pub fn quoted<B: AsRef<[u8]> + ?Sized>(input: &B) -> BString {
    quoted_str(input, b'"', b'"', b'\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_delimiters_and_escape() {
        assert_eq!(quoted(r#"a"b\c"#), r#""a\"b\\c""#);
        assert_eq!(quoted(""), "\"\"");
    }

    #[test]
    fn custom_delimiters() {
        assert_eq!(quoted_str("x[y]z", b'[', b']', b'^'), "[x^[y^]z]");
    }

    #[test]
    fn non_ascii_and_invalid_bytes_pass_through() {
        assert_eq!(quoted(b"\xFF\"\xE4\xB8\x96"), &b"\"\xFF\\\"\xE4\xB8\x96\""[..]);
    }
}
