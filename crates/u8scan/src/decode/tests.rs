use super::*;

fn utf8(input: &[u8], pos: usize) -> CharInfo {
    decode(input, pos, Mode::Utf8, true)
}

#[test]
fn ascii_byte_is_single_valid_char() {
    let info = utf8(b"A", 0);
    assert_eq!(info.start_pos, 0);
    assert_eq!(info.byte_count, 1);
    assert_eq!(info.codepoint, u32::from(b'A'));
    assert!(info.is_ascii);
    assert!(info.is_valid_utf8);
    assert!(!info.is_bom);
}

#[test]
fn multi_byte_lengths_and_scalars() {
    // é (2), 世 (3), 🌍 (4)
    let input = "é世🌍".as_bytes();

    let e = utf8(input, 0);
    assert_eq!((e.byte_count, e.codepoint), (2, 0xE9));
    assert!(!e.is_ascii);
    assert!(e.is_valid_utf8);

    let shi = utf8(input, 2);
    assert_eq!((shi.start_pos, shi.byte_count, shi.codepoint), (2, 3, 0x4E16));

    let earth = utf8(input, 5);
    assert_eq!((earth.start_pos, earth.byte_count, earth.codepoint), (5, 4, 0x1F30D));
    assert_eq!(earth.end_pos(), input.len());
}

#[test]
fn out_of_bounds_is_invalid_sentinel() {
    let info = utf8(b"ab", 2);
    assert_eq!(info.start_pos, 2);
    assert_eq!(info.byte_count, 1);
    assert!(!info.is_valid_utf8);

    let far = utf8(b"", 10);
    assert_eq!(far.byte_count, 1);
    assert!(!far.is_valid_utf8);
}

#[test]
fn impossible_lead_bytes_advance_one_byte() {
    for lead in [0x80u8, 0xBF, 0xF8, 0xFE, 0xFF] {
        let input = [lead, b'a', b'b', b'c'];
        let info = utf8(&input, 0);
        assert_eq!(info.byte_count, 1, "lead {lead:#X}");
        assert_eq!(info.codepoint, u32::from(lead));
        assert!(!info.is_valid_utf8);
        assert!(!info.is_ascii);
    }
}

#[test]
fn truncated_sequence_is_invalid_in_both_modes() {
    // First two bytes of 世 only.
    let input = [0xE4u8, 0xB8];
    for validate in [true, false] {
        let info = decode(&input, 0, Mode::Utf8, validate);
        assert_eq!(info.byte_count, 1);
        assert_eq!(info.codepoint, 0xE4);
        assert!(!info.is_valid_utf8);
    }
}

#[test]
fn bad_continuation_desynchronizes_by_one_byte() {
    // 4-byte lead followed by an ASCII byte in the second slot.
    let input = [0xF0u8, 0x9F, b'A', 0x8D];
    let first = utf8(&input, 0);
    assert_eq!(first.byte_count, 1);
    assert_eq!(first.codepoint, 0xF0);
    assert!(!first.is_valid_utf8);

    // Each remaining byte is evaluated on its own.
    let second = utf8(&input, 1);
    assert!(!second.is_valid_utf8);
    assert_eq!(second.byte_count, 1);
    let third = utf8(&input, 2);
    assert!(third.is_valid_utf8);
    assert_eq!(third.codepoint, u32::from(b'A'));
    let fourth = utf8(&input, 3);
    assert!(!fourth.is_valid_utf8);
}

#[test]
fn unvalidated_decode_trusts_continuation_bytes() {
    let input = [0xC3u8, b'A'];
    let info = decode(&input, 0, Mode::Utf8, false);
    assert!(info.is_valid_utf8);
    assert_eq!(info.byte_count, 2);
    assert_eq!(info.codepoint, (0x03 << 6) | (u32::from(b'A') & 0x3F));
}

#[test]
fn validation_is_structural_only() {
    // Overlong '/' (C0 AF), a surrogate half (ED A0 80) and a scalar above
    // U+10FFFF (F4 90 80 80) all pass.
    let overlong = utf8(&[0xC0, 0xAF], 0);
    assert!(overlong.is_valid_utf8);
    assert_eq!(overlong.codepoint, 0x2F);

    let surrogate = utf8(&[0xED, 0xA0, 0x80], 0);
    assert!(surrogate.is_valid_utf8);
    assert_eq!(surrogate.codepoint, 0xD800);
    assert_eq!(surrogate.to_char(), None);

    let too_big = utf8(&[0xF4, 0x90, 0x80, 0x80], 0);
    assert!(too_big.is_valid_utf8);
    assert_eq!(too_big.codepoint, 0x11_0000);
}

#[test]
fn ascii_mode_never_groups_bytes() {
    let input = "世".as_bytes();
    for (pos, &byte) in input.iter().enumerate() {
        let info = decode(input, pos, Mode::Ascii, true);
        assert_eq!(info.byte_count, 1);
        assert_eq!(info.codepoint, u32::from(byte));
        assert!(info.is_ascii);
        assert!(info.is_valid_utf8);
    }
}

#[test]
fn char_info_at_accepts_str() {
    let info = char_info_at("a世", 1);
    assert_eq!(info.codepoint, 0x4E16);
    assert_eq!(info.to_char(), Some('世'));
    assert_eq!(info.as_bytes("a世".as_bytes()), "世".as_bytes());
}
