use alloc::{string::String, vec, vec::Vec};

use super::*;
use crate::bom::with_bom;

fn copy_all(_: &CharInfo, _: &[u8]) -> ScanAction {
    ScanAction::Copy
}

#[test]
fn copy_through_reproduces_input() {
    let input = "Hello 世界! 🌍";
    assert_eq!(scan_utf8(input, copy_all), input);
    assert_eq!(scan(input, copy_all, &ScanConfig::default()), input);
}

#[test]
fn handler_sees_raw_bytes_of_each_character() {
    let mut seen: Vec<(usize, Vec<u8>)> = Vec::new();
    scan_utf8("a世", |info, raw| {
        seen.push((info.start_pos, raw.to_vec()));
        ScanAction::Skip
    });
    assert_eq!(seen, vec![(0, b"a".to_vec()), (1, "世".as_bytes().to_vec())]);
}

#[test]
fn utf8_engine_drops_bom() {
    let input = with_bom("Hi");
    let mut offsets = Vec::new();
    let out = scan_utf8(&input, |info, _| {
        offsets.push(info.start_pos);
        ScanAction::Copy
    });
    assert_eq!(out, "Hi");
    assert_eq!(offsets, vec![3, 4]);
}

#[test]
fn stop_returns_partial_output() {
    let out = scan_utf8("Hello World! More", |info, _| {
        if *info == '!' {
            ScanAction::Stop
        } else {
            ScanAction::Copy
        }
    });
    assert_eq!(out, "Hello World");
}

#[test]
fn replacement_length_is_independent_of_original() {
    let out = scan_utf8("a世b", |info, _| {
        if info.is_ascii {
            ScanAction::Copy
        } else {
            ScanAction::replace("<wide>")
        }
    });
    assert_eq!(out, "a<wide>b");

    let out = scan_utf8("a世b", |info, _| {
        if info.is_ascii {
            ScanAction::replace(String::new())
        } else {
            ScanAction::Copy
        }
    });
    assert_eq!(out, "世");
}

#[test]
fn one_replacement_per_invalid_byte() {
    let input = b"Hello\xFF\xFEWorld";
    let mut invalid = Vec::new();
    let out = scan_utf8(input, |info, _| {
        if info.is_valid_utf8 {
            ScanAction::Copy
        } else {
            invalid.push((info.start_pos, info.byte_count));
            ScanAction::replace("X")
        }
    });
    assert_eq!(out, "HelloXXWorld");
    assert_eq!(invalid, vec![(5, 1), (6, 1)]);
}

#[test]
fn ascii_engine_reports_every_byte() {
    let input = with_bom("é");
    let mut infos = Vec::new();
    let out = scan_ascii(&input, |info, _| {
        infos.push(*info);
        ScanAction::Copy
    });
    assert_eq!(out.as_slice(), input.as_slice());
    assert_eq!(infos.len(), 5);
    assert!(infos.iter().all(|c| c.is_ascii && c.is_valid_utf8 && c.byte_count == 1));
    assert_eq!(infos[0].codepoint, 0xEF);
}

#[test]
fn ascii_limited_truncates_exactly() {
    let out = scan_ascii_limited("abcdef", |_, _| ScanAction::replace("xy"), 5);
    assert_eq!(out, "xyxyx");
    let short = scan_ascii_limited("ab", copy_all, 10);
    assert_eq!(short, "ab");
}

#[test]
fn config_bom_ignore_copy_custom() {
    let input = with_bom("Hello");

    let ignored = scan(&input, copy_all, &ScanConfig::default());
    assert_eq!(ignored, "Hello");

    let copied = scan(&input, copy_all, &ScanConfig::default().copy_bom());
    assert_eq!(copied.as_slice(), input.as_slice());

    let custom = ScanConfig::default().custom_bom(|bom, raw| {
        assert!(bom.found);
        assert_eq!(bom.action_taken, BomAction::Custom);
        assert_eq!(raw, &BOM);
        b"[BOM]".to_vec()
    });
    assert_eq!(scan(&input, copy_all, &custom), "[BOM]Hello");

    let no_handler = ScanConfig {
        bom_action: BomAction::Custom,
        ..ScanConfig::default()
    };
    assert_eq!(scan(&input, copy_all, &no_handler), "Hello");
}

#[test]
fn config_bom_action_is_noop_without_bom() {
    let copied = scan("Hello", copy_all, &ScanConfig::default().copy_bom());
    assert_eq!(copied, "Hello");
}

#[test]
fn config_ascii_mode_still_skips_bom() {
    let input = with_bom("世");
    let config = ScanConfig {
        mode: Mode::Ascii,
        ..ScanConfig::default()
    };
    let mut count = 0;
    let out = scan(
        &input,
        |_, _| {
            count += 1;
            ScanAction::Copy
        },
        &config,
    );
    assert_eq!(count, 3);
    assert_eq!(out, "世");
}

#[test]
fn config_max_output_size_stops_before_next_character() {
    let config = ScanConfig {
        max_output_size: Some(4),
        ..ScanConfig::default()
    };
    assert_eq!(scan("Hello World", copy_all, &config), "Hell");

    // The last append may overshoot: "a" then "世" (3 bytes) reaches 4.
    let config = ScanConfig {
        max_output_size: Some(2),
        ..ScanConfig::default()
    };
    assert_eq!(scan("a世bc", copy_all, &config), "a世");
}

#[test]
fn config_unvalidated_trusts_continuations() {
    let input = b"\xC3Az";
    let validated = scan(
        input,
        |info, _| {
            if info.is_valid_utf8 {
                ScanAction::Copy
            } else {
                ScanAction::replace("?")
            }
        },
        &ScanConfig::default(),
    );
    assert_eq!(validated, "?Az");

    let options = DecodeOptions::unvalidated();
    let config = ScanConfig {
        mode: options.mode,
        validate: options.validate,
        ..ScanConfig::default()
    };
    assert_eq!(config.decode_options(), options);
    let mut lengths = Vec::new();
    scan(
        input,
        |info, _| {
            lengths.push(info.byte_count);
            ScanAction::Copy
        },
        &config,
    );
    assert_eq!(lengths, vec![2, 1]);
}

#[test]
fn config_debug_hides_handler() {
    let config = ScanConfig::default().custom_bom(|_, _| Vec::new());
    let rendered = alloc::format!("{config:?}");
    assert!(rendered.contains("bom_handler: Some(\"..\")"));
    assert_eq!(config.decode_options(), DecodeOptions::default());
}
