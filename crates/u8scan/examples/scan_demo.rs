//! Sanitizes a text file (or a built-in sample) for a terminal that only
//! renders ASCII.
//!
//! Run with `cargo run --example scan_demo -- [path]`.
//!
//! - A leading BOM is reported and dropped.
//! - ASCII passes through, with control characters other than `\t`/`\n`
//!   removed.
//! - Emoji become `[emoji]`, other non-ASCII characters become `U+XXXX`.
//! - Malformed bytes become `\xNN`, one per byte.
//!
//! A per-class summary is printed to stderr.

use std::{env, fs, process::ExitCode};

use u8scan::{BomAction, ScanAction, ScanConfig, detect_bom, length, predicates, scan};

const SAMPLE: &[u8] = b"\xEF\xBB\xBFH\xC3\xA9llo, \xE4\xB8\x96\xE7\x95\x8C! \xF0\x9F\x8C\x8D\n\
broken: \xFF\xC3(\n\tend\x07\n";

#[derive(Default)]
struct Tally {
    ascii: usize,
    dropped: usize,
    emoji: usize,
    other: usize,
    invalid: usize,
}

fn main() -> ExitCode {
    let input = match env::args_os().nth(1) {
        Some(path) => match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                eprintln!("cannot read {}: {err}", path.to_string_lossy());
                return ExitCode::FAILURE;
            }
        },
        None => SAMPLE.to_vec(),
    };

    let bom = detect_bom(&input);
    let config = ScanConfig {
        bom_action: BomAction::Ignore,
        ..ScanConfig::default()
    };

    let mut tally = Tally::default();
    let out = scan(
        &input,
        |info, _| {
            if !info.is_valid_utf8 {
                tally.invalid += 1;
                ScanAction::replace(format!("\\x{:02X}", info.codepoint))
            } else if info.is_ascii {
                let keep = info.codepoint >= 0x20
                    || (predicates::is_whitespace_ascii(info) && info.codepoint != 0x0D);
                if keep {
                    tally.ascii += 1;
                    ScanAction::Copy
                } else {
                    tally.dropped += 1;
                    ScanAction::Skip
                }
            } else if predicates::is_emoji(info) {
                tally.emoji += 1;
                ScanAction::replace("[emoji]")
            } else {
                tally.other += 1;
                ScanAction::replace(format!("U+{:04X}", info.codepoint))
            }
        },
        &config,
    );

    print!("{out}");
    eprintln!(
        "bom: {}, characters: {}, ascii: {}, dropped: {}, emoji: {}, other: {}, invalid: {}",
        if bom.found { "dropped" } else { "none" },
        length(&input),
        tally.ascii,
        tally.dropped,
        tally.emoji,
        tally.other,
        tally.invalid,
    );
    ExitCode::SUCCESS
}
