#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use u8scan::{
    BOM, CharRange, DecodeOptions, Mode, ScanAction, ScanConfig, at_with, back_with, copy,
    decode, front_with, length_with, scan,
};

const HEADER: usize = 4; // encoded `Flags`

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Fragments that sit on the interesting edges of the decoder.
static FRAGMENTS: &[&[u8]] = &[
    &BOM,
    b"a",
    b"0",
    b" ",
    "é".as_bytes(),
    "世".as_bytes(),
    "🌍".as_bytes(),
    b"\x80",       // lone continuation
    b"\xBF",
    b"\xC3",       // truncated 2-byte lead
    b"\xE4\xB8",   // truncated 3-byte sequence
    b"\xF0\x9F\x8C", // truncated 4-byte sequence
    b"\xC0\xAF",   // overlong
    b"\xED\xA0\x80", // surrogate
    b"\xF4\x90\x80\x80", // above U+10FFFF
    b"\xF8",
    b"\xFE",
    b"\xFF",
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if max_size >= HEADER && (size < HEADER || seed.is_multiple_of(10)) {
        data[..HEADER].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));
        let mut len = HEADER;
        let target = with_rng(|rng| rng.random_range(HEADER..=max_size.max(HEADER)));
        while len < target {
            let fragment = with_rng(|rng| FRAGMENTS[rng.random_range(0..FRAGMENTS.len())]);
            if len + fragment.len() > max_size {
                break;
            }
            data[len..len + fragment.len()].copy_from_slice(fragment);
            len += fragment.len();
        }
        len
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug, Arbitrary)]
struct Flags {
    ascii: bool,
    validate: bool,
    limit: Option<u8>,
}

fn check(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }
    let Ok(flags) = Flags::arbitrary(&mut Unstructured::new(&data[..HEADER])) else {
        return;
    };
    let input = &data[HEADER..];
    let options = DecodeOptions {
        mode: if flags.ascii { Mode::Ascii } else { Mode::Utf8 },
        validate: flags.validate,
    };

    // Stepping by byte_count from 0 lands exactly on the end.
    let mut pos = 0;
    while pos < input.len() {
        let info = decode(input, pos, options.mode, options.validate);
        assert!((1..=4).contains(&info.byte_count));
        assert_eq!(info.start_pos, pos);
        pos += info.byte_count;
    }
    assert_eq!(pos, input.len());

    // Range, access and copy agree with each other.
    let range = CharRange::with_options(input, options, true);
    let infos: Vec<_> = range.iter().collect();
    assert_eq!(infos.len(), length_with(input, options));
    assert_eq!(front_with(input, options).ok(), infos.first().copied());
    assert_eq!(back_with(input, options).ok(), infos.last().copied());
    if let Some(mid) = infos.get(infos.len() / 2) {
        let got = at_with(input, infos.len() / 2, options).expect("index in range");
        assert_eq!(got.start_pos, mid.start_pos);
    }
    assert!(at_with(input, infos.len(), options).is_err());

    // A copying scan under the same options reproduces the range bytes.
    let config = ScanConfig {
        mode: options.mode,
        validate: options.validate,
        max_output_size: flags.limit.map(usize::from),
        ..ScanConfig::default()
    };
    let out = scan(input, |_, _| ScanAction::Copy, &config);
    let full = range.as_bytes();
    assert!(full.starts_with(out.as_slice()));
    if flags.limit.is_none() {
        assert_eq!(out.as_slice(), full);
    }
    assert_eq!(copy(input).as_slice(), full);
}

fuzz_target!(|data: &[u8]| check(data));
