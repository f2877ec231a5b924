#![expect(missing_docs)]

use rstest::rstest;
use u8scan::{char_info_at, predicates};

#[rstest]
#[case::grinning('😀')]
#[case::earth('🌍')]
#[case::rocket('🚀')]
#[case::sun('☀')]
#[case::star('⭐')]
#[case::heart('❤')]
#[case::flag_letter('🇺')]
#[case::face_with_hand('🫢')]
fn recognised_emoji(#[case] c: char) {
    let text = c.to_string();
    assert!(predicates::is_emoji(&char_info_at(&text, 0)), "{c:?}");
}

#[rstest]
#[case::letter('A')]
#[case::digit('7')]
#[case::cjk('世')]
#[case::accented('é')]
#[case::private_use('\u{E000}')]
#[case::arrow_gap('\u{219A}')]
fn not_emoji(#[case] c: char) {
    let text = c.to_string();
    assert!(!predicates::is_emoji(&char_info_at(&text, 0)), "{c:?}");
}

#[test]
fn emoji_table_is_sorted_and_disjoint() {
    let ranges = predicates::EMOJI_RANGES;
    assert!(ranges.iter().all(|&(lo, hi)| lo <= hi));
    assert!(ranges.windows(2).all(|w| w[0].1 < w[1].0));
}

#[test]
fn emoji_ranges_are_inclusive() {
    for &(lo, hi) in predicates::EMOJI_RANGES {
        assert!(predicates::is_emoji_codepoint(lo));
        assert!(predicates::is_emoji_codepoint(hi));
    }
    assert!(!predicates::is_emoji_codepoint(0x1F700));
}
