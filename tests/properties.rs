// Copyright 2015 The Servo Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Properties that must hold for every input, checked over generated
//! mixtures of strong, weak, neutral, and explicit formatting characters.

use proptest::prelude::*;

use bidi_resolver::{BidiInfo, Direction, Level, MAX_DEPTH};

/// Characters drawn from every class the resolver treats differently,
/// including unpaired isolates/embeddings and a non-BMP character.
const SAMPLE_CHARS: &[char] = &[
    'a', 'Z', '\u{05D0}', '\u{0627}', '0', '\u{0660}', '+', '#', ',', '.', '!', '(', ')', '[',
    ']', ' ', '\u{0009}', '\u{2029}', '\u{000A}', '\u{0300}', '\u{00AD}', '\u{202A}', '\u{202B}',
    '\u{202C}', '\u{202D}', '\u{202E}', '\u{2066}', '\u{2067}', '\u{2068}', '\u{2069}',
    '\u{1F600}', '\u{10482}',
];

fn text_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(SAMPLE_CHARS.to_vec()), 0..24)
        .prop_map(|chars| chars.into_iter().collect())
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Ltr),
        Just(Direction::Rtl),
        Just(Direction::Auto),
    ]
}

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

proptest! {
    #[test]
    fn levels_cover_every_code_unit(text in text_strategy(), direction in direction_strategy()) {
        let info = BidiInfo::new(&text, direction);
        prop_assert_eq!(info.levels.len(), utf16_len(&text));
        for level in &info.levels {
            prop_assert!(level.number() <= MAX_DEPTH + 1);
        }
    }

    #[test]
    fn surrogate_pairs_share_a_level(text in text_strategy(), direction in direction_strategy()) {
        let info = BidiInfo::new(&text, direction);
        let mut cu = 0;
        for c in text.chars() {
            if c.len_utf16() == 2 {
                prop_assert_eq!(info.levels[cu], info.levels[cu + 1]);
            }
            cu += c.len_utf16();
        }
    }

    #[test]
    fn paragraphs_partition_the_text(text in text_strategy(), direction in direction_strategy()) {
        let info = BidiInfo::new(&text, direction);
        let mut next = 0;
        for para in &info.paragraphs {
            prop_assert_eq!(para.range.start, next);
            prop_assert!(para.range.end > para.range.start);
            next = para.range.end;
        }
        prop_assert_eq!(next, utf16_len(&text));
    }

    #[test]
    fn reordering_is_a_permutation(text in text_strategy(), direction in direction_strategy()) {
        let info = BidiInfo::new(&text, direction);
        let mut indices = info.reordered_indices(None);
        indices.sort_unstable();
        let identity: Vec<usize> = (0..info.levels.len()).collect();
        prop_assert_eq!(indices, identity);
    }

    #[test]
    fn reordered_string_preserves_length(text in text_strategy(), direction in direction_strategy()) {
        let info = BidiInfo::new(&text, direction);
        let visual = info.reordered_string(None);
        prop_assert_eq!(utf16_len(&visual), utf16_len(&text));
    }

    #[test]
    fn paragraphs_resolve_independently(
        first in text_strategy(),
        second in text_strategy(),
        direction in direction_strategy(),
    ) {
        let joined = format!("{}\u{2029}{}", first, second);
        let with_sep = format!("{}\u{2029}", first);

        let joined_info = BidiInfo::new(&joined, direction);
        let head = BidiInfo::new(&with_sep, direction);
        let tail = BidiInfo::new(&second, direction);

        let mut expected = head.levels.clone();
        expected.extend_from_slice(&tail.levels);
        prop_assert_eq!(&joined_info.levels, &expected);
    }

    #[test]
    fn forced_direction_sets_paragraph_levels(text in text_strategy()) {
        let ltr = BidiInfo::new(&text, Direction::Ltr);
        for para in &ltr.paragraphs {
            prop_assert_eq!(para.level, Level::ltr());
        }
        let rtl = BidiInfo::new(&text, Direction::Rtl);
        for para in &rtl.paragraphs {
            prop_assert_eq!(para.level, Level::rtl());
        }
    }

    #[test]
    fn mirrored_positions_are_rtl(text in text_strategy(), direction in direction_strategy()) {
        let info = BidiInfo::new(&text, direction);
        for (&cu, _) in &info.mirrored_characters(None) {
            prop_assert!(info.levels[cu].is_rtl());
        }
    }

    #[test]
    fn plain_ltr_reorders_to_itself(text in "[a-z 0-9]{0,20}") {
        let info = BidiInfo::new(&text, Direction::Ltr);
        let visual = info.reordered_string(None);
        prop_assert_eq!(&visual, &text);
        // Resolving the visual output again gives the same all-zero levels.
        let again = BidiInfo::new(&visual, Direction::Ltr);
        prop_assert_eq!(again.levels, info.levels);
    }
}
