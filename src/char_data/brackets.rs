// Copyright 2015 The Servo Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Lookup of the `Bidi_Paired_Bracket` and `Bidi_Mirroring_Glyph` properties.
//!
//! http://www.unicode.org/reports/tr9/#Paired_Brackets

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// For an opening paired bracket, the closing bracket it pairs with (BD14, BD15).
pub fn opening_to_closing_bracket(c: char) -> Option<char> {
    TABLES.opening.get(&c).copied()
}

/// For a closing paired bracket, the opening bracket it pairs with.
pub fn closing_to_opening_bracket(c: char) -> Option<char> {
    TABLES.closing.get(&c).copied()
}

/// The canonically equivalent bracket of `c`, if it has one.
///
/// BD16 matches a bracket pair either by the characters themselves or by their
/// canonical equivalents; only the angle brackets U+2329/U+232A and their CJK
/// counterparts U+3008/U+3009 are equivalent in this sense.
pub fn canonical_bracket(c: char) -> Option<char> {
    match c {
        '\u{2329}' => Some('\u{3008}'),
        '\u{232A}' => Some('\u{3009}'),
        '\u{3008}' => Some('\u{2329}'),
        '\u{3009}' => Some('\u{232A}'),
        _ => None,
    }
}

/// The character to display in place of `c` inside a right-to-left run (L4),
/// or `None` if `c` has no mirrored form.
pub fn mirrored_character(c: char) -> Option<char> {
    TABLES.mirrors.get(&c).copied()
}

struct BracketTables {
    opening: HashMap<char, char>,
    closing: HashMap<char, char>,
    mirrors: HashMap<char, char>,
}

/// The compact pair lists below are parsed into hash maps on first use.
static TABLES: Lazy<BracketTables> = Lazy::new(|| {
    let mut opening = HashMap::with_capacity(BRACKET_PAIRS.len());
    let mut closing = HashMap::with_capacity(BRACKET_PAIRS.len());
    let mut mirrors = HashMap::with_capacity(2 * (BRACKET_PAIRS.len() + MIRROR_PAIRS.len()));
    for &(open, close) in BRACKET_PAIRS {
        opening.insert(open, close);
        closing.insert(close, open);
        mirrors.insert(open, close);
        mirrors.insert(close, open);
    }
    for &(a, b) in MIRROR_PAIRS {
        mirrors.insert(a, b);
        mirrors.insert(b, a);
    }
    BracketTables {
        opening,
        closing,
        mirrors,
    }
});

/// Opening/closing pairs from BidiBrackets.txt, sorted by the opening character.
#[rustfmt::skip]
static BRACKET_PAIRS: &[(char, char)] = &[
    ('\u{0028}', '\u{0029}'), // PARENTHESIS
    ('\u{005B}', '\u{005D}'), // SQUARE BRACKET
    ('\u{007B}', '\u{007D}'), // CURLY BRACKET
    ('\u{0F3A}', '\u{0F3B}'), // TIBETAN MARK GUG RTAGS
    ('\u{0F3C}', '\u{0F3D}'), // TIBETAN MARK ANG KHANG
    ('\u{169B}', '\u{169C}'), // OGHAM FEATHER MARK
    ('\u{2045}', '\u{2046}'), // SQUARE BRACKET WITH QUILL
    ('\u{207D}', '\u{207E}'), // SUPERSCRIPT PARENTHESIS
    ('\u{208D}', '\u{208E}'), // SUBSCRIPT PARENTHESIS
    ('\u{2308}', '\u{2309}'), // CEILING
    ('\u{230A}', '\u{230B}'), // FLOOR
    ('\u{2329}', '\u{232A}'), // POINTING ANGLE BRACKET
    ('\u{2768}', '\u{2769}'), // MEDIUM PARENTHESIS ORNAMENT
    ('\u{276A}', '\u{276B}'), // MEDIUM FLATTENED PARENTHESIS ORNAMENT
    ('\u{276C}', '\u{276D}'), // MEDIUM POINTING ANGLE BRACKET ORNAMENT
    ('\u{276E}', '\u{276F}'), // HEAVY POINTING ANGLE QUOTATION MARK ORNAMENT
    ('\u{2770}', '\u{2771}'), // HEAVY POINTING ANGLE BRACKET ORNAMENT
    ('\u{2772}', '\u{2773}'), // LIGHT TORTOISE SHELL BRACKET ORNAMENT
    ('\u{2774}', '\u{2775}'), // MEDIUM CURLY BRACKET ORNAMENT
    ('\u{27C5}', '\u{27C6}'), // S-SHAPED BAG DELIMITER
    ('\u{27E6}', '\u{27E7}'), // MATHEMATICAL WHITE SQUARE BRACKET
    ('\u{27E8}', '\u{27E9}'), // MATHEMATICAL ANGLE BRACKET
    ('\u{27EA}', '\u{27EB}'), // MATHEMATICAL DOUBLE ANGLE BRACKET
    ('\u{27EC}', '\u{27ED}'), // MATHEMATICAL WHITE TORTOISE SHELL BRACKET
    ('\u{27EE}', '\u{27EF}'), // MATHEMATICAL FLATTENED PARENTHESIS
    ('\u{2983}', '\u{2984}'), // WHITE CURLY BRACKET
    ('\u{2985}', '\u{2986}'), // WHITE PARENTHESIS
    ('\u{2987}', '\u{2988}'), // Z NOTATION IMAGE BRACKET
    ('\u{2989}', '\u{298A}'), // Z NOTATION BINDING BRACKET
    ('\u{298B}', '\u{298C}'), // SQUARE BRACKET WITH UNDERBAR
    ('\u{298D}', '\u{2990}'), // SQUARE BRACKET WITH TICK IN TOP CORNER
    ('\u{298F}', '\u{298E}'), // SQUARE BRACKET WITH TICK IN BOTTOM CORNER
    ('\u{2991}', '\u{2992}'), // ANGLE BRACKET WITH DOT
    ('\u{2993}', '\u{2994}'), // ARC LESS-THAN BRACKET
    ('\u{2995}', '\u{2996}'), // DOUBLE ARC GREATER-THAN BRACKET
    ('\u{2997}', '\u{2998}'), // BLACK TORTOISE SHELL BRACKET
    ('\u{29D8}', '\u{29D9}'), // WIGGLY FENCE
    ('\u{29DA}', '\u{29DB}'), // DOUBLE WIGGLY FENCE
    ('\u{29FC}', '\u{29FD}'), // POINTING CURVED ANGLE BRACKET
    ('\u{2E22}', '\u{2E23}'), // TOP HALF BRACKET
    ('\u{2E24}', '\u{2E25}'), // BOTTOM HALF BRACKET
    ('\u{2E26}', '\u{2E27}'), // SIDEWAYS U BRACKET
    ('\u{2E28}', '\u{2E29}'), // DOUBLE PARENTHESIS
    ('\u{2E55}', '\u{2E56}'), // SQUARE BRACKET WITH STROKE
    ('\u{2E57}', '\u{2E58}'), // SQUARE BRACKET WITH DOUBLE STROKE
    ('\u{2E59}', '\u{2E5A}'), // TOP HALF PARENTHESIS
    ('\u{2E5B}', '\u{2E5C}'), // BOTTOM HALF PARENTHESIS
    ('\u{3008}', '\u{3009}'), // ANGLE BRACKET
    ('\u{300A}', '\u{300B}'), // DOUBLE ANGLE BRACKET
    ('\u{300C}', '\u{300D}'), // CORNER BRACKET
    ('\u{300E}', '\u{300F}'), // WHITE CORNER BRACKET
    ('\u{3010}', '\u{3011}'), // BLACK LENTICULAR BRACKET
    ('\u{3014}', '\u{3015}'), // TORTOISE SHELL BRACKET
    ('\u{3016}', '\u{3017}'), // WHITE LENTICULAR BRACKET
    ('\u{3018}', '\u{3019}'), // WHITE TORTOISE SHELL BRACKET
    ('\u{301A}', '\u{301B}'), // WHITE SQUARE BRACKET
    ('\u{FE59}', '\u{FE5A}'), // SMALL PARENTHESIS
    ('\u{FE5B}', '\u{FE5C}'), // SMALL CURLY BRACKET
    ('\u{FE5D}', '\u{FE5E}'), // SMALL TORTOISE SHELL BRACKET
    ('\u{FF08}', '\u{FF09}'), // FULLWIDTH PARENTHESIS
    ('\u{FF3B}', '\u{FF3D}'), // FULLWIDTH SQUARE BRACKET
    ('\u{FF5B}', '\u{FF5D}'), // FULLWIDTH CURLY BRACKET
    ('\u{FF5F}', '\u{FF60}'), // FULLWIDTH WHITE PARENTHESIS
    ('\u{FF62}', '\u{FF63}'), // HALFWIDTH CORNER BRACKET
];

/// Mirrored pairs from BidiMirroring.txt that are not paired brackets.
/// Each entry mirrors in both directions.
#[rustfmt::skip]
static MIRROR_PAIRS: &[(char, char)] = &[
    ('\u{003C}', '\u{003E}'), // LESS-THAN / GREATER-THAN SIGN
    ('\u{00AB}', '\u{00BB}'), // POINTING DOUBLE ANGLE QUOTATION MARK
    ('\u{2039}', '\u{203A}'), // SINGLE POINTING ANGLE QUOTATION MARK
    ('\u{2208}', '\u{220B}'), // ELEMENT OF / CONTAINS AS MEMBER
    ('\u{2209}', '\u{220C}'), // NOT AN ELEMENT OF / DOES NOT CONTAIN AS MEMBER
    ('\u{220A}', '\u{220D}'), // SMALL ELEMENT OF / SMALL CONTAINS AS MEMBER
    ('\u{2264}', '\u{2265}'), // LESS-THAN / GREATER-THAN OR EQUAL TO
    ('\u{2266}', '\u{2267}'), // LESS-THAN / GREATER-THAN OVER EQUAL TO
    ('\u{2268}', '\u{2269}'), // LESS-THAN / GREATER-THAN BUT NOT EQUAL TO
    ('\u{226A}', '\u{226B}'), // MUCH LESS-THAN / MUCH GREATER-THAN
    ('\u{226E}', '\u{226F}'), // NOT LESS-THAN / NOT GREATER-THAN
    ('\u{2270}', '\u{2271}'), // NEITHER LESS-THAN / GREATER-THAN NOR EQUAL TO
    ('\u{2272}', '\u{2273}'), // LESS-THAN / GREATER-THAN OR EQUIVALENT TO
    ('\u{2274}', '\u{2275}'), // NEITHER LESS-THAN / GREATER-THAN NOR EQUIVALENT TO
    ('\u{2276}', '\u{2277}'), // LESS-THAN OR GREATER-THAN
    ('\u{2278}', '\u{2279}'), // NEITHER LESS-THAN NOR GREATER-THAN
    ('\u{227A}', '\u{227B}'), // PRECEDES / SUCCEEDS
    ('\u{227C}', '\u{227D}'), // PRECEDES / SUCCEEDS OR EQUAL TO
    ('\u{227E}', '\u{227F}'), // PRECEDES / SUCCEEDS OR EQUIVALENT TO
    ('\u{2280}', '\u{2281}'), // DOES NOT PRECEDE / SUCCEED
    ('\u{2282}', '\u{2283}'), // SUBSET / SUPERSET OF
    ('\u{2284}', '\u{2285}'), // NOT A SUBSET / SUPERSET OF
    ('\u{2286}', '\u{2287}'), // SUBSET / SUPERSET OF OR EQUAL TO
    ('\u{2288}', '\u{2289}'), // NEITHER A SUBSET / SUPERSET OF NOR EQUAL TO
    ('\u{228A}', '\u{228B}'), // SUBSET / SUPERSET OF WITH NOT EQUAL TO
    ('\u{228F}', '\u{2290}'), // SQUARE IMAGE / ORIGINAL OF
    ('\u{2291}', '\u{2292}'), // SQUARE IMAGE / ORIGINAL OF OR EQUAL TO
    ('\u{22A2}', '\u{22A3}'), // RIGHT / LEFT TACK
    ('\u{22B0}', '\u{22B1}'), // PRECEDES / SUCCEEDS UNDER RELATION
    ('\u{22B2}', '\u{22B3}'), // NORMAL SUBGROUP OF / CONTAINS AS NORMAL SUBGROUP
    ('\u{22B4}', '\u{22B5}'), // NORMAL SUBGROUP OF / CONTAINS AS NORMAL SUBGROUP OR EQUAL TO
    ('\u{22B6}', '\u{22B7}'), // ORIGINAL / IMAGE OF
    ('\u{22C9}', '\u{22CA}'), // LEFT / RIGHT NORMAL FACTOR SEMIDIRECT PRODUCT
    ('\u{22CB}', '\u{22CC}'), // LEFT / RIGHT SEMIDIRECT PRODUCT
    ('\u{22D6}', '\u{22D7}'), // LESS-THAN / GREATER-THAN WITH DOT
    ('\u{22D8}', '\u{22D9}'), // VERY MUCH LESS-THAN / GREATER-THAN
    ('\u{22DA}', '\u{22DB}'), // LESS-THAN EQUAL TO OR GREATER-THAN (AND MIRROR)
    ('\u{22DC}', '\u{22DD}'), // EQUAL TO OR LESS-THAN / GREATER-THAN
    ('\u{22DE}', '\u{22DF}'), // EQUAL TO OR PRECEDES / SUCCEEDS
    ('\u{22E0}', '\u{22E1}'), // DOES NOT PRECEDE / SUCCEED OR EQUAL
    ('\u{22E2}', '\u{22E3}'), // NOT SQUARE IMAGE / ORIGINAL OF OR EQUAL TO
    ('\u{22E4}', '\u{22E5}'), // SQUARE IMAGE / ORIGINAL OF OR NOT EQUAL TO
    ('\u{22E6}', '\u{22E7}'), // LESS-THAN / GREATER-THAN BUT NOT EQUIVALENT TO
    ('\u{22E8}', '\u{22E9}'), // PRECEDES / SUCCEEDS BUT NOT EQUIVALENT TO
    ('\u{22EA}', '\u{22EB}'), // NOT NORMAL SUBGROUP OF / DOES NOT CONTAIN AS NORMAL SUBGROUP
    ('\u{22EC}', '\u{22ED}'), // NOT NORMAL SUBGROUP OF / CONTAIN OR EQUAL TO
    ('\u{22F0}', '\u{22F1}'), // UP / DOWN RIGHT DIAGONAL ELLIPSIS
    ('\u{FF1C}', '\u{FF1E}'), // FULLWIDTH LESS-THAN / GREATER-THAN SIGN
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bracket_lookup() {
        assert_eq!(opening_to_closing_bracket('('), Some(')'));
        assert_eq!(opening_to_closing_bracket('['), Some(']'));
        assert_eq!(opening_to_closing_bracket(')'), None);
        assert_eq!(opening_to_closing_bracket('a'), None);
        assert_eq!(closing_to_opening_bracket(')'), Some('('));
        assert_eq!(closing_to_opening_bracket('}'), Some('{'));
        assert_eq!(closing_to_opening_bracket('{'), None);
    }

    #[test]
    fn test_canonical_bracket() {
        assert_eq!(canonical_bracket('\u{2329}'), Some('\u{3008}'));
        assert_eq!(canonical_bracket('\u{3009}'), Some('\u{232A}'));
        assert_eq!(canonical_bracket('('), None);
    }

    #[test]
    fn test_mirrored_character() {
        assert_eq!(mirrored_character('('), Some(')'));
        assert_eq!(mirrored_character(')'), Some('('));
        assert_eq!(mirrored_character('<'), Some('>'));
        assert_eq!(mirrored_character('\u{00AB}'), Some('\u{00BB}'));
        assert_eq!(mirrored_character('a'), None);
    }
}
