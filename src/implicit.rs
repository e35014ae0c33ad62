// Copyright 2015 The Servo Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! 3.3.4 - 3.3.6. Resolve weak, neutral, and implicit types and levels.

use std::ops::Range;

use smallvec::SmallVec;

use crate::char_data::{
    canonical_bracket, closing_to_opening_bracket, opening_to_closing_bracket, CharType,
};
use crate::level::Level;
use crate::prepare::{IsolatingRunSequence, TypeTracker};

/// EN and AN count as R for rules N0-N2.
const R_FOR_N: CharType = CharType::R.union(CharType::EN).union(CharType::AN);
const STRONG_FOR_N: CharType = R_FOR_N.union(CharType::L);

/// Maximum number of unresolved opening brackets tracked by N0 (BD16).
const MAX_PAIRING_DEPTH: usize = 63;

/// 3.3.4 Resolving Weak Types
///
/// Applies W1-W7 to one isolating run sequence, as separate passes so that
/// every rule sees the classes left behind by the previous one. Passes whose
/// classes are no longer present are skipped.
///
/// http://www.unicode.org/reports/tr9/#Resolving_Weak_Types
pub fn resolve_weak(sequence: &IsolatingRunSequence, tracker: &mut TypeTracker) {
    let indices = &sequence.indices;

    // W1: NSM takes the class of the closest preceding non-BN-like
    // character, or ON after an isolate initiator or PDI.
    if tracker.contains_any(CharType::NSM) {
        let mut prev = sequence.sos;
        for &i in indices {
            let t = tracker.get(i);
            if t == CharType::NSM {
                let new = if prev.intersects(CharType::ISOLATE_INITIATORS | CharType::PDI) {
                    CharType::ON
                } else {
                    prev
                };
                tracker.set(i, new);
                prev = new;
            } else if !t.intersects(CharType::BN_LIKE) {
                prev = t;
            }
        }
    }

    // W2: EN changes to AN while the last strong class was AL.
    if tracker.contains_any(CharType::EN) {
        let mut last_strong = sequence.sos;
        for &i in indices {
            let t = tracker.get(i);
            if t == CharType::EN && last_strong == CharType::AL {
                tracker.set(i, CharType::AN);
            } else if t.intersects(CharType::STRONG) {
                last_strong = t;
            }
        }
    }

    // W3: AL becomes R.
    if tracker.contains_any(CharType::AL) {
        for &i in indices {
            if tracker.get(i) == CharType::AL {
                tracker.set(i, CharType::R);
            }
        }
    }

    // W4: a single ES between two ENs, or a CS between two numbers of the
    // same kind, joins them. Neighbours are found across BN-like characters.
    if tracker.contains_any(CharType::ES | CharType::CS) {
        let mut prev = sequence.sos;
        for si in 0..indices.len() {
            let t = tracker.get(indices[si]);
            if t.intersects(CharType::ES | CharType::CS) {
                let next = indices[si + 1..]
                    .iter()
                    .map(|&j| tracker.get(j))
                    .find(|n| !n.intersects(CharType::BN_LIKE))
                    .unwrap_or(sequence.eos);
                let joined = prev == next
                    && if t == CharType::ES {
                        prev == CharType::EN
                    } else {
                        prev.intersects(CharType::EN | CharType::AN)
                    };
                if joined {
                    tracker.set(indices[si], prev);
                }
            }
            let t = tracker.get(indices[si]);
            if !t.intersects(CharType::BN_LIKE) {
                prev = t;
            }
        }
    }

    // W5: a run of ETs adjacent to an EN becomes EN. The run may span
    // BN-like characters.
    if tracker.contains_any(CharType::ET) {
        let mut si = 0;
        while si < indices.len() {
            if tracker.get(indices[si]) != CharType::ET {
                si += 1;
                continue;
            }
            let mut end = si + 1;
            while end < indices.len()
                && tracker
                    .get(indices[end])
                    .intersects(CharType::ET | CharType::BN_LIKE)
            {
                end += 1;
            }
            let prev = indices[..si]
                .iter()
                .rev()
                .map(|&j| tracker.get(j))
                .find(|t| !t.intersects(CharType::BN_LIKE))
                .unwrap_or(sequence.sos);
            let next = indices[end..]
                .iter()
                .map(|&j| tracker.get(j))
                .find(|t| !t.intersects(CharType::BN_LIKE))
                .unwrap_or(sequence.eos);
            if prev == CharType::EN || next == CharType::EN {
                for &j in &indices[si..end] {
                    if tracker.get(j) == CharType::ET {
                        tracker.set(j, CharType::EN);
                    }
                }
            }
            si = end;
        }
    }

    // W6: any remaining separator or terminator becomes ON, and adjacent
    // BN-like characters go with it (rule 5.2).
    if tracker.contains_any(CharType::ES | CharType::ET | CharType::CS) {
        for si in 0..indices.len() {
            if tracker
                .get(indices[si])
                .intersects(CharType::ES | CharType::ET | CharType::CS)
            {
                tracker.set(indices[si], CharType::ON);
                for &j in indices[..si].iter().rev() {
                    if !tracker.get(j).intersects(CharType::BN_LIKE) {
                        break;
                    }
                    tracker.set(j, CharType::ON);
                }
                for &j in &indices[si + 1..] {
                    if !tracker.get(j).intersects(CharType::BN_LIKE) {
                        break;
                    }
                    tracker.set(j, CharType::ON);
                }
            }
        }
    }

    // W7: EN changes to L while the last strong class was L.
    if tracker.contains_any(CharType::EN) {
        let mut last_strong = sequence.sos;
        for &i in indices {
            let t = tracker.get(i);
            if t == CharType::EN && last_strong == CharType::L {
                tracker.set(i, CharType::L);
            } else if t.intersects(CharType::L | CharType::R) {
                last_strong = t;
            }
        }
    }
}

/// 3.3.5 N0: resolve paired brackets.
///
/// Bracket pairs are identified with a bounded stack of opening brackets
/// (BD16), matching by character or canonical equivalent, and are then given
/// the direction established by their contents or their preceding context.
///
/// `original` carries the classes from before any rewriting; the trailing
/// NSM adjustment must look at what the characters were prior to W1.
///
/// http://www.unicode.org/reports/tr9/#N0
pub fn resolve_bracket_pairs(
    sequence: &IsolatingRunSequence,
    chars: &[char],
    original: &[CharType],
    tracker: &mut TypeTracker,
) {
    let indices = &sequence.indices;
    let e = sequence.level.bidi_class();
    let not_e = if e == CharType::L {
        CharType::R
    } else {
        CharType::L
    };

    // Identify the pairs (BD16).
    let mut stack: SmallVec<[(char, usize); 8]> = SmallVec::new();
    let mut pairs: Vec<(usize, usize)> = Vec::new();
    for (si, &i) in indices.iter().enumerate() {
        if tracker.get(i) != CharType::ON {
            continue;
        }
        let c = chars[i];
        if opening_to_closing_bracket(c).is_some() {
            if stack.len() == MAX_PAIRING_DEPTH {
                // No room left: BD16 stops processing for the rest of the
                // sequence.
                break;
            }
            stack.push((c, si));
        } else if let Some(opener) = closing_to_opening_bracket(c) {
            for k in (0..stack.len()).rev() {
                let (held, held_si) = stack[k];
                let matched = held == opener
                    || canonical_bracket(c).and_then(closing_to_opening_bracket) == Some(held)
                    || canonical_bracket(held).and_then(opening_to_closing_bracket) == Some(c);
                if matched {
                    pairs.push((held_si, si));
                    stack.truncate(k);
                    break;
                }
            }
        }
    }
    pairs.sort_unstable_by_key(|&(open, _)| open);

    for &(open, close) in &pairs {
        // Strong classes between the brackets, with numbers counting as R.
        let mut found_e = false;
        let mut found_not_e = false;
        for &i in &indices[open + 1..close] {
            let t = tracker.get(i);
            if t.intersects(STRONG_FOR_N) {
                let dir = if t.intersects(R_FOR_N) {
                    CharType::R
                } else {
                    CharType::L
                };
                if dir == e {
                    found_e = true;
                    break;
                }
                found_not_e = true;
            }
        }

        let new_class = if found_e {
            e
        } else if found_not_e {
            // Strong classes only on the opposite side: the pair takes the
            // direction of the preceding context if that also opposes the
            // embedding direction.
            let mut prev = sequence.sos;
            for &i in indices[..open].iter().rev() {
                let t = tracker.get(i);
                if t.intersects(STRONG_FOR_N) {
                    prev = if t.intersects(R_FOR_N) {
                        CharType::R
                    } else {
                        CharType::L
                    };
                    break;
                }
            }
            if prev == not_e {
                not_e
            } else {
                e
            }
        } else {
            // No strong classes inside: leave the pair for N1/N2.
            continue;
        };

        tracker.set(indices[open], new_class);
        tracker.set(indices[close], new_class);
        // Characters that were NSM before W1 and directly follow either
        // bracket change along with it.
        for &i in &indices[open + 1..] {
            if original[i] != CharType::NSM {
                break;
            }
            tracker.set(i, new_class);
        }
        for &i in &indices[close + 1..] {
            if original[i] != CharType::NSM {
                break;
            }
            tracker.set(i, new_class);
        }
    }
}

/// 3.3.5 N1-N2: resolve remaining neutral and isolate formatting types.
///
/// Each maximal run of NI characters, extended over adjacent BN-like
/// characters, takes the surrounding direction when both sides agree and the
/// embedding direction otherwise.
///
/// http://www.unicode.org/reports/tr9/#Resolving_Neutral_Types
pub fn resolve_neutral(sequence: &IsolatingRunSequence, tracker: &mut TypeTracker) {
    let indices = &sequence.indices;
    let e = sequence.level.bidi_class();

    let mut si = 0;
    while si < indices.len() {
        if !tracker.get(indices[si]).intersects(CharType::NEUTRAL_ISOLATES) {
            si += 1;
            continue;
        }

        let mut run_start = si;
        let mut run_end = si;

        let mut prev = sequence.sos;
        for sj in (0..si).rev() {
            let t = tracker.get(indices[sj]);
            if t.intersects(CharType::BN_LIKE) {
                // Rule 5.2: BN-like characters next to a neutral resolve
                // with it.
                run_start = sj;
            } else {
                prev = if t.intersects(R_FOR_N) {
                    CharType::R
                } else {
                    CharType::L
                };
                break;
            }
        }

        let mut next = sequence.eos;
        let mut sj = si + 1;
        while sj < indices.len() {
            let t = tracker.get(indices[sj]);
            if t.intersects(CharType::NEUTRAL_ISOLATES | CharType::BN_LIKE) {
                run_end = sj;
                sj += 1;
            } else {
                next = if t.intersects(R_FOR_N) {
                    CharType::R
                } else {
                    CharType::L
                };
                break;
            }
        }

        let new_class = if prev == next { prev } else { e };
        for &i in &indices[run_start..=run_end] {
            tracker.set(i, new_class);
        }
        si = sj;
    }
}

/// 3.3.6 I1-I2 plus the level rules of 5.2 and L1.
///
/// Levels are raised per the implicit rules; BN-like characters then take
/// the level of the preceding code point (the paragraph level at the head);
/// finally, trailing runs before a separator or the paragraph end reset to
/// the paragraph level. Per 5.2, the L1 walk treats BN-like characters as
/// whitespace.
///
/// http://www.unicode.org/reports/tr9/#Resolving_Implicit_Levels
/// http://www.unicode.org/reports/tr9/#L1
pub fn resolve_levels(
    para: Range<usize>,
    para_level: Level,
    original: &[CharType],
    working: &[CharType],
    levels: &mut [Level],
) {
    const RESET: CharType = CharType::TRAILING.union(CharType::BN_LIKE);

    for i in para.clone() {
        let t = working[i];
        if t.intersects(CharType::BN_LIKE) {
            levels[i] = if i == para.start {
                para_level
            } else {
                levels[i - 1]
            };
        } else if levels[i].is_rtl() {
            if t.intersects(CharType::L | CharType::EN | CharType::AN) {
                levels[i].raise(1);
            }
        } else if t == CharType::R {
            levels[i].raise(1);
        } else if t.intersects(CharType::EN | CharType::AN) {
            levels[i].raise(2);
        }

        // L1: reset the separator itself and any trailing run before it.
        if i + 1 == para.end || original[i].intersects(CharType::B | CharType::S) {
            for j in (para.start..=i).rev() {
                if !original[j].intersects(RESET) {
                    break;
                }
                levels[j] = para_level;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sequence(classes: &[CharType], sos: CharType, eos: CharType, level: u8) -> IsolatingRunSequence {
        IsolatingRunSequence {
            indices: (0..classes.len()).collect(),
            sos,
            eos,
            level: Level::from(level),
        }
    }

    fn weak(classes: &[CharType], sos: CharType, eos: CharType) -> Vec<CharType> {
        let seq = sequence(classes, sos, eos, 0);
        let mut tracker = TypeTracker::new(classes);
        resolve_weak(&seq, &mut tracker);
        tracker.types().to_vec()
    }

    const L: CharType = CharType::L;
    const R: CharType = CharType::R;
    const AL: CharType = CharType::AL;
    const EN: CharType = CharType::EN;
    const AN: CharType = CharType::AN;
    const ES: CharType = CharType::ES;
    const ET: CharType = CharType::ET;
    const CS: CharType = CharType::CS;
    const ON: CharType = CharType::ON;
    const BN: CharType = CharType::BN;
    const NSM: CharType = CharType::NSM;

    #[test]
    fn test_w1_nsm() {
        assert_eq!(weak(&[R, NSM, NSM], L, L), [R, R, R]);
        assert_eq!(weak(&[NSM], L, L), [L]);
        assert_eq!(weak(&[CharType::RLI, NSM, CharType::PDI], L, L)[1], ON);
    }

    #[test]
    fn test_w2_en_after_al() {
        assert_eq!(weak(&[AL, EN], L, L), [R, AN]);
        assert_eq!(weak(&[AL, L, EN], L, L), [R, L, L]);
        assert_eq!(weak(&[R, EN], L, L), [R, EN]);
    }

    #[test]
    fn test_w4_separators() {
        assert_eq!(weak(&[EN, ES, EN], L, L), [L, L, L]);
        assert_eq!(weak(&[R, EN, CS, EN], L, L), [R, EN, EN, EN]);
        assert_eq!(weak(&[R, AN, CS, AN], L, L), [R, AN, AN, AN]);
        assert_eq!(weak(&[R, AN, ES, AN], L, L), [R, AN, ON, AN]);
    }

    #[test]
    fn test_w5_terminators() {
        assert_eq!(weak(&[R, ET, EN], L, L), [R, EN, EN]);
        assert_eq!(weak(&[R, EN, ET, ET], L, L), [R, EN, EN, EN]);
        assert_eq!(weak(&[R, ET, R], L, L), [R, ON, R]);
    }

    #[test]
    fn test_w6_bn_like_becomes_on() {
        assert_eq!(weak(&[R, BN, ET, R], L, L), [R, ON, ON, R]);
    }

    #[test]
    fn test_w7_en_after_l() {
        assert_eq!(weak(&[L, EN], L, L), [L, L]);
        assert_eq!(weak(&[R, EN], R, R), [R, EN]);
        // sos L counts as a preceding strong L.
        assert_eq!(weak(&[EN], L, L), [L]);
    }

    fn neutral(
        classes: &[CharType],
        sos: CharType,
        eos: CharType,
        level: u8,
    ) -> Vec<CharType> {
        let seq = sequence(classes, sos, eos, level);
        let mut tracker = TypeTracker::new(classes);
        resolve_neutral(&seq, &mut tracker);
        tracker.types().to_vec()
    }

    #[test]
    fn test_n1_agreeing_context() {
        assert_eq!(neutral(&[R, ON, R], R, R, 1), [R, R, R]);
        assert_eq!(neutral(&[L, CharType::WS, L], L, L, 0), [L, L, L]);
        // Numbers count as R on both sides.
        assert_eq!(neutral(&[EN, ON, R], R, R, 1), [EN, R, R]);
    }

    #[test]
    fn test_n2_conflicting_context() {
        assert_eq!(neutral(&[L, ON, R], L, R, 0), [L, L, R]);
        assert_eq!(neutral(&[L, ON, R], L, R, 1), [L, R, R]);
    }

    #[test]
    fn test_n1_extends_over_bn() {
        assert_eq!(neutral(&[R, BN, ON, R], R, R, 1), [R, R, R, R]);
    }

    fn brackets_case(
        chars: &str,
        classes: &[CharType],
        sos: CharType,
        level: u8,
    ) -> Vec<CharType> {
        let chars: Vec<char> = chars.chars().collect();
        let seq = sequence(classes, sos, sos, level);
        let mut tracker = TypeTracker::new(classes);
        resolve_bracket_pairs(&seq, &chars, classes, &mut tracker);
        tracker.types().to_vec()
    }

    #[test]
    fn test_n0_embedding_direction_inside() {
        // "(א)" inside RTL: the pair takes the embedding direction.
        let got = brackets_case("(\u{05D0})", &[ON, R, ON], R, 1);
        assert_eq!(got, [R, R, R]);
    }

    #[test]
    fn test_n0_opposite_inside_ltr_context() {
        // "(a)" in an RTL embedding with LTR before it: preceding context
        // decides.
        let got = brackets_case("(a)", &[ON, L, ON], L, 1);
        assert_eq!(got, [L, L, L]);
        let got = brackets_case("(a)", &[ON, L, ON], R, 1);
        assert_eq!(got, [R, L, R]);
    }

    #[test]
    fn test_n0_no_strong_content() {
        let got = brackets_case("()", &[ON, ON], R, 1);
        assert_eq!(got, [ON, ON]);
    }

    #[test]
    fn test_n0_canonical_equivalents_match() {
        // U+2329 pairs with U+3009 through the canonical map.
        let got = brackets_case("\u{2329}\u{05D0}\u{3009}", &[ON, R, ON], R, 1);
        assert_eq!(got, [R, R, R]);
    }

    #[test]
    fn test_n0_mismatched_brackets_skip() {
        let got = brackets_case("(\u{05D0}]", &[ON, R, ON], R, 1);
        assert_eq!(got, [ON, R, ON]);
    }

    #[test]
    fn test_resolve_levels_implicit() {
        // I1: R and numbers on an even level.
        let working = [L, R, EN, AN];
        let original = working;
        let mut levels: Vec<Level> = vec![Level::ltr(); 4];
        resolve_levels(0..4, Level::ltr(), &original, &working, &mut levels);
        let nums: Vec<u8> = levels.iter().map(|l| l.number()).collect();
        // The trailing AN is followed by the paragraph end, but AN is not a
        // trailing type, so L1 leaves it alone.
        assert_eq!(nums, [0, 1, 2, 2]);
    }

    #[test]
    fn test_resolve_levels_trailing_reset() {
        let original = [R, CharType::WS];
        let working = [R, R]; // WS resolved to R by N1
        let mut levels: Vec<Level> = vec![Level::rtl(); 2];
        resolve_levels(0..2, Level::ltr(), &original, &working, &mut levels);
        let nums: Vec<u8> = levels.iter().map(|l| l.number()).collect();
        assert_eq!(nums, [1, 0]);
    }

    #[test]
    fn test_resolve_levels_bn_takes_preceding() {
        let original = [R, BN, R];
        let working = original;
        let mut levels: Vec<Level> = vec![Level::rtl(); 3];
        resolve_levels(0..3, Level::rtl(), &original, &working, &mut levels);
        let nums: Vec<u8> = levels.iter().map(|l| l.number()).collect();
        assert_eq!(nums, [1, 1, 1]);
    }
}
