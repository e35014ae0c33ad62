// Copyright 2015 The Servo Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! 3.3.2 Explicit Levels and Directions
//!
//! http://www.unicode.org/reports/tr9/#Explicit_Levels_and_Directions

use std::collections::BTreeMap;
use std::ops::Range;

use smallvec::SmallVec;

use crate::char_data::CharType;
use crate::level::Level;
use crate::prepare::TypeTracker;

/// Compute explicit embedding levels for one paragraph of text (X1-X8).
///
/// On return, every code point in `para` has been assigned a level, working
/// classes have been rewritten where a directional override was active, and
/// each valid isolate initiator/PDI pair has been recorded in
/// `isolation_pairs` under both of its indices.
pub fn compute(
    para: Range<usize>,
    para_level: Level,
    tracker: &mut TypeTracker,
    levels: &mut [Level],
    isolation_pairs: &mut BTreeMap<usize, usize>,
) {
    // http://www.unicode.org/reports/tr9/#X1
    let mut stack = DirectionalStatusStack::new();
    stack.push(para_level, OverrideStatus::Neutral, None);

    let mut overflow_isolate_count = 0u32;
    let mut overflow_embedding_count = 0u32;
    let mut valid_isolate_count = 0u32;

    for i in para.clone() {
        let t = tracker.get(i);

        // Rules X2-X5
        if t.intersects(CharType::RLE | CharType::LRE | CharType::RLO | CharType::LRO) {
            // An embedding or override character itself takes the level in
            // force before it (rule 5.2).
            levels[i] = stack.last().level;

            let is_rtl = t.intersects(CharType::RLE | CharType::RLO);
            let new_level = if is_rtl {
                stack.last().level.next_rtl_level()
            } else {
                stack.last().level.next_ltr_level()
            };
            if new_level.is_valid() && overflow_isolate_count == 0 && overflow_embedding_count == 0
            {
                let status = if t == CharType::RLO {
                    OverrideStatus::Rtl
                } else if t == CharType::LRO {
                    OverrideStatus::Ltr
                } else {
                    OverrideStatus::Neutral
                };
                stack.push(new_level, status, None);
            } else if overflow_isolate_count == 0 {
                overflow_embedding_count += 1;
            }
        }
        // Rules X5a-X5c
        else if t.intersects(CharType::ISOLATE_INITIATORS) {
            levels[i] = stack.last().level;
            apply_override(tracker, i, stack.last().status);

            // X5c: an FSI acts as an RLI or LRI depending on the first
            // strong type before its matching PDI.
            let is_rtl = if t == CharType::FSI {
                first_strong_is_rtl(tracker.types(), i + 1, para.end)
            } else {
                t == CharType::RLI
            };
            let new_level = if is_rtl {
                stack.last().level.next_rtl_level()
            } else {
                stack.last().level.next_ltr_level()
            };
            if new_level.is_valid() && overflow_isolate_count == 0 && overflow_embedding_count == 0
            {
                stack.push(new_level, OverrideStatus::Neutral, Some(i));
                valid_isolate_count += 1;
            } else {
                overflow_isolate_count += 1;
            }
        }
        // http://www.unicode.org/reports/tr9/#X6a
        else if t == CharType::PDI {
            if overflow_isolate_count > 0 {
                overflow_isolate_count -= 1;
            } else if valid_isolate_count > 0 {
                overflow_embedding_count = 0;
                // Pop everything up to and including the last isolate frame,
                // and record the pair it opened.
                while let Some(frame) = stack.pop() {
                    if let Some(initiator) = frame.isolate {
                        isolation_pairs.insert(initiator, i);
                        isolation_pairs.insert(i, initiator);
                        break;
                    }
                }
                valid_isolate_count -= 1;
            }
            levels[i] = stack.last().level;
            apply_override(tracker, i, stack.last().status);
        }
        // http://www.unicode.org/reports/tr9/#X7
        else if t == CharType::PDF {
            if overflow_isolate_count == 0 {
                if overflow_embedding_count > 0 {
                    overflow_embedding_count -= 1;
                } else if stack.last().isolate.is_none() && stack.len() > 1 {
                    stack.pop();
                }
            }
            levels[i] = stack.last().level;
        }
        // http://www.unicode.org/reports/tr9/#X8
        else if t == CharType::B {
            levels[i] = para_level;
        }
        // http://www.unicode.org/reports/tr9/#X6
        else {
            levels[i] = stack.last().level;
            if t != CharType::BN {
                apply_override(tracker, i, stack.last().status);
            }
        }
    }
}

/// Whether the first strong type scanning forward from `start` is RTL,
/// skipping isolated content and stopping at an unmatched PDI (P2-P3 as
/// applied by X5c; a missing strong type defaults to LTR).
fn first_strong_is_rtl(types: &[CharType], start: usize, end: usize) -> bool {
    let mut depth = 0u32;
    for i in start..end {
        let t = types[i];
        if t.intersects(CharType::ISOLATE_INITIATORS) {
            depth += 1;
        } else if t == CharType::PDI {
            if depth == 0 {
                break;
            }
            depth -= 1;
        } else if depth == 0 && t.intersects(CharType::STRONG) {
            return t != CharType::L;
        }
    }
    false
}

fn apply_override(tracker: &mut TypeTracker, i: usize, status: OverrideStatus) {
    match status {
        OverrideStatus::Rtl => tracker.set(i, CharType::R),
        OverrideStatus::Ltr => tracker.set(i, CharType::L),
        OverrideStatus::Neutral => {}
    }
}

/// Entries in the directional status stack.
struct Status {
    level: Level,
    status: OverrideStatus,
    /// Index of the isolate initiator that opened this frame, if any.
    isolate: Option<usize>,
}

#[derive(Copy, Clone, PartialEq)]
enum OverrideStatus {
    Neutral,
    Rtl,
    Ltr,
}

/// The status stack is bounded by the maximum depth plus the base frame, so
/// it normally lives inline.
struct DirectionalStatusStack {
    vec: SmallVec<[Status; 8]>,
}

impl DirectionalStatusStack {
    fn new() -> Self {
        DirectionalStatusStack {
            vec: SmallVec::new(),
        }
    }

    fn push(&mut self, level: Level, status: OverrideStatus, isolate: Option<usize>) {
        self.vec.push(Status {
            level,
            status,
            isolate,
        });
    }

    fn pop(&mut self) -> Option<Status> {
        // The base frame is never popped.
        if self.vec.len() > 1 {
            self.vec.pop()
        } else {
            None
        }
    }

    fn last(&self) -> &Status {
        self.vec.last().unwrap()
    }

    fn len(&self) -> usize {
        self.vec.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn run(classes: &[CharType], para_level: Level) -> (Vec<Level>, TypeTracker, BTreeMap<usize, usize>) {
        let mut tracker = TypeTracker::new(classes);
        let mut levels = vec![para_level; classes.len()];
        let mut pairs = BTreeMap::new();
        compute(0..classes.len(), para_level, &mut tracker, &mut levels, &mut pairs);
        (levels, tracker, pairs)
    }

    fn nums(levels: &[Level]) -> Vec<u8> {
        levels.iter().map(|l| l.number()).collect()
    }

    #[test]
    fn test_rle_raises_level() {
        let classes = [CharType::L, CharType::RLE, CharType::L, CharType::PDF, CharType::L];
        let (levels, _, _) = run(&classes, Level::ltr());
        assert_eq!(nums(&levels), [0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_rlo_overrides_types() {
        let classes = [CharType::L, CharType::RLO, CharType::L, CharType::PDF, CharType::L];
        let (levels, tracker, _) = run(&classes, Level::ltr());
        assert_eq!(nums(&levels), [0, 0, 1, 0, 0]);
        assert_eq!(tracker.get(2), CharType::R);
        assert_eq!(tracker.get(4), CharType::L);
    }

    #[test]
    fn test_isolate_pairs_recorded() {
        let classes = [CharType::L, CharType::RLI, CharType::R, CharType::PDI, CharType::L];
        let (levels, _, pairs) = run(&classes, Level::ltr());
        assert_eq!(nums(&levels), [0, 0, 1, 0, 0]);
        assert_eq!(pairs.get(&1), Some(&3));
        assert_eq!(pairs.get(&3), Some(&1));
    }

    #[test]
    fn test_fsi_detects_rtl() {
        let classes = [CharType::FSI, CharType::R, CharType::PDI];
        let (levels, _, _) = run(&classes, Level::ltr());
        assert_eq!(nums(&levels), [0, 1, 0]);
    }

    #[test]
    fn test_fsi_defaults_to_ltr() {
        let classes = [CharType::FSI, CharType::EN, CharType::PDI];
        let (levels, _, _) = run(&classes, Level::ltr());
        assert_eq!(nums(&levels), [0, 2, 0]);
    }

    #[test]
    fn test_depth_overflow_is_silent() {
        // 64 nested RLEs step the level by two each time and overflow past
        // the maximum depth; the overflowing ones and the content keep the
        // deepest valid level.
        let mut classes = vec![CharType::RLE; 64];
        classes.push(CharType::L);
        let (levels, _, _) = run(&classes, Level::ltr());
        assert_eq!(levels[64].number(), 125);
    }

    #[test]
    fn test_unmatched_pdi_ignored() {
        let classes = [CharType::L, CharType::PDI, CharType::L];
        let (levels, _, pairs) = run(&classes, Level::ltr());
        assert_eq!(nums(&levels), [0, 0, 0]);
        assert!(pairs.is_empty());
    }
}
