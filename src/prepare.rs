// Copyright 2015 The Servo Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! 3.3.3 Preparations for Implicit Processing
//!
//! http://www.unicode.org/reports/tr9/#Preparations_for_Implicit_Processing

use std::collections::BTreeMap;
use std::ops::Range;

use log::trace;

use crate::char_data::CharType;
use crate::level::Level;

/// A maximal run of code points with the same embedding level (BD7),
/// represented as a range of code-point indices.
pub type LevelRun = Range<usize>;

/// Working copy of the per-code-point character classes.
///
/// Every rewrite goes through [`TypeTracker::set`] so that an exact histogram
/// of the classes still present is maintained; passes whose classes are
/// absent can then be skipped outright, which is the common case for plain
/// LTR text.
pub struct TypeTracker {
    types: Vec<CharType>,
    counts: [u32; CLASS_COUNT],
}

const CLASS_COUNT: usize = 23;

impl TypeTracker {
    pub fn new(original: &[CharType]) -> TypeTracker {
        let mut counts = [0u32; CLASS_COUNT];
        for t in original {
            counts[class_index(*t)] += 1;
        }
        TypeTracker {
            types: original.to_vec(),
            counts,
        }
    }

    #[inline]
    pub fn get(&self, i: usize) -> CharType {
        self.types[i]
    }

    /// Rewrite the class of the code point at `i`, keeping the histogram exact.
    pub fn set(&mut self, i: usize, new: CharType) {
        let old = self.types[i];
        if old == new {
            return;
        }
        self.counts[class_index(old)] -= 1;
        self.counts[class_index(new)] += 1;
        self.types[i] = new;
    }

    /// Whether any code point currently carries a class from `set`.
    pub fn contains_any(&self, set: CharType) -> bool {
        let mut bits = set.bits();
        while bits != 0 {
            let idx = bits.trailing_zeros() as usize;
            if self.counts[idx] > 0 {
                return true;
            }
            bits &= bits - 1;
        }
        false
    }

    #[inline]
    pub fn types(&self) -> &[CharType] {
        &self.types
    }
}

#[inline]
fn class_index(t: CharType) -> usize {
    debug_assert_eq!(t.bits().count_ones(), 1);
    t.bits().trailing_zeros() as usize
}

/// An isolating run sequence (BD13): the code points of one or more level
/// runs joined across isolate initiator/PDI pairs, flattened into a single
/// ascending index list, together with the boundary classes derived in X10.
pub struct IsolatingRunSequence {
    /// Code-point indices of the sequence, in logical order. Interior
    /// positions with BN-like classes are carried along; rules that must not
    /// see them skip them explicitly.
    pub indices: Vec<usize>,
    /// Start-of-sequence class, L or R.
    pub sos: CharType,
    /// End-of-sequence class, L or R.
    pub eos: CharType,
    /// The embedding level shared by every run in the sequence.
    pub level: Level,
}

/// Compute the isolating run sequences of one paragraph (X10).
///
/// An isolating run sequence starts at any level run not opened by a PDI with
/// a known matching initiator, and is extended by following the isolation
/// pair map from each run's trailing isolate initiator to the run opened by
/// its matching PDI.
pub fn isolating_run_sequences(
    para: Range<usize>,
    para_level: Level,
    original: &[CharType],
    levels: &[Level],
    isolation_pairs: &BTreeMap<usize, usize>,
) -> Vec<IsolatingRunSequence> {
    let runs = level_runs(para.clone(), original, levels);
    let mut sequences = Vec::with_capacity(runs.len());

    for (ri, run) in runs.iter().enumerate() {
        // A run opened by the PDI of a known pair continues the sequence of
        // the run holding its initiator; it never starts one.
        if original[run.start] == CharType::PDI && isolation_pairs.contains_key(&run.start) {
            continue;
        }

        let mut indices = Vec::new();
        let mut cur = ri;
        loop {
            let run = &runs[cur];
            indices.extend(run.clone());
            let last = run.end - 1;
            if !original[last].intersects(CharType::ISOLATE_INITIATORS) {
                break;
            }
            let pdi = match isolation_pairs.get(&last) {
                Some(&pdi) => pdi,
                None => break,
            };
            match runs.binary_search_by_key(&pdi, |r| r.start) {
                Ok(next) => cur = next,
                Err(_) => break,
            }
        }

        let level = levels[indices[0]];
        let sos = boundary_class(level, pred_level(&indices, para.clone(), para_level, original, levels));
        let eos = boundary_class(level, succ_level(&indices, para.clone(), para_level, original, levels));
        sequences.push(IsolatingRunSequence {
            indices,
            sos,
            eos,
            level,
        });
    }

    trace!(
        "paragraph {:?}: {} level runs, {} isolating run sequences",
        para,
        runs.len(),
        sequences.len()
    );
    sequences
}

/// Level of the closest code point before the sequence, skipping BN-like
/// characters; the paragraph level past the paragraph edge.
fn pred_level(
    indices: &[usize],
    para: Range<usize>,
    para_level: Level,
    original: &[CharType],
    levels: &[Level],
) -> Level {
    let first = indices[0];
    for i in (para.start..first).rev() {
        if !original[i].intersects(CharType::BN_LIKE) {
            return levels[i];
        }
    }
    para_level
}

/// Level of the closest code point after the sequence, skipping BN-like
/// characters. A sequence ending in an isolate initiator here is one whose
/// initiator has no matching PDI, so the paragraph level applies (X10).
fn succ_level(
    indices: &[usize],
    para: Range<usize>,
    para_level: Level,
    original: &[CharType],
    levels: &[Level],
) -> Level {
    let last = indices[indices.len() - 1];
    if original[last].intersects(CharType::ISOLATE_INITIATORS) {
        return para_level;
    }
    for i in last + 1..para.end {
        if !original[i].intersects(CharType::BN_LIKE) {
            return levels[i];
        }
    }
    para_level
}

/// The side with the higher level decides between R and L.
#[inline]
fn boundary_class(inner: Level, outer: Level) -> CharType {
    inner.max(outer).bidi_class()
}

/// Find the level runs in a paragraph (BD7).
///
/// BN-like code points never open or close a run: a run begins and ends on a
/// non-BN-like code point, although it may contain BN-like positions in its
/// interior.
fn level_runs(para: Range<usize>, original: &[CharType], levels: &[Level]) -> Vec<LevelRun> {
    let mut runs = Vec::new();
    let mut current: Option<(usize, usize, Level)> = None;

    for i in para {
        if original[i].intersects(CharType::BN_LIKE) {
            continue;
        }
        match current {
            Some((start, _, level)) if levels[i] == level => {
                current = Some((start, i, level));
            }
            _ => {
                if let Some((start, end, _)) = current {
                    runs.push(start..end + 1);
                }
                current = Some((i, i, levels[i]));
            }
        }
    }
    if let Some((start, end, _)) = current {
        runs.push(start..end + 1);
    }
    runs
}

#[cfg(test)]
mod test {
    use super::*;

    const L: CharType = CharType::L;
    const R: CharType = CharType::R;
    const AL: CharType = CharType::AL;
    const RLI: CharType = CharType::RLI;
    const LRI: CharType = CharType::LRI;
    const PDI: CharType = CharType::PDI;

    fn lvls(nums: &[u8]) -> Vec<Level> {
        nums.iter().map(|&n| Level::from(n)).collect()
    }

    #[test]
    fn test_level_runs() {
        let classes = [L; 8];
        let levels = lvls(&[0, 0, 0, 1, 1, 2, 0, 0]);
        assert_eq!(
            level_runs(0..8, &classes, &levels),
            vec![0..3, 3..5, 5..6, 6..8]
        );
    }

    #[test]
    fn test_level_runs_skip_bn_like() {
        // The RLE neither splits the run nor extends its edges.
        let classes = [L, CharType::RLE, L, L, CharType::PDF];
        let levels = lvls(&[0, 0, 0, 0, 0]);
        assert_eq!(level_runs(0..5, &classes, &levels), vec![0..4]);
    }

    #[test]
    fn test_isolating_run_sequences() {
        // Example 3 from http://www.unicode.org/reports/tr9/#BD13:
        //              0  1    2   3    4  5  6  7    8   9    10
        let classes = [L, RLI, AL, LRI, L, R, L, PDI, AL, PDI, L];
        let levels = lvls(&[0, 0, 1, 1, 2, 3, 2, 1, 1, 0, 0]);
        let pairs: BTreeMap<usize, usize> =
            [(1, 9), (9, 1), (3, 7), (7, 3)].into_iter().collect();

        let sequences = isolating_run_sequences(0..11, Level::ltr(), &classes, &levels, &pairs);
        let indices: Vec<Vec<usize>> = sequences.iter().map(|s| s.indices.clone()).collect();
        assert_eq!(
            indices,
            vec![
                vec![0, 1, 9, 10],
                vec![2, 3, 7, 8],
                vec![4],
                vec![5],
                vec![6],
            ]
        );
    }

    #[test]
    fn test_sos_eos() {
        // L text around one RTL word: sos and eos come from the higher of
        // the levels on each side of the sequence.
        let classes = [L, R, L];
        let levels = lvls(&[0, 1, 0]);
        let pairs = BTreeMap::new();
        let sequences = isolating_run_sequences(0..3, Level::ltr(), &classes, &levels, &pairs);
        let middle = sequences.iter().find(|s| s.indices == [1]).unwrap();
        assert_eq!((middle.sos, middle.eos), (R, R));
        let head = sequences.iter().find(|s| s.indices == [0]).unwrap();
        assert_eq!((head.sos, head.eos), (L, R));
    }

    #[test]
    fn test_unmatched_initiator_eos() {
        // An isolate initiator with no matching PDI compares against the
        // paragraph level on its right.
        let classes = [L, RLI, R];
        let levels = lvls(&[0, 0, 1]);
        let pairs = BTreeMap::new();
        let sequences = isolating_run_sequences(0..3, Level::ltr(), &classes, &levels, &pairs);
        let head = sequences.iter().find(|s| s.indices == [0, 1]).unwrap();
        assert_eq!(head.eos, L);
    }

    #[test]
    fn test_tracker_histogram() {
        let mut tracker = TypeTracker::new(&[L, AL, CharType::EN, CharType::WS]);
        assert!(tracker.contains_any(AL));
        assert!(!tracker.contains_any(R | CharType::NSM));
        tracker.set(1, R);
        assert!(!tracker.contains_any(AL));
        assert!(tracker.contains_any(R));
        assert_eq!(tracker.get(1), R);
    }
}
