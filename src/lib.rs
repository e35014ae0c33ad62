// Copyright 2015 The Servo Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This crate implements the [Unicode Bidirectional Algorithm][tr9] for display of
//! mixed right-to-left and left-to-right text. It is written in safe Rust,
//! compatible with the current stable release.
//!
//! All offsets in the public API are UTF-16 code units, which is what text
//! layout and editing stacks generally index by; a character outside the basic
//! multilingual plane counts as two units. The resolution itself runs on code
//! points and the two views are reconciled internally.
//!
//! ## Example
//!
//! ```rust
//! use bidi_resolver::{BidiInfo, Direction};
//!
//! // This example text is defined using `concat!` because some browsers
//! // and text editors have trouble displaying bidi strings.
//! let text = concat!["א", "ב", "ג", " ", "a", "b", "c"];
//!
//! // Resolve embedding levels within the text. `Direction::Auto` detects
//! // the paragraph level from the first strong character.
//! let info = BidiInfo::new(text, Direction::Auto);
//!
//! // This paragraph has embedding level 1 because its first strong
//! // character is RTL.
//! assert_eq!(info.paragraphs.len(), 1);
//! assert_eq!(info.paragraphs[0].level.number(), 1);
//!
//! // Re-ordering is done after wrapping each paragraph into a sequence of
//! // lines. For this example, a single line spanning the entire text.
//! assert_eq!(info.reordered_string(None), concat!["a", "b", "c", " ", "ג", "ב", "א"]);
//! ```
//!
//! [tr9]: http://www.unicode.org/reports/tr9/

#![forbid(unsafe_code)]

mod char_data;
mod explicit;
mod implicit;
mod level;
mod prepare;
mod reorder;
mod utf16;

pub use crate::char_data::{
    bidi_char_type, bidi_char_type_name, canonical_bracket, closing_to_opening_bracket,
    mirrored_character, opening_to_closing_bracket, CharType, UNICODE_VERSION,
};
pub use crate::level::{Level, MAX_DEPTH};

use std::collections::BTreeMap;
use std::ops::Range;

use log::debug;

use crate::prepare::TypeTracker;
use crate::utf16::Utf16IndexMap;

/// Base direction of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Force level 0 for every paragraph.
    Ltr,
    /// Force level 1 for every paragraph.
    Rtl,
    /// Detect the level of each paragraph from its first strong character
    /// (rules P2-P3).
    Auto,
}

/// Info about a single paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParagraphInfo {
    /// The paragraph boundaries within the text, as code-unit offsets. The
    /// paragraph separator, if present, is kept with the paragraph it ends.
    pub range: Range<usize>,
    /// The paragraph embedding level.
    ///
    /// http://www.unicode.org/reports/tr9/#BD4
    pub level: Level,
}

/// Bidi information of a piece of text: the resolved embedding levels and
/// paragraph boundaries, from which the visual reordering and mirroring of
/// any line can be derived.
#[derive(Debug, PartialEq)]
pub struct BidiInfo<'text> {
    /// The text the levels were resolved for.
    pub text: &'text str,

    /// The embedding level of each code unit. A character two code units
    /// wide carries its level on both of them.
    pub levels: Vec<Level>,

    /// The boundaries and embedding level of each paragraph.
    pub paragraphs: Vec<ParagraphInfo>,

    /// Code-unit offsets of each isolate initiator with a matching PDI,
    /// keyed under both ends of the pair.
    pub isolation_pairs: BTreeMap<usize, usize>,
}

/// Classes whose presence forces the full resolution pipeline. A paragraph
/// of level 0 without any of them keeps level 0 everywhere.
const NEEDS_RESOLUTION: CharType = CharType::R
    .union(CharType::AL)
    .union(CharType::AN)
    .union(CharType::BN_LIKE)
    .union(CharType::ISOLATE_INITIATORS)
    .union(CharType::PDI);

impl<'text> BidiInfo<'text> {
    /// Resolve the embedding levels of `text` (rules P1-P3, X1-X10, W1-W7,
    /// N0-N2, I1-I2, and L1 at paragraph granularity).
    pub fn new(text: &'text str, direction: Direction) -> BidiInfo<'text> {
        let map = Utf16IndexMap::new(text);
        let chars: Vec<char> = text.chars().collect();
        let original: Vec<CharType> = chars.iter().map(|&c| bidi_char_type(c)).collect();

        let paragraphs = split_paragraphs(&original, direction);
        debug!(
            "resolving {} paragraph(s) over {} code points",
            paragraphs.len(),
            chars.len()
        );

        let mut levels = vec![Level::ltr(); chars.len()];
        let mut tracker = TypeTracker::new(&original);
        let mut pairs: BTreeMap<usize, usize> = BTreeMap::new();

        for &(ref para, para_level) in &paragraphs {
            for level in &mut levels[para.clone()] {
                *level = para_level;
            }
            if para_level.is_ltr() && !slice_needs_resolution(&original[para.clone()]) {
                continue;
            }

            explicit::compute(para.clone(), para_level, &mut tracker, &mut levels, &mut pairs);

            let sequences =
                prepare::isolating_run_sequences(para.clone(), para_level, &original, &levels, &pairs);
            for sequence in &sequences {
                implicit::resolve_weak(sequence, &mut tracker);
                if tracker.contains_any(CharType::ON) {
                    implicit::resolve_bracket_pairs(sequence, &chars, &original, &mut tracker);
                }
                implicit::resolve_neutral(sequence, &mut tracker);
            }

            implicit::resolve_levels(
                para.clone(),
                para_level,
                &original,
                tracker.types(),
                &mut levels,
            );
        }

        // Everything external speaks code units.
        let mut unit_levels = Vec::with_capacity(map.cu_len());
        for (cp, &level) in levels.iter().enumerate() {
            for _ in 0..map.cu_width(cp) {
                unit_levels.push(level);
            }
        }
        let unit_paragraphs = paragraphs
            .into_iter()
            .map(|(range, level)| ParagraphInfo {
                range: map.cu_range(range),
                level,
            })
            .collect();
        let unit_pairs = pairs
            .into_iter()
            .map(|(a, b)| (map.cu_index(a), map.cu_index(b)))
            .collect();

        BidiInfo {
            text,
            levels: unit_levels,
            paragraphs: unit_paragraphs,
            isolation_pairs: unit_pairs,
        }
    }
}

/// First-strong direction of a whole text (P2-P3), skipping isolated runs,
/// or `None` when no strong character decides it.
pub fn base_direction(text: &str) -> Option<Direction> {
    let types: Vec<CharType> = text.chars().map(bidi_char_type).collect();
    first_strong_is_rtl(&types, 0..types.len()).map(|rtl| {
        if rtl {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    })
}

/// Split the text into paragraphs and determine their levels (P1-P3). The
/// separator stays with the paragraph it terminates.
fn split_paragraphs(types: &[CharType], direction: Direction) -> Vec<(Range<usize>, Level)> {
    let mut paragraphs = Vec::new();
    let mut start = 0;
    for (i, &t) in types.iter().enumerate() {
        if t == CharType::B {
            paragraphs.push(start..i + 1);
            start = i + 1;
        }
    }
    if start < types.len() {
        paragraphs.push(start..types.len());
    }

    paragraphs
        .into_iter()
        .map(|range| {
            let level = match direction {
                Direction::Ltr => Level::ltr(),
                Direction::Rtl => Level::rtl(),
                // P3: no strong character means level 0.
                Direction::Auto => match first_strong_is_rtl(types, range.clone()) {
                    Some(true) => Level::rtl(),
                    _ => Level::ltr(),
                },
            };
            (range, level)
        })
        .collect()
}

/// Whether the first strong type in `range` is RTL, skipping characters
/// between an isolate initiator and its matching PDI (P2 with BD9).
fn first_strong_is_rtl(types: &[CharType], range: Range<usize>) -> Option<bool> {
    let mut i = range.start;
    while i < range.end {
        let t = types[i];
        if t.intersects(CharType::ISOLATE_INITIATORS) {
            match index_of_matching_pdi(types, i, range.end) {
                Some(pdi) => i = pdi,
                // An initiator with no matching PDI isolates the rest of
                // the paragraph.
                None => break,
            }
        } else if t.intersects(CharType::STRONG) {
            return Some(t != CharType::L);
        }
        i += 1;
    }
    None
}

/// Index of the PDI matching the isolate initiator at `initiator`, tracking
/// nested isolates (BD9), or `None` if it has no match before `end`.
fn index_of_matching_pdi(types: &[CharType], initiator: usize, end: usize) -> Option<usize> {
    let mut depth = 1u32;
    for i in initiator + 1..end {
        let t = types[i];
        if t.intersects(CharType::ISOLATE_INITIATORS) {
            depth += 1;
        } else if t == CharType::PDI {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

#[inline]
fn slice_needs_resolution(types: &[CharType]) -> bool {
    types.iter().any(|t| t.intersects(NEEDS_RESOLUTION))
}
