// Copyright 2015 The Servo Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! 3.4 Reordering Resolved Levels, and L4 mirroring.
//!
//! http://www.unicode.org/reports/tr9/#Reordering_Resolved_Levels

use std::collections::BTreeMap;
use std::ops::Range;

use crate::char_data::{bidi_char_type, mirrored_character, CharType};
use crate::level::Level;
use crate::BidiInfo;

/// Classes whose trailing run resets to the paragraph level at a line edge:
/// L1 names the whitespace and isolate formatting classes, and rule 5.2 adds
/// the removed formatting classes to them.
const LINE_RESET: CharType = CharType::TRAILING.union(CharType::BN_LIKE);

impl<'text> BidiInfo<'text> {
    /// The substrings of `line` that the reversal cascade of L2 reverses,
    /// outermost (lowest level) last, as code-unit ranges.
    ///
    /// Trailing whitespace of an odd-level run at a line edge is excluded,
    /// so it stays put instead of being carried to the far side of the line.
    /// `None` covers the whole text; a line never spans a paragraph
    /// boundary, so each paragraph contributes its own segments.
    pub fn reorder_segments(&self, line: Option<Range<usize>>) -> Vec<Range<usize>> {
        let spans = self.char_spans();
        let line = self.clamp_line(line, &spans);
        self.char_segments(&spans, line)
            .into_iter()
            .map(|seg| {
                let (first, _) = spans[seg.start];
                let (last, c) = spans[seg.end - 1];
                first..last + c.len_utf16()
            })
            .collect()
    }

    /// Map visual positions to logical positions: entry `i` is the code-unit
    /// index of the character displayed at visual position `i` (L2).
    ///
    /// The result is a permutation of `0..levels.len()`. Both units of a
    /// surrogate pair stay in logical order, so the permutation always maps
    /// whole characters.
    pub fn reordered_indices(&self, line: Option<Range<usize>>) -> Vec<usize> {
        let spans = self.char_spans();
        let line = self.clamp_line(line, &spans);
        let mut order: Vec<usize> = (0..spans.len()).collect();
        for seg in self.char_segments(&spans, line) {
            order[seg].reverse();
        }
        let mut indices = Vec::with_capacity(self.levels.len());
        for &ci in &order {
            let (cu, c) = spans[ci];
            for k in 0..c.len_utf16() {
                indices.push(cu + k);
            }
        }
        indices
    }

    /// The text in visual order, with mirrored characters substituted inside
    /// right-to-left runs (L2 + L4).
    pub fn reordered_string(&self, line: Option<Range<usize>>) -> String {
        let spans = self.char_spans();
        let line = self.clamp_line(line, &spans);
        let mut visual: Vec<char> = spans
            .iter()
            .map(|&(cu, c)| {
                if cu >= line.start && cu < line.end && self.levels[cu].is_rtl() {
                    mirrored_character(c).unwrap_or(c)
                } else {
                    c
                }
            })
            .collect();
        for seg in self.char_segments(&spans, line) {
            visual[seg].reverse();
        }
        visual.into_iter().collect()
    }

    /// Positions whose character displays as its mirror image (L4): a map
    /// from code-unit index to the replacement character.
    pub fn mirrored_characters(&self, line: Option<Range<usize>>) -> BTreeMap<usize, char> {
        let spans = self.char_spans();
        let line = self.clamp_line(line, &spans);
        spans
            .iter()
            .filter(|&&(cu, _)| cu >= line.start && cu < line.end)
            .filter(|&&(cu, _)| self.levels[cu].is_rtl())
            .filter_map(|&(cu, c)| mirrored_character(c).map(|m| (cu, m)))
            .collect()
    }

    /// Code-unit offset and character of every code point in the text.
    fn char_spans(&self) -> Vec<(usize, char)> {
        let mut cu = 0;
        self.text
            .chars()
            .map(|c| {
                let span = (cu, c);
                cu += c.len_utf16();
                span
            })
            .collect()
    }

    /// Clamp a code-unit range to the text, snapping outward to code-point
    /// boundaries; `None` means the whole text.
    fn clamp_line(&self, line: Option<Range<usize>>, spans: &[(usize, char)]) -> Range<usize> {
        let len = self.levels.len();
        let mut line = match line {
            Some(line) => line,
            None => return 0..len,
        };
        line.start = line.start.min(len);
        line.end = line.end.min(len).max(line.start);
        if line.start < len {
            let ci = spans.partition_point(|&(cu, _)| cu <= line.start) - 1;
            line.start = spans[ci].0;
        }
        if line.end > 0 && line.end < len {
            let ci = spans.partition_point(|&(cu, _)| cu < line.end) - 1;
            let (cu, c) = spans[ci];
            if cu + c.len_utf16() > line.end {
                line.end = cu + c.len_utf16();
            }
        }
        line
    }

    /// The L2 reversal cascade for every paragraph intersecting `line`,
    /// as ranges of code-point indices into `spans`. Reversals for the
    /// deepest level come first; applying them in order yields the visual
    /// arrangement.
    fn char_segments(&self, spans: &[(usize, char)], line: Range<usize>) -> Vec<Range<usize>> {
        let mut segments = Vec::new();
        for para in &self.paragraphs {
            let start = line.start.max(para.range.start);
            let end = line.end.min(para.range.end);
            if start >= end {
                continue;
            }
            let first = spans.partition_point(|&(cu, _)| cu < start);
            let limit = spans.partition_point(|&(cu, _)| cu < end);
            if first >= limit {
                continue;
            }

            // L1 clause 4, per line: trailing whitespace and formatting
            // characters act as if they were at the paragraph level.
            let mut levels: Vec<Level> = spans[first..limit]
                .iter()
                .map(|&(cu, _)| self.levels[cu])
                .collect();
            for (k, &(_, c)) in spans[first..limit].iter().enumerate().rev() {
                if !bidi_char_type(c).intersects(LINE_RESET) {
                    break;
                }
                levels[k] = para.level;
            }

            let mut max_level = para.level;
            let mut min_level = para.level;
            for &level in &levels {
                max_level = max_level.max(level);
                min_level = min_level.min(level);
            }
            // Stop at the lowest odd level.
            let min_odd = min_level.lowest_rtl_level_ge();

            let mut at = max_level;
            while at >= min_odd {
                let mut k = 0;
                while k < levels.len() {
                    if levels[k] >= at {
                        let seg_start = k;
                        while k + 1 < levels.len() && levels[k + 1] >= at {
                            k += 1;
                        }
                        if k > seg_start {
                            segments.push(first + seg_start..first + k + 1);
                        }
                    }
                    k += 1;
                }
                at = Level::from(at.number() - 1);
            }
        }
        segments
    }
}
