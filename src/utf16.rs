// Copyright 2015 The Servo Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Mapping between code-point indices and UTF-16 code-unit offsets.
//!
//! The algorithm operates on code points, while the public API reports
//! offsets in UTF-16 code units: a code point on a supplementary plane
//! occupies two code units, everything else occupies one.

use std::ops::Range;

/// Bidirectional index map between the code points of a text and its UTF-16
/// code units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utf16IndexMap {
    /// Code-unit offset of each code point, with a final sentinel entry
    /// holding the total code-unit length.
    cp_to_cu: Vec<usize>,
    /// Code-point index owning each code unit; both units of a surrogate
    /// pair map to the same code point.
    cu_to_cp: Vec<usize>,
}

impl Utf16IndexMap {
    pub fn new(text: &str) -> Utf16IndexMap {
        let mut cp_to_cu = Vec::with_capacity(text.len() + 1);
        let mut cu_to_cp = Vec::with_capacity(text.len());
        let mut cu = 0;
        for (cp, c) in text.chars().enumerate() {
            cp_to_cu.push(cu);
            for _ in 0..c.len_utf16() {
                cu_to_cp.push(cp);
            }
            cu += c.len_utf16();
        }
        cp_to_cu.push(cu);
        Utf16IndexMap { cp_to_cu, cu_to_cp }
    }

    /// Number of code points in the text.
    #[inline]
    pub fn cp_len(&self) -> usize {
        self.cp_to_cu.len() - 1
    }

    /// Number of UTF-16 code units in the text.
    #[inline]
    pub fn cu_len(&self) -> usize {
        self.cu_to_cp.len()
    }

    /// Code-unit offset of the start of the given code point.
    #[inline]
    pub fn cu_index(&self, cp: usize) -> usize {
        self.cp_to_cu[cp]
    }

    /// Code point owning the given code unit.
    #[inline]
    pub fn cp_index(&self, cu: usize) -> usize {
        self.cu_to_cp[cu]
    }

    /// Width in code units of the given code point (1 or 2).
    #[inline]
    pub fn cu_width(&self, cp: usize) -> usize {
        self.cp_to_cu[cp + 1] - self.cp_to_cu[cp]
    }

    /// Convert a code-point range to the covering code-unit range.
    #[inline]
    pub fn cu_range(&self, range: Range<usize>) -> Range<usize> {
        self.cp_to_cu[range.start]..self.cp_to_cu[range.end]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bmp_only() {
        let map = Utf16IndexMap::new("ab\u{05D0}");
        assert_eq!(map.cp_len(), 3);
        assert_eq!(map.cu_len(), 3);
        assert_eq!(map.cu_index(2), 2);
        assert_eq!(map.cp_index(2), 2);
        assert_eq!(map.cu_width(2), 1);
    }

    #[test]
    fn test_surrogate_pairs() {
        // "a😀b": the emoji takes two code units.
        let map = Utf16IndexMap::new("a\u{1F600}b");
        assert_eq!(map.cp_len(), 3);
        assert_eq!(map.cu_len(), 4);
        assert_eq!(map.cu_index(1), 1);
        assert_eq!(map.cu_width(1), 2);
        assert_eq!(map.cu_index(2), 3);
        assert_eq!(map.cp_index(1), 1);
        assert_eq!(map.cp_index(2), 1);
        assert_eq!(map.cp_index(3), 2);
        assert_eq!(map.cu_range(1..2), 1..3);
    }

    #[test]
    fn test_empty() {
        let map = Utf16IndexMap::new("");
        assert_eq!(map.cp_len(), 0);
        assert_eq!(map.cu_len(), 0);
    }
}
