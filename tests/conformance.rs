// Copyright 2015 The Servo Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conformance harness over the UCD test files.
//!
//! Drop `BidiTest.txt` and `BidiCharacterTest.txt` from the Unicode Character
//! Database into `tests/data/` to run the full suites; the files are large
//! and not tracked, so the tests skip silently when they are missing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bidi_resolver::{BidiInfo, Direction};

const TEST_DATA_DIR: &str = "tests/data";

fn open_test_file(filename: &str) -> Option<File> {
    let path = Path::new(TEST_DATA_DIR).join(filename);
    match File::open(&path) {
        Ok(file) => Some(file),
        Err(_) => {
            eprintln!("skipping conformance test: {} not present", path.display());
            None
        }
    }
}

/// A representative character for each class name used by BidiTest.txt.
fn sample_char(class: &str) -> char {
    match class {
        "L" => 'a',
        "R" => '\u{05D0}',
        "AL" => '\u{0627}',
        "EN" => '0',
        "ES" => '+',
        "ET" => '#',
        "AN" => '\u{0660}',
        "CS" => ',',
        "NSM" => '\u{0300}',
        "BN" => '\u{00AD}',
        "B" => '\u{2029}',
        "S" => '\u{0009}',
        "WS" => ' ',
        "ON" => '!',
        "LRE" => '\u{202A}',
        "RLE" => '\u{202B}',
        "PDF" => '\u{202C}',
        "LRO" => '\u{202D}',
        "RLO" => '\u{202E}',
        "LRI" => '\u{2066}',
        "RLI" => '\u{2067}',
        "FSI" => '\u{2068}',
        "PDI" => '\u{2069}',
        other => panic!("unknown class name {:?}", other),
    }
}

fn check_levels_and_order(
    text: &str,
    direction: Direction,
    exp_levels: &[&str],
    exp_order: &[usize],
    line: &str,
    fails: &mut Vec<String>,
) {
    let info = BidiInfo::new(text, direction);

    // The expectations are per code point; collapse the code-unit output.
    let mut cp_starts = Vec::new();
    let mut cu_to_cp = vec![0usize; info.levels.len()];
    let mut cu = 0;
    for (cp, c) in text.chars().enumerate() {
        cp_starts.push(cu);
        for k in 0..c.len_utf16() {
            cu_to_cp[cu + k] = cp;
        }
        cu += c.len_utf16();
    }
    let cp_levels: Vec<u8> = cp_starts.iter().map(|&cu| info.levels[cu].number()).collect();

    let levels_match = cp_levels.len() == exp_levels.len()
        && cp_levels
            .iter()
            .zip(exp_levels.iter())
            .all(|(level, exp)| *exp == "x" || exp.parse::<u8>() == Ok(*level));
    if !levels_match {
        fails.push(format!(
            "levels for {:?} ({:?}): got {:?}, expected {:?}",
            line, direction, cp_levels, exp_levels
        ));
        return;
    }

    // The expected ordering omits positions whose level is unspecified.
    let visual: Vec<usize> = info
        .reordered_indices(None)
        .into_iter()
        .filter(|cu| cp_starts.binary_search(cu).is_ok())
        .map(|cu| cu_to_cp[cu])
        .filter(|&cp| exp_levels[cp] != "x")
        .collect();
    if visual != exp_order {
        fails.push(format!(
            "order for {:?} ({:?}): got {:?}, expected {:?}",
            line, direction, visual, exp_order
        ));
    }
}

#[test]
fn bidi_test_conformance() {
    let file = match open_test_file("BidiTest.txt") {
        Some(file) => file,
        None => return,
    };

    let mut fails: Vec<String> = Vec::new();
    let mut passed = 0u32;
    let mut set_levels: Vec<String> = Vec::new();
    let mut set_order: Vec<usize> = Vec::new();

    for line in BufReader::new(file).lines().map(|l| l.unwrap()) {
        let line = line.trim().to_owned();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("@Levels:") {
            set_levels = rest.split_whitespace().map(str::to_owned).collect();
            continue;
        }
        if let Some(rest) = line.strip_prefix("@Reorder:") {
            set_order = rest
                .split_whitespace()
                .map(|x| x.parse().unwrap())
                .collect();
            continue;
        }
        if line.starts_with('@') {
            // Unknown directive; keep some forward compatibility.
            continue;
        }

        let mut pieces = line.split(';');
        let classes: Vec<&str> = pieces.next().unwrap().split_whitespace().collect();
        let bitset: u8 = pieces.next().unwrap().trim().parse().unwrap();
        let text: String = classes.iter().map(|c| sample_char(c)).collect();
        let exp_levels: Vec<&str> = set_levels.iter().map(|s| s.as_str()).collect();

        for (bit, direction) in [
            (1, Direction::Auto),
            (2, Direction::Ltr),
            (4, Direction::Rtl),
        ] {
            if bitset & bit == 0 {
                continue;
            }
            let before = fails.len();
            check_levels_and_order(&text, direction, &exp_levels, &set_order, &line, &mut fails);
            if fails.len() == before {
                passed += 1;
            }
        }
    }

    assert!(
        fails.is_empty(),
        "{} BidiTest cases failed ({} passed); first failure: {}",
        fails.len(),
        passed,
        fails[0]
    );
}

#[test]
fn bidi_character_test_conformance() {
    let file = match open_test_file("BidiCharacterTest.txt") {
        Some(file) => file,
        None => return,
    };

    let mut fails: Vec<String> = Vec::new();
    let mut passed = 0u32;

    for line in BufReader::new(file).lines().map(|l| l.unwrap()) {
        let line = line.trim().to_owned();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // codepoints; direction; paragraph level; levels; visual order
        let pieces: Vec<&str> = line.split(';').collect();
        let text: String = pieces[0]
            .split_whitespace()
            .map(|cp| char::from_u32(u32::from_str_radix(cp, 16).unwrap()).unwrap())
            .collect();
        let direction = match pieces[1].trim() {
            "0" => Direction::Ltr,
            "1" => Direction::Rtl,
            _ => Direction::Auto,
        };
        let exp_levels: Vec<&str> = pieces[3].split_whitespace().collect();
        let exp_order: Vec<usize> = pieces[4]
            .split_whitespace()
            .map(|x| x.parse().unwrap())
            .collect();

        let before = fails.len();
        check_levels_and_order(&text, direction, &exp_levels, &exp_order, &line, &mut fails);
        if fails.len() == before {
            passed += 1;
        }
    }

    assert!(
        fails.is_empty(),
        "{} BidiCharacterTest cases failed ({} passed); first failure: {}",
        fails.len(),
        passed,
        fails[0]
    );
}
