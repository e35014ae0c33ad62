// Copyright 2017 The Servo Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bidi_resolver::{BidiInfo, Direction};

const LTR_TEXT: &str = "abc 123\ndef 456\nghi 789";
const BIDI_TEXT: &str = "ابجد ۱۲۳\nهوز ۴۵۶\nحتی ۷۸۹";
const MIXED_TEXT: &str = "The title is \u{2067}مفتاح معايير الويب\u{2069} in Arabic.";

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_ltr", |b| {
        b.iter(|| BidiInfo::new(black_box(LTR_TEXT), Direction::Auto))
    });
    c.bench_function("resolve_bidi", |b| {
        b.iter(|| BidiInfo::new(black_box(BIDI_TEXT), Direction::Auto))
    });
    c.bench_function("resolve_mixed", |b| {
        b.iter(|| BidiInfo::new(black_box(MIXED_TEXT), Direction::Auto))
    });
}

fn bench_reorder(c: &mut Criterion) {
    let bidi = BidiInfo::new(BIDI_TEXT, Direction::Auto);
    c.bench_function("reorder_bidi", |b| b.iter(|| bidi.reordered_string(None)));

    let mixed = BidiInfo::new(MIXED_TEXT, Direction::Auto);
    c.bench_function("reorder_indices_mixed", |b| {
        b.iter(|| mixed.reordered_indices(None))
    });
}

criterion_group!(benches, bench_resolve, bench_reorder);
criterion_main!(benches);
