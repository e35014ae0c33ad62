// Copyright 2015 The Servo Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// NOTE: The following code was generated from UCD/extracted/DerivedBidiClass.txt,
// do not edit directly!

use super::CharType;

/// The [Unicode version](http://www.unicode.org/versions/) of the data used to generate this table.
pub const UNICODE_VERSION: (u64, u64, u64) = (15, 0, 0);

/// Sorted, non-overlapping (first, last, class) ranges of every code point whose
/// `Bidi_Class` is not the default L. Adjacent same-class ranges are merged.
#[rustfmt::skip]
pub const BIDI_CLASS_TABLE: &[(char, char, CharType)] = &[
    ('\u{0}', '\u{8}', CharType::BN),
    ('\u{9}', '\u{9}', CharType::S),
    ('\u{a}', '\u{a}', CharType::B),
    ('\u{b}', '\u{b}', CharType::S),
    ('\u{c}', '\u{c}', CharType::WS),
    ('\u{d}', '\u{d}', CharType::B),
    ('\u{e}', '\u{1b}', CharType::BN),
    ('\u{1c}', '\u{1e}', CharType::B),
    ('\u{1f}', '\u{1f}', CharType::S),
    ('\u{20}', '\u{20}', CharType::WS),
    ('\u{21}', '\u{22}', CharType::ON),
    ('\u{23}', '\u{25}', CharType::ET),
    ('\u{26}', '\u{2a}', CharType::ON),
    ('\u{2b}', '\u{2b}', CharType::ES),
    ('\u{2c}', '\u{2c}', CharType::CS),
    ('\u{2d}', '\u{2d}', CharType::ES),
    ('\u{2e}', '\u{2f}', CharType::CS),
    ('\u{30}', '\u{39}', CharType::EN),
    ('\u{3a}', '\u{3a}', CharType::CS),
    ('\u{3b}', '\u{40}', CharType::ON),
    ('\u{5b}', '\u{60}', CharType::ON),
    ('\u{7b}', '\u{7e}', CharType::ON),
    ('\u{7f}', '\u{84}', CharType::BN),
    ('\u{85}', '\u{85}', CharType::B),
    ('\u{86}', '\u{9f}', CharType::BN),
    ('\u{a0}', '\u{a0}', CharType::CS),
    ('\u{a1}', '\u{a1}', CharType::ON),
    ('\u{a2}', '\u{a5}', CharType::ET),
    ('\u{a6}', '\u{a9}', CharType::ON),
    ('\u{ab}', '\u{ac}', CharType::ON),
    ('\u{ad}', '\u{ad}', CharType::BN),
    ('\u{ae}', '\u{af}', CharType::ON),
    ('\u{b0}', '\u{b1}', CharType::ET),
    ('\u{b2}', '\u{b3}', CharType::EN),
    ('\u{b4}', '\u{b4}', CharType::ON),
    ('\u{b6}', '\u{b8}', CharType::ON),
    ('\u{b9}', '\u{b9}', CharType::EN),
    ('\u{bb}', '\u{bf}', CharType::ON),
    ('\u{d7}', '\u{d7}', CharType::ON),
    ('\u{f7}', '\u{f7}', CharType::ON),
    ('\u{2b9}', '\u{2ba}', CharType::ON),
    ('\u{2c2}', '\u{2cf}', CharType::ON),
    ('\u{2d2}', '\u{2df}', CharType::ON),
    ('\u{2e5}', '\u{2ed}', CharType::ON),
    ('\u{2ef}', '\u{2ff}', CharType::ON),
    ('\u{300}', '\u{36f}', CharType::NSM),
    ('\u{374}', '\u{375}', CharType::ON),
    ('\u{37e}', '\u{37e}', CharType::ON),
    ('\u{384}', '\u{385}', CharType::ON),
    ('\u{387}', '\u{387}', CharType::ON),
    ('\u{3f6}', '\u{3f6}', CharType::ON),
    ('\u{483}', '\u{489}', CharType::NSM),
    ('\u{58a}', '\u{58a}', CharType::ON),
    ('\u{58d}', '\u{58e}', CharType::ON),
    ('\u{58f}', '\u{58f}', CharType::ET),
    ('\u{590}', '\u{590}', CharType::R),
    ('\u{591}', '\u{5bd}', CharType::NSM),
    ('\u{5be}', '\u{5be}', CharType::R),
    ('\u{5bf}', '\u{5bf}', CharType::NSM),
    ('\u{5c0}', '\u{5c0}', CharType::R),
    ('\u{5c1}', '\u{5c2}', CharType::NSM),
    ('\u{5c3}', '\u{5c3}', CharType::R),
    ('\u{5c4}', '\u{5c5}', CharType::NSM),
    ('\u{5c6}', '\u{5c6}', CharType::R),
    ('\u{5c7}', '\u{5c7}', CharType::NSM),
    ('\u{5c8}', '\u{5ff}', CharType::R),
    ('\u{600}', '\u{605}', CharType::AN),
    ('\u{606}', '\u{607}', CharType::ON),
    ('\u{608}', '\u{608}', CharType::AL),
    ('\u{609}', '\u{60a}', CharType::ET),
    ('\u{60b}', '\u{60b}', CharType::AL),
    ('\u{60c}', '\u{60c}', CharType::CS),
    ('\u{60d}', '\u{60d}', CharType::AL),
    ('\u{60e}', '\u{60f}', CharType::ON),
    ('\u{610}', '\u{61a}', CharType::NSM),
    ('\u{61b}', '\u{64a}', CharType::AL),
    ('\u{64b}', '\u{65f}', CharType::NSM),
    ('\u{660}', '\u{669}', CharType::AN),
    ('\u{66a}', '\u{66a}', CharType::ET),
    ('\u{66b}', '\u{66c}', CharType::AN),
    ('\u{66d}', '\u{66f}', CharType::AL),
    ('\u{670}', '\u{670}', CharType::NSM),
    ('\u{671}', '\u{6d5}', CharType::AL),
    ('\u{6d6}', '\u{6dc}', CharType::NSM),
    ('\u{6dd}', '\u{6dd}', CharType::AN),
    ('\u{6de}', '\u{6de}', CharType::ON),
    ('\u{6df}', '\u{6e4}', CharType::NSM),
    ('\u{6e5}', '\u{6e6}', CharType::AL),
    ('\u{6e7}', '\u{6e8}', CharType::NSM),
    ('\u{6e9}', '\u{6e9}', CharType::ON),
    ('\u{6ea}', '\u{6ed}', CharType::NSM),
    ('\u{6ee}', '\u{6ef}', CharType::AL),
    ('\u{6f0}', '\u{6f9}', CharType::EN),
    ('\u{6fa}', '\u{710}', CharType::AL),
    ('\u{711}', '\u{711}', CharType::NSM),
    ('\u{712}', '\u{72f}', CharType::AL),
    ('\u{730}', '\u{74a}', CharType::NSM),
    ('\u{74b}', '\u{7a5}', CharType::AL),
    ('\u{7a6}', '\u{7b0}', CharType::NSM),
    ('\u{7b1}', '\u{7bf}', CharType::AL),
    ('\u{7c0}', '\u{7ea}', CharType::R),
    ('\u{7eb}', '\u{7f3}', CharType::NSM),
    ('\u{7f4}', '\u{7f5}', CharType::R),
    ('\u{7f6}', '\u{7f9}', CharType::ON),
    ('\u{7fa}', '\u{7fc}', CharType::R),
    ('\u{7fd}', '\u{7fd}', CharType::NSM),
    ('\u{7fe}', '\u{815}', CharType::R),
    ('\u{816}', '\u{819}', CharType::NSM),
    ('\u{81a}', '\u{81a}', CharType::R),
    ('\u{81b}', '\u{823}', CharType::NSM),
    ('\u{824}', '\u{824}', CharType::R),
    ('\u{825}', '\u{827}', CharType::NSM),
    ('\u{828}', '\u{828}', CharType::R),
    ('\u{829}', '\u{82d}', CharType::NSM),
    ('\u{82e}', '\u{858}', CharType::R),
    ('\u{859}', '\u{85b}', CharType::NSM),
    ('\u{85c}', '\u{85f}', CharType::R),
    ('\u{860}', '\u{88f}', CharType::AL),
    ('\u{890}', '\u{891}', CharType::AN),
    ('\u{892}', '\u{897}', CharType::AL),
    ('\u{898}', '\u{89f}', CharType::NSM),
    ('\u{8a0}', '\u{8c9}', CharType::AL),
    ('\u{8ca}', '\u{8e1}', CharType::NSM),
    ('\u{8e2}', '\u{8e2}', CharType::AN),
    ('\u{8e3}', '\u{902}', CharType::NSM),
    ('\u{93a}', '\u{93a}', CharType::NSM),
    ('\u{93c}', '\u{93c}', CharType::NSM),
    ('\u{941}', '\u{948}', CharType::NSM),
    ('\u{94d}', '\u{94d}', CharType::NSM),
    ('\u{951}', '\u{957}', CharType::NSM),
    ('\u{962}', '\u{963}', CharType::NSM),
    ('\u{981}', '\u{981}', CharType::NSM),
    ('\u{9bc}', '\u{9bc}', CharType::NSM),
    ('\u{9c1}', '\u{9c4}', CharType::NSM),
    ('\u{9cd}', '\u{9cd}', CharType::NSM),
    ('\u{9e2}', '\u{9e3}', CharType::NSM),
    ('\u{9f2}', '\u{9f3}', CharType::ET),
    ('\u{9fb}', '\u{9fb}', CharType::ET),
    ('\u{9fe}', '\u{9fe}', CharType::NSM),
    ('\u{a01}', '\u{a02}', CharType::NSM),
    ('\u{a3c}', '\u{a3c}', CharType::NSM),
    ('\u{a41}', '\u{a42}', CharType::NSM),
    ('\u{a47}', '\u{a48}', CharType::NSM),
    ('\u{a4b}', '\u{a4d}', CharType::NSM),
    ('\u{a51}', '\u{a51}', CharType::NSM),
    ('\u{a70}', '\u{a71}', CharType::NSM),
    ('\u{a75}', '\u{a75}', CharType::NSM),
    ('\u{a81}', '\u{a82}', CharType::NSM),
    ('\u{abc}', '\u{abc}', CharType::NSM),
    ('\u{ac1}', '\u{ac5}', CharType::NSM),
    ('\u{ac7}', '\u{ac8}', CharType::NSM),
    ('\u{acd}', '\u{acd}', CharType::NSM),
    ('\u{ae2}', '\u{ae3}', CharType::NSM),
    ('\u{af1}', '\u{af1}', CharType::ET),
    ('\u{afa}', '\u{aff}', CharType::NSM),
    ('\u{b01}', '\u{b01}', CharType::NSM),
    ('\u{b3c}', '\u{b3c}', CharType::NSM),
    ('\u{b3f}', '\u{b3f}', CharType::NSM),
    ('\u{b41}', '\u{b44}', CharType::NSM),
    ('\u{b4d}', '\u{b4d}', CharType::NSM),
    ('\u{b55}', '\u{b56}', CharType::NSM),
    ('\u{b62}', '\u{b63}', CharType::NSM),
    ('\u{b82}', '\u{b82}', CharType::NSM),
    ('\u{bc0}', '\u{bc0}', CharType::NSM),
    ('\u{bcd}', '\u{bcd}', CharType::NSM),
    ('\u{bf3}', '\u{bf8}', CharType::ON),
    ('\u{bf9}', '\u{bf9}', CharType::ET),
    ('\u{bfa}', '\u{bfa}', CharType::ON),
    ('\u{c00}', '\u{c00}', CharType::NSM),
    ('\u{c04}', '\u{c04}', CharType::NSM),
    ('\u{c3c}', '\u{c3c}', CharType::NSM),
    ('\u{c3e}', '\u{c40}', CharType::NSM),
    ('\u{c46}', '\u{c48}', CharType::NSM),
    ('\u{c4a}', '\u{c4d}', CharType::NSM),
    ('\u{c55}', '\u{c56}', CharType::NSM),
    ('\u{c62}', '\u{c63}', CharType::NSM),
    ('\u{c78}', '\u{c7e}', CharType::ON),
    ('\u{c81}', '\u{c81}', CharType::NSM),
    ('\u{cbc}', '\u{cbc}', CharType::NSM),
    ('\u{ccc}', '\u{ccd}', CharType::NSM),
    ('\u{ce2}', '\u{ce3}', CharType::NSM),
    ('\u{d00}', '\u{d01}', CharType::NSM),
    ('\u{d3b}', '\u{d3c}', CharType::NSM),
    ('\u{d41}', '\u{d44}', CharType::NSM),
    ('\u{d4d}', '\u{d4d}', CharType::NSM),
    ('\u{d62}', '\u{d63}', CharType::NSM),
    ('\u{d81}', '\u{d81}', CharType::NSM),
    ('\u{dca}', '\u{dca}', CharType::NSM),
    ('\u{dd2}', '\u{dd4}', CharType::NSM),
    ('\u{dd6}', '\u{dd6}', CharType::NSM),
    ('\u{e31}', '\u{e31}', CharType::NSM),
    ('\u{e34}', '\u{e3a}', CharType::NSM),
    ('\u{e3f}', '\u{e3f}', CharType::ET),
    ('\u{e47}', '\u{e4e}', CharType::NSM),
    ('\u{eb1}', '\u{eb1}', CharType::NSM),
    ('\u{eb4}', '\u{ebc}', CharType::NSM),
    ('\u{ec8}', '\u{ecd}', CharType::NSM),
    ('\u{f18}', '\u{f19}', CharType::NSM),
    ('\u{f35}', '\u{f35}', CharType::NSM),
    ('\u{f37}', '\u{f37}', CharType::NSM),
    ('\u{f39}', '\u{f39}', CharType::NSM),
    ('\u{f3a}', '\u{f3d}', CharType::ON),
    ('\u{f71}', '\u{f7e}', CharType::NSM),
    ('\u{f80}', '\u{f84}', CharType::NSM),
    ('\u{f86}', '\u{f87}', CharType::NSM),
    ('\u{f8d}', '\u{f97}', CharType::NSM),
    ('\u{f99}', '\u{fbc}', CharType::NSM),
    ('\u{fc6}', '\u{fc6}', CharType::NSM),
    ('\u{102d}', '\u{1030}', CharType::NSM),
    ('\u{1032}', '\u{1037}', CharType::NSM),
    ('\u{1039}', '\u{103a}', CharType::NSM),
    ('\u{103d}', '\u{103e}', CharType::NSM),
    ('\u{1058}', '\u{1059}', CharType::NSM),
    ('\u{105e}', '\u{1060}', CharType::NSM),
    ('\u{1071}', '\u{1074}', CharType::NSM),
    ('\u{1082}', '\u{1082}', CharType::NSM),
    ('\u{1085}', '\u{1086}', CharType::NSM),
    ('\u{108d}', '\u{108d}', CharType::NSM),
    ('\u{109d}', '\u{109d}', CharType::NSM),
    ('\u{135d}', '\u{135f}', CharType::NSM),
    ('\u{1390}', '\u{1399}', CharType::ON),
    ('\u{1400}', '\u{1400}', CharType::ON),
    ('\u{1680}', '\u{1680}', CharType::WS),
    ('\u{169b}', '\u{169c}', CharType::ON),
    ('\u{1712}', '\u{1714}', CharType::NSM),
    ('\u{1732}', '\u{1733}', CharType::NSM),
    ('\u{1752}', '\u{1753}', CharType::NSM),
    ('\u{1772}', '\u{1773}', CharType::NSM),
    ('\u{17b4}', '\u{17b5}', CharType::NSM),
    ('\u{17b7}', '\u{17bd}', CharType::NSM),
    ('\u{17c6}', '\u{17c6}', CharType::NSM),
    ('\u{17c9}', '\u{17d3}', CharType::NSM),
    ('\u{17db}', '\u{17db}', CharType::ET),
    ('\u{17dd}', '\u{17dd}', CharType::NSM),
    ('\u{17f0}', '\u{17f9}', CharType::ON),
    ('\u{1800}', '\u{180a}', CharType::ON),
    ('\u{180b}', '\u{180d}', CharType::NSM),
    ('\u{180e}', '\u{180e}', CharType::BN),
    ('\u{180f}', '\u{180f}', CharType::NSM),
    ('\u{1885}', '\u{1886}', CharType::NSM),
    ('\u{18a9}', '\u{18a9}', CharType::NSM),
    ('\u{1920}', '\u{1922}', CharType::NSM),
    ('\u{1927}', '\u{1928}', CharType::NSM),
    ('\u{1932}', '\u{1932}', CharType::NSM),
    ('\u{1939}', '\u{193b}', CharType::NSM),
    ('\u{1940}', '\u{1940}', CharType::ON),
    ('\u{1944}', '\u{1945}', CharType::ON),
    ('\u{19de}', '\u{19ff}', CharType::ON),
    ('\u{1a17}', '\u{1a18}', CharType::NSM),
    ('\u{1a1b}', '\u{1a1b}', CharType::NSM),
    ('\u{1a56}', '\u{1a56}', CharType::NSM),
    ('\u{1a58}', '\u{1a5e}', CharType::NSM),
    ('\u{1a60}', '\u{1a60}', CharType::NSM),
    ('\u{1a62}', '\u{1a62}', CharType::NSM),
    ('\u{1a65}', '\u{1a6c}', CharType::NSM),
    ('\u{1a73}', '\u{1a7c}', CharType::NSM),
    ('\u{1a7f}', '\u{1a7f}', CharType::NSM),
    ('\u{1ab0}', '\u{1ace}', CharType::NSM),
    ('\u{1b00}', '\u{1b03}', CharType::NSM),
    ('\u{1b34}', '\u{1b34}', CharType::NSM),
    ('\u{1b36}', '\u{1b3a}', CharType::NSM),
    ('\u{1b3c}', '\u{1b3c}', CharType::NSM),
    ('\u{1b42}', '\u{1b42}', CharType::NSM),
    ('\u{1b6b}', '\u{1b73}', CharType::NSM),
    ('\u{1b80}', '\u{1b81}', CharType::NSM),
    ('\u{1ba2}', '\u{1ba5}', CharType::NSM),
    ('\u{1ba8}', '\u{1ba9}', CharType::NSM),
    ('\u{1bab}', '\u{1bad}', CharType::NSM),
    ('\u{1be6}', '\u{1be6}', CharType::NSM),
    ('\u{1be8}', '\u{1be9}', CharType::NSM),
    ('\u{1bed}', '\u{1bed}', CharType::NSM),
    ('\u{1bef}', '\u{1bf1}', CharType::NSM),
    ('\u{1c2c}', '\u{1c33}', CharType::NSM),
    ('\u{1c36}', '\u{1c37}', CharType::NSM),
    ('\u{1cd0}', '\u{1cd2}', CharType::NSM),
    ('\u{1cd4}', '\u{1ce0}', CharType::NSM),
    ('\u{1ce2}', '\u{1ce8}', CharType::NSM),
    ('\u{1ced}', '\u{1ced}', CharType::NSM),
    ('\u{1cf4}', '\u{1cf4}', CharType::NSM),
    ('\u{1cf8}', '\u{1cf9}', CharType::NSM),
    ('\u{1dc0}', '\u{1dff}', CharType::NSM),
    ('\u{1fbd}', '\u{1fbd}', CharType::ON),
    ('\u{1fbf}', '\u{1fc1}', CharType::ON),
    ('\u{1fcd}', '\u{1fcf}', CharType::ON),
    ('\u{1fdd}', '\u{1fdf}', CharType::ON),
    ('\u{1fed}', '\u{1fef}', CharType::ON),
    ('\u{1ffd}', '\u{1ffe}', CharType::ON),
    ('\u{2000}', '\u{200a}', CharType::WS),
    ('\u{200b}', '\u{200d}', CharType::BN),
    ('\u{200f}', '\u{200f}', CharType::R),
    ('\u{2010}', '\u{2027}', CharType::ON),
    ('\u{2028}', '\u{2028}', CharType::WS),
    ('\u{2029}', '\u{2029}', CharType::B),
    ('\u{202a}', '\u{202a}', CharType::LRE),
    ('\u{202b}', '\u{202b}', CharType::RLE),
    ('\u{202c}', '\u{202c}', CharType::PDF),
    ('\u{202d}', '\u{202d}', CharType::LRO),
    ('\u{202e}', '\u{202e}', CharType::RLO),
    ('\u{202f}', '\u{202f}', CharType::CS),
    ('\u{2030}', '\u{2034}', CharType::ET),
    ('\u{2035}', '\u{2043}', CharType::ON),
    ('\u{2044}', '\u{2044}', CharType::CS),
    ('\u{2045}', '\u{205e}', CharType::ON),
    ('\u{205f}', '\u{205f}', CharType::WS),
    ('\u{2060}', '\u{2065}', CharType::BN),
    ('\u{2066}', '\u{2066}', CharType::LRI),
    ('\u{2067}', '\u{2067}', CharType::RLI),
    ('\u{2068}', '\u{2068}', CharType::FSI),
    ('\u{2069}', '\u{2069}', CharType::PDI),
    ('\u{206a}', '\u{206f}', CharType::BN),
    ('\u{2070}', '\u{2070}', CharType::EN),
    ('\u{2074}', '\u{2079}', CharType::EN),
    ('\u{207a}', '\u{207b}', CharType::ES),
    ('\u{207c}', '\u{207e}', CharType::ON),
    ('\u{2080}', '\u{2089}', CharType::EN),
    ('\u{208a}', '\u{208b}', CharType::ES),
    ('\u{208c}', '\u{208e}', CharType::ON),
    ('\u{20a0}', '\u{20cf}', CharType::ET),
    ('\u{20d0}', '\u{20f0}', CharType::NSM),
    ('\u{2100}', '\u{2101}', CharType::ON),
    ('\u{2103}', '\u{2106}', CharType::ON),
    ('\u{2108}', '\u{2109}', CharType::ON),
    ('\u{2114}', '\u{2114}', CharType::ON),
    ('\u{2116}', '\u{2118}', CharType::ON),
    ('\u{211e}', '\u{2123}', CharType::ON),
    ('\u{2125}', '\u{2125}', CharType::ON),
    ('\u{2127}', '\u{2127}', CharType::ON),
    ('\u{2129}', '\u{2129}', CharType::ON),
    ('\u{212e}', '\u{212e}', CharType::ET),
    ('\u{213a}', '\u{213b}', CharType::ON),
    ('\u{2140}', '\u{2144}', CharType::ON),
    ('\u{214a}', '\u{214d}', CharType::ON),
    ('\u{2150}', '\u{215f}', CharType::ON),
    ('\u{2189}', '\u{218b}', CharType::ON),
    ('\u{2190}', '\u{2211}', CharType::ON),
    ('\u{2212}', '\u{2212}', CharType::ES),
    ('\u{2213}', '\u{2213}', CharType::ET),
    ('\u{2214}', '\u{2335}', CharType::ON),
    ('\u{237b}', '\u{2394}', CharType::ON),
    ('\u{2396}', '\u{2426}', CharType::ON),
    ('\u{2440}', '\u{244a}', CharType::ON),
    ('\u{2460}', '\u{2487}', CharType::ON),
    ('\u{2488}', '\u{249b}', CharType::EN),
    ('\u{24ea}', '\u{26ab}', CharType::ON),
    ('\u{26ad}', '\u{27ff}', CharType::ON),
    ('\u{2900}', '\u{2b73}', CharType::ON),
    ('\u{2b76}', '\u{2b95}', CharType::ON),
    ('\u{2b97}', '\u{2bff}', CharType::ON),
    ('\u{2ce5}', '\u{2cea}', CharType::ON),
    ('\u{2cef}', '\u{2cf1}', CharType::NSM),
    ('\u{2cf9}', '\u{2cff}', CharType::ON),
    ('\u{2d7f}', '\u{2d7f}', CharType::NSM),
    ('\u{2de0}', '\u{2dff}', CharType::NSM),
    ('\u{2e00}', '\u{2e5d}', CharType::ON),
    ('\u{2e80}', '\u{2e99}', CharType::ON),
    ('\u{2e9b}', '\u{2ef3}', CharType::ON),
    ('\u{2f00}', '\u{2fd5}', CharType::ON),
    ('\u{2ff0}', '\u{2ffb}', CharType::ON),
    ('\u{3000}', '\u{3000}', CharType::WS),
    ('\u{3001}', '\u{3004}', CharType::ON),
    ('\u{3008}', '\u{3020}', CharType::ON),
    ('\u{302a}', '\u{302d}', CharType::NSM),
    ('\u{3030}', '\u{3030}', CharType::ON),
    ('\u{3036}', '\u{3037}', CharType::ON),
    ('\u{303d}', '\u{303f}', CharType::ON),
    ('\u{3099}', '\u{309a}', CharType::NSM),
    ('\u{309b}', '\u{309c}', CharType::ON),
    ('\u{30a0}', '\u{30a0}', CharType::ON),
    ('\u{30fb}', '\u{30fb}', CharType::ON),
    ('\u{31c0}', '\u{31e3}', CharType::ON),
    ('\u{321d}', '\u{321e}', CharType::ON),
    ('\u{3250}', '\u{325f}', CharType::ON),
    ('\u{327c}', '\u{327e}', CharType::ON),
    ('\u{32b1}', '\u{32bf}', CharType::ON),
    ('\u{32cc}', '\u{32cf}', CharType::ON),
    ('\u{3377}', '\u{337a}', CharType::ON),
    ('\u{33de}', '\u{33df}', CharType::ON),
    ('\u{33ff}', '\u{33ff}', CharType::ON),
    ('\u{4dc0}', '\u{4dff}', CharType::ON),
    ('\u{a490}', '\u{a4c6}', CharType::ON),
    ('\u{a60d}', '\u{a60f}', CharType::ON),
    ('\u{a66f}', '\u{a672}', CharType::NSM),
    ('\u{a673}', '\u{a673}', CharType::ON),
    ('\u{a674}', '\u{a67d}', CharType::NSM),
    ('\u{a67e}', '\u{a67f}', CharType::ON),
    ('\u{a69e}', '\u{a69f}', CharType::NSM),
    ('\u{a6f0}', '\u{a6f1}', CharType::NSM),
    ('\u{a700}', '\u{a721}', CharType::ON),
    ('\u{a788}', '\u{a788}', CharType::ON),
    ('\u{a802}', '\u{a802}', CharType::NSM),
    ('\u{a806}', '\u{a806}', CharType::NSM),
    ('\u{a80b}', '\u{a80b}', CharType::NSM),
    ('\u{a825}', '\u{a826}', CharType::NSM),
    ('\u{a828}', '\u{a82b}', CharType::ON),
    ('\u{a82c}', '\u{a82c}', CharType::NSM),
    ('\u{a838}', '\u{a839}', CharType::ET),
    ('\u{a874}', '\u{a877}', CharType::ON),
    ('\u{a8c4}', '\u{a8c5}', CharType::NSM),
    ('\u{a8e0}', '\u{a8f1}', CharType::NSM),
    ('\u{a8ff}', '\u{a8ff}', CharType::NSM),
    ('\u{a926}', '\u{a92d}', CharType::NSM),
    ('\u{a947}', '\u{a951}', CharType::NSM),
    ('\u{a980}', '\u{a982}', CharType::NSM),
    ('\u{a9b3}', '\u{a9b3}', CharType::NSM),
    ('\u{a9b6}', '\u{a9b9}', CharType::NSM),
    ('\u{a9bc}', '\u{a9bd}', CharType::NSM),
    ('\u{a9e5}', '\u{a9e5}', CharType::NSM),
    ('\u{aa29}', '\u{aa2e}', CharType::NSM),
    ('\u{aa31}', '\u{aa32}', CharType::NSM),
    ('\u{aa35}', '\u{aa36}', CharType::NSM),
    ('\u{aa43}', '\u{aa43}', CharType::NSM),
    ('\u{aa4c}', '\u{aa4c}', CharType::NSM),
    ('\u{aa7c}', '\u{aa7c}', CharType::NSM),
    ('\u{aab0}', '\u{aab0}', CharType::NSM),
    ('\u{aab2}', '\u{aab4}', CharType::NSM),
    ('\u{aab7}', '\u{aab8}', CharType::NSM),
    ('\u{aabe}', '\u{aabf}', CharType::NSM),
    ('\u{aac1}', '\u{aac1}', CharType::NSM),
    ('\u{aaec}', '\u{aaed}', CharType::NSM),
    ('\u{aaf6}', '\u{aaf6}', CharType::NSM),
    ('\u{ab6a}', '\u{ab6b}', CharType::ON),
    ('\u{abe5}', '\u{abe5}', CharType::NSM),
    ('\u{abe8}', '\u{abe8}', CharType::NSM),
    ('\u{abed}', '\u{abed}', CharType::NSM),
    ('\u{fb1d}', '\u{fb1d}', CharType::R),
    ('\u{fb1e}', '\u{fb1e}', CharType::NSM),
    ('\u{fb1f}', '\u{fb28}', CharType::R),
    ('\u{fb29}', '\u{fb29}', CharType::ES),
    ('\u{fb2a}', '\u{fb4f}', CharType::R),
    ('\u{fb50}', '\u{fd3d}', CharType::AL),
    ('\u{fd3e}', '\u{fd4f}', CharType::ON),
    ('\u{fd50}', '\u{fdce}', CharType::AL),
    ('\u{fdcf}', '\u{fdcf}', CharType::ON),
    ('\u{fdd0}', '\u{fdef}', CharType::BN),
    ('\u{fdf0}', '\u{fdfc}', CharType::AL),
    ('\u{fdfd}', '\u{fdff}', CharType::ON),
    ('\u{fe00}', '\u{fe0f}', CharType::NSM),
    ('\u{fe10}', '\u{fe19}', CharType::ON),
    ('\u{fe20}', '\u{fe2f}', CharType::NSM),
    ('\u{fe30}', '\u{fe4f}', CharType::ON),
    ('\u{fe50}', '\u{fe50}', CharType::CS),
    ('\u{fe51}', '\u{fe51}', CharType::ON),
    ('\u{fe52}', '\u{fe52}', CharType::CS),
    ('\u{fe54}', '\u{fe54}', CharType::ON),
    ('\u{fe55}', '\u{fe55}', CharType::CS),
    ('\u{fe56}', '\u{fe5e}', CharType::ON),
    ('\u{fe5f}', '\u{fe5f}', CharType::ET),
    ('\u{fe60}', '\u{fe61}', CharType::ON),
    ('\u{fe62}', '\u{fe63}', CharType::ES),
    ('\u{fe64}', '\u{fe66}', CharType::ON),
    ('\u{fe68}', '\u{fe68}', CharType::ON),
    ('\u{fe69}', '\u{fe6a}', CharType::ET),
    ('\u{fe6b}', '\u{fe6b}', CharType::ON),
    ('\u{fe70}', '\u{fefe}', CharType::AL),
    ('\u{feff}', '\u{feff}', CharType::BN),
    ('\u{ff01}', '\u{ff02}', CharType::ON),
    ('\u{ff03}', '\u{ff05}', CharType::ET),
    ('\u{ff06}', '\u{ff0a}', CharType::ON),
    ('\u{ff0b}', '\u{ff0b}', CharType::ES),
    ('\u{ff0c}', '\u{ff0c}', CharType::CS),
    ('\u{ff0d}', '\u{ff0d}', CharType::ES),
    ('\u{ff0e}', '\u{ff0f}', CharType::CS),
    ('\u{ff10}', '\u{ff19}', CharType::EN),
    ('\u{ff1a}', '\u{ff1a}', CharType::CS),
    ('\u{ff1b}', '\u{ff20}', CharType::ON),
    ('\u{ff3b}', '\u{ff40}', CharType::ON),
    ('\u{ff5b}', '\u{ff65}', CharType::ON),
    ('\u{ffe0}', '\u{ffe1}', CharType::ET),
    ('\u{ffe2}', '\u{ffe4}', CharType::ON),
    ('\u{ffe5}', '\u{ffe6}', CharType::ET),
    ('\u{ffe8}', '\u{ffee}', CharType::ON),
    ('\u{fff0}', '\u{fff8}', CharType::BN),
    ('\u{fff9}', '\u{fffd}', CharType::ON),
    ('\u{fffe}', '\u{ffff}', CharType::BN),
    ('\u{10101}', '\u{10101}', CharType::ON),
    ('\u{10140}', '\u{1018c}', CharType::ON),
    ('\u{10190}', '\u{1019c}', CharType::ON),
    ('\u{101a0}', '\u{101a0}', CharType::ON),
    ('\u{101fd}', '\u{101fd}', CharType::NSM),
    ('\u{102e0}', '\u{102e0}', CharType::NSM),
    ('\u{102e1}', '\u{102fb}', CharType::EN),
    ('\u{10376}', '\u{1037a}', CharType::NSM),
    ('\u{10800}', '\u{1091e}', CharType::R),
    ('\u{1091f}', '\u{1091f}', CharType::ON),
    ('\u{10920}', '\u{10a00}', CharType::R),
    ('\u{10a01}', '\u{10a03}', CharType::NSM),
    ('\u{10a04}', '\u{10a04}', CharType::R),
    ('\u{10a05}', '\u{10a06}', CharType::NSM),
    ('\u{10a07}', '\u{10a0b}', CharType::R),
    ('\u{10a0c}', '\u{10a0f}', CharType::NSM),
    ('\u{10a10}', '\u{10a37}', CharType::R),
    ('\u{10a38}', '\u{10a3a}', CharType::NSM),
    ('\u{10a3b}', '\u{10a3e}', CharType::R),
    ('\u{10a3f}', '\u{10a3f}', CharType::NSM),
    ('\u{10a40}', '\u{10ae4}', CharType::R),
    ('\u{10ae5}', '\u{10ae6}', CharType::NSM),
    ('\u{10ae7}', '\u{10b38}', CharType::R),
    ('\u{10b39}', '\u{10b3f}', CharType::ON),
    ('\u{10b40}', '\u{10cff}', CharType::R),
    ('\u{10d00}', '\u{10d23}', CharType::AL),
    ('\u{10d24}', '\u{10d27}', CharType::NSM),
    ('\u{10d28}', '\u{10d2f}', CharType::AL),
    ('\u{10d30}', '\u{10d39}', CharType::AN),
    ('\u{10d3a}', '\u{10d3f}', CharType::AL),
    ('\u{10d40}', '\u{10e5f}', CharType::R),
    ('\u{10e60}', '\u{10e7e}', CharType::AN),
    ('\u{10e7f}', '\u{10eaa}', CharType::R),
    ('\u{10eab}', '\u{10eac}', CharType::NSM),
    ('\u{10ead}', '\u{10f2f}', CharType::R),
    ('\u{10f30}', '\u{10f45}', CharType::AL),
    ('\u{10f46}', '\u{10f50}', CharType::NSM),
    ('\u{10f51}', '\u{10f6f}', CharType::AL),
    ('\u{10f70}', '\u{10f81}', CharType::R),
    ('\u{10f82}', '\u{10f85}', CharType::NSM),
    ('\u{10f86}', '\u{10fff}', CharType::R),
    ('\u{11001}', '\u{11001}', CharType::NSM),
    ('\u{11038}', '\u{11046}', CharType::NSM),
    ('\u{11052}', '\u{11065}', CharType::ON),
    ('\u{11070}', '\u{11070}', CharType::NSM),
    ('\u{11073}', '\u{11074}', CharType::NSM),
    ('\u{1107f}', '\u{11081}', CharType::NSM),
    ('\u{110b3}', '\u{110b6}', CharType::NSM),
    ('\u{110b9}', '\u{110ba}', CharType::NSM),
    ('\u{110c2}', '\u{110c2}', CharType::NSM),
    ('\u{11100}', '\u{11102}', CharType::NSM),
    ('\u{11127}', '\u{1112b}', CharType::NSM),
    ('\u{1112d}', '\u{11134}', CharType::NSM),
    ('\u{11173}', '\u{11173}', CharType::NSM),
    ('\u{11180}', '\u{11181}', CharType::NSM),
    ('\u{111b6}', '\u{111be}', CharType::NSM),
    ('\u{111c9}', '\u{111cc}', CharType::NSM),
    ('\u{111cf}', '\u{111cf}', CharType::NSM),
    ('\u{1122f}', '\u{11231}', CharType::NSM),
    ('\u{11234}', '\u{11234}', CharType::NSM),
    ('\u{11236}', '\u{11237}', CharType::NSM),
    ('\u{1123e}', '\u{1123e}', CharType::NSM),
    ('\u{112df}', '\u{112df}', CharType::NSM),
    ('\u{112e3}', '\u{112ea}', CharType::NSM),
    ('\u{11300}', '\u{11301}', CharType::NSM),
    ('\u{1133b}', '\u{1133c}', CharType::NSM),
    ('\u{11340}', '\u{11340}', CharType::NSM),
    ('\u{11366}', '\u{1136c}', CharType::NSM),
    ('\u{11370}', '\u{11374}', CharType::NSM),
    ('\u{11438}', '\u{1143f}', CharType::NSM),
    ('\u{11442}', '\u{11444}', CharType::NSM),
    ('\u{11446}', '\u{11446}', CharType::NSM),
    ('\u{1145e}', '\u{1145e}', CharType::NSM),
    ('\u{114b3}', '\u{114b8}', CharType::NSM),
    ('\u{114ba}', '\u{114ba}', CharType::NSM),
    ('\u{114bf}', '\u{114c0}', CharType::NSM),
    ('\u{114c2}', '\u{114c3}', CharType::NSM),
    ('\u{115b2}', '\u{115b5}', CharType::NSM),
    ('\u{115bc}', '\u{115bd}', CharType::NSM),
    ('\u{115bf}', '\u{115c0}', CharType::NSM),
    ('\u{115dc}', '\u{115dd}', CharType::NSM),
    ('\u{11633}', '\u{1163a}', CharType::NSM),
    ('\u{1163d}', '\u{1163d}', CharType::NSM),
    ('\u{1163f}', '\u{11640}', CharType::NSM),
    ('\u{11660}', '\u{1166c}', CharType::ON),
    ('\u{116ab}', '\u{116ab}', CharType::NSM),
    ('\u{116ad}', '\u{116ad}', CharType::NSM),
    ('\u{116b0}', '\u{116b5}', CharType::NSM),
    ('\u{116b7}', '\u{116b7}', CharType::NSM),
    ('\u{1171d}', '\u{1171f}', CharType::NSM),
    ('\u{11722}', '\u{11725}', CharType::NSM),
    ('\u{11727}', '\u{1172b}', CharType::NSM),
    ('\u{1182f}', '\u{11837}', CharType::NSM),
    ('\u{11839}', '\u{1183a}', CharType::NSM),
    ('\u{1193b}', '\u{1193c}', CharType::NSM),
    ('\u{1193e}', '\u{1193e}', CharType::NSM),
    ('\u{11943}', '\u{11943}', CharType::NSM),
    ('\u{119d4}', '\u{119d7}', CharType::NSM),
    ('\u{119da}', '\u{119db}', CharType::NSM),
    ('\u{119e0}', '\u{119e0}', CharType::NSM),
    ('\u{11a01}', '\u{11a06}', CharType::NSM),
    ('\u{11a09}', '\u{11a0a}', CharType::NSM),
    ('\u{11a33}', '\u{11a38}', CharType::NSM),
    ('\u{11a3b}', '\u{11a3e}', CharType::NSM),
    ('\u{11a47}', '\u{11a47}', CharType::NSM),
    ('\u{11a51}', '\u{11a56}', CharType::NSM),
    ('\u{11a59}', '\u{11a5b}', CharType::NSM),
    ('\u{11a8a}', '\u{11a96}', CharType::NSM),
    ('\u{11a98}', '\u{11a99}', CharType::NSM),
    ('\u{11c30}', '\u{11c36}', CharType::NSM),
    ('\u{11c38}', '\u{11c3d}', CharType::NSM),
    ('\u{11c92}', '\u{11ca7}', CharType::NSM),
    ('\u{11caa}', '\u{11cb0}', CharType::NSM),
    ('\u{11cb2}', '\u{11cb3}', CharType::NSM),
    ('\u{11cb5}', '\u{11cb6}', CharType::NSM),
    ('\u{11d31}', '\u{11d36}', CharType::NSM),
    ('\u{11d3a}', '\u{11d3a}', CharType::NSM),
    ('\u{11d3c}', '\u{11d3d}', CharType::NSM),
    ('\u{11d3f}', '\u{11d45}', CharType::NSM),
    ('\u{11d47}', '\u{11d47}', CharType::NSM),
    ('\u{11d90}', '\u{11d91}', CharType::NSM),
    ('\u{11d95}', '\u{11d95}', CharType::NSM),
    ('\u{11d97}', '\u{11d97}', CharType::NSM),
    ('\u{11ef3}', '\u{11ef4}', CharType::NSM),
    ('\u{11fd5}', '\u{11fdc}', CharType::ON),
    ('\u{11fdd}', '\u{11fe0}', CharType::ET),
    ('\u{11fe1}', '\u{11ff1}', CharType::ON),
    ('\u{16af0}', '\u{16af4}', CharType::NSM),
    ('\u{16b30}', '\u{16b36}', CharType::NSM),
    ('\u{16f4f}', '\u{16f4f}', CharType::NSM),
    ('\u{16f8f}', '\u{16f92}', CharType::NSM),
    ('\u{16fe2}', '\u{16fe2}', CharType::ON),
    ('\u{16fe4}', '\u{16fe4}', CharType::NSM),
    ('\u{1bc9d}', '\u{1bc9e}', CharType::NSM),
    ('\u{1bca0}', '\u{1bca3}', CharType::BN),
    ('\u{1cf00}', '\u{1cf2d}', CharType::NSM),
    ('\u{1cf30}', '\u{1cf46}', CharType::NSM),
    ('\u{1d167}', '\u{1d169}', CharType::NSM),
    ('\u{1d173}', '\u{1d17a}', CharType::BN),
    ('\u{1d17b}', '\u{1d182}', CharType::NSM),
    ('\u{1d185}', '\u{1d18b}', CharType::NSM),
    ('\u{1d1aa}', '\u{1d1ad}', CharType::NSM),
    ('\u{1d1e9}', '\u{1d1ea}', CharType::ON),
    ('\u{1d200}', '\u{1d241}', CharType::ON),
    ('\u{1d242}', '\u{1d244}', CharType::NSM),
    ('\u{1d245}', '\u{1d245}', CharType::ON),
    ('\u{1d300}', '\u{1d356}', CharType::ON),
    ('\u{1d6db}', '\u{1d6db}', CharType::ON),
    ('\u{1d715}', '\u{1d715}', CharType::ON),
    ('\u{1d74f}', '\u{1d74f}', CharType::ON),
    ('\u{1d789}', '\u{1d789}', CharType::ON),
    ('\u{1d7c3}', '\u{1d7c3}', CharType::ON),
    ('\u{1d7ce}', '\u{1d7ff}', CharType::EN),
    ('\u{1da00}', '\u{1da36}', CharType::NSM),
    ('\u{1da3b}', '\u{1da6c}', CharType::NSM),
    ('\u{1da75}', '\u{1da75}', CharType::NSM),
    ('\u{1da84}', '\u{1da84}', CharType::NSM),
    ('\u{1da9b}', '\u{1da9f}', CharType::NSM),
    ('\u{1daa1}', '\u{1daaf}', CharType::NSM),
    ('\u{1e000}', '\u{1e006}', CharType::NSM),
    ('\u{1e008}', '\u{1e018}', CharType::NSM),
    ('\u{1e01b}', '\u{1e021}', CharType::NSM),
    ('\u{1e023}', '\u{1e024}', CharType::NSM),
    ('\u{1e026}', '\u{1e02a}', CharType::NSM),
    ('\u{1e130}', '\u{1e136}', CharType::NSM),
    ('\u{1e2ae}', '\u{1e2ae}', CharType::NSM),
    ('\u{1e2ec}', '\u{1e2ef}', CharType::NSM),
    ('\u{1e2ff}', '\u{1e2ff}', CharType::ET),
    ('\u{1e800}', '\u{1e8cf}', CharType::R),
    ('\u{1e8d0}', '\u{1e8d6}', CharType::NSM),
    ('\u{1e8d7}', '\u{1e943}', CharType::R),
    ('\u{1e944}', '\u{1e94a}', CharType::NSM),
    ('\u{1e94b}', '\u{1ec6f}', CharType::R),
    ('\u{1ec70}', '\u{1ecbf}', CharType::AL),
    ('\u{1ecc0}', '\u{1ecff}', CharType::R),
    ('\u{1ed00}', '\u{1ed4f}', CharType::AL),
    ('\u{1ed50}', '\u{1edff}', CharType::R),
    ('\u{1ee00}', '\u{1eeef}', CharType::AL),
    ('\u{1eef0}', '\u{1eef1}', CharType::ON),
    ('\u{1eef2}', '\u{1eeff}', CharType::AL),
    ('\u{1ef00}', '\u{1efff}', CharType::R),
    ('\u{1f000}', '\u{1f02b}', CharType::ON),
    ('\u{1f030}', '\u{1f093}', CharType::ON),
    ('\u{1f0a0}', '\u{1f0ae}', CharType::ON),
    ('\u{1f0b1}', '\u{1f0bf}', CharType::ON),
    ('\u{1f0c1}', '\u{1f0cf}', CharType::ON),
    ('\u{1f0d1}', '\u{1f0f5}', CharType::ON),
    ('\u{1f100}', '\u{1f10a}', CharType::EN),
    ('\u{1f10b}', '\u{1f10f}', CharType::ON),
    ('\u{1f12f}', '\u{1f12f}', CharType::ON),
    ('\u{1f16a}', '\u{1f16f}', CharType::ON),
    ('\u{1f1ad}', '\u{1f1ad}', CharType::ON),
    ('\u{1f260}', '\u{1f265}', CharType::ON),
    ('\u{1f300}', '\u{1f6d7}', CharType::ON),
    ('\u{1f6dd}', '\u{1f6ec}', CharType::ON),
    ('\u{1f6f0}', '\u{1f6fc}', CharType::ON),
    ('\u{1f700}', '\u{1f773}', CharType::ON),
    ('\u{1f780}', '\u{1f7d8}', CharType::ON),
    ('\u{1f7e0}', '\u{1f7eb}', CharType::ON),
    ('\u{1f7f0}', '\u{1f7f0}', CharType::ON),
    ('\u{1f800}', '\u{1f80b}', CharType::ON),
    ('\u{1f810}', '\u{1f847}', CharType::ON),
    ('\u{1f850}', '\u{1f859}', CharType::ON),
    ('\u{1f860}', '\u{1f887}', CharType::ON),
    ('\u{1f890}', '\u{1f8ad}', CharType::ON),
    ('\u{1f8b0}', '\u{1f8b1}', CharType::ON),
    ('\u{1f900}', '\u{1fa53}', CharType::ON),
    ('\u{1fa60}', '\u{1fa6d}', CharType::ON),
    ('\u{1fa70}', '\u{1fa74}', CharType::ON),
    ('\u{1fa78}', '\u{1fa7c}', CharType::ON),
    ('\u{1fa80}', '\u{1fa86}', CharType::ON),
    ('\u{1fa90}', '\u{1faac}', CharType::ON),
    ('\u{1fab0}', '\u{1faba}', CharType::ON),
    ('\u{1fac0}', '\u{1fac5}', CharType::ON),
    ('\u{1fad0}', '\u{1fad9}', CharType::ON),
    ('\u{1fae0}', '\u{1fae7}', CharType::ON),
    ('\u{1faf0}', '\u{1faf6}', CharType::ON),
    ('\u{1fb00}', '\u{1fb92}', CharType::ON),
    ('\u{1fb94}', '\u{1fbca}', CharType::ON),
    ('\u{1fbf0}', '\u{1fbf9}', CharType::EN),
    ('\u{1fffe}', '\u{1ffff}', CharType::BN),
    ('\u{2fffe}', '\u{2ffff}', CharType::BN),
    ('\u{3fffe}', '\u{3ffff}', CharType::BN),
    ('\u{4fffe}', '\u{4ffff}', CharType::BN),
    ('\u{5fffe}', '\u{5ffff}', CharType::BN),
    ('\u{6fffe}', '\u{6ffff}', CharType::BN),
    ('\u{7fffe}', '\u{7ffff}', CharType::BN),
    ('\u{8fffe}', '\u{8ffff}', CharType::BN),
    ('\u{9fffe}', '\u{9ffff}', CharType::BN),
    ('\u{afffe}', '\u{affff}', CharType::BN),
    ('\u{bfffe}', '\u{bffff}', CharType::BN),
    ('\u{cfffe}', '\u{cffff}', CharType::BN),
    ('\u{dfffe}', '\u{e00ff}', CharType::BN),
    ('\u{e0100}', '\u{e01ef}', CharType::NSM),
    ('\u{e01f0}', '\u{e0fff}', CharType::BN),
    ('\u{efffe}', '\u{effff}', CharType::BN),
    ('\u{ffffe}', '\u{fffff}', CharType::BN),
    ('\u{10fffe}', '\u{10ffff}', CharType::BN),
];
