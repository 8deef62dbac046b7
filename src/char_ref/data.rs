// Copyright 2014-2025 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The named character reference table and the legacy C1 remapping.

use super::CharRef;

// Defines NAMED_ENTITIES, NAME_LENGTHS and NUM_NAMED_ENTITIES; see build.rs.
include!(concat!(env!("OUT_DIR"), "/named_entities.rs"));

/// The HTML standard replaces most characters in the ISO-2022 C1 control code range
/// (U+0080 through U+009F) with these characters, based on Windows 8-bit
/// codepages.
pub static C1_REPLACEMENTS: [Option<char>; 32] = [
    Some('\u{20ac}'), None,             Some('\u{201a}'), Some('\u{0192}'),
    Some('\u{201e}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02c6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None,             Some('\u{017d}'), None,
    None,             Some('\u{2018}'), Some('\u{2019}'), Some('\u{201c}'),
    Some('\u{201d}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02dc}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203a}'),
    Some('\u{0153}'), None,             Some('\u{017e}'), Some('\u{0178}'),
];

/// Look up a named character reference, without the leading `&`.
///
/// `name` must match exactly, including any trailing `;`. Only the legacy
/// subset of names (`amp`, `lt`, `not`, ...) is present without a
/// semicolon.
pub fn lookup(name: &str) -> Option<CharRef> {
    NAMED_ENTITIES.get(name).copied()
}

/// The distinct lengths of the names in the table, longest first.
///
/// A longest-match scan only needs to probe these lengths.
pub fn candidate_lengths() -> &'static [usize] {
    &NAME_LENGTHS
}

/// Number of names in the table, counting terminated and unterminated
/// spellings separately.
pub fn entity_count() -> usize {
    NUM_NAMED_ENTITIES
}

/// The character substituted for a numeric reference to `value` when it
/// falls in U+0080 through U+009F.
///
/// Returns `None` outside that range. Inside it the result is always
/// defined: slots without a Windows-1252 character map to themselves.
pub fn legacy_numeric_replacement(value: u32) -> Option<char> {
    match value {
        0x80..=0x9F => C1_REPLACEMENTS[(value - 0x80) as usize].or_else(|| char::from_u32(value)),
        _ => None,
    }
}
