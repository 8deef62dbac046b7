// Copyright 2014-2025 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The XML 1.0 `NameStartChar` and `NameChar` productions, used to check
//! element and attribute names in foreign content.
//!
//! Both tables list the code points that are *not* allowed, as sorted,
//! disjoint, inclusive ranges. Colon is excluded from `NameStartChar` so that
//! a valid name is always usable as a local name.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::Write;

/// Code points that may not start a name.
pub static NAME_START_CHAR_EXCLUSIONS: [(u32, u32); 16] = [
    (0x0000, 0x0040),
    (0x005B, 0x005E),
    (0x0060, 0x0060),
    (0x007B, 0x00BF),
    (0x00D7, 0x00D7),
    (0x00F7, 0x00F7),
    (0x0300, 0x036F),
    (0x037E, 0x037E),
    (0x2000, 0x200B),
    (0x200E, 0x206F),
    (0x2190, 0x2BFF),
    (0x2FF0, 0x3000),
    (0xD800, 0xF8FF),
    (0xFDD0, 0xFDEF),
    (0xFFFE, 0xFFFF),
    (0xF0000, 0x10FFFF),
];

/// Code points that may not appear after the first character of a name.
///
/// Every range here lies inside a range of [`NAME_START_CHAR_EXCLUSIONS`].
pub static NAME_CHAR_EXCLUSIONS: [(u32, u32); 19] = [
    (0x0000, 0x002C),
    (0x002F, 0x002F),
    (0x003B, 0x0040),
    (0x005B, 0x005E),
    (0x0060, 0x0060),
    (0x007B, 0x00B6),
    (0x00B8, 0x00BF),
    (0x00D7, 0x00D7),
    (0x00F7, 0x00F7),
    (0x037E, 0x037E),
    (0x2000, 0x200B),
    (0x200E, 0x203E),
    (0x2041, 0x206F),
    (0x2190, 0x2BFF),
    (0x2FF0, 0x3000),
    (0xD800, 0xF8FF),
    (0xFDD0, 0xFDEF),
    (0xFFFE, 0xFFFF),
    (0xF0000, 0x10FFFF),
];

fn excluded(table: &[(u32, u32)], c: char) -> bool {
    let c = c as u32;
    table
        .binary_search_by(|&(low, high)| {
            if high < c {
                Ordering::Less
            } else if low > c {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Can `c` begin a name?
pub fn is_name_start_char(c: char) -> bool {
    !excluded(&NAME_START_CHAR_EXCLUSIONS, c)
}

/// Can `c` appear in a name after the first character?
pub fn is_name_char(c: char) -> bool {
    !excluded(&NAME_CHAR_EXCLUSIONS, c)
}

/// Is `name` a non-empty sequence of a name start character followed by
/// name characters?
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if is_name_start_char(c) => chars.all(is_name_char),
        _ => false,
    }
}

/// Make `name` acceptable to an XML infoset by replacing each offending code
/// point with `U` followed by its six-digit uppercase hex value.
///
/// Valid names are returned borrowed. The empty string is returned as is.
pub fn coerce_name(name: &str) -> Cow<'_, str> {
    if name.is_empty() || is_valid_name(name) {
        return Cow::Borrowed(name);
    }

    let mut coerced = String::with_capacity(name.len() + 6);
    for (i, c) in name.chars().enumerate() {
        let ok = if i == 0 {
            is_name_start_char(c)
        } else {
            is_name_char(c)
        };
        if ok {
            coerced.push(c);
        } else {
            let _ = write!(coerced, "U{:06X}", c as u32);
        }
    }
    Cow::Owned(coerced)
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_well_formed(table: &[(u32, u32)]) {
        for &(low, high) in table {
            assert!(low <= high, "{low:#X}..{high:#X}");
        }
        for pair in table.windows(2) {
            assert!(pair[0].1 < pair[1].0, "{:X?} overlaps {:X?}", pair[0], pair[1]);
        }
        assert_eq!(table.last().map(|r| r.1), Some(0x10FFFF));
    }

    #[test]
    fn tables_are_sorted_and_disjoint() {
        assert_well_formed(&NAME_START_CHAR_EXCLUSIONS);
        assert_well_formed(&NAME_CHAR_EXCLUSIONS);
    }

    #[test]
    fn name_char_exclusions_are_a_subset() {
        for &(low, high) in &NAME_CHAR_EXCLUSIONS {
            assert!(
                NAME_START_CHAR_EXCLUSIONS
                    .iter()
                    .any(|&(l, h)| l <= low && high <= h),
                "{low:#X}..{high:#X}"
            );
        }
    }

    #[test]
    fn every_start_char_is_a_name_char() {
        for c in (0..=0x10FFFF).filter_map(char::from_u32) {
            if is_name_start_char(c) {
                assert!(is_name_char(c), "{:#X}", c as u32);
            }
        }
    }

    #[test]
    fn ascii() {
        for c in ('a'..='z').chain('A'..='Z').chain(Some('_')) {
            assert!(is_name_start_char(c), "{c:?}");
            assert!(is_name_char(c), "{c:?}");
        }
        for c in ('0'..='9').chain([':', '-', '.']) {
            assert!(!is_name_start_char(c), "{c:?}");
            assert!(is_name_char(c), "{c:?}");
        }
        for c in [' ', '\t', '/', '<', '>', '=', '"', '\'', ';', '@', '[', '^', '`', '{', '\0'] {
            assert!(!is_name_start_char(c), "{c:?}");
            assert!(!is_name_char(c), "{c:?}");
        }
    }

    #[test]
    fn range_boundaries() {
        assert!(!is_name_start_char('\u{BF}'));
        assert!(is_name_start_char('\u{C0}'));
        assert!(is_name_start_char('\u{D6}'));
        assert!(!is_name_start_char('\u{D7}'));
        assert!(!is_name_start_char('\u{B7}'));
        assert!(is_name_char('\u{B7}'));
        assert!(!is_name_start_char('\u{300}'));
        assert!(is_name_char('\u{36F}'));
        assert!(is_name_start_char('\u{370}'));
        assert!(!is_name_char('\u{37E}'));
        assert!(is_name_start_char('\u{200C}'));
        assert!(is_name_start_char('\u{200D}'));
        assert!(!is_name_start_char('\u{200E}'));
        assert!(!is_name_start_char('\u{203F}'));
        assert!(is_name_char('\u{203F}'));
        assert!(is_name_char('\u{2040}'));
        assert!(!is_name_char('\u{2041}'));
        assert!(is_name_start_char('\u{3001}'));
        assert!(!is_name_start_char('\u{3000}'));
        assert!(is_name_start_char('\u{FDCF}'));
        assert!(!is_name_char('\u{FDD0}'));
        assert!(is_name_start_char('\u{FFFD}'));
        assert!(!is_name_char('\u{FFFE}'));
        assert!(is_name_start_char('\u{10000}'));
        assert!(is_name_start_char('\u{EFFFF}'));
        assert!(!is_name_char('\u{F0000}'));
        assert!(!is_name_char('\u{10FFFF}'));
    }

    test_eq!(valid_simple, is_valid_name("svg"), true);
    test_eq!(valid_mixed_case, is_valid_name("foreignObject"), true);
    test_eq!(valid_with_colon_after_start, is_valid_name("xlink:href"), true);
    test_eq!(valid_with_digits, is_valid_name("h1"), true);
    test_eq!(invalid_empty, is_valid_name(""), false);
    test_eq!(invalid_leading_digit, is_valid_name("1a"), false);
    test_eq!(invalid_leading_colon, is_valid_name(":a"), false);
    test_eq!(invalid_inner_space, is_valid_name("a b"), false);

    #[test]
    fn coerce_leaves_valid_names_borrowed() {
        for name in ["annotation-xml", "xlink:href", ""] {
            match coerce_name(name) {
                Cow::Borrowed(b) => assert_eq!(b, name),
                Cow::Owned(o) => panic!("{name:?} was coerced to {o:?}"),
            }
        }
    }

    #[test]
    fn coerce_replaces_bad_code_points() {
        assert_eq!(coerce_name("1a"), "U000031a");
        assert_eq!(coerce_name("a<b"), "aU00003Cb");
        assert_eq!(coerce_name("-x-"), "U00002Dx-");
        assert_eq!(coerce_name("a\u{10FFFF}"), "aU10FFFF");
    }
}
