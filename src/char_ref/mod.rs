// Copyright 2014-2025 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decoding of character references.
//!
//! The tokenizer calls [`decode`] with the input that follows an `&` in the
//! data, RCDATA and attribute value states. The result says how much input
//! the reference covered, what text replaces it, and which parse errors were
//! seen on the way. Decoding never fails: the worst case is the literal `&`.

pub mod data;
mod expand;

pub use self::expand::{expand_char_refs, ExpandOpts};

use crate::tendril::StrTendril;
use crate::util::str::{ascii_alnum_prefix_len, digit_prefix_len, is_ascii_alnum};

use log::{debug, trace};
use std::borrow::Cow;
use std::fmt;

//§ tokenizing-character-references
/// The replacement for a character reference: one or two characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharRef {
    /// The resulting character(s)
    pub chars: [char; 2],

    /// How many slots in `chars` are valid?
    pub num_chars: u8,
}

impl CharRef {
    fn one(c: char) -> CharRef {
        CharRef {
            chars: [c, '\0'],
            num_chars: 1,
        }
    }

    /// The valid characters, as a slice.
    pub fn as_slice(&self) -> &[char] {
        &self.chars[..self.num_chars as usize]
    }
}

/// A parse error found while decoding a character reference.
///
/// None of these stop decoding; they are reported for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharRefError {
    /// `&#` or `&#x` was not followed by any digit.
    AbsenceOfDigits,
    /// The reference was not terminated by `;`.
    MissingSemicolon,
    /// A numeric reference to U+0000.
    NullReference,
    /// A numeric reference above U+10FFFF.
    OutOfRangeReference,
    /// A numeric reference to a surrogate.
    SurrogateReference(u32),
    /// A numeric reference to a control character other than ASCII
    /// whitespace.
    ControlReference(u32),
    /// A numeric reference to a Unicode noncharacter.
    NoncharacterReference(u32),
    /// `&` followed by a name that is not in the entity table.
    UnknownNamedReference,
}

impl CharRefError {
    /// A description of the error.
    ///
    /// With `exact` set, numeric errors include the offending value.
    pub fn message(&self, exact: bool) -> Cow<'static, str> {
        use self::CharRefError::*;
        match *self {
            AbsenceOfDigits => Cow::Borrowed("Numeric character reference without digits"),
            MissingSemicolon => Cow::Borrowed("Character reference does not end with semicolon"),
            NullReference => Cow::Borrowed("Numeric character reference to NULL"),
            OutOfRangeReference => {
                Cow::Borrowed("Numeric character reference outside the Unicode range")
            },
            SurrogateReference(n) => format_if!(
                exact,
                "Numeric character reference to a surrogate",
                "Numeric character reference to surrogate 0x{:06X}",
                n
            ),
            ControlReference(n) => format_if!(
                exact,
                "Numeric character reference to a control character",
                "Numeric character reference to control character 0x{:06X}",
                n
            ),
            NoncharacterReference(n) => format_if!(
                exact,
                "Numeric character reference to a noncharacter",
                "Numeric character reference to noncharacter 0x{:06X}",
                n
            ),
            UnknownNamedReference => Cow::Borrowed("Invalid character reference"),
        }
    }
}

impl fmt::Display for CharRefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(true))
    }
}

/// The outcome of decoding one character reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Bytes of input covered by the reference, not counting the `&`.
    pub consumed: usize,
    /// The text that replaces `&` and the consumed input.
    pub text: StrTendril,
    /// Parse errors, in the order they were found.
    pub errors: Vec<CharRefError>,
}

impl Decoded {
    fn chars(consumed: usize, c: CharRef, errors: Vec<CharRefError>) -> Decoded {
        let mut text = StrTendril::new();
        for &c in c.as_slice() {
            text.push_char(c);
        }
        Decoded {
            consumed,
            text,
            errors,
        }
    }

    /// `&` followed by the consumed input, verbatim.
    fn literal(input: &str, consumed: usize, errors: Vec<CharRefError>) -> Decoded {
        let mut text = StrTendril::from_char('&');
        text.push_slice(&input[..consumed]);
        Decoded {
            consumed,
            text,
            errors,
        }
    }
}

/// Decode the character reference at the start of `input`.
///
/// `input` is the text immediately after an `&`. Set `in_attribute` when the
/// reference occurs inside an attribute value: an unterminated legacy name
/// followed by `=` or an ASCII alphanumeric is then left alone.
pub fn decode(input: &str, in_attribute: bool) -> Decoded {
    let decoded = match input.as_bytes().first() {
        Some(b'#') => decode_numeric(input),
        _ => decode_named(input, in_attribute),
    };
    debug!(
        "char ref: consumed {} bytes of {:?} as {:?}, errors {:?}",
        decoded.consumed,
        &input[..decoded.consumed],
        &*decoded.text,
        decoded.errors
    );
    decoded
}

fn decode_numeric(input: &str) -> Decoded {
    let mut errors = vec![];

    let (radix, start) = match input.as_bytes().get(1) {
        Some(b'x' | b'X') => (16, 2),
        _ => (10, 1),
    };
    let digits = digit_prefix_len(&input[start..], radix);
    if digits == 0 {
        errors.push(CharRefError::AbsenceOfDigits);
        return Decoded::literal(input, start, errors);
    }

    let end = start + digits;
    let num = input[start..end]
        .bytes()
        .filter_map(|b| (b as char).to_digit(radix))
        .fold(0u32, |num, n| {
            // Saturate just above the Unicode range.
            num.saturating_mul(radix).saturating_add(n).min(0x110000)
        });

    let consumed = match input.as_bytes().get(end) {
        Some(b';') => end + 1,
        _ => {
            errors.push(CharRefError::MissingSemicolon);
            end
        },
    };

    let (c, error) = numeric_value(num);
    errors.extend(error);
    Decoded::chars(consumed, CharRef::one(c), errors)
}

/// The character produced by a numeric reference to `num`, and the parse
/// error it causes, if any.
fn numeric_value(num: u32) -> (char, Option<CharRefError>) {
    fn conv(n: u32) -> char {
        char::from_u32(n).unwrap_or('\u{fffd}')
    }

    match num {
        0x00 => ('\u{fffd}', Some(CharRefError::NullReference)),
        0xD800..=0xDFFF => ('\u{fffd}', Some(CharRefError::SurrogateReference(num))),
        n if n > 0x10FFFF => ('\u{fffd}', Some(CharRefError::OutOfRangeReference)),

        0x80..=0x9F => (
            data::legacy_numeric_replacement(num).unwrap_or_else(|| conv(num)),
            Some(CharRefError::ControlReference(num)),
        ),

        0xFDD0..=0xFDEF => (conv(num), Some(CharRefError::NoncharacterReference(num))),
        n if (n & 0xFFFE) == 0xFFFE => (conv(n), Some(CharRefError::NoncharacterReference(n))),

        0x01..=0x08 | 0x0B | 0x0D..=0x1F | 0x7F => {
            (conv(num), Some(CharRefError::ControlReference(num)))
        },

        n => (conv(n), None),
    }
}

fn decode_named(input: &str, in_attribute: bool) -> Decoded {
    let bytes = input.as_bytes();
    let alnum = ascii_alnum_prefix_len(input);
    if alnum == 0 {
        // No name at all, e.g. "& " or "&;".
        return Decoded::literal(input, 0, vec![CharRefError::UnknownNamedReference]);
    }

    let has_semicolon = bytes.get(alnum) == Some(&b';');
    let longest = alnum + has_semicolon as usize;

    // Names are ASCII, so every candidate length lands on a char boundary.
    for &len in data::candidate_lengths() {
        if len > longest {
            continue;
        }
        let candidate = &input[..len];
        trace!("char ref: trying {:?}", candidate);
        let Some(char_ref) = data::lookup(candidate) else {
            continue;
        };

        if candidate.ends_with(';') {
            return Decoded::chars(len, char_ref, vec![]);
        }

        let errors = vec![CharRefError::MissingSemicolon];

        // If the character reference was consumed as part of an attribute, and the last
        // character matched is not a U+003B SEMICOLON character (;), and the next input
        // character is either a U+003D EQUALS SIGN character (=) or an ASCII alphanumeric,
        // then, for historical reasons, flush code points consumed as a character
        // reference and switch to the return state.
        // The missing semicolon is still reported in that case.
        if in_attribute && bytes.get(len).is_some_and(|&b| b == b'=' || is_ascii_alnum(b)) {
            return Decoded::literal(input, len, errors);
        }

        return Decoded::chars(len, char_ref, errors);
    }

    // Consume the whole bogus name when it is terminated, so that the
    // surrounding tokenizer resumes after the ';'.
    let consumed = if has_semicolon { longest } else { 0 };
    Decoded::literal(input, consumed, vec![CharRefError::UnknownNamedReference])
}

#[cfg(test)]
mod test {
    use super::CharRefError::*;
    use super::*;

    fn check(input: &str, in_attribute: bool, consumed: usize, text: &str, errors: &[CharRefError]) {
        let decoded = decode(input, in_attribute);
        assert_eq!(decoded.consumed, consumed, "consumed for {input:?}");
        assert_eq!(&*decoded.text, text, "text for {input:?}");
        assert_eq!(decoded.errors, errors, "errors for {input:?}");
    }

    #[test]
    fn decimal() {
        check("#65;", false, 4, "A", &[]);
        check("#65;rest", false, 4, "A", &[]);
        check("#0065;", false, 6, "A", &[]);
    }

    #[test]
    fn hexadecimal() {
        check("#x41;", false, 5, "A", &[]);
        check("#X41;", false, 5, "A", &[]);
        check("#x1F4A9;", false, 8, "\u{1f4a9}", &[]);
    }

    #[test]
    fn numeric_missing_semicolon() {
        check("#65", false, 3, "A", &[MissingSemicolon]);
        check("#x41 b", false, 4, "A", &[MissingSemicolon]);
    }

    #[test]
    fn numeric_without_digits() {
        check("#", false, 1, "&#", &[AbsenceOfDigits]);
        check("#;", false, 1, "&#", &[AbsenceOfDigits]);
        check("#x;", false, 2, "&#x", &[AbsenceOfDigits]);
        check("#Xg", false, 2, "&#X", &[AbsenceOfDigits]);
        check("#a", false, 1, "&#", &[AbsenceOfDigits]);
    }

    #[test]
    fn numeric_replacement_character() {
        check("#0;", false, 3, "\u{fffd}", &[NullReference]);
        check("#xD800;", false, 7, "\u{fffd}", &[SurrogateReference(0xD800)]);
        check("#xDFFF;", false, 7, "\u{fffd}", &[SurrogateReference(0xDFFF)]);
        check("#x110000;", false, 9, "\u{fffd}", &[OutOfRangeReference]);
        check("#1114112;", false, 9, "\u{fffd}", &[OutOfRangeReference]);
    }

    #[test]
    fn numeric_huge_values_do_not_overflow() {
        let input = format!("#{};", "9".repeat(100));
        check(&input, false, input.len(), "\u{fffd}", &[OutOfRangeReference]);
        let input = format!("#x{}", "f".repeat(64));
        check(
            &input,
            false,
            input.len(),
            "\u{fffd}",
            &[MissingSemicolon, OutOfRangeReference],
        );
    }

    #[test]
    fn numeric_c1_remap() {
        check("#128;", false, 5, "\u{20ac}", &[ControlReference(0x80)]);
        check("#x9F;", false, 5, "\u{178}", &[ControlReference(0x9F)]);
        check("#x81;", false, 5, "\u{81}", &[ControlReference(0x81)]);
    }

    #[test]
    fn numeric_passed_through_with_error() {
        check("#1;", false, 3, "\u{1}", &[ControlReference(1)]);
        check("#x0B;", false, 5, "\u{b}", &[ControlReference(0xB)]);
        check("#x0D;", false, 5, "\r", &[ControlReference(0xD)]);
        check("#x7F;", false, 5, "\u{7f}", &[ControlReference(0x7F)]);
        check("#xFDD0;", false, 7, "\u{fdd0}", &[NoncharacterReference(0xFDD0)]);
        check("#xFFFE;", false, 7, "\u{fffe}", &[NoncharacterReference(0xFFFE)]);
        check("#x10FFFF;", false, 9, "\u{10ffff}", &[NoncharacterReference(0x10FFFF)]);
    }

    #[test]
    fn numeric_whitespace_is_allowed() {
        check("#9;", false, 3, "\t", &[]);
        check("#10;", false, 4, "\n", &[]);
        check("#x0C;", false, 5, "\u{c}", &[]);
        check("#32;", false, 4, " ", &[]);
        check("#xA0;", false, 5, "\u{a0}", &[]);
    }

    #[test]
    fn named_terminated() {
        check("amp;", false, 4, "&", &[]);
        check("amp;amp;", false, 4, "&", &[]);
        check("notin;", false, 6, "\u{2209}", &[]);
        check("NotEqualTilde;", false, 14, "\u{2242}\u{338}", &[]);
    }

    #[test]
    fn named_longest_match_wins() {
        // "not" is a legacy name and a prefix of "notin;".
        check("notin;", true, 6, "\u{2209}", &[]);
        check("not;", false, 4, "\u{ac}", &[]);
        check("notit;", false, 3, "\u{ac}", &[MissingSemicolon]);
    }

    #[test]
    fn named_unterminated() {
        check("amp", false, 3, "&", &[MissingSemicolon]);
        check("ampx", false, 3, "&", &[MissingSemicolon]);
        check("notit", false, 3, "\u{ac}", &[MissingSemicolon]);
        check("copy 2024", false, 4, "\u{a9}", &[MissingSemicolon]);
    }

    #[test]
    fn ambiguous_ampersand_in_attribute() {
        check("notit=foo", true, 3, "&not", &[MissingSemicolon]);
        check("not=foo", true, 3, "&not", &[MissingSemicolon]);
        check("amp1", true, 3, "&amp", &[MissingSemicolon]);
        check("not foo", true, 3, "\u{ac}", &[MissingSemicolon]);
        check("not", true, 3, "\u{ac}", &[MissingSemicolon]);
        check("not;=foo", true, 4, "\u{ac}", &[]);
        check("notin;=", true, 6, "\u{2209}", &[]);
    }

    #[test]
    fn unknown_names() {
        check("bogusName;", false, 10, "&bogusName;", &[UnknownNamedReference]);
        check("bogusName;", true, 10, "&bogusName;", &[UnknownNamedReference]);
        check("bogus rest", false, 0, "&", &[UnknownNamedReference]);
        check("xyz", false, 0, "&", &[UnknownNamedReference]);
    }

    #[test]
    fn bare_ampersand() {
        for input in ["", " ", " x", ";", "&amp;", "\u{e9}t\u{e9}"] {
            check(input, false, 0, "&", &[UnknownNamedReference]);
            check(input, true, 0, "&", &[UnknownNamedReference]);
        }
    }

    #[test]
    fn messages() {
        assert_eq!(
            ControlReference(0x80).message(false),
            "Numeric character reference to a control character"
        );
        assert_eq!(
            ControlReference(0x80).message(true),
            "Numeric character reference to control character 0x000080"
        );
        assert_eq!(
            MissingSemicolon.to_string(),
            "Character reference does not end with semicolon"
        );
    }
}
