// Copyright 2014-2025 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Is the byte an ASCII alphanumeric character?
pub(crate) fn is_ascii_alnum(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Does `s` begin with `prefix`, ignoring ASCII case?
///
/// Non-ASCII bytes must match exactly.
pub(crate) fn starts_with_ignore_ascii_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Length of the run of ASCII alphanumerics at the start of `s`.
pub(crate) fn ascii_alnum_prefix_len(s: &str) -> usize {
    s.bytes().take_while(|&b| is_ascii_alnum(b)).count()
}

/// Length of the run of digits in `radix` at the start of `s`.
pub(crate) fn digit_prefix_len(s: &str, radix: u32) -> usize {
    s.bytes()
        .take_while(|&b| (b as char).is_digit(radix))
        .count()
}
