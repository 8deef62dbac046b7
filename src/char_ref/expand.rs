// Copyright 2014-2025 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::{decode, CharRefError};
use crate::tendril::StrTendril;

use log::debug;

/// Options controlling how a run of text is expanded.
#[derive(Clone, Debug, Default)]
pub struct ExpandOpts {
    /// Is the text an attribute value?  Enables the legacy rule that leaves
    /// `&not=` and friends alone.  Default: false
    pub in_attribute: bool,

    /// Report detailed error messages, at some performance penalty?
    /// Default: false
    pub exact_errors: bool,

    /// Leave character references unexpanded, e.g. for `<plaintext>` or
    /// for a client that decodes them itself?  Default: false
    pub ignore_char_refs: bool,

    /// Skip the error callback entirely?  Default: false
    pub ignore_errors: bool,
}

/// Expand every character reference in `text`.
///
/// `error_callback` receives the byte offset of the `&` that started each
/// offending reference and a message, short or detailed according to
/// `opts.exact_errors`. Text without any `&` comes back unchanged and
/// without errors.
pub fn expand_char_refs<E>(text: &str, opts: &ExpandOpts, mut error_callback: E) -> StrTendril
where
    E: FnMut(usize, CharRefError, &str),
{
    if opts.ignore_char_refs || !text.contains('&') {
        return StrTendril::from_slice(text);
    }

    let mut out = StrTendril::new();
    let mut pos = 0;
    while let Some(offset) = text[pos..].find('&') {
        let amp = pos + offset;
        out.push_slice(&text[pos..amp]);

        let rest = &text[amp + 1..];
        let decoded = decode(rest, opts.in_attribute);
        out.push_slice(&decoded.text);
        if !opts.ignore_errors {
            for error in decoded.errors {
                error_callback(amp, error, &error.message(opts.exact_errors));
            }
        }
        pos = amp + 1 + decoded.consumed;
    }
    out.push_slice(&text[pos..]);

    debug!("expanded {} bytes of text to {} bytes", text.len(), out.len());
    out
}
