// Copyright 2014-2025 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Types passed from the tokenizer to the tree builder at the DOCTYPE.

use crate::tendril::StrTendril;

/// A document's quirks mode, for compatibility with old browsers. See [quirks mode on wikipedia]
/// for more information.
///
/// [quirks mode on wikipedia]: https://en.wikipedia.org/wiki/Quirks_mode
#[derive(PartialEq, Eq, Copy, Clone, Hash, Debug)]
pub enum QuirksMode {
    /// Full quirks mode
    Quirks,
    /// Almost standards mode
    LimitedQuirks,
    /// Standards mode
    NoQuirks,
}

/// A `DOCTYPE` token.
///
/// The name is expected to be lowercased already, as the tokenizer does.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Doctype {
    /// The root element name, e.g. `html`.
    pub name: Option<StrTendril>,
    /// The quoted string after `PUBLIC`, if any.
    pub public_id: Option<StrTendril>,
    /// The system identifier, if any.
    pub system_id: Option<StrTendril>,
    /// Set by the tokenizer on a malformed DOCTYPE.
    pub force_quirks: bool,
}

impl Doctype {
    /// The `<!DOCTYPE html>` of a standards-mode document.
    pub fn html() -> Doctype {
        Doctype {
            name: Some(StrTendril::from_slice("html")),
            ..Default::default()
        }
    }

    /// The quirks mode this DOCTYPE selects outside an iframe srcdoc document.
    pub fn quirks_mode(&self) -> QuirksMode {
        super::data::classify(
            self.name.as_deref().unwrap_or(""),
            self.public_id.as_deref(),
            self.system_id.as_deref(),
            self.force_quirks,
        )
    }
}
