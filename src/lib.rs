// Copyright 2014-2025 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Data tables and small algorithms shared by an HTML5 tokenizer and tree
//! builder.
//!
//! * [`char_ref`] decodes character references (`&amp;`, `&#65;`,
//!   `&#x41;` and the legacy unterminated forms).
//! * [`tree_builder`] selects the document's quirks mode from its DOCTYPE
//!   and knows which elements are "special".
//! * [`names`] classifies code points against the XML `NameStartChar` and
//!   `NameChar` productions.
//!
//! Every table is built at compile time and is immutable, so all functions
//! here can be called from any number of parsers concurrently.

#![deny(missing_docs)]

#[macro_use]
extern crate mac;
/// Re-export the tendril crate.
pub extern crate tendril;

pub mod char_ref;
pub mod names;
pub mod tree_builder;

mod util {
    pub mod str;
}

pub use char_ref::{decode, expand_char_refs, CharRef, CharRefError, Decoded, ExpandOpts};
pub use names::{coerce_name, is_name_char, is_name_start_char, is_valid_name};
pub use tree_builder::{classify, is_special, Doctype, Namespace, QuirksMode};
