// Copyright 2014-2025 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The tables a tree builder consults: quirks mode selection at the DOCTYPE,
//! and the set of special elements used by scope and implied end tag checks.

pub use self::data::{classify, doctype_error_and_quirks};
pub use self::interface::{Doctype, QuirksMode};
pub use self::tag_sets::{is_special, special_tag, Namespace};
pub use self::tag_sets::{NS_HTML, NS_MATHML, NS_SVG, NS_XLINK, NS_XML, NS_XMLNS};

mod data;
mod interface;
mod tag_sets;
