// Copyright 2014-2025 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::interface::{Doctype, QuirksMode};
use super::interface::QuirksMode::{LimitedQuirks, NoQuirks, Quirks};
use crate::util::str::starts_with_ignore_ascii_case;

use log::debug;

// These should all be lowercase, for ASCII-case-insensitive matching.
static QUIRKY_PUBLIC_PREFIXES: &[&str] = &[
    "-//advasoft ltd//dtd html 3.0 aswedit + extensions//",
    "-//as//dtd html 3.0 aswedit + extensions//",
    "-//ietf//dtd html 2.0 level 1//",
    "-//ietf//dtd html 2.0 level 2//",
    "-//ietf//dtd html 2.0 strict level 1//",
    "-//ietf//dtd html 2.0 strict level 2//",
    "-//ietf//dtd html 2.0 strict//",
    "-//ietf//dtd html 2.0//",
    "-//ietf//dtd html 2.1e//",
    "-//ietf//dtd html 3.0//",
    "-//ietf//dtd html 3.2 final//",
    "-//ietf//dtd html 3.2//",
    "-//ietf//dtd html 3//",
    "-//ietf//dtd html level 0//",
    "-//ietf//dtd html level 1//",
    "-//ietf//dtd html level 2//",
    "-//ietf//dtd html level 3//",
    "-//ietf//dtd html strict level 0//",
    "-//ietf//dtd html strict level 1//",
    "-//ietf//dtd html strict level 2//",
    "-//ietf//dtd html strict level 3//",
    "-//ietf//dtd html strict//",
    "-//ietf//dtd html//",
    "-//metrius//dtd metrius presentational//",
    "-//microsoft//dtd internet explorer 2.0 html strict//",
    "-//microsoft//dtd internet explorer 2.0 html//",
    "-//microsoft//dtd internet explorer 2.0 tables//",
    "-//microsoft//dtd internet explorer 3.0 html strict//",
    "-//microsoft//dtd internet explorer 3.0 html//",
    "-//microsoft//dtd internet explorer 3.0 tables//",
    "-//netscape comm. corp.//dtd html//",
    "-//netscape comm. corp.//dtd strict html//",
    "-//o'reilly and associates//dtd html 2.0//",
    "-//o'reilly and associates//dtd html extended 1.0//",
    "-//o'reilly and associates//dtd html extended relaxed 1.0//",
    "-//softquad software//dtd hotmetal pro 6.0::19990601::extensions to html 4.0//",
    "-//softquad//dtd hotmetal pro 4.0::19971010::extensions to html 4.0//",
    "-//spyglass//dtd html 2.0 extended//",
    "-//sq//dtd html 2.0 hotmetal + extensions//",
    "-//sun microsystems corp.//dtd hotjava html//",
    "-//sun microsystems corp.//dtd hotjava strict html//",
    "-//w3c//dtd html 3 1995-03-24//",
    "-//w3c//dtd html 3.2 draft//",
    "-//w3c//dtd html 3.2 final//",
    "-//w3c//dtd html 3.2//",
    "-//w3c//dtd html 3.2s draft//",
    "-//w3c//dtd html 4.0 frameset//",
    "-//w3c//dtd html 4.0 transitional//",
    "-//w3c//dtd html experimental 19960712//",
    "-//w3c//dtd html experimental 970421//",
    "-//w3c//dtd w3 html//",
    "-//w3o//dtd w3 html 3.0//",
    "-//webtechs//dtd mozilla html 2.0//",
    "-//webtechs//dtd mozilla html//",
];

static QUIRKY_PUBLIC_MATCHES: &[&str] = &[
    "-//w3o//dtd w3 html strict 3.0//en//",
    "-/w3c/dtd html 4.0 transitional/en",
    "html",
];

static QUIRKY_SYSTEM_MATCHES: &[&str] =
    &["http://www.ibm.com/data/dtd/v11/ibmxhtml1-transitional.dtd"];

static LIMITED_QUIRKY_PUBLIC_PREFIXES: &[&str] = &[
    "-//w3c//dtd xhtml 1.0 frameset//",
    "-//w3c//dtd xhtml 1.0 transitional//",
];

static HTML4_PUBLIC_PREFIXES: &[&str] = &[
    "-//w3c//dtd html 4.01 frameset//",
    "-//w3c//dtd html 4.01 transitional//",
];

fn contains_ignore_ascii_case(haystack: &[&str], needle: &str) -> bool {
    haystack.iter().any(|x| needle.eq_ignore_ascii_case(x))
}

// FIXME: We could do something asymptotically faster here.
// But there aren't many strings, and this happens at most once per parse.
fn contains_prefix_ignore_ascii_case(haystack: &[&str], needle: &str) -> bool {
    haystack
        .iter()
        .any(|x| starts_with_ignore_ascii_case(needle, x))
}

/// Pick the quirks mode for a DOCTYPE.
///
/// `name` is compared case-sensitively; the tokenizer has already lowercased
/// it. Identifiers are compared ignoring ASCII case.
pub fn classify(
    name: &str,
    public_id: Option<&str>,
    system_id: Option<&str>,
    force_quirks: bool,
) -> QuirksMode {
    let mode = match (public_id, system_id) {
        _ if force_quirks => Quirks,
        _ if name != "html" => Quirks,

        (Some(p), _) if contains_ignore_ascii_case(QUIRKY_PUBLIC_MATCHES, p) => Quirks,
        (_, Some(s)) if contains_ignore_ascii_case(QUIRKY_SYSTEM_MATCHES, s) => Quirks,

        (Some(p), _) if contains_prefix_ignore_ascii_case(QUIRKY_PUBLIC_PREFIXES, p) => Quirks,
        (Some(p), _) if contains_prefix_ignore_ascii_case(LIMITED_QUIRKY_PUBLIC_PREFIXES, p) => {
            LimitedQuirks
        },

        (Some(p), s) if contains_prefix_ignore_ascii_case(HTML4_PUBLIC_PREFIXES, p) => match s {
            None => Quirks,
            Some(_) => LimitedQuirks,
        },

        _ => NoQuirks,
    };
    debug!(
        "doctype {:?} public {:?} system {:?}: {:?}",
        name, public_id, system_id, mode
    );
    mode
}

/// Is this one of the DOCTYPEs a conforming document may use?
fn is_doctype_ok(doctype: &Doctype) -> bool {
    let name = doctype.name.as_deref();
    let public = doctype.public_id.as_deref();
    let system = doctype.system_id.as_deref();

    let has_system_id = system.is_some();

    if name != Some("html") {
        false
    } else if public.is_none() {
        !has_system_id || system == Some("about:legacy-compat")
    } else if public == Some("-//W3C//DTD HTML 4.0//EN") {
        !has_system_id || system == Some("http://www.w3.org/TR/REC-html40/strict.dtd")
    } else if public == Some("-//W3C//DTD HTML 4.01//EN") {
        !has_system_id || system == Some("http://www.w3.org/TR/html4/strict.dtd")
    } else if public == Some("-//W3C//DTD XHTML 1.0 Strict//EN") {
        system == Some("http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd")
    } else if public == Some("-//W3C//DTD XHTML 1.1//EN") {
        system == Some("http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd")
    } else {
        false
    }
}

/// Process a DOCTYPE token the way the "initial" insertion mode does.
///
/// Returns whether the DOCTYPE is a parse error, and the document's quirks
/// mode. An iframe srcdoc document is never in quirks mode unless the DOCTYPE
/// forces it or names something other than `html`.
pub fn doctype_error_and_quirks(doctype: &Doctype, iframe_srcdoc: bool) -> (bool, QuirksMode) {
    let err = !is_doctype_ok(doctype);
    let name = doctype.name.as_deref().unwrap_or("");

    let quirk = if iframe_srcdoc && !doctype.force_quirks && name == "html" {
        NoQuirks
    } else {
        doctype.quirks_mode()
    };

    (err, quirk)
}
