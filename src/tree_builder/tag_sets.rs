// Copyright 2014-2025 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Various sets of HTML tag names, and the namespaces they live in.

use std::fmt;

/// The `http://www.w3.org/1999/xhtml` namespace.
pub const NS_HTML: &str = "http://www.w3.org/1999/xhtml";
/// The MathML namespace.
pub const NS_MATHML: &str = "http://www.w3.org/1998/Math/MathML";
/// The SVG namespace.
pub const NS_SVG: &str = "http://www.w3.org/2000/svg";
/// The XLink namespace, for `xlink:*` attributes in foreign content.
pub const NS_XLINK: &str = "http://www.w3.org/1999/xlink";
/// The namespace bound to the `xml` prefix.
pub const NS_XML: &str = "http://www.w3.org/XML/1998/namespace";
/// The namespace bound to the `xmlns` prefix.
pub const NS_XMLNS: &str = "http://www.w3.org/2000/xmlns/";

/// A namespace an HTML parser can put an element or attribute in.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Debug)]
pub enum Namespace {
    /// HTML
    Html,
    /// MathML
    MathMl,
    /// SVG
    Svg,
    /// XLink
    XLink,
    /// XML
    Xml,
    /// XMLNS
    XmlNs,
}

impl Namespace {
    /// Look up a namespace by its exact URL.
    pub fn from_url(url: &str) -> Option<Namespace> {
        match url {
            NS_HTML => Some(Namespace::Html),
            NS_MATHML => Some(Namespace::MathMl),
            NS_SVG => Some(Namespace::Svg),
            NS_XLINK => Some(Namespace::XLink),
            NS_XML => Some(Namespace::Xml),
            NS_XMLNS => Some(Namespace::XmlNs),
            _ => None,
        }
    }

    /// The namespace URL.
    pub fn url(self) -> &'static str {
        match self {
            Namespace::Html => NS_HTML,
            Namespace::MathMl => NS_MATHML,
            Namespace::Svg => NS_SVG,
            Namespace::XLink => NS_XLINK,
            Namespace::Xml => NS_XML,
            Namespace::XmlNs => NS_XMLNS,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.url())
    }
}

/// Does an element with this name have special parsing rules?
///
/// SVG names are case-sensitive (`foreignObject`); the others are lowercase.
pub fn special_tag(ns: Namespace, local: &str) -> bool {
    match ns {
        Namespace::Html => match local {
            "address" | "applet" | "area" | "article" | "aside" | "base" | "basefont"
            | "bgsound" | "blockquote" | "body" | "br" | "button" | "caption" | "center"
            | "col" | "colgroup" | "dd" | "details" | "dir" | "div" | "dl" | "dt" | "embed"
            | "fieldset" | "figcaption" | "figure" | "footer" | "form" | "frame"
            | "frameset" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "head" | "header"
            | "hr" | "html" | "iframe" | "img" | "input" | "li" | "link" | "listing"
            | "main" | "marquee" | "menu" | "menuitem" | "meta" | "nav" | "noembed"
            | "noframes" | "noscript" | "object" | "ol" | "p" | "param" | "plaintext"
            | "pre" | "script" | "section" | "select" | "source" | "style" | "summary"
            | "table" | "tbody" | "td" | "template" | "textarea" | "tfoot" | "th"
            | "thead" | "title" | "tr" | "track" | "ul" | "wbr" | "xmp" => true,
            _ => false,
        },
        Namespace::MathMl => match local {
            "mi" | "mo" | "mn" | "ms" | "mtext" | "annotation-xml" => true,
            _ => false,
        },
        Namespace::Svg => match local {
            "foreignObject" | "desc" | "title" => true,
            _ => false,
        },
        _ => false,
    }
}

/// Is the element `local_name` in the namespace `ns_url` special?
///
/// Unknown namespaces hold no special elements.
pub fn is_special(ns_url: &str, local_name: &str) -> bool {
    Namespace::from_url(ns_url).is_some_and(|ns| special_tag(ns, local_name))
}
