// Copyright 2014-2025 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

// A struct matching the entries in entities.json.
#[derive(Deserialize)]
struct NamedEntity {
    codepoints: Vec<u32>,
    characters: String,
}

fn main() {
    // Parse the list of named entities from https://html.spec.whatwg.org/entities.json
    let path = Path::new(&env::var("CARGO_MANIFEST_DIR").unwrap())
        .join("data")
        .join("entities.json");
    println!("cargo:rerun-if-changed={}", path.display());

    let json_file = BufReader::new(File::open(&path).expect("can't open entities.json"));
    let named_entities: BTreeMap<String, NamedEntity> =
        serde_json::from_reader(json_file).expect("entities.json does not match the WHATWG format");

    let mut table = BTreeMap::new();
    for (key, entity) in &named_entities {
        // Slice off the initial '&'
        let name = key
            .strip_prefix('&')
            .unwrap_or_else(|| panic!("entity {key:?} does not start with '&'"));
        assert!(
            (2..=32).contains(&name.len()),
            "entity name {name:?} has a bad length"
        );
        let (body, _) = name.split_at(name.len() - 1);
        assert!(
            body.bytes().all(|b| b.is_ascii_alphanumeric())
                && (name.ends_with(';') || name.bytes().all(|b| b.is_ascii_alphanumeric())),
            "entity name {name:?} contains characters outside [a-zA-Z0-9;]"
        );

        assert!(
            (1..=2).contains(&entity.codepoints.len()),
            "entity {name:?} must expand to one or two code points"
        );
        let chars: Vec<char> = entity
            .codepoints
            .iter()
            .map(|&cp| {
                char::from_u32(cp)
                    .unwrap_or_else(|| panic!("entity {name:?} maps to invalid code point {cp:#X}"))
            })
            .collect();
        assert_eq!(
            chars.iter().collect::<String>(),
            entity.characters,
            "entity {name:?} has inconsistent codepoints and characters"
        );

        table.insert(name, chars);
    }

    // The legacy names without a semicolon are aliases of terminated ones.
    for (name, chars) in &table {
        if !name.ends_with(';') {
            let terminated = format!("{name};");
            assert_eq!(
                table.get(terminated.as_str()),
                Some(chars),
                "legacy entity {name:?} has no matching {terminated:?}"
            );
        }
    }

    let mut phf_map = phf_codegen::Map::new();
    let mut lengths = BTreeSet::new();
    for (&name, chars) in &table {
        let second = chars.get(1).copied().unwrap_or('\0');
        phf_map.entry(
            name,
            &format!(
                "CharRef {{ chars: ['\\u{{{:x}}}', '\\u{{{:x}}}'], num_chars: {} }}",
                chars[0] as u32,
                second as u32,
                chars.len()
            ),
        );
        lengths.insert(name.len());
    }
    let lengths: Vec<usize> = lengths.into_iter().rev().collect();

    let out_path = Path::new(&env::var("OUT_DIR").unwrap()).join("named_entities.rs");
    let mut file = BufWriter::new(File::create(&out_path).unwrap());
    writeln!(
        &mut file,
        "pub(crate) static NAMED_ENTITIES: phf::Map<&'static str, CharRef> = {};",
        phf_map.build()
    )
    .unwrap();
    writeln!(
        &mut file,
        "pub(crate) static NAME_LENGTHS: [usize; {}] = {:?};",
        lengths.len(),
        lengths
    )
    .unwrap();
    writeln!(
        &mut file,
        "pub(crate) const NUM_NAMED_ENTITIES: usize = {};",
        table.len()
    )
    .unwrap();
}
