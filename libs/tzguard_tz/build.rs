// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Build script that generates the zone name table from chrono-tz.
//!
//! This produces:
//! 1. Every resolvable zone identifier, sorted case-insensitively, each
//!    pointing at its canonical zone
//! 2. The sorted list of canonical identifiers

use std::collections::{HashMap, HashSet};
use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Upper bound on alias chains (`A -> B -> C`) in the links table.
const MAX_LINK_DEPTH: usize = 8;

/// A legacy alias and the zone it resolves to.
struct Link {
    target: String,
    alias: String,
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

    let links_path = Path::new(&manifest_dir).join("data").join("links");
    let links = parse_links(&fs::read_to_string(&links_path).unwrap());

    generate_zone_data(&out_dir, &links);

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=data/links");
}

/// Parse `Link TARGET ALIAS` lines, ignoring blank lines and `#` comments.
fn parse_links(text: &str) -> Vec<Link> {
    let mut links = Vec::new();

    for (number, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default();
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => {},
            ["Link", target, alias] => links.push(Link {
                target: target.to_string(),
                alias: alias.to_string(),
            }),
            _ => panic!("Malformed line {} in data/links: {:?}", number + 1, line),
        }
    }

    links
}

/// Generate the zone table.
fn generate_zone_data(out_dir: &str, links: &[Link]) {
    let path = Path::new(out_dir).join("zone_data.rs");
    let mut file = File::create(path).unwrap();

    let mut names: Vec<String> = chrono_tz::TZ_VARIANTS
        .iter()
        .map(|tz| tz.name().to_string())
        .collect();
    let mut known: HashSet<String> = names.iter().cloned().collect();

    let mut targets: HashMap<String, String> = HashMap::new();
    for link in links {
        if !known.contains(&link.target) {
            println!(
                "cargo:warning=link target {} is not a known zone, keeping {} as is",
                link.target, link.alias
            );
            continue;
        }
        // Aliases missing from chrono-tz are still accepted as long as the target exists
        if known.insert(link.alias.clone()) {
            names.push(link.alias.clone());
        }
        targets.insert(link.alias.clone(), link.target.clone());
    }

    // Sort by lowercase name for case-insensitive binary search
    names.sort_by_key(|name| name.to_ascii_lowercase());
    names.dedup();
    for pair in names.windows(2) {
        assert!(
            !pair[0].eq_ignore_ascii_case(&pair[1]),
            "Zone names {} and {} differ only by case",
            pair[0],
            pair[1]
        );
    }

    let index: HashMap<&str, usize> = names
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.as_str(), idx))
        .collect();

    writeln!(
        file,
        "/// All resolvable zone identifiers, sorted by their ASCII-lowercased name."
    )
    .unwrap();
    writeln!(file, "static ZONES: &[Zone] = &[").unwrap();
    for name in &names {
        let canonical = canonical_of(name, &targets);
        writeln!(
            file,
            "    Zone {{ name: {:?}, canonical: {} }},",
            name, index[canonical]
        )
        .unwrap();
    }
    writeln!(file, "];").unwrap();
    writeln!(file).unwrap();

    let mut canonical_names: Vec<&str> = names
        .iter()
        .map(String::as_str)
        .filter(|name| !targets.contains_key(*name))
        .collect();
    canonical_names.sort_unstable();

    writeln!(file, "/// Canonical zone identifiers, sorted alphabetically.").unwrap();
    writeln!(file, "pub static CANONICAL_NAMES: &[&str] = &[").unwrap();
    for name in canonical_names {
        writeln!(file, "    {:?},", name).unwrap();
    }
    writeln!(file, "];").unwrap();
}

/// Follow alias links until a canonical zone is reached.
fn canonical_of<'a>(name: &'a str, targets: &'a HashMap<String, String>) -> &'a str {
    let mut current = name;
    for _ in 0..MAX_LINK_DEPTH {
        match targets.get(current) {
            Some(next) => current = next,
            None => return current,
        }
    }
    panic!("Alias chain starting at {} is too deep", name);
}
