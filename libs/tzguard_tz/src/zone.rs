// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::cmp::Ordering;
use std::fmt;

/// A resolvable zone identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zone {
    /// IANA spelling of the identifier (e.g., "America/Chicago")
    name: &'static str,
    /// Index of the canonical zone in ZONES
    canonical: u16,
}

impl Zone {
    /// Get the IANA name of this zone.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The zone this identifier canonicalizes to; `self` for canonical zones.
    pub fn canonical(&self) -> &'static Zone {
        &ZONES[self.canonical as usize]
    }

    pub fn is_canonical(&self) -> bool {
        self.canonical().name == self.name
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// Include the generated zone table
include!(concat!(env!("OUT_DIR"), "/zone_data.rs"));

/// Look up a zone by name, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<&'static Zone> {
    // Binary search since ZONES is sorted by lowercase name
    ZONES
        .binary_search_by(|zone| cmp_ignore_ascii_case(zone.name, name))
        .ok()
        .map(|idx| &ZONES[idx])
}

/// Look up a zone by its exact IANA spelling.
pub fn lookup_exact(name: &str) -> Option<&'static Zone> {
    lookup(name).filter(|zone| zone.name == name)
}

/// All resolvable zones, aliases included.
pub fn zones() -> &'static [Zone] {
    ZONES
}

/// All resolvable zone names, aliases included.
pub fn zone_names() -> impl Iterator<Item = &'static str> {
    ZONES.iter().map(|zone| zone.name)
}

/// List all canonical zone names.
pub fn canonical_names() -> &'static [&'static str] {
    CANONICAL_NAMES
}

fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}
