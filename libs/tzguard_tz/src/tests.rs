// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::zone::{canonical_names, lookup, lookup_exact, zone_names, zones};

#[test]
fn test_lookup_canonical() {
    let zone = lookup("America/Chicago").unwrap();
    assert_eq!(zone.name(), "America/Chicago");
    assert!(zone.is_canonical());
    assert_eq!(zone.canonical(), zone);
}

#[test]
fn test_lookup_alias() {
    let zone = lookup("US/Central").unwrap();
    assert_eq!(zone.name(), "US/Central");
    assert!(!zone.is_canonical());
    assert_eq!(zone.canonical().name(), "America/Chicago");

    // Asia/Calcutta is the pre-2008 spelling of Asia/Kolkata
    assert_eq!(lookup("Asia/Calcutta").unwrap().canonical().name(), "Asia/Kolkata");
}

#[test]
fn test_lookup_ignores_case() {
    let zone = lookup("us/central").unwrap();
    assert_eq!(zone.name(), "US/Central");
    assert_eq!(zone.canonical().name(), "America/Chicago");

    assert_eq!(lookup("AMERICA/NEW_YORK").unwrap().name(), "America/New_York");
    assert_eq!(lookup("europe/london").unwrap().name(), "Europe/London");
}

#[test]
fn test_lookup_exact() {
    assert!(lookup_exact("America/Chicago").is_some());
    assert!(lookup_exact("america/chicago").is_none());
}

#[test]
fn test_utc_family() {
    for name in ["UTC", "Etc/UTC", "Etc/GMT", "GMT", "Zulu", "Etc/Universal"] {
        let zone = lookup(name).unwrap();
        assert_eq!(zone.canonical().name(), "UTC", "{name}");
    }
    assert!(lookup("UTC").unwrap().is_canonical());
}

#[test]
fn test_fixed_offset_zones_are_canonical() {
    // Etc/GMT+5 is UTC-5 (note: Etc/GMT signs are inverted)
    let zone = lookup("Etc/GMT+5").unwrap();
    assert!(zone.is_canonical());
}

#[test]
fn test_invalid_zone() {
    assert!(lookup("nonsense").is_none());
    assert!(lookup("Invalid/Timezone").is_none());
    assert!(lookup("").is_none());
    assert!(lookup("America/Chicago ").is_none());
}

#[test]
fn test_canonical_names_sorted_and_canonical() {
    let names = canonical_names();
    assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(names.contains(&"America/Chicago"));
    assert!(names.contains(&"UTC"));
    assert!(!names.contains(&"US/Central"));
    assert!(!names.contains(&"Etc/UTC"));

    for name in names {
        assert!(lookup_exact(name).unwrap().is_canonical(), "{name}");
    }
}

#[test]
fn test_every_zone_resolves_to_canonical_name() {
    let canonical = canonical_names();
    for zone in zones() {
        let target = zone.canonical();
        assert!(target.is_canonical(), "{} -> {}", zone, target);
        assert!(canonical.binary_search(&target.name()).is_ok(), "{}", target);
    }
    assert_eq!(zone_names().count(), zones().len());
}
