// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::thread;

use tzguard::{
    make_time_zone_validator, CanonicalRegistry, CanonicalTimezone, HostResolver, Policy,
    TimeZoneContext, TimeZoneSchemas, Timezone, ValidationError,
};

#[test]
fn test_canonical_schema() {
    let canonical = &TimeZoneSchemas::global().canonical;

    assert_eq!(canonical.parse("America/Chicago").unwrap(), "America/Chicago");
    assert_eq!(canonical.parse("UTC").unwrap(), "UTC");
    for input in ["US/Central", "us/central", "Etc/UTC", "nonsense", ""] {
        let err = canonical.parse(input).unwrap_err();
        assert_eq!(err, ValidationError::NonCanonical(input.to_string()));
        assert_eq!(
            err.to_string(),
            format!(
                "Non-canonical time zone name \"{input}\". Refer to the latest IANA time zone database"
            )
        );
    }
}

#[test]
fn test_coerced_canonical_schema() {
    let coerced = &TimeZoneSchemas::global().coerced_canonical;

    for input in ["America/Chicago", "US/Central", "us/central", "AMERICA/CHICAGO"] {
        assert_eq!(coerced.parse(input).unwrap(), "America/Chicago");
    }
    assert_eq!(coerced.parse("Etc/UTC").unwrap(), "UTC");
    assert_eq!(coerced.parse("Asia/Calcutta").unwrap(), "Asia/Kolkata");

    let err = coerced.parse("nonsense").unwrap_err();
    assert_eq!(err.code(), "invalid_value");
    assert_eq!(err.input(), "nonsense");
    assert_eq!(
        err.to_string(),
        "Invalid time zone name \"nonsense\". Refer to the latest IANA time zone database"
    );
}

#[test]
fn test_timezone_schema() {
    let timezone = &TimeZoneSchemas::global().timezone;

    for input in ["America/Chicago", "US/Central", "us/central", "america/chicago"] {
        assert_eq!(timezone.parse(input).unwrap(), input);
    }

    let err = timezone.parse("nonsense").unwrap_err();
    assert_eq!(err.code(), "custom");
    assert_eq!(
        err.to_string(),
        "Invalid time zone name \"nonsense\" (refer to IANA time zone database)"
    );
}

#[test]
fn test_branded_types() {
    let zone = CanonicalTimezone::parse("Europe/Paris").unwrap();
    assert_eq!(zone.to_string(), "Europe/Paris");
    assert!(zone.starts_with("Europe/"));

    assert_eq!(CanonicalTimezone::coerce("Europe/Kiev").unwrap(), "Europe/Kyiv");

    let zone = Timezone::parse("US/Pacific").unwrap();
    assert_eq!(zone, "US/Pacific");
    assert_eq!(zone.to_canonical().unwrap(), "America/Los_Angeles");

    let zone: Timezone = CanonicalTimezone::parse("Asia/Tokyo").unwrap().into();
    assert_eq!(zone.as_ref(), "Asia/Tokyo");
}

#[test]
fn test_custom_registry() {
    // Host resolution with a registry that only knows one canonical name
    let context = TimeZoneContext::new(CanonicalRegistry::from_names(["Europe/Paris"]), HostResolver);
    let strict = make_time_zone_validator(Policy::AssumeInvalid, &context);
    let permissive = make_time_zone_validator(Policy::KeepNonCanonical, &context);

    assert!(strict.is_valid("europe/paris"));
    assert!(!strict.is_valid("America/Chicago"));
    assert!(permissive.is_valid("America/Chicago"));
    assert_eq!(context.registry().len(), 1);
}

#[test]
fn test_schemas_across_threads() {
    let handles: Vec<_> = ["US/Central", "us/central", "America/Chicago", "US/Central"]
        .into_iter()
        .map(|input| {
            thread::spawn(move || TimeZoneSchemas::global().coerced_canonical.parse(input))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), "America/Chicago");
    }
}
