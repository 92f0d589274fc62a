// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Compact IANA time zone name table.
//!
//! The table is generated at build time from chrono-tz, so no timezone data is
//! linked into the final binary beyond the identifiers themselves. Each
//! identifier knows its canonical zone: legacy aliases such as `US/Central`
//! resolve to `America/Chicago`, and the `Etc/UTC` family resolves to `UTC`.
//!
//! Lookups are case-insensitive (`us/central` finds `US/Central`) and run a
//! binary search over the sorted table without allocating.
//!
//! # Example
//!
//! ```
//! let zone = tzguard_tz::lookup("us/central").unwrap();
//! assert_eq!(zone.name(), "US/Central");
//! assert!(!zone.is_canonical());
//! assert_eq!(zone.canonical().name(), "America/Chicago");
//! ```

mod zone;

pub use zone::{canonical_names, lookup, lookup_exact, zone_names, zones, Zone, CANONICAL_NAMES};

#[cfg(test)]
mod tests;
