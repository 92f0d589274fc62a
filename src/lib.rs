// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Time zone name validation.
//!
//! Three validators cover the usual needs of an application accepting time
//! zone names from users or configuration:
//!
//! - strict ([`Policy::AssumeInvalid`]): canonical IANA identifiers only,
//! - coercing ([`Policy::ChangeToCanonical`]): any resolvable name, rewritten
//!   to its canonical identifier,
//! - permissive ([`Policy::KeepNonCanonical`]): any resolvable name, kept as
//!   given.
//!
//! Resolution goes through a memoized adapter (see [`tzguard_memo`]) so
//! repeated lookups of the same name are served from a cache.
//!
//! ```
//! use tzguard::{CanonicalTimezone, Policy, TimeZoneSchemas};
//!
//! let schemas = TimeZoneSchemas::global();
//! assert_eq!(schemas.coerced_canonical.parse("US/Central").unwrap(), "America/Chicago");
//! assert!(schemas.for_policy(Policy::AssumeInvalid).parse("US/Central").is_err());
//!
//! let zone: CanonicalTimezone = "Europe/Paris".parse().unwrap();
//! assert_eq!(zone.as_str(), "Europe/Paris");
//! ```

pub mod environment;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod schema;
pub mod timezone;

pub use environment::Config;
pub use error::{ConfigError, ValidationError};
pub use registry::CanonicalRegistry;
pub use resolver::{HostResolver, TimeZoneAdapter, ZoneResolver};
pub use schema::{make_time_zone_validator, Policy, TimeZoneContext, TimeZoneSchemas, TimeZoneValidator};
pub use timezone::{CanonicalTimezone, Timezone};
pub use tzguard_memo::{primitive_memo, PrimitiveMemo};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
