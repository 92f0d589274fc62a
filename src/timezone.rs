// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Validated time zone name types.
//!
//! Values of these types can only be produced by a successful validation, so
//! holding one is proof the name was checked.

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::ValidationError,
    schema::{TimeZoneSchemas, TimeZoneValidator},
};

macro_rules! validated_name {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }
    };
}

validated_name!(
    /// A canonical IANA identifier, e.g. `America/Chicago`.
    CanonicalTimezone
);

validated_name!(
    /// Any resolvable time zone name, canonical or alias, as it was given.
    Timezone
);

impl CanonicalTimezone {
    /// Accept canonical names only.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Self::parse_with(&TimeZoneSchemas::global().canonical, input)
    }

    /// Accept any resolvable name and rewrite it to its canonical form.
    pub fn coerce(input: &str) -> Result<Self, ValidationError> {
        Self::parse_with(&TimeZoneSchemas::global().coerced_canonical, input)
    }

    /// Validate with an explicit validator, e.g. one over a custom registry.
    pub fn parse_with(validator: &TimeZoneValidator, input: &str) -> Result<Self, ValidationError> {
        validator.parse(input).map(Self)
    }
}

impl Timezone {
    /// Accept any resolvable name, unchanged.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Self::parse_with(&TimeZoneSchemas::global().timezone, input)
    }

    pub fn parse_with(validator: &TimeZoneValidator, input: &str) -> Result<Self, ValidationError> {
        validator.parse(input).map(Self)
    }

    /// Canonical form of this name.
    pub fn to_canonical(&self) -> Result<CanonicalTimezone, ValidationError> {
        CanonicalTimezone::coerce(&self.0)
    }
}

impl From<CanonicalTimezone> for Timezone {
    fn from(value: CanonicalTimezone) -> Self {
        Timezone(value.0)
    }
}

impl FromStr for CanonicalTimezone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromStr for Timezone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for CanonicalTimezone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(de::Error::custom)
    }
}

/// Deserialize any resolvable name into its canonical form.
///
/// Use with `#[serde(deserialize_with = "tzguard::timezone::deserialize_coerced")]`.
pub fn deserialize_coerced<'de, D>(deserializer: D) -> Result<CanonicalTimezone, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    CanonicalTimezone::coerce(&value).map_err(de::Error::custom)
}
