// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

const ERROR_SUFFIX: &str = "Refer to the latest IANA time zone database";

/// Rejection raised by a time zone validator.
///
/// The `Display` text is the human-readable message; the rejected input stays
/// available through [`ValidationError::input`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name is not a canonical identifier (strict policy).
    #[error("Non-canonical time zone name \"{0}\". {suffix}", suffix = ERROR_SUFFIX)]
    NonCanonical(String),
    /// The name could not be canonicalized (coercing policy).
    #[error("Invalid time zone name \"{0}\". {suffix}", suffix = ERROR_SUFFIX)]
    Invalid(String),
    /// The name could not be resolved at all (permissive policy).
    #[error("Invalid time zone name \"{0}\" (refer to IANA time zone database)")]
    Unrecognized(String),
}

impl ValidationError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        match self {
            Self::NonCanonical(input) | Self::Invalid(input) | Self::Unrecognized(input) => input,
        }
    }

    /// Issue code: `invalid_value` for failed transforms, `custom` for refinements.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Invalid(_) => "invalid_value",
            Self::NonCanonical(_) | Self::Unrecognized(_) => "custom",
        }
    }
}

/// Invalid configuration read from the environment or the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown validation policy \"{0}\", expected one of: strict, canonicalize, permissive")]
    UnknownPolicy(String),
    #[error("Invalid log level \"{level}\" in filter \"{filter}\"")]
    InvalidLogLevel { filter: String, level: String },
}
