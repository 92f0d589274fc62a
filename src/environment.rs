// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::env;

use crate::{error::ConfigError, schema::Policy};

//log
pub const ENV_TZGUARD_LOG: &str = "TZGUARD_LOG";
pub const ENV_RUST_LOG: &str = "RUST_LOG";

//validation
pub const ENV_TZGUARD_POLICY: &str = "TZGUARD_POLICY";

/// Settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Policy used when none is given on the command line.
    pub policy: Policy,
    /// Log filter (`level` or `target=level`, comma separated); logging is
    /// disabled when unset.
    pub log_filter: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let policy = match lookup(ENV_TZGUARD_POLICY) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => Policy::default(),
        };
        let log_filter = lookup(ENV_TZGUARD_LOG).or_else(|| lookup(ENV_RUST_LOG));

        Ok(Self { policy, log_filter })
    }
}
