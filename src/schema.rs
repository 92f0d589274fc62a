// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Time zone validation schemas.
//!
//! A [`TimeZoneValidator`] checks a candidate name against one of three
//! [`Policy`] values:
//!
//! | Policy | `America/Chicago` | `US/Central` | `us/central` | `nonsense` |
//! |--------|-------------------|--------------|--------------|------------|
//! | [`Policy::AssumeInvalid`] | `America/Chicago` | error | error | error |
//! | [`Policy::ChangeToCanonical`] | `America/Chicago` | `America/Chicago` | `America/Chicago` | error |
//! | [`Policy::KeepNonCanonical`] | `America/Chicago` | `US/Central` | `us/central` | error |
//!
//! Validators built from the same [`TimeZoneContext`] share one registry and
//! one memoized resolver.

use std::{fmt, str::FromStr, sync::Arc};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::{
    error::{ConfigError, ValidationError},
    registry::CanonicalRegistry,
    resolver::{TimeZoneAdapter, ZoneResolver},
};

/// How a validator treats names that are valid but not canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Policy {
    /// Accept canonical names only (case-insensitively), unchanged.
    AssumeInvalid,
    /// Accept any resolvable name and return its canonical form.
    #[default]
    ChangeToCanonical,
    /// Accept any resolvable name, unchanged.
    KeepNonCanonical,
}

impl Policy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::AssumeInvalid => "assume-invalid",
            Policy::ChangeToCanonical => "change-to-canonical",
            Policy::KeepNonCanonical => "keep-non-canonical",
        }
    }
}

impl FromStr for Policy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" | "assume-invalid" | "assumeinvalid" => Ok(Policy::AssumeInvalid),
            "canonicalize" | "coerce" | "change-to-canonical" | "changetocanonical" => {
                Ok(Policy::ChangeToCanonical)
            },
            "permissive" | "keep-non-canonical" | "keepnoncanonical" => {
                Ok(Policy::KeepNonCanonical)
            },
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared state behind validators: the canonical registry and the memoized
/// resolver.
#[derive(Debug, Clone)]
pub struct TimeZoneContext {
    registry: Arc<CanonicalRegistry>,
    adapter: Arc<TimeZoneAdapter>,
}

impl TimeZoneContext {
    pub fn new<R: ZoneResolver + 'static>(registry: CanonicalRegistry, resolver: R) -> Self {
        Self {
            registry: Arc::new(registry),
            adapter: Arc::new(TimeZoneAdapter::new(resolver)),
        }
    }

    /// Context backed by the host zone table.
    pub fn from_host() -> Self {
        Self {
            registry: Arc::new(CanonicalRegistry::from_host()),
            adapter: Arc::new(TimeZoneAdapter::default()),
        }
    }

    pub fn registry(&self) -> &CanonicalRegistry {
        &self.registry
    }

    pub fn adapter(&self) -> &TimeZoneAdapter {
        &self.adapter
    }
}

/// Validates time zone names under a single [`Policy`].
#[derive(Debug, Clone)]
pub struct TimeZoneValidator {
    policy: Policy,
    context: TimeZoneContext,
}

/// Build a validator for `policy` over `context`.
pub fn make_time_zone_validator(policy: Policy, context: &TimeZoneContext) -> TimeZoneValidator {
    debug!(%policy, "Created time zone validator");
    TimeZoneValidator {
        policy,
        context: context.clone(),
    }
}

impl TimeZoneValidator {
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Validate `input`, returning the (possibly canonicalized) name.
    pub fn parse(&self, input: &str) -> Result<String, ValidationError> {
        let result = match self.policy {
            Policy::AssumeInvalid => {
                if self.context.registry.contains_ignore_case(input) {
                    Ok(input.to_string())
                } else {
                    Err(ValidationError::NonCanonical(input.to_string()))
                }
            },
            Policy::ChangeToCanonical => self
                .context
                .adapter
                .resolve(input, true)
                .ok_or_else(|| ValidationError::Invalid(input.to_string())),
            Policy::KeepNonCanonical => {
                if self.context.registry.contains_lowercase(input)
                    || self.context.adapter.resolve(input, true).is_some()
                {
                    Ok(input.to_string())
                } else {
                    Err(ValidationError::Unrecognized(input.to_string()))
                }
            },
        };

        if let Err(err) = &result {
            debug!(policy = %self.policy, input, "{}", err);
        }
        result
    }

    pub fn is_valid(&self, input: &str) -> bool {
        self.parse(input).is_ok()
    }
}

/// The three validators over one shared context.
#[derive(Debug, Clone)]
pub struct TimeZoneSchemas {
    /// Strict: canonical names only.
    pub canonical: TimeZoneValidator,
    /// Coercing: any resolvable name, rewritten to canonical form.
    pub coerced_canonical: TimeZoneValidator,
    /// Permissive: any resolvable name, unchanged.
    pub timezone: TimeZoneValidator,
}

static GLOBAL_SCHEMAS: Lazy<TimeZoneSchemas> =
    Lazy::new(|| TimeZoneSchemas::new(&TimeZoneContext::from_host()));

impl TimeZoneSchemas {
    pub fn new(context: &TimeZoneContext) -> Self {
        Self {
            canonical: make_time_zone_validator(Policy::AssumeInvalid, context),
            coerced_canonical: make_time_zone_validator(Policy::ChangeToCanonical, context),
            timezone: make_time_zone_validator(Policy::KeepNonCanonical, context),
        }
    }

    /// Process-wide schemas backed by the host zone table, built on first use.
    pub fn global() -> &'static TimeZoneSchemas {
        &GLOBAL_SCHEMAS
    }

    pub fn for_policy(&self, policy: Policy) -> &TimeZoneValidator {
        match policy {
            Policy::AssumeInvalid => &self.canonical,
            Policy::ChangeToCanonical => &self.coerced_canonical,
            Policy::KeepNonCanonical => &self.timezone,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Synthetic database: one canonical zone and one alias.
    struct FakeResolver {
        calls: Arc<AtomicUsize>,
    }

    impl ZoneResolver for FakeResolver {
        fn resolve(&self, name: &str, canonical: bool) -> Option<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let target = match name.to_lowercase().as_str() {
                "test/zone" | "legacy/zone" => "Test/Zone",
                _ => return None,
            };
            Some(if canonical { target } else { name }.to_string())
        }
    }

    fn fake_context() -> (TimeZoneContext, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let context = TimeZoneContext::new(
            CanonicalRegistry::from_names(["Test/Zone"]),
            FakeResolver {
                calls: calls.clone(),
            },
        );
        (context, calls)
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("strict".parse::<Policy>().unwrap(), Policy::AssumeInvalid);
        assert_eq!(
            "Change-To-Canonical".parse::<Policy>().unwrap(),
            Policy::ChangeToCanonical
        );
        assert_eq!("coerce".parse::<Policy>().unwrap(), Policy::ChangeToCanonical);
        assert_eq!(
            "permissive".parse::<Policy>().unwrap(),
            Policy::KeepNonCanonical
        );
        assert_eq!(
            "loose".parse::<Policy>(),
            Err(ConfigError::UnknownPolicy("loose".into()))
        );
        for policy in [
            Policy::AssumeInvalid,
            Policy::ChangeToCanonical,
            Policy::KeepNonCanonical,
        ] {
            assert_eq!(policy.to_string().parse::<Policy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_strict_with_synthetic_registry() {
        let (context, calls) = fake_context();
        let validator = make_time_zone_validator(Policy::AssumeInvalid, &context);

        assert_eq!(validator.parse("Test/Zone").unwrap(), "Test/Zone");
        assert_eq!(validator.parse("test/zone").unwrap(), "test/zone");
        assert_eq!(
            validator.parse("Legacy/Zone"),
            Err(ValidationError::NonCanonical("Legacy/Zone".into()))
        );
        // Strict validation never consults the resolver
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_coercing_with_synthetic_resolver() {
        let (context, calls) = fake_context();
        let validator = make_time_zone_validator(Policy::ChangeToCanonical, &context);

        assert_eq!(validator.parse("Legacy/Zone").unwrap(), "Test/Zone");
        assert_eq!(validator.parse("Legacy/Zone").unwrap(), "Test/Zone");
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert_eq!(
            validator.parse("nonsense"),
            Err(ValidationError::Invalid("nonsense".into()))
        );
        assert_eq!(
            validator.parse("nonsense"),
            Err(ValidationError::Invalid("nonsense".into()))
        );
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_permissive_with_synthetic_resolver() {
        let (context, calls) = fake_context();
        let validator = make_time_zone_validator(Policy::KeepNonCanonical, &context);

        // Lowercase canonical names short-circuit on the registry
        assert_eq!(validator.parse("test/zone").unwrap(), "test/zone");
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(validator.parse("Legacy/Zone").unwrap(), "Legacy/Zone");
        assert_eq!(validator.parse("Test/Zone").unwrap(), "Test/Zone");
        assert_eq!(
            validator.parse("nonsense"),
            Err(ValidationError::Unrecognized("nonsense".into()))
        );
        assert!(!validator.is_valid("nonsense"));
    }

    #[test]
    fn test_schemas_share_adapter() {
        let (context, calls) = fake_context();
        let schemas = TimeZoneSchemas::new(&context);

        assert_eq!(schemas.coerced_canonical.parse("Legacy/Zone").unwrap(), "Test/Zone");
        // Same (name, canonical) key, served from the shared cache
        assert_eq!(schemas.timezone.parse("Legacy/Zone").unwrap(), "Legacy/Zone");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(context.adapter().cached(), 1);

        assert_eq!(
            schemas.for_policy(Policy::AssumeInvalid).policy(),
            Policy::AssumeInvalid
        );
    }
}
