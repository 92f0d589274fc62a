// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::collections::HashSet;

use tracing::debug;

/// Set of canonical IANA identifiers, stored lowercased.
///
/// Built once (from the host zone table or from an explicit list) and shared
/// read-only between validators.
#[derive(Debug, Clone, Default)]
pub struct CanonicalRegistry {
    names: HashSet<String>,
}

impl CanonicalRegistry {
    /// Registry of the canonical identifiers known to the host zone table.
    pub fn from_host() -> Self {
        let registry = Self::from_names(tzguard_tz::canonical_names().iter().copied());
        debug!(count = registry.len(), "Loaded canonical time zone names");
        registry
    }

    /// Registry of an explicit set of canonical identifiers.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| name.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Case-insensitive membership.
    pub fn contains_ignore_case(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    /// Membership of `name` as given. Only matches when `name` is already
    /// lowercase, since the registry stores lowercased identifiers.
    pub fn contains_lowercase(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_registry() {
        let registry = CanonicalRegistry::from_host();
        assert!(!registry.is_empty());
        assert!(registry.contains_ignore_case("America/Chicago"));
        assert!(registry.contains_ignore_case("AMERICA/CHICAGO"));
        assert!(!registry.contains_ignore_case("US/Central"));
        assert!(!registry.contains_ignore_case("nonsense"));
    }

    #[test]
    fn test_lowercase_membership() {
        let registry = CanonicalRegistry::from_names(["Europe/Paris"]);
        assert!(registry.contains_lowercase("europe/paris"));
        assert!(!registry.contains_lowercase("Europe/Paris"));
        assert!(registry.contains_ignore_case("Europe/Paris"));
        assert_eq!(registry.len(), 1);
    }
}
