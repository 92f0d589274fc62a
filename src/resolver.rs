// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::{fmt, sync::Arc};

use tracing::trace;
use tzguard_memo::{primitive_memo, PrimitiveMemo};

/// Resolves candidate names against a time zone database.
pub trait ZoneResolver: Send + Sync {
    /// Resolve `name`, accepting canonical identifiers and legacy aliases.
    ///
    /// Returns the canonical identifier when `canonical` is set, `name`
    /// unchanged otherwise, and `None` when the name is not recognized.
    fn resolve(&self, name: &str, canonical: bool) -> Option<String>;
}

/// Resolver backed by the host zone table.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostResolver;

impl ZoneResolver for HostResolver {
    fn resolve(&self, name: &str, canonical: bool) -> Option<String> {
        let zone = tzguard_tz::lookup(name)?;
        trace!(name, zone = zone.name(), "Resolved time zone");
        if canonical {
            return Some(zone.canonical().name().to_string());
        }
        Some(name.to_string())
    }
}

impl<R: ZoneResolver + ?Sized> ZoneResolver for Arc<R> {
    fn resolve(&self, name: &str, canonical: bool) -> Option<String> {
        (**self).resolve(name, canonical)
    }
}

type ResolveFn = Box<dyn Fn(&str, bool) -> Option<String> + Send + Sync>;

/// A [`ZoneResolver`] memoized on `(name, canonical)`.
///
/// Names that fail to resolve are not cached and are looked up again on
/// every call.
pub struct TimeZoneAdapter {
    memo: PrimitiveMemo<ResolveFn, Option<String>>,
}

impl TimeZoneAdapter {
    pub fn new<R: ZoneResolver + 'static>(resolver: R) -> Self {
        let resolve: ResolveFn =
            Box::new(move |name: &str, canonical: bool| resolver.resolve(name, canonical));
        Self {
            memo: primitive_memo(resolve),
        }
    }

    pub fn resolve(&self, name: &str, canonical: bool) -> Option<String> {
        self.memo.call((name, canonical))
    }

    /// Number of resolutions held in the cache.
    pub fn cached(&self) -> usize {
        self.memo.len()
    }
}

impl Default for TimeZoneAdapter {
    fn default() -> Self {
        Self::new(HostResolver)
    }
}

impl fmt::Debug for TimeZoneAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeZoneAdapter")
            .field("cached", &self.memo.len())
            .finish()
    }
}
