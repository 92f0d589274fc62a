// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::fmt::Write;
use std::{fmt, sync::atomic::AtomicUsize};

use tracing::Level;
use tracing::{field::Visit, Id, Subscriber};
use tracing_core::Field;
use tzguard::error::ConfigError;

pub struct StringVisitor<'a> {
    string: &'a mut String,
}
impl<'a> StringVisitor<'a> {
    pub(crate) fn new(string: &'a mut String) -> Self {
        StringVisitor { string }
    }
}

impl Visit for StringVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        // Writing to a String cannot fail
        if field.name() == "message" {
            let _ = write!(self.string, "{value:?} ");
        } else {
            let _ = write!(self.string, "{} = {:?}; ", field.name(), value);
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct LogFilter {
    target: Option<String>,
    level: Option<Level>,
}

/// Subscriber printing events to stderr, filtered by `level`,
/// `target` or `target=level` items separated by commas.
#[derive(Debug)]
pub struct MinimalTracer {
    filters: Vec<LogFilter>,
}

fn string_to_level(string: &str) -> Option<Level> {
    match string.to_lowercase().as_str() {
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "warn" | "warning" => Some(Level::WARN),
        "trace" => Some(Level::TRACE),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

impl MinimalTracer {
    pub fn parse(filter: &str) -> Result<Self, ConfigError> {
        let mut filters: Vec<LogFilter> = Vec::with_capacity(10);
        for item in filter.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            let log_filter = match item.split_once('=') {
                Some((target, level)) => LogFilter {
                    target: Some(target.to_string()),
                    level: Some(string_to_level(level).ok_or_else(|| {
                        ConfigError::InvalidLogLevel {
                            filter: filter.to_string(),
                            level: level.to_string(),
                        }
                    })?),
                },
                None => match string_to_level(item) {
                    Some(level) => LogFilter {
                        target: None,
                        level: Some(level),
                    },
                    None => LogFilter {
                        target: Some(item.to_string()),
                        level: None,
                    },
                },
            };
            filters.push(log_filter);
        }
        Ok(MinimalTracer { filters })
    }

    /// Install the tracer as the global subscriber. Logging stays disabled
    /// when no filter is configured.
    pub fn register(filter: Option<&str>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let Some(filter) = filter else {
            return Ok(());
        };
        tracing::subscriber::set_global_default(Self::parse(filter)?)?;
        Ok(())
    }

    fn matches(&self, level: &Level, target: &str) -> bool {
        if self.filters.is_empty() {
            return true;
        }
        self.filters.iter().any(|filter| {
            let level_matches = filter.level.as_ref().map_or(true, |max| level <= max);
            let target_matches = filter
                .target
                .as_deref()
                .map_or(true, |prefix| target.starts_with(prefix));
            level_matches && target_matches
        })
    }
}

static AUTO_ID: AtomicUsize = AtomicUsize::new(1);

impl Subscriber for MinimalTracer {
    fn enabled(&self, metadata: &tracing::Metadata<'_>) -> bool {
        self.matches(metadata.level(), metadata.target())
    }

    fn new_span(&self, _span: &tracing_core::span::Attributes<'_>) -> tracing_core::span::Id {
        Id::from_u64(AUTO_ID.fetch_add(1, std::sync::atomic::Ordering::Relaxed) as u64)
    }

    fn record(&self, _span: &tracing_core::span::Id, _values: &tracing_core::span::Record<'_>) {}

    fn record_follows_from(
        &self,
        _span: &tracing_core::span::Id,
        _follows: &tracing_core::span::Id,
    ) {
    }

    fn event(&self, event: &tracing::Event<'_>) {
        let metadata = event.metadata();

        let level = metadata.level();
        let target = metadata.target();

        let mut text = String::new();

        let mut visitor = StringVisitor::new(&mut text);
        event.record(&mut visitor);

        eprintln!("{level} {target}: {text}");
    }

    fn enter(&self, _span: &tracing_core::span::Id) {}

    fn exit(&self, _span: &tracing_core::span::Id) {}
}
