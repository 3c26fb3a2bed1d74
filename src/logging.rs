// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Configures log levels and output format via tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured logging setup for hosts embedding the core.
//!
//! The core itself only emits `tracing` events; installing a subscriber is
//! the embedding application's choice. This module provides the standard
//! setup used by tests and demo binaries.

use anyhow::Result;
use std::env;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
}

/// Log output format options
#[derive(Debug, Clone)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format: LogFormat::Pretty,
            include_location: false,
        }
    }
}

/// Initialize the global tracing subscriber from a [`LoggingConfig`].
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed or the level
/// string does not parse as an `EnvFilter` directive.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.level)?;

    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_file(config.include_location)
                .with_line_number(config.include_location);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()?;
        }
        // Human-readable default formatter; the compiled feature set has no
        // ANSI styling, so "pretty" is the full (non-compact) layout.
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_target(true)
                .with_file(config.include_location)
                .with_line_number(config.include_location);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()?;
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_file(config.include_location)
                .with_line_number(config.include_location);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()?;
        }
    }

    Ok(())
}

/// Initialize logging with defaults, ignoring an already-installed subscriber.
///
/// Used by tests, where multiple test binaries may race to install.
pub fn init_logging_for_tests() {
    let _ = init_logging(&LoggingConfig {
        level: env::var("RUST_LOG").unwrap_or_else(|_| "debug".into()),
        format: LogFormat::Compact,
        include_location: false,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test installs the global subscriber for this binary; every format
    // variant goes through the same layer construction path.
    #[test]
    fn test_pretty_format_initializes() {
        let result = init_logging(&LoggingConfig {
            level: "debug".to_owned(),
            format: LogFormat::Pretty,
            include_location: true,
        });
        assert!(result.is_ok());
    }
}
