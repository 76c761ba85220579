//! Error types for configuration resolution.
//!
//! # Design
//! Request building has no failure path, so every error here comes out of
//! resolving client options. Missing required keys get their own variant
//! because callers usually want to tell the user which credential to set.

use thiserror::Error;

/// Errors returned while resolving a `Configuration`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required option was found neither in the explicit options nor in
    /// the `AMADEUS_*` environment.
    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),

    /// A typed option (ssl, port, log_level) could not be parsed.
    #[error("invalid value for {key}: {value:?}")]
    InvalidArgument { key: String, value: String },

    /// `hostname` does not name a host preset and no explicit `host` was given.
    #[error("unknown hostname: {0}")]
    UnknownHostname(String),
}
