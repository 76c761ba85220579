//! Request-construction core for the Amadeus REST API client.
//!
//! # Overview
//! Resolves client configuration from explicit options, `AMADEUS_*`
//! environment variables and defaults, then builds `HttpRequest` values
//! without touching the network (host-does-IO pattern). The caller executes
//! the actual HTTP round-trip, keeping the core deterministic and testable.
//!
//! # Design
//! - `Validator` resolves individual options; `Configuration` applies it to
//!   every recognized key and warns about the rest.
//! - `Request` turns a resolved `RequestSpec` into an `HttpRequest`. GET puts
//!   params in the query string, everything else sends a form body.
//! - Warnings go through an injected `Logger`; the default forwards to
//!   `tracing`.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod options;
pub mod request;

pub use client::Client;
pub use config::{Configuration, LogLevel};
pub use error::ConfigError;
pub use http::{HttpMethod, HttpRequest};
pub use logging::{init_logging, Logger, TracingLogger};
pub use options::{Environment, Options, SystemEnvironment, Validator};
pub use request::{Request, RequestSpec};
