//! Client configuration resolved from explicit options and the environment.
//!
//! # Design
//! `Configuration::resolve` runs every key through the `Validator` so the
//! explicit → `AMADEUS_*` → default precedence is the same for all of them.
//! Typed values (ssl, port, log_level) are parsed after resolution.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::logging::{Logger, TracingLogger};
use crate::options::{Environment, Options, SystemEnvironment, Validator, RECOGNIZED_OPTIONS};

/// Symbolic hostnames and the API host each one stands for.
pub const HOSTS: &[(&str, &str)] = &[("test", "test.api.amadeus.com"), ("production", "api.amadeus.com")];

pub const DEFAULT_HOSTNAME: &str = "test";
pub const DEFAULT_PORT: u16 = 443;
pub const DEFAULT_SSL: bool = true;

/// Look up a host preset by its symbolic name.
pub fn preset_host(hostname: &str) -> Option<&'static str> {
    HOSTS
        .iter()
        .find(|(name, _)| *name == hostname)
        .map(|(_, host)| *host)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Silent => "off",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "silent" | "off" => Ok(LogLevel::Silent),
            _ => Err(invalid("log_level", s)),
        }
    }
}

/// Fully resolved client configuration.
#[derive(Clone)]
pub struct Configuration {
    pub client_id: String,
    pub client_secret: String,
    pub logger: Arc<dyn Logger>,
    pub log_level: LogLevel,
    pub hostname: String,
    pub host: String,
    pub ssl: bool,
    pub port: u16,
    pub custom_app_id: Option<String>,
    pub custom_app_version: Option<String>,
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("log_level", &self.log_level)
            .field("hostname", &self.hostname)
            .field("host", &self.host)
            .field("ssl", &self.ssl)
            .field("port", &self.port)
            .field("custom_app_id", &self.custom_app_id)
            .field("custom_app_version", &self.custom_app_version)
            .finish_non_exhaustive()
    }
}

impl Configuration {
    /// Resolve against the process environment with the default logger.
    pub fn from_options(options: &Options) -> Result<Self, ConfigError> {
        Self::resolve(options, SystemEnvironment, None)
    }

    pub fn resolve<E: Environment>(
        options: &Options,
        env: E,
        logger: Option<Arc<dyn Logger>>,
    ) -> Result<Self, ConfigError> {
        let validator = Validator::new(env);
        let logger = logger.unwrap_or_else(|| Arc::new(TracingLogger));

        validator.warn_unrecognized(options, RECOGNIZED_OPTIONS, logger.as_ref());

        let log_level = match validator.resolve_optional("log_level", options, None) {
            Some(level) => level.parse()?,
            None => LogLevel::default(),
        };

        let client_id = validator.resolve_required("client_id", options)?;
        let client_secret = validator.resolve_required("client_secret", options)?;

        let hostname = validator
            .resolve_optional("hostname", options, Some(DEFAULT_HOSTNAME))
            .unwrap_or_default();
        let host = match validator.resolve_optional("host", options, preset_host(&hostname)) {
            Some(host) => host,
            None => return Err(ConfigError::UnknownHostname(hostname)),
        };

        let ssl = match validator.resolve_optional("ssl", options, None) {
            Some(raw) => parse_bool("ssl", &raw)?,
            None => DEFAULT_SSL,
        };
        let port = match validator.resolve_optional("port", options, None) {
            Some(raw) => raw.parse::<u16>().map_err(|_| invalid("port", &raw))?,
            None => DEFAULT_PORT,
        };

        let custom_app_id = validator.resolve_optional("custom_app_id", options, None);
        let custom_app_version = validator.resolve_optional("custom_app_version", options, None);

        logger.debug(&format!("resolved host {host} (hostname {hostname})"));

        Ok(Self {
            client_id,
            client_secret,
            logger,
            log_level,
            hostname,
            host,
            ssl,
            port,
            custom_app_id,
            custom_app_version,
        })
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(invalid(key, raw)),
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidArgument {
        key: key.to_string(),
        value: value.to_string(),
    }
}
