//! Option resolution: explicit value, then `AMADEUS_*` environment, then default.
//!
//! # Design
//! `Validator` is stateless apart from the `Environment` it reads, so every
//! call recomputes its answer. The environment is a trait so tests resolve
//! against a `HashMap` snapshot instead of mutating the process env.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;
use crate::logging::Logger;

/// Prefix applied to the upper-cased option key to form its env variable.
pub const ENV_PREFIX: &str = "AMADEUS_";

/// Every key `Configuration` understands. Anything else triggers a warning.
pub const RECOGNIZED_OPTIONS: &[&str] = &[
    "client_id",
    "client_secret",
    "logger",
    "log_level",
    "hostname",
    "host",
    "ssl",
    "port",
    "custom_app_id",
    "custom_app_version",
    "http",
];

/// Explicit options passed by the caller.
///
/// Deserializes from a JSON-style object whose values may be strings,
/// booleans, numbers or null; scalars are kept in their string form and null
/// counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Options(BTreeMap<String, String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum OptionValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Null(()),
}

impl OptionValue {
    fn into_string(self) -> String {
        match self {
            OptionValue::Str(value) => value,
            OptionValue::Bool(value) => value.to_string(),
            OptionValue::Int(value) => value.to_string(),
            OptionValue::Float(value) => value.to_string(),
            OptionValue::Null(()) => String::new(),
        }
    }
}

impl<'de> Deserialize<'de> for Options {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, OptionValue>::deserialize(deserializer)?;
        Ok(raw.into_iter().map(|(key, value)| (key, value.into_string())).collect())
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Options(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Source of environment variables.
pub trait Environment {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Name of the environment variable consulted for `key`.
pub fn env_key(key: &str) -> String {
    format!("{ENV_PREFIX}{}", key.to_uppercase())
}

/// Resolves options against an environment.
#[derive(Debug, Clone, Default)]
pub struct Validator<E = SystemEnvironment> {
    env: E,
}

impl<E: Environment> Validator<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Explicit option, else `AMADEUS_<KEY>`, else `default`. Empty strings
    /// count as absent at both lookups.
    pub fn resolve_optional(&self, key: &str, options: &Options, default: Option<&str>) -> Option<String> {
        options
            .get(key)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .or_else(|| self.env.var(&env_key(key)).filter(|value| !value.is_empty()))
            .or_else(|| default.map(str::to_string))
    }

    pub fn resolve_required(&self, key: &str, options: &Options) -> Result<String, ConfigError> {
        self.resolve_optional(key, options, None)
            .ok_or_else(|| ConfigError::MissingRequiredArgument(key.to_string()))
    }

    /// Warn once per key in `options` that is not in `valid_keys`.
    pub fn warn_unrecognized(&self, options: &Options, valid_keys: &[&str], logger: &dyn Logger) {
        for key in options.keys().filter(|key| !valid_keys.contains(key)) {
            logger.warning(&format!("Unrecognized option: {key}"));
        }
    }
}
