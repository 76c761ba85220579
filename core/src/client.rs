//! Client facade: resolved configuration in, request descriptors out.
//!
//! # Design
//! `Client` holds a `Configuration` and nothing else. Every `build_*` call
//! derives a fresh `RequestSpec` from it and hands that to the request
//! builder. The caller executes the returned `HttpRequest`.

use crate::config::Configuration;
use crate::error::ConfigError;
use crate::http::{HttpMethod, HttpRequest};
use crate::options::Options;
use crate::request::{Request, RequestSpec};

/// Version reported as `amadeus-rust/<version>` in the User-Agent.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Compiler that built this crate, reported as `rust/<version>`.
pub const LANGUAGE_VERSION: &str = env!("RUSTC_VERSION");

#[derive(Debug, Clone)]
pub struct Client {
    config: Configuration,
}

impl Client {
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }

    /// Resolve options against the process environment and build a client.
    pub fn from_options(options: &Options) -> Result<Self, ConfigError> {
        Configuration::from_options(options).map(Self::new)
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn request_spec(
        &self,
        verb: HttpMethod,
        path: &str,
        params: &[(&str, &str)],
        bearer_token: Option<&str>,
    ) -> RequestSpec {
        RequestSpec {
            host: self.config.host.clone(),
            port: self.config.port,
            ssl: self.config.ssl,
            verb,
            path: path.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            bearer_token: bearer_token.map(str::to_string),
            client_version: CLIENT_VERSION.to_string(),
            language_version: LANGUAGE_VERSION.to_string(),
            app_id: self.config.custom_app_id.clone(),
            app_version: self.config.custom_app_version.clone(),
        }
    }

    pub fn build_request(
        &self,
        verb: HttpMethod,
        path: &str,
        params: &[(&str, &str)],
        bearer_token: Option<&str>,
    ) -> HttpRequest {
        let spec = self.request_spec(verb, path, params, bearer_token);
        self.config
            .logger
            .debug(&format!("building {} {}", spec.verb, spec.path));
        Request::new(spec).into_http_request()
    }

    pub fn build_get(&self, path: &str, params: &[(&str, &str)], bearer_token: Option<&str>) -> HttpRequest {
        self.build_request(HttpMethod::Get, path, params, bearer_token)
    }

    pub fn build_post(&self, path: &str, params: &[(&str, &str)], bearer_token: Option<&str>) -> HttpRequest {
        self.build_request(HttpMethod::Post, path, params, bearer_token)
    }
}
