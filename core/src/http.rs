//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe an outgoing HTTP request as plain data. The core crate
//! builds `HttpRequest` values without ever touching the network; the caller
//! (host) owns the transport and is responsible for executing them.
//!
//! All fields use owned types (`String`, `Vec`) so a descriptor can be handed
//! to any transport without lifetime concerns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP method for a request.
///
/// Verbs the builder does not know by name are kept verbatim in `Other` and
/// take the same path as every other non-GET verb.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Other(String),
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Other(verb) => verb,
        }
    }

    pub fn is_get(&self) -> bool {
        *self == HttpMethod::Get
    }
}

impl From<&str> for HttpMethod {
    fn from(verb: &str) -> Self {
        match verb {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "PATCH" => HttpMethod::Patch,
            "DELETE" => HttpMethod::Delete,
            other => HttpMethod::Other(other.to_string()),
        }
    }
}

impl From<String> for HttpMethod {
    fn from(verb: String) -> Self {
        HttpMethod::from(verb.as_str())
    }
}

impl From<HttpMethod> for String {
    fn from(method: HttpMethod) -> Self {
        method.as_str().to_string()
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Built by `Request::new` (or `Client::build_*`). The caller is responsible
/// for executing it against the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
