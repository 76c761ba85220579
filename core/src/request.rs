//! Turns resolved call parameters into an `HttpRequest` descriptor.
//!
//! # Design
//! `RequestSpec` carries every field the builder needs, already resolved.
//! `Request::new` builds the descriptor eagerly, so a `Request` value is
//! always complete. GET puts the encoded params in the query string; every
//! other verb sends them as a form-encoded body instead.

use serde::{Deserialize, Serialize};

use crate::http::{HttpMethod, HttpRequest};

/// Product name leading the User-Agent.
pub const PRODUCT: &str = "amadeus-rust";
/// Language name following the client version in the User-Agent.
pub const LANGUAGE: &str = "rust";

pub const ACCEPT_JSON: &str = "application/json";
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Everything needed to build one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    pub host: String,
    /// Resolved but never written into the URL.
    pub port: u16,
    pub ssl: bool,
    pub verb: HttpMethod,
    pub path: String,
    #[serde(default)]
    pub params: Vec<(String, String)>,
    #[serde(default)]
    pub bearer_token: Option<String>,
    pub client_version: String,
    pub language_version: String,
    #[serde(default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub app_version: Option<String>,
}

impl RequestSpec {
    pub fn scheme(&self) -> &'static str {
        if self.ssl {
            "https"
        } else {
            "http"
        }
    }

    /// `amadeus-rust/<client> rust/<language>[ <app_id>/<app_version>]`
    pub fn user_agent(&self) -> String {
        let mut user_agent = format!("{PRODUCT}/{} {LANGUAGE}/{}", self.client_version, self.language_version);
        if let Some(app_id) = self.app_id.as_deref().filter(|id| !id.is_empty()) {
            let app_version = self.app_version.as_deref().unwrap_or_default();
            user_agent.push_str(&format!(" {app_id}/{app_version}"));
        }
        user_agent
    }

    pub fn encoded_params(&self) -> String {
        encode_params(&self.params)
    }

    /// `scheme://host + path`, plus the query string for GET.
    pub fn full_url(&self) -> String {
        let mut url = format!("{}://{}{}", self.scheme(), self.host, self.path);
        if self.verb.is_get() {
            url.push('?');
            url.push_str(&self.encoded_params());
        }
        url
    }

    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![
            ("User-Agent".to_string(), self.user_agent()),
            ("Accept".to_string(), ACCEPT_JSON.to_string()),
        ];
        if self.verb == HttpMethod::Post {
            headers.push(("Content-Type".to_string(), FORM_URLENCODED.to_string()));
        }
        if let Some(token) = self.bearer_token.as_deref().filter(|token| !token.is_empty()) {
            headers.push(("Authorization".to_string(), token.to_string()));
        }
        headers
    }
}

/// Form-encode `params` in order (`application/x-www-form-urlencoded`).
pub fn encode_params(params: &[(String, String)]) -> String {
    let mut form = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        form.append_pair(key, value);
    }
    form.finish()
}

/// Build the descriptor for `spec`.
pub fn build(spec: &RequestSpec) -> HttpRequest {
    let body = (!spec.verb.is_get()).then(|| spec.encoded_params().into_bytes());
    let mut request = HttpRequest {
        method: spec.verb.clone(),
        url: spec.full_url(),
        headers: Vec::new(),
        body,
    };
    apply_headers(&mut request, spec.headers());
    request
}

fn apply_headers(request: &mut HttpRequest, headers: Vec<(String, String)>) {
    for (name, value) in headers {
        match request.headers.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(&name)) {
            Some(existing) => existing.1 = value,
            None => request.headers.push((name, value)),
        }
    }
}

/// A spec together with the request built from it.
#[derive(Debug, Clone)]
pub struct Request {
    spec: RequestSpec,
    http_request: HttpRequest,
}

impl Request {
    pub fn new(spec: RequestSpec) -> Self {
        let http_request = build(&spec);
        Self { spec, http_request }
    }

    pub fn spec(&self) -> &RequestSpec {
        &self.spec
    }

    pub fn http_request(&self) -> &HttpRequest {
        &self.http_request
    }

    pub fn into_http_request(self) -> HttpRequest {
        self.http_request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(verb: HttpMethod) -> RequestSpec {
        RequestSpec {
            host: "test.api.example.com".to_string(),
            port: 443,
            ssl: true,
            verb,
            path: "/v1/x".to_string(),
            params: vec![("a".to_string(), "1 2".to_string())],
            bearer_token: Some("tok".to_string()),
            client_version: "1.0".to_string(),
            language_version: "3.9".to_string(),
            app_id: None,
            app_version: None,
        }
    }

    #[test]
    fn get_request_matches_reference_example() {
        let req = build(&spec(HttpMethod::Get));
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://test.api.example.com/v1/x?a=1+2");
        assert_eq!(
            req.headers,
            vec![
                ("User-Agent".to_string(), "amadeus-rust/1.0 rust/3.9".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
                ("Authorization".to_string(), "tok".to_string()),
            ]
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn post_request_sends_form_body() {
        let req = build(&spec(HttpMethod::Post));
        assert_eq!(req.url, "https://test.api.example.com/v1/x");
        assert_eq!(req.body.as_deref(), Some(&b"a=1+2"[..]));
        assert_eq!(req.header("Content-Type"), Some(FORM_URLENCODED));
    }

    #[test]
    fn other_verbs_send_body_without_content_type() {
        for verb in [HttpMethod::Put, HttpMethod::Delete, HttpMethod::Other("get".to_string())] {
            let req = build(&spec(verb));
            assert_eq!(req.url, "https://test.api.example.com/v1/x");
            assert_eq!(req.body.as_deref(), Some(&b"a=1+2"[..]));
            assert_eq!(req.header("Content-Type"), None);
        }
    }

    #[test]
    fn port_is_never_part_of_the_url() {
        for port in [80, 443, 8080] {
            let mut s = spec(HttpMethod::Get);
            s.port = port;
            s.ssl = false;
            let req = build(&s);
            assert_eq!(req.url, "http://test.api.example.com/v1/x?a=1+2");
            assert!(!req.url.contains(&format!(":{port}")));
        }
    }

    #[test]
    fn get_without_params_keeps_trailing_question_mark() {
        let mut s = spec(HttpMethod::Get);
        s.params.clear();
        assert_eq!(build(&s).url, "https://test.api.example.com/v1/x?");
    }

    #[test]
    fn params_keep_insertion_order_and_escape_reserved() {
        let mut s = spec(HttpMethod::Get);
        s.params = vec![
            ("z".to_string(), "a&b=c".to_string()),
            ("a".to_string(), "é/ü".to_string()),
        ];
        assert_eq!(s.encoded_params(), "z=a%26b%3Dc&a=%C3%A9%2F%C3%BC");
    }

    #[test]
    fn missing_or_empty_token_omits_authorization() {
        let mut s = spec(HttpMethod::Get);
        s.bearer_token = None;
        assert_eq!(build(&s).header("Authorization"), None);
        s.bearer_token = Some(String::new());
        assert_eq!(build(&s).header("Authorization"), None);
    }

    #[test]
    fn token_is_sent_verbatim() {
        let mut s = spec(HttpMethod::Get);
        s.bearer_token = Some("Bearer abc123".to_string());
        assert_eq!(build(&s).header("Authorization"), Some("Bearer abc123"));
    }

    #[test]
    fn app_id_extends_user_agent() {
        let mut s = spec(HttpMethod::Get);
        s.app_id = Some("my-app".to_string());
        s.app_version = Some("2.1".to_string());
        assert_eq!(s.user_agent(), "amadeus-rust/1.0 rust/3.9 my-app/2.1");
    }

    #[test]
    fn empty_app_id_leaves_user_agent_alone() {
        let mut s = spec(HttpMethod::Get);
        s.app_id = Some(String::new());
        s.app_version = Some("2.1".to_string());
        assert_eq!(s.user_agent(), "amadeus-rust/1.0 rust/3.9");
    }

    #[test]
    fn app_id_without_version_renders_empty_version() {
        let mut s = spec(HttpMethod::Get);
        s.app_id = Some("my-app".to_string());
        assert!(s.user_agent().ends_with(" my-app/"));
    }

    #[test]
    fn applying_a_duplicate_header_replaces_the_first() {
        let mut req = build(&spec(HttpMethod::Get));
        apply_headers(
            &mut req,
            vec![
                ("accept".to_string(), "text/plain".to_string()),
                ("X-Trace".to_string(), "1".to_string()),
            ],
        );
        let accepts: Vec<_> = req
            .headers
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("Accept"))
            .collect();
        assert_eq!(accepts.len(), 1);
        assert_eq!(req.header("Accept"), Some("text/plain"));
        assert_eq!(req.header("X-Trace"), Some("1"));
        assert_eq!(req.headers.len(), 4);
    }

    #[test]
    fn request_holds_spec_and_built_descriptor() {
        let request = Request::new(spec(HttpMethod::Post));
        assert_eq!(request.spec().path, "/v1/x");
        assert_eq!(request.http_request().method, HttpMethod::Post);
        let http = request.into_http_request();
        assert_eq!(http.header("Accept"), Some("application/json"));
    }
}
