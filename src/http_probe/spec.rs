use std::time::Duration;

use url::Url;

/// One endpoint to probe. Built by the config loader, read-only afterwards.
#[derive(Debug, Clone)]
pub struct EndpointSpec {
    /// Absolute URL of the endpoint. The loader guarantees scheme and host.
    pub url: Url,

    /// HTTP method, matched case-insensitively at probe time. GET and POST
    /// are supported; anything else yields an immediate DOWN result.
    pub method: String,

    /// Request body, used for POST probes.
    pub body: String,

    /// Content-Type header, used for POST probes.
    pub content_type: String,
}

impl EndpointSpec {
    /// Display label for result tables, e.g. `GET https://example.com/health`.
    pub fn label(&self) -> String {
        format!("{} {}", self.method.to_uppercase(), self.url)
    }
}

/// A validated batch configuration: the ordered endpoints and the shared
/// per-request timeout.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub endpoints: Vec<EndpointSpec>,
    pub timeout: Duration,
}
