use serde::Deserialize;

/// Raw on-disk configuration for the checkpoint service.
/// Contains the base URL, the per-request timeout in milliseconds, and a list
/// of endpoint entries relative to the base URL.
#[derive(Debug, Clone, Deserialize)]
pub struct YamlConfig {
    /// Base URL all endpoint paths are joined onto.
    pub url: String,

    /// Per-request timeout in milliseconds. Bounded to 100..=30000.
    pub timeout: u64,

    /// Endpoints to probe, in the order results are reported.
    pub endpoints: Vec<EndpointEntry>,
}

/// A single endpoint entry in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointEntry {
    /// Path suffix joined onto the base URL. Must start with '/'.
    pub path: String,

    /// HTTP method for the probe. Defaults to GET.
    #[serde(default = "default_method")]
    pub method: String,

    /// Request body, sent for POST probes only.
    #[serde(default)]
    pub body: String,

    /// Content-Type header for POST probes.
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

fn default_method() -> String {
    "GET".to_string()
}

fn default_content_type() -> String {
    "text/plain".to_string()
}
