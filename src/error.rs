use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while loading and validating the YAML configuration.
///
/// These are the only fatal errors in the program; once a `ProbeConfig`
/// exists, probe failures are reported as DOWN results instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse YAML config '{path}': {source}")]
    ParseYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Config must list at least one endpoint.")]
    NoEndpoints,
    #[error("Config timeout must be within {min}..={max} ms, got {got}.")]
    TimeoutOutOfRange { min: u64, max: u64, got: u64 },
    #[error("Endpoint path '{path}' must start with '/'.")]
    PathMissingSlash { path: String },
    #[error("Invalid endpoint URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Endpoint URL '{url}' has no scheme or host.")]
    UrlMissingSchemeOrHost { url: String },
}
