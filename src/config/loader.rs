use std::path::Path;
use std::time::Duration;

use url::Url;

use super::model::YamlConfig;
use crate::error::ConfigError;
use crate::http_probe::spec::{EndpointSpec, ProbeConfig};

pub const MIN_TIMEOUT_MS: u64 = 100;
pub const MAX_TIMEOUT_MS: u64 = 30_000;

/// Load the YAML config file at `path` and resolve it into a validated
/// [`ProbeConfig`]. The probe engine never sees a config that failed here.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file cannot be read, the YAML does not
/// parse, or validation of the resolved endpoints fails.
pub fn load(path: &Path) -> Result<ProbeConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;

    let yaml: YamlConfig =
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::ParseYaml {
            path: path.to_path_buf(),
            source,
        })?;

    resolve(&yaml)
}

/// Resolve a parsed [`YamlConfig`] into a [`ProbeConfig`]: bounds-check the
/// timeout, join every endpoint path onto the base URL, and verify each
/// resulting URL is absolute with a host.
///
/// # Errors
///
/// Returns a [`ConfigError`] describing the first constraint violation.
pub fn resolve(yaml: &YamlConfig) -> Result<ProbeConfig, ConfigError> {
    if yaml.endpoints.is_empty() {
        return Err(ConfigError::NoEndpoints);
    }
    if !(MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&yaml.timeout) {
        return Err(ConfigError::TimeoutOutOfRange {
            min: MIN_TIMEOUT_MS,
            max: MAX_TIMEOUT_MS,
            got: yaml.timeout,
        });
    }

    let base = yaml.url.trim_end_matches('/');
    let mut endpoints = Vec::with_capacity(yaml.endpoints.len());

    for entry in &yaml.endpoints {
        if !entry.path.starts_with('/') {
            return Err(ConfigError::PathMissingSlash {
                path: entry.path.clone(),
            });
        }

        let joined = format!("{}{}", base, entry.path);
        let url = Url::parse(&joined).map_err(|source| ConfigError::InvalidUrl {
            url: joined.clone(),
            source,
        })?;
        if url.scheme().is_empty() || url.host_str().is_none_or(str::is_empty) {
            return Err(ConfigError::UrlMissingSchemeOrHost { url: joined });
        }

        endpoints.push(EndpointSpec {
            url,
            method: entry.method.clone(),
            body: entry.body.clone(),
            content_type: entry.content_type.clone(),
        });
    }

    Ok(ProbeConfig {
        endpoints,
        timeout: Duration::from_millis(yaml.timeout),
    })
}
