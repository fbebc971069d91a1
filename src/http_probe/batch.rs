use std::time::Duration;

use reqwest::Client;

use super::probe::probe;
use super::result::{ProbeResult, ProbeStatus};
use super::spec::ProbeConfig;

/// Build the shared HTTP client for a run. The timeout bounds every request
/// issued through it; connection pooling amortizes handshakes across batches.
///
/// # Errors
///
/// Returns the underlying [`reqwest::Error`] if the client cannot be built.
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("checkpoint/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Probe every endpoint in `config` concurrently and return one result per
/// endpoint, index-aligned with `config.endpoints`.
///
/// All probes are spawned up front and joined before returning, so the batch
/// takes roughly as long as its slowest probe. A failing probe never affects
/// its siblings; each slot resolves independently, bounded by the client
/// timeout.
pub async fn run_batch(client: &Client, config: &ProbeConfig) -> Vec<ProbeResult> {
    let mut handles = Vec::with_capacity(config.endpoints.len());

    for spec in &config.endpoints {
        let client = client.clone();
        let spec = spec.clone();
        handles.push(tokio::spawn(async move { probe(&client, &spec).await }));
    }

    let mut results = Vec::with_capacity(handles.len());
    for (spec, handle) in config.endpoints.iter().zip(handles) {
        match handle.await {
            Ok(result) => results.push(result),
            // A panicked probe task still has to fill its slot.
            Err(err) => results.push(ProbeResult {
                request: spec.label(),
                status: ProbeStatus::Down,
                latency: Duration::ZERO,
                http_code: None,
                error: Some(format!("probe task failed: {}", err)),
            }),
        }
    }

    tracing::debug!(results = results.len(), "batch complete");
    results
}
