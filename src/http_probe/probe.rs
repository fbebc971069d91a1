use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use super::report;
use super::result::{ProbeResult, ProbeStatus};
use super::spec::EndpointSpec;

/// Probe a single endpoint: one request, one result, no retries.
///
/// Latency covers the window from dispatching the request until the response
/// head (or the failure) arrives. Request construction and body draining are
/// excluded. Unsupported methods never reach the network and report zero
/// latency.
pub async fn probe(client: &Client, spec: &EndpointSpec) -> ProbeResult {
    let request = spec.label();

    let builder = match spec.method.to_uppercase().as_str() {
        "GET" => client.get(spec.url.clone()),
        "POST" => client
            .post(spec.url.clone())
            .header(CONTENT_TYPE, spec.content_type.clone())
            .body(spec.body.clone()),
        other => {
            return ProbeResult {
                request,
                status: ProbeStatus::Down,
                latency: Duration::ZERO,
                http_code: None,
                error: Some(format!("unsupported method: {}", other)),
            };
        }
    };

    let start = Instant::now();
    let sent = builder.send().await;
    let latency = start.elapsed();

    match sent {
        Ok(response) => {
            let code = response.status().as_u16();
            // Drain after the clock stops so the pooled connection is
            // returned clean rather than dropped mid-body.
            let _ = response.bytes().await;

            if (200..400).contains(&code) {
                ProbeResult {
                    request,
                    status: ProbeStatus::Up,
                    latency,
                    http_code: Some(code),
                    error: None,
                }
            } else {
                ProbeResult {
                    request,
                    status: ProbeStatus::Down,
                    latency,
                    http_code: Some(code),
                    error: Some(format!("HTTP {}", code)),
                }
            }
        }
        Err(err) => {
            tracing::debug!(request = %request, error = %err, "probe transport failure");
            ProbeResult {
                request,
                status: ProbeStatus::Down,
                latency,
                http_code: None,
                error: Some(report(&err)),
            }
        }
    }
}
