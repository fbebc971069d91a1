use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    Up,
    Down,
}

impl ProbeStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            ProbeStatus::Up => "UP",
            ProbeStatus::Down => "DOWN",
        }
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single probe. Either `http_code` is present and `status` was
/// derived from it, or `error` describes a transport or configuration failure
/// and `http_code` is absent.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    /// The request made: method and URL.
    pub request: String,
    pub status: ProbeStatus,
    /// Round-trip time of the network call; zero when no call was made.
    pub latency: Duration,
    pub http_code: Option<u16>,
    pub error: Option<String>,
}

impl ProbeResult {
    pub fn latency_ms(&self) -> f64 {
        self.latency.as_secs_f64() * 1000.0
    }
}
