pub mod batch;
pub mod probe;
pub mod result;
pub mod spec;

pub mod prelude {
    pub use super::batch::{build_client, run_batch};
    pub use super::probe::probe;
    pub use super::result::{ProbeResult, ProbeStatus};
    pub use super::spec::{EndpointSpec, ProbeConfig};
}

use std::fmt::Write;

/// Flatten an error and its source chain into a single line, so transport
/// failures carry the root cause ("connection refused", "dns error", ...)
/// instead of reqwest's outermost wrapper alone.
pub(crate) fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::report;

    #[test]
    fn report_joins_the_source_chain() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let outer = std::io::Error::new(std::io::ErrorKind::Other, inner);
        assert!(report(&outer).contains("refused"));
    }
}
