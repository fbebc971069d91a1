use std::fmt::Write;
use std::time::Duration;

use crate::http_probe::result::ProbeResult;

fn to_fixed_width(input: &str, width: usize) -> String {
    use unicode_truncate::UnicodeTruncateStr;

    let (truncated, _) = input.unicode_truncate(width);
    format!("{:<width$}", truncated, width = width)
}

pub fn format_latency(latency: Duration) -> String {
    format!("{:.2}ms", latency.as_secs_f64() * 1000.0)
}

/// Render one batch as a fixed-width table: request label, status, latency,
/// HTTP code (blank if absent), error (blank if none).
pub fn render_table(results: &[ProbeResult]) -> String {
    let mut out = String::new();
    out.push_str(&"-".repeat(100));
    out.push('\n');

    for result in results {
        let code = result
            .http_code
            .map(|code| code.to_string())
            .unwrap_or_default();
        let error = result.error.as_deref().unwrap_or("");

        let _ = writeln!(
            out,
            "{} {} {} {} {}",
            to_fixed_width(&result.request, 60),
            to_fixed_width(result.status.as_str(), 8),
            to_fixed_width(&format_latency(result.latency), 12),
            to_fixed_width(&code, 8),
            error
        );
    }

    out
}

pub fn render_summary(mean: Option<Duration>) -> String {
    match mean {
        Some(avg) => format!("Summary: Average latency: {}", format_latency(avg)),
        None => "Summary: No results to calculate average latency.".to_string(),
    }
}
