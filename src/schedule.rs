use std::time::Duration;

use reqwest::Client;
use tokio::time::MissedTickBehavior;

use crate::http_probe::batch::run_batch;
use crate::http_probe::result::ProbeResult;
use crate::http_probe::spec::ProbeConfig;

/// Collects every probe result produced over a run and derives the summary
/// statistic at the end. Owned by the schedule loop; batches are appended
/// between ticks, never concurrently.
#[derive(Debug, Default)]
pub struct RunAccumulator {
    results: Vec<ProbeResult>,
}

impl RunAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, batch: Vec<ProbeResult>) {
        self.results.extend(batch);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn results(&self) -> &[ProbeResult] {
        &self.results
    }

    /// Arithmetic mean latency over every collected result, UP and DOWN
    /// alike. Zero-latency results (e.g. unsupported methods) count.
    pub fn mean_latency(&self) -> Option<Duration> {
        if self.results.is_empty() {
            return None;
        }
        let total: Duration = self.results.iter().map(|result| result.latency).sum();
        Some(total / self.results.len() as u32)
    }
}

/// Run `iterations` batches on a fixed tick. `on_tick` fires when the tick
/// does, before the batch is dispatched; `on_batch` receives each completed
/// batch before it is accumulated.
///
/// Batches never overlap: the loop awaits the current batch before the next
/// tick is considered, and ticks that fire mid-batch are absorbed rather than
/// queued.
pub async fn run<T, F>(
    client: &Client,
    config: &ProbeConfig,
    tick: Duration,
    iterations: u32,
    mut on_tick: T,
    mut on_batch: F,
) -> RunAccumulator
where
    T: FnMut(u32),
    F: FnMut(&[ProbeResult]),
{
    let mut accumulator = RunAccumulator::new();
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    for iteration in 0..iterations {
        ticker.tick().await;
        tracing::debug!(iteration, "tick");
        on_tick(iteration);

        let batch = run_batch(client, config).await;
        on_batch(&batch);
        accumulator.extend(batch);
    }

    accumulator
}
