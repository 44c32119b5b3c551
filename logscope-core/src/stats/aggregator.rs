use crate::event::LogEvent;
use crate::stats::{Metrics, percentile};

/// Percentile of response sizes tracked by [`Metrics::percentile_95`].
pub const RESPONSE_SIZE_PERCENTILE: f64 = 95.0;

/// Owns the [`Metrics`] of one run and folds admitted events into it.
///
/// `finalize` consumes the aggregator, so no update can follow it.
#[derive(Debug, Clone)]
pub struct MetricsAggregator {
    metrics: Metrics,
}

impl MetricsAggregator {
    pub fn new(sources: Vec<String>) -> Self {
        Self {
            metrics: Metrics::new(sources),
        }
    }

    /// Folds one admitted event, in arrival order.
    ///
    /// The percentile is recomputed over the whole size history on every
    /// call. That is O(n log n) per event and is the defined behaviour; the
    /// selected index must stay reproducible.
    pub fn update(&mut self, event: &LogEvent) {
        let m = &mut self.metrics;

        m.total_requests += 1;

        if m.start.is_none_or(|start| event.timestamp < start) {
            m.start = Some(event.timestamp);
        }
        if m.end.is_none_or(|end| event.timestamp > end) {
            m.end = Some(event.timestamp);
        }

        m.total_response_size += u128::from(event.response_size);
        m.average_response_size = m.total_response_size as f64 / m.total_requests as f64;

        m.response_sizes.push(event.response_size);
        m.percentile_95 = percentile(&m.response_sizes, RESPONSE_SIZE_PERCENTILE);

        *m.resources.entry(event.path.clone()).or_insert(0) += 1;
        *m.status_codes.entry(event.status).or_insert(0) += 1;

        if !m.unique_clients.contains(&event.client) {
            m.unique_clients.insert(event.client.clone());
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Computes the request rate from the final time span and hands back the
    /// finished metrics.
    pub fn finalize(self) -> Metrics {
        let mut metrics = self.metrics;

        if let (Some(start), Some(end)) = (metrics.start, metrics.end) {
            let elapsed = end.signed_duration_since(start);
            let seconds =
                elapsed.num_seconds() as f64 + f64::from(elapsed.subsec_nanos()) / 1_000_000_000.0;

            if seconds > 0.0 {
                metrics.requests_per_second = metrics.total_requests as f64 / seconds;
            }
        }

        metrics
    }
}
