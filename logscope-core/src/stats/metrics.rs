use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Statistics of one analysis run.
///
/// Mutated only through [`MetricsAggregator`](super::MetricsAggregator).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metrics {
    /// Input names, for reporting only.
    pub sources: Vec<String>,
    pub start: Option<DateTime<FixedOffset>>,
    pub end: Option<DateTime<FixedOffset>>,

    pub total_requests: u64,
    /// `u128` so summing `u64` sizes cannot overflow.
    pub total_response_size: u128,
    pub average_response_size: f64,

    /// Every admitted response size, in arrival order.
    #[serde(skip)]
    pub response_sizes: Vec<u64>,
    pub percentile_95: u64,

    pub resources: BTreeMap<String, u64>,
    pub status_codes: BTreeMap<u16, u64>,

    #[serde(skip)]
    pub unique_clients: BTreeSet<String>,

    /// Set once by `finalize`; stays `0` when the admitted events span no time.
    pub requests_per_second: f64,
}

impl Metrics {
    pub fn new(sources: Vec<String>) -> Self {
        Self {
            sources,
            ..Self::default()
        }
    }

    pub fn unique_client_count(&self) -> usize {
        self.unique_clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_requests == 0
    }
}
