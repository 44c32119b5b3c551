//! Running traffic statistics over admitted events.
//!
//! Data flow:
//!
//! LogEvent
//! MetricsAggregator::update
//! MetricsAggregator::finalize
//! Metrics

mod aggregator;
mod metrics;
mod percentile;
#[cfg(test)]
mod tests;

pub use aggregator::*;
pub use metrics::*;
pub use percentile::*;
