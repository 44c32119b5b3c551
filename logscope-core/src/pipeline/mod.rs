//! Log Processing Pipeline
//!
//! Each line is read, decoded, checked against the time window, checked
//! against the field filter, and only then folded into the metrics. A line is
//! fully handled before the next one is read.
//!
//! A line that fails to decode is logged and skipped. A source that cannot
//! be opened or read is logged and the run moves on to the next source.
//!
//! The overall data processing architecture is:
//!
//! InputLocation
//! LineFramer
//! decode_line
//! TimeWindow
//! FieldMatcher
//! MetricsAggregator
//! Metrics

mod analyzer;
mod summary;

pub use analyzer::*;
pub use summary::*;
