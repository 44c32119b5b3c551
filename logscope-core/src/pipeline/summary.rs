use crate::event::DecodeError;
use crate::filter::FilterDiagnostics;
use crate::stats::Metrics;
use serde::Serialize;

/// What happened to a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Admitted,
    Malformed(DecodeError),
    OutsideWindow,
    Filtered,
}

/// Counters for one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub lines_read: u64,
    pub admitted: u64,
    pub malformed: u64,
    pub outside_window: u64,
    pub filtered_out: u64,
    pub failed_sources: Vec<String>,
}

impl RunSummary {
    pub(crate) fn record(&mut self, outcome: &LineOutcome) {
        self.lines_read += 1;
        match outcome {
            LineOutcome::Admitted => self.admitted += 1,
            LineOutcome::Malformed(_) => self.malformed += 1,
            LineOutcome::OutsideWindow => self.outside_window += 1,
            LineOutcome::Filtered => self.filtered_out += 1,
        }
    }
}

/// Result of a finished run.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub metrics: Metrics,
    pub summary: RunSummary,
    pub filter_diagnostics: Option<FilterDiagnostics>,
}
