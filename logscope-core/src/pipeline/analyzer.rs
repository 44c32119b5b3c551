use crate::event::decode_line;
use crate::filter::{FieldMatcher, FilterSpec, TimeWindow};
use crate::pipeline::{Analysis, LineOutcome, RunSummary};
use crate::source::{InputLocation, LineFramer, SourceError};
use crate::stats::{Metrics, MetricsAggregator};
use std::io::BufRead;
use tracing::{error, info, warn};

/// Drives one analysis run: owns the aggregator, the window and the filter.
pub struct LogAnalyzer {
    window: TimeWindow,
    matcher: Option<FieldMatcher>,
    aggregator: MetricsAggregator,
    summary: RunSummary,
}

impl LogAnalyzer {
    pub fn new(sources: Vec<String>, window: TimeWindow, filter: Option<FilterSpec>) -> Self {
        Self {
            window,
            matcher: filter.map(FieldMatcher::new),
            aggregator: MetricsAggregator::new(sources),
            summary: RunSummary::default(),
        }
    }

    /// Runs every input in order and finalizes the metrics.
    pub fn analyze(
        inputs: &[InputLocation],
        window: TimeWindow,
        filter: Option<FilterSpec>,
    ) -> Analysis {
        let names = inputs.iter().map(ToString::to_string).collect();
        let mut analyzer = Self::new(names, window, filter);

        for input in inputs {
            analyzer.process_input(input);
        }

        analyzer.finish()
    }

    /// Opens and drains one input. Failures are logged and recorded, never
    /// propagated.
    pub fn process_input(&mut self, input: &InputLocation) {
        let name = input.to_string();
        info!(source = %name, "processing log source");

        let result = input
            .open()
            .and_then(|reader| self.process_reader(&name, reader));

        match result {
            Ok(lines) => {
                info!(source = %name, lines, "processed lines from log source");
            }
            Err(err) => {
                error!(source = %name, error = %err, "failed to process log source");
                self.summary.failed_sources.push(name);
            }
        }
    }

    /// Drains a byte stream line by line. Returns the number of lines read.
    ///
    /// A read error stops this stream; lines already handled stay counted.
    pub fn process_reader<R: BufRead>(&mut self, name: &str, reader: R) -> Result<u64, SourceError> {
        let mut read_error = None;
        let lines = LineFramer::new(reader).map_while(|line| match line {
            Ok(line) => Some(line),
            Err(e) => {
                read_error = Some(e);
                None
            }
        });

        let count = self.process_lines(lines);

        match read_error {
            Some(e) => Err(SourceError::Read {
                input: name.to_string(),
                source: e,
            }),
            None => Ok(count),
        }
    }

    /// Feeds already framed lines.
    pub fn process_lines<I, S>(&mut self, lines: I) -> u64
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut count = 0;
        for line in lines {
            self.process_line(line.as_ref());
            count += 1;
        }
        count
    }

    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        let outcome = self.admit(line);
        self.summary.record(&outcome);
        outcome
    }

    fn admit(&mut self, line: &str) -> LineOutcome {
        let event = match decode_line(line) {
            Ok(event) => event,
            Err(err) => {
                warn!(line, kind = err.kind(), error = %err, "failed to decode log line");
                return LineOutcome::Malformed(err);
            }
        };

        if !self.window.contains(&event.timestamp) {
            return LineOutcome::OutsideWindow;
        }

        if let Some(matcher) = self.matcher.as_mut() {
            if !matcher.matches(&event) {
                return LineOutcome::Filtered;
            }
        }

        self.aggregator.update(&event);
        LineOutcome::Admitted
    }

    pub fn metrics(&self) -> &Metrics {
        self.aggregator.metrics()
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Finalizes the metrics. Nothing can be fed after this.
    pub fn finish(self) -> Analysis {
        Analysis {
            metrics: self.aggregator.finalize(),
            summary: self.summary,
            filter_diagnostics: self.matcher.map(|m| m.diagnostics().clone()),
        }
    }
}
