use crate::report::{ReportError, ReportFormat};
use crate::stats::Metrics;
use chrono::{DateTime, FixedOffset};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::collections::BTreeMap;

const DATE_LAYOUT: &str = "%d.%m.%Y";
const GENERATED_LAYOUT: &str = "%d.%m.%Y %H:%M:%S";

/// Renders a finished [`Metrics`] value.
///
/// The generation time is passed in rather than read from the clock so the
/// same metrics always render to the same text.
pub struct ReportFormatter<'a> {
    metrics: &'a Metrics,
    generated_at: DateTime<FixedOffset>,
}

impl<'a> ReportFormatter<'a> {
    pub fn new(metrics: &'a Metrics, generated_at: DateTime<FixedOffset>) -> Self {
        Self {
            metrics,
            generated_at,
        }
    }

    /// `colored` only affects the console format.
    pub fn render(&self, format: ReportFormat, colored: bool) -> Result<String, ReportError> {
        Ok(match format {
            ReportFormat::Console => self.render_console(colored),
            ReportFormat::Markdown => self.render_markdown(),
            ReportFormat::Adoc => self.render_adoc(),
            ReportFormat::Json => self.render_json()?,
        })
    }

    pub fn render_console(&self, colored: bool) -> String {
        let m = self.metrics;
        let heading = |title: &str| {
            if colored {
                title.bold().to_string()
            } else {
                title.to_string()
            }
        };
        let mut out = String::new();

        out.push_str(&format!(
            "{}\n\n",
            heading(&format!(
                "=== Log Analysis Report (Created: {}) ===",
                self.generated_at.format(GENERATED_LAYOUT)
            ))
        ));

        out.push_str(&format!("{}\n", heading("General Information:")));
        out.push_str(&format!(" {:<25} {:<15}\n", "Metric", "Value"));
        out.push_str(&format!(" {:<25} {:<15}\n", "-".repeat(25), "-".repeat(15)));
        for (i, source) in self.sources().iter().enumerate() {
            let label = if i == 0 { "Files" } else { "" };
            out.push_str(&format!(" {:<25} {:<15}\n", label, source));
        }
        out.push_str(&format!(" {:<25} {:<15}\n", "Start Date", self.start_date()));
        out.push_str(&format!(" {:<25} {:<15}\n", "End Date", self.end_date()));
        out.push_str(&format!(" {:<25} {:<15}\n", "Total Requests", m.total_requests));
        out.push_str(&format!(
            " {:<25} {:<15}\n",
            "Average Response Size",
            self.average_size()
        ));
        out.push_str(&format!(" {:<25} {:<15}\n", "95th Percentile Size", m.percentile_95));
        out.push_str(&format!(
            " {:<25} {:<15}\n",
            "Unique Clients",
            m.unique_client_count()
        ));
        out.push_str(&format!(
            " {:<25} {:<15.4}\n",
            "Requests Per Second", m.requests_per_second
        ));

        out.push_str(&format!("\n{}\n", heading("Requested Resources:")));
        out.push_str(&format!(" {:<40} {:<10}\n", "Resource", "Count"));
        out.push_str(&format!(" {:<40} {:<10}\n", "-".repeat(40), "-".repeat(10)));
        for (resource, count) in sorted_by_count(&m.resources) {
            out.push_str(&format!(" {:<40} {:<10}\n", resource, count));
        }

        out.push_str(&format!("\n{}\n", heading("Response Codes:")));
        out.push_str(&format!(" {:<10} {:<10}\n", "Code", "Count"));
        out.push_str(&format!(" {:<10} {:<10}\n", "-".repeat(10), "-".repeat(10)));
        for (code, count) in sorted_by_count(&m.status_codes) {
            out.push_str(&format!(" {:<10} {:<10}\n", code, count));
        }

        out
    }

    pub fn render_markdown(&self) -> String {
        let m = self.metrics;
        let mut out = String::new();

        out.push_str(&format!(
            "#### Report generated: {}\n\n",
            self.generated_at.format(GENERATED_LAYOUT)
        ));

        out.push_str("#### General Information\n\n");
        out.push_str("| Metric | Value |\n");
        out.push_str("|:-------|------:|\n");
        for (i, source) in self.sources().iter().enumerate() {
            let label = if i == 0 { "Files" } else { "" };
            out.push_str(&format!("| {} | `{}` |\n", label, source));
        }
        out.push_str(&format!("| Start Date | {} |\n", self.start_date()));
        out.push_str(&format!("| End Date | {} |\n", self.end_date()));
        out.push_str(&format!("| Total Requests | {} |\n", m.total_requests));
        out.push_str(&format!(
            "| Average Response Size | {}b |\n",
            self.average_size()
        ));
        out.push_str(&format!("| 95p Response Size | {}b |\n", m.percentile_95));
        out.push_str(&format!("| Unique Clients | {} |\n", m.unique_client_count()));
        out.push_str(&format!(
            "| Requests Per Second | {:.4} |\n",
            m.requests_per_second
        ));

        out.push_str("\n#### Requested Resources\n\n");
        out.push_str("| Resource | Count |\n");
        out.push_str("|:---------|------:|\n");
        for (resource, count) in sorted_by_count(&m.resources) {
            out.push_str(&format!("| `{}` | {} |\n", resource, count));
        }

        out.push_str("\n#### Response Codes\n\n");
        out.push_str("| Code | Count |\n");
        out.push_str("|:----:|------:|\n");
        for (code, count) in sorted_by_count(&m.status_codes) {
            out.push_str(&format!("| {} | {} |\n", code, count));
        }

        out
    }

    pub fn render_adoc(&self) -> String {
        let m = self.metrics;
        let mut out = String::new();

        out.push_str(&format!(
            "= Report generated: {}\n\n",
            self.generated_at.format(GENERATED_LAYOUT)
        ));

        out.push_str("== General Information\n\n");
        out.push_str("[cols=\"2,1\", options=\"header\"]\n|===\n");
        out.push_str("| Metric | Value\n");
        for (i, source) in self.sources().iter().enumerate() {
            let label = if i == 0 { "Files" } else { "" };
            out.push_str(&format!("| {} | `{}`\n", label, source));
        }
        out.push_str(&format!("| Start Date | {}\n", self.start_date()));
        out.push_str(&format!("| End Date | {}\n", self.end_date()));
        out.push_str(&format!("| Total Requests | {}\n", m.total_requests));
        out.push_str(&format!("| Average Response Size | {}b\n", self.average_size()));
        out.push_str(&format!("| 95p Response Size | {}b\n", m.percentile_95));
        out.push_str(&format!("| Unique Clients | {}\n", m.unique_client_count()));
        out.push_str(&format!(
            "| Requests Per Second | {:.4}\n",
            m.requests_per_second
        ));
        out.push_str("|===\n\n");

        out.push_str("== Requested Resources\n\n");
        out.push_str("[cols=\"2,1\", options=\"header\"]\n|===\n");
        out.push_str("| Resource | Count\n");
        for (resource, count) in sorted_by_count(&m.resources) {
            out.push_str(&format!("| `{}` | {}\n", resource, count));
        }
        out.push_str("|===\n\n");

        out.push_str("== Response Codes\n\n");
        out.push_str("[cols=\"2,1\", options=\"header\"]\n|===\n");
        out.push_str("| Code | Count\n");
        for (code, count) in sorted_by_count(&m.status_codes) {
            out.push_str(&format!("| {} | {}\n", code, count));
        }
        out.push_str("|===\n");

        out
    }

    pub fn render_json(&self) -> Result<String, ReportError> {
        let m = self.metrics;

        let report = JsonReport {
            generated_at: self.generated_at,
            sources: &m.sources,
            start: m.start,
            end: m.end,
            total_requests: m.total_requests,
            total_response_size: m.total_response_size,
            average_response_size: m.average_response_size,
            percentile_95: m.percentile_95,
            unique_clients: m.unique_client_count(),
            requests_per_second: m.requests_per_second,
            resources: sorted_by_count(&m.resources)
                .into_iter()
                .map(|(resource, count)| ResourceCount { resource, count })
                .collect(),
            status_codes: sorted_by_count(&m.status_codes)
                .into_iter()
                .map(|(status, count)| StatusCount {
                    status: *status,
                    count,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&report)?)
    }

    fn sources(&self) -> Vec<&str> {
        if self.metrics.sources.is_empty() {
            vec!["-"]
        } else {
            self.metrics.sources.iter().map(String::as_str).collect()
        }
    }

    fn start_date(&self) -> String {
        format_date(self.metrics.start)
    }

    fn end_date(&self) -> String {
        format_date(self.metrics.end)
    }

    fn average_size(&self) -> u64 {
        self.metrics.average_response_size.round() as u64
    }
}

fn format_date(ts: Option<DateTime<FixedOffset>>) -> String {
    ts.map(|t| t.format(DATE_LAYOUT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Entries by count descending; equal counts keep ascending key order.
pub fn sorted_by_count<K: Ord>(counts: &BTreeMap<K, u64>) -> Vec<(&K, u64)> {
    let mut entries: Vec<_> = counts.iter().map(|(k, c)| (k, *c)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<FixedOffset>,
    sources: &'a [String],
    start: Option<DateTime<FixedOffset>>,
    end: Option<DateTime<FixedOffset>>,
    total_requests: u64,
    total_response_size: u128,
    average_response_size: f64,
    percentile_95: u64,
    unique_clients: usize,
    requests_per_second: f64,
    resources: Vec<ResourceCount<'a>>,
    status_codes: Vec<StatusCount>,
}

#[derive(Serialize)]
struct ResourceCount<'a> {
    resource: &'a str,
    count: u64,
}

#[derive(Serialize)]
struct StatusCount {
    status: u16,
    count: u64,
}
