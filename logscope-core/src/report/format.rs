use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Console,
    Markdown,
    Adoc,
    Json,
}

impl ReportFormat {
    /// File written when no explicit output path is configured.
    /// Console reports go to stdout instead.
    pub fn default_file_name(self) -> Option<&'static str> {
        match self {
            ReportFormat::Console => None,
            ReportFormat::Markdown => Some("log_report.md"),
            ReportFormat::Adoc => Some("log_report.adoc"),
            ReportFormat::Json => Some("log_report.json"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReportFormat::Console => "console",
            ReportFormat::Markdown => "markdown",
            ReportFormat::Adoc => "adoc",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
