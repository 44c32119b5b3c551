use crate::conf::AnalysisConfig;
use crate::logging::LogFormat;
use crate::report::ReportFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logscope",
    version,
    about = "Logscope: access log analyzer"
)]
pub struct Cli {
    /// Glob pattern or http(s) URL of the log files
    #[arg(long)]
    pub path: Option<String>,

    /// Ignore entries before this time (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Ignore entries after this time (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Report format; console when omitted
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Report file; defaults to log_report.<ext> for file formats
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Field to filter on (ip, timestamp, method, url, protocol, status,
    /// response_size, referer, agent)
    #[arg(long)]
    pub filter_field: Option<String>,

    /// Value to match; a trailing '*' matches by prefix
    #[arg(long)]
    pub filter_value: Option<String>,

    /// TOML file with default settings; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Diagnostic log format; json when stderr is not a terminal
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// The settings given as flags.
    pub fn overrides(&self) -> AnalysisConfig {
        AnalysisConfig {
            path: self.path.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            format: self.format,
            output: self.output.clone(),
            filter_field: self.filter_field.clone(),
            filter_value: self.filter_value.clone(),
        }
    }
}
