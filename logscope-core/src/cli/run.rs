use crate::cli::Cli;
use crate::conf::AnalysisConfig;
use crate::pipeline::LogAnalyzer;
use crate::report::{ReportFormat, ReportFormatter, ReportTarget};
use anyhow::{Context, Result};
use chrono::Local;
use std::io::{self, IsTerminal};
use tracing::{info, warn};

/// Runs one analysis: load settings, process every input, write the report.
pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig::default(),
    };
    let plan = config.merge(cli.overrides()).resolve()?;

    info!(
        inputs = plan.inputs.len(),
        format = %plan.format,
        "starting analysis"
    );

    let analysis = LogAnalyzer::analyze(&plan.inputs, plan.window, plan.filter);
    let summary = &analysis.summary;
    info!(
        lines = summary.lines_read,
        admitted = summary.admitted,
        malformed = summary.malformed,
        outside_window = summary.outside_window,
        filtered_out = summary.filtered_out,
        failed_sources = summary.failed_sources.len(),
        "analysis finished"
    );

    if analysis.metrics.is_empty() {
        warn!("no events were admitted; the report will be empty");
    }

    let colored = plan.format == ReportFormat::Console
        && plan.target == ReportTarget::Stdout
        && io::stdout().is_terminal();

    let report = ReportFormatter::new(&analysis.metrics, Local::now().fixed_offset())
        .render(plan.format, colored)
        .context("failed to render report")?;

    plan.target.write(&report)?;

    Ok(())
}
