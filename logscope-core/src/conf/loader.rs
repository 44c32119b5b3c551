use crate::conf::{AnalysisConfig, ConfigError, parse_time_bound};
use crate::filter::{FilterSpec, TimeWindow};
use crate::report::{ReportFormat, ReportTarget};
use crate::source::{InputLocation, discover_inputs};
use chrono::{DateTime, FixedOffset};
use std::fs;
use std::path::Path;

/// Everything a run needs, fully validated.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisPlan {
    pub inputs: Vec<InputLocation>,
    pub window: TimeWindow,
    pub filter: Option<FilterSpec>,
    pub format: ReportFormat,
    pub target: ReportTarget,
}

impl AnalysisConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        toml::from_str(&raw).map_err(|e| ConfigError::parse(path, e))
    }

    /// Validates the settings and discovers the inputs.
    ///
    /// Unknown filter fields are not rejected here; they are reported while
    /// matching.
    pub fn resolve(self) -> Result<AnalysisPlan, ConfigError> {
        let pattern = self
            .path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or(ConfigError::MissingPath)?;

        //--------------------------------------------------------------------------
        // Values (cheap checks first)
        //--------------------------------------------------------------------------
        let from = bound("from", self.from.as_deref())?;
        let to = bound("to", self.to.as_deref())?;

        let filter = match (self.filter_field.as_deref(), self.filter_value.as_deref()) {
            (Some(field), Some(value)) => FilterSpec::new(field, value),
            _ => None,
        };

        let format = self.format.unwrap_or_default();
        let target = ReportTarget::resolve(format, self.output);

        //--------------------------------------------------------------------------
        // Inputs
        //--------------------------------------------------------------------------
        let inputs = discover_inputs(pattern)?;

        Ok(AnalysisPlan {
            inputs,
            window: TimeWindow::new(from, to),
            filter,
            format,
            target,
        })
    }
}

fn bound(
    name: &'static str,
    raw: Option<&str>,
) -> Result<Option<DateTime<FixedOffset>>, ConfigError> {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        None => Ok(None),
        Some(value) => parse_time_bound(value)
            .map(Some)
            .ok_or_else(|| ConfigError::InvalidTime {
                bound: name,
                value: value.to_string(),
            }),
    }
}
