use crate::report::ReportFormat;
use serde::Deserialize;
use std::path::PathBuf;

/// Settings of one analysis run, as written in a config file or given on the
/// command line. Every field is optional here; [`AnalysisConfig::resolve`]
/// checks what is required.
///
/// [`AnalysisConfig::resolve`]: crate::conf::AnalysisConfig::resolve
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Glob pattern or `http(s)://` URL.
    pub path: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub format: Option<ReportFormat>,
    pub output: Option<PathBuf>,
    pub filter_field: Option<String>,
    pub filter_value: Option<String>,
}

impl AnalysisConfig {
    /// Values set in `overrides` replace the ones in `self`.
    pub fn merge(self, overrides: AnalysisConfig) -> AnalysisConfig {
        AnalysisConfig {
            path: overrides.path.or(self.path),
            from: overrides.from.or(self.from),
            to: overrides.to.or(self.to),
            format: overrides.format.or(self.format),
            output: overrides.output.or(self.output),
            filter_field: overrides.filter_field.or(self.filter_field),
            filter_value: overrides.filter_value.or(self.filter_value),
        }
    }
}
