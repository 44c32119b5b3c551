use crate::report::{ReportError, ReportFormat};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// Where a rendered report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTarget {
    Stdout,
    File(PathBuf),
}

impl ReportTarget {
    /// An explicit path always wins; otherwise file formats use their default
    /// file name and the console format prints to stdout.
    pub fn resolve(format: ReportFormat, output: Option<PathBuf>) -> Self {
        match (output, format.default_file_name()) {
            (Some(path), _) => ReportTarget::File(path),
            (None, Some(name)) => ReportTarget::File(PathBuf::from(name)),
            (None, None) => ReportTarget::Stdout,
        }
    }

    pub fn write(&self, report: &str) -> Result<(), ReportError> {
        match self {
            ReportTarget::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{report}").map_err(ReportError::Stdout)?;
                stdout.flush().map_err(ReportError::Stdout)
            }
            ReportTarget::File(path) => {
                fs::write(path, report).map_err(|e| ReportError::Write {
                    path: path.clone(),
                    source: e,
                })?;
                info!(path = %path.display(), "report saved");
                Ok(())
            }
        }
    }
}
