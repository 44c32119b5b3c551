use crate::source::{InputLocation, SourceError, parse_http_url};
use glob::glob;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Resolves a user supplied pattern into concrete inputs.
///
/// - An `http`/`https` URL becomes a single URL input.
/// - Anything else is a glob. Matching files are inputs; matching
///   directories are walked recursively for the files they contain.
///
/// File inputs come back sorted and de-duplicated.
///
/// # Errors
///
/// Returns `SourceError::Glob` if the pattern is malformed, and
/// `SourceError::NoMatches` if it resolves to no files at all.
pub fn discover_inputs(pattern: &str) -> Result<Vec<InputLocation>, SourceError> {
    if let Some(url) = parse_http_url(pattern) {
        return Ok(vec![InputLocation::Url(url)]);
    }

    let mut files = Vec::new();
    for path in expand_glob(pattern)? {
        if path.is_dir() {
            let nested = resolve_glob(&path, "**/*");
            files.extend(expand_glob(&nested)?.into_iter().filter(|p| p.is_file()));
        } else if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    files.dedup();

    if files.is_empty() {
        return Err(SourceError::NoMatches {
            pattern: pattern.to_string(),
        });
    }

    Ok(files.into_iter().map(InputLocation::File).collect())
}

fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>, SourceError> {
    Ok(glob(pattern)
        .map_err(|e| SourceError::Glob {
            pattern: pattern.to_string(),
            source: e,
        })?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(path = %e.path().display(), error = %e.error(), "skipping unreadable path");
                None
            }
        })
        .collect())
}

/// Joins `pattern` onto `root` as a glob string.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    root.join(pattern).to_string_lossy().into_owned()
}
