use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    // Discovery
    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("no files found matching the pattern: {pattern}")]
    NoMatches { pattern: String },

    // Transport
    #[error("failed to open file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status for {url}: {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    // Framing
    #[error("failed to read from {input}: {source}")]
    Read {
        input: String,
        #[source]
        source: std::io::Error,
    },
}
