use crate::source::SourceError;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use tracing::debug;
use url::Url;

/// One resolved log source.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum InputLocation {
    File(PathBuf),
    Url(Url),
}

impl InputLocation {
    /// Opens the source as a buffered byte stream.
    ///
    /// URLs are fetched with a blocking GET; anything but `200 OK` is an error.
    pub fn open(&self) -> Result<Box<dyn BufRead>, SourceError> {
        match self {
            InputLocation::File(path) => {
                let file = File::open(path).map_err(|e| SourceError::Open {
                    path: path.clone(),
                    source: e,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            InputLocation::Url(url) => {
                let resp = reqwest::blocking::get(url.clone()).map_err(|e| SourceError::Fetch {
                    url: url.to_string(),
                    source: e,
                })?;

                if resp.status() != reqwest::StatusCode::OK {
                    return Err(SourceError::HttpStatus {
                        url: url.to_string(),
                        status: resp.status(),
                    });
                }

                debug!(url = %url, "fetched log source");
                Ok(Box::new(BufReader::new(resp)))
            }
        }
    }
}

impl fmt::Display for InputLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputLocation::File(path) => write!(f, "{}", path.display()),
            InputLocation::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Returns the parsed URL when `raw` is an absolute `http` or `https` URL.
pub fn parse_http_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}
