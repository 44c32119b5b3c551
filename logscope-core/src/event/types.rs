use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fmt;

/// Layout of the bracketed timestamp, e.g. `12/Dec/2021:15:04:05 +0000`.
pub const TIMESTAMP_LAYOUT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// One decoded access log request record.
///
/// Only ever built by [`decode_line`](super::decode_line), so every field is
/// present and well-typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEvent {
    pub client: String,
    pub timestamp: DateTime<FixedOffset>,
    pub method: String,
    pub path: String,
    pub protocol: String,
    pub status: u16,
    /// `0` when the source line carried `-` (no body).
    pub response_size: u64,
    pub referer: String,
    pub user_agent: String,
}

/// Re-encodes the event in the access log grammar it was decoded from.
impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - - [{}] \"{} {} {}\" {} {} \"{}\" \"{}\"",
            self.client,
            self.timestamp.format(TIMESTAMP_LAYOUT),
            self.method,
            self.path,
            self.protocol,
            self.status,
            self.response_size,
            self.referer,
            self.user_agent,
        )
    }
}
