use thiserror::Error;

/// Why a raw line could not be turned into a [`LogEvent`](super::LogEvent).
///
/// Every variant is recoverable: the pipeline logs the offending line and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("line does not match the access log grammar: {reason}")]
    Grammar { reason: &'static str },

    /// `source` is `None` when the value failed the fixed-width shape check
    /// before chrono saw it.
    #[error("invalid timestamp '{value}', expected dd/Mon/yyyy:HH:MM:SS +hhmm")]
    Timestamp {
        value: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("invalid status code '{value}'")]
    Status { value: String },

    #[error("invalid response size '{value}'")]
    ResponseSize { value: String },
}

impl DecodeError {
    pub(crate) fn grammar(reason: &'static str) -> Self {
        Self::Grammar { reason }
    }

    pub(crate) fn timestamp(value: &str, source: Option<chrono::ParseError>) -> Self {
        Self::Timestamp {
            value: value.to_string(),
            source,
        }
    }

    /// Short stable label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Grammar { .. } => "grammar",
            Self::Timestamp { .. } => "timestamp",
            Self::Status { .. } => "status",
            Self::ResponseSize { .. } => "response_size",
        }
    }
}
