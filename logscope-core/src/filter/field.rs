use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker that turns a filter value into a prefix match.
pub const WILDCARD: char = '*';

/// Event fields a filter can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Ip,
    Timestamp,
    Method,
    Url,
    Protocol,
    Status,
    ResponseSize,
    Referer,
    Agent,
}

impl FilterField {
    pub const ALL: [FilterField; 9] = [
        FilterField::Ip,
        FilterField::Timestamp,
        FilterField::Method,
        FilterField::Url,
        FilterField::Protocol,
        FilterField::Status,
        FilterField::ResponseSize,
        FilterField::Referer,
        FilterField::Agent,
    ];

    /// Exact, case-sensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterField::Ip => "ip",
            FilterField::Timestamp => "timestamp",
            FilterField::Method => "method",
            FilterField::Url => "url",
            FilterField::Protocol => "protocol",
            FilterField::Status => "status",
            FilterField::ResponseSize => "response_size",
            FilterField::Referer => "referer",
            FilterField::Agent => "agent",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured `(field, value)` predicate.
///
/// The field name is kept as given; an unrecognized name is not a
/// configuration error, it simply rejects every event at match time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    pub field: String,
    pub value: String,
}

impl FilterSpec {
    /// Returns `None` unless both the field and the value are non-empty.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Option<Self> {
        let field = field.into();
        let value = value.into();

        if field.is_empty() || value.is_empty() {
            return None;
        }

        Some(Self { field, value })
    }

    #[cfg(test)]
    pub(crate) fn known_field(&self) -> Option<FilterField> {
        FilterField::from_name(&self.field)
    }
}

/// Splits a trailing wildcard off a filter value.
///
/// Returns the value without the marker and whether the marker was present.
/// Only one trailing `*` is removed.
pub fn split_wildcard(value: &str) -> (&str, bool) {
    match value.strip_suffix(WILDCARD) {
        Some(stripped) => (stripped, true),
        None => (value, false),
    }
}
