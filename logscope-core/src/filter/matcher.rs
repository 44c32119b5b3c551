use crate::event::LogEvent;
use crate::filter::{FilterField, FilterSpec, split_wildcard};
use chrono::DateTime;
use tracing::warn;

/// Diagnostics emitted while matching, scoped to a single analysis run.
///
/// The unknown-field warning is reported at most once per instance, so two
/// runs in the same process each get their own report.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterDiagnostics {
    unknown_field_reported: bool,
    pub unknown_field_warnings: u64,
    pub invalid_value_warnings: u64,
}

impl FilterDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    fn unknown_field(&mut self, field: &str) {
        if self.unknown_field_reported {
            return;
        }
        self.unknown_field_reported = true;
        self.unknown_field_warnings += 1;
        warn!(field, "unknown filter field; every event will be rejected");
    }

    fn invalid_value(&mut self, field: FilterField, value: &str, error: &dyn std::fmt::Display) {
        self.invalid_value_warnings += 1;
        warn!(field = field.as_str(), value, error = %error, "invalid filter value");
    }
}

/// Evaluates a single `(field, value)` predicate against an event.
///
/// A trailing `*` on `value` is stripped and selects prefix matching for the
/// fields that support it. `timestamp` and `response_size` always compare for
/// equality against the stripped value.
///
/// | field           | exact                     | wildcard                    |
/// |-----------------|---------------------------|-----------------------------|
/// | `ip`            | byte-equal                | prefix                      |
/// | `timestamp`     | same instant (RFC 3339)   | same as exact               |
/// | `method`        | case-insensitive equal    | case-insensitive prefix     |
/// | `url`           | byte-equal                | prefix                      |
/// | `protocol`      | case-insensitive equal    | case-insensitive prefix     |
/// | `status`        | decimal string equal      | decimal string prefix       |
/// | `response_size` | integer equal             | same as exact               |
/// | `referer`       | byte-equal                | prefix                      |
/// | `agent`         | byte-equal                | prefix                      |
///
/// Unknown fields never match.
pub fn matches_field(
    event: &LogEvent,
    field: &str,
    value: &str,
    diagnostics: &mut FilterDiagnostics,
) -> bool {
    let Some(known) = FilterField::from_name(field) else {
        diagnostics.unknown_field(field);
        return false;
    };

    let (value, wildcard) = split_wildcard(value);

    match known {
        FilterField::Ip => text_matches(&event.client, value, wildcard),
        FilterField::Timestamp => match DateTime::parse_from_rfc3339(value) {
            Ok(ts) => event.timestamp == ts,
            Err(e) => {
                diagnostics.invalid_value(known, value, &e);
                false
            }
        },
        FilterField::Method => text_matches_ignore_case(&event.method, value, wildcard),
        FilterField::Url => text_matches(&event.path, value, wildcard),
        FilterField::Protocol => text_matches_ignore_case(&event.protocol, value, wildcard),
        FilterField::Status => text_matches(&event.status.to_string(), value, wildcard),
        FilterField::ResponseSize => match value.parse::<u64>() {
            Ok(size) => event.response_size == size,
            Err(e) => {
                diagnostics.invalid_value(known, value, &e);
                false
            }
        },
        FilterField::Referer => text_matches(&event.referer, value, wildcard),
        FilterField::Agent => text_matches(&event.user_agent, value, wildcard),
    }
}

fn text_matches(actual: &str, expected: &str, prefix: bool) -> bool {
    if prefix {
        actual.starts_with(expected)
    } else {
        actual == expected
    }
}

fn text_matches_ignore_case(actual: &str, expected: &str, prefix: bool) -> bool {
    text_matches(&actual.to_lowercase(), &expected.to_lowercase(), prefix)
}

/// A [`FilterSpec`] bound to the diagnostics of one analysis run.
#[derive(Debug, Clone)]
pub struct FieldMatcher {
    spec: FilterSpec,
    diagnostics: FilterDiagnostics,
}

impl FieldMatcher {
    pub fn new(spec: FilterSpec) -> Self {
        Self {
            spec,
            diagnostics: FilterDiagnostics::new(),
        }
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    pub fn matches(&mut self, event: &LogEvent) -> bool {
        matches_field(
            event,
            &self.spec.field,
            &self.spec.value,
            &mut self.diagnostics,
        )
    }

    pub fn diagnostics(&self) -> &FilterDiagnostics {
        &self.diagnostics
    }
}
