use crate::event::{DecodeError, LogEvent, TIMESTAMP_LAYOUT};
use chrono::DateTime;

/// Raw slices of a line that matched the grammar, before any field is typed.
struct RawFields<'a> {
    client: &'a str,
    timestamp: &'a str,
    method: &'a str,
    path: &'a str,
    protocol: &'a str,
    status: &'a str,
    size: &'a str,
    referer: &'a str,
    agent: &'a str,
}

/// Decodes one access log line.
///
/// The accepted shape is exactly:
///
/// ```text
/// <client> - - [<timestamp>] "<method> <path> <protocol>" <status> <size-or-dash> "<referer>" "<agent>"
/// ```
///
/// The whole line is lexed before any field is converted, so a line is either
/// fully decoded or rejected; there is no partial result.
///
/// Failure stages, in order:
/// - `Grammar`: the line does not have the shape above.
/// - `Timestamp`: the bracketed value is not exactly `dd/Mon/yyyy:HH:MM:SS ±hhmm`
///   (zero-padded fields, one space, no colon in the offset) or names no real
///   instant.
/// - `Status`: the status token is not a base-10 integer in `0..=65535`.
/// - `ResponseSize`: the size token is neither `-` nor a base-10 integer.
pub fn decode_line(line: &str) -> Result<LogEvent, DecodeError> {
    let raw = lex(line)?;

    if !has_timestamp_shape(raw.timestamp) {
        return Err(DecodeError::timestamp(raw.timestamp, None));
    }
    let timestamp = DateTime::parse_from_str(raw.timestamp, TIMESTAMP_LAYOUT)
        .map_err(|e| DecodeError::timestamp(raw.timestamp, Some(e)))?;

    let status = parse_decimal::<u16>(raw.status).ok_or_else(|| DecodeError::Status {
        value: raw.status.to_string(),
    })?;

    let response_size = if raw.size == "-" {
        0
    } else {
        parse_decimal::<u64>(raw.size).ok_or_else(|| DecodeError::ResponseSize {
            value: raw.size.to_string(),
        })?
    };

    Ok(LogEvent {
        client: raw.client.to_string(),
        timestamp,
        method: raw.method.to_string(),
        path: raw.path.to_string(),
        protocol: raw.protocol.to_string(),
        status,
        response_size,
        referer: raw.referer.to_string(),
        user_agent: raw.agent.to_string(),
    })
}

fn lex(line: &str) -> Result<RawFields<'_>, DecodeError> {
    let mut cur = Cursor::new(line);

    let client = cur.token();
    if client.is_empty() {
        return Err(DecodeError::grammar("missing client address"));
    }
    cur.expect(" - - [", "expected ' - - [' after client address")?;

    let timestamp = cur.until(']', "unterminated timestamp")?;
    if timestamp.is_empty() {
        return Err(DecodeError::grammar("empty timestamp"));
    }
    cur.expect("] \"", "expected '] \"' after timestamp")?;

    let request = cur.until('"', "unterminated request line")?;
    let (method, path, protocol) = split_request(request)?;
    cur.expect("\" ", "expected '\" ' after request line")?;

    let status = cur.token();
    if status.is_empty() {
        return Err(DecodeError::grammar("missing status code"));
    }
    cur.expect(" ", "expected response size after status code")?;

    let size = cur.token();
    if size.is_empty() {
        return Err(DecodeError::grammar("missing response size"));
    }
    cur.expect(" \"", "expected quoted referer after response size")?;

    let referer = cur.until('"', "unterminated referer")?;
    cur.expect("\" \"", "expected quoted user agent after referer")?;

    let agent = cur.until('"', "unterminated user agent")?;
    cur.expect("\"", "expected closing quote after user agent")?;

    if !cur.is_empty() {
        return Err(DecodeError::grammar("unexpected trailing content"));
    }

    Ok(RawFields {
        client,
        timestamp,
        method,
        path,
        protocol,
        status,
        size,
        referer,
        agent,
    })
}

/// The request line is exactly three non-empty, single-space separated tokens.
fn split_request(request: &str) -> Result<(&str, &str, &str), DecodeError> {
    let mut parts = request.split(' ');

    let (Some(method), Some(path), Some(protocol), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(DecodeError::grammar(
            "request line must have exactly three tokens",
        ));
    };

    if [method, path, protocol]
        .iter()
        .any(|t| t.is_empty() || t.chars().any(|c| c.is_ascii_whitespace()))
    {
        return Err(DecodeError::grammar(
            "request line must have exactly three tokens",
        ));
    }

    Ok((method, path, protocol))
}

/// Fixed-width template of a timestamp: `d` digit, `a` ASCII letter, `s` sign.
/// chrono alone accepts unpadded fields and `+hh:mm` offsets.
const TIMESTAMP_SHAPE: &[u8] = b"dd/aaa/dddd:dd:dd:dd sdddd";

fn has_timestamp_shape(raw: &str) -> bool {
    raw.len() == TIMESTAMP_SHAPE.len()
        && raw
            .bytes()
            .zip(TIMESTAMP_SHAPE)
            .all(|(b, &class)| match class {
                b'd' => b.is_ascii_digit(),
                b'a' => b.is_ascii_alphabetic(),
                b's' => b == b'+' || b == b'-',
                literal => b == literal,
            })
}

/// Strict base-10: ASCII digits only, no sign, no surrounding whitespace.
fn parse_decimal<T: std::str::FromStr>(raw: &str) -> Option<T> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    /// Consumes a run of non-whitespace characters (possibly empty).
    fn token(&mut self) -> &'a str {
        let end = self
            .rest
            .find(|c: char| c.is_ascii_whitespace())
            .unwrap_or(self.rest.len());
        let (tok, rest) = self.rest.split_at(end);
        self.rest = rest;
        tok
    }

    /// Consumes everything up to (not including) `stop`.
    fn until(&mut self, stop: char, reason: &'static str) -> Result<&'a str, DecodeError> {
        let end = self
            .rest
            .find(stop)
            .ok_or_else(|| DecodeError::grammar(reason))?;
        let (tok, rest) = self.rest.split_at(end);
        self.rest = rest;
        Ok(tok)
    }

    fn expect(&mut self, literal: &str, reason: &'static str) -> Result<(), DecodeError> {
        match self.rest.strip_prefix(literal) {
            Some(rest) => {
                self.rest = rest;
                Ok(())
            }
            None => Err(DecodeError::grammar(reason)),
        }
    }
}
