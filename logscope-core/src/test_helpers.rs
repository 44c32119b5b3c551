use crate::event::LogEvent;
use chrono::{DateTime, FixedOffset, TimeZone};

pub(crate) fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .unwrap()
}

/// `GET /index.html HTTP/1.1 200 1024` from 127.0.0.1 at 2021-12-12T15:04:05Z.
pub(crate) fn sample_event() -> LogEvent {
    LogEvent {
        client: "127.0.0.1".to_string(),
        timestamp: utc(2021, 12, 12, 15, 4, 5),
        method: "GET".to_string(),
        path: "/index.html".to_string(),
        protocol: "HTTP/1.1".to_string(),
        status: 200,
        response_size: 1024,
        referer: "http://example.com".to_string(),
        user_agent: "Mozilla/5.0".to_string(),
    }
}

pub(crate) fn event_with(f: impl FnOnce(&mut LogEvent)) -> LogEvent {
    let mut event = sample_event();
    f(&mut event);
    event
}

/// The three-line fixture used across pipeline tests.
pub(crate) const THREE_LINES: &str = r#"127.0.0.1 - - [12/Dec/2021:15:04:05 +0000] "GET /index.html HTTP/1.1" 200 1024 "http://example.com" "Mozilla/5.0"
127.0.0.1 - - [12/Dec/2021:16:04:05 +0000] "POST /submit HTTP/1.1" 404 - "-" "-"
192.168.1.1 - - [13/Dec/2021:15:04:05 +0000] "GET /home HTTP/1.1" 200 512 "-" "Mozilla/5.0""#;
