use crate::report::{ReportFormat, ReportFormatter, sorted_by_count};
use crate::stats::{Metrics, MetricsAggregator};
use crate::test_helpers::{event_with, sample_event, utc};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn sample_metrics() -> Metrics {
    let mut agg = MetricsAggregator::new(vec!["access.log".to_string()]);
    agg.update(&sample_event());
    agg.update(&event_with(|e| {
        e.path = "/home".to_string();
        e.status = 404;
        e.response_size = 0;
        e.timestamp = utc(2021, 12, 13, 15, 4, 5);
    }));
    agg.update(&event_with(|e| {
        e.client = "192.168.1.1".to_string();
        e.response_size = 513;
        e.timestamp = utc(2021, 12, 13, 15, 4, 5);
    }));
    agg.finalize()
}

fn formatter(metrics: &Metrics) -> ReportFormatter<'_> {
    ReportFormatter::new(metrics, utc(2024, 3, 1, 10, 30, 0))
}

#[test]
fn sorted_by_count_orders_descending_with_key_tiebreak() {
    // Arrange
    let counts = BTreeMap::from([
        ("/b".to_string(), 2),
        ("/a".to_string(), 2),
        ("/c".to_string(), 5),
        ("/d".to_string(), 1),
    ]);

    // Act
    let sorted: Vec<_> = sorted_by_count(&counts)
        .into_iter()
        .map(|(k, c)| (k.as_str(), c))
        .collect();

    // Assert
    assert_eq!(sorted, vec![("/c", 5), ("/a", 2), ("/b", 2), ("/d", 1)]);
}

#[test]
fn console_report_lists_general_information() {
    // Arrange
    let metrics = sample_metrics();

    // Act
    let out = formatter(&metrics).render_console(false);

    // Assert
    assert!(out.starts_with("=== Log Analysis Report (Created: 01.03.2024 10:30:00) ==="));
    assert!(out.contains(&format!(" {:<25} {:<15}\n", "Files", "access.log")));
    assert!(out.contains(&format!(" {:<25} {:<15}\n", "Start Date", "12.12.2021")));
    assert!(out.contains(&format!(" {:<25} {:<15}\n", "End Date", "13.12.2021")));
    assert!(out.contains(&format!(" {:<25} {:<15}\n", "Total Requests", 3)));
    // (1024 + 0 + 513) / 3 = 512.33
    assert!(out.contains(&format!(" {:<25} {:<15}\n", "Average Response Size", 512)));
    assert!(out.contains(&format!(" {:<25} {:<15}\n", "95th Percentile Size", 1024)));
    assert!(out.contains(&format!(" {:<25} {:<15}\n", "Unique Clients", 2)));
}

#[test]
fn console_report_orders_resources_by_count() {
    // Arrange
    let metrics = sample_metrics();

    // Act
    let out = formatter(&metrics).render_console(false);

    // Assert
    let index = out.find("/index.html").unwrap();
    let home = out.find("/home").unwrap();
    assert!(index < home);
    assert!(out.contains(&format!(" {:<10} {:<10}\n", 200, 2)));
    assert!(out.contains(&format!(" {:<10} {:<10}\n", 404, 1)));
}

#[test]
fn uncolored_console_report_has_no_escape_codes() {
    // Arrange
    let metrics = sample_metrics();

    // Act
    let plain = formatter(&metrics).render_console(false);
    let colored = formatter(&metrics).render_console(true);

    // Assert
    assert!(!plain.contains('\u{1b}'));
    assert!(colored.contains('\u{1b}'));
}

#[test]
fn empty_metrics_render_dashes_for_dates() {
    // Arrange
    let metrics = Metrics::new(vec![]);

    // Act
    let out = formatter(&metrics).render_markdown();

    // Assert
    assert!(out.contains("| Files | `-` |\n"));
    assert!(out.contains("| Start Date | - |\n"));
    assert!(out.contains("| End Date | - |\n"));
    assert!(out.contains("| Total Requests | 0 |\n"));
}

#[test]
fn markdown_report_has_tables() {
    // Arrange
    let metrics = sample_metrics();

    // Act
    let out = formatter(&metrics).render_markdown();

    // Assert
    assert!(out.starts_with("#### Report generated: 01.03.2024 10:30:00\n"));
    assert!(out.contains("| Files | `access.log` |\n"));
    assert!(out.contains("| Average Response Size | 512b |\n"));
    assert!(out.contains("| 95p Response Size | 1024b |\n"));
    assert!(out.contains("| `/index.html` | 2 |\n| `/home` | 1 |\n"));
    assert!(out.contains("| 200 | 2 |\n| 404 | 1 |\n"));
}

#[test]
fn adoc_report_closes_every_table() {
    // Arrange
    let metrics = sample_metrics();

    // Act
    let out = formatter(&metrics).render_adoc();

    // Assert
    assert_eq!(out.matches("[cols=\"2,1\", options=\"header\"]").count(), 3);
    assert_eq!(out.matches("|===\n").count(), 6);
    assert!(out.contains("| Start Date | 12.12.2021\n"));
    assert!(out.contains("| `/index.html` | 2\n"));
}

#[test]
fn json_report_is_machine_readable() {
    // Arrange
    let metrics = sample_metrics();

    // Act
    let out = formatter(&metrics).render(ReportFormat::Json, true).unwrap();

    // Assert
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["total_requests"], 3);
    assert_eq!(value["percentile_95"], 1024);
    assert_eq!(value["unique_clients"], 2);
    assert_eq!(value["sources"][0], "access.log");
    assert_eq!(value["start"], "2021-12-12T15:04:05+00:00");
    assert_eq!(value["resources"][0]["resource"], "/index.html");
    assert_eq!(value["resources"][0]["count"], 2);
    assert_eq!(value["status_codes"][1]["status"], 404);
    assert!(!out.contains('\u{1b}'));
}
