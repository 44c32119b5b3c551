use crate::stats::{Metrics, MetricsAggregator};
use crate::test_helpers::{event_with, sample_event, utc};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

#[test]
fn new_aggregator_starts_empty() {
    // Act
    let agg = MetricsAggregator::new(vec!["access.log".to_string()]);

    // Assert
    assert_eq!(agg.metrics(), &Metrics::new(vec!["access.log".to_string()]));
    assert!(agg.metrics().is_empty());
}

#[test]
fn update_folds_every_field() {
    // Arrange
    let mut agg = MetricsAggregator::new(vec![]);

    // Act
    agg.update(&sample_event());
    agg.update(&event_with(|e| {
        e.client = "192.168.1.1".to_string();
        e.path = "/home".to_string();
        e.status = 404;
        e.response_size = 0;
        e.timestamp = utc(2021, 12, 11, 0, 0, 0);
    }));
    agg.update(&event_with(|e| e.timestamp = utc(2021, 12, 13, 0, 0, 0)));

    // Assert
    let m = agg.metrics();
    assert_eq!(m.total_requests, 3);
    assert_eq!(m.total_response_size, 2048);
    assert!((m.average_response_size - 2048.0 / 3.0).abs() < 1e-9);
    assert_eq!(m.response_sizes, vec![1024, 0, 1024]);
    assert_eq!(m.start, Some(utc(2021, 12, 11, 0, 0, 0)));
    assert_eq!(m.end, Some(utc(2021, 12, 13, 0, 0, 0)));
    assert_eq!(
        m.resources,
        BTreeMap::from([("/home".to_string(), 1), ("/index.html".to_string(), 2)])
    );
    assert_eq!(m.status_codes, BTreeMap::from([(200, 2), (404, 1)]));
    assert_eq!(m.unique_client_count(), 2);
}

#[test]
fn percentile_is_recomputed_after_each_update() {
    // Arrange
    let mut agg = MetricsAggregator::new(vec![]);
    let mut seen = Vec::new();

    // Act
    for size in [1024, 0, 512] {
        agg.update(&event_with(|e| e.response_size = size));
        seen.push(agg.metrics().percentile_95);
    }

    // Assert
    assert_eq!(seen, vec![1024, 1024, 1024]);
}

#[test]
fn percentile_tracks_large_histories() {
    // Arrange
    let mut agg = MetricsAggregator::new(vec![]);

    // Act
    for size in (1..=40).rev() {
        agg.update(&event_with(|e| e.response_size = size));
    }

    // Assert
    // floor(40 * 95 / 100) = 38 -> 39th smallest
    assert_eq!(agg.metrics().percentile_95, 39);
}

#[test]
fn maximal_sizes_do_not_overflow_the_total() {
    // Arrange
    let mut agg = MetricsAggregator::new(vec![]);

    // Act
    agg.update(&event_with(|e| e.response_size = u64::MAX));
    agg.update(&event_with(|e| e.response_size = u64::MAX));

    // Assert
    let m = agg.metrics();
    assert_eq!(m.total_response_size, 2 * u128::from(u64::MAX));
    assert_eq!(m.average_response_size, u64::MAX as f64);
    assert_eq!(m.percentile_95, u64::MAX);
}

#[test]
fn arrival_order_does_not_need_to_be_chronological() {
    // Arrange
    let mut agg = MetricsAggregator::new(vec![]);

    // Act
    agg.update(&event_with(|e| e.timestamp = utc(2021, 12, 12, 12, 0, 0)));
    agg.update(&event_with(|e| e.timestamp = utc(2021, 12, 12, 10, 0, 0)));
    agg.update(&event_with(|e| e.timestamp = utc(2021, 12, 12, 11, 0, 0)));

    // Assert
    assert_eq!(agg.metrics().start, Some(utc(2021, 12, 12, 10, 0, 0)));
    assert_eq!(agg.metrics().end, Some(utc(2021, 12, 12, 12, 0, 0)));
}

#[test]
fn finalize_computes_rate_over_span() {
    // Arrange
    let mut agg = MetricsAggregator::new(vec![]);
    agg.update(&event_with(|e| e.timestamp = utc(2021, 12, 12, 15, 0, 0)));
    agg.update(&event_with(|e| e.timestamp = utc(2021, 12, 12, 16, 0, 0)));

    // Act
    let metrics = agg.finalize();

    // Assert
    assert!((metrics.requests_per_second - 2.0 / 3600.0).abs() < 1e-12);
}

#[test]
fn finalize_with_single_event_leaves_rate_at_zero() {
    // Arrange
    let mut agg = MetricsAggregator::new(vec![]);
    agg.update(&sample_event());

    // Act
    let metrics = agg.finalize();

    // Assert
    assert_eq!(metrics.requests_per_second, 0.0);
    assert_eq!(metrics.total_requests, 1);
}

#[test]
fn finalize_without_events_leaves_rate_at_zero() {
    // Act
    let metrics = MetricsAggregator::new(vec!["a.log".to_string()]).finalize();

    // Assert
    assert_eq!(metrics.requests_per_second, 0.0);
    assert_eq!(metrics.start, None);
    assert_eq!(metrics.sources, vec!["a.log".to_string()]);
}

#[test]
fn duplicate_clients_are_counted_once() {
    // Arrange
    let mut agg = MetricsAggregator::new(vec![]);

    // Act
    for _ in 0..10 {
        agg.update(&sample_event());
    }

    // Assert
    assert_eq!(agg.metrics().unique_client_count(), 1);
    assert_eq!(agg.metrics().total_requests, 10);
}
