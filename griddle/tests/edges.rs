//! Tests for at-edge derivation and the scroll throttle.

use std::time::{Duration, Instant};

use griddle::edges::ScrollEdges;
use griddle::throttle::Throttle;

#[test]
fn test_no_overflow_means_no_shadows() {
    let edges = ScrollEdges::compute((500.0, 300.0), (500.0, 300.0), (0.0, 0.0));
    assert!(edges.at_top && edges.at_bottom && edges.at_left && edges.at_right);
    assert!(!edges.shadow_top());
    assert!(!edges.shadow_bottom());
    assert!(!edges.shadow_left());
    assert!(!edges.shadow_right());
}

#[test]
fn test_content_smaller_than_viewport_counts_as_at_edge() {
    let edges = ScrollEdges::compute((200.0, 100.0), (500.0, 300.0), (0.0, 0.0));
    assert!(edges.at_bottom);
    assert!(edges.at_right);
}

#[test]
fn test_scrolled_to_top_shows_only_bottom_shadow() {
    let edges = ScrollEdges::compute((500.0, 600.0), (500.0, 500.0), (0.0, 0.0));
    assert!(edges.at_top);
    assert!(!edges.at_bottom);
    assert!(edges.shadow_bottom());
    assert!(!edges.shadow_top());
}

#[test]
fn test_scrolled_to_bottom_shows_only_top_shadow() {
    let edges = ScrollEdges::compute((500.0, 600.0), (500.0, 500.0), (0.0, 100.0));
    assert!(!edges.at_top);
    assert!(edges.at_bottom);
}

#[test]
fn test_mid_scroll_shows_both_vertical_shadows() {
    let edges = ScrollEdges::compute((500.0, 800.0), (500.0, 500.0), (0.0, 150.0));
    assert!(!edges.at_top);
    assert!(!edges.at_bottom);
}

#[test]
fn test_horizontal_axis_is_independent() {
    let edges = ScrollEdges::compute((900.0, 400.0), (500.0, 400.0), (200.0, 0.0));
    assert!(!edges.at_left);
    assert!(!edges.at_right);
    assert!(edges.at_top);
    assert!(edges.at_bottom);
}

#[test]
fn test_fractional_offsets_do_not_flicker_at_end() {
    // Measured layout sizes rarely land on integers.
    let edges = ScrollEdges::compute((599.6, 400.0), (499.9, 400.0), (99.8, 0.0));
    assert!(edges.at_right);
    assert!(!edges.at_left);
}

#[test]
fn test_default_is_all_at_edge() {
    assert_eq!(ScrollEdges::default(), ScrollEdges::all_at_edge());
}

#[test]
fn test_throttle_leading_edge_fires_immediately() {
    let mut throttle = Throttle::new(Duration::from_millis(200));
    let t0 = Instant::now();
    assert!(throttle.accept(t0));
}

#[test]
fn test_throttle_suppresses_burst_then_fires_trailing_once() {
    let window = Duration::from_millis(200);
    let mut throttle = Throttle::new(window);
    let t0 = Instant::now();

    assert!(throttle.accept(t0));
    assert!(!throttle.accept(t0 + Duration::from_millis(50)));
    assert!(!throttle.accept(t0 + Duration::from_millis(120)));

    // Nothing due inside the window.
    assert!(!throttle.flush(t0 + Duration::from_millis(150)));
    // The burst collapses into exactly one trailing evaluation.
    assert!(throttle.flush(t0 + Duration::from_millis(210)));
    assert!(!throttle.flush(t0 + Duration::from_millis(220)));
}

#[test]
fn test_throttle_no_trailing_without_suppressed_events() {
    let mut throttle = Throttle::new(Duration::from_millis(200));
    let t0 = Instant::now();
    assert!(throttle.accept(t0));
    assert!(!throttle.flush(t0 + Duration::from_millis(500)));
}

#[test]
fn test_throttle_reopens_after_window() {
    let window = Duration::from_millis(200);
    let mut throttle = Throttle::new(window);
    let t0 = Instant::now();

    assert!(throttle.accept(t0));
    // A later event past the window is a fresh leading edge.
    assert!(throttle.accept(t0 + Duration::from_millis(250)));
}

#[test]
fn test_throttle_trailing_restarts_window() {
    let window = Duration::from_millis(200);
    let mut throttle = Throttle::new(window);
    let t0 = Instant::now();

    assert!(throttle.accept(t0));
    assert!(!throttle.accept(t0 + Duration::from_millis(100)));
    assert!(throttle.flush(t0 + Duration::from_millis(200)));

    // The trailing evaluation counts as a fire for the next window.
    assert!(!throttle.accept(t0 + Duration::from_millis(250)));
    assert!(throttle.flush(t0 + Duration::from_millis(400)));
}

#[test]
fn test_throttle_deadline_tracks_pending_work() {
    let window = Duration::from_millis(200);
    let mut throttle = Throttle::new(window);
    let t0 = Instant::now();

    assert_eq!(throttle.next_deadline(), None);
    throttle.accept(t0);
    assert_eq!(throttle.next_deadline(), None);
    throttle.accept(t0 + Duration::from_millis(50));
    assert_eq!(throttle.next_deadline(), Some(t0 + window));
}
