//! Unit tests for the pointer-move throttle.

use gridsmith::input::{MoveThrottle, PointerPosition};
use std::time::{Duration, Instant};

fn at(x: f32) -> PointerPosition {
    PointerPosition::new(x, 0.0)
}

#[test]
fn test_zero_interval_admits_every_move() {
    let mut throttle = MoveThrottle::default();
    assert_eq!(throttle.min_interval(), Duration::ZERO);
    let now = Instant::now();

    assert!((0..100).all(|i| throttle.admit(now, at(i as f32))));
    assert_eq!(throttle.take_pending(), None);
}

#[test]
fn test_interval_drops_moves_inside_window() {
    let mut throttle = MoveThrottle::new(Duration::from_millis(16));
    let start = Instant::now();

    assert!(throttle.admit(start, at(1.0)));
    assert!(!throttle.admit(start + Duration::from_millis(5), at(2.0)));
    assert!(!throttle.admit(start + Duration::from_millis(15), at(3.0)));
    assert!(throttle.admit(start + Duration::from_millis(16), at(4.0)));
    assert!(!throttle.admit(start + Duration::from_millis(20), at(5.0)));
}

#[test]
fn test_latest_rejected_move_is_pending() {
    let mut throttle = MoveThrottle::new(Duration::from_millis(16));
    let start = Instant::now();

    throttle.admit(start, at(1.0));
    throttle.admit(start + Duration::from_millis(5), at(2.0));
    throttle.admit(start + Duration::from_millis(10), at(3.0));

    assert_eq!(throttle.take_pending(), Some(at(3.0)));
    assert_eq!(throttle.take_pending(), None);
}

#[test]
fn test_admitted_move_clears_pending() {
    let mut throttle = MoveThrottle::new(Duration::from_millis(16));
    let start = Instant::now();

    throttle.admit(start, at(1.0));
    throttle.admit(start + Duration::from_millis(5), at(2.0));
    assert!(throttle.admit(start + Duration::from_millis(30), at(3.0)));

    assert_eq!(throttle.take_pending(), None);
}

#[test]
fn test_reset_admits_next_move() {
    let mut throttle = MoveThrottle::new(Duration::from_secs(10));
    let start = Instant::now();

    assert!(throttle.admit(start, at(1.0)));
    assert!(!throttle.admit(start + Duration::from_millis(1), at(2.0)));

    throttle.reset();
    assert_eq!(throttle.take_pending(), None);
    assert!(throttle.admit(start + Duration::from_millis(2), at(3.0)));
}
