//! Tests for frame pacing

use std::time::{Duration, Instant};
use threebody_core::clock::FrameClock;
use threebody_core::tests::test_helpers::approx_eq_f32;

#[test]
fn test_first_tick_is_zero() {
    let mut clock = FrameClock::new(60);
    assert_eq!(clock.tick(Instant::now()), 0.0);
}

#[test]
fn test_tick_measures_elapsed_time() {
    let mut clock = FrameClock::new(60);
    let start = Instant::now();
    clock.tick(start);

    let dt = clock.tick(start + Duration::from_millis(20));
    assert!(approx_eq_f32(dt, 0.020, 1e-6));

    let dt = clock.tick(start + Duration::from_millis(50));
    assert!(approx_eq_f32(dt, 0.030, 1e-6));
}

#[test]
fn test_until_next_frame() {
    let mut clock = FrameClock::new(50);
    let start = Instant::now();
    assert_eq!(clock.until_next_frame(start), Duration::ZERO);
    assert_eq!(clock.frame_time(), Duration::from_millis(20));

    clock.tick(start);
    assert_eq!(
        clock.until_next_frame(start + Duration::from_millis(5)),
        Duration::from_millis(15)
    );
    // Late frames are due immediately
    assert_eq!(
        clock.until_next_frame(start + Duration::from_millis(40)),
        Duration::ZERO
    );
}

#[test]
fn test_zero_fps_does_not_divide_by_zero() {
    let clock = FrameClock::new(0);
    assert_eq!(clock.frame_time(), Duration::from_secs(1));
}
