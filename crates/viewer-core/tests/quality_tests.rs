// Host-side tests for the frame-rate monitor and the two-level quality.

use std::time::Duration;
use viewer_core::*;

fn run(monitor: &mut PerformanceMonitor, frame: Duration, frames: usize) -> Vec<PerformanceSignal> {
    (0..frames).filter_map(|_| monitor.record_frame(frame)).collect()
}

#[test]
fn sustained_fast_frames_incline() {
    let mut monitor = PerformanceMonitor::default();
    // 10 ms frames: 25 per 250 ms window, 100 fps.
    let signals = run(&mut monitor, Duration::from_millis(10), 25 * PERF_ITERATIONS);
    assert_eq!(signals, vec![PerformanceSignal::Incline]);
    assert!((monitor.refresh_estimate() - 100.0).abs() < 0.5);
    assert_eq!(monitor.pending_samples(), 0);
}

#[test]
fn sustained_slow_frames_decline() {
    let mut monitor = PerformanceMonitor::default();
    // 50 ms frames: 20 fps.
    let signals = run(&mut monitor, Duration::from_millis(50), 5 * PERF_ITERATIONS);
    assert_eq!(signals, vec![PerformanceSignal::Decline]);
}

#[test]
fn no_decision_before_enough_windows() {
    let mut monitor = PerformanceMonitor::default();
    let signals = run(&mut monitor, Duration::from_millis(10), 25 * (PERF_ITERATIONS - 1));
    assert!(signals.is_empty());
    assert_eq!(monitor.pending_samples(), PERF_ITERATIONS - 1);
}

#[test]
fn middling_frame_rate_stays_quiet() {
    let mut monitor = PerformanceMonitor::default();
    // 20 ms frames: 50 fps sits between the standard bounds.
    let signals = run(&mut monitor, Duration::from_millis(20), 12 * PERF_ITERATIONS * 3);
    assert!(signals.is_empty());
}

#[test]
fn mixed_windows_below_threshold_stay_quiet() {
    let mut monitor = PerformanceMonitor::default();
    let mut signals = Vec::new();
    // Half the windows fast, half the windows middling.
    for window in 0..PERF_ITERATIONS {
        if window % 2 == 0 {
            signals.extend(run(&mut monitor, Duration::from_millis(10), 25));
        } else {
            signals.extend(run(&mut monitor, Duration::from_millis(25), 10));
        }
    }
    assert!(signals.is_empty());
    assert_eq!(monitor.pending_samples(), 0);
}

#[test]
fn bounds_depend_on_refresh_rate() {
    assert_eq!(bounds_for_refresh(60.0), PERF_BOUNDS_STANDARD);
    assert_eq!(bounds_for_refresh(100.0), PERF_BOUNDS_STANDARD);
    assert_eq!(bounds_for_refresh(144.0), PERF_BOUNDS_HIGH_REFRESH);
}

#[test]
fn high_refresh_display_needs_higher_rate_to_incline() {
    let mut monitor = PerformanceMonitor::default();
    // Twenty 200 fps windows establish a 200 Hz refresh estimate.
    run(&mut monitor, Duration::from_millis(5), 50 * 2 * PERF_ITERATIONS);
    assert!(monitor.refresh_estimate() > PERF_HIGH_REFRESH_HZ);
    // 80 fps would incline on a 60 Hz display but not on a 200 Hz one.
    let signals = run(&mut monitor, Duration::from_micros(12_500), 20 * PERF_ITERATIONS);
    assert!(signals.is_empty());
    assert!(monitor.refresh_estimate() > PERF_HIGH_REFRESH_HZ);
}

#[test]
fn one_burst_window_does_not_lock_high_refresh_bounds() {
    let mut quality = AdaptiveQuality::default();
    // Back-to-back callbacks after a tab switch look like a 200 fps window.
    for _ in 0..60 {
        quality.record_frame(Duration::from_millis(5));
    }
    // Then a steady 60 Hz display for half a minute.
    let mut changes = Vec::new();
    for _ in 0..1800 {
        changes.extend(quality.record_frame(Duration::from_micros(16_667)));
    }
    assert_eq!(changes, vec![QualityLevel::High]);
    assert_eq!(quality.level(), QualityLevel::High);
    assert!((quality.monitor().refresh_estimate() - 60.0).abs() < 1.0);
}

#[test]
fn refresh_estimate_is_zero_before_first_window() {
    let mut monitor = PerformanceMonitor::default();
    assert_eq!(monitor.refresh_estimate(), 0.0);
    run(&mut monitor, Duration::from_millis(10), 5);
    assert_eq!(monitor.refresh_estimate(), 0.0);
}

#[test]
fn quality_levels_map_to_pixel_ratios() {
    assert_eq!(QualityLevel::default(), QualityLevel::Standard);
    assert_eq!(QualityLevel::Standard.pixel_ratio(), DPR_STANDARD);
    assert_eq!(QualityLevel::High.pixel_ratio(), DPR_HIGH);
    assert!(DPR_HIGH > DPR_STANDARD);
}

#[test]
fn adaptive_quality_follows_signals() {
    let mut quality = AdaptiveQuality::default();
    assert_eq!(quality.apply(PerformanceSignal::Decline), None);
    assert_eq!(
        quality.apply(PerformanceSignal::Incline),
        Some(QualityLevel::High)
    );
    assert_eq!(quality.level(), QualityLevel::High);
    assert_eq!(
        quality.apply(PerformanceSignal::Decline),
        Some(QualityLevel::Standard)
    );
}

#[test]
fn adaptive_quality_rises_then_falls_with_frame_times() {
    let mut quality = AdaptiveQuality::default();
    let mut changes = Vec::new();
    for _ in 0..25 * PERF_ITERATIONS {
        changes.extend(quality.record_frame(Duration::from_millis(10)));
    }
    for _ in 0..5 * PERF_ITERATIONS {
        changes.extend(quality.record_frame(Duration::from_millis(50)));
    }
    assert_eq!(changes, vec![QualityLevel::High, QualityLevel::Standard]);
}
