//! Adaptive render quality.
//!
//! A [`PerformanceMonitor`] turns per-frame timings into windowed frame-rate
//! samples and, once enough windows are collected, reports whether the
//! render loop is sustainably fast ([`PerformanceSignal::Incline`]) or slow
//! ([`PerformanceSignal::Decline`]). [`AdaptiveQuality`] maps those signals
//! onto a two-level [`QualityLevel`]. There is no cooldown: every decision
//! is applied as soon as the monitor produces it.

use crate::constants::*;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QualityLevel {
    #[default]
    Standard,
    High,
}

impl QualityLevel {
    /// Render resolution scale relative to CSS pixels.
    pub fn pixel_ratio(self) -> f32 {
        match self {
            QualityLevel::Standard => DPR_STANDARD,
            QualityLevel::High => DPR_HIGH,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QualityLevel::Standard => "standard",
            QualityLevel::High => "high",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerformanceSignal {
    Incline,
    Decline,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonitorConfig {
    pub window: Duration,
    pub iterations: usize,
    pub threshold: f32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            window: Duration::from_millis(PERF_WINDOW_MS),
            iterations: PERF_ITERATIONS,
            threshold: PERF_THRESHOLD,
        }
    }
}

/// Lower and upper frame-rate bounds for a display refresh rate.
#[inline]
pub fn bounds_for_refresh(refresh_hz: f32) -> (f32, f32) {
    if refresh_hz > PERF_HIGH_REFRESH_HZ {
        PERF_BOUNDS_HIGH_REFRESH
    } else {
        PERF_BOUNDS_STANDARD
    }
}

#[derive(Clone, Debug)]
pub struct PerformanceMonitor {
    config: MonitorConfig,
    window_elapsed: Duration,
    window_frames: u32,
    samples: SmallVec<[f32; PERF_ITERATIONS]>,
    // Most recent window rates, oldest first. Their median stands in for the
    // display refresh rate so a single burst window cannot skew the bounds.
    history: SmallVec<[f32; PERF_REFRESH_HISTORY]>,
}

impl PerformanceMonitor {
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            window_elapsed: Duration::ZERO,
            window_frames: 0,
            samples: SmallVec::new(),
            history: SmallVec::new(),
        }
    }

    /// Median of the recent window rates, or 0 before the first window closes.
    pub fn refresh_estimate(&self) -> f32 {
        if self.history.is_empty() {
            return 0.0;
        }
        let mut sorted = self.history.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        sorted[sorted.len() / 2]
    }

    pub fn pending_samples(&self) -> usize {
        self.samples.len()
    }

    /// Record one rendered frame that took `dt`.
    pub fn record_frame(&mut self, dt: Duration) -> Option<PerformanceSignal> {
        self.window_elapsed += dt;
        self.window_frames += 1;
        if self.window_elapsed < self.config.window {
            return None;
        }
        let fps = self.window_frames as f32 / self.window_elapsed.as_secs_f32().max(1e-6);
        self.window_elapsed = Duration::ZERO;
        self.window_frames = 0;
        if self.history.len() == PERF_REFRESH_HISTORY {
            self.history.remove(0);
        }
        self.history.push(fps);
        self.samples.push(fps);
        if self.samples.len() < self.config.iterations.max(1) {
            return None;
        }
        let signal = self.decide();
        self.samples.clear();
        signal
    }

    fn decide(&self) -> Option<PerformanceSignal> {
        let (lower, upper) = bounds_for_refresh(self.refresh_estimate());
        let n = self.samples.len() as f32;
        let above = self.samples.iter().filter(|fps| **fps >= upper).count() as f32 / n;
        let below = self.samples.iter().filter(|fps| **fps <= lower).count() as f32 / n;
        if above >= self.config.threshold {
            Some(PerformanceSignal::Incline)
        } else if below >= self.config.threshold {
            Some(PerformanceSignal::Decline)
        } else {
            None
        }
    }
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new(MonitorConfig::default())
    }
}

/// Two-level quality driven only by performance signals.
#[derive(Clone, Debug, Default)]
pub struct AdaptiveQuality {
    level: QualityLevel,
    monitor: PerformanceMonitor,
}

impl AdaptiveQuality {
    pub fn new(monitor: PerformanceMonitor) -> Self {
        Self {
            level: QualityLevel::default(),
            monitor,
        }
    }

    pub fn level(&self) -> QualityLevel {
        self.level
    }

    pub fn monitor(&self) -> &PerformanceMonitor {
        &self.monitor
    }

    /// Apply a signal. Returns the new level when it changed.
    pub fn apply(&mut self, signal: PerformanceSignal) -> Option<QualityLevel> {
        let next = match signal {
            PerformanceSignal::Incline => QualityLevel::High,
            PerformanceSignal::Decline => QualityLevel::Standard,
        };
        if next == self.level {
            return None;
        }
        log::info!(
            "[quality] {:?}: {} -> {} ({:.1}x)",
            signal,
            self.level.label(),
            next.label(),
            next.pixel_ratio()
        );
        self.level = next;
        Some(next)
    }

    /// Feed a frame time through the monitor and apply whatever it decides.
    pub fn record_frame(&mut self, dt: Duration) -> Option<QualityLevel> {
        let signal = self.monitor.record_frame(dt)?;
        self.apply(signal)
    }
}
