//! Counting animation: the sequence of intermediate values a statistic
//! passes through on its way from `from` to `to`.
//!
//! The UI only paces the frames; which values appear is decided here so it
//! can be tested without a clock.

use std::time::Duration;

/// Produces the intermediate values of a counting animation.
pub trait Counter {
    /// Values to display, in order. The last value is exactly `to`.
    fn frames(&self, from: f64, to: f64, duration: Duration) -> Vec<f64>;

    /// Delay between two consecutive frames.
    fn frame_interval(&self) -> Duration;
}

/// Progress curve applied to the animation's normalized time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Fast start, gentle landing.
    #[default]
    EaseOutCubic,
}

impl Easing {
    /// Map `t` in `[0, 1]` to progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Fixed-rate counter with an easing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasedCounter {
    pub frame_interval: Duration,
    pub easing: Easing,
}

impl Default for EasedCounter {
    /// Roughly 60 frames per second, ease-out.
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            easing: Easing::EaseOutCubic,
        }
    }
}

/// Shortest delay between frames; smaller configured intervals are raised to it.
pub const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(1);

/// Upper bound on the frames of one animation.
pub const MAX_FRAMES: u32 = 10_000;

impl EasedCounter {
    fn effective_interval(&self) -> Duration {
        self.frame_interval.max(MIN_FRAME_INTERVAL)
    }

    fn frame_count(&self, duration: Duration) -> u32 {
        let interval = self.effective_interval().as_nanos();
        let frames = duration.as_nanos().div_ceil(interval);
        u32::try_from(frames).unwrap_or(MAX_FRAMES).clamp(1, MAX_FRAMES)
    }
}

impl Counter for EasedCounter {
    fn frames(&self, from: f64, to: f64, duration: Duration) -> Vec<f64> {
        let n = self.frame_count(duration);
        let span = to - from;
        (1..=n)
            .map(|i| {
                if i == n {
                    to
                } else {
                    from + span * self.easing.apply(f64::from(i) / f64::from(n))
                }
            })
            .collect()
    }

    fn frame_interval(&self) -> Duration {
        self.effective_interval()
    }
}
