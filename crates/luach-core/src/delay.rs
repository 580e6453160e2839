//! Randomized request jitter.
//!
//! Each fetch sleeps a uniformly random duration before the landing page
//! request and again before the PDF request.

use rand::Rng;
use std::time::Duration;

/// Inclusive range of sleep durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    min: Duration,
    max: Duration,
}

impl DelayRange {
    /// Range from `min` to `max` (swapped if given in the wrong order).
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Range from fractional seconds. Negative or NaN values count as zero;
    /// values too large for a `Duration` saturate.
    pub fn from_secs(min: f64, max: f64) -> Self {
        Self::new(secs(min), secs(max))
    }

    /// Never sleeps.
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    /// Picks a duration in `[min, max]`.
    pub fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        let lo = self.min.as_secs_f64();
        let hi = self.max.as_secs_f64();
        let picked = rand::thread_rng().gen_range(lo..=hi);
        Duration::try_from_secs_f64(picked).unwrap_or(self.max)
    }

    /// Sleeps for a sampled duration on the current thread and returns it.
    pub fn wait(&self) -> Duration {
        let d = self.sample();
        if !d.is_zero() {
            std::thread::sleep(d);
        }
        d
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        Self::new(Duration::from_secs(2), Duration::from_secs(5))
    }
}

fn secs(v: f64) -> Duration {
    if v.is_nan() || v <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(v).unwrap_or(Duration::MAX)
}
