use log::debug;
use rand::Rng;
use std::thread;
use std::time::Duration;

/// Bounds, in seconds, for a pause between requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayRange {
    pub min_secs: f64,
    pub max_secs: f64,
}

impl DelayRange {
    pub const fn new(min_secs: f64, max_secs: f64) -> Self {
        Self { min_secs, max_secs }
    }
}

/// Rate-limiting policy applied between network calls. Pauses block the caller.
pub trait Pacer {
    fn pause(&self, range: DelayRange);
}

/// Never sleeps.
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&self, _range: DelayRange) {}
}

/// Sleeps the same duration every time, ignoring the range.
pub struct FixedDelay(pub Duration);

impl Pacer for FixedDelay {
    fn pause(&self, _range: DelayRange) {
        debug!("Waiting for {:.2} seconds...", self.0.as_secs_f64());
        thread::sleep(self.0);
    }
}

/// Sleeps a uniformly random duration within the range.
pub struct UniformDelay;

impl UniformDelay {
    fn pick(range: DelayRange) -> Duration {
        if range.max_secs <= range.min_secs {
            return Duration::from_secs_f64(range.min_secs.max(0.0));
        }
        let secs = rand::thread_rng().gen_range(range.min_secs..=range.max_secs);
        Duration::from_secs_f64(secs.max(0.0))
    }
}

impl Pacer for UniformDelay {
    fn pause(&self, range: DelayRange) {
        let delay = Self::pick(range);
        debug!("Waiting for {:.2} seconds...", delay.as_secs_f64());
        thread::sleep(delay);
    }
}
