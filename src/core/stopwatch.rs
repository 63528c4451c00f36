use std::time::{Duration, Instant};

/// Wall-clock stopwatch for render and animation timings
#[derive(Debug)]
pub struct Stopwatch {
    started: Instant,
    last_lap: Instant,
}

impl Stopwatch {
    /// Create stopwatch starting now
    pub fn start() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_lap: now,
        }
    }

    /// Time since the stopwatch was started
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Time since the previous lap (or start) and begin a new lap
    pub fn lap(&mut self) -> Duration {
        let now = Instant::now();
        let delta = now.duration_since(self.last_lap);
        self.last_lap = now;
        delta
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}

/// Throughput in pixels per millisecond, guarding against sub-millisecond runs
pub fn pixels_per_ms(pixels: u64, elapsed: Duration) -> u64 {
    let ms = elapsed.as_millis().max(1) as u64;
    pixels / ms
}
