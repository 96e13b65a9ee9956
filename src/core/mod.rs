use std::time::Instant;

/// Longest frame delta handed to the simulation; anything above this
/// (debugger pause, window drag) is treated as one long frame.
const MAX_DELTA: f32 = 0.25;

pub struct Timer {
    start: Instant,
    last_update: Instant,
}

impl Timer {
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_update: now,
        }
    }

    /// Seconds since the previous `delta` call, capped at `MAX_DELTA`.
    pub fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_update).as_secs_f32();
        self.last_update = now;
        delta.min(MAX_DELTA)
    }

    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
