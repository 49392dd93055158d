use std::time::Instant;

/// Monotonic millisecond clock anchored at the logic thread's start.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self::from_origin(Instant::now())
    }

    pub fn from_origin(origin: Instant) -> Self {
        Self { origin }
    }

    pub fn now(&self) -> u64 {
        self.millis_at(Instant::now())
    }

    /// Milliseconds from the origin to `at`. Instants before the origin map to 0.
    pub fn millis_at(&self, at: Instant) -> u64 {
        let elapsed = at.saturating_duration_since(self.origin);
        u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
