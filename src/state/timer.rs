//! Deadline-based timers for the game state machines.
//!
//! Times are monotonic milliseconds supplied by the host loop. A timer is a
//! plain value stored inside the phase that armed it: replacing the phase
//! drops the timer, so a cancelled timer can never fire.

/// One-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delay {
    deadline: u64,
}

impl Delay {
    pub fn after(now: u64, delay_ms: u64) -> Self {
        Self {
            deadline: now.saturating_add(delay_ms),
        }
    }

    pub fn deadline(&self) -> u64 {
        self.deadline
    }

    pub fn is_due(&self, now: u64) -> bool {
        now >= self.deadline
    }
}

/// Periodic timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    next_due: u64,
    period: u64,
}

impl Interval {
    /// First tick fires one `period` after `now`.
    pub fn starting_at(now: u64, period_ms: u64) -> Self {
        let period = period_ms.max(1);
        Self {
            next_due: now.saturating_add(period),
            period,
        }
    }

    /// Pops the oldest elapsed tick and returns its due time.
    ///
    /// Call repeatedly to catch up after a long gap; ticks come out in order.
    pub fn poll(&mut self, now: u64) -> Option<u64> {
        if now < self.next_due {
            return None;
        }
        let due = self.next_due;
        self.next_due = self.next_due.saturating_add(self.period);
        Some(due)
    }

    #[cfg(test)]
    pub fn next_due(&self) -> u64 {
        self.next_due
    }
}
