use embassy_time::{Duration, Instant};

/// Timing of an animation: first frame delay and frame interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    /// Time between `initialize` and the first frame
    pub start_delay: Duration,
    /// Time between two frames
    pub interval: Duration,
}

impl Cadence {
    pub const fn new(start_delay: Duration, interval: Duration) -> Self {
        Self {
            start_delay,
            interval,
        }
    }
}

/// Per-animation deadline tracking
///
/// Disarmed until [`arm`](Self::arm) is called; a disarmed timer is never due.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    cadence: Cadence,
    next_update: Option<Instant>,
}

impl FrameTimer {
    pub const fn new(cadence: Cadence) -> Self {
        Self {
            cadence,
            next_update: None,
        }
    }

    pub const fn cadence(&self) -> Cadence {
        self.cadence
    }

    /// Deadline of the next frame, `None` while disarmed
    pub const fn next_update(&self) -> Option<Instant> {
        self.next_update
    }

    /// Schedule the first frame one start delay after `now`
    pub fn arm(&mut self, now: Instant) {
        self.next_update = Some(now + self.cadence.start_delay);
    }

    pub fn disarm(&mut self) {
        self.next_update = None;
    }

    /// Check the deadline and re-arm it when it has passed
    ///
    /// The new deadline is one interval after `now` and always strictly later
    /// than the one that just expired.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_update {
            Some(deadline) if now >= deadline => {
                let interval = self.cadence.interval.max(Duration::from_ticks(1));
                self.next_update = Some(now + interval);
                true
            }
            _ => false,
        }
    }
}
