use std::time::{Duration, Instant};

/// A cancellable periodic deadline, driven by the runtime event loop.
///
/// A `Ticker` holds no thread and does no sleeping of its own: the loop asks
/// it how many ticks are due at a given instant. Cancelled tickers never
/// fire, and cancelling twice is a no-op.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Arm the ticker. Already-running tickers keep their current deadline.
    pub fn start(&mut self, now: Instant) {
        if !self.is_active() {
            self.next_due = Some(now + self.interval);
        }
    }

    /// Disarm the ticker. Idempotent.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of ticks due at `now`, advancing the deadline past it. A loop
    /// iteration that ran late catches up on the missed ticks here.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };

        let mut fired = 0;
        while due <= now {
            fired += 1;
            due += self.interval;
        }
        self.next_due = Some(due);
        fired
    }
}
