use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// fixed period ticks. a late tick is not made up for.
pub struct Ticker {
    period: Duration,
    started: Instant,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            started: Instant::now(),
        }
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.period
            .saturating_sub(now.saturating_duration_since(self.started))
    }

    /// sleeps out the rest of the current tick.
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            sleep(remaining);
        }
        self.started = Instant::now();
    }
}
