use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Cancellable repeating timer that drives game ticks
///
/// At most one interval exists at a time: `start` drops the previous one
/// before arming the next, so two tick loops can never run side by side.
/// While cancelled, [`TickTimer::tick`] never resolves.
#[derive(Debug, Default)]
pub struct TickTimer {
    interval: Option<Interval>,
}

impl TickTimer {
    pub fn new() -> Self {
        Self { interval: None }
    }

    /// Arm the timer; the first tick fires one full period from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, period: Duration) {
        self.cancel();
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    pub fn cancel(&mut self) {
        self.interval = None;
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    pub fn period(&self) -> Option<Duration> {
        self.interval.as_ref().map(Interval::period)
    }

    /// Wait for the next tick
    pub async fn tick(&mut self) -> Instant {
        match self.interval.as_mut() {
            Some(interval) => interval.tick().await,
            None => std::future::pending().await,
        }
    }
}
