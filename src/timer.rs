use std::time::Duration;

use anyhow::{Result, ensure};
use tracing::debug;

use crate::constants::{PROGRESS_MAX, TICK_DELTA, TICK_INTERVAL};
use crate::controller::CarouselController;

/// Fixed-cadence timing source for a [`CarouselController`].
///
/// The ticker follows the controller's autoplay flag. It runs while autoplay is on and stops,
/// dropping any partial interval, as soon as autoplay is off. A slide change restarts the
/// interval, so the first tick after a navigation is a full `interval` away. Dropping a running
/// ticker cancels it.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    delta: f32,
    elapsed: Duration,
    running: bool,
    seen_changes: u64,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::unchecked(TICK_INTERVAL, TICK_DELTA)
    }
}

impl Ticker {
    /// Rejects a zero `interval` and a `delta` that is not a positive number.
    pub fn new(interval: Duration, delta: f32) -> Result<Self> {
        ensure!(!interval.is_zero(), "tick interval must be greater than zero");
        ensure!(delta.is_finite() && delta > 0.0, "tick delta must be a positive number, got {delta}");
        Ok(Self::unchecked(interval, delta))
    }

    fn unchecked(interval: Duration, delta: f32) -> Self {
        Self {
            interval,
            delta,
            elapsed: Duration::ZERO,
            running: false,
            seen_changes: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// How long a slide stays up when nobody touches the controls.
    pub fn dwell_time(&self) -> Duration {
        let ticks = (PROGRESS_MAX / self.delta).ceil() as u32;
        self.interval * ticks
    }

    /// Let `elapsed` time pass and fire every tick that falls due. Returns the number fired.
    pub fn drive<C>(&mut self, controller: &mut CarouselController<C>, elapsed: Duration) -> usize {
        if !controller.state().autoplay {
            self.cancel();
            return 0;
        }
        if !self.running {
            self.start(controller.slide_changes());
            return 0;
        }
        if controller.slide_changes() != self.seen_changes {
            // interval restarts on every slide change
            self.start(controller.slide_changes());
            return 0;
        }

        self.elapsed += elapsed;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
            if controller.tick(self.delta) {
                // progress was reset by the advance; start the new slide's interval from here
                self.seen_changes = controller.slide_changes();
            }
        }
        fired
    }

    pub fn cancel(&mut self) {
        if self.running {
            self.running = false;
            self.elapsed = Duration::ZERO;
            debug!("autoplay timer cancelled");
        }
    }

    fn start(&mut self, changes: u64) {
        if !self.running {
            debug!(interval_ms = self.interval.as_millis() as u64, "autoplay timer started");
        }
        self.running = true;
        self.elapsed = Duration::ZERO;
        self.seen_changes = changes;
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
