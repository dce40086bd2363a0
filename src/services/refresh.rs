use std::time::{Duration, Instant};

use chrono::Utc;

use crate::errors::{FeederError, FeederResult};
use crate::services::{FetchService, FilterController};
use crate::sources::FeedApi;

/// One aggregation cycle: fetch everything, then replace the retained set.
/// The active filter stays selected and applies to the new items.
pub fn refresh_cycle<A: FeedApi>(fetch_service: &FetchService<A>, controller: &mut FilterController) {
    let started = Instant::now();
    tracing::info!(
        sources = fetch_service.registry().len(),
        filter = %controller.filter(),
        "refresh cycle started"
    );

    let outcome = fetch_service.aggregate(Utc::now());
    let failed = outcome.failed_sources.len();
    let is_demo = outcome.is_demo;
    controller.replace(outcome);

    tracing::info!(
        items = controller.items().len(),
        visible = controller.visible().len(),
        failed,
        demo = is_demo,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "refresh cycle finished"
    );
}

/// Fixed-interval driver for refresh cycles.
///
/// Cycles run one after another on the calling thread, so two cycles never overlap.
/// Ticks fall at `start + k * interval`; ticks that pass while a cycle is still
/// running are dropped rather than queued.
#[derive(Debug, Clone)]
pub struct RefreshLoop {
    interval: Duration,
    max_cycles: Option<usize>,
}

impl RefreshLoop {
    pub fn new(interval: Duration) -> FeederResult<Self> {
        if interval.is_zero() {
            return Err(FeederError::InvalidInput(
                "Refresh interval must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            interval,
            max_cycles: None,
        })
    }

    /// Stop after `max_cycles` cycles instead of running forever
    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = max_cycles;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run `cycle` now and then on every tick; returns the number of completed cycles.
    /// An error from `cycle` stops the loop.
    pub fn run<F>(&self, mut cycle: F) -> FeederResult<usize>
    where
        F: FnMut(usize) -> FeederResult<()>,
    {
        let start = Instant::now();
        let mut tick: u64 = 0;
        let mut completed = 0;

        loop {
            if self.max_cycles.is_some_and(|max| completed >= max) {
                break;
            }

            cycle(completed)?;
            completed += 1;

            if self.max_cycles.is_some_and(|max| completed >= max) {
                break;
            }

            let next = next_tick(start.elapsed(), self.interval, tick);
            let skipped = next - tick - 1;
            if skipped > 0 {
                tracing::warn!(skipped, "refresh cycle overran the interval, skipping ticks");
            }
            tick = next;

            let deadline = start + tick_offset(self.interval, tick);
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            }
        }

        Ok(completed)
    }
}

/// First tick after `current` whose scheduled time has not yet passed at `elapsed`
pub fn next_tick(elapsed: Duration, interval: Duration, current: u64) -> u64 {
    let passed = (elapsed.as_nanos() / interval.as_nanos().max(1)) as u64;
    (current + 1).max(passed + 1)
}

fn tick_offset(interval: Duration, tick: u64) -> Duration {
    let nanos = interval.as_nanos().saturating_mul(tick as u128);
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}
