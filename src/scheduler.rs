//! Self-paced wake scheduler for the reader task.
//!
//! A countdown task posts one coalesced wake notification per expiry; the
//! reader rearms the countdown at the start and end of every decode cycle so
//! a long cycle cannot pile up wakes. The signalling side never blocks,
//! allocates, or touches the snapshot lock, so `rearm` is safe from a
//! restricted (interrupt-like) context.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};

/// Why the reader woke up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeEvent {
    /// The scheduler's countdown expired.
    Signal,
    /// No wake arrived within the watchdog bound; the reader proceeds anyway
    /// to guarantee liveness.
    Watchdog,
}

/// Periodic wake source with coalesced notification.
///
/// `Signal` keeps at most one pending value, which gives both sides the
/// contract we need for free: duplicate expiries collapse into one wake, and
/// a rearm landing mid-countdown simply restarts it.
pub struct WakeScheduler {
    wake: Signal<CriticalSectionRawMutex, ()>,
    rearm: Signal<CriticalSectionRawMutex, Duration>,
}

impl WakeScheduler {
    pub const fn new() -> Self {
        Self {
            wake: Signal::new(),
            rearm: Signal::new(),
        }
    }

    /// Start (or restart) the countdown. Non-blocking.
    pub fn rearm(&self, period: Duration) {
        self.rearm.signal(period);
    }

    /// Countdown task body. After each expiry the scheduler waits for the
    /// next `rearm` before counting again. It paces the reader; it never
    /// free-runs ahead of it.
    pub async fn run(&self) -> ! {
        let mut period = self.rearm.wait().await;
        loop {
            match select(self.rearm.wait(), Timer::after(period)).await {
                Either::First(next) => period = next,
                Either::Second(()) => {
                    self.wake.signal(());
                    period = self.rearm.wait().await;
                }
            }
        }
    }

    /// Consumer side: resolve on the wake signal or after `watchdog`,
    /// whichever comes first.
    pub async fn wait(&self, watchdog: Duration) -> WakeEvent {
        match select(self.wake.wait(), Timer::after(watchdog)).await {
            Either::First(()) => WakeEvent::Signal,
            Either::Second(()) => WakeEvent::Watchdog,
        }
    }
}

impl Default for WakeScheduler {
    fn default() -> Self {
        Self::new()
    }
}
