//! Reader state machine and the driver's public surface.
//!
//! One `GpsDriver` owns the snapshot store and the wake scheduler. The
//! application spawns `run()` (reader) and `run_scheduler()` (countdown) off
//! a shared `&'static GpsDriver` and calls `read()` from anywhere.

use embassy_time::Duration;

use crate::decoder::Decoder;
use crate::scheduler::WakeScheduler;
use crate::snapshot::Snapshot;
use crate::state::{DateTimeFix, ErrorState, LocationFix, SpeedSample};
use crate::transport::Transport;

/// Fewer decoded bytes than this after a cycle means the receiver is not
/// talking at all: a wiring or serial-config problem, not a reception one.
pub const MIN_THROUGHPUT_CHARS: u32 = 10;

/// Default decode cycle period.
pub const READ_PERIOD: Duration = Duration::from_millis(100);

/// Bounded wait on the wake signal; a lost signal degrades to this pace
/// instead of deadlocking the reader.
pub const WATCHDOG_TIMEOUT: Duration = Duration::from_millis(500);

/// The driver context: snapshot store, wake scheduler, timing.
///
/// `new()` is const so the context can live in a `static`, which is how the
/// reader task, the scheduler task, and foreground `read()` callers all see
/// the same instance without a global singleton baked into the crate.
pub struct GpsDriver {
    snapshot: Snapshot,
    scheduler: WakeScheduler,
    period: Duration,
    watchdog: Duration,
}

impl GpsDriver {
    pub const fn new() -> Self {
        Self::with_timing(READ_PERIOD, WATCHDOG_TIMEOUT)
    }

    pub const fn with_timing(period: Duration, watchdog: Duration) -> Self {
        Self {
            snapshot: Snapshot::new(),
            scheduler: WakeScheduler::new(),
            period,
            watchdog,
        }
    }

    /// Latest snapshot. Each output is optional; only requested groups are
    /// copied, under one brief lock acquisition. Returns the most recent
    /// cycle's outcome.
    pub fn read(
        &self,
        location: Option<&mut LocationFix>,
        datetime: Option<&mut DateTimeFix>,
        speed: Option<&mut SpeedSample>,
    ) -> ErrorState {
        self.snapshot.read(location, datetime, speed)
    }

    /// Reader task body: wake (or watchdog) → decode → classify → commit,
    /// forever. The scheduler is rearmed at both ends of the cycle so a slow
    /// decode cannot starve the watchdog. Degraded cycles are reported via
    /// [`ErrorState`], never propagated — acquisition resumes next period.
    pub async fn run<T: Transport, D: Decoder>(&self, transport: &mut T, decoder: &mut D) -> ! {
        self.scheduler.rearm(self.period);
        loop {
            self.scheduler.wait(self.watchdog).await;
            self.scheduler.rearm(self.period);
            self.service(transport, decoder);
            self.scheduler.rearm(self.period);
        }
    }

    /// Countdown task body; see [`WakeScheduler::run`].
    pub async fn run_scheduler(&self) -> ! {
        self.scheduler.run().await
    }

    /// One full decode/classify/commit cycle, synchronous.
    ///
    /// This is the whole state machine apart from the wake wait, and doubles
    /// as the caller-driven mode for single-threaded setups with no
    /// scheduler: call it at a steady rate and use the returned outcome
    /// directly.
    pub fn service<T: Transport, D: Decoder>(&self, transport: &mut T, decoder: &mut D) -> ErrorState {
        // Feed what is buffered right now, byte by byte. Small, frequent
        // batches keep streaming parsers healthy; the rest arrives next cycle.
        while transport.available() {
            decoder.feed(transport.read_byte());
        }

        let outcome = if decoder.chars_processed() < MIN_THROUGHPUT_CHARS {
            ErrorState::WiringOrSerial
        } else if decoder.failed_checksum() >= 1 {
            // Throw away the corrupted partial frame before the next cycle.
            transport.flush();
            ErrorState::DataInvalid
        } else if decoder.sentences_with_fix() < 1 {
            ErrorState::NoFix
        } else {
            self.commit(decoder);
            ErrorState::AllGood
        };

        #[cfg(feature = "defmt")]
        match outcome {
            ErrorState::WiringOrSerial => defmt::warn!("gps: no serial throughput"),
            ErrorState::DataInvalid => defmt::warn!("gps: checksum failures, buffer flushed"),
            ErrorState::NoFix => defmt::trace!("gps: waiting for fix"),
            ErrorState::AllGood => {}
        }

        // Unconditional, every cycle, as the last step.
        self.snapshot.set_error(outcome);
        outcome
    }

    /// Copy each field group the decoder marked updated this cycle. One lock
    /// acquisition per group; groups left unmarked keep their last committed
    /// value.
    fn commit<D: Decoder>(&self, decoder: &D) {
        if decoder.location_updated() {
            self.snapshot.commit_location(decoder.location());
        }
        if decoder.date_updated() {
            self.snapshot.commit_date(decoder.date());
        }
        if decoder.time_updated() {
            self.snapshot.commit_time(decoder.time());
        }
        if decoder.speed_updated() {
            self.snapshot.commit_speed(decoder.speed());
        }
    }
}

impl Default for GpsDriver {
    fn default() -> Self {
        Self::new()
    }
}
