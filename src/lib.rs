//! Async driver core for u-blox style serial GPS receivers.
//!
//! A scheduler task paces a reader task, which drains the serial transport
//! into an opaque sentence decoder, classifies the cycle's health, and
//! commits freshly updated field groups into a lock-guarded snapshot that any
//! number of callers can read without blocking the reader.
//!
//! The two I/O seams are traits: [`Transport`] (byte-oriented serial line)
//! and [`Decoder`] (NMEA/UBX parser exposing health counters and per-group
//! updated flags). Spawn both task bodies off one `static` driver:
//!
//! ```ignore
//! static GPS: GpsDriver = GpsDriver::new();
//!
//! #[embassy_executor::task]
//! async fn gps_reader(mut uart: Serial, mut nmea: Nmea) -> ! {
//!     GPS.run(&mut uart, &mut nmea).await
//! }
//!
//! #[embassy_executor::task]
//! async fn gps_scheduler() -> ! {
//!     GPS.run_scheduler().await
//! }
//!
//! // Anywhere else:
//! let mut loc = LocationFix::default();
//! if GPS.read(Some(&mut loc), None, None) == ErrorState::AllGood {
//!     // loc is a real fix
//! }
//! ```
//!
//! Single-threaded setups can skip both tasks and drive
//! [`GpsDriver::service`] directly at a steady rate.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod decoder;
pub mod distance;
pub mod power;
pub mod reader;
pub mod scheduler;
pub mod snapshot;
pub mod state;
pub mod transport;

#[cfg(test)]
mod testutil;

pub use decoder::Decoder;
pub use distance::distance;
pub use power::{resume, suspend};
pub use reader::GpsDriver;
pub use scheduler::{WakeEvent, WakeScheduler};
pub use snapshot::Snapshot;
pub use state::{DateFix, DateTimeFix, ErrorState, LocationFix, SpeedSample, TimeFix};
pub use transport::Transport;
