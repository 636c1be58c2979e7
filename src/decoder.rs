//! Sentence decoder abstraction.
//!
//! The driver core treats the NMEA/UBX parser as opaque: bytes go in, four
//! health counters and per-group "updated" flags come out. Sentence grammar
//! lives entirely behind this trait.

use crate::state::{DateFix, LocationFix, SpeedSample, TimeFix};

/// Incremental sentence decoder fed one byte at a time.
///
/// The `*_updated` flags report whether the group was refreshed by sentences
/// decoded since the flag was last queried; the getters return the most
/// recent decoded value. Counters are cumulative since decoder creation.
pub trait Decoder {
    fn feed(&mut self, byte: u8);

    /// Total bytes accepted by the decoder.
    fn chars_processed(&self) -> u32;

    /// Sentences that arrived complete but failed their checksum.
    fn failed_checksum(&self) -> u32;

    /// Sentences carrying a valid position lock.
    fn sentences_with_fix(&self) -> u32;

    fn location_updated(&self) -> bool;
    fn location(&self) -> LocationFix;

    fn date_updated(&self) -> bool;
    fn date(&self) -> DateFix;

    fn time_updated(&self) -> bool;
    fn time(&self) -> TimeFix;

    fn speed_updated(&self) -> bool;
    fn speed(&self) -> SpeedSample;
}
