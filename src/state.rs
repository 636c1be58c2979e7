//! Shared data types for the driver core.
//!
//! All types are `Copy` so that snapshot reads and group commits are plain
//! memcpys under the lock.

// ── Field groups ──────────────────────────────────────────────────────────────

/// Last known position, decimal degrees. Zeroed until the first commit;
/// not a real fix until an `AllGood` cycle has landed one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LocationFix {
    pub lat: f32,
    pub lon: f32,
}

/// UTC date as reported by the receiver. Committed independently of the time
/// fields (the decoder may refresh them on different sentences).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateFix {
    pub day: u8,   // 1-31
    pub month: u8, // 1-12
    pub year: u16, // >= 2000
}

/// UTC time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeFix {
    pub hour: u8,   // 0-23
    pub minute: u8, // 0-59
    pub second: u8, // 0-59
}

/// Flat date + time aggregate held in the snapshot store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTimeFix {
    pub day: u8,
    pub month: u8,
    pub year: u16,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Ground speed, meters per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedSample {
    pub mps: f32,
}

// ── Cycle outcome ─────────────────────────────────────────────────────────────

/// Outcome of the most recent decode cycle. Overwritten every cycle; fix
/// values themselves stay sticky (last known good) even on a degraded cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorState {
    /// Stream present but corrupted (checksum mismatches).
    DataInvalid,
    /// Stream valid, receiver has no position lock yet. Also the initial
    /// state before the first cycle completes.
    #[default]
    NoFix,
    /// No meaningful byte throughput — disconnected or miswired transport.
    WiringOrSerial,
    /// The cycle produced trustworthy updates.
    AllGood,
}

// ── Aggregate ─────────────────────────────────────────────────────────────────

/// Everything the snapshot store guards behind its one lock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SharedState {
    pub location: LocationFix,
    pub datetime: DateTimeFix,
    pub speed: SpeedSample,
    pub error: ErrorState,
}

impl SharedState {
    pub const fn new() -> Self {
        Self {
            location: LocationFix { lat: 0.0, lon: 0.0 },
            datetime: DateTimeFix {
                day: 0,
                month: 0,
                year: 0,
                hour: 0,
                minute: 0,
                second: 0,
            },
            speed: SpeedSample { mps: 0.0 },
            error: ErrorState::NoFix,
        }
    }
}
