//! Lock-guarded snapshot of the latest decoded receiver data.
//!
//! One mutex guards the whole store, but it is only ever held for a single
//! field-group copy — never across a decode or a transport operation. The
//! reader task is the sole writer; any number of callers read.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::state::{DateFix, DateTimeFix, ErrorState, LocationFix, SharedState, SpeedSample, TimeFix};

/// Shared store of the most recent location, date/time, speed, and cycle
/// outcome. Each group commit is atomic; a whole-snapshot read between two
/// group commits of the same cycle may mix old and new groups, which is fine
/// because every group is independently meaningful.
pub struct Snapshot {
    inner: Mutex<CriticalSectionRawMutex, RefCell<SharedState>>,
}

impl Snapshot {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(SharedState::new())),
        }
    }

    /// Copy out the requested field groups and return the latest cycle
    /// outcome. Pass `None` to skip a group. The lock is taken once for the
    /// whole call, so the groups copied here are mutually consistent as of
    /// that instant.
    pub fn read(
        &self,
        location: Option<&mut LocationFix>,
        datetime: Option<&mut DateTimeFix>,
        speed: Option<&mut SpeedSample>,
    ) -> ErrorState {
        self.inner.lock(|cell| {
            let state = cell.borrow();
            if let Some(out) = location {
                *out = state.location;
            }
            if let Some(out) = datetime {
                *out = state.datetime;
            }
            if let Some(out) = speed {
                *out = state.speed;
            }
            state.error
        })
    }

    // Write path below is reserved for the reader task.

    pub(crate) fn commit_location(&self, fix: LocationFix) {
        self.inner.lock(|cell| cell.borrow_mut().location = fix);
    }

    pub(crate) fn commit_date(&self, date: DateFix) {
        self.inner.lock(|cell| {
            let mut state = cell.borrow_mut();
            state.datetime.day = date.day;
            state.datetime.month = date.month;
            state.datetime.year = date.year;
        });
    }

    pub(crate) fn commit_time(&self, time: TimeFix) {
        self.inner.lock(|cell| {
            let mut state = cell.borrow_mut();
            state.datetime.hour = time.hour;
            state.datetime.minute = time.minute;
            state.datetime.second = time.second;
        });
    }

    pub(crate) fn commit_speed(&self, speed: SpeedSample) {
        self.inner.lock(|cell| cell.borrow_mut().speed = speed);
    }

    pub(crate) fn set_error(&self, error: ErrorState) {
        self.inner.lock(|cell| cell.borrow_mut().error = error);
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}
