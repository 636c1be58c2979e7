//! Mock transport and decoder shared by the unit tests.

use heapless::{Deque, Vec};

use crate::decoder::Decoder;
use crate::state::{DateFix, LocationFix, SpeedSample, TimeFix};
use crate::transport::Transport;

/// In-memory serial line: a receive queue to preload and a record of every
/// byte written plus every flush.
pub struct MockTransport {
    rx: Deque<u8, 256>,
    pub written: Vec<u8, 64>,
    pub flushes: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            rx: Deque::new(),
            written: Vec::new(),
            flushes: 0,
        }
    }

    pub fn push_rx(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.rx.push_back(b).unwrap();
        }
    }
}

impl Transport for MockTransport {
    fn available(&mut self) -> bool {
        !self.rx.is_empty()
    }

    fn read_byte(&mut self) -> u8 {
        self.rx.pop_front().unwrap_or(0)
    }

    fn write_byte(&mut self, byte: u8) {
        self.written.push(byte).unwrap();
    }

    fn flush(&mut self) {
        self.flushes += 1;
        self.rx.clear();
    }
}

/// Scriptable decoder: counters are public so tests can stage any health
/// signal, and `Some(value)` on a group plays the part of its updated flag.
pub struct MockDecoder {
    pub fed: usize,
    pub chars: u32,
    pub bad_checksums: u32,
    pub fix_sentences: u32,
    pub loc: Option<LocationFix>,
    pub date: Option<DateFix>,
    pub time: Option<TimeFix>,
    pub speed: Option<SpeedSample>,
}

impl MockDecoder {
    pub fn new() -> Self {
        Self {
            fed: 0,
            chars: 0,
            bad_checksums: 0,
            fix_sentences: 0,
            loc: None,
            date: None,
            time: None,
            speed: None,
        }
    }

    /// Stage a fresh decoder, as if the receiver just went quiet.
    pub fn reset_counters(&mut self) {
        self.chars = 0;
        self.bad_checksums = 0;
        self.fix_sentences = 0;
    }
}

impl Decoder for MockDecoder {
    fn feed(&mut self, _byte: u8) {
        self.fed += 1;
        self.chars += 1;
    }

    fn chars_processed(&self) -> u32 {
        self.chars
    }

    fn failed_checksum(&self) -> u32 {
        self.bad_checksums
    }

    fn sentences_with_fix(&self) -> u32 {
        self.fix_sentences
    }

    fn location_updated(&self) -> bool {
        self.loc.is_some()
    }

    fn location(&self) -> LocationFix {
        self.loc.unwrap_or_default()
    }

    fn date_updated(&self) -> bool {
        self.date.is_some()
    }

    fn date(&self) -> DateFix {
        self.date.unwrap_or_default()
    }

    fn time_updated(&self) -> bool {
        self.time.is_some()
    }

    fn time(&self) -> TimeFix {
        self.time.unwrap_or_default()
    }

    fn speed_updated(&self) -> bool {
        self.speed.is_some()
    }

    fn speed(&self) -> SpeedSample {
        self.speed.unwrap_or_default()
    }
}
