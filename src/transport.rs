//! Byte-oriented transport abstraction over the receiver's serial line.

/// A streaming duplex byte channel to the receiver. Hardware UART, software
/// serial, or an emulation — picked at construction time, not compile time.
///
/// `read_byte` is only called after `available()` reports true, so
/// implementations never need to block or signal an empty buffer.
pub trait Transport {
    /// True while at least one received byte is buffered.
    fn available(&mut self) -> bool;

    /// Pop the next buffered byte.
    fn read_byte(&mut self) -> u8;

    /// Queue one byte for transmission.
    fn write_byte(&mut self, byte: u8);

    /// Drain and discard everything currently buffered. Used to throw away
    /// a corrupted partial frame after a checksum failure.
    fn flush(&mut self) {
        while self.available() {
            let _ = self.read_byte();
        }
    }
}
