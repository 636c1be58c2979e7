//! Receiver RF power control.
//!
//! Two fixed UBX configuration frames, reproduced byte for byte (header,
//! class/id 0x06 0x04, length, payload, checksum). Fire-and-forget: the
//! receiver's reply, if any, is left in the stream for the decoder.

use embassy_time::{Duration, Timer};

use crate::transport::Transport;

/// RF warm-up time after a wake command.
pub const RESUME_SETTLE: Duration = Duration::from_millis(100);

/// Turn OFF the RF section. Only worth it for sleep cycles longer than ~30 s.
const RF_OFF: [u8; 12] = [
    0xB5, 0x62, 0x06, 0x04, 0x04, 0x00, 0x00, 0x00, 0x08, 0x00, 0x16, 0x74,
];

/// Turn ON the RF section.
const RF_ON: [u8; 12] = [
    0xB5, 0x62, 0x06, 0x04, 0x04, 0x00, 0x00, 0x00, 0x09, 0x00, 0x17, 0x76,
];

fn send<T: Transport>(transport: &mut T, frame: &[u8]) {
    for &byte in frame {
        transport.write_byte(byte);
    }
}

/// Suspend the receiver's RF section. Stateless and idempotent.
pub fn suspend<T: Transport>(transport: &mut T) {
    send(transport, &RF_OFF);
}

/// Wake the receiver's RF section, then hold for the fixed settle delay so a
/// power-sensitive follow-up operation sees a warmed-up receiver.
pub async fn resume<T: Transport>(transport: &mut T) {
    send(transport, &RF_ON);
    Timer::after(RESUME_SETTLE).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockTransport;
    use embassy_futures::block_on;
    use embassy_time::Instant;

    #[test]
    fn suspend_frame_is_bit_exact() {
        let mut transport = MockTransport::new();
        suspend(&mut transport);
        assert_eq!(
            transport.written.as_slice(),
            [0xB5, 0x62, 0x06, 0x04, 0x04, 0x00, 0x00, 0x00, 0x08, 0x00, 0x16, 0x74].as_slice()
        );
    }

    #[test]
    fn resume_frame_is_bit_exact_and_settles() {
        let mut transport = MockTransport::new();
        let before = Instant::now();
        block_on(resume(&mut transport));
        assert!(Instant::now() - before >= RESUME_SETTLE);
        assert_eq!(
            transport.written.as_slice(),
            [0xB5, 0x62, 0x06, 0x04, 0x04, 0x00, 0x00, 0x00, 0x09, 0x00, 0x17, 0x76].as_slice()
        );
    }

    #[test]
    fn suspend_is_idempotent_on_the_wire() {
        let mut transport = MockTransport::new();
        suspend(&mut transport);
        suspend(&mut transport);
        assert_eq!(transport.written.len(), 24);
        assert_eq!(&transport.written[..12], &transport.written[12..]);
    }
}
