//! Receive latch shared with the UART interrupt handler
//!
//! The interrupt handler is the only writer. Nothing in the foreground loop
//! reads the latch today, but the cell is atomic so a reader can be added
//! without introducing a data race.

use portable_atomic::{AtomicU8, Ordering};
use ticktock_hal::UartRx;

/// Value the latch holds before the first byte arrives
pub const RX_DEFAULT: u8 = b'0';

/// Single-byte receive cell
///
/// Lives in a `static` so a context-free interrupt handler can reach it.
#[derive(Debug)]
pub struct RxLatch {
    byte: AtomicU8,
}

impl Default for RxLatch {
    fn default() -> Self {
        Self::new(RX_DEFAULT)
    }
}

impl RxLatch {
    /// Create a latch holding `initial`
    pub const fn new(initial: u8) -> Self {
        Self {
            byte: AtomicU8::new(initial),
        }
    }

    /// Read one byte from `uart` into the latch
    ///
    /// This is the whole body of the receive interrupt: a single register
    /// read and a single store. Returns the byte for diagnostics.
    pub fn receive<R: UartRx>(&self, uart: &mut R) -> u8 {
        let byte = uart.read_byte();
        self.byte.store(byte, Ordering::Release);
        byte
    }

    /// Last byte received, or the initial value if none yet
    pub fn last(&self) -> u8 {
        self.byte.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock UART data register fed with synthetic receive events
    struct MockRx {
        pending: &'static [u8],
    }

    impl UartRx for MockRx {
        fn read_byte(&mut self) -> u8 {
            let (&first, rest) = self.pending.split_first().unwrap();
            self.pending = rest;
            first
        }
    }

    #[test]
    fn test_default_before_first_byte() {
        let latch = RxLatch::default();
        assert_eq!(latch.last(), b'0');
    }

    #[test]
    fn test_receive_latches_byte() {
        let latch = RxLatch::new(RX_DEFAULT);
        let mut uart = MockRx { pending: b"a" };

        assert_eq!(latch.receive(&mut uart), b'a');
        assert_eq!(latch.last(), b'a');
    }

    #[test]
    fn test_each_interrupt_reads_exactly_one_byte() {
        let latch = RxLatch::default();
        let mut uart = MockRx { pending: b"xyz" };

        latch.receive(&mut uart);
        assert_eq!(latch.last(), b'x');
        assert_eq!(uart.pending, b"yz");

        latch.receive(&mut uart);
        latch.receive(&mut uart);
        assert_eq!(latch.last(), b'z');
        assert!(uart.pending.is_empty());
    }

    #[test]
    fn test_static_latch() {
        static LATCH: RxLatch = RxLatch::new(RX_DEFAULT);
        let mut uart = MockRx { pending: b"\r" };

        LATCH.receive(&mut uart);
        assert_eq!(LATCH.last(), b'\r');
    }
}
