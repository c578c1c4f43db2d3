//! UART data port
//!
//! The UART core transmits whatever is written to its data register and
//! presents the last received byte when the same register is read. There
//! is no transmit-ready handshake at this level: writes are
//! fire-and-forget.

use ticktock_hal::{UartRx, UartTx};

use crate::mmio::{Register, RegisterBlock};

/// Data register offset (write: transmit, read: last received byte)
const DATA: usize = 0x00;
/// Control register offset
const CONTROL: usize = 0x04;

/// Control bit: raise an interrupt when a byte has been received
pub const CONTROL_IRRDY: u32 = 1 << 7;

/// UART data port
#[derive(Debug)]
pub struct UartData {
    data: Register,
    control: Register,
}

impl UartData {
    /// Create a driver for the UART at `base`
    ///
    /// # Safety
    ///
    /// `base` must be the address of a UART core. Several handles to the
    /// same UART may coexist only if each confines itself to one
    /// direction (e.g. the receive interrupt handler only reads).
    pub unsafe fn new(base: usize) -> Self {
        let block = RegisterBlock::new(base);
        Self {
            data: block.reg(DATA),
            control: block.reg(CONTROL),
        }
    }

    /// Enable the receive-ready interrupt
    pub fn enable_rx_interrupt(&mut self) {
        self.control.set_bits(CONTROL_IRRDY);
    }

    /// Disable the receive-ready interrupt
    pub fn disable_rx_interrupt(&mut self) {
        self.control.clear_bits(CONTROL_IRRDY);
    }

    /// Check if the receive-ready interrupt is enabled
    pub fn is_rx_interrupt_enabled(&self) -> bool {
        self.control.read() & CONTROL_IRRDY != 0
    }
}

impl UartTx for UartData {
    fn write_byte(&mut self, byte: u8) {
        self.data.write(u32::from(byte));
    }
}

impl UartRx for UartData {
    fn read_byte(&mut self) -> u8 {
        (self.data.read() & 0xFF) as u8
    }
}
