//! UART data port abstractions
//!
//! The exerciser talks to the UART through a single data register, one
//! byte at a time, with no flow control.

/// UART transmitter
pub trait UartTx {
    /// Write a single byte to the data register
    fn write_byte(&mut self, byte: u8);

    /// Write every byte of `data` in order
    fn write_all(&mut self, data: &[u8]) {
        for &byte in data {
            self.write_byte(byte);
        }
    }
}

/// UART receiver
pub trait UartRx {
    /// Read one byte from the data register
    fn read_byte(&mut self) -> u8;
}
