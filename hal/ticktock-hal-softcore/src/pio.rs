//! Parallel output port
//!
//! A PIO output core exposes a single data register; every bit drives one
//! output line.

use ticktock_hal::OutputRegister;

use crate::mmio::{Register, RegisterBlock};

/// Data register offset
const DATA: usize = 0x00;

/// Output-only PIO port
#[derive(Debug)]
pub struct PioOutput {
    data: Register,
}

impl PioOutput {
    /// Create a driver for the PIO at `base`
    ///
    /// # Safety
    ///
    /// `base` must be the address of a PIO core, and no other driver may
    /// write the same port.
    pub unsafe fn new(base: usize) -> Self {
        let block = RegisterBlock::new(base);
        Self {
            data: block.reg(DATA),
        }
    }

    /// Last value latched in the data register
    pub fn value(&self) -> u32 {
        self.data.read()
    }
}

impl OutputRegister for PioOutput {
    fn write(&mut self, value: u32) {
        self.data.write(value);
    }
}
