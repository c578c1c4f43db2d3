//! Timestamp timer
//!
//! A 64-bit counter clocked from the system clock. Starting it resets the
//! count to zero. The identification register reads zero when the core is
//! not present in the system, which is how a missing timer is detected.

use ticktock_hal::{Ticks, TicksPerSecond, TimestampTimer};

use crate::mmio::{Register, RegisterBlock};

/// Identification register offset
const ID: usize = 0x00;
/// Control register offset
const CONTROL: usize = 0x04;
/// Counter low word offset
const COUNT_LO: usize = 0x08;
/// Counter high word offset
const COUNT_HI: usize = 0x0C;

/// Control bit: counter runs
pub const CONTROL_RUN: u32 = 1 << 0;
/// Control bit: reset the counter to zero (self-clearing)
pub const CONTROL_RESET: u32 = 1 << 1;

/// Errors reported by the timestamp timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// No timestamp core answers at the configured address
    NotPresent,
}

/// Timestamp timer driver
#[derive(Debug)]
pub struct Timestamp {
    id: Register,
    control: Register,
    count_lo: Register,
    count_hi: Register,
    frequency: TicksPerSecond,
}

impl Timestamp {
    /// Create a driver for the timer at `base`, clocked at `frequency`
    ///
    /// # Safety
    ///
    /// `base` must be the address of the timestamp block (or of memory
    /// standing in for it), owned exclusively by this driver.
    pub unsafe fn new(base: usize, frequency: TicksPerSecond) -> Self {
        let block = RegisterBlock::new(base);
        Self {
            id: block.reg(ID),
            control: block.reg(CONTROL),
            count_lo: block.reg(COUNT_LO),
            count_hi: block.reg(COUNT_HI),
            frequency,
        }
    }

    /// Check if a timer core is present
    pub fn is_present(&self) -> bool {
        self.id.read() != 0
    }

    /// Check if the counter is running
    pub fn is_running(&self) -> bool {
        self.control.read() & CONTROL_RUN != 0
    }
}

impl TimestampTimer for Timestamp {
    type Error = TimerError;

    fn start(&mut self) -> Result<(), TimerError> {
        if !self.is_present() {
            return Err(TimerError::NotPresent);
        }
        self.control.write(CONTROL_RESET | CONTROL_RUN);
        Ok(())
    }

    fn now(&self) -> Ticks {
        // Re-read until the high word is stable across the low word read.
        loop {
            let hi = self.count_hi.read();
            let lo = self.count_lo.read();
            if self.count_hi.read() == hi {
                return (u64::from(hi) << 32) | u64::from(lo);
            }
        }
    }

    fn frequency(&self) -> TicksPerSecond {
        self.frequency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer(mem: &mut [u32; 4]) -> Timestamp {
        unsafe { Timestamp::new(mem.as_mut_ptr() as usize, 50_000_000) }
    }

    #[test]
    fn test_missing_timer() {
        let mut mem = [0u32; 4];
        let mut t = timer(&mut mem);

        assert!(!t.is_present());
        assert_eq!(t.start(), Err(TimerError::NotPresent));
        assert!(!t.is_running());
    }

    #[test]
    fn test_start_sets_run_and_reset() {
        let mut mem = [0x7154_0001u32, 0, 0, 0];
        let mut t = timer(&mut mem);

        assert_eq!(t.start(), Ok(()));
        assert!(t.is_running());
        assert_eq!(mem[1], CONTROL_RESET | CONTROL_RUN);
    }

    #[test]
    fn test_now_combines_words() {
        let mut mem = [1u32, 0, 0x8000_0000, 0x0000_0002];
        let t = timer(&mut mem);

        assert_eq!(t.now(), 0x0000_0002_8000_0000);
        assert_eq!(t.frequency(), 50_000_000);
    }
}
