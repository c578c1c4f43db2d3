//! Peripheral drivers for the RISC-V soft-core board
//!
//! Every peripheral on the board is a handful of 32-bit registers at a
//! fixed address (see [`memory_map`]). The drivers here are thin volatile
//! wrappers implementing the `ticktock-hal` traits:
//!
//! - [`pio::PioOutput`] - LED bank and 7-segment display
//! - [`uart::UartData`] - UART data register (transmit and receive)
//! - [`timer::Timestamp`] - 64-bit free-running timestamp counter
//! - [`irq::InterruptController`] - external interrupt lines and their
//!   handler table
//!
//! Use [`Board::take`] to obtain the peripherals exactly once.

#![cfg_attr(not(test), no_std)]

pub mod irq;
pub mod memory_map;
pub mod mmio;
pub mod pio;
pub mod timer;
pub mod uart;

use portable_atomic::{AtomicBool, Ordering};

use crate::irq::{HandlerTable, InterruptController};
use crate::pio::PioOutput;
use crate::timer::Timestamp;
use crate::uart::UartData;

/// Handler table serviced by the board's external interrupt trap
pub static BOARD_HANDLERS: HandlerTable = HandlerTable::new();

/// Set once the board peripherals have been handed out
static TAKEN: AtomicBool = AtomicBool::new(false);

/// All peripherals of the board
pub struct Board {
    /// Timestamp timer
    pub timer: Timestamp,
    /// LED bank
    pub leds: PioOutput,
    /// 7-segment display (one BCD digit per nibble)
    pub sevenseg: PioOutput,
    /// UART 0 data port
    pub uart: UartData,
    /// External interrupt controller
    pub irq: InterruptController,
}

impl Board {
    /// Take the board peripherals
    ///
    /// Returns `None` if they were already taken.
    pub fn take() -> Option<Self> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            None
        } else {
            // SAFETY: first and only hand-out of the board singletons.
            Some(unsafe { Self::steal() })
        }
    }

    /// Build the peripherals without checking whether they were taken
    ///
    /// # Safety
    ///
    /// The caller must not create a second owner of a peripheral that is
    /// still driven elsewhere.
    pub unsafe fn steal() -> Self {
        use memory_map::*;

        Self {
            timer: Timestamp::new(TIMESTAMP_BASE, TIMESTAMP_FREQ_HZ),
            leds: PioOutput::new(LED_BASE),
            sevenseg: PioOutput::new(SEVENSEG_0_BASE),
            uart: UartData::new(UART_0_BASE),
            irq: InterruptController::new(IRQ_BASE, &BOARD_HANDLERS),
        }
    }
}
