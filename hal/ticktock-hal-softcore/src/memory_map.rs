//! Board memory map
//!
//! Base addresses and interrupt lines as generated by the soft-core
//! system builder. Every peripheral is a block of 32-bit registers.

/// LED bank PIO
pub const LED_BASE: usize = 0x8000_1000;

/// 7-segment display PIO
pub const SEVENSEG_0_BASE: usize = 0x8000_1010;

/// UART 0
pub const UART_0_BASE: usize = 0x8000_2000;

/// External interrupt line of UART 0
pub const UART_0_IRQ: u8 = 2;

/// 64-bit timestamp timer
pub const TIMESTAMP_BASE: usize = 0x8000_3000;

/// Timestamp timer clock (system clock)
pub const TIMESTAMP_FREQ_HZ: u64 = 50_000_000;

/// External interrupt controller
pub const IRQ_BASE: usize = 0x8000_4000;

/// Number of external interrupt lines
pub const IRQ_LINES: usize = 32;
